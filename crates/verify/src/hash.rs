use std::any::type_name;
use std::hash::{BuildHasher, Hash};

use rustc_hash::FxBuildHasher;
use veritype_registry::Describe;

use crate::equals::require_equivalent;
use crate::error::{ContractViolation, VerifyError};
use crate::factory::EquivalentFactory;

/// Checks that `Hash` agrees with `PartialEq` and is stable.
#[derive(Debug, Clone, Copy)]
pub struct HashVerifier {
	repetitions: usize,
}

impl HashVerifier {
	pub fn new(repetitions: usize) -> Self {
		Self { repetitions }
	}

	pub fn verify<T, F>(&self, factory: &F) -> Result<(), VerifyError>
	where
		T: Describe + Hash,
		F: EquivalentFactory<T> + ?Sized,
	{
		let type_name = type_name::<T>();
		let a = factory.make()?;
		let b = factory.make()?;
		require_equivalent(&a, &b)?;

		let hash = FxBuildHasher.hash_one(&a);
		if hash != FxBuildHasher.hash_one(&b) {
			return Err(ContractViolation::HashMismatch { type_name }.into());
		}
		for repetition in 0..self.repetitions {
			if FxBuildHasher.hash_one(&a) != hash {
				return Err(ContractViolation::HashUnstable { type_name, repetition }.into());
			}
		}

		tracing::trace!(ty = type_name, hash, "hash contract holds");
		Ok(())
	}
}
