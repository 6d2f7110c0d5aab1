use std::any::type_name;

use veritype_registry::Describe;

use crate::equals::require_equivalent;
use crate::error::{ContractViolation, VerifyError};
use crate::factory::EquivalentFactory;

/// Checks that `Debug` output is non-empty and stable, and that clones of one
/// template render identically.
#[derive(Debug, Clone, Copy)]
pub struct FormatVerifier {
	repetitions: usize,
}

impl FormatVerifier {
	pub fn new(repetitions: usize) -> Self {
		Self { repetitions }
	}

	pub fn verify<T, F>(&self, factory: &F) -> Result<(), VerifyError>
	where
		T: Describe,
		F: EquivalentFactory<T> + ?Sized,
	{
		let type_name = type_name::<T>();
		let a = factory.make()?;
		let b = factory.make()?;
		require_equivalent(&a, &b)?;

		let first = format!("{a:?}");
		if first.is_empty() {
			return Err(ContractViolation::FormatEmpty { type_name }.into());
		}
		let second = format!("{b:?}");
		// Independently built equal values may order unordered collections
		// differently, so only template clones must render identically.
		if factory.clones_template() && first != second {
			return Err(ContractViolation::FormatMismatch {
				type_name,
				first,
				second,
			}
			.into());
		}
		for repetition in 0..self.repetitions {
			if format!("{a:?}") != first {
				return Err(ContractViolation::FormatUnstable { type_name, repetition }.into());
			}
		}

		tracing::trace!(ty = type_name, "format contract holds");
		Ok(())
	}
}
