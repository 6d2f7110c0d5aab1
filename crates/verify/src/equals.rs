//! Equality laws.
//!
//! Every law is checked on freshly produced instances from an
//! [`EquivalentFactory`]. The factory itself is checked first: if two of its
//! instances are not equal, a [`PreconditionViolation`] is reported and no law
//! runs.

use std::any::type_name;

use veritype_registry::{Describe, ResolutionStrategy, Value};

use crate::config::Settings;
use crate::error::{ContractViolation, PreconditionViolation, VerifyError};
use crate::factory::EquivalentFactory;

/// Number of repeated comparisons in the consistency law.
const CONSISTENCY_REPETITIONS: usize = 8;

/// Value of a type no caller can describe; used by the foreign-type law.
#[derive(Debug, Clone, PartialEq)]
struct Foreign;

/// Checks `PartialEq` laws and property significance.
pub struct EqualsVerifier<'a> {
	pub(crate) strategy: &'a dyn ResolutionStrategy,
	pub(crate) settings: &'a Settings,
}

impl<'a> EqualsVerifier<'a> {
	pub fn new(strategy: &'a dyn ResolutionStrategy, settings: &'a Settings) -> Self {
		Self { strategy, settings }
	}

	/// Checks reflexivity, symmetry, transitivity, consistency, `!=`
	/// agreement, and inequality with the absent value and foreign types.
	#[allow(
		clippy::eq_op,
		clippy::nonminimal_bool,
		reason = "self-comparison and `!=` against `==` are the laws under test"
	)]
	pub fn verify_laws<T, F>(&self, factory: &F) -> Result<(), VerifyError>
	where
		T: Describe,
		F: EquivalentFactory<T> + ?Sized,
	{
		let type_name = type_name::<T>();
		let a = factory.make()?;
		let b = factory.make()?;
		let c = factory.make()?;
		require_equivalent(&a, &b)?;
		require_equivalent(&b, &c)?;

		if a != a {
			return Err(ContractViolation::Reflexive {
				type_name,
				instance: format!("{a:?}"),
			}
			.into());
		}
		if (a == b) != (b == a) {
			return Err(ContractViolation::Symmetric { type_name }.into());
		}
		if a == b && b == c && a != c {
			return Err(ContractViolation::Transitive { type_name }.into());
		}

		let first = a == b;
		for repetition in 0..CONSISTENCY_REPETITIONS {
			if (a == b) != first {
				return Err(ContractViolation::Consistent { type_name, repetition }.into());
			}
		}

		if (a != b) == (a == b) {
			return Err(ContractViolation::NotEqualInconsistent { type_name }.into());
		}

		let erased = Value::new(a.clone());
		if erased == Value::absent() {
			return Err(ContractViolation::EqualsAbsent { type_name }.into());
		}
		if erased == Value::new(Foreign) {
			return Err(ContractViolation::EqualsForeignType { type_name }.into());
		}

		tracing::trace!(ty = type_name, "equality laws hold");
		Ok(())
	}
}

/// Precondition shared by every verifier: two factory instances are equal.
pub(crate) fn require_equivalent<T: Describe>(a: &T, b: &T) -> Result<(), PreconditionViolation> {
	if a == b {
		return Ok(());
	}
	Err(PreconditionViolation::NotEquivalent {
		type_name: type_name::<T>(),
		first: format!("{a:?}"),
		second: format!("{b:?}"),
	})
}
