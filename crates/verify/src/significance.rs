//! Property significance.
//!
//! For each property not ignored: make two equal instances, replace the
//! property on one of them with a freshly resolved value, and check that
//! equality reacts as declared.
//!
//! - Significant property: the instances must now differ, unless the new
//!   value happens to equal the old one (nothing can be concluded then).
//! - Insignificant property: the instances must stay equal. There is no
//!   escape hatch in this direction.

use std::any::type_name;

use veritype_registry::{Bean, Property};

use crate::equals::{EqualsVerifier, require_equivalent};
use crate::error::{ContractViolation, PreconditionViolation, VerifyError};
use crate::factory::EquivalentFactory;

impl EqualsVerifier<'_> {
	/// Checks every non-ignored property of `T` against the declared
	/// insignificant set.
	pub fn verify_significance<T, F>(&self, factory: &F) -> Result<(), VerifyError>
	where
		T: Bean,
		F: EquivalentFactory<T> + ?Sized,
	{
		self.settings.check_names::<T>()?;
		for property in T::properties() {
			if self.settings.is_ignored(property.name()) {
				continue;
			}
			self.check_property(&property, factory)?;
		}
		Ok(())
	}

	fn check_property<T, F>(&self, property: &Property<T>, factory: &F) -> Result<(), VerifyError>
	where
		T: Bean,
		F: EquivalentFactory<T> + ?Sized,
	{
		let type_name = type_name::<T>();
		let name = property.name();

		let a = factory.make()?;
		let mut b = factory.make()?;
		require_equivalent(&a, &b)?;

		let original = property.get(&b);
		if property.get(&a) != original {
			return Err(PreconditionViolation::PropertyMismatch {
				type_name,
				property: name,
				first: format!("{:?}", property.get(&a)),
				second: format!("{original:?}"),
			}
			.into());
		}

		let provider = self
			.strategy
			.get_provider(name, property.descriptor(), Some(self.settings.overrides()))?;
		let changed = provider.provide()?;
		let differs = changed != original;
		property.set(&mut b, changed)?;

		if self.settings.is_insignificant(name) {
			if a != b {
				return Err(ContractViolation::Insignificant {
					type_name,
					property: name,
				}
				.into());
			}
		} else if !differs {
			tracing::trace!(ty = type_name, property = name, "generated value equals original; skipping");
		} else if a == b {
			return Err(ContractViolation::Significant {
				type_name,
				property: name,
			}
			.into());
		}

		tracing::trace!(ty = type_name, property = name, "significance holds");
		Ok(())
	}
}
