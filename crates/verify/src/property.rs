use std::any::type_name;

use veritype_registry::{Bean, ResolutionStrategy};

use crate::config::Settings;
use crate::error::{ContractViolation, VerifyError};

/// Sets a generated value through each property's setter and reads it back.
pub struct PropertyVerifier<'a> {
	strategy: &'a dyn ResolutionStrategy,
	settings: &'a Settings,
}

impl<'a> PropertyVerifier<'a> {
	pub fn new(strategy: &'a dyn ResolutionStrategy, settings: &'a Settings) -> Self {
		Self { strategy, settings }
	}

	pub fn verify<T: Bean>(&self) -> Result<(), VerifyError> {
		let type_name = type_name::<T>();
		for property in T::properties() {
			let name = property.name();
			if self.settings.is_ignored(name) {
				continue;
			}

			let provider = self
				.strategy
				.get_provider(name, property.descriptor(), Some(self.settings.overrides()))?;
			let expected = provider.provide()?;

			let mut target = T::default();
			property.set(&mut target, expected.clone())?;
			let found = property.get(&target);
			if found != expected {
				return Err(ContractViolation::RoundTrip {
					type_name,
					property: name,
					expected: format!("{expected:?}"),
					found: format!("{found:?}"),
				}
				.into());
			}
			tracing::trace!(ty = type_name, property = name, "property round trip holds");
		}
		Ok(())
	}
}
