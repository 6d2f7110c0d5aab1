//! Equivalent-instance factories.

use veritype_registry::{Bean, ResolutionStrategy};

use crate::config::Settings;
use crate::error::VerifyError;

/// Produces fresh, logically equal instances on every call.
///
/// Verifiers treat a factory that breaks this promise as a precondition
/// violation, not a contract violation of the type.
pub trait EquivalentFactory<T> {
	fn make(&self) -> Result<T, VerifyError>;

	/// True when every instance is a clone of one value, so even
	/// representation details such as hash-table iteration order agree.
	fn clones_template(&self) -> bool {
		false
	}
}

impl<T, F> EquivalentFactory<T> for F
where
	F: Fn() -> T,
{
	fn make(&self) -> Result<T, VerifyError> {
		Ok(self())
	}
}

/// Clones one randomly populated template.
#[derive(Debug, Clone)]
pub struct Populated<T> {
	template: T,
}

impl<T: Bean> Populated<T> {
	/// Fills a default instance with generated values for every property not
	/// ignored by `settings`, honouring its overrides.
	pub fn generate(strategy: &dyn ResolutionStrategy, settings: &Settings) -> Result<Self, VerifyError> {
		let mut template = T::default();
		for property in T::properties() {
			if settings.is_ignored(property.name()) {
				continue;
			}
			let provider = strategy.get_provider(property.name(), property.descriptor(), Some(settings.overrides()))?;
			property.set(&mut template, provider.provide()?)?;
		}
		tracing::trace!(ty = std::any::type_name::<T>(), template = ?template, "populated template");
		Ok(Self { template })
	}
}

impl<T> Populated<T> {
	pub fn from_template(template: T) -> Self {
		Self { template }
	}

	pub fn template(&self) -> &T {
		&self.template
	}
}

impl<T: Clone> EquivalentFactory<T> for Populated<T> {
	fn make(&self) -> Result<T, VerifyError> {
		Ok(self.template.clone())
	}

	fn clones_template(&self) -> bool {
		true
	}
}
