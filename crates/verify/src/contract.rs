use std::hash::Hash;

use veritype_registry::{Bean, ProviderRegistry, ResolutionStrategy, Resolver};

use crate::config::Settings;
use crate::equals::EqualsVerifier;
use crate::error::VerifyError;
use crate::factory::{EquivalentFactory, Populated};
use crate::format::FormatVerifier;
use crate::hash::HashVerifier;
use crate::property::PropertyVerifier;

/// Runs every verifier for one type, `iterations` times.
///
/// Each iteration populates a fresh template through the resolver, so
/// different passes exercise different generated values.
pub struct ContractVerifier<'r> {
	resolver: Resolver<'r>,
	settings: Settings,
}

impl<'r> ContractVerifier<'r> {
	pub fn new(registry: &'r ProviderRegistry) -> Self {
		Self::with_resolver(Resolver::new(registry))
	}

	pub fn with_resolver(resolver: Resolver<'r>) -> Self {
		Self {
			resolver,
			settings: Settings::new(),
		}
	}

	pub fn settings(mut self, settings: Settings) -> Self {
		self.settings = settings;
		self
	}

	pub fn resolver(&self) -> &Resolver<'r> {
		&self.resolver
	}

	/// Property round trip, equality laws, significance and format.
	pub fn verify<T: Bean>(&self) -> Result<(), VerifyError> {
		self.run::<T>(|_| Ok(()))
	}

	/// [`Self::verify`] plus the hash contract.
	pub fn verify_hashed<T: Bean + Hash>(&self) -> Result<(), VerifyError> {
		let hash = HashVerifier::new(self.settings.hash_repetition_count());
		self.run::<T>(|factory| hash.verify::<T, _>(factory))
	}

	/// Runs the equality, significance and format checks against a caller
	/// factory instead of generated templates.
	pub fn verify_with<T, F>(&self, factory: &F) -> Result<(), VerifyError>
	where
		T: Bean,
		F: EquivalentFactory<T> + ?Sized,
	{
		let equals = EqualsVerifier::new(self.strategy(), &self.settings);
		let format = FormatVerifier::new(self.settings.hash_repetition_count());
		for _ in 0..self.settings.iteration_count() {
			equals.verify_laws::<T, _>(factory)?;
			equals.verify_significance::<T, _>(factory)?;
			format.verify::<T, _>(factory)?;
		}
		Ok(())
	}

	fn run<T: Bean>(&self, extra: impl Fn(&Populated<T>) -> Result<(), VerifyError>) -> Result<(), VerifyError> {
		let type_name = std::any::type_name::<T>();
		self.settings.check_names::<T>()?;

		let strategy = self.strategy();
		let property = PropertyVerifier::new(strategy, &self.settings);
		let equals = EqualsVerifier::new(strategy, &self.settings);
		let format = FormatVerifier::new(self.settings.hash_repetition_count());

		for iteration in 0..self.settings.iteration_count() {
			tracing::trace!(ty = type_name, iteration, "verification pass");
			property.verify::<T>()?;

			let factory = Populated::<T>::generate(strategy, &self.settings)?;
			equals.verify_laws::<T, _>(&factory)?;
			equals.verify_significance::<T, _>(&factory)?;
			format.verify::<T, _>(&factory)?;
			extra(&factory)?;
		}

		tracing::debug!(ty = type_name, iterations = self.settings.iteration_count(), "contract verified");
		Ok(())
	}

	fn strategy(&self) -> &dyn ResolutionStrategy {
		&self.resolver
	}
}
