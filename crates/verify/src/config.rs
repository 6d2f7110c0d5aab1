//! Per-call verification settings.

use rustc_hash::FxHashSet;
use veritype_registry::{Bean, OverrideTable, ValueProvider};

use crate::error::PreconditionViolation;

/// Default number of full verification passes.
pub const DEFAULT_ITERATIONS: usize = 100;
/// Default number of repeated hash and format computations per instance.
pub const DEFAULT_HASH_REPETITIONS: usize = 100;

/// Property sets, overrides and repetition bounds for one verification call.
///
/// Nothing here is shared between calls; the registry is the only state that
/// outlives a verification.
#[derive(Debug, Clone)]
pub struct Settings {
	ignored: FxHashSet<String>,
	insignificant: FxHashSet<String>,
	overrides: OverrideTable,
	iterations: usize,
	hash_repetitions: usize,
}

impl Settings {
	pub fn new() -> Self {
		Self {
			ignored: FxHashSet::default(),
			insignificant: FxHashSet::default(),
			overrides: OverrideTable::new(),
			iterations: DEFAULT_ITERATIONS,
			hash_repetitions: DEFAULT_HASH_REPETITIONS,
		}
	}

	/// Excludes properties from the round-trip and significance checks.
	pub fn ignore<I, S>(mut self, properties: I) -> Self
	where
		I: IntoIterator<Item = S>,
		S: Into<String>,
	{
		self.ignored.extend(properties.into_iter().map(Into::into));
		self
	}

	/// Declares properties that equality must not observe.
	pub fn insignificant<I, S>(mut self, properties: I) -> Self
	where
		I: IntoIterator<Item = S>,
		S: Into<String>,
	{
		self.insignificant.extend(properties.into_iter().map(Into::into));
		self
	}

	/// Supplies values for `property` from `provider` instead of the registry.
	pub fn override_with(mut self, property: impl Into<String>, provider: ValueProvider) -> Self {
		self.overrides.insert(property, provider);
		self
	}

	pub fn iterations(mut self, iterations: usize) -> Self {
		self.iterations = iterations;
		self
	}

	pub fn hash_repetitions(mut self, repetitions: usize) -> Self {
		self.hash_repetitions = repetitions;
		self
	}

	pub fn is_ignored(&self, property: &str) -> bool {
		self.ignored.contains(property)
	}

	pub fn is_insignificant(&self, property: &str) -> bool {
		self.insignificant.contains(property)
	}

	pub fn overrides(&self) -> &OverrideTable {
		&self.overrides
	}

	pub fn iteration_count(&self) -> usize {
		self.iterations
	}

	pub fn hash_repetition_count(&self) -> usize {
		self.hash_repetitions
	}

	/// Fails if an ignored or insignificant name is not a property of `T`.
	pub fn check_names<T: Bean>(&self) -> Result<(), PreconditionViolation> {
		let properties = T::properties();
		let known: FxHashSet<&str> = properties.iter().map(|p| p.name()).collect();

		let mut unknown: Vec<&String> = self
			.ignored
			.iter()
			.chain(&self.insignificant)
			.filter(|name| !known.contains(name.as_str()))
			.collect();
		unknown.sort();

		match unknown.first() {
			Some(name) => Err(PreconditionViolation::UnknownProperty {
				type_name: std::any::type_name::<T>(),
				property: (*name).clone(),
			}),
			None => Ok(()),
		}
	}
}

impl Default for Settings {
	fn default() -> Self {
		Self::new()
	}
}
