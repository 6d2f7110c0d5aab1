use rustc_hash::FxHashMap;

use crate::core::ValueProvider;

/// Per-call table of property name → provider.
///
/// Consulted before anything else during resolution and never written into
/// the registry.
#[derive(Debug, Clone, Default)]
pub struct OverrideTable {
	by_property: FxHashMap<String, ValueProvider>,
}

impl OverrideTable {
	pub fn new() -> Self {
		Self::default()
	}

	/// Adds or replaces the override for `property`.
	pub fn with(mut self, property: impl Into<String>, provider: ValueProvider) -> Self {
		self.insert(property, provider);
		self
	}

	pub fn insert(&mut self, property: impl Into<String>, provider: ValueProvider) -> Option<ValueProvider> {
		self.by_property.insert(property.into(), provider)
	}

	pub fn get(&self, property: &str) -> Option<&ValueProvider> {
		self.by_property.get(property)
	}

	pub fn contains(&self, property: &str) -> bool {
		self.by_property.contains_key(property)
	}

	pub fn len(&self) -> usize {
		self.by_property.len()
	}

	pub fn is_empty(&self) -> bool {
		self.by_property.is_empty()
	}

	pub fn properties(&self) -> impl Iterator<Item = &str> {
		self.by_property.keys().map(String::as_str)
	}
}
