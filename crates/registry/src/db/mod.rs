//! Provider registry construction and the process-wide default instance.

use std::sync::{Arc, OnceLock};

use crate::core::{Describe, EnumSelection, ProviderOrigin, Random, ResolveError, TypeDescriptor, ValueProvider};
use crate::sources::ProviderSource;

pub mod builder;
pub mod builtins;
pub mod table;

pub use builder::{DEFAULT_MAX_SIZE, RegistryBuilder};
pub use table::{InsertAction, ProviderEntry};

use table::ExactTable;


/// Answers "can you make a `T`, and if so, give me a provider".
///
/// Lookup order: the exact table (built-in scalars, explicit and synthesized
/// registrations), then the structural sources by ascending priority. The
/// first match wins.
pub struct ProviderRegistry {
	pub(crate) exact: ExactTable,
	pub(crate) sources: Vec<Arc<dyn ProviderSource>>,
	pub(crate) random: Random,
	pub(crate) max_size: usize,
	pub(crate) enum_selection: EnumSelection,
}

static GLOBAL: OnceLock<ProviderRegistry> = OnceLock::new();

impl ProviderRegistry {
	pub fn builder() -> RegistryBuilder {
		RegistryBuilder::new()
	}

	/// Registry with built-in scalars and sources, seeded from entropy.
	pub fn new() -> Self {
		RegistryBuilder::new().build()
	}

	/// Process-wide default registry.
	///
	/// A convenience for one-off checks; tests that care about isolation or
	/// reproducibility should build their own.
	pub fn global() -> &'static ProviderRegistry {
		GLOBAL.get_or_init(ProviderRegistry::new)
	}

	pub fn has_provider(&self, ty: &TypeDescriptor) -> bool {
		self.exact.contains(ty.type_id()) || self.sources.iter().any(|s| s.supports(ty))
	}

	/// Returns true only for exact-table entries, ignoring structural sources.
	pub fn has_exact(&self, ty: &TypeDescriptor) -> bool {
		self.exact.contains(ty.type_id())
	}

	pub fn provide(&self, ty: &TypeDescriptor) -> Result<ValueProvider, ResolveError> {
		if let Some(entry) = self.exact.get(ty.type_id()) {
			tracing::trace!(ty = %ty, origin = %entry.origin, "exact provider");
			return Ok(entry.provider);
		}
		if let Some(source) = self.sources.iter().find(|s| s.supports(ty)) {
			tracing::trace!(ty = %ty, source = source.name(), "structural provider");
			return source.provide(ty, self);
		}
		Err(ResolveError::Unsupported {
			type_name: ty.type_name().to_owned(),
		})
	}

	/// Registers `provider` for the exact type `T`, overwriting any existing entry.
	pub fn register<T: Describe>(&self, provider: ValueProvider) -> InsertAction {
		self.register_descriptor(&T::describe(), provider)
	}

	/// Registers `provider` for the raw type of `ty`, overwriting any existing entry.
	pub fn register_descriptor(&self, ty: &TypeDescriptor, provider: ValueProvider) -> InsertAction {
		self.insert(ty, provider, ProviderOrigin::Explicit)
	}

	/// Writes back a synthesized provider; never replaces an explicit registration.
	pub(crate) fn register_synthesized(&self, ty: &TypeDescriptor, provider: ValueProvider) -> InsertAction {
		self.insert(ty, provider, ProviderOrigin::Synthesized)
	}

	fn insert(&self, ty: &TypeDescriptor, provider: ValueProvider, origin: ProviderOrigin) -> InsertAction {
		let action = self.exact.insert(
			ty.type_id(),
			ProviderEntry {
				type_name: ty.type_name(),
				provider,
				origin,
			},
		);
		tracing::debug!(ty = %ty, %origin, ?action, "provider registered");
		action
	}

	/// Exact-table entry for `ty`, if any.
	pub fn entry(&self, ty: &TypeDescriptor) -> Option<ProviderEntry> {
		self.exact.get(ty.type_id())
	}

	/// Number of exact-table entries.
	pub fn len(&self) -> usize {
		self.exact.len()
	}

	pub fn is_empty(&self) -> bool {
		self.len() == 0
	}

	/// Number of providers written back by synthesis.
	pub fn synthesized_count(&self) -> usize {
		self.exact.count_origin(ProviderOrigin::Synthesized)
	}

	/// Source names in consultation order.
	pub fn source_names(&self) -> Vec<&'static str> {
		self.sources.iter().map(|s| s.name()).collect()
	}

	pub fn random(&self) -> &Random {
		&self.random
	}

	pub fn max_size(&self) -> usize {
		self.max_size
	}

	pub fn enum_selection(&self) -> EnumSelection {
		self.enum_selection
	}
}

impl Default for ProviderRegistry {
	fn default() -> Self {
		Self::new()
	}
}

impl std::fmt::Debug for ProviderRegistry {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("ProviderRegistry")
			.field("exact", &self.exact.len())
			.field("sources", &self.source_names())
			.field("max_size", &self.max_size)
			.field("enum_selection", &self.enum_selection)
			.finish()
	}
}
