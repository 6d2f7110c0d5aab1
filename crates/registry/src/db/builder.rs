use std::sync::Arc;

use rustc_hash::FxHashMap;

use super::ProviderRegistry;
use super::builtins::scalar_entries;
use super::table::ExactTable;
use crate::core::{EnumSelection, Random};
use crate::sources::{ProviderSource, builtin_sources};

/// Default upper bound (inclusive) on generated container sizes.
pub const DEFAULT_MAX_SIZE: usize = 8;

/// Assembles a [`ProviderRegistry`].
///
/// Sources are an explicit, statically assembled list: built-ins first (unless
/// disabled), then every source handed to [`RegistryBuilder::source`]. The
/// final order is by ascending priority, stable within equal priorities.
pub struct RegistryBuilder {
	seed: Option<u64>,
	max_size: usize,
	enum_selection: EnumSelection,
	builtin_sources: bool,
	builtin_scalars: bool,
	sources: Vec<Arc<dyn ProviderSource>>,
}

impl RegistryBuilder {
	pub fn new() -> Self {
		Self {
			seed: None,
			max_size: DEFAULT_MAX_SIZE,
			enum_selection: EnumSelection::default(),
			builtin_sources: true,
			builtin_scalars: true,
			sources: Vec::new(),
		}
	}

	/// Fixes the random seed; without one the generator is seeded from entropy.
	pub fn seed(mut self, seed: u64) -> Self {
		self.seed = Some(seed);
		self
	}

	/// Inclusive upper bound on generated container sizes.
	pub fn max_size(mut self, max_size: usize) -> Self {
		self.max_size = max_size;
		self
	}

	pub fn enum_selection(mut self, selection: EnumSelection) -> Self {
		self.enum_selection = selection;
		self
	}

	/// Adds a caller source; a priority below the built-ins shadows them.
	pub fn source(mut self, source: Arc<dyn ProviderSource>) -> Self {
		self.sources.push(source);
		self
	}

	pub fn without_builtin_sources(mut self) -> Self {
		self.builtin_sources = false;
		self
	}

	pub fn without_builtin_scalars(mut self) -> Self {
		self.builtin_scalars = false;
		self
	}

	pub fn build(self) -> ProviderRegistry {
		let random = match self.seed {
			Some(seed) => Random::seeded(seed),
			None => Random::from_entropy(),
		};

		let mut sources = if self.builtin_sources {
			builtin_sources()
		} else {
			Vec::new()
		};
		sources.extend(self.sources);
		sources.sort_by_key(|s| s.priority());

		let mut exact = FxHashMap::default();
		if self.builtin_scalars {
			exact.extend(scalar_entries(&random));
		}

		tracing::debug!(
			sources = ?sources.iter().map(|s| s.name()).collect::<Vec<_>>(),
			scalars = exact.len(),
			max_size = self.max_size,
			seed = ?self.seed,
			"provider registry built",
		);

		ProviderRegistry {
			exact: ExactTable::new(exact),
			sources,
			random,
			max_size: self.max_size,
			enum_selection: self.enum_selection,
		}
	}
}

impl Default for RegistryBuilder {
	fn default() -> Self {
		Self::new()
	}
}
