//! Structural provider sources.
//!
//! A source recognizes a family of shapes (arrays, sequences, sets, maps,
//! optionals, enumerations) independent of type arguments and builds a
//! provider for a concrete descriptor, resolving argument providers back
//! through the registry.
//!
//! # Precedence
//!
//! Sources are consulted in ascending [`ProviderSource::priority`] order, ties
//! broken by the order they were handed to the builder. The registry's exact
//! table is consulted before any source.

use std::sync::Arc;

use crate::core::{ResolveError, TypeDescriptor, ValueProvider};
use crate::db::ProviderRegistry;

mod collection;
mod enumeration;
mod map;
mod optional;

pub use collection::{ArraySource, SequenceSource, SetSource};
pub use enumeration::{EnumerationSource, enumeration_provider};
pub use map::MapSource;
pub use optional::OptionalSource;

#[cfg(test)]
mod tests;

/// Priority assumed by sources that do not override [`ProviderSource::priority`].
pub const DEFAULT_PRIORITY: i16 = 100;

pub const ARRAY_PRIORITY: i16 = 100;
pub const SEQUENCE_PRIORITY: i16 = 110;
pub const SET_PRIORITY: i16 = 120;
pub const MAP_PRIORITY: i16 = 130;
pub const OPTIONAL_PRIORITY: i16 = 140;
pub const ENUMERATION_PRIORITY: i16 = 150;

/// Strategy answering "can I, and will I, produce a provider for this descriptor".
pub trait ProviderSource: Send + Sync {
	/// Human-readable label for logs.
	fn name(&self) -> &'static str;

	/// Lower numbers are consulted first.
	fn priority(&self) -> i16 {
		DEFAULT_PRIORITY
	}

	fn supports(&self, ty: &TypeDescriptor) -> bool;

	/// Builds a provider for `ty`; only called when [`Self::supports`] matched.
	fn provide(&self, ty: &TypeDescriptor, registry: &ProviderRegistry) -> Result<ValueProvider, ResolveError>;
}

/// The built-in structural sources, in priority order.
pub fn builtin_sources() -> Vec<Arc<dyn ProviderSource>> {
	vec![
		Arc::new(ArraySource),
		Arc::new(SequenceSource),
		Arc::new(SetSource),
		Arc::new(MapSource),
		Arc::new(OptionalSource),
		Arc::new(EnumerationSource),
	]
}

/// Resolves an argument provider, degrading to [`ValueProvider::noop`] when the
/// registry cannot make the argument type.
pub(crate) fn argument_provider(registry: &ProviderRegistry, container: &TypeDescriptor, arg: &TypeDescriptor) -> ValueProvider {
	match registry.provide(arg) {
		Ok(provider) => provider,
		Err(err) => {
			tracing::warn!(
				container = %container,
				argument = %arg,
				error = %err,
				"argument type unresolvable; container elements degrade to absent",
			);
			ValueProvider::noop()
		}
	}
}
