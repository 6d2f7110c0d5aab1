//! Layered provider resolution.
//!
//! The [`Resolver`] is the per-property entry point. It resolves a provider
//! for a property through a fixed hierarchy, first match wins:
//!
//! # Resolution Order
//!
//! 1. Override table entry for the property name
//! 2. Registry provider (exact table, then structural sources)
//! 3. Enumeration synthesis, registered back into the registry
//! 4. Structure synthesis, validated by one eager trial and registered back
//! 5. [`ResolveError::NoProvider`]
//!
//! Steps 2 to 4 write into the registry: providers built by structural
//! sources and synthesized providers are cached as
//! [`ProviderOrigin::Synthesized`](crate::ProviderOrigin) entries, so a
//! registry shared across tests grows as types are resolved. Repeated
//! resolution is answered from the exact table and never rebuilds.

use std::any::TypeId;
use std::sync::Arc;

use crate::core::{ResolveError, TypeDescriptor, TypeFamily, ValueProvider};
use crate::db::ProviderRegistry;
use crate::sources::enumeration_provider;

mod overrides;
mod synthesis;

pub use overrides::OverrideTable;
pub use synthesis::{Introspector, ShapeIntrospector};

use synthesis::{SynthesisError, structure_provider, trial};


/// Resolution contract consumed by verifiers.
pub trait ResolutionStrategy {
	/// Returns a provider for `property` of type `ty`, consulting `overrides` first.
	fn get_provider(
		&self,
		property: &str,
		ty: &TypeDescriptor,
		overrides: Option<&OverrideTable>,
	) -> Result<ValueProvider, ResolveError>;
}

/// Default [`ResolutionStrategy`] over a borrowed registry.
#[derive(Clone)]
pub struct Resolver<'r> {
	registry: &'r ProviderRegistry,
	introspector: Arc<dyn Introspector>,
}

impl<'r> Resolver<'r> {
	pub fn new(registry: &'r ProviderRegistry) -> Self {
		Self {
			registry,
			introspector: Arc::new(ShapeIntrospector),
		}
	}

	/// Replaces the introspection capability used by synthesis.
	pub fn with_introspector(mut self, introspector: Arc<dyn Introspector>) -> Self {
		self.introspector = introspector;
		self
	}

	pub fn registry(&self) -> &'r ProviderRegistry {
		self.registry
	}

	fn resolve(
		&self,
		property: &str,
		ty: &TypeDescriptor,
		overrides: Option<&OverrideTable>,
		in_progress: &mut Vec<TypeId>,
	) -> Result<ValueProvider, ResolveError> {
		if let Some(provider) = overrides.and_then(|o| o.get(property)) {
			tracing::trace!(property, ty = %ty, "override provider");
			return Ok(provider.clone());
		}

		if let Some(entry) = self.registry.entry(ty) {
			tracing::trace!(property, ty = %ty, origin = %entry.origin, "cached provider");
			return Ok(entry.provider);
		}

		if self.registry.has_provider(ty) {
			self.warm_arguments(property, ty, in_progress);
			match self.registry.provide(ty) {
				Ok(provider) => {
					// A container built under the recursion guard holds a degraded
					// argument; only cache it once that argument is resolvable.
					if !mentions_any(ty, in_progress) {
						self.registry.register_synthesized(ty, provider.clone());
					}
					return Ok(provider);
				}
				Err(err) => {
					tracing::debug!(property, ty = %ty, error = %err, "registry provider failed; falling back to synthesis");
				}
			}
		}

		if let Some(constants) = self.introspector.enum_constants(ty) {
			match enumeration_provider(ty, constants, self.registry.random().clone(), self.registry.enum_selection()) {
				Ok(provider) => {
					self.registry.register_synthesized(ty, provider.clone());
					return Ok(provider);
				}
				Err(err) => {
					tracing::debug!(property, ty = %ty, error = %err, "enumeration synthesis failed");
				}
			}
		}

		if let Some(structure) = self.introspector.describe_structure(ty) {
			tracing::debug!(property, ty = %ty, fields = structure.fields.len(), "synthesizing structure provider");
			match self.synthesize(ty, structure, in_progress) {
				Ok(provider) => {
					self.registry.register_synthesized(ty, provider.clone());
					return Ok(provider);
				}
				Err(err) => {
					tracing::debug!(property, ty = %ty, error = %err, "structure synthesis failed");
				}
			}
		}

		Err(ResolveError::NoProvider {
			property: property.to_owned(),
			type_name: ty.type_name().to_owned(),
		})
	}

	/// Resolves enumeration and structure arguments nested anywhere inside a
	/// structural descriptor, so the registry's sources find their synthesized
	/// providers instead of degrading.
	fn warm_arguments(&self, property: &str, ty: &TypeDescriptor, in_progress: &mut Vec<TypeId>) {
		for arg in ty.args() {
			match arg.family() {
				TypeFamily::Scalar => {}
				TypeFamily::Enumeration | TypeFamily::Structure => {
					if !self.registry.has_provider(arg)
						&& let Err(err) = self.resolve(property, arg, None, in_progress)
					{
						tracing::trace!(property, argument = %arg, error = %err, "argument stays unresolved");
					}
				}
				TypeFamily::Array | TypeFamily::Sequence | TypeFamily::Set | TypeFamily::Map | TypeFamily::Optional => {
					self.warm_arguments(property, arg, in_progress);
				}
			}
		}
	}

	fn synthesize(
		&self,
		ty: &TypeDescriptor,
		structure: crate::core::Structure,
		in_progress: &mut Vec<TypeId>,
	) -> Result<ValueProvider, SynthesisError> {
		let id = ty.type_id();
		if in_progress.contains(&id) {
			return Err(SynthesisError::Recursive {
				type_name: ty.type_name(),
			});
		}

		in_progress.push(id);
		let fields = structure
			.fields
			.iter()
			.map(|field| {
				self.resolve(field.name, &field.descriptor, None, in_progress)
					.map(|provider| (field.clone(), provider))
					.map_err(|source| SynthesisError::Field {
						field: field.name,
						source,
					})
			})
			.collect::<Result<Vec<_>, _>>();
		in_progress.pop();

		let provider = structure_provider(structure, fields?);
		trial(ty.type_name(), &provider)?;
		Ok(provider)
	}
}

fn mentions_any(ty: &TypeDescriptor, ids: &[TypeId]) -> bool {
	ty.args().iter().any(|arg| ids.contains(&arg.type_id()) || mentions_any(arg, ids))
}

impl ResolutionStrategy for Resolver<'_> {
	fn get_provider(
		&self,
		property: &str,
		ty: &TypeDescriptor,
		overrides: Option<&OverrideTable>,
	) -> Result<ValueProvider, ResolveError> {
		self.resolve(property, ty, overrides, &mut Vec::new())
	}
}

impl std::fmt::Debug for Resolver<'_> {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("Resolver").field("registry", self.registry).finish_non_exhaustive()
	}
}
