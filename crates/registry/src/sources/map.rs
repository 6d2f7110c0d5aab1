use super::{MAP_PRIORITY, ProviderSource, argument_provider};
use crate::core::{ResolveError, Shape, TypeDescriptor, ValueProvider};
use crate::db::ProviderRegistry;

/// `HashMap<K, V>`, `BTreeMap<K, V>`: key and value providers resolved independently.
pub struct MapSource;

impl ProviderSource for MapSource {
	fn name(&self) -> &'static str {
		"map"
	}

	fn priority(&self) -> i16 {
		MAP_PRIORITY
	}

	fn supports(&self, ty: &TypeDescriptor) -> bool {
		matches!(ty.raw().shape(), Shape::Map(_))
	}

	fn provide(&self, ty: &TypeDescriptor, registry: &ProviderRegistry) -> Result<ValueProvider, ResolveError> {
		let Shape::Map(assemble) = ty.raw().shape() else {
			return Err(ResolveError::Unsupported {
				type_name: ty.type_name().to_owned(),
			});
		};
		let key = argument_provider(registry, ty, &ty.element());
		let value = argument_provider(registry, ty, &ty.value());
		let random = registry.random().clone();
		let max_size = registry.max_size();

		Ok(ValueProvider::new(ty.type_name(), move || {
			let len = random.size(max_size);
			let mut entries = Vec::with_capacity(len);
			for _ in 0..len {
				entries.push((key.provide()?, value.provide()?));
			}
			assemble(entries)
		}))
	}
}
