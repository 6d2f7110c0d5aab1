use super::{OPTIONAL_PRIORITY, ProviderSource};
use crate::core::{ResolveError, Shape, TypeDescriptor, ValueProvider};
use crate::db::ProviderRegistry;

/// `Option<T>`: always `Some` of one produced value.
///
/// Unlike containers, an unresolvable wrapped type fails the source instead of
/// degrading, since there is no degenerate `Some`.
pub struct OptionalSource;

impl ProviderSource for OptionalSource {
	fn name(&self) -> &'static str {
		"optional"
	}

	fn priority(&self) -> i16 {
		OPTIONAL_PRIORITY
	}

	fn supports(&self, ty: &TypeDescriptor) -> bool {
		matches!(ty.raw().shape(), Shape::Optional(_))
	}

	fn provide(&self, ty: &TypeDescriptor, registry: &ProviderRegistry) -> Result<ValueProvider, ResolveError> {
		let Shape::Optional(wrap) = ty.raw().shape() else {
			return Err(ResolveError::Unsupported {
				type_name: ty.type_name().to_owned(),
			});
		};
		let inner = registry.provide(&ty.element())?;
		Ok(ValueProvider::new(ty.type_name(), move || wrap(inner.provide()?)))
	}
}
