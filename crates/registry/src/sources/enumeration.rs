use std::sync::Arc;

use super::{ENUMERATION_PRIORITY, ProviderSource};
use crate::core::{EnumSelection, ProviderError, Random, ResolveError, Shape, TypeDescriptor, Value, ValueProvider};
use crate::db::ProviderRegistry;

/// Fieldless enumerations: a random declared constant per call.
pub struct EnumerationSource;

impl ProviderSource for EnumerationSource {
	fn name(&self) -> &'static str {
		"enumeration"
	}

	fn priority(&self) -> i16 {
		ENUMERATION_PRIORITY
	}

	fn supports(&self, ty: &TypeDescriptor) -> bool {
		matches!(ty.raw().shape(), Shape::Enumeration(_))
	}

	fn provide(&self, ty: &TypeDescriptor, registry: &ProviderRegistry) -> Result<ValueProvider, ResolveError> {
		let Shape::Enumeration(constants) = ty.raw().shape() else {
			return Err(ResolveError::Unsupported {
				type_name: ty.type_name().to_owned(),
			});
		};
		enumeration_provider(ty, constants(), registry.random().clone(), registry.enum_selection())
	}
}

/// Builds a provider choosing among `constants` with the given selection rule.
pub fn enumeration_provider(
	ty: &TypeDescriptor,
	constants: Vec<Value>,
	random: Random,
	selection: EnumSelection,
) -> Result<ValueProvider, ResolveError> {
	if constants.is_empty() {
		return Err(ResolveError::Uninhabited {
			type_name: ty.type_name().to_owned(),
		});
	}
	let type_name = ty.type_name();
	let constants: Arc<[Value]> = constants.into();
	Ok(ValueProvider::new(type_name, move || {
		random
			.index(constants.len(), selection)
			.map(|idx| constants[idx].clone())
			.ok_or(ProviderError::Uninhabited { type_name })
	}))
}
