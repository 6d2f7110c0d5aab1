//! Arrays, sequences and sets: one argument, random length.

use super::{ARRAY_PRIORITY, ProviderSource, SEQUENCE_PRIORITY, SET_PRIORITY, argument_provider};
use crate::core::{Assemble, ResolveError, Shape, TypeDescriptor, TypeFamily, ValueProvider};
use crate::db::ProviderRegistry;

/// `Box<[T]>`.
pub struct ArraySource;

/// `Vec<T>`, `VecDeque<T>`.
pub struct SequenceSource;

/// `HashSet<T>`, `BTreeSet<T>`.
pub struct SetSource;

impl ProviderSource for ArraySource {
	fn name(&self) -> &'static str {
		"array"
	}

	fn priority(&self) -> i16 {
		ARRAY_PRIORITY
	}

	fn supports(&self, ty: &TypeDescriptor) -> bool {
		ty.family() == TypeFamily::Array
	}

	fn provide(&self, ty: &TypeDescriptor, registry: &ProviderRegistry) -> Result<ValueProvider, ResolveError> {
		collection_provider(ty, registry)
	}
}

impl ProviderSource for SequenceSource {
	fn name(&self) -> &'static str {
		"sequence"
	}

	fn priority(&self) -> i16 {
		SEQUENCE_PRIORITY
	}

	fn supports(&self, ty: &TypeDescriptor) -> bool {
		ty.family() == TypeFamily::Sequence
	}

	fn provide(&self, ty: &TypeDescriptor, registry: &ProviderRegistry) -> Result<ValueProvider, ResolveError> {
		collection_provider(ty, registry)
	}
}

impl ProviderSource for SetSource {
	fn name(&self) -> &'static str {
		"set"
	}

	fn priority(&self) -> i16 {
		SET_PRIORITY
	}

	fn supports(&self, ty: &TypeDescriptor) -> bool {
		ty.family() == TypeFamily::Set
	}

	fn provide(&self, ty: &TypeDescriptor, registry: &ProviderRegistry) -> Result<ValueProvider, ResolveError> {
		collection_provider(ty, registry)
	}
}

fn assembler(ty: &TypeDescriptor) -> Result<Assemble, ResolveError> {
	match ty.raw().shape() {
		Shape::Array(f) | Shape::Sequence(f) | Shape::Set(f) => Ok(f),
		_ => Err(ResolveError::Unsupported {
			type_name: ty.type_name().to_owned(),
		}),
	}
}

fn collection_provider(ty: &TypeDescriptor, registry: &ProviderRegistry) -> Result<ValueProvider, ResolveError> {
	let assemble = assembler(ty)?;
	let element = argument_provider(registry, ty, &ty.element());
	let random = registry.random().clone();
	let max_size = registry.max_size();

	Ok(ValueProvider::new(ty.type_name(), move || {
		let len = random.size(max_size);
		let mut items = Vec::with_capacity(len);
		for _ in 0..len {
			items.push(element.provide()?);
		}
		assemble(items)
	}))
}
