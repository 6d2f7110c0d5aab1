//! Provider synthesis for types no source covers.

use std::panic::{AssertUnwindSafe, catch_unwind};
use std::sync::Arc;

use crate::core::{Field, ProviderError, ResolveError, Shape, Structure, TypeDescriptor, Value, ValueProvider};

/// Capability used by synthesis to look inside a type.
///
/// The resolution algorithm only talks to this trait, so the mechanism that
/// discovers constants and fields can be swapped (or instrumented) freely.
pub trait Introspector: Send + Sync {
	/// Declared constants of an enumeration, in declaration order.
	fn enum_constants(&self, ty: &TypeDescriptor) -> Option<Vec<Value>>;

	/// Default constructor and settable fields of a structure.
	fn describe_structure(&self, ty: &TypeDescriptor) -> Option<Structure>;
}

/// Reads the [`Shape`] captured by [`crate::Describe`].
#[derive(Debug, Default, Clone, Copy)]
pub struct ShapeIntrospector;

impl Introspector for ShapeIntrospector {
	fn enum_constants(&self, ty: &TypeDescriptor) -> Option<Vec<Value>> {
		match ty.raw().shape() {
			Shape::Enumeration(constants) => Some(constants()),
			_ => None,
		}
	}

	fn describe_structure(&self, ty: &TypeDescriptor) -> Option<Structure> {
		match ty.raw().shape() {
			Shape::Structure(structure) => Some(structure()),
			_ => None,
		}
	}
}

/// Why a synthesis attempt was abandoned. Never surfaced directly; the
/// resolver logs it and reports [`ResolveError::NoProvider`].
#[derive(Debug, thiserror::Error)]
pub(crate) enum SynthesisError {
	#[error("type [{type_name}] is already being synthesized")]
	Recursive { type_name: &'static str },
	#[error("field [{field}] unresolvable: {source}")]
	Field {
		field: &'static str,
		#[source]
		source: ResolveError,
	},
	#[error("trial construction failed: {0}")]
	Trial(#[from] ProviderError),
}

/// Builds a provider that fills a fresh default instance field by field.
pub(crate) fn structure_provider(structure: Structure, fields: Vec<(Field, ValueProvider)>) -> ValueProvider {
	let Structure {
		type_name, instantiate, ..
	} = structure;
	let fields: Arc<[(Field, ValueProvider)]> = fields.into();

	ValueProvider::new(type_name, move || {
		let mut instance = instantiate();
		for (field, provider) in fields.iter() {
			let wrap = |source: ProviderError| ProviderError::Field {
				field: field.name,
				type_name,
				source: Box::new(source),
			};
			let value = provider.provide().map_err(wrap)?;
			field.set(&mut instance, value).map_err(wrap)?;
		}
		Ok(instance)
	})
}

/// Invokes a freshly built provider once, converting panics into errors.
pub(crate) fn trial(type_name: &'static str, provider: &ValueProvider) -> Result<(), SynthesisError> {
	match catch_unwind(AssertUnwindSafe(|| provider.provide())) {
		Ok(Ok(_)) => Ok(()),
		Ok(Err(err)) => Err(err.into()),
		Err(payload) => {
			let message = payload
				.downcast_ref::<&str>()
				.map(|s| (*s).to_owned())
				.or_else(|| payload.downcast_ref::<String>().cloned())
				.unwrap_or_else(|| "non-string panic payload".to_owned());
			Err(ProviderError::Panicked { type_name, message }.into())
		}
	}
}
