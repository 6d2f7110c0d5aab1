//! Structure introspection for default-constructible types with settable fields.

use std::fmt;
use std::sync::Arc;

use super::describe::Describe;
use super::descriptor::TypeDescriptor;
use super::{ProviderError, Value};

/// A default-constructible type exposing its properties.
///
/// Usually implemented with `#[derive(Describe)]`; by hand it looks like:
///
/// ```
/// use veritype_registry::{Bean, Describe, Property, TypeDescriptor};
///
/// #[derive(Debug, Default, Clone, PartialEq)]
/// struct Point {
/// 	x: i32,
/// 	y: i32,
/// }
///
/// impl Bean for Point {
/// 	fn properties() -> Vec<Property<Self>> {
/// 		vec![
/// 			Property::new("x", |p: &Point| p.x, |p: &mut Point, v| p.x = v),
/// 			Property::new("y", |p: &Point| p.y, |p: &mut Point, v| p.y = v),
/// 		]
/// 	}
/// }
///
/// impl Describe for Point {
/// 	fn describe() -> TypeDescriptor {
/// 		TypeDescriptor::structure::<Self>()
/// 	}
/// }
/// ```
pub trait Bean: Describe + Default {
	fn properties() -> Vec<Property<Self>>;
}

type Getter<T> = dyn Fn(&T) -> Value + Send + Sync;
type Setter<T> = dyn Fn(&mut T, Value) -> Result<(), ProviderError> + Send + Sync;

/// A named, typed accessor/mutator pair on `T`.
pub struct Property<T> {
	name: &'static str,
	descriptor: TypeDescriptor,
	get: Arc<Getter<T>>,
	set: Arc<Setter<T>>,
}

impl<T: 'static> Property<T> {
	pub fn new<F: Describe>(name: &'static str, get: fn(&T) -> F, set: fn(&mut T, F)) -> Self {
		Self {
			name,
			descriptor: F::describe(),
			get: Arc::new(move |target| Value::new(get(target))),
			set: Arc::new(move |target, value| {
				let value = value.downcast::<F>().map_err(|v| ProviderError::mismatch::<F>(&v))?;
				set(target, value);
				Ok(())
			}),
		}
	}

	pub fn name(&self) -> &'static str {
		self.name
	}

	pub fn descriptor(&self) -> &TypeDescriptor {
		&self.descriptor
	}

	/// Reads the property as an erased value.
	pub fn get(&self, target: &T) -> Value {
		(self.get)(target)
	}

	/// Writes an erased value; fails if its type is not the property's type.
	pub fn set(&self, target: &mut T, value: Value) -> Result<(), ProviderError> {
		(self.set)(target, value)
	}
}

impl<T> Clone for Property<T> {
	fn clone(&self) -> Self {
		Self {
			name: self.name,
			descriptor: self.descriptor.clone(),
			get: self.get.clone(),
			set: self.set.clone(),
		}
	}
}

impl<T> fmt::Debug for Property<T> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("Property")
			.field("name", &self.name)
			.field("descriptor", &self.descriptor)
			.finish()
	}
}

type ErasedSetter = dyn Fn(&mut Value, Value) -> Result<(), ProviderError> + Send + Sync;

/// One settable field of an erased structure.
#[derive(Clone)]
pub struct Field {
	pub name: &'static str,
	pub descriptor: TypeDescriptor,
	setter: Arc<ErasedSetter>,
}

impl Field {
	pub fn new<F>(name: &'static str, descriptor: TypeDescriptor, setter: F) -> Self
	where
		F: Fn(&mut Value, Value) -> Result<(), ProviderError> + Send + Sync + 'static,
	{
		Self {
			name,
			descriptor,
			setter: Arc::new(setter),
		}
	}

	pub fn set(&self, target: &mut Value, value: Value) -> Result<(), ProviderError> {
		(self.setter)(target, value)
	}
}

impl fmt::Debug for Field {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("Field")
			.field("name", &self.name)
			.field("descriptor", &self.descriptor)
			.finish()
	}
}

/// Erased description of a structure: how to make a blank instance and which fields to fill.
#[derive(Clone)]
pub struct Structure {
	pub type_name: &'static str,
	pub instantiate: fn() -> Value,
	pub fields: Vec<Field>,
}

impl fmt::Debug for Structure {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("Structure")
			.field("type_name", &self.type_name)
			.field("fields", &self.fields)
			.finish()
	}
}

fn instantiate_default<T: Bean>() -> Value {
	Value::new(T::default())
}

pub(crate) fn structure_of<T: Bean>() -> Structure {
	let fields = T::properties()
		.into_iter()
		.map(|prop| {
			let name = prop.name;
			let descriptor = prop.descriptor.clone();
			Field::new(name, descriptor, move |target, value| {
				let found = target.type_name();
				let Some(target) = target.downcast_mut::<T>() else {
					return Err(ProviderError::TypeMismatch {
						expected: std::any::type_name::<T>(),
						found,
					});
				};
				prop.set(target, value)
			})
		})
		.collect();
	Structure {
		type_name: std::any::type_name::<T>(),
		instantiate: instantiate_default::<T>,
		fields,
	}
}
