//! Type-erased values.
//!
//! Providers hand out [`Value`]s so that the registry can store providers for
//! unrelated types side by side. A value either wraps a concrete instance or
//! is *absent*, the marker produced by [`crate::ValueProvider::noop`].

use std::any::Any;
use std::fmt;

/// Object-safe view of a concrete instance.
///
/// Implemented for every `T: Any + Send + Sync + Debug + PartialEq + Clone`.
pub trait DynValue: Any + Send + Sync + fmt::Debug {
	/// Compares against another erased value; values of different types are never equal.
	fn dyn_eq(&self, other: &dyn DynValue) -> bool;
	fn dyn_clone(&self) -> Box<dyn DynValue>;
	fn as_any(&self) -> &dyn Any;
	fn as_any_mut(&mut self) -> &mut dyn Any;
	fn into_any(self: Box<Self>) -> Box<dyn Any>;
	fn type_name(&self) -> &'static str;
}

impl<T> DynValue for T
where
	T: Any + Send + Sync + fmt::Debug + PartialEq + Clone,
{
	fn dyn_eq(&self, other: &dyn DynValue) -> bool {
		other.as_any().downcast_ref::<T>().is_some_and(|o| self == o)
	}

	fn dyn_clone(&self) -> Box<dyn DynValue> {
		Box::new(self.clone())
	}

	fn as_any(&self) -> &dyn Any {
		self
	}

	fn as_any_mut(&mut self) -> &mut dyn Any {
		self
	}

	fn into_any(self: Box<Self>) -> Box<dyn Any> {
		self
	}

	fn type_name(&self) -> &'static str {
		std::any::type_name::<T>()
	}
}

/// A produced instance of some described type, or the absent marker.
pub struct Value {
	inner: Option<Box<dyn DynValue>>,
}

impl Value {
	/// Wraps a concrete instance.
	pub fn new<T>(value: T) -> Self
	where
		T: Any + Send + Sync + fmt::Debug + PartialEq + Clone,
	{
		Self {
			inner: Some(Box::new(value)),
		}
	}

	/// The value produced when no real instance could be made.
	pub const fn absent() -> Self {
		Self { inner: None }
	}

	pub fn is_absent(&self) -> bool {
		self.inner.is_none()
	}

	/// Returns the concrete type name, or `"<absent>"`.
	pub fn type_name(&self) -> &'static str {
		match &self.inner {
			Some(v) => (**v).type_name(),
			None => "<absent>",
		}
	}

	pub fn is<T: Any>(&self) -> bool {
		self.downcast_ref::<T>().is_some()
	}

	pub fn downcast_ref<T: Any>(&self) -> Option<&T> {
		self.inner.as_deref()?.as_any().downcast_ref::<T>()
	}

	pub fn downcast_mut<T: Any>(&mut self) -> Option<&mut T> {
		self.inner.as_deref_mut()?.as_any_mut().downcast_mut::<T>()
	}

	/// Unwraps the concrete instance, handing the value back on a type mismatch.
	pub fn downcast<T: Any>(self) -> Result<T, Self> {
		if !self.is::<T>() {
			return Err(self);
		}
		match self.inner {
			Some(inner) => inner.into_any().downcast::<T>().map(|v| *v).map_err(|_| Self::absent()),
			None => Err(Self::absent()),
		}
	}
}

impl Clone for Value {
	fn clone(&self) -> Self {
		Self {
			inner: self.inner.as_ref().map(|v| (**v).dyn_clone()),
		}
	}
}

impl PartialEq for Value {
	fn eq(&self, other: &Self) -> bool {
		match (&self.inner, &other.inner) {
			(Some(a), Some(b)) => (**a).dyn_eq(&**b),
			(None, None) => true,
			_ => false,
		}
	}
}

impl fmt::Debug for Value {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match &self.inner {
			Some(v) => fmt::Debug::fmt(&**v, f),
			None => f.write_str("<absent>"),
		}
	}
}
