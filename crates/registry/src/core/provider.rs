use std::any::Any;
use std::fmt;
use std::sync::Arc;

use super::{ProviderError, Value};

type ProvideFn = dyn Fn() -> Result<Value, ProviderError> + Send + Sync;

/// Zero-argument factory producing a fresh [`Value`] on every call.
///
/// Cheap to clone; clones share the same closure, so [`ValueProvider::same_as`]
/// can tell whether two lookups returned the same cached provider.
#[derive(Clone)]
pub struct ValueProvider {
	label: &'static str,
	f: Arc<ProvideFn>,
}

impl ValueProvider {
	/// Wraps a closure producing erased values.
	pub fn new<F>(label: &'static str, f: F) -> Self
	where
		F: Fn() -> Result<Value, ProviderError> + Send + Sync + 'static,
	{
		Self { label, f: Arc::new(f) }
	}

	/// Wraps an infallible typed closure.
	pub fn from_fn<T, F>(f: F) -> Self
	where
		T: Any + Send + Sync + fmt::Debug + PartialEq + Clone,
		F: Fn() -> T + Send + Sync + 'static,
	{
		Self::new(std::any::type_name::<T>(), move || Ok(Value::new(f())))
	}

	/// Always produces a clone of `value`.
	pub fn constant<T>(value: T) -> Self
	where
		T: Any + Send + Sync + fmt::Debug + PartialEq + Clone,
	{
		Self::from_fn(move || value.clone())
	}

	/// The universal fallback: produces the absent value.
	pub fn noop() -> Self {
		Self::new("noop", || Ok(Value::absent()))
	}

	pub fn provide(&self) -> Result<Value, ProviderError> {
		(self.f)()
	}

	/// Produces a value and unwraps it as `T`.
	pub fn provide_as<T: Any>(&self) -> Result<T, ProviderError> {
		let value = self.provide()?;
		value.downcast::<T>().map_err(|v| ProviderError::mismatch::<T>(&v))
	}

	/// Returns true if both handles share the same closure.
	pub fn same_as(&self, other: &Self) -> bool {
		Arc::ptr_eq(&self.f, &other.f)
	}

	/// Short description used in logs and diagnostics.
	pub fn label(&self) -> &'static str {
		self.label
	}
}

impl fmt::Debug for ValueProvider {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("ValueProvider").field("label", &self.label).finish()
	}
}
