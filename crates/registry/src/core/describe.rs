//! The [`Describe`] trait and its implementations for std types.

use std::any::Any;
use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet, VecDeque};
use std::fmt;
use std::hash::Hash;

use super::descriptor::{RawType, Shape, TypeDescriptor};
use super::{ProviderError, Value};

/// Types that can describe themselves as a [`TypeDescriptor`].
///
/// The supertraits are what the registry needs to move instances around as
/// [`Value`]s and compare them.
pub trait Describe: Any + Send + Sync + fmt::Debug + PartialEq + Clone {
	fn describe() -> TypeDescriptor;
}

macro_rules! describe_scalar {
	($($ty:ty),* $(,)?) => {
		$(
			impl Describe for $ty {
				fn describe() -> TypeDescriptor {
					TypeDescriptor::scalar::<$ty>()
				}
			}
		)*
	};
}

describe_scalar!(
	bool, char, i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64, String, (),
);

/// Collects element values into `C`, dropping absent ones.
pub(crate) fn collect<C, T>(items: Vec<Value>) -> Result<Value, ProviderError>
where
	C: Describe + FromIterator<T>,
	T: Describe,
{
	let mut out = Vec::with_capacity(items.len());
	for item in items {
		if item.is_absent() {
			continue;
		}
		out.push(item.downcast::<T>().map_err(|v| ProviderError::mismatch::<T>(&v))?);
	}
	Ok(Value::new(out.into_iter().collect::<C>()))
}

/// Collects key/value pairs into `M`, dropping entries with an absent side.
pub(crate) fn collect_map<M, K, V>(entries: Vec<(Value, Value)>) -> Result<Value, ProviderError>
where
	M: Describe + FromIterator<(K, V)>,
	K: Describe,
	V: Describe,
{
	let mut out = Vec::with_capacity(entries.len());
	for (k, v) in entries {
		if k.is_absent() || v.is_absent() {
			continue;
		}
		let k = k.downcast::<K>().map_err(|k| ProviderError::mismatch::<K>(&k))?;
		let v = v.downcast::<V>().map_err(|v| ProviderError::mismatch::<V>(&v))?;
		out.push((k, v));
	}
	Ok(Value::new(out.into_iter().collect::<M>()))
}

pub(crate) fn wrap_some<T: Describe>(value: Value) -> Result<Value, ProviderError> {
	let inner = value.downcast::<T>().map_err(|v| ProviderError::mismatch::<T>(&v))?;
	Ok(Value::new(Some(inner)))
}

impl<T: Describe> Describe for Vec<T> {
	fn describe() -> TypeDescriptor {
		TypeDescriptor::new(
			RawType::new::<Self>(Shape::Sequence(collect::<Self, T>)).with_bare(<Vec<String>>::describe),
			vec![T::describe()],
		)
	}
}

impl<T: Describe> Describe for VecDeque<T> {
	fn describe() -> TypeDescriptor {
		TypeDescriptor::new(
			RawType::new::<Self>(Shape::Sequence(collect::<Self, T>)).with_bare(<VecDeque<String>>::describe),
			vec![T::describe()],
		)
	}
}

impl<T: Describe> Describe for Box<[T]> {
	fn describe() -> TypeDescriptor {
		TypeDescriptor::new(
			RawType::new::<Self>(Shape::Array(collect::<Self, T>)).with_bare(<Box<[String]>>::describe),
			vec![T::describe()],
		)
	}
}

impl<T: Describe + Eq + Hash> Describe for HashSet<T> {
	fn describe() -> TypeDescriptor {
		TypeDescriptor::new(
			RawType::new::<Self>(Shape::Set(collect::<Self, T>)).with_bare(<HashSet<String>>::describe),
			vec![T::describe()],
		)
	}
}

impl<T: Describe + Ord> Describe for BTreeSet<T> {
	fn describe() -> TypeDescriptor {
		TypeDescriptor::new(
			RawType::new::<Self>(Shape::Set(collect::<Self, T>)).with_bare(<BTreeSet<String>>::describe),
			vec![T::describe()],
		)
	}
}

impl<K: Describe + Eq + Hash, V: Describe> Describe for HashMap<K, V> {
	fn describe() -> TypeDescriptor {
		TypeDescriptor::new(
			RawType::new::<Self>(Shape::Map(collect_map::<Self, K, V>)).with_bare(<HashMap<String, String>>::describe),
			vec![K::describe(), V::describe()],
		)
	}
}

impl<K: Describe + Ord, V: Describe> Describe for BTreeMap<K, V> {
	fn describe() -> TypeDescriptor {
		TypeDescriptor::new(
			RawType::new::<Self>(Shape::Map(collect_map::<Self, K, V>)).with_bare(<BTreeMap<String, String>>::describe),
			vec![K::describe(), V::describe()],
		)
	}
}

impl<T: Describe> Describe for Option<T> {
	fn describe() -> TypeDescriptor {
		TypeDescriptor::new(
			RawType::new::<Self>(Shape::Optional(wrap_some::<T>)).with_bare(<Option<String>>::describe),
			vec![T::describe()],
		)
	}
}
