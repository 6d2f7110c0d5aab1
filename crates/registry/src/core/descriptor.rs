//! Type descriptors: the lookup key for every provider query.

use std::any::TypeId;
use std::fmt;
use std::hash::{Hash, Hasher};

use super::bean::{Bean, Structure};
use super::describe::Describe;
use super::{ProviderError, Value};

/// Collects produced element values into a concrete container.
pub type Assemble = fn(Vec<Value>) -> Result<Value, ProviderError>;
/// Collects produced key/value pairs into a concrete map.
pub type AssembleMap = fn(Vec<(Value, Value)>) -> Result<Value, ProviderError>;
/// Wraps one produced value into a concrete optional.
pub type Wrap = fn(Value) -> Result<Value, ProviderError>;

/// Structural family of a raw type, with the erased glue needed to build it.
#[derive(Clone, Copy)]
pub enum Shape {
	/// Leaf type with no structure the registry can exploit.
	Scalar,
	Array(Assemble),
	Sequence(Assemble),
	Set(Assemble),
	Map(AssembleMap),
	Optional(Wrap),
	/// Fieldless enumeration; lists its constants in declaration order.
	Enumeration(fn() -> Vec<Value>),
	/// Default-constructible type with settable fields.
	Structure(fn() -> Structure),
}

/// Shape without its payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TypeFamily {
	Scalar,
	Array,
	Sequence,
	Set,
	Map,
	Optional,
	Enumeration,
	Structure,
}

impl TypeFamily {
	/// Number of positional type arguments the family expects.
	pub const fn arity(self) -> usize {
		match self {
			Self::Array | Self::Sequence | Self::Set | Self::Optional => 1,
			Self::Map => 2,
			Self::Scalar | Self::Enumeration | Self::Structure => 0,
		}
	}
}

impl fmt::Display for TypeFamily {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		let name = match self {
			Self::Scalar => "scalar",
			Self::Array => "array",
			Self::Sequence => "sequence",
			Self::Set => "set",
			Self::Map => "map",
			Self::Optional => "optional",
			Self::Enumeration => "enumeration",
			Self::Structure => "structure",
		};
		f.write_str(name)
	}
}

impl Shape {
	pub const fn family(&self) -> TypeFamily {
		match self {
			Self::Scalar => TypeFamily::Scalar,
			Self::Array(_) => TypeFamily::Array,
			Self::Sequence(_) => TypeFamily::Sequence,
			Self::Set(_) => TypeFamily::Set,
			Self::Map(_) => TypeFamily::Map,
			Self::Optional(_) => TypeFamily::Optional,
			Self::Enumeration(_) => TypeFamily::Enumeration,
			Self::Structure(_) => TypeFamily::Structure,
		}
	}
}

/// Nominal type identity.
///
/// Equality and hashing use the [`TypeId`] only. A generic container also
/// knows its bare form: the same container over `String` arguments.
#[derive(Clone, Copy)]
pub struct RawType {
	id: TypeId,
	name: &'static str,
	shape: Shape,
	bare: Option<fn() -> TypeDescriptor>,
}

impl RawType {
	pub fn new<T: 'static>(shape: Shape) -> Self {
		Self {
			id: TypeId::of::<T>(),
			name: std::any::type_name::<T>(),
			shape,
			bare: None,
		}
	}

	/// Attaches the descriptor of this container instantiated over `String`.
	pub fn with_bare(mut self, bare: fn() -> TypeDescriptor) -> Self {
		self.bare = Some(bare);
		self
	}

	pub fn scalar<T: 'static>() -> Self {
		Self::new::<T>(Shape::Scalar)
	}

	pub fn id(&self) -> TypeId {
		self.id
	}

	pub fn name(&self) -> &'static str {
		self.name
	}

	pub fn shape(&self) -> Shape {
		self.shape
	}

	pub fn family(&self) -> TypeFamily {
		self.shape.family()
	}
}

impl PartialEq for RawType {
	fn eq(&self, other: &Self) -> bool {
		self.id == other.id
	}
}

impl Eq for RawType {}

impl Hash for RawType {
	fn hash<H: Hasher>(&self, state: &mut H) {
		self.id.hash(state);
	}
}

impl fmt::Debug for RawType {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("RawType")
			.field("name", &self.name)
			.field("family", &self.family())
			.finish()
	}
}

/// A nominal type plus its resolved type arguments.
///
/// Two descriptors are equal iff their raw types and all arguments are equal,
/// recursively.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct TypeDescriptor {
	raw: RawType,
	args: Vec<TypeDescriptor>,
}

impl TypeDescriptor {
	pub fn new(raw: RawType, args: Vec<TypeDescriptor>) -> Self {
		Self { raw, args }
	}

	/// Descriptor of a described Rust type.
	pub fn of<T: Describe>() -> Self {
		T::describe()
	}

	/// Descriptor of a leaf type with no arguments.
	pub fn scalar<T: 'static>() -> Self {
		Self::new(RawType::scalar::<T>(), Vec::new())
	}

	/// Descriptor of a [`Bean`], introspected through its properties.
	pub fn structure<T: Bean>() -> Self {
		Self::new(RawType::new::<T>(Shape::Structure(super::bean::structure_of::<T>)), Vec::new())
	}

	/// Descriptor of a fieldless enumeration whose constants `strum` can iterate.
	pub fn enumeration<T>() -> Self
	where
		T: Describe + strum::IntoEnumIterator,
	{
		Self::new(RawType::new::<T>(Shape::Enumeration(enum_constants::<T>)), Vec::new())
	}

	/// Bare structural reference: arguments dropped, and a generic container
	/// rebased onto its `String` form so its assembler accepts what
	/// [`Self::argument`] falls back to.
	pub fn erased(&self) -> Self {
		let raw = match self.raw.bare {
			Some(bare) => bare().raw,
			None => self.raw,
		};
		Self::new(raw, Vec::new())
	}

	pub fn raw(&self) -> &RawType {
		&self.raw
	}

	pub fn args(&self) -> &[TypeDescriptor] {
		&self.args
	}

	pub fn family(&self) -> TypeFamily {
		self.raw.family()
	}

	pub fn type_id(&self) -> TypeId {
		self.raw.id
	}

	pub fn type_name(&self) -> &'static str {
		self.raw.name
	}

	/// Positional argument, or the `String` descriptor when the signature
	/// carried no argument at that position.
	pub fn argument(&self, index: usize) -> TypeDescriptor {
		self.args
			.get(index)
			.cloned()
			.unwrap_or_else(<String as Describe>::describe)
	}

	/// Element type of arrays, sequences, sets and optionals; key type of maps.
	pub fn element(&self) -> TypeDescriptor {
		self.argument(0)
	}

	/// Value type of maps.
	pub fn value(&self) -> TypeDescriptor {
		self.argument(1)
	}
}

impl fmt::Debug for TypeDescriptor {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{self}")
	}
}

impl fmt::Display for TypeDescriptor {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(short_type_name(self.raw.name))
	}
}

fn enum_constants<T>() -> Vec<Value>
where
	T: Describe + strum::IntoEnumIterator,
{
	T::iter().map(Value::new).collect()
}

/// Strips leading module paths: `alloc::vec::Vec<alloc::string::String>` → `Vec<alloc::string::String>`.
///
/// Only the outermost path is trimmed; generic arguments keep their full paths.
pub fn short_type_name(name: &'static str) -> &'static str {
	let head_end = name.find('<').unwrap_or(name.len());
	match name[..head_end].rfind("::") {
		Some(pos) => &name[pos + 2..],
		None => name,
	}
}
