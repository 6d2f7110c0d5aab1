//! Shared vocabulary: descriptors, values, providers, errors.

pub mod bean;
pub mod describe;
pub mod descriptor;
pub mod error;
pub mod meta;
pub mod provider;
pub mod random;
pub mod value;

pub use bean::{Bean, Field, Property, Structure};
pub use describe::Describe;
pub use descriptor::{Assemble, AssembleMap, RawType, Shape, TypeDescriptor, TypeFamily, Wrap, short_type_name};
pub use error::{ProviderError, ResolveError};
pub use meta::ProviderOrigin;
pub use provider::ValueProvider;
pub use random::{EnumSelection, Random};
pub use value::{DynValue, Value};
