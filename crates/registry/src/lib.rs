//! Random value providers for arbitrary types.
//!
//! A [`ProviderRegistry`] answers "can you make a `T`, and if so, give me a
//! provider". The [`Resolver`] layers per-call overrides and on-the-fly
//! synthesis of enumeration and structure providers on top of it.
//!
//! # Layout
//!
//! - [`core`] - descriptors, type-erased values, providers, errors
//! - [`sources`] - structural sources (arrays, sequences, sets, maps, optionals, enums)
//! - [`db`] - the registry, its builder and built-in scalar providers
//! - [`resolve`] - layered resolution and synthesis
//!
//! # Describing Types
//!
//! Every type the registry handles implements [`Describe`]. Scalars and std
//! containers are covered here; user structs and fieldless enums derive it
//! with `veritype-macros`, or implement [`Bean`] and [`Describe`] by hand.

extern crate self as veritype_registry;

pub mod core;
pub mod db;
pub mod resolve;
pub mod sources;

pub use crate::core::{
	Bean, Describe, EnumSelection, Field, ProviderError, ProviderOrigin, Property, RawType, ResolveError, Shape,
	Structure, TypeDescriptor, TypeFamily, Value, ValueProvider,
};
pub use db::{DEFAULT_MAX_SIZE, InsertAction, ProviderEntry, ProviderRegistry, RegistryBuilder};
pub use resolve::{Introspector, OverrideTable, ResolutionStrategy, Resolver, ShapeIntrospector};
pub use sources::ProviderSource;
