//! Procedural macros for veritype.
//!
//! Provides derive macros:
//! * `#[derive(Describe)]` - type descriptors for structs and fieldless enums

use proc_macro::TokenStream;

/// Describe derive macro implementation.
mod describe;

/// Derives `veritype_registry::Describe`.
///
/// On a struct with named fields this also derives `veritype_registry::Bean`,
/// exposing every field as a property. The struct must implement `Default`,
/// `Clone`, `PartialEq` and `Debug`, and so must each property type.
///
/// On an enum every variant must be a unit variant, and the enum must also
/// derive `strum::EnumIter`.
///
/// Field attributes:
/// * `#[property(skip)]` - leave the field at its default value
/// * `#[property(rename = "firstName")]` - expose the field under another name
///
/// ```ignore
/// #[derive(Debug, Default, Clone, PartialEq, Describe)]
/// struct Person {
///     #[property(rename = "firstName")]
///     first_name: String,
///     #[property(skip)]
///     cached_len: usize,
/// }
///
/// #[derive(Debug, Clone, Copy, PartialEq, strum::EnumIter, Describe)]
/// enum Status {
///     Open,
///     Closed,
/// }
/// ```
#[proc_macro_derive(Describe, attributes(property))]
pub fn derive_describe(input: TokenStream) -> TokenStream {
	describe::derive_describe(input)
}
