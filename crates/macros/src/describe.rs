//! `#[derive(Describe)]` for structs and fieldless enums.

use proc_macro::TokenStream;
use quote::quote;
use syn::{Data, DeriveInput, Fields, parse_macro_input};

pub fn derive_describe(input: TokenStream) -> TokenStream {
	let input = parse_macro_input!(input as DeriveInput);

	if !input.generics.params.is_empty() {
		return syn::Error::new_spanned(&input.generics, "Describe cannot be derived for generic types")
			.to_compile_error()
			.into();
	}

	let expanded = match &input.data {
		Data::Struct(data) => expand_struct(&input, &data.fields),
		Data::Enum(data) => expand_enum(&input, data),
		Data::Union(_) => Err(syn::Error::new_spanned(&input, "Describe cannot be derived for unions")),
	};

	match expanded {
		Ok(tokens) => tokens.into(),
		Err(e) => e.to_compile_error().into(),
	}
}

/// Parsed `#[property(...)]` options for one field.
#[derive(Default)]
struct PropertyAttr {
	skip: bool,
	rename: Option<String>,
}

fn parse_property_attr(field: &syn::Field) -> syn::Result<PropertyAttr> {
	let mut parsed = PropertyAttr::default();
	for attr in field.attrs.iter().filter(|a| a.path().is_ident("property")) {
		attr.parse_nested_meta(|meta| {
			if meta.path.is_ident("skip") {
				parsed.skip = true;
				Ok(())
			} else if meta.path.is_ident("rename") {
				let value: syn::LitStr = meta.value()?.parse()?;
				parsed.rename = Some(value.value());
				Ok(())
			} else {
				Err(meta.error("unknown property attribute; expected `skip` or `rename`"))
			}
		})?;
	}
	Ok(parsed)
}

fn expand_struct(input: &DeriveInput, fields: &Fields) -> syn::Result<proc_macro2::TokenStream> {
	let ident = &input.ident;

	let named = match fields {
		Fields::Named(named) => named.named.iter().collect::<Vec<_>>(),
		Fields::Unit => Vec::new(),
		Fields::Unnamed(_) => {
			return Err(syn::Error::new_spanned(
				input,
				"Describe requires named fields; tuple structs have no property names",
			));
		}
	};

	let mut properties = Vec::with_capacity(named.len());
	for field in named {
		let attr = parse_property_attr(field)?;
		if attr.skip {
			continue;
		}
		let Some(field_ident) = &field.ident else {
			continue;
		};
		let ty = &field.ty;
		let name = attr.rename.unwrap_or_else(|| field_ident.to_string());
		properties.push(quote! {
			::veritype_registry::Property::new::<#ty>(
				#name,
				|s: &Self| ::std::clone::Clone::clone(&s.#field_ident),
				|s: &mut Self, v: #ty| s.#field_ident = v,
			)
		});
	}

	Ok(quote! {
		impl ::veritype_registry::Bean for #ident {
			fn properties() -> ::std::vec::Vec<::veritype_registry::Property<Self>> {
				::std::vec![#(#properties),*]
			}
		}

		impl ::veritype_registry::Describe for #ident {
			fn describe() -> ::veritype_registry::TypeDescriptor {
				::veritype_registry::TypeDescriptor::structure::<Self>()
			}
		}
	})
}

fn expand_enum(input: &DeriveInput, data: &syn::DataEnum) -> syn::Result<proc_macro2::TokenStream> {
	let ident = &input.ident;

	if let Some(variant) = data.variants.iter().find(|v| !matches!(v.fields, Fields::Unit)) {
		return Err(syn::Error::new_spanned(
			variant,
			"Describe can only be derived for enums whose variants are all unit variants",
		));
	}

	Ok(quote! {
		impl ::veritype_registry::Describe for #ident {
			fn describe() -> ::veritype_registry::TypeDescriptor {
				::veritype_registry::TypeDescriptor::enumeration::<Self>()
			}
		}
	})
}
