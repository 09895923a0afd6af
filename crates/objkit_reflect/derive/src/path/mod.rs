//! Paths of the `objkit_reflect` items that generated code names.
//!
//! Kept in one place so that moving an item only touches this module.

use proc_macro2::TokenStream;
use quote::quote;

// -----------------------------------------------------------------------------
// Crate Path

/// Get the access path to the `objkit_reflect` crate.
///
/// Resolved from the caller's `Cargo.toml`:
///
/// 1. crates depending on `objkit_reflect` get `::objkit_reflect`;
/// 2. crates depending on the `objkit` facade get `::objkit::reflect`;
/// 3. anything else gets `::objkit_reflect`.
///
/// This reads files and takes a lock, so callers resolve it once per derive
/// and pass it around.
pub(crate) fn objkit_reflect() -> syn::Path {
    objkit_macro_utils::Manifest::shared(|manifest| manifest.get_crate_path("objkit_reflect"))
}

// -----------------------------------------------------------------------------
// Internal API

#[inline(always)]
pub(crate) fn macro_exports_(path: &syn::Path) -> TokenStream {
    quote! {
        #path::__macro_exports
    }
}

#[inline(always)]
pub(crate) fn reflect_(path: &syn::Path) -> TokenStream {
    quote! {
        #path::Reflect
    }
}

#[inline(always)]
pub(crate) fn from_reflect_(path: &syn::Path) -> TokenStream {
    quote! {
        #path::FromReflect
    }
}

#[inline(always)]
pub(crate) fn fields_(path: &syn::Path) -> TokenStream {
    quote! {
        #path::ops::Fields
    }
}

#[inline(always)]
pub(crate) fn described_(path: &syn::Path) -> TokenStream {
    quote! {
        #path::info::Described
    }
}

#[inline(always)]
pub(crate) fn type_descriptor_(path: &syn::Path) -> TokenStream {
    quote! {
        #path::info::TypeDescriptor
    }
}

#[inline(always)]
pub(crate) fn field_descriptor_(path: &syn::Path) -> TokenStream {
    quote! {
        #path::info::FieldDescriptor
    }
}

#[inline(always)]
pub(crate) fn visibility_(path: &syn::Path) -> TokenStream {
    quote! {
        #path::info::Visibility
    }
}

#[inline(always)]
pub(crate) fn non_generic_descriptor_cell_(path: &syn::Path) -> TokenStream {
    quote! {
        #path::impls::NonGenericDescriptorCell
    }
}

#[inline(always)]
pub(crate) fn generic_descriptor_cell_(path: &syn::Path) -> TokenStream {
    quote! {
        #path::impls::GenericDescriptorCell
    }
}

#[cfg(feature = "auto_register")]
#[inline(always)]
pub(crate) fn auto_register_(path: &syn::Path) -> TokenStream {
    quote! {
        #path::__macro_exports::auto_register
    }
}
