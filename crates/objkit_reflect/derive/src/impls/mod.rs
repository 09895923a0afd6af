//! Code generation, one module per generated impl.

// -----------------------------------------------------------------------------
// Modules

mod accessors;
mod auto_register;
mod trait_described;
mod trait_fields;
mod trait_reflect;

// -----------------------------------------------------------------------------
// Internal API

use proc_macro2::TokenStream;
use quote::quote;

use crate::derive_data::ReflectStruct;

/// Generates every impl of `#[derive(Reflect)]` for a struct.
pub(crate) fn impl_struct(info: &ReflectStruct) -> TokenStream {
    let reflect_impl = trait_reflect::impl_trait_reflect(info);
    let described_impl = trait_described::impl_trait_described(info);
    let fields_impl = trait_fields::impl_trait_fields(info);
    let accessors_impl = accessors::impl_accessors(info);
    let auto_register_impl = auto_register::get_auto_register_impl(info.meta());

    quote! {
        #reflect_impl

        #described_impl

        #fields_impl

        #accessors_impl

        #auto_register_impl
    }
}
