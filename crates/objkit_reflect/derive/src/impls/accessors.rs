use proc_macro2::TokenStream;
use quote::{format_ident, quote};

use crate::derive_data::ReflectStruct;

/// Generate inherent `get_<field>` / `set_<field>` methods.
///
/// Only with `#[reflect(accessors)]`, and only for eligible fields that do
/// not declare their own getter or setter. The methods keep the field's
/// visibility.
///
/// ```ignore
/// pub(crate) fn get_name(&self) -> &String { &self.name }
/// pub(crate) fn set_name(&mut self, value: String) -> &mut Self { self.name = value; self }
/// ```
pub(crate) fn impl_accessors(info: &ReflectStruct) -> TokenStream {
    let meta = info.meta();
    if meta.attrs().accessors.is_none() {
        return crate::utils::empty();
    }

    let methods = info.eligible_fields().map(|field| {
        let ident = field.ident;
        let ty = field.ty;
        let vis = field.vis;

        let getter = if field.attrs.getter.is_none() {
            let get_ident = format_ident!("get_{}", ident);
            quote! {
                #[inline]
                #vis fn #get_ident(&self) -> &#ty {
                    &self.#ident
                }
            }
        } else {
            crate::utils::empty()
        };

        let setter = if field.attrs.setter.is_none() {
            let set_ident = format_ident!("set_{}", ident);
            quote! {
                #[inline]
                #vis fn #set_ident(&mut self, value: #ty) -> &mut Self {
                    self.#ident = value;
                    self
                }
            }
        } else {
            crate::utils::empty()
        };

        quote! {
            #getter
            #setter
        }
    });

    let real_ident = meta.ident();
    let (impl_generics, ty_generics, where_clause) = meta.generics().split_for_impl();

    quote! {
        impl #impl_generics #real_ident #ty_generics #where_clause {
            #(#methods)*
        }
    }
}
