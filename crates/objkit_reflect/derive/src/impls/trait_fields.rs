use proc_macro2::TokenStream;
use quote::quote;

use crate::derive_data::ReflectStruct;

/// Generate implementation code for `Fields`.
///
/// `invoke_getter` and `invoke_setter` are only generated when a field
/// declares `getter = ..` or `setter = ..`; the trait defaults go to the
/// field directly.
pub(crate) fn impl_trait_fields(info: &ReflectStruct) -> TokenStream {
    let meta = info.meta();
    let objkit_reflect_path = meta.objkit_reflect_path();
    let fields_ = crate::path::fields_(objkit_reflect_path);
    let reflect_ = crate::path::reflect_(objkit_reflect_path);
    let from_reflect_ = crate::path::from_reflect_(objkit_reflect_path);
    let macro_exports_ = crate::path::macro_exports_(objkit_reflect_path);

    let field_arms = info.fields().iter().map(|field| {
        let name = field.name();
        let ident = field.ident;
        quote! { #name => #macro_exports_::Some(&self.#ident as &dyn #reflect_), }
    });

    let field_mut_arms = info.fields().iter().map(|field| {
        let name = field.name();
        let ident = field.ident;
        quote! { #name => #macro_exports_::Some(&mut self.#ident as &mut dyn #reflect_), }
    });

    let clone_arms = info.eligible_fields().map(|field| {
        let name = field.name();
        let ident = field.ident;
        quote! {
            #name => #macro_exports_::Some(
                #macro_exports_::Box::new(::core::clone::Clone::clone(&self.#ident))
                    as #macro_exports_::Box<dyn #reflect_>,
            ),
        }
    });

    let set_arms = info.fields().iter().map(|field| {
        let name = field.name();
        let ident = field.ident;
        let ty = field.ty;
        quote! {
            #name => {
                self.#ident = <#ty as #from_reflect_>::take_from_reflect(value)?;
                #macro_exports_::Ok(())
            }
        }
    });

    let getter_arms: Vec<TokenStream> = info
        .fields()
        .iter()
        .filter_map(|field| {
            let getter = field.attrs.getter.as_ref()?;
            let name = field.name();
            Some(quote! {
                #name => #macro_exports_::Some(#getter(self) as &dyn #reflect_),
            })
        })
        .collect();

    let invoke_getter_tokens = if getter_arms.is_empty() {
        crate::utils::empty()
    } else {
        quote! {
            fn invoke_getter(&self, name: &str) -> #macro_exports_::Option<&dyn #reflect_> {
                match name {
                    #(#getter_arms)*
                    _ => #fields_::field(self, name),
                }
            }
        }
    };

    let setter_arms: Vec<TokenStream> = info
        .fields()
        .iter()
        .filter_map(|field| {
            let setter = field.attrs.setter.as_ref()?;
            let name = field.name();
            let ty = field.ty;
            Some(quote! {
                #name => #macro_exports_::assign_with::<#ty>(value, |value| {
                    #setter(self, value);
                }),
            })
        })
        .collect();

    let invoke_setter_tokens = if setter_arms.is_empty() {
        crate::utils::empty()
    } else {
        quote! {
            fn invoke_setter(
                &mut self,
                name: &str,
                value: #macro_exports_::Box<dyn #reflect_>,
            ) -> #macro_exports_::Result<(), #macro_exports_::Box<dyn #reflect_>> {
                match name {
                    #(#setter_arms)*
                    _ => #fields_::set_field(self, name, value),
                }
            }
        }
    };

    let real_ident = meta.ident();
    let (impl_generics, ty_generics, where_clause) = info.split_generics();

    quote! {
        impl #impl_generics #fields_ for #real_ident #ty_generics #where_clause {
            fn field(&self, name: &str) -> #macro_exports_::Option<&dyn #reflect_> {
                match name {
                    #(#field_arms)*
                    _ => #macro_exports_::None,
                }
            }

            fn field_mut(&mut self, name: &str) -> #macro_exports_::Option<&mut dyn #reflect_> {
                match name {
                    #(#field_mut_arms)*
                    _ => #macro_exports_::None,
                }
            }

            fn clone_field(
                &self,
                name: &str,
            ) -> #macro_exports_::Option<#macro_exports_::Box<dyn #reflect_>> {
                match name {
                    #(#clone_arms)*
                    _ => #macro_exports_::None,
                }
            }

            fn set_field(
                &mut self,
                name: &str,
                value: #macro_exports_::Box<dyn #reflect_>,
            ) -> #macro_exports_::Result<(), #macro_exports_::Box<dyn #reflect_>> {
                match name {
                    #(#set_arms)*
                    _ => #macro_exports_::Err(value),
                }
            }

            #invoke_getter_tokens

            #invoke_setter_tokens
        }
    }
}
