use proc_macro2::TokenStream;
use quote::{quote, quote_spanned};

use crate::derive_data::ReflectStruct;

/// Generate implementation code for `Reflect` and `FromReflect`.
///
/// `reflect_partial_eq` and `reflect_debug` use the standard traits when the
/// type declares them available (`partial_eq`, `debug`).
pub(crate) fn impl_trait_reflect(info: &ReflectStruct) -> TokenStream {
    let meta = info.meta();
    let objkit_reflect_path = meta.objkit_reflect_path();
    let reflect_ = crate::path::reflect_(objkit_reflect_path);
    let from_reflect_ = crate::path::from_reflect_(objkit_reflect_path);
    let fields_ = crate::path::fields_(objkit_reflect_path);
    let macro_exports_ = crate::path::macro_exports_(objkit_reflect_path);

    let partial_eq_tokens = match meta.attrs().partial_eq {
        Some(span) => quote_spanned! { span =>
            fn reflect_partial_eq(&self, other: &dyn #reflect_) -> #macro_exports_::Option<bool> {
                #macro_exports_::Some(
                    other
                        .downcast_ref::<Self>()
                        .is_some_and(|other| ::core::cmp::PartialEq::eq(self, other)),
                )
            }
        },
        None => crate::utils::empty(),
    };

    let debug_tokens = match meta.attrs().debug {
        Some(span) => quote_spanned! { span =>
            fn reflect_debug(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                ::core::fmt::Debug::fmt(self, f)
            }
        },
        None => quote! {
            fn reflect_debug(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                #macro_exports_::fields_debug(self, f)
            }
        },
    };

    let real_ident = meta.ident();
    let (impl_generics, ty_generics, where_clause) = info.split_generics();

    quote! {
        impl #impl_generics #reflect_ for #real_ident #ty_generics #where_clause {
            #partial_eq_tokens

            #debug_tokens

            #[inline]
            fn as_fields(&self) -> #macro_exports_::Option<&dyn #fields_> {
                #macro_exports_::Some(self)
            }

            #[inline]
            fn as_fields_mut(&mut self) -> #macro_exports_::Option<&mut dyn #fields_> {
                #macro_exports_::Some(self)
            }
        }

        impl #impl_generics #from_reflect_ for #real_ident #ty_generics #where_clause {}
    }
}
