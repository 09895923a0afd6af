use proc_macro2::TokenStream;
use quote::quote;

use crate::derive_data::{ReflectStruct, StructField, VisibilityKind};

/// Generate implementation code for `Described`.
///
/// The descriptor lists the reflected fields in declaration order, followed
/// by the static members of `#[reflect(statics(..))]`. It is kept in a
/// descriptor cell inside `type_descriptor`.
pub(crate) fn impl_trait_described(info: &ReflectStruct) -> TokenStream {
    let meta = info.meta();
    let objkit_reflect_path = meta.objkit_reflect_path();
    let described_ = crate::path::described_(objkit_reflect_path);
    let type_descriptor_ = crate::path::type_descriptor_(objkit_reflect_path);
    let field_descriptor_ = crate::path::field_descriptor_(objkit_reflect_path);
    let visibility_ = crate::path::visibility_(objkit_reflect_path);

    let instance_fields = info.fields().iter().map(|field| {
        let name = field.name();
        let ty = field.ty;
        let visibility = visibility_tokens(field.visibility, &visibility_);
        let with_docs = field_docs_expression(field);
        let with_type_tag = match &field.attrs.type_tag {
            Some(tag) => quote! { .with_type_tag(#tag) },
            None => crate::utils::empty(),
        };
        quote! {
            #field_descriptor_::new::<#ty>(#name)
                .with_visibility(#visibility)
                #with_docs
                #with_type_tag
        }
    });

    let static_fields = meta.attrs().statics.iter().map(|path| {
        let name = path
            .segments
            .last()
            .map(|segment| segment.ident.to_string())
            .unwrap_or_default();
        let visibility = visibility_tokens(VisibilityKind::Restricted, &visibility_);
        quote! {
            #field_descriptor_::of_static(#name, &#path).with_visibility(#visibility)
        }
    });

    let type_name = meta.ident().to_string();
    let with_docs = meta.with_docs_expression();
    let descriptor_tokens = quote! {
        #type_descriptor_::new::<Self>(#type_name, [
            #(#instance_fields,)*
            #(#static_fields,)*
        ])
        #with_docs
    };

    let inner_cell_tokens = if meta.impl_with_generic() {
        let cell = crate::path::generic_descriptor_cell_(objkit_reflect_path);
        quote! {
            static CELL: #cell = #cell::new();
            CELL.get_or_insert::<Self>(|| {
                #descriptor_tokens
            })
        }
    } else {
        let cell = crate::path::non_generic_descriptor_cell_(objkit_reflect_path);
        quote! {
            static CELL: #cell = #cell::new();
            CELL.get_or_init(|| {
                #descriptor_tokens
            })
        }
    };

    let real_ident = meta.ident();
    let (impl_generics, ty_generics, where_clause) = info.split_generics();

    quote! {
        impl #impl_generics #described_ for #real_ident #ty_generics #where_clause {
            fn type_descriptor() -> &'static #type_descriptor_ {
                #inner_cell_tokens
            }
        }
    }
}

fn visibility_tokens(kind: VisibilityKind, visibility_: &TokenStream) -> TokenStream {
    match kind {
        VisibilityKind::Public => quote! { #visibility_::Public },
        VisibilityKind::Restricted => quote! { #visibility_::Restricted },
        VisibilityKind::Private => quote! { #visibility_::Private },
    }
}

fn field_docs_expression(field: &StructField) -> TokenStream {
    match &field.docs {
        Some(docs) => quote! { .with_docs(#docs) },
        None => crate::utils::empty(),
    }
}
