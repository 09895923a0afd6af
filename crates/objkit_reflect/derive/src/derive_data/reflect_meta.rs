use proc_macro2::TokenStream;
use quote::{ToTokens, quote};
use syn::punctuated::Punctuated;
use syn::{Generics, Ident, Path, Type, WhereClause, parse_quote};

use super::TypeAttributes;

/// What every generated impl needs to know about the deriving type.
pub(crate) struct ReflectMeta<'a> {
    objkit_reflect_path: Path,
    attrs: TypeAttributes,
    ident: &'a Ident,
    generics: &'a Generics,
}

impl core::fmt::Debug for ReflectMeta<'_> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("ReflectMeta")
            .field("objkit_reflect_path", &self.objkit_reflect_path.to_token_stream())
            .field("ident", &self.ident)
            .finish()
    }
}

impl<'a> ReflectMeta<'a> {
    #[inline]
    pub fn new(attrs: TypeAttributes, ident: &'a Ident, generics: &'a Generics) -> Self {
        Self {
            objkit_reflect_path: crate::path::objkit_reflect(),
            attrs,
            ident,
            generics,
        }
    }

    #[inline]
    pub fn objkit_reflect_path(&self) -> &Path {
        &self.objkit_reflect_path
    }

    #[inline]
    pub fn attrs(&self) -> &TypeAttributes {
        &self.attrs
    }

    #[inline]
    pub fn ident(&self) -> &Ident {
        self.ident
    }

    #[inline]
    pub fn generics(&self) -> &Generics {
        self.generics
    }

    /// Returns `true` if the type has type or const parameters.
    #[inline]
    pub fn impl_with_generic(&self) -> bool {
        self.generics.type_params().next().is_some()
            || self.generics.const_params().next().is_some()
    }

    /// Generate type-level docs code
    ///
    /// Similar to following:
    ///
    /// ```ignore
    /// .with_docs("......")
    /// ```
    pub fn with_docs_expression(&self) -> TokenStream {
        match &self.attrs.docs {
            Some(docs) => quote! { .with_docs(#docs) },
            None => crate::utils::empty(),
        }
    }

    /// Splits the generics for an impl block.
    ///
    /// For generic types the where clause gains `Send + Sync + 'static` on
    /// every type parameter, `FromReflect` on every `reflected` field type
    /// and `Clone` on every `cloned` field type. Non-generic types keep
    /// their where clause as is.
    pub fn split_generics(
        &self,
        reflected: &[&Type],
        cloned: &[&Type],
    ) -> (TokenStream, TokenStream, Option<WhereClause>) {
        let (impl_generics, ty_generics, where_clause) = self.generics.split_for_impl();
        let impl_generics = impl_generics.to_token_stream();
        let ty_generics = ty_generics.to_token_stream();

        if !self.impl_with_generic() {
            return (impl_generics, ty_generics, where_clause.cloned());
        }

        let from_reflect_ = crate::path::from_reflect_(&self.objkit_reflect_path);
        let mut where_clause = where_clause.cloned().unwrap_or_else(|| WhereClause {
            where_token: Default::default(),
            predicates: Punctuated::new(),
        });
        for param in self.generics.type_params() {
            let ident = &param.ident;
            where_clause
                .predicates
                .push(parse_quote! { #ident: ::core::marker::Send + ::core::marker::Sync + 'static });
        }
        for ty in reflected {
            where_clause.predicates.push(parse_quote! { #ty: #from_reflect_ });
        }
        for ty in cloned {
            where_clause
                .predicates
                .push(parse_quote! { #ty: ::core::clone::Clone });
        }

        (impl_generics, ty_generics, Some(where_clause))
    }
}
