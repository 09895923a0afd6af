use syn::ext::IdentExt;
use syn::spanned::Spanned;
use syn::{Data, DeriveInput, Fields, Ident, Type};

use super::{FieldAttributes, ReflectMeta, TypeAttributes, VisibilityKind};

/// A reflected named field.
pub(crate) struct StructField<'a> {
    pub ident: &'a Ident,
    pub ty: &'a Type,
    /// Declared visibility, reused for generated accessors.
    pub vis: &'a syn::Visibility,
    /// Visibility recorded in the descriptor.
    pub visibility: VisibilityKind,
    pub attrs: FieldAttributes,
    pub docs: Option<String>,
}

impl StructField<'_> {
    /// Restricted fields are the ones array conversion covers.
    #[inline]
    pub fn is_eligible(&self) -> bool {
        self.visibility == VisibilityKind::Restricted
    }

    /// Field name without any `r#` prefix.
    #[inline]
    pub fn name(&self) -> String {
        self.ident.unraw().to_string()
    }
}

/// A struct with named fields, ready for code generation.
///
/// Fields marked `#[reflect(ignore)]` are already filtered out.
pub(crate) struct ReflectStruct<'a> {
    meta: ReflectMeta<'a>,
    fields: Vec<StructField<'a>>,
}

impl<'a> ReflectStruct<'a> {
    pub fn from_input(input: &'a DeriveInput) -> syn::Result<Self> {
        let Data::Struct(data) = &input.data else {
            return Err(syn::Error::new(
                input.ident.span(),
                "`#[derive(Reflect)]` only supports structs with named fields",
            ));
        };
        let Fields::Named(named) = &data.fields else {
            return Err(syn::Error::new(
                data.fields.span(),
                "`#[derive(Reflect)]` only supports structs with named fields",
            ));
        };
        if let Some(lifetime) = input.generics.lifetimes().next() {
            return Err(syn::Error::new(
                lifetime.span(),
                "reflected types cannot have lifetime parameters",
            ));
        }

        let attrs = TypeAttributes::parse_attrs(&input.attrs)?;

        let mut fields = Vec::with_capacity(named.named.len());
        for field in &named.named {
            let field_attrs = FieldAttributes::parse_attrs(&field.attrs)?;
            if field_attrs.ignore {
                continue;
            }
            let Some(ident) = field.ident.as_ref() else {
                continue;
            };
            fields.push(StructField {
                ident,
                ty: &field.ty,
                vis: &field.vis,
                visibility: field_attrs
                    .visibility
                    .unwrap_or_else(|| VisibilityKind::from_syn(&field.vis)),
                docs: crate::utils::collect_docs(&field.attrs)?,
                attrs: field_attrs,
            });
        }

        Ok(Self {
            meta: ReflectMeta::new(attrs, &input.ident, &input.generics),
            fields,
        })
    }

    #[inline]
    pub fn meta(&self) -> &ReflectMeta<'a> {
        &self.meta
    }

    /// Reflected fields in declaration order.
    #[inline]
    pub fn fields(&self) -> &[StructField<'a>] {
        &self.fields
    }

    /// Eligible fields in declaration order.
    #[inline]
    pub fn eligible_fields(&self) -> impl Iterator<Item = &StructField<'a>> {
        self.fields.iter().filter(|field| field.is_eligible())
    }

    /// Splits the generics with the bounds all field impls need.
    pub fn split_generics(
        &self,
    ) -> (
        proc_macro2::TokenStream,
        proc_macro2::TokenStream,
        Option<syn::WhereClause>,
    ) {
        let reflected: Vec<&Type> = self.fields.iter().map(|field| field.ty).collect();
        let cloned: Vec<&Type> = self.eligible_fields().map(|field| field.ty).collect();
        self.meta.split_generics(&reflected, &cloned)
    }
}
