use proc_macro2::Span;
use syn::punctuated::Punctuated;
use syn::spanned::Spanned;
use syn::{Attribute, Path, Token, parenthesized};

use crate::REFLECT_ATTRIBUTE_NAME;

/// Type-level `#[reflect(...)]` options.
#[derive(Default)]
pub(crate) struct TypeAttributes {
    /// `partial_eq`: compare through the type's `PartialEq`.
    pub partial_eq: Option<Span>,
    /// `debug`: format through the type's `Debug`.
    pub debug: Option<Span>,
    /// `accessors`: generate `get_<field>` / `set_<field>`.
    pub accessors: Option<Span>,
    /// `auto_register`: submit the type for static registration.
    pub auto_register: Option<Span>,
    /// `statics(...)`: static members of the descriptor.
    pub statics: Vec<Path>,
    /// Collected `#[doc]` of the type.
    pub docs: Option<String>,
}

impl TypeAttributes {
    pub fn parse_attrs(attrs: &[Attribute]) -> syn::Result<Self> {
        let mut this = Self {
            docs: crate::utils::collect_docs(attrs)?,
            ..Self::default()
        };

        for attr in attrs {
            if !attr.path().is_ident(REFLECT_ATTRIBUTE_NAME) {
                continue;
            }
            attr.parse_nested_meta(|meta| {
                let span = meta.path.span();
                if meta.path.is_ident("partial_eq") {
                    this.partial_eq = Some(span);
                } else if meta.path.is_ident("debug") {
                    this.debug = Some(span);
                } else if meta.path.is_ident("accessors") {
                    this.accessors = Some(span);
                } else if meta.path.is_ident("auto_register") {
                    this.auto_register = Some(span);
                } else if meta.path.is_ident("statics") {
                    let content;
                    parenthesized!(content in meta.input);
                    let paths = Punctuated::<Path, Token![,]>::parse_terminated(&content)?;
                    this.statics.extend(paths);
                } else {
                    return Err(meta.error(
                        "unknown type attribute, expected one of `partial_eq`, `debug`, \
                         `accessors`, `auto_register`, `statics(..)`",
                    ));
                }
                Ok(())
            })?;
        }

        Ok(this)
    }
}
