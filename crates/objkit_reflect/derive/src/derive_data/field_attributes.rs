use syn::{Attribute, LitStr, Path};

use crate::REFLECT_ATTRIBUTE_NAME;

/// Field visibility as recorded in the descriptor.
#[derive(Clone, Copy, PartialEq, Eq)]
pub(crate) enum VisibilityKind {
    Public,
    Restricted,
    Private,
}

impl VisibilityKind {
    pub fn from_syn(vis: &syn::Visibility) -> Self {
        match vis {
            syn::Visibility::Public(_) => Self::Public,
            syn::Visibility::Restricted(_) => Self::Restricted,
            syn::Visibility::Inherited => Self::Private,
        }
    }

    fn from_lit(lit: &LitStr) -> syn::Result<Self> {
        match lit.value().as_str() {
            "public" => Ok(Self::Public),
            "restricted" | "protected" => Ok(Self::Restricted),
            "private" => Ok(Self::Private),
            _ => Err(syn::Error::new(
                lit.span(),
                "expected `public`, `restricted`, `protected` or `private`",
            )),
        }
    }
}

/// Field-level `#[reflect(...)]` options.
#[derive(Default)]
pub(crate) struct FieldAttributes {
    /// `ignore`: leave the field out entirely.
    pub ignore: bool,
    /// `setter = path`
    pub setter: Option<Path>,
    /// `getter = path`
    pub getter: Option<Path>,
    /// `type_tag = "..."`
    pub type_tag: Option<LitStr>,
    /// `visibility = "..."`
    pub visibility: Option<VisibilityKind>,
}

impl FieldAttributes {
    pub fn parse_attrs(attrs: &[Attribute]) -> syn::Result<Self> {
        let mut this = Self::default();

        for attr in attrs {
            if !attr.path().is_ident(REFLECT_ATTRIBUTE_NAME) {
                continue;
            }
            attr.parse_nested_meta(|meta| {
                if meta.path.is_ident("ignore") {
                    this.ignore = true;
                } else if meta.path.is_ident("setter") {
                    this.setter = Some(meta.value()?.parse()?);
                } else if meta.path.is_ident("getter") {
                    this.getter = Some(meta.value()?.parse()?);
                } else if meta.path.is_ident("type_tag") {
                    let lit: LitStr = meta.value()?.parse()?;
                    if lit.value().is_empty() {
                        return Err(syn::Error::new(lit.span(), "type tag cannot be empty"));
                    }
                    this.type_tag = Some(lit);
                } else if meta.path.is_ident("visibility") {
                    let lit: LitStr = meta.value()?.parse()?;
                    this.visibility = Some(VisibilityKind::from_lit(&lit)?);
                } else {
                    return Err(meta.error(
                        "unknown field attribute, expected one of `ignore`, `setter = ..`, \
                         `getter = ..`, `type_tag = \"..\"`, `visibility = \"..\"`",
                    ));
                }
                Ok(())
            })?;
        }

        Ok(this)
    }
}
