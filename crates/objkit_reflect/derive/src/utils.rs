use proc_macro2::TokenStream;
use syn::{Attribute, Expr, ExprLit, Lit, Meta};

/// An empty token stream.
#[inline(always)]
pub(crate) fn empty() -> TokenStream {
    TokenStream::new()
}

/// Joins the `#[doc = "..."]` attributes (including `///` comments) into
/// one string, one line per attribute.
///
/// The single leading space that `///` leaves is removed. Returns `None`
/// when there are no docs.
pub(crate) fn collect_docs(attrs: &[Attribute]) -> syn::Result<Option<String>> {
    let mut lines = Vec::new();
    for attr in attrs.iter().filter(|attr| attr.path().is_ident("doc")) {
        let Meta::NameValue(pair) = &attr.meta else {
            continue;
        };
        match &pair.value {
            Expr::Lit(ExprLit {
                lit: Lit::Str(lit_str),
                ..
            }) => {
                let line = lit_str.value();
                lines.push(line.strip_prefix(' ').map(str::to_owned).unwrap_or(line));
            }
            value => {
                return Err(syn::Error::new_spanned(
                    value,
                    "`#[doc = ...]` expected a string literal value",
                ));
            }
        }
    }

    if lines.iter().all(|line| line.trim().is_empty()) {
        return Ok(None);
    }
    Ok(Some(lines.join("\n")))
}

