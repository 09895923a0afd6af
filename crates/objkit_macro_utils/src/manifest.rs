use std::collections::BTreeMap;
use std::env;
use std::path::{Path, PathBuf};
use std::sync::{PoisonError, RwLock};
use std::time::SystemTime;

use proc_macro2::Span;
use toml_edit::{Document, Item, Table};

/// The caller's parsed `Cargo.toml`, used to find how an `objkit_*` crate is
/// reachable from the crate that invokes a derive.
///
/// # Resolution rules
///
/// 1. The crate is a direct dependency: `::objkit_reflect`.
/// 2. The caller depends on the facade crate `objkit`:
///    `::objkit::reflect` (the `objkit_` prefix is stripped).
/// 3. Steps 1-2 again with `dev-dependencies`.
/// 4. Otherwise `::objkit_reflect`, which is right for the crate itself
///    (it declares `extern crate self as objkit_reflect;`) and for doctests.
///
/// # Example
///
/// ```rust
/// # use objkit_macro_utils::Manifest;
/// let path: syn::Path = Manifest::shared(|m| m.get_crate_path("objkit_reflect"));
/// ```
#[derive(Debug)]
pub struct Manifest {
    manifest: Option<Document<Box<str>>>,
    modified_time: Option<SystemTime>,
}

const FACADE_NAME: &str = "objkit";
const CRATE_PREFIX: &str = "objkit_";

impl Manifest {
    fn manifest_path() -> Option<PathBuf> {
        let mut path = PathBuf::from(env::var_os("CARGO_MANIFEST_DIR")?);
        path.push("Cargo.toml");
        Some(path)
    }

    fn load(path: &Path) -> Self {
        let modified_time = std::fs::metadata(path)
            .and_then(|meta| meta.modified())
            .ok();
        let manifest = std::fs::read_to_string(path)
            .ok()
            .and_then(|text| Document::parse(text.into_boxed_str()).ok());

        Self {
            manifest,
            modified_time,
        }
    }

    fn parse_path(path: &str) -> Option<syn::Path> {
        syn::parse_str(path).ok()
    }

    fn find_in_deps(deps: &Table, name: &str) -> Option<syn::Path> {
        if deps.contains_key(name) {
            return Self::parse_path(&format!("::{name}"));
        }

        let module = name.strip_prefix(CRATE_PREFIX)?;
        if deps.contains_key(FACADE_NAME) {
            return Self::parse_path(&format!("::{FACADE_NAME}::{module}"));
        }

        None
    }

    /// Returns the path under which `name` is reachable from the calling crate.
    ///
    /// See the type-level documentation for the lookup order.
    pub fn get_crate_path(&self, name: &str) -> syn::Path {
        let found = self.manifest.as_ref().and_then(|manifest| {
            ["dependencies", "dev-dependencies"]
                .into_iter()
                .find_map(|section| match manifest.get(section) {
                    Some(Item::Table(deps)) => Self::find_in_deps(deps, name),
                    _ => None,
                })
        });

        found.unwrap_or_else(|| {
            let ident = syn::Ident::new(name, Span::call_site());
            syn::Path {
                leading_colon: Some(Default::default()),
                segments: core::iter::once(syn::PathSegment::from(ident)).collect(),
            }
        })
    }

    /// Runs `func` against the caller's manifest.
    ///
    /// Parsed manifests are cached per path and re-read when the file's
    /// modification time changes. Parsing is not cheap, so a macro should call
    /// this once per invocation and pass the resulting path around.
    pub fn shared<R>(func: impl FnOnce(&Self) -> R) -> R {
        static MANIFESTS: RwLock<BTreeMap<PathBuf, Manifest>> = RwLock::new(BTreeMap::new());

        let Some(path) = Self::manifest_path() else {
            return func(&Self {
                manifest: None,
                modified_time: None,
            });
        };

        let current_time = std::fs::metadata(&path)
            .and_then(|meta| meta.modified())
            .ok();

        {
            let cache = MANIFESTS.read().unwrap_or_else(PoisonError::into_inner);
            if let Some(manifest) = cache.get(&path)
                && manifest.modified_time == current_time
            {
                return func(manifest);
            }
        }

        let manifest = Self::load(&path);
        let result = func(&manifest);

        MANIFESTS
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(path, manifest);

        result
    }
}
