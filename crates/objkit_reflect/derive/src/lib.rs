//! See [`Reflect`](derive_reflect).
#![cfg_attr(docsrs, feature(doc_cfg))]
#![allow(clippy::std_instead_of_core, reason = "proc-macro lib")]
#![allow(clippy::std_instead_of_alloc, reason = "proc-macro lib")]

use proc_macro::TokenStream;
use quote::quote;
use syn::{DeriveInput, parse_macro_input};

static REFLECT_ATTRIBUTE_NAME: &str = "reflect";

// -----------------------------------------------------------------------------
// Modules

mod derive_data;
mod impls;
mod path;
mod utils;

// -----------------------------------------------------------------------------
// Macros

/// # Reflection Derivation
///
/// `#[derive(Reflect)]` works on structs with named fields and implements:
///
/// - `Reflect` and `FromReflect`
/// - `Described`: the cached type descriptor, listing every field with its
///   visibility, docs and declared-type tag
/// - `Fields`: name-based field access
///
/// `ArrayConvertible` and `DynamicAccessor` then apply through their blanket
/// implementations.
///
/// Every field type must implement `FromReflect`. Eligible fields
/// (restricted visibility such as `pub(crate)`) must also implement `Clone`,
/// as `to_array` copies them.
///
/// ## Visibility
///
/// | field | visibility |
/// |---|---|
/// | `pub` | `Public` |
/// | `pub(crate)`, `pub(super)`, `pub(in path)` | `Restricted` |
/// | (none) | `Private` |
///
/// Override it with `#[reflect(visibility = "public" | "restricted" | "protected" | "private")]`.
///
/// ## Type Tags
///
/// A field's declared-type tag is read from its docs (`/// @var int`,
/// `/// @type string`) or given with `#[reflect(type_tag = "int")]`, which
/// takes precedence.
///
/// ## Field Attributes
///
/// ```rust, ignore
/// #[derive(Reflect, Default)]
/// struct User {
///     #[reflect(setter = User::store_name, getter = User::name)]
///     pub(crate) name: String,
///     #[reflect(type_tag = "int")]
///     pub(crate) age: u32,
///     #[reflect(ignore)]
///     cache: Vec<u8>,
/// }
/// ```
///
/// - `setter = path`: an `fn(&mut Self, FieldType)`, returning `()` or
///   `&mut Self`, used by generic `set` and `call("setX", ..)`.
/// - `getter = path`: an `fn(&Self) -> &FieldType`, used by generic `get`
///   and `call("getX", ..)`.
/// - `ignore`: the field is left out of reflection entirely.
///
/// ## Type Attributes
///
/// - `partial_eq`: `reflect_partial_eq` uses the type's `PartialEq`.
/// - `debug`: `reflect_debug` uses the type's `Debug` (otherwise fields are
///   printed one by one).
/// - `accessors`: generates inherent `get_<field>` / `set_<field>` methods
///   for every eligible field without its own getter/setter.
/// - `statics(path, ...)`: lists associated consts or statics as static
///   members of the descriptor. They are never eligible.
/// - `auto_register`: submits the type for
///   `DescriptorRegistry::auto_register`. No effect on generic types, or
///   without the `auto_register` feature.
///
/// ```rust, ignore
/// #[derive(Reflect, PartialEq, Debug)]
/// #[reflect(partial_eq, debug, accessors, auto_register, statics(Self::LIMIT))]
/// struct Quota {
///     pub(crate) used: u32,
/// }
///
/// impl Quota {
///     const LIMIT: u32 = 100;
/// }
/// ```
#[proc_macro_derive(Reflect, attributes(reflect))]
pub fn derive_reflect(input: TokenStream) -> TokenStream {
    let ast = parse_macro_input!(input as DeriveInput);

    let reflect_struct = match derive_data::ReflectStruct::from_input(&ast) {
        Ok(val) => val,
        Err(err) => return err.into_compile_error().into(),
    };

    let reflect_impls = impls::impl_struct(&reflect_struct);

    TokenStream::from(quote! {
        const _: () = {
            #reflect_impls
        };
    })
}
