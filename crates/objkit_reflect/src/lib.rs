#![doc = include_str!("../README.md")]
#![cfg_attr(docsrs, feature(doc_cfg))]

// -----------------------------------------------------------------------------
// Extern Self

// Generated code names this crate `objkit_reflect`, both inside the crate
// (tests) and outside of it (doctests, users). The alias makes both resolve.
extern crate self as objkit_reflect;

extern crate alloc;

// -----------------------------------------------------------------------------
// Modules

mod error;
mod introspect;
mod reflection;

pub mod impls;
pub mod info;
pub mod ops;
pub mod registry;

// -----------------------------------------------------------------------------
// Top-Level exports

#[doc(hidden)]
pub mod __macro_exports;

pub use error::ReflectError;
pub use introspect::Introspector;
pub use reflection::{FromReflect, Reflect};
pub use objkit_reflect_derive as derive;

/// The traits a consuming type needs in scope.
///
/// ```
/// use objkit_reflect::prelude::*;
/// ```
pub mod prelude {
    pub use crate::derive::Reflect;
    pub use crate::field_map;
    pub use crate::info::{Described, DynamicDescribed};
    pub use crate::ops::{ArrayConvertible, DynamicAccessor, FieldMap, Fields};
    pub use crate::{FromReflect, Reflect};
}
