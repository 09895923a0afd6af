//! Type descriptors: the cached shape of a type.
//!
//! - [`TypeDescriptor`]: identity and ordered fields of one type.
//! - [`FieldDescriptor`]: one data member, with its [`Visibility`] and
//!   declared-type tag.
//! - [`FieldMetadata`]: parses declared-type tags out of field docs.
//! - [`FieldsConfig`]: eligible field name to [`FieldConfig`].
//! - [`Described`], [`DynamicDescribed`]: static and object-safe access to
//!   a type's descriptor.

// -----------------------------------------------------------------------------
// Modules

mod described;
mod field_descriptor;
mod metadata;
mod type_descriptor;
mod visibility;

// -----------------------------------------------------------------------------
// Exports

pub use described::{Described, DynamicDescribed};
pub use field_descriptor::FieldDescriptor;
pub use metadata::{FieldConfig, FieldMetadata, FieldsConfig};
pub use type_descriptor::TypeDescriptor;
pub use visibility::Visibility;
