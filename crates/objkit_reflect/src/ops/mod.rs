//! Field operations on reflected structs.
//!
//! - [`Fields`]: unchecked, name-based field access (derived).
//! - [`ArrayConvertible`]: eligible fields to and from a [`FieldMap`].
//! - [`DynamicAccessor`]: checked get/set, `getX`/`setX` dispatch and the
//!   setter-driven constructor.
//!
//! The last two are implemented for every [`Fields`] type.

// -----------------------------------------------------------------------------
// Modules

mod accessor;
mod array;
mod field_map;
mod fields;

// -----------------------------------------------------------------------------
// Exports

pub use accessor::{Dispatch, DynamicAccessor, Operation, setter_name};
pub use array::ArrayConvertible;
pub use field_map::FieldMap;
pub use fields::Fields;
