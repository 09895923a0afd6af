//! [`Reflect`] implementations for common types, and helpers for
//! implementing the reflection traits by hand.
//!
//! - [`NonGenericDescriptorCell`], [`GenericDescriptorCell`]: static storage
//!   used to implement [`Described`].
//! - [`fields_debug`]: default [`Reflect::reflect_debug`] of derived structs.
//!
//! ## Implemented Menu
//!
//! - `i8`-`i128`, `u8`-`u128`, `isize`, `usize`, `f32`, `f64`, `bool`, `char`
//! - `()`, `&'static str`, `String`
//! - `Option<T>`, `Vec<T>`
//!
//! [`Described`]: crate::info::Described
//! [`Reflect`]: crate::Reflect
//! [`Reflect::reflect_debug`]: crate::Reflect::reflect_debug

// -----------------------------------------------------------------------------
// Modules

mod cell;
mod containers;
mod primitives;

// -----------------------------------------------------------------------------
// Exports

pub use cell::{GenericDescriptorCell, NonGenericDescriptorCell};

use core::fmt;

use crate::ops::Fields;

/// Formats a struct field by field, like `#[derive(Debug)]` does.
///
/// Static members are not part of the value and are skipped.
///
/// ```
/// use objkit_reflect::derive::Reflect;
///
/// #[derive(Reflect, Default)]
/// struct Point {
///     pub(crate) x: i32,
///     y: i32,
/// }
///
/// let p: Box<dyn objkit_reflect::Reflect> = Box::new(Point { x: 1, y: 2 });
/// assert_eq!(format!("{p:?}"), "Point { x: 1, y: 2 }");
/// ```
pub fn fields_debug(value: &dyn Fields, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    let descriptor = value.reflect_descriptor();
    let mut debug = f.debug_struct(descriptor.type_name());
    for field in descriptor.fields().iter().filter(|field| !field.is_static()) {
        if let Some(value) = value.field(field.name()) {
            debug.field(field.name(), &value);
        }
    }
    debug.finish()
}
