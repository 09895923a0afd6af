use alloc::boxed::Box;

use crate::Reflect;

/// Builds a concrete field value out of a reflected one.
///
/// This is what field assignment goes through: a value coming out of a
/// [`FieldMap`](crate::ops::FieldMap) is a `Box<dyn Reflect>`, and the field
/// has a concrete type. The conversion is lenient where the meaning is
/// unambiguous:
///
/// - the exact type is always accepted;
/// - `Option<T>` accepts a bare `T` (stored as `Some`);
/// - integer types accept any integer value that fits;
/// - `String` accepts `&'static str`.
///
/// [`accepts`](FromReflect::accepts) must return `true` exactly when
/// [`take_from_reflect`](FromReflect::take_from_reflect) would succeed; the
/// array transform relies on it to check a whole input before writing.
///
/// # Examples
///
/// ```
/// use objkit_reflect::{FromReflect, Reflect};
///
/// let value = 30_i32.into_boxed_reflect();
/// assert!(<Option<u8>>::accepts(&*value));
/// assert_eq!(<Option<u8>>::take_from_reflect(value).ok(), Some(Some(30)));
///
/// let value = (-1_i32).into_boxed_reflect();
/// assert!(!<u8>::accepts(&*value));
/// ```
pub trait FromReflect: Reflect + Sized {
    /// Returns `true` if `value` can be converted into `Self`.
    fn accepts(value: &dyn Reflect) -> bool {
        value.is::<Self>()
    }

    /// Converts `value` into `Self`, or hands it back unchanged.
    fn take_from_reflect(value: Box<dyn Reflect>) -> Result<Self, Box<dyn Reflect>> {
        value.take::<Self>()
    }
}
