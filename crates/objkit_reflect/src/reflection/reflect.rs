use alloc::boxed::Box;
use core::any::{Any, TypeId};
use core::fmt;

use crate::ops::Fields;

// -----------------------------------------------------------------------------
// Reflect

/// A value that can be stored in a [`FieldMap`] and read or written through
/// the generic field access of [`objkit_reflect`].
///
/// Every field value type implements it: primitives, `String`, `Option<T>`,
/// `Vec<T>`, ... (see [`impls`]) and every type using
/// [`#[derive(Reflect)]`](crate::derive::Reflect).
///
/// # Type Identification
///
/// [`Any::type_id`] on a `Box<dyn Reflect>` returns the id of the box, not
/// the value. Use [`Reflect::ty_id`]:
///
/// ```
/// # use objkit_reflect::Reflect;
/// # use core::any::{Any, TypeId};
/// let x: Box<dyn Reflect> = 32_i32.into_boxed_reflect();
///
/// assert!(x.type_id() != TypeId::of::<i32>());
/// assert!(x.ty_id() == TypeId::of::<i32>());
/// ```
///
/// # Presence
///
/// Two predicates decide whether a value counts as "given":
///
/// - [`is_null`](Reflect::is_null): the value is absent (`None`, `()`).
///   [`ArrayConvertible::from_array`] skips null values.
/// - [`is_empty_value`](Reflect::is_empty_value): null, or a zero / empty
///   value (`0`, `false`, `""`, empty collections).
///   [`DynamicAccessor::construct`] skips empty values.
///
/// [`FieldMap`]: crate::ops::FieldMap
/// [`impls`]: crate::impls
/// [`objkit_reflect`]: crate
/// [`ArrayConvertible::from_array`]: crate::ops::ArrayConvertible::from_array
/// [`DynamicAccessor::construct`]: crate::ops::DynamicAccessor::construct
pub trait Reflect: Send + Sync + Any {
    /// Casts this value to `&dyn Reflect`.
    #[inline(always)]
    fn as_reflect(&self) -> &dyn Reflect
    where
        Self: Sized,
    {
        self
    }

    /// Boxes this value as `Box<dyn Reflect>`.
    ///
    /// ```
    /// use objkit_reflect::Reflect;
    ///
    /// let r = "Ann".into_boxed_reflect();
    /// assert!(r.is::<&'static str>());
    /// ```
    #[inline(always)]
    fn into_boxed_reflect(self) -> Box<dyn Reflect>
    where
        Self: Sized,
    {
        Box::new(self)
    }

    /// Returns the [`TypeId`] of the underlying type.
    #[inline]
    fn ty_id(&self) -> TypeId {
        TypeId::of::<Self>()
    }

    /// Returns the full type name of the underlying type.
    #[inline]
    fn reflect_type_name(&self) -> &'static str {
        core::any::type_name::<Self>()
    }

    /// Returns `true` if the value stands for "no value".
    #[inline]
    fn is_null(&self) -> bool {
        false
    }

    /// Returns `true` if the value is null, zero or empty.
    #[inline]
    fn is_empty_value(&self) -> bool {
        self.is_null()
    }

    /// Compares with another reflected value.
    ///
    /// Returns `None` if the type does not support comparison.
    fn reflect_partial_eq(&self, _other: &dyn Reflect) -> Option<bool> {
        None
    }

    /// Debug formatter for the value.
    fn reflect_debug(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Reflect({})", self.reflect_type_name())
    }

    /// Returns the field table of this value, if it has one.
    ///
    /// Only types with a [`TypeDescriptor`](crate::info::TypeDescriptor)
    /// (derived structs) return `Some`.
    #[inline]
    fn as_fields(&self) -> Option<&dyn Fields> {
        None
    }

    /// Mutable version of [`as_fields`](Reflect::as_fields).
    #[inline]
    fn as_fields_mut(&mut self) -> Option<&mut dyn Fields> {
        None
    }
}

impl dyn Reflect {
    /// Returns `true` if the underlying value is of type `T`.
    #[inline(always)]
    pub fn is<T: Any>(&self) -> bool {
        self.ty_id() == TypeId::of::<T>()
    }

    /// Downcasts the value to type `T` by reference.
    ///
    /// ```
    /// # use objkit_reflect::Reflect;
    /// let x: Box<dyn Reflect> = 10_u8.into_boxed_reflect();
    /// assert_eq!(x.downcast_ref::<u8>(), Some(&10));
    /// assert_eq!(x.downcast_ref::<u16>(), None);
    /// ```
    #[inline]
    pub fn downcast_ref<T: Any>(&self) -> Option<&T> {
        <dyn Any>::downcast_ref(self)
    }

    /// Downcasts the value to type `T` by mutable reference.
    #[inline]
    pub fn downcast_mut<T: Any>(&mut self) -> Option<&mut T> {
        <dyn Any>::downcast_mut(self)
    }

    /// Downcasts the value to type `T`, unboxing and consuming the trait object.
    ///
    /// If the underlying value is not of type `T`, returns `Err(self)`.
    ///
    /// ```
    /// # use objkit_reflect::Reflect;
    /// let x: Box<dyn Reflect> = String::from("Ann").into_boxed_reflect();
    /// assert_eq!(x.take::<String>().unwrap(), "Ann");
    /// ```
    pub fn take<T: Any>(self: Box<dyn Reflect>) -> Result<T, Box<dyn Reflect>> {
        if self.is::<T>() {
            #[expect(unsafe_code, reason = "type is already checked")]
            Ok(unsafe { *<Box<dyn Any>>::downcast::<T>(self).unwrap_unchecked() })
        } else {
            Err(self)
        }
    }
}

impl fmt::Debug for dyn Reflect {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.reflect_debug(f)
    }
}

#[cfg(test)]
mod tests {
    use alloc::string::String;
    use alloc::vec::Vec;

    use crate::Reflect;

    #[test]
    fn take_checks_type() {
        let value = 7_u32.into_boxed_reflect();
        let value = value.take::<i32>().unwrap_err();
        assert_eq!(value.take::<u32>().unwrap(), 7);
    }

    #[test]
    fn presence_predicates() {
        assert!(Option::<u8>::None.is_null());
        assert!(!Some(0_u8).is_null());
        assert!(Some(0_u8).is_empty_value());
        assert!(String::new().is_empty_value());
        assert!(!String::from("x").is_empty_value());
        assert!(Vec::<u8>::new().is_empty_value());
        assert!(0_i64.is_empty_value());
        assert!(!false.is_null());
        assert!(false.is_empty_value());
    }

    #[test]
    fn debug_goes_through_reflect_debug() {
        let value = 3_i8.into_boxed_reflect();
        assert_eq!(alloc::format!("{value:?}"), "3");
    }
}
