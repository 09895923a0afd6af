use crate::info::{Described, FieldDescriptor, TypeDescriptor};
use crate::{Reflect, ReflectError};

// -----------------------------------------------------------------------------
// Introspector

/// Entry point for the cached shape of a type.
///
/// The descriptor of a type is built on first request and shared for the
/// rest of the process, so every call after the first is a pointer read.
///
/// # Examples
///
/// ```
/// use objkit_reflect::{Introspector, Reflect, ReflectError};
/// use objkit_reflect::derive::Reflect;
///
/// #[derive(Reflect)]
/// struct Item {
///     pub(crate) sku: String,
///     pub(crate) price: u32,
///     pub note: String,
/// }
///
/// let names: Vec<_> = Introspector::fields::<Item>().iter().map(|f| f.name()).collect();
/// assert_eq!(names, ["sku", "price"]);
///
/// let item = Item { sku: "A-1".into(), price: 5, note: String::new() };
/// let descriptor = Introspector::of(&item)?;
/// assert_eq!(descriptor.type_name(), "Item");
///
/// assert!(matches!(
///     Introspector::of(&5_i32),
///     Err(ReflectError::Introspection { .. }),
/// ));
/// # Ok::<(), ReflectError>(())
/// ```
pub struct Introspector;

impl Introspector {
    /// Returns the descriptor of `T`.
    #[inline]
    pub fn descriptor<T: Described>() -> &'static TypeDescriptor {
        T::type_descriptor()
    }

    /// Returns the eligible fields of `T` (restricted, non-static) in
    /// declaration order.
    #[inline]
    pub fn fields<T: Described>() -> &'static [FieldDescriptor] {
        T::type_descriptor().eligible_fields()
    }

    /// Returns the descriptor of the value's type.
    ///
    /// Fails with [`ReflectError::Introspection`] for values without a
    /// field table, such as primitives.
    pub fn of(value: &dyn Reflect) -> Result<&'static TypeDescriptor, ReflectError> {
        match value.as_fields() {
            Some(fields) => Ok(fields.reflect_descriptor()),
            None => Err(ReflectError::Introspection {
                type_name: value.reflect_type_name(),
            }),
        }
    }

    /// Returns the eligible fields of the value's type.
    #[inline]
    pub fn fields_of(value: &dyn Reflect) -> Result<&'static [FieldDescriptor], ReflectError> {
        Self::of(value).map(TypeDescriptor::eligible_fields)
    }
}
