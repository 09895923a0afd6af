use alloc::boxed::Box;

use crate::Reflect;
use crate::info::DynamicDescribed;

// -----------------------------------------------------------------------------
// Fields

/// Name-based access to the instance fields of a struct.
///
/// Implemented by [`#[derive(Reflect)]`](crate::derive::Reflect). This is
/// the low-level layer: it covers every instance field whatever its
/// visibility and performs no access checks. The checked operations live in
/// [`ArrayConvertible`] and [`DynamicAccessor`], which are implemented for
/// every `Fields` type.
///
/// Static members are described by the [`TypeDescriptor`] but are not
/// reachable here.
///
/// # Examples
///
/// ```
/// use objkit_reflect::derive::Reflect;
/// use objkit_reflect::ops::Fields;
///
/// #[derive(Reflect)]
/// struct Counter {
///     pub(crate) hits: u32,
///     label: String,
/// }
///
/// let mut counter = Counter { hits: 1, label: "main".into() };
///
/// *counter.field_mut("hits").unwrap().downcast_mut::<u32>().unwrap() += 1;
/// assert_eq!(counter.hits, 2);
///
/// assert!(counter.set_field("label", Box::new("side")).is_ok());
/// assert_eq!(counter.label, "side");
///
/// let rejected = counter.set_field("hits", Box::new("many")).unwrap_err();
/// assert!(rejected.is::<&str>());
/// ```
///
/// [`ArrayConvertible`]: crate::ops::ArrayConvertible
/// [`DynamicAccessor`]: crate::ops::DynamicAccessor
/// [`TypeDescriptor`]: crate::info::TypeDescriptor
pub trait Fields: Reflect + DynamicDescribed {
    /// Returns the instance field called `name`.
    fn field(&self, name: &str) -> Option<&dyn Reflect>;

    /// Returns the instance field called `name` mutably.
    fn field_mut(&mut self, name: &str) -> Option<&mut dyn Reflect>;

    /// Returns an owned copy of the field called `name`.
    ///
    /// Returns `None` for unknown names and for fields whose type is not
    /// cloned by the implementation (derived structs clone the eligible
    /// fields).
    fn clone_field(&self, name: &str) -> Option<Box<dyn Reflect>>;

    /// Assigns `value` to the field called `name`.
    ///
    /// The value goes through [`FromReflect`](crate::FromReflect) of the
    /// field type. On failure, or for an unknown name, the value is handed
    /// back and the field is unchanged.
    fn set_field(&mut self, name: &str, value: Box<dyn Reflect>) -> Result<(), Box<dyn Reflect>>;

    /// Reads the field called `name` through its declared getter, if any,
    /// else directly.
    #[inline]
    fn invoke_getter(&self, name: &str) -> Option<&dyn Reflect> {
        self.field(name)
    }

    /// Assigns the field called `name` through its declared setter, if any,
    /// else directly.
    #[inline]
    fn invoke_setter(&mut self, name: &str, value: Box<dyn Reflect>) -> Result<(), Box<dyn Reflect>> {
        self.set_field(name, value)
    }
}
