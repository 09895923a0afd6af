use crate::Reflect;
use crate::info::TypeDescriptor;

// -----------------------------------------------------------------------------
// Described

/// Static access to the [`TypeDescriptor`] of a type.
///
/// Implemented by [`#[derive(Reflect)]`](crate::derive::Reflect). A manual
/// implementation should keep the descriptor in a
/// [`NonGenericDescriptorCell`] or [`GenericDescriptorCell`] so that it is
/// built only once.
///
/// # Examples
///
/// ```
/// use objkit_reflect::derive::Reflect;
/// use objkit_reflect::info::Described;
///
/// #[derive(Reflect)]
/// struct Point {
///     pub(crate) x: f32,
///     pub(crate) y: f32,
/// }
///
/// let a = Point::type_descriptor();
/// let b = Point::type_descriptor();
/// assert!(core::ptr::eq(a, b));
/// ```
///
/// [`NonGenericDescriptorCell`]: crate::impls::NonGenericDescriptorCell
/// [`GenericDescriptorCell`]: crate::impls::GenericDescriptorCell
pub trait Described: 'static {
    /// Returns the descriptor of this type.
    fn type_descriptor() -> &'static TypeDescriptor;
}

// -----------------------------------------------------------------------------
// DynamicDescribed

/// Object-safe access to the [`TypeDescriptor`] of a value.
///
/// Blanket-implemented for every [`Described`] type.
pub trait DynamicDescribed: Reflect {
    /// Returns the descriptor of the underlying type.
    fn reflect_descriptor(&self) -> &'static TypeDescriptor;
}

impl<T: Described + Reflect> DynamicDescribed for T {
    #[inline]
    fn reflect_descriptor(&self) -> &'static TypeDescriptor {
        T::type_descriptor()
    }
}
