//! Static storage for type descriptors.
//!
//! [`Described::type_descriptor`] returns a `&'static TypeDescriptor`, built
//! on first use. The derive macro keeps it in a `static CELL` inside that
//! function:
//!
//! - [`NonGenericDescriptorCell`]: one descriptor, behind an [`OnceLock`].
//! - [`GenericDescriptorCell`]: every monomorphization of a generic type
//!   shares the same `static`, so descriptors are kept in a [`TypeIdMap`]
//!   behind a [`RwLock`].
//!
//! [`Described::type_descriptor`]: crate::info::Described::type_descriptor

use alloc::boxed::Box;
use core::any::{Any, TypeId};
use std::sync::{OnceLock, PoisonError, RwLock};

use objkit_utils::TypeIdMap;

use crate::info::TypeDescriptor;

// -----------------------------------------------------------------------------
// NonGenericDescriptorCell

/// Storage for the descriptor of a non-generic type.
///
/// # Examples
///
/// ```
/// use objkit_reflect::impls::NonGenericDescriptorCell;
/// use objkit_reflect::info::{FieldDescriptor, TypeDescriptor, Visibility};
///
/// struct Point { x: i32 }
///
/// fn descriptor() -> &'static TypeDescriptor {
///     static CELL: NonGenericDescriptorCell = NonGenericDescriptorCell::new();
///     CELL.get_or_init(|| TypeDescriptor::new::<Point>("Point", [
///         FieldDescriptor::new::<i32>("x").with_visibility(Visibility::Restricted),
///     ]))
/// }
///
/// assert!(core::ptr::eq(descriptor(), descriptor()));
/// assert_eq!(descriptor().eligible_names(), ["x"]);
/// ```
pub struct NonGenericDescriptorCell(OnceLock<TypeDescriptor>);

impl NonGenericDescriptorCell {
    /// Creates an empty cell.
    #[inline]
    pub const fn new() -> Self {
        Self(OnceLock::new())
    }

    /// Returns the stored descriptor, building it with `f` on first call.
    #[inline]
    pub fn get_or_init(&self, f: impl FnOnce() -> TypeDescriptor) -> &TypeDescriptor {
        self.0.get_or_init(f)
    }
}

impl Default for NonGenericDescriptorCell {
    fn default() -> Self {
        Self::new()
    }
}

// -----------------------------------------------------------------------------
// GenericDescriptorCell

/// Storage for the descriptors of a generic type, one per monomorphization.
///
/// Descriptors are leaked on insertion; there is at most one per concrete
/// type.
///
/// # Examples
///
/// ```
/// use objkit_reflect::impls::GenericDescriptorCell;
/// use objkit_reflect::info::{FieldDescriptor, TypeDescriptor};
///
/// struct Wrapper<T> { inner: T }
///
/// fn descriptor<T: objkit_reflect::FromReflect>() -> &'static TypeDescriptor {
///     static CELL: GenericDescriptorCell = GenericDescriptorCell::new();
///     CELL.get_or_insert::<Wrapper<T>>(|| TypeDescriptor::new::<Wrapper<T>>("Wrapper", [
///         FieldDescriptor::new::<T>("inner"),
///     ]))
/// }
///
/// assert!(descriptor::<u8>().field("inner").unwrap().type_is::<u8>());
/// assert!(descriptor::<i64>().field("inner").unwrap().type_is::<i64>());
/// ```
pub struct GenericDescriptorCell(RwLock<TypeIdMap<&'static TypeDescriptor>>);

impl GenericDescriptorCell {
    /// Creates an empty cell.
    #[inline]
    pub const fn new() -> Self {
        Self(RwLock::new(TypeIdMap::new()))
    }

    /// Returns the descriptor stored for `G`, building it with `f` if absent.
    #[inline(always)]
    pub fn get_or_insert<G: Any + ?Sized>(
        &self,
        f: impl FnOnce() -> TypeDescriptor,
    ) -> &'static TypeDescriptor {
        self.get_or_insert_by_type_id(TypeId::of::<G>(), f)
    }

    #[inline(never)]
    fn get_or_insert_by_type_id(
        &self,
        type_id: TypeId,
        f: impl FnOnce() -> TypeDescriptor,
    ) -> &'static TypeDescriptor {
        if let Some(descriptor) = self.get_by_type_id(type_id) {
            return descriptor;
        }
        // Built outside the lock: `f` may need descriptors of field types
        // that live in this same cell.
        let descriptor = f();
        *self
            .0
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .get_or_insert(type_id, || Box::leak(Box::new(descriptor)))
    }

    #[inline(never)]
    fn get_by_type_id(&self, type_id: TypeId) -> Option<&'static TypeDescriptor> {
        self.0
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(&type_id)
            .copied()
    }
}

impl Default for GenericDescriptorCell {
    fn default() -> Self {
        Self::new()
    }
}
