use core::any::{Any, TypeId};

use crate::info::{FieldMetadata, Visibility};
use crate::{FromReflect, Reflect};

// -----------------------------------------------------------------------------
// FieldDescriptor

/// Shape of one data member of a type.
///
/// Instance fields are created with [`FieldDescriptor::new`], static members
/// with [`FieldDescriptor::of_static`]. Both start out [`Visibility::Private`]
/// and without docs; the derive macro fills in the rest with the `with_*`
/// builders.
///
/// # Examples
///
/// ```
/// use objkit_reflect::info::{FieldDescriptor, Visibility};
///
/// let field = FieldDescriptor::new::<Option<u32>>("age")
///     .with_visibility(Visibility::Restricted)
///     .with_docs("The age.\n@var int");
///
/// assert_eq!(field.name(), "age");
/// assert!(field.type_is::<Option<u32>>());
/// assert!(field.is_eligible());
/// assert!(field.accepts(&30_i64));
/// assert!(!field.accepts(&"thirty"));
/// ```
#[derive(Clone, Debug)]
pub struct FieldDescriptor {
    name: &'static str,
    ty_id: TypeId,
    type_path: &'static str,
    visibility: Visibility,
    is_static: bool,
    declared_type: Option<&'static str>,
    docs: Option<&'static str>,
    accepts: fn(&dyn Reflect) -> bool,
}

fn accepts_nothing(_: &dyn Reflect) -> bool {
    false
}

impl FieldDescriptor {
    /// Creates a descriptor for the instance field `name` of type `T`.
    #[inline]
    pub fn new<T: FromReflect>(name: &'static str) -> Self {
        Self {
            name,
            ty_id: TypeId::of::<T>(),
            type_path: core::any::type_name::<T>(),
            visibility: Visibility::Private,
            is_static: false,
            declared_type: None,
            docs: None,
            accepts: T::accepts,
        }
    }

    /// Creates a descriptor for the static member `name`.
    ///
    /// The value is only used to infer the member's type. Static members are
    /// never eligible and cannot be assigned.
    ///
    /// ```
    /// use objkit_reflect::info::{FieldDescriptor, Visibility};
    ///
    /// const LIMIT: u16 = 8;
    ///
    /// let field = FieldDescriptor::of_static("LIMIT", &LIMIT)
    ///     .with_visibility(Visibility::Restricted);
    /// assert!(field.is_static());
    /// assert!(!field.is_eligible());
    /// assert!(!field.accepts(&1_u16));
    /// ```
    #[inline]
    pub fn of_static<T: Reflect>(name: &'static str, _value: &T) -> Self {
        Self {
            name,
            ty_id: TypeId::of::<T>(),
            type_path: core::any::type_name::<T>(),
            visibility: Visibility::Private,
            is_static: true,
            declared_type: None,
            docs: None,
            accepts: accepts_nothing,
        }
    }

    /// Sets the declared visibility.
    #[inline]
    pub const fn with_visibility(mut self, visibility: Visibility) -> Self {
        self.visibility = visibility;
        self
    }

    /// Sets the documentation.
    ///
    /// Unless a tag was given with [`with_type_tag`](Self::with_type_tag),
    /// the declared type is parsed from these docs.
    #[inline]
    pub fn with_docs(mut self, docs: &'static str) -> Self {
        self.docs = Some(docs);
        self
    }

    /// Sets the declared-type tag, overriding any tag in the docs.
    #[inline]
    pub const fn with_type_tag(mut self, tag: &'static str) -> Self {
        self.declared_type = Some(tag);
        self
    }

    /// Fills the declared type from the docs if no tag was given.
    pub(crate) fn resolve_declared_type(&mut self) {
        if self.declared_type.is_none() {
            self.declared_type = self.docs.and_then(FieldMetadata::parse);
        }
    }

    /// Returns the field name.
    #[inline]
    pub const fn name(&self) -> &'static str {
        self.name
    }

    /// Returns the [`TypeId`] of the field's value type.
    #[inline]
    pub const fn ty_id(&self) -> TypeId {
        self.ty_id
    }

    /// Returns `true` if the field's value type is `T`.
    #[inline]
    pub fn type_is<T: Any>(&self) -> bool {
        self.ty_id == TypeId::of::<T>()
    }

    /// Returns the full name of the field's value type.
    #[inline]
    pub const fn type_path(&self) -> &'static str {
        self.type_path
    }

    /// Returns the declared visibility.
    #[inline]
    pub const fn visibility(&self) -> Visibility {
        self.visibility
    }

    /// Returns `true` for static members.
    #[inline]
    pub const fn is_static(&self) -> bool {
        self.is_static
    }

    /// Returns `true` if generic array conversion covers this field:
    /// restricted and not static.
    #[inline]
    pub const fn is_eligible(&self) -> bool {
        self.visibility.is_restricted() && !self.is_static
    }

    /// Returns the declared-type tag.
    ///
    /// For descriptors obtained from a [`TypeDescriptor`], this includes tags
    /// parsed from the docs.
    ///
    /// [`TypeDescriptor`]: crate::info::TypeDescriptor
    #[inline]
    pub const fn declared_type(&self) -> Option<&'static str> {
        self.declared_type
    }

    /// Returns the documentation.
    #[inline]
    pub const fn docs(&self) -> Option<&'static str> {
        self.docs
    }

    /// Returns `true` if `value` can be assigned to this field.
    #[inline]
    pub fn accepts(&self, value: &dyn Reflect) -> bool {
        (self.accepts)(value)
    }
}
