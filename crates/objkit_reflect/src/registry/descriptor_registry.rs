use core::any::TypeId;

use objkit_utils::TypeIdMap;
use objkit_utils::hash::{FixedHashState, HashMap, HashSet};

use crate::info::{Described, TypeDescriptor};

// -----------------------------------------------------------------------------
// DescriptorRegistry

/// A store of [`TypeDescriptor`]s, indexed by [`TypeId`], full type path and
/// short type name.
///
/// Short names are not unique across modules. When two registered types
/// share one, the name becomes ambiguous and
/// [`get_with_type_name`](Self::get_with_type_name) returns `None` for it.
///
/// # Examples
///
/// ```
/// use core::any::TypeId;
/// use objkit_reflect::derive::Reflect;
/// use objkit_reflect::registry::DescriptorRegistry;
///
/// #[derive(Reflect)]
/// struct Order {
///     pub(crate) id: u64,
/// }
///
/// let mut registry = DescriptorRegistry::new();
/// assert!(registry.register::<Order>());
/// assert!(!registry.register::<Order>());
///
/// let descriptor = registry.get_with_type_name("Order").unwrap();
/// assert_eq!(descriptor.ty_id(), TypeId::of::<Order>());
/// assert!(registry.get_with_type_path(descriptor.type_path()).is_some());
/// ```
pub struct DescriptorRegistry {
    descriptors: TypeIdMap<&'static TypeDescriptor>,
    type_path_to_id: HashMap<&'static str, TypeId>,
    type_name_to_id: HashMap<&'static str, TypeId>,
    ambiguous_names: HashSet<&'static str>,
    auto_registered: bool,
}

impl Default for DescriptorRegistry {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl DescriptorRegistry {
    /// Creates an empty registry.
    #[inline]
    pub const fn new() -> Self {
        Self {
            descriptors: TypeIdMap::new(),
            type_path_to_id: HashMap::with_hasher(FixedHashState),
            type_name_to_id: HashMap::with_hasher(FixedHashState),
            ambiguous_names: HashSet::with_hasher(FixedHashState),
            auto_registered: false,
        }
    }

    /// Registers `T`. Returns `false` if it was already registered.
    #[inline]
    pub fn register<T: Described>(&mut self) -> bool {
        self.register_descriptor(T::type_descriptor())
    }

    /// Registers a descriptor. Returns `false` if its type was already
    /// registered; the stored entry is then left as is.
    pub fn register_descriptor(&mut self, descriptor: &'static TypeDescriptor) -> bool {
        let type_id = descriptor.ty_id();
        if self.descriptors.contains(&type_id) {
            return false;
        }
        self.descriptors.insert(type_id, descriptor);
        self.add_name_indices(descriptor);

        log::trace!("registered type descriptor of `{}`", descriptor.type_path());
        true
    }

    fn add_name_indices(&mut self, descriptor: &'static TypeDescriptor) {
        let type_name = descriptor.type_name();
        if !self.ambiguous_names.contains(type_name) {
            if let Some(previous) = self.type_name_to_id.remove(type_name) {
                log::warn!(
                    "type name `{type_name}` is ambiguous ({} and {}); use the full type path",
                    self.descriptors.get(&previous).map_or("?", |d| d.type_path()),
                    descriptor.type_path(),
                );
                self.ambiguous_names.insert(type_name);
            } else {
                self.type_name_to_id.insert(type_name, descriptor.ty_id());
            }
        }
        self.type_path_to_id
            .insert(descriptor.type_path(), descriptor.ty_id());
    }

    /// Registers every non-generic type derived with
    /// `#[reflect(auto_register)]`.
    ///
    /// Repeated calls do not insert duplicates. Returns `true` if static
    /// registration works on this platform. Without the `auto_register`
    /// feature this does nothing and returns `false`.
    ///
    /// ```no_run
    /// use core::any::TypeId;
    /// use objkit_reflect::derive::Reflect;
    /// use objkit_reflect::registry::DescriptorRegistry;
    ///
    /// #[derive(Reflect)]
    /// #[reflect(auto_register)]
    /// struct Invoice {
    ///     pub(crate) total: u64,
    /// }
    ///
    /// let mut registry = DescriptorRegistry::new();
    /// assert!(registry.auto_register());
    /// assert!(registry.contains(TypeId::of::<Invoice>()));
    /// ```
    #[cfg_attr(not(feature = "auto_register"), inline(always))]
    pub fn auto_register(&mut self) -> bool {
        #[cfg(feature = "auto_register")]
        {
            crate::__macro_exports::auto_register::__register_types(self);
            self.auto_registered
        }
        #[cfg(not(feature = "auto_register"))]
        {
            false
        }
    }

    #[doc(hidden)]
    #[inline]
    pub fn __mark_auto_registered(&mut self) {
        self.auto_registered = true;
    }

    /// Returns `true` if a descriptor of the type is registered.
    #[inline]
    pub fn contains(&self, type_id: TypeId) -> bool {
        self.descriptors.contains(&type_id)
    }

    /// Returns the descriptor of the type with the given id.
    #[inline]
    pub fn get(&self, type_id: TypeId) -> Option<&'static TypeDescriptor> {
        self.descriptors.get(&type_id).copied()
    }

    /// Returns the descriptor of `T`, if registered.
    #[inline]
    pub fn get_type<T: ?Sized + 'static>(&self) -> Option<&'static TypeDescriptor> {
        self.descriptors.get_type::<T>().copied()
    }

    /// Returns the descriptor registered under a full type path.
    pub fn get_with_type_path(&self, type_path: &str) -> Option<&'static TypeDescriptor> {
        self.get(*self.type_path_to_id.get(type_path)?)
    }

    /// Returns the descriptor registered under a short type name.
    ///
    /// Returns `None` for unknown and for ambiguous names.
    pub fn get_with_type_name(&self, type_name: &str) -> Option<&'static TypeDescriptor> {
        self.get(*self.type_name_to_id.get(type_name)?)
    }

    /// Returns `true` if more than one registered type has this short name.
    #[inline]
    pub fn is_ambiguous(&self, type_name: &str) -> bool {
        self.ambiguous_names.contains(type_name)
    }

    /// Returns the number of registered types.
    #[inline]
    pub fn len(&self) -> usize {
        self.descriptors.len()
    }

    /// Returns `true` if nothing is registered.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.descriptors.is_empty()
    }

    /// Iterates over the registered descriptors in arbitrary order.
    #[inline]
    pub fn iter(&self) -> impl ExactSizeIterator<Item = &'static TypeDescriptor> + '_ {
        self.descriptors.values().copied()
    }
}

#[cfg(test)]
mod tests {
    use alloc::vec::Vec;

    use super::DescriptorRegistry;
    use crate::impls::NonGenericDescriptorCell;
    use crate::info::{Described, FieldDescriptor, TypeDescriptor};

    macro_rules! described {
        ($ty:ident as $name:literal) => {
            pub struct $ty;

            impl Described for $ty {
                fn type_descriptor() -> &'static TypeDescriptor {
                    static CELL: NonGenericDescriptorCell = NonGenericDescriptorCell::new();
                    CELL.get_or_init(|| {
                        TypeDescriptor::new::<Self>($name, [FieldDescriptor::new::<u8>("value")])
                    })
                }
            }
        };
    }

    mod a {
        use super::*;
        described!(Shared as "Shared");
    }

    mod b {
        use super::*;
        described!(Shared as "Shared");
    }

    described!(Unique as "Unique");

    #[test]
    fn ambiguous_names_are_dropped() {
        let mut registry = DescriptorRegistry::new();
        registry.register::<a::Shared>();
        assert!(registry.get_with_type_name("Shared").is_some());

        registry.register::<b::Shared>();
        registry.register::<Unique>();
        assert!(registry.is_ambiguous("Shared"));
        assert!(registry.get_with_type_name("Shared").is_none());
        assert!(registry.get_with_type_name("Unique").is_some());
        assert_eq!(registry.len(), 3);

        let path = a::Shared::type_descriptor().type_path();
        assert!(registry.get_with_type_path(path).unwrap().type_is::<a::Shared>());
    }

    #[test]
    fn iterates_over_registered() {
        let mut registry = DescriptorRegistry::default();
        assert!(registry.is_empty());
        registry.register::<Unique>();
        let names: Vec<_> = registry.iter().map(TypeDescriptor::type_name).collect();
        assert_eq!(names, ["Unique"]);
        assert!(registry.get_type::<Unique>().is_some());
    }
}
