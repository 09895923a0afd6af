use alloc::boxed::Box;
use alloc::vec::Vec;
use core::any::{Any, TypeId};

use objkit_utils::hash::HashMap;

use crate::info::{FieldDescriptor, FieldsConfig};

/// Shape of a type: its identity and its ordered data members.
///
/// Built once per concrete type (see [`Described`]) and never mutated.
/// Building resolves the declared-type tags of all fields and precomputes
/// the eligible set, so the read accessors below are cheap.
///
/// # Examples
///
/// ```
/// use objkit_reflect::derive::Reflect;
/// use objkit_reflect::info::Described;
///
/// #[derive(Reflect)]
/// struct User {
///     /// @var string
///     pub(crate) name: String,
///     pub(crate) age: u32,
///     pub id: u64,
///     secret: String,
/// }
///
/// let descriptor = User::type_descriptor();
///
/// assert_eq!(descriptor.type_name(), "User");
/// assert_eq!(descriptor.fields().len(), 4);
/// assert_eq!(descriptor.eligible_names(), ["name", "age"]);
/// assert_eq!(descriptor.field_type("name"), Some("string"));
/// assert_eq!(descriptor.field_type("secret"), None);
/// ```
///
/// [`Described`]: crate::info::Described
#[derive(Clone, Debug)]
pub struct TypeDescriptor {
    ty_id: TypeId,
    type_path: &'static str,
    type_name: &'static str,
    fields: Box<[FieldDescriptor]>,
    indices: HashMap<&'static str, usize>,
    eligible: Box<[FieldDescriptor]>,
    eligible_names: Box<[&'static str]>,
    config: FieldsConfig,
    docs: Option<&'static str>,
}

impl TypeDescriptor {
    /// Creates the descriptor of `T`.
    ///
    /// `type_name` is the short name used in messages and registry lookups;
    /// the full path is taken from [`core::any::type_name`]. `fields` must be
    /// given in declaration order.
    pub fn new<T: Any>(
        type_name: &'static str,
        fields: impl IntoIterator<Item = FieldDescriptor>,
    ) -> Self {
        let fields: Box<[FieldDescriptor]> = fields
            .into_iter()
            .map(|mut field| {
                field.resolve_declared_type();
                field
            })
            .collect();

        let indices: HashMap<&'static str, usize> = fields
            .iter()
            .enumerate()
            .map(|(index, field)| (field.name(), index))
            .collect();

        #[cfg(feature = "debug")]
        debug_assert!(
            indices.len() == fields.len(),
            "duplicate field names in `{type_name}`",
        );

        let eligible: Box<[FieldDescriptor]> = fields
            .iter()
            .filter(|field| field.is_eligible())
            .cloned()
            .collect();
        let eligible_names = eligible.iter().map(FieldDescriptor::name).collect();
        let config = FieldsConfig::new(eligible.iter());

        let type_path = core::any::type_name::<T>();
        log::trace!(
            "built type descriptor of `{type_path}` ({} fields, {} eligible)",
            fields.len(),
            eligible.len(),
        );

        Self {
            ty_id: TypeId::of::<T>(),
            type_path,
            type_name,
            fields,
            indices,
            eligible,
            eligible_names,
            config,
            docs: None,
        }
    }

    /// Sets the type-level documentation.
    #[inline]
    pub fn with_docs(mut self, docs: &'static str) -> Self {
        self.docs = Some(docs);
        self
    }

    /// Returns the [`TypeId`] of the described type.
    #[inline]
    pub const fn ty_id(&self) -> TypeId {
        self.ty_id
    }

    /// Returns `true` if the described type is `T`.
    #[inline]
    pub fn type_is<T: Any>(&self) -> bool {
        self.ty_id == TypeId::of::<T>()
    }

    /// Returns the full type path, e.g. `my_crate::model::User`.
    #[inline]
    pub const fn type_path(&self) -> &'static str {
        self.type_path
    }

    /// Returns the short type name, e.g. `User`.
    #[inline]
    pub const fn type_name(&self) -> &'static str {
        self.type_name
    }

    /// Returns the type-level documentation.
    #[inline]
    pub const fn docs(&self) -> Option<&'static str> {
        self.docs
    }

    /// Returns the field called `name`, static members included.
    pub fn field(&self, name: &str) -> Option<&FieldDescriptor> {
        self.fields.get(*self.indices.get(name)?)
    }

    /// Returns the field at `index` in declaration order.
    #[inline]
    pub fn field_at(&self, index: usize) -> Option<&FieldDescriptor> {
        self.fields.get(index)
    }

    /// Returns the position of `name` in declaration order.
    #[inline]
    pub fn index_of(&self, name: &str) -> Option<usize> {
        self.indices.get(name).copied()
    }

    /// Returns every field in declaration order, static members included.
    #[inline]
    pub fn fields(&self) -> &[FieldDescriptor] {
        &self.fields
    }

    /// Returns the eligible fields (restricted, non-static) in declaration
    /// order.
    #[inline]
    pub fn eligible_fields(&self) -> &[FieldDescriptor] {
        &self.eligible
    }

    /// Returns the names of the eligible fields in declaration order.
    #[inline]
    pub fn eligible_names(&self) -> &[&'static str] {
        &self.eligible_names
    }

    /// Returns `true` if `name` is an eligible field.
    pub fn is_eligible(&self, name: &str) -> bool {
        self.field(name).is_some_and(FieldDescriptor::is_eligible)
    }

    /// Returns the configuration of the eligible fields.
    #[inline]
    pub fn fields_config(&self) -> &FieldsConfig {
        &self.config
    }

    /// Returns the declared-type tag of the eligible field `name`.
    pub fn field_type(&self, name: &str) -> Option<&'static str> {
        self.config.get(name)?.ty
    }

    /// Collects the eligible names into an owned list.
    pub(crate) fn eligible_names_vec(&self) -> Vec<&'static str> {
        self.eligible_names.to_vec()
    }
}

#[cfg(test)]
mod tests {
    use crate::info::{FieldDescriptor, TypeDescriptor, Visibility};

    struct Sample;

    fn sample() -> TypeDescriptor {
        TypeDescriptor::new::<Sample>("Sample", [
            FieldDescriptor::new::<u8>("a").with_visibility(Visibility::Restricted),
            FieldDescriptor::new::<u8>("b"),
            FieldDescriptor::of_static("C", &0_u8).with_visibility(Visibility::Restricted),
            FieldDescriptor::new::<u8>("d")
                .with_visibility(Visibility::Restricted)
                .with_docs("@var int")
                .with_type_tag("float"),
            FieldDescriptor::new::<u8>("e")
                .with_visibility(Visibility::Public)
                .with_docs("@var int"),
        ])
    }

    #[test]
    fn eligible_set() {
        let descriptor = sample();
        assert_eq!(descriptor.eligible_names(), ["a", "d"]);
        assert!(descriptor.is_eligible("a"));
        assert!(!descriptor.is_eligible("b"));
        assert!(!descriptor.is_eligible("C"));
        assert!(!descriptor.is_eligible("missing"));
        assert_eq!(descriptor.fields_config().len(), 2);
    }

    #[test]
    fn explicit_tag_wins() {
        let descriptor = sample();
        assert_eq!(descriptor.field_type("d"), Some("float"));
        assert_eq!(descriptor.field("e").unwrap().declared_type(), Some("int"));
        // `e` is public: described, but not part of the configuration.
        assert_eq!(descriptor.field_type("e"), None);
    }

    #[test]
    fn lookup_by_name_and_index() {
        let descriptor = sample();
        assert_eq!(descriptor.index_of("C"), Some(2));
        assert_eq!(descriptor.field_at(3).unwrap().name(), "d");
        assert!(descriptor.field("C").unwrap().is_static());
        assert!(descriptor.type_is::<Sample>());
        assert!(descriptor.type_path().ends_with("Sample"));
    }
}
