use alloc::boxed::Box;
use alloc::vec::Vec;

use crate::info::FieldsConfig;
use crate::ops::{FieldMap, Fields};
use crate::{Reflect, ReflectError};

// -----------------------------------------------------------------------------
// ArrayConvertible

/// Conversion between a struct's eligible fields and a [`FieldMap`].
///
/// Eligible fields are the restricted (`pub(crate)`, `pub(super)`,
/// `pub(in ..)`) instance fields, in declaration order. Public and private
/// fields and static members are never read or written here.
///
/// Implemented for every [`Fields`] type.
///
/// # Examples
///
/// ```
/// use objkit_reflect::prelude::*;
///
/// #[derive(Reflect, Default)]
/// struct Person {
///     pub(crate) name: Option<String>,
///     /// @var int
///     pub(crate) age: Option<u32>,
///     pub nickname: String,
/// }
///
/// let mut person = Person::default();
/// person.from_array(field_map! { "name" => "Ann", "age" => 30, "nickname" => "A" })?;
///
/// assert_eq!(person.name.as_deref(), Some("Ann"));
/// assert_eq!(person.age, Some(30));
/// assert_eq!(person.nickname, "");
///
/// let array = person.to_array();
/// assert_eq!(array.keys().collect::<Vec<_>>(), ["name", "age"]);
/// assert_eq!(array.get_as::<Option<u32>>("age"), Some(&Some(30)));
///
/// assert_eq!(person.get_fields(), ["name", "age"]);
/// assert_eq!(person.get_field_type("age"), Some("int"));
/// # Ok::<(), objkit_reflect::ReflectError>(())
/// ```
pub trait ArrayConvertible: Fields {
    /// Returns a copy of every eligible field, keyed by field name.
    fn to_array(&self) -> FieldMap {
        let descriptor = self.reflect_descriptor();
        let mut array = FieldMap::with_capacity(descriptor.eligible_fields().len());
        for field in descriptor.eligible_fields() {
            if let Some(value) = self.clone_field(field.name()) {
                array.insert_boxed(field.name(), value);
            }
        }
        array
    }

    /// Iterates over the eligible fields by reference, in declaration order.
    fn iter_fields(&self) -> impl Iterator<Item = (&'static str, &dyn Reflect)> {
        self.reflect_descriptor()
            .eligible_names()
            .iter()
            .filter_map(|&name| Some((name, self.field(name)?)))
    }

    /// Assigns the eligible fields named in `source`.
    ///
    /// Null values (`None`, `()`) are skipped, as are keys that do not name
    /// an eligible field. Every remaining value is checked against its field
    /// type before anything is written: on
    /// [`TypeMismatch`](ReflectError::TypeMismatch) `self` is unchanged.
    fn from_array(&mut self, source: FieldMap) -> Result<&mut Self, ReflectError> {
        let descriptor = self.reflect_descriptor();

        let mut pending: Vec<(&'static str, Box<dyn Reflect>)> = Vec::with_capacity(source.len());
        for (name, value) in source {
            let Some(field) = descriptor.field(&name) else {
                continue;
            };
            if !field.is_eligible() || value.is_null() {
                continue;
            }
            if !field.accepts(&*value) {
                return Err(ReflectError::mismatch(
                    field.name(),
                    field.type_path(),
                    value.reflect_type_name(),
                ));
            }
            pending.push((field.name(), value));
        }

        for (name, value) in pending {
            if let Err(value) = self.set_field(name, value) {
                let expected = descriptor.field(name).map_or("?", |f| f.type_path());
                return Err(ReflectError::mismatch(name, expected, value.reflect_type_name()));
            }
        }
        Ok(self)
    }

    /// Builds a default value, then applies [`from_array`](Self::from_array).
    ///
    /// Values are assigned directly; declared setters are not called. See
    /// [`DynamicAccessor::construct`] for the setter-driven constructor.
    ///
    /// [`DynamicAccessor::construct`]: crate::ops::DynamicAccessor::construct
    fn from_field_map(source: FieldMap) -> Result<Self, ReflectError>
    where
        Self: Sized + Default,
    {
        let mut value = Self::default();
        value.from_array(source)?;
        Ok(value)
    }

    /// Returns the names of the eligible fields in declaration order.
    #[inline]
    fn get_fields(&self) -> Vec<&'static str> {
        self.reflect_descriptor().eligible_names_vec()
    }

    /// Returns the type tags of the eligible fields.
    #[inline]
    fn get_fields_config(&self) -> FieldsConfig {
        self.reflect_descriptor().fields_config().clone()
    }

    /// Returns the type tag of the eligible field `name`, if it declares one.
    #[inline]
    fn get_field_type(&self, name: &str) -> Option<&'static str> {
        self.reflect_descriptor().field_type(name)
    }
}

impl<T: Fields + ?Sized> ArrayConvertible for T {}

#[cfg(test)]
mod tests {
    use alloc::string::String;
    use alloc::vec::Vec;

    use crate::derive::Reflect;
    use crate::ops::{ArrayConvertible, FieldMap};
    use crate::{ReflectError, field_map};

    #[derive(Reflect, Default, Debug, PartialEq)]
    #[reflect(partial_eq, debug, statics(Self::KIND))]
    struct Person {
        pub(crate) name: Option<String>,
        /// @var int
        pub(crate) age: Option<u32>,
        pub nickname: String,
        secret: String,
    }

    impl Person {
        const KIND: &'static str = "person";
    }

    #[derive(Reflect, Default, Clone, Debug)]
    struct Pair<T> {
        pub(crate) left: T,
        pub(crate) right: T,
    }

    #[test]
    fn from_array_assigns_eligible_fields() {
        let mut person = Person::default();
        person
            .from_array(field_map! { "name" => "Ann", "age" => 30 })
            .unwrap();

        assert_eq!(person.name.as_deref(), Some("Ann"));
        assert_eq!(person.age, Some(30));
    }

    #[test]
    fn from_array_ignores_other_keys() {
        let mut person = Person::default();
        person
            .from_array(field_map! {
                "nickname" => "A",
                "secret" => "s3cr3t",
                "KIND" => "robot",
                "unknown" => 1,
            })
            .unwrap();

        assert_eq!(person, Person::default());
    }

    #[test]
    fn from_array_skips_null_values() {
        let mut person = Person {
            name: Some("Ann".into()),
            age: Some(30),
            ..Person::default()
        };
        person
            .from_array(field_map! { "name" => None::<String>, "age" => 31 })
            .unwrap();

        assert_eq!(person.name.as_deref(), Some("Ann"));
        assert_eq!(person.age, Some(31));
    }

    #[test]
    fn from_array_is_atomic_on_mismatch() {
        let mut person = Person::default();
        let err = person
            .from_array(field_map! { "name" => "Bob", "age" => "old" })
            .unwrap_err();

        assert!(matches!(err, ReflectError::TypeMismatch { ref field, .. } if field == "age"));
        assert_eq!(person, Person::default());
    }

    #[test]
    fn partial_update_keeps_other_fields() {
        let mut person = Person::default();
        person
            .from_array(field_map! { "name" => "Ann", "age" => 30 })
            .unwrap()
            .from_array(field_map! { "age" => 31 })
            .unwrap();

        assert_eq!(person.name.as_deref(), Some("Ann"));
        assert_eq!(person.age, Some(31));
    }

    #[test]
    fn to_array_round_trip() {
        let mut person = Person::default();
        person
            .from_array(field_map! { "name" => "Ann", "age" => 30 })
            .unwrap();

        let array = person.to_array();
        assert_eq!(array.keys().collect::<Vec<_>>(), ["name", "age"]);

        let copy = Person::from_field_map(array).unwrap();
        assert_eq!(copy, person);
    }

    #[test]
    fn to_array_includes_unset_fields() {
        let array = Person::default().to_array();
        assert_eq!(array.len(), 2);
        assert_eq!(array.get_as::<Option<u32>>("age"), Some(&None));
    }

    #[test]
    fn field_listing_and_tags() {
        let person = Person::default();
        assert_eq!(person.get_fields(), ["name", "age"]);
        assert_eq!(person.get_field_type("age"), Some("int"));
        assert_eq!(person.get_field_type("name"), None);
        assert_eq!(person.get_field_type("nickname"), None);

        let config = person.get_fields_config();
        assert_eq!(config.len(), 2);
        assert_eq!(config.get("age").and_then(|c| c.ty), Some("int"));
        assert_eq!(config.get("name").map(|c| c.ty), Some(None));
        assert!(config.get("nickname").is_none());
    }

    #[test]
    fn iter_fields_in_order() {
        let person = Person {
            name: Some("Ann".into()),
            ..Person::default()
        };
        let names: Vec<_> = person.iter_fields().map(|(name, _)| name).collect();
        assert_eq!(names, ["name", "age"]);
    }

    #[test]
    fn empty_array_changes_nothing() {
        let mut person = Person {
            age: Some(4),
            ..Person::default()
        };
        person.from_array(FieldMap::new()).unwrap();
        assert_eq!(person.age, Some(4));
    }

    #[test]
    fn generic_struct() {
        let mut pair = Pair::<u8>::default();
        pair.from_array(field_map! { "left" => 1, "right" => 2 }).unwrap();
        assert_eq!((pair.left, pair.right), (1, 2));

        let strings = Pair::<String>::from_field_map(field_map! { "left" => "l" }).unwrap();
        assert_eq!(strings.left, "l");
        assert_eq!(strings.get_fields(), ["left", "right"]);

        let err = pair.from_array(field_map! { "left" => 300 }).unwrap_err();
        assert!(matches!(err, ReflectError::TypeMismatch { .. }));
        assert_eq!(pair.left, 1);
    }
}
