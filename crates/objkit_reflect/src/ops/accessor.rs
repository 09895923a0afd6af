use alloc::boxed::Box;
use alloc::string::String;
use alloc::vec::Vec;
use core::any::Any;
use core::fmt;

use crate::info::{FieldDescriptor, TypeDescriptor};
use crate::ops::{FieldMap, Fields};
use crate::{Reflect, ReflectError};

// -----------------------------------------------------------------------------
// Operation

/// The accessor kind named by the first three characters of a method name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    /// `get...`
    Get,
    /// `set...`
    Set,
}

impl Operation {
    /// Splits an accessor-shaped method name into its operation and operand.
    ///
    /// The operand is the rest of the name with its first character
    /// lowercased. Returns `None` unless the name starts with `get` or `set`.
    ///
    /// ```
    /// use objkit_reflect::ops::Operation;
    ///
    /// assert_eq!(Operation::split("getFirstName"), Some((Operation::Get, "firstName".into())));
    /// assert_eq!(Operation::split("set_flag"), Some((Operation::Set, "_flag".into())));
    /// assert_eq!(Operation::split("get"), Some((Operation::Get, "".into())));
    /// assert_eq!(Operation::split("fetchName"), None);
    /// assert_eq!(Operation::split("ge"), None);
    /// ```
    pub fn split(method: &str) -> Option<(Self, String)> {
        let operation = match method.get(..3)? {
            "get" => Self::Get,
            "set" => Self::Set,
            _ => return None,
        };

        let mut rest = method[3..].chars();
        let operand = match rest.next() {
            Some(first) => first.to_lowercase().chain(rest).collect(),
            None => String::new(),
        };
        Some((operation, operand))
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Get => "get",
            Self::Set => "set",
        })
    }
}

/// Builds the setter name of `field`: `set` followed by the capitalized name.
///
/// ```
/// use objkit_reflect::ops::setter_name;
///
/// assert_eq!(setter_name("name"), "setName");
/// assert_eq!(setter_name("first_name"), "setFirst_name");
/// ```
pub fn setter_name(field: &str) -> String {
    let mut chars = field.chars();
    let mut name = String::with_capacity(field.len() + 3);
    name.push_str("set");
    if let Some(first) = chars.next() {
        name.extend(first.to_uppercase());
        name.push_str(chars.as_str());
    }
    name
}

// -----------------------------------------------------------------------------
// Dispatch

/// Result of [`DynamicAccessor::call`].
pub enum Dispatch<'a> {
    /// A getter ran and returned this field value.
    Value(&'a dyn Reflect),
    /// A setter ran; the target can be used again.
    Chained,
}

impl<'a> Dispatch<'a> {
    /// Returns the value of a getter call.
    #[inline]
    pub fn value(self) -> Option<&'a dyn Reflect> {
        match self {
            Self::Value(value) => Some(value),
            Self::Chained => None,
        }
    }

    /// Returns the value of a getter call if it is a `T`.
    #[inline]
    pub fn value_as<T: Any>(self) -> Option<&'a T> {
        self.value()?.downcast_ref::<T>()
    }

    /// Returns `true` for the result of a setter call.
    #[inline]
    pub fn is_chained(&self) -> bool {
        matches!(self, Self::Chained)
    }
}

impl fmt::Debug for Dispatch<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Value(value) => f.debug_tuple("Value").field(value).finish(),
            Self::Chained => f.write_str("Chained"),
        }
    }
}

// -----------------------------------------------------------------------------
// DynamicAccessor

/// Generic getters and setters by field name.
///
/// Any non-static field that is not private can be read and written, public
/// and restricted alike. A field with a declared getter or setter
/// (`#[reflect(getter = ..)]`, `#[reflect(setter = ..)]`) is accessed
/// through it.
///
/// Checks, in order:
///
/// 1. the name must be an instance field, else
///    [`UndefinedProperty`](ReflectError::UndefinedProperty);
/// 2. the field must not be private, else
///    [`AccessDenied`](ReflectError::AccessDenied);
/// 3. a new value must convert to the field type, else
///    [`TypeMismatch`](ReflectError::TypeMismatch).
///
/// Implemented for every [`Fields`] type.
///
/// # Examples
///
/// ```
/// use objkit_reflect::prelude::*;
///
/// #[derive(Reflect, Default)]
/// struct Account {
///     #[reflect(setter = Account::store_email)]
///     pub(crate) email: String,
///     pub(crate) active: bool,
///     password: String,
/// }
///
/// impl Account {
///     fn store_email(&mut self, email: String) {
///         self.email = email.to_lowercase();
///     }
/// }
///
/// let mut account = Account::default();
/// account.call("setEmail", vec!["ANN@EXAMPLE.COM".into_boxed_reflect()])?;
/// account.set_value("active", true)?;
///
/// assert_eq!(account.email, "ann@example.com");
/// assert_eq!(account.call("getActive", vec![])?.value_as::<bool>(), Some(&true));
/// assert!(account.get("password").is_err());
/// # Ok::<(), objkit_reflect::ReflectError>(())
/// ```
pub trait DynamicAccessor: Fields {
    /// Reads the field called `operand`.
    fn get(&self, operand: &str) -> Result<&dyn Reflect, ReflectError> {
        let descriptor = self.reflect_descriptor();
        let field = resolve(descriptor, operand)?;
        self.invoke_getter(field.name())
            .ok_or_else(|| ReflectError::undefined(descriptor.type_name(), operand))
    }

    /// Reads the field called `operand` as a `V`.
    fn get_as<V: Any>(&self, operand: &str) -> Result<&V, ReflectError> {
        let value = self.get(operand)?;
        value.downcast_ref::<V>().ok_or_else(|| {
            ReflectError::mismatch(
                operand,
                core::any::type_name::<V>(),
                value.reflect_type_name(),
            )
        })
    }

    /// Assigns `value` to the field called `operand`.
    fn set(&mut self, operand: &str, value: Box<dyn Reflect>) -> Result<&mut Self, ReflectError> {
        let descriptor = self.reflect_descriptor();
        let field = resolve(descriptor, operand)?;
        if !field.accepts(&*value) {
            return Err(ReflectError::mismatch(
                operand,
                field.type_path(),
                value.reflect_type_name(),
            ));
        }
        match self.invoke_setter(field.name(), value) {
            Ok(()) => Ok(self),
            Err(value) => Err(ReflectError::mismatch(
                operand,
                field.type_path(),
                value.reflect_type_name(),
            )),
        }
    }

    /// Assigns an unboxed `value` to the field called `operand`.
    #[inline]
    fn set_value<V: Reflect>(&mut self, operand: &str, value: V) -> Result<&mut Self, ReflectError> {
        self.set(operand, Box::new(value))
    }

    /// Dispatches an accessor-shaped method name.
    ///
    /// `getX` reads the field `x`; `setX` assigns the first argument to it.
    /// Names not starting with `get` or `set` fail with
    /// [`MethodNotFound`](ReflectError::MethodNotFound); a setter without an
    /// argument fails with [`MissingArgument`](ReflectError::MissingArgument).
    /// Extra arguments are ignored.
    fn call(&mut self, method: &str, args: Vec<Box<dyn Reflect>>) -> Result<Dispatch<'_>, ReflectError> {
        let Some((operation, operand)) = Operation::split(method) else {
            log::debug!(
                "`{}` has no method `{method}`",
                self.reflect_descriptor().type_name(),
            );
            return Err(ReflectError::MethodNotFound {
                method: String::from(method).into(),
            });
        };

        match operation {
            Operation::Get => self.get(&operand).map(Dispatch::Value),
            Operation::Set => {
                let value = args.into_iter().next().ok_or_else(|| ReflectError::MissingArgument {
                    method: String::from(method).into(),
                })?;
                self.set(&operand, value)?;
                Ok(Dispatch::Chained)
            }
        }
    }

    /// Builds a value from `initial` through the setters.
    ///
    /// Starts from [`Default`], then for every eligible field whose key holds
    /// a non-empty value (see [`Reflect::is_empty_value`]) assigns it with
    /// [`set`](DynamicAccessor::set), so declared setters run.
    ///
    /// ```
    /// use objkit_reflect::prelude::*;
    ///
    /// #[derive(Reflect, Default)]
    /// struct Tag {
    ///     #[reflect(setter = Tag::store_label)]
    ///     pub(crate) label: String,
    ///     pub(crate) weight: u8,
    /// }
    ///
    /// impl Tag {
    ///     fn store_label(&mut self, label: String) -> &mut Self {
    ///         self.label = label.trim().to_string();
    ///         self
    ///     }
    /// }
    ///
    /// let tag = Tag::construct(field_map! { "label" => "  rust ", "weight" => 0 })?;
    /// assert_eq!(tag.label, "rust");
    /// assert_eq!(tag.weight, 0);
    /// # Ok::<(), objkit_reflect::ReflectError>(())
    /// ```
    fn construct(mut initial: FieldMap) -> Result<Self, ReflectError>
    where
        Self: Sized + Default,
    {
        let mut value = Self::default();
        let descriptor = value.reflect_descriptor();
        for field in descriptor.eligible_fields() {
            let Some(item) = initial.remove(field.name()) else {
                continue;
            };
            if item.is_empty_value() {
                continue;
            }
            value.set(field.name(), item)?;
        }
        Ok(value)
    }
}

impl<T: Fields + ?Sized> DynamicAccessor for T {}

/// Finds the instance field `operand` and checks it is not private.
fn resolve<'a>(
    descriptor: &'a TypeDescriptor,
    operand: &str,
) -> Result<&'a FieldDescriptor, ReflectError> {
    let type_name = descriptor.type_name();
    match descriptor.field(operand) {
        Some(field) if !field.is_static() => {
            if field.visibility().is_private() {
                log::debug!("denied access to private field `{operand}` of `{type_name}`");
                return Err(ReflectError::denied(type_name, operand));
            }
            Ok(field)
        }
        _ => {
            log::debug!("`{type_name}` has no field `{operand}`");
            Err(ReflectError::undefined(type_name, operand))
        }
    }
}

#[cfg(test)]
mod tests {
    use alloc::string::{String, ToString};
    use alloc::vec;

    use super::{Operation, setter_name};
    use crate::derive::Reflect;
    use crate::ops::{ArrayConvertible, DynamicAccessor, FieldMap};
    use crate::{Reflect, ReflectError, field_map};

    #[derive(Reflect, Default, Debug)]
    #[reflect(accessors, statics(Self::LIMIT))]
    struct Profile {
        #[reflect(setter = Profile::store_name, getter = Profile::display_name)]
        pub(crate) name: String,
        pub(crate) age: u32,
        pub title: String,
        secret: String,
        #[reflect(ignore)]
        calls: u32,
    }

    #[derive(Reflect, Default)]
    struct Member {
        pub(crate) name: Option<String>,
        /// @var int
        pub(crate) age: Option<u32>,
    }

    #[allow(non_snake_case)]
    #[derive(Reflect, Default)]
    struct Upper {
        pub(crate) Code: u32,
    }

    impl Profile {
        const LIMIT: u32 = 3;

        fn store_name(&mut self, name: String) -> &mut Self {
            self.calls += 1;
            self.name = name.trim().to_string();
            self
        }

        fn display_name(&self) -> &String {
            &self.name
        }
    }

    #[test]
    fn split_is_char_aware() {
        assert_eq!(Operation::split("getÉtat"), Some((Operation::Get, "état".into())));
        // `é` spans bytes 2..4: the prefix is not on a char boundary.
        assert_eq!(Operation::split("xxéName"), None);
        assert_eq!(Operation::split(""), None);
        assert_eq!(Operation::split("Getname"), None);
    }

    #[test]
    fn setter_name_round_trips() {
        for field in ["name", "age", "_x", "a"] {
            let (operation, operand) = Operation::split(&setter_name(field)).unwrap();
            assert_eq!(operation, Operation::Set);
            assert_eq!(operand, field);
        }
    }

    #[test]
    fn get_and_set_by_name() {
        let mut profile = Profile::default();
        profile.set_value("age", 41_u8).unwrap().set_value("title", "Dr").unwrap();

        assert_eq!(profile.get_as::<u32>("age"), Ok(&41));
        assert_eq!(profile.get_as::<String>("title").map(String::as_str), Ok("Dr"));
    }

    #[test]
    fn declared_setter_and_getter_run() {
        let mut profile = Profile::default();
        profile.set_value("name", "  Ann ").unwrap();

        assert_eq!(profile.name, "Ann");
        assert_eq!(profile.calls, 1);
        assert_eq!(profile.get_as::<String>("name").map(String::as_str), Ok("Ann"));
    }

    #[test]
    fn call_matches_get_and_set() {
        let mut profile = Profile::default();
        let dispatch = profile.call("setAge", vec![7_u32.into_boxed_reflect()]).unwrap();
        assert!(dispatch.is_chained());
        assert_eq!(profile.age, 7);

        assert_eq!(profile.call("getAge", vec![]).unwrap().value_as::<u32>(), Some(&7));
        assert_eq!(profile.get_as::<u32>("age"), Ok(&7));

        profile.call("setName", vec![" Bo ".into_boxed_reflect()]).unwrap();
        assert_eq!(profile.name, "Bo");
        assert_eq!(profile.calls, 1);
    }

    #[test]
    fn call_rejects_other_methods() {
        let mut profile = Profile::default();
        let err = profile.call("fetchAge", vec![]).unwrap_err();
        assert!(matches!(err, ReflectError::MethodNotFound { ref method } if method == "fetchAge"));

        let err = profile.call("setAge", vec![]).unwrap_err();
        assert!(matches!(err, ReflectError::MissingArgument { .. }));
    }

    #[test]
    fn private_fields_are_denied() {
        let mut profile = Profile::default();
        assert!(matches!(
            profile.get("secret"),
            Err(ReflectError::AccessDenied { ref field, .. }) if field == "secret"
        ));
        assert!(matches!(
            profile.set_value("secret", "x"),
            Err(ReflectError::AccessDenied { .. })
        ));
        assert!(profile.secret.is_empty());
    }

    #[test]
    fn unknown_ignored_and_static_fields_are_undefined() {
        let mut profile = Profile::default();
        for name in ["missing", "calls", "LIMIT"] {
            assert!(matches!(
                profile.get(name),
                Err(ReflectError::UndefinedProperty { .. })
            ));
            assert!(matches!(
                profile.set_value(name, 1_u32),
                Err(ReflectError::UndefinedProperty { .. })
            ));
        }
        assert_eq!(Profile::LIMIT, 3);
    }

    #[test]
    fn set_rejects_wrong_types() {
        let mut profile = Profile {
            age: 5,
            ..Profile::default()
        };
        let err = profile.set_value("age", "five").unwrap_err();
        assert!(matches!(err, ReflectError::TypeMismatch { ref field, .. } if field == "age"));
        assert!(profile.set_value("age", -1_i32).is_err());
        assert_eq!(profile.age, 5);
    }

    #[test]
    fn construct_goes_through_setters() {
        let profile = Profile::construct(field_map! {
            "name" => "  Ann ",
            "age" => 0,
            "title" => "Dr",
            "secret" => "x",
        })
        .unwrap();

        assert_eq!(profile.name, "Ann");
        assert_eq!(profile.calls, 1);
        assert_eq!(profile.age, 0);
        assert_eq!(profile.title, "");
        assert_eq!(profile.secret, "");
    }

    #[test]
    fn construct_skips_empty_values() {
        let profile = Profile::construct(field_map! { "name" => "", "age" => 12 }).unwrap();
        assert_eq!(profile.calls, 0);
        assert_eq!(profile.age, 12);
    }

    #[test]
    fn construct_then_to_array() {
        let empty = Member::construct(FieldMap::new()).unwrap();
        let array = empty.to_array();
        assert_eq!(array.len(), 2);
        assert_eq!(array.get_as::<Option<String>>("name"), Some(&None));
        assert_eq!(array.get_as::<Option<u32>>("age"), Some(&None));

        let full = Member::construct(field_map! { "name" => "Ann", "age" => 30 }).unwrap();
        let array = full.to_array();
        assert_eq!(array.get_as::<Option<String>>("name"), Some(&Some("Ann".to_string())));
        assert_eq!(array.get_as::<Option<u32>>("age"), Some(&Some(30)));

        assert_eq!(full.get_field_type("age"), Some("int"));
        assert_eq!(full.get_field_type("name"), None);
        assert_eq!(full.get_fields(), full.get_fields());
        assert_eq!(full.get_fields(), ["name", "age"]);
    }

    #[test]
    fn construct_keeps_field_case() {
        let upper = Upper::construct(field_map! { "Code" => 3_u32 }).unwrap();
        assert_eq!(upper.Code, 3);
        assert_eq!(upper.get_as::<u32>("Code"), Ok(&3));
    }

    #[test]
    fn generated_accessors() {
        let mut profile = Profile::default();
        profile.set_age(3);
        assert_eq!(*profile.get_age(), 3);
    }
}
