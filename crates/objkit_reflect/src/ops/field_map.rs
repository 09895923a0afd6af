use alloc::borrow::Cow;
use alloc::boxed::Box;
use alloc::vec::Vec;
use core::any::Any;
use core::fmt;

use objkit_utils::hash::HashMap;

use crate::Reflect;

// -----------------------------------------------------------------------------
// FieldMap

/// An ordered map from field name to reflected value.
///
/// Produced by [`ArrayConvertible::to_array`] and consumed by
/// [`ArrayConvertible::from_array`] and [`DynamicAccessor::construct`].
/// Insertion order is kept; inserting an existing key replaces its value in
/// place.
///
/// The [`field_map!`](crate::field_map) macro builds one inline.
///
/// # Examples
///
/// ```
/// use objkit_reflect::ops::FieldMap;
///
/// let mut map = FieldMap::new();
/// map.insert("name", "Ann");
/// map.insert("age", 30_u32);
/// map.insert("name", "Bob");
///
/// assert_eq!(map.keys().collect::<Vec<_>>(), ["name", "age"]);
/// assert_eq!(map.get_as::<&str>("name"), Some(&"Bob"));
/// ```
///
/// [`ArrayConvertible::to_array`]: crate::ops::ArrayConvertible::to_array
/// [`ArrayConvertible::from_array`]: crate::ops::ArrayConvertible::from_array
/// [`DynamicAccessor::construct`]: crate::ops::DynamicAccessor::construct
#[derive(Default)]
pub struct FieldMap {
    names: Vec<Cow<'static, str>>,
    values: Vec<Box<dyn Reflect>>,
    indices: HashMap<Cow<'static, str>, usize>,
}

impl FieldMap {
    /// Creates an empty `FieldMap`.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty `FieldMap` with room for `capacity` entries.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            names: Vec::with_capacity(capacity),
            values: Vec::with_capacity(capacity),
            indices: HashMap::with_capacity_and_hasher(capacity, Default::default()),
        }
    }

    /// Inserts a value, returning the one it replaces.
    #[inline]
    pub fn insert(
        &mut self,
        name: impl Into<Cow<'static, str>>,
        value: impl Reflect,
    ) -> Option<Box<dyn Reflect>> {
        self.insert_boxed(name, Box::new(value))
    }

    /// Inserts a boxed value, returning the one it replaces.
    pub fn insert_boxed(
        &mut self,
        name: impl Into<Cow<'static, str>>,
        value: Box<dyn Reflect>,
    ) -> Option<Box<dyn Reflect>> {
        let name = name.into();
        if let Some(&index) = self.indices.get(&name) {
            return Some(core::mem::replace(&mut self.values[index], value));
        }
        self.indices.insert(name.clone(), self.names.len());
        self.names.push(name);
        self.values.push(value);
        None
    }

    /// Builder form of [`insert`](Self::insert).
    #[inline]
    pub fn with(mut self, name: impl Into<Cow<'static, str>>, value: impl Reflect) -> Self {
        self.insert(name, value);
        self
    }

    /// Returns the value stored under `name`.
    pub fn get(&self, name: &str) -> Option<&dyn Reflect> {
        let index = *self.indices.get(name)?;
        Some(&*self.values[index])
    }

    /// Returns the value stored under `name` mutably.
    pub fn get_mut(&mut self, name: &str) -> Option<&mut dyn Reflect> {
        let index = *self.indices.get(name)?;
        Some(&mut *self.values[index])
    }

    /// Returns the value stored under `name` if it is a `T`.
    pub fn get_as<T: Any>(&self, name: &str) -> Option<&T> {
        self.get(name)?.downcast_ref::<T>()
    }

    /// Removes and returns the value stored under `name`.
    ///
    /// This is O(N): later entries shift down.
    pub fn remove(&mut self, name: &str) -> Option<Box<dyn Reflect>> {
        let index = self.indices.remove(name)?;
        self.names.remove(index);
        let value = self.values.remove(index);
        for slot in self.indices.values_mut() {
            if *slot > index {
                *slot -= 1;
            }
        }
        Some(value)
    }

    /// Returns `true` if `name` is a key.
    #[inline]
    pub fn contains_key(&self, name: &str) -> bool {
        self.indices.contains_key(name)
    }

    /// Returns the number of entries.
    #[inline]
    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// Returns `true` if there are no entries.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Iterates over the keys in insertion order.
    #[inline]
    pub fn keys(&self) -> impl ExactSizeIterator<Item = &str> {
        self.names.iter().map(AsRef::as_ref)
    }

    /// Iterates over the entries in insertion order.
    #[inline]
    pub fn iter(&self) -> impl ExactSizeIterator<Item = (&str, &dyn Reflect)> {
        self.names
            .iter()
            .zip(&self.values)
            .map(|(name, value)| (name.as_ref(), &**value))
    }
}

// -----------------------------------------------------------------------------
// Traits

impl IntoIterator for FieldMap {
    type Item = (Cow<'static, str>, Box<dyn Reflect>);
    type IntoIter = core::iter::Zip<alloc::vec::IntoIter<Cow<'static, str>>, alloc::vec::IntoIter<Box<dyn Reflect>>>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.names.into_iter().zip(self.values)
    }
}

impl<K: Into<Cow<'static, str>>> FromIterator<(K, Box<dyn Reflect>)> for FieldMap {
    fn from_iter<I: IntoIterator<Item = (K, Box<dyn Reflect>)>>(iter: I) -> Self {
        let mut map = Self::new();
        for (name, value) in iter {
            map.insert_boxed(name, value);
        }
        map
    }
}

impl<K: Into<Cow<'static, str>>> Extend<(K, Box<dyn Reflect>)> for FieldMap {
    fn extend<I: IntoIterator<Item = (K, Box<dyn Reflect>)>>(&mut self, iter: I) {
        for (name, value) in iter {
            self.insert_boxed(name, value);
        }
    }
}

impl fmt::Debug for FieldMap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}

/// Two maps are equal when they hold the same keys and every pair of values
/// compares equal through [`Reflect::reflect_partial_eq`]. Order is ignored.
impl PartialEq for FieldMap {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len()
            && self.iter().all(|(name, value)| {
                other
                    .get(name)
                    .is_some_and(|other| value.reflect_partial_eq(other) == Some(true))
            })
    }
}

// -----------------------------------------------------------------------------
// Macro

/// Builds a [`FieldMap`] from `key => value` pairs.
///
/// ```
/// use objkit_reflect::field_map;
///
/// let map = field_map! {
///     "name" => "Ann",
///     "age" => 30_u32,
/// };
/// assert_eq!(map.len(), 2);
/// assert_eq!(map.get_as::<u32>("age"), Some(&30));
///
/// let empty = field_map! {};
/// assert!(empty.is_empty());
/// ```
#[macro_export]
macro_rules! field_map {
    () => {
        $crate::ops::FieldMap::new()
    };
    ($($name:expr => $value:expr),+ $(,)?) => {
        $crate::ops::FieldMap::new()
            $(.with($name, $value))+
    };
}

#[cfg(test)]
mod tests {
    use alloc::borrow::Cow;
    use alloc::boxed::Box;
    use alloc::string::String;
    use alloc::vec::Vec;

    use super::FieldMap;
    use crate::Reflect;

    #[test]
    fn replace_keeps_position() {
        let mut map = field_map! { "a" => 1_u8, "b" => 2_u8, "c" => 3_u8 };
        let old = map.insert("b", 20_u8).unwrap();
        assert_eq!(old.take::<u8>().unwrap(), 2);
        assert_eq!(map.keys().collect::<Vec<_>>(), ["a", "b", "c"]);
        assert_eq!(map.get_as::<u8>("b"), Some(&20));
    }

    #[test]
    fn remove_reindexes() {
        let mut map = field_map! { "a" => 1_u8, "b" => 2_u8, "c" => 3_u8 };
        assert!(map.remove("a").is_some());
        assert!(map.remove("a").is_none());
        assert_eq!(map.get_as::<u8>("c"), Some(&3));
        assert_eq!(map.get_as::<u8>("b"), Some(&2));
        map.insert("a", 4_u8);
        assert_eq!(map.keys().collect::<Vec<_>>(), ["b", "c", "a"]);
    }

    #[test]
    fn equality_ignores_order() {
        let a = field_map! { "x" => 1_i32, "y" => String::from("s") };
        let b = field_map! { "y" => "s", "x" => 1_i32 };
        // `String` compares equal to `&str`, not the other way round.
        assert_eq!(a, b);
        assert_ne!(a, field_map! { "x" => 1_i32 });
        assert_ne!(a, field_map! { "x" => 2_i32, "y" => "s" });
    }

    #[test]
    fn collect_and_debug() {
        let pairs: [(Cow<'static, str>, Box<dyn Reflect>); 2] = [
            ("k".into(), Box::new(Some(1_u8))),
            (String::from("v").into(), Box::new(())),
        ];
        let map: FieldMap = pairs.into_iter().collect();
        assert_eq!(alloc::format!("{map:?}"), "{\"k\": Some(1), \"v\": ()}");
    }
}
