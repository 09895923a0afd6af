use alloc::boxed::Box;
use alloc::vec::Vec;
use core::fmt;

use crate::{FromReflect, Reflect};

// -----------------------------------------------------------------------------
// Option

impl<T: Reflect> Reflect for Option<T> {
    #[inline]
    fn is_null(&self) -> bool {
        self.is_none()
    }

    fn is_empty_value(&self) -> bool {
        match self {
            Some(value) => value.is_empty_value(),
            None => true,
        }
    }

    fn reflect_partial_eq(&self, other: &dyn Reflect) -> Option<bool> {
        let Some(other) = other.downcast_ref::<Self>() else {
            return Some(false);
        };
        match (self, other) {
            (Some(a), Some(b)) => a.reflect_partial_eq(b),
            (None, None) => Some(true),
            _ => Some(false),
        }
    }

    fn reflect_debug(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Some(value) => {
                f.write_str("Some(")?;
                value.reflect_debug(f)?;
                f.write_str(")")
            }
            None => f.write_str("None"),
        }
    }
}

impl<T: FromReflect> FromReflect for Option<T> {
    fn accepts(value: &dyn Reflect) -> bool {
        value.is::<Self>() || T::accepts(value)
    }

    fn take_from_reflect(value: Box<dyn Reflect>) -> Result<Self, Box<dyn Reflect>> {
        value
            .take::<Self>()
            .or_else(|value| T::take_from_reflect(value).map(Some))
    }
}

// -----------------------------------------------------------------------------
// Vec

impl<T: Reflect> Reflect for Vec<T> {
    #[inline]
    fn is_empty_value(&self) -> bool {
        self.is_empty()
    }

    fn reflect_partial_eq(&self, other: &dyn Reflect) -> Option<bool> {
        let Some(other) = other.downcast_ref::<Self>() else {
            return Some(false);
        };
        if self.len() != other.len() {
            return Some(false);
        }
        for (a, b) in self.iter().zip(other) {
            if !a.reflect_partial_eq(b)? {
                return Some(false);
            }
        }
        Some(true)
    }

    fn reflect_debug(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        for (index, item) in self.iter().enumerate() {
            if index > 0 {
                f.write_str(", ")?;
            }
            item.reflect_debug(f)?;
        }
        f.write_str("]")
    }
}

impl<T: Reflect> FromReflect for Vec<T> {}

#[cfg(test)]
mod tests {
    use alloc::string::String;
    use alloc::vec;
    use alloc::vec::Vec;

    use crate::{FromReflect, Reflect};

    #[test]
    fn option_wraps_bare_values() {
        let value = "Ann".into_boxed_reflect();
        assert!(<Option<String>>::accepts(&*value));
        let name = <Option<String>>::take_from_reflect(value).ok();
        assert_eq!(name, Some(Some(String::from("Ann"))));

        let value = Some(4_u8).into_boxed_reflect();
        assert_eq!(<Option<u8>>::take_from_reflect(value).ok(), Some(Some(4)));

        assert!(!<Option<u8>>::accepts(&"no"));
    }

    #[test]
    fn option_compare_and_debug() {
        let a = Some(String::from("x"));
        assert_eq!(a.reflect_partial_eq(&Some(String::from("x"))), Some(true));
        assert_eq!(a.reflect_partial_eq(&Option::<String>::None), Some(false));
        assert_eq!(alloc::format!("{:?}", a.into_boxed_reflect()), "Some(\"x\")");
    }

    #[test]
    fn vec_compare() {
        let a = vec![1_u8, 2, 3];
        assert_eq!(a.reflect_partial_eq(&vec![1_u8, 2, 3]), Some(true));
        assert_eq!(a.reflect_partial_eq(&vec![1_u8, 2]), Some(false));
        assert!(Vec::<u8>::new().is_empty_value());
    }
}
