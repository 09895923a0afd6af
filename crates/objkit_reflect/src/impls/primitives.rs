use alloc::boxed::Box;
use alloc::string::String;
use core::fmt;

use crate::{FromReflect, Reflect};

// -----------------------------------------------------------------------------
// Shared method bodies

macro_rules! impl_value_methods {
    () => {
        fn reflect_partial_eq(&self, other: &dyn Reflect) -> Option<bool> {
            Some(other.downcast_ref::<Self>().is_some_and(|other| other == self))
        }

        fn reflect_debug(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            fmt::Debug::fmt(self, f)
        }
    };
}

// -----------------------------------------------------------------------------
// Integers

/// Reads any primitive integer as `i128`.
///
/// `u128` values above `i128::MAX` are not representable and yield `None`.
fn integer_value(value: &dyn Reflect) -> Option<i128> {
    macro_rules! try_integer {
        ($($ty:ty),*) => {$(
            if let Some(v) = value.downcast_ref::<$ty>() {
                return i128::try_from(*v).ok();
            }
        )*};
    }

    try_integer!(i32, i64, u32, u64, usize, isize, i8, i16, u8, u16, i128, u128);
    None
}

macro_rules! impl_reflect_integer {
    ($($ty:ty),* $(,)?) => {$(
        impl Reflect for $ty {
            #[inline]
            fn is_empty_value(&self) -> bool {
                *self == 0
            }

            impl_value_methods!();
        }

        impl FromReflect for $ty {
            fn accepts(value: &dyn Reflect) -> bool {
                integer_value(value).is_some_and(|v| <$ty>::try_from(v).is_ok())
            }

            fn take_from_reflect(value: Box<dyn Reflect>) -> Result<Self, Box<dyn Reflect>> {
                match integer_value(&*value).and_then(|v| <$ty>::try_from(v).ok()) {
                    Some(v) => Ok(v),
                    None => Err(value),
                }
            }
        }
    )*};
}

impl_reflect_integer!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

// -----------------------------------------------------------------------------
// Floats, bool, char

macro_rules! impl_reflect_exact {
    ($($ty:ty => |$this:ident| $empty:expr),* $(,)?) => {$(
        impl Reflect for $ty {
            #[inline]
            fn is_empty_value(&self) -> bool {
                let $this = self;
                $empty
            }

            impl_value_methods!();
        }

        impl FromReflect for $ty {}
    )*};
}

impl_reflect_exact! {
    f32 => |this| *this == 0.0,
    f64 => |this| *this == 0.0,
    bool => |this| !*this,
    char => |this| *this == '\0',
}

// -----------------------------------------------------------------------------
// Unit

impl Reflect for () {
    #[inline]
    fn is_null(&self) -> bool {
        true
    }

    impl_value_methods!();
}

impl FromReflect for () {}

// -----------------------------------------------------------------------------
// Strings

impl Reflect for &'static str {
    #[inline]
    fn is_empty_value(&self) -> bool {
        self.is_empty()
    }

    impl_value_methods!();
}

impl FromReflect for &'static str {}

impl Reflect for String {
    #[inline]
    fn is_empty_value(&self) -> bool {
        self.is_empty()
    }

    fn reflect_partial_eq(&self, other: &dyn Reflect) -> Option<bool> {
        if let Some(other) = other.downcast_ref::<String>() {
            return Some(other == self);
        }
        Some(other.downcast_ref::<&'static str>() == Some(&self.as_str()))
    }

    fn reflect_debug(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}

impl FromReflect for String {
    fn accepts(value: &dyn Reflect) -> bool {
        value.is::<String>() || value.is::<&'static str>()
    }

    fn take_from_reflect(value: Box<dyn Reflect>) -> Result<Self, Box<dyn Reflect>> {
        value
            .take::<String>()
            .or_else(|value| value.take::<&'static str>().map(String::from))
    }
}

#[cfg(test)]
mod tests {
    use alloc::string::String;

    use crate::{FromReflect, Reflect};

    #[test]
    fn integers_widen_and_narrow() {
        let value = 300_i32.into_boxed_reflect();
        assert!(u16::accepts(&*value));
        assert!(!u8::accepts(&*value));
        assert_eq!(u64::take_from_reflect(value).ok(), Some(300));

        let value = u128::MAX.into_boxed_reflect();
        assert!(!i64::accepts(&*value));
        assert!(i64::take_from_reflect(value).is_err());
    }

    #[test]
    fn floats_are_exact() {
        let value = 1.5_f32.into_boxed_reflect();
        assert!(!f64::accepts(&*value));
        assert_eq!(f32::take_from_reflect(value).ok(), Some(1.5));
    }

    #[test]
    fn string_accepts_str() {
        let value = "Ann".into_boxed_reflect();
        assert!(String::accepts(&*value));
        assert_eq!(String::take_from_reflect(value).ok().as_deref(), Some("Ann"));
        assert!(!String::accepts(&5_u8));
    }

    #[test]
    fn string_compares_with_str() {
        let name = String::from("Ann");
        assert_eq!(name.reflect_partial_eq(&"Ann"), Some(true));
        assert_eq!(name.reflect_partial_eq(&"Bob"), Some(false));
        assert_eq!(name.reflect_partial_eq(&1_u8), Some(false));
    }
}
