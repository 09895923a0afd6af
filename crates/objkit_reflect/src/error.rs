use alloc::borrow::Cow;

use thiserror::Error;

// -----------------------------------------------------------------------------
// ReflectError

/// Failure of a generic field operation.
///
/// Every operation that returns it has made no change to the target value.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ReflectError {
    #[error("type `{type_name}` has no field table")]
    Introspection { type_name: &'static str },

    #[error("method `{method}` is not an accessor (expected `get...` or `set...`)")]
    MethodNotFound { method: Cow<'static, str> },

    #[error("`{type_name}` has no field `{field}`")]
    UndefinedProperty {
        type_name: &'static str,
        field: Cow<'static, str>,
    },

    #[error("field `{field}` of `{type_name}` is private")]
    AccessDenied {
        type_name: &'static str,
        field: Cow<'static, str>,
    },

    #[error("field `{field}` expects `{expected}`, found `{found}`")]
    TypeMismatch {
        field: Cow<'static, str>,
        expected: &'static str,
        found: &'static str,
    },

    #[error("method `{method}` requires an argument")]
    MissingArgument { method: Cow<'static, str> },
}

impl ReflectError {
    pub(crate) fn undefined(type_name: &'static str, field: &str) -> Self {
        Self::UndefinedProperty {
            type_name,
            field: Cow::Owned(field.into()),
        }
    }

    pub(crate) fn denied(type_name: &'static str, field: &str) -> Self {
        Self::AccessDenied {
            type_name,
            field: Cow::Owned(field.into()),
        }
    }

    pub(crate) fn mismatch(field: &str, expected: &'static str, found: &'static str) -> Self {
        Self::TypeMismatch {
            field: Cow::Owned(field.into()),
            expected,
            found,
        }
    }
}
