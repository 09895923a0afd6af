use alloc::borrow::Cow;

use thiserror::Error;

/// Failure of a dynamic handler registration.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum EventError {
    #[error("handler for event `{event}` is not callable with the bus arguments")]
    InvalidHandler { event: Cow<'static, str> },
}
