#![doc = include_str!("../README.md")]
#![cfg_attr(docsrs, feature(doc_cfg))]
#![no_std]

pub use objkit_events as events;
pub use objkit_reflect as reflect;
pub use objkit_utils as utils;

/// The traits and macros a consuming type needs in scope.
pub mod prelude {
    pub use crate::events::{EventBus, EventEmitting};
    pub use crate::reflect::prelude::*;
}
