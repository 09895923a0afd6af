#![doc = include_str!("../README.md")]
#![cfg_attr(docsrs, feature(doc_cfg))]
#![no_std]

// -----------------------------------------------------------------------------
// No STD Support

extern crate alloc;

#[cfg(test)]
extern crate std;

// -----------------------------------------------------------------------------
// Modules

mod bus;
mod emitting;
mod error;

// -----------------------------------------------------------------------------
// Top-level exports

pub use bus::{EventBus, Handler, RegistrationId};
pub use emitting::EventEmitting;
pub use error::EventError;
