//! A registry of type descriptors, for lookups by id or by name.
//!
//! ## auto_register
//!
//! See [`DescriptorRegistry::auto_register`].
//!
//! Static registration is done with the [`inventory`] crate. Not every
//! platform supports it (the major ones do); where it is unsupported the
//! method returns `false` and registers nothing.
//!
//! [`inventory`]: https://docs.rs/inventory

// -----------------------------------------------------------------------------
// Modules

mod descriptor_registry;

// -----------------------------------------------------------------------------
// Exports

pub use descriptor_registry::DescriptorRegistry;
