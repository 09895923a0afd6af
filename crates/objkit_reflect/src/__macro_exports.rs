//! Items used by the code `#[derive(Reflect)]` generates. Not public API.

pub use alloc::borrow::Cow;
pub use alloc::boxed::Box;
pub use core::option::Option::{self, None, Some};
pub use core::result::Result::{self, Err, Ok};

pub use crate::impls::{GenericDescriptorCell, NonGenericDescriptorCell, fields_debug};
pub use crate::info::{Described, FieldDescriptor, TypeDescriptor, Visibility};
pub use crate::ops::Fields;
pub use crate::{FromReflect, Reflect};

/// Converts `value` and passes it to `assign`, or hands the value back.
#[inline]
pub fn assign_with<T: FromReflect>(
    value: Box<dyn Reflect>,
    assign: impl FnOnce(T),
) -> Result<(), Box<dyn Reflect>> {
    assign(T::take_from_reflect(value)?);
    Ok(())
}

#[cfg(feature = "auto_register")]
pub mod auto_register {
    pub use inventory;

    use crate::info::Described;
    use crate::registry::DescriptorRegistry;

    /// One registration function, submitted per
    /// `#[reflect(auto_register)]` type.
    pub struct __AutoRegisterFunc(pub fn(&mut DescriptorRegistry));

    pub trait __RegisterType {
        fn __register(registry: &mut DescriptorRegistry);
    }

    impl<T: Described> __RegisterType for T {
        #[inline]
        fn __register(registry: &mut DescriptorRegistry) {
            registry.register::<T>();
        }
    }

    inventory::collect!(__AutoRegisterFunc);

    // Runs only if static registration works on this platform.
    inventory::submit! {
        __AutoRegisterFunc(DescriptorRegistry::__mark_auto_registered)
    }

    pub fn __register_types(registry: &mut DescriptorRegistry) {
        for func in inventory::iter::<__AutoRegisterFunc> {
            (func.0)(registry);
        }
    }
}
