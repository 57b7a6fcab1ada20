//! Abstract data type wrappers.
//!
//! ### Reference
//!
//! The following table describes abstract data types supported by OpenCL
//! (from [SDK]):
//!
//! * cl_platform_id: The ID for a platform.
//! * cl_device_id: The ID for a device.
//! * cl_context: A context.
//! * cl_command_queue: A command queue.
//! * cl_mem: A memory object.
//! * cl_program: A program.
//! * cl_kernel: A kernel.
//! * cl_event: An event.
//! * cl_sampler: A sampler.
//!
//! Each is wrapped in a `#[repr(transparent)]` copyable newtype. A handle
//! is nothing but an address handed out by the runtime: two handles are
//! equal exactly when their addresses are, ordering and hashing use the
//! address as well, and the zero address (`ZERO`, also `Default`) stands for
//! "no resource".
//!
//! Handles do not own anything. Reference counts are adjusted only through
//! the forwarded `retain` / `release` calls or by wrapping a handle in a
//! [`Retained`](crate::Retained).
//!
//! Since the layout matches the native pointer, a `&[ComputeEvent]` can be
//! handed to the runtime directly as a `*const cl_event` wait list (the same
//! goes for device and memory object lists).
//!
//! [SDK]: https://registry.khronos.org/OpenCL/specs/3.0-unified/html/OpenCL_API.html

use std::fmt;
use std::ptr;
use crate::ffi::{c_void, cl_platform_id, cl_device_id, cl_context, cl_command_queue, cl_mem,
    cl_program, cl_kernel, cl_event, cl_sampler, cl_context_properties};
use crate::types::enums::ContextPropertyKey;

macro_rules! handle {
    ($(#[$attr:meta])* $name:ident($ptr_ty:ident)) => {
        $(#[$attr])*
        #[repr(transparent)]
        #[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
        pub struct $name($ptr_ty);

        impl $name {
            /// The "no resource" sentinel (address `0`).
            pub const ZERO: $name = $name(ptr::null_mut());

            /// Returns the "no resource" sentinel.
            #[inline]
            pub const fn null() -> $name {
                $name::ZERO
            }

            /// Wraps a raw pointer handed out by the runtime.
            #[inline]
            pub const fn from_raw(ptr: $ptr_ty) -> $name {
                $name(ptr)
            }

            /// Wraps an address.
            #[inline]
            pub fn from_value(value: usize) -> $name {
                $name(value as *mut c_void)
            }

            /// Returns the raw pointer.
            #[inline]
            pub const fn as_ptr(&self) -> $ptr_ty {
                self.0
            }

            /// Returns the wrapped address.
            #[inline]
            pub fn value(&self) -> usize {
                self.0 as usize
            }

            #[inline]
            pub fn is_null(&self) -> bool {
                self.0.is_null()
            }
        }

        impl Default for $name {
            fn default() -> $name {
                $name::ZERO
            }
        }

        impl fmt::Debug for $name {
            fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
                write!(f, concat!(stringify!($name), "({:#x})"), self.value())
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
                write!(f, "{:#x}", self.value())
            }
        }

        impl From<$name> for usize {
            fn from(handle: $name) -> usize {
                handle.value()
            }
        }

        unsafe impl Send for $name {}
        unsafe impl Sync for $name {}
    };
}

handle!(
    /// cl_platform_id
    ComputePlatform(cl_platform_id)
);

handle!(
    /// cl_device_id
    ComputeDevice(cl_device_id)
);

handle!(
    /// cl_context
    ComputeContext(cl_context)
);

handle!(
    /// cl_command_queue
    CommandQueue(cl_command_queue)
);

handle!(
    /// cl_mem
    ///
    /// Buffers, sub-buffers, images and pipes all share this handle type.
    ComputeMemory(cl_mem)
);

handle!(
    /// cl_program
    ComputeProgram(cl_program)
);

handle!(
    /// cl_kernel
    ComputeKernel(cl_kernel)
);

handle!(
    /// cl_event
    ComputeEvent(cl_event)
);

handle!(
    /// cl_sampler
    ComputeSampler(cl_sampler)
);

impl ComputeEvent {
    /// Returns a pointer suitable for an `event` out-parameter, or null.
    #[inline]
    pub(crate) fn out_ptr(event: Option<&mut ComputeEvent>) -> *mut cl_event {
        match event {
            Some(ev) => &mut ev.0 as *mut cl_event,
            None => ptr::null_mut(),
        }
    }
}


/// One `(name, value)` entry of a `cl_context_properties` list.
///
/// Equality, ordering and hashing are bitwise over both words. `ZERO` is the
/// list terminator.
#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct ContextProperty {
    key: cl_context_properties,
    value: isize,
}

impl ContextProperty {
    /// The `(0, 0)` list terminator.
    pub const ZERO: ContextProperty = ContextProperty { key: 0, value: 0 };

    pub const fn new(key: cl_context_properties, value: isize) -> ContextProperty {
        ContextProperty { key, value }
    }

    /// `CL_CONTEXT_PLATFORM`
    pub fn platform(platform: ComputePlatform) -> ContextProperty {
        ContextProperty::new(ContextPropertyKey::Platform as cl_context_properties,
            platform.value() as isize)
    }

    /// `CL_CONTEXT_INTEROP_USER_SYNC`
    pub fn interop_user_sync(sync: bool) -> ContextProperty {
        ContextProperty::new(ContextPropertyKey::InteropUserSync as cl_context_properties,
            sync as isize)
    }

    /// Returns the raw property name.
    #[inline]
    pub fn key(&self) -> cl_context_properties {
        self.key
    }

    /// Returns the property name if it is one this crate knows about.
    pub fn known_key(&self) -> Option<ContextPropertyKey> {
        use enum_primitive::FromPrimitive;
        ContextPropertyKey::from_isize(self.key)
    }

    #[inline]
    pub fn value(&self) -> isize {
        self.value
    }

    #[inline]
    pub fn is_terminator(&self) -> bool {
        self.key == 0
    }
}
