//! Typed OpenCL handles and a thin forwarding layer over the native API.
//!
//! ## Layers
//!
//! * [`ffi`]: raw types, constants and the [`ClFunctions`] entry-point table
//!   (re-exported from `compute-cl-sys`).
//! * [`api`]: the process-wide entry-point table, loaded from the system
//!   OpenCL library on first use or installed explicitly.
//! * Handles ([`ComputePlatform`], [`ComputeDevice`], [`ComputeContext`],
//!   [`CommandQueue`], [`ComputeMemory`], [`ComputeProgram`],
//!   [`ComputeKernel`], [`ComputeEvent`], [`ComputeSampler`]): copyable
//!   wrappers around one native pointer which compare, order and hash by
//!   address. Every native entry point is available as exactly one method
//!   on the handle type it takes first. Those methods forward their
//!   arguments unchanged and hand back the native status code untouched.
//! * [`Retained`]: an owner which retains on clone and releases on drop.
//! * Free functions (`get_platform_ids`, `create_context`, `build_program`,
//!   ...): `Result` returning wrappers which evaluate status codes and hand
//!   out `Retained` owners.
//!
//! ## Configuration
//!
//! * `COMPUTE_CL_LIBRARY`: path or name of the OpenCL library to load.
//! * `COMPUTE_CL_DEFAULT_PLATFORM_IDX`: index used by [`default_platform`].
//! * `COMPUTE_CL_DEFAULT_DEVICE_TYPE`: device type used by
//!   [`default_device_type`] (`DEFAULT`, `CPU`, `GPU`, `ACCELERATOR`,
//!   `CUSTOM` or `ALL`).

#[macro_use] extern crate bitflags;
#[macro_use] extern crate enum_primitive;

pub mod api;
mod error;
mod forward;
mod functions;
mod types;
pub mod util;
#[cfg(test)] mod tests;

pub use compute_cl_sys as ffi;
pub use compute_cl_sys::ClFunctions;

pub use self::error::{Error, Result, ApiError, ApiWrapperError, ProgramBuildError};
pub use self::functions::*;
pub use self::types::abs::{ComputePlatform, ComputeDevice, ComputeContext, CommandQueue,
    ComputeMemory, ComputeProgram, ComputeKernel, ComputeEvent, ComputeSampler, ContextProperty};
pub use self::types::context_properties::ContextProperties;
pub use self::types::enums::*;
pub use self::types::flags::*;
pub use self::types::retained::{RefCounted, Retained};
pub use self::types::status::{Status, StatusCode};

/// A primitive type usable as a kernel argument or host-side buffer element.
///
/// Restricted to plain `Copy` data so that passing `&[T]` to the native
/// runtime as `(size_in_bytes, *const c_void)` is sound.
pub unsafe trait OclPrm: Copy + Send + Sync + 'static {}

unsafe impl OclPrm for u8 {}
unsafe impl OclPrm for i8 {}
unsafe impl OclPrm for u16 {}
unsafe impl OclPrm for i16 {}
unsafe impl OclPrm for u32 {}
unsafe impl OclPrm for i32 {}
unsafe impl OclPrm for u64 {}
unsafe impl OclPrm for i64 {}
unsafe impl OclPrm for usize {}
unsafe impl OclPrm for isize {}
unsafe impl OclPrm for f32 {}
unsafe impl OclPrm for f64 {}
unsafe impl<T: OclPrm, const N: usize> OclPrm for [T; N] {}
