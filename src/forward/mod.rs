//! One method per native entry point.
//!
//! Every method is declared on the handle type the native function takes as
//! its first argument (associated functions where there is none) and hands
//! its arguments to the runtime unchanged:
//!
//! * handles are unwrapped to their pointers,
//! * slices become `(count, pointer)` pairs, with an empty slice passed as
//!   `(0, NULL)`,
//! * host data slices (`&[T]` / `&mut [T]`) become `(size_in_bytes, pointer)`,
//! * `Option<&mut _>` out-parameters become a pointer or `NULL`,
//! * `bool` becomes `CL_TRUE` / `CL_FALSE`.
//!
//! The status each entry point returns (or writes to `errcode_ret`) comes
//! back verbatim inside `Ok`. It is never inspected here. The only errors
//! are [`Error::EntryPointUnavailable`](crate::Error::EntryPointUnavailable),
//! when the loaded runtime does not export the symbol, and the library
//! loading errors from [`api::get`](crate::api::get).
//!
//! All methods are `unsafe`: the runtime trusts every pointer, size and
//! handle it is given.

use std::ffi::CStr;
use std::mem;
use std::ptr;
use crate::ffi::{c_char, c_void, cl_bool, cl_event, cl_uint, size_t};
use crate::types::abs::ComputeEvent;

/// Calls the named entry point from the installed table.
macro_rules! call {
    ($name:ident ( $($arg:expr),* $(,)? )) => {
        match crate::api::get()?.$name {
            Some(f) => f($($arg),*),
            None => return Err(crate::error::Error::EntryPointUnavailable(stringify!($name))),
        }
    };
}

mod platform;
mod device;
mod context;
mod queue;
mod memory;
mod sampler;
mod program;
mod kernel;
mod event;


#[inline]
fn list<T, U>(items: &[T]) -> (cl_uint, *const U) {
    if items.is_empty() {
        (0, ptr::null())
    } else {
        (items.len() as cl_uint, items.as_ptr() as *const U)
    }
}

#[inline]
fn list_mut<T, U>(items: &mut [T]) -> (cl_uint, *mut U) {
    if items.is_empty() {
        (0, ptr::null_mut())
    } else {
        (items.len() as cl_uint, items.as_mut_ptr() as *mut U)
    }
}

#[inline]
fn wait_list(events: &[ComputeEvent]) -> (cl_uint, *const cl_event) {
    list(events)
}

#[inline]
fn bytes<T: Copy>(data: &[T]) -> (size_t, *const c_void) {
    if data.is_empty() {
        (0, ptr::null())
    } else {
        (mem::size_of_val(data), data.as_ptr() as *const c_void)
    }
}

#[inline]
fn bytes_mut<T: Copy>(data: &mut [T]) -> (size_t, *mut c_void) {
    if data.is_empty() {
        (0, ptr::null_mut())
    } else {
        (mem::size_of_val(data), data.as_mut_ptr() as *mut c_void)
    }
}

#[inline]
fn opt_slice<T, U>(items: Option<&[T]>) -> *const U {
    match items {
        Some(items) => list::<T, U>(items).1,
        None => ptr::null(),
    }
}

#[inline]
fn out<T>(value: Option<&mut T>) -> *mut T {
    match value {
        Some(value) => value as *mut T,
        None => ptr::null_mut(),
    }
}

#[inline]
fn opt_cstr(s: Option<&CStr>) -> *const c_char {
    s.map_or(ptr::null(), CStr::as_ptr)
}

#[inline]
fn cl_bool(value: bool) -> cl_bool {
    if value { crate::ffi::CL_TRUE } else { crate::ffi::CL_FALSE }
}
