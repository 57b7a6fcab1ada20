//! Scalar types from `cl_platform.h`.

#![allow(non_camel_case_types)]

// From:
// https://raw.githubusercontent.com/KhronosGroup/OpenCL-Headers/main/CL/cl_platform.h
//
// typedef signed   __int32        cl_int;
// typedef unsigned __int32        cl_uint;
// typedef signed   __int64        cl_long;
// typedef unsigned __int64        cl_ulong;

pub type cl_char = i8;
pub type cl_uchar = u8;
pub type cl_short = i16;
pub type cl_ushort = u16;
pub type cl_int = i32;
pub type cl_uint = u32;
pub type cl_long = i64;
pub type cl_ulong = u64;
pub type cl_half = u16;
pub type cl_float = f32;
pub type cl_double = f64;

pub type intptr_t = isize;
