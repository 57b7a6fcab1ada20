//! Native status codes.

use std::fmt;
use enum_primitive::FromPrimitive;
use crate::ffi::{self, cl_int};
use crate::error::{ApiError, Result};

enum_from_primitive! {
    /// The named OpenCL error enumeration.
    ///
    /// Codes the runtime returns which are not listed here (vendor
    /// extensions) are still carried verbatim by [`StatusCode`].
    #[repr(C)]
    #[allow(non_camel_case_types)]
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub enum Status {
        CL_SUCCESS = ffi::CL_SUCCESS as isize,
        CL_DEVICE_NOT_FOUND = ffi::CL_DEVICE_NOT_FOUND as isize,
        CL_DEVICE_NOT_AVAILABLE = ffi::CL_DEVICE_NOT_AVAILABLE as isize,
        CL_COMPILER_NOT_AVAILABLE = ffi::CL_COMPILER_NOT_AVAILABLE as isize,
        CL_MEM_OBJECT_ALLOCATION_FAILURE = ffi::CL_MEM_OBJECT_ALLOCATION_FAILURE as isize,
        CL_OUT_OF_RESOURCES = ffi::CL_OUT_OF_RESOURCES as isize,
        CL_OUT_OF_HOST_MEMORY = ffi::CL_OUT_OF_HOST_MEMORY as isize,
        CL_PROFILING_INFO_NOT_AVAILABLE = ffi::CL_PROFILING_INFO_NOT_AVAILABLE as isize,
        CL_MEM_COPY_OVERLAP = ffi::CL_MEM_COPY_OVERLAP as isize,
        CL_IMAGE_FORMAT_MISMATCH = ffi::CL_IMAGE_FORMAT_MISMATCH as isize,
        CL_IMAGE_FORMAT_NOT_SUPPORTED = ffi::CL_IMAGE_FORMAT_NOT_SUPPORTED as isize,
        CL_BUILD_PROGRAM_FAILURE = ffi::CL_BUILD_PROGRAM_FAILURE as isize,
        CL_MAP_FAILURE = ffi::CL_MAP_FAILURE as isize,
        CL_MISALIGNED_SUB_BUFFER_OFFSET = ffi::CL_MISALIGNED_SUB_BUFFER_OFFSET as isize,
        CL_EXEC_STATUS_ERROR_FOR_EVENTS_IN_WAIT_LIST =
            ffi::CL_EXEC_STATUS_ERROR_FOR_EVENTS_IN_WAIT_LIST as isize,
        CL_COMPILE_PROGRAM_FAILURE = ffi::CL_COMPILE_PROGRAM_FAILURE as isize,
        CL_LINKER_NOT_AVAILABLE = ffi::CL_LINKER_NOT_AVAILABLE as isize,
        CL_LINK_PROGRAM_FAILURE = ffi::CL_LINK_PROGRAM_FAILURE as isize,
        CL_DEVICE_PARTITION_FAILED = ffi::CL_DEVICE_PARTITION_FAILED as isize,
        CL_KERNEL_ARG_INFO_NOT_AVAILABLE = ffi::CL_KERNEL_ARG_INFO_NOT_AVAILABLE as isize,
        CL_INVALID_VALUE = ffi::CL_INVALID_VALUE as isize,
        CL_INVALID_DEVICE_TYPE = ffi::CL_INVALID_DEVICE_TYPE as isize,
        CL_INVALID_PLATFORM = ffi::CL_INVALID_PLATFORM as isize,
        CL_INVALID_DEVICE = ffi::CL_INVALID_DEVICE as isize,
        CL_INVALID_CONTEXT = ffi::CL_INVALID_CONTEXT as isize,
        CL_INVALID_QUEUE_PROPERTIES = ffi::CL_INVALID_QUEUE_PROPERTIES as isize,
        CL_INVALID_COMMAND_QUEUE = ffi::CL_INVALID_COMMAND_QUEUE as isize,
        CL_INVALID_HOST_PTR = ffi::CL_INVALID_HOST_PTR as isize,
        CL_INVALID_MEM_OBJECT = ffi::CL_INVALID_MEM_OBJECT as isize,
        CL_INVALID_IMAGE_FORMAT_DESCRIPTOR = ffi::CL_INVALID_IMAGE_FORMAT_DESCRIPTOR as isize,
        CL_INVALID_IMAGE_SIZE = ffi::CL_INVALID_IMAGE_SIZE as isize,
        CL_INVALID_SAMPLER = ffi::CL_INVALID_SAMPLER as isize,
        CL_INVALID_BINARY = ffi::CL_INVALID_BINARY as isize,
        CL_INVALID_BUILD_OPTIONS = ffi::CL_INVALID_BUILD_OPTIONS as isize,
        CL_INVALID_PROGRAM = ffi::CL_INVALID_PROGRAM as isize,
        CL_INVALID_PROGRAM_EXECUTABLE = ffi::CL_INVALID_PROGRAM_EXECUTABLE as isize,
        CL_INVALID_KERNEL_NAME = ffi::CL_INVALID_KERNEL_NAME as isize,
        CL_INVALID_KERNEL_DEFINITION = ffi::CL_INVALID_KERNEL_DEFINITION as isize,
        CL_INVALID_KERNEL = ffi::CL_INVALID_KERNEL as isize,
        CL_INVALID_ARG_INDEX = ffi::CL_INVALID_ARG_INDEX as isize,
        CL_INVALID_ARG_VALUE = ffi::CL_INVALID_ARG_VALUE as isize,
        CL_INVALID_ARG_SIZE = ffi::CL_INVALID_ARG_SIZE as isize,
        CL_INVALID_KERNEL_ARGS = ffi::CL_INVALID_KERNEL_ARGS as isize,
        CL_INVALID_WORK_DIMENSION = ffi::CL_INVALID_WORK_DIMENSION as isize,
        CL_INVALID_WORK_GROUP_SIZE = ffi::CL_INVALID_WORK_GROUP_SIZE as isize,
        CL_INVALID_WORK_ITEM_SIZE = ffi::CL_INVALID_WORK_ITEM_SIZE as isize,
        CL_INVALID_GLOBAL_OFFSET = ffi::CL_INVALID_GLOBAL_OFFSET as isize,
        CL_INVALID_EVENT_WAIT_LIST = ffi::CL_INVALID_EVENT_WAIT_LIST as isize,
        CL_INVALID_EVENT = ffi::CL_INVALID_EVENT as isize,
        CL_INVALID_OPERATION = ffi::CL_INVALID_OPERATION as isize,
        CL_INVALID_GL_OBJECT = ffi::CL_INVALID_GL_OBJECT as isize,
        CL_INVALID_BUFFER_SIZE = ffi::CL_INVALID_BUFFER_SIZE as isize,
        CL_INVALID_MIP_LEVEL = ffi::CL_INVALID_MIP_LEVEL as isize,
        CL_INVALID_GLOBAL_WORK_SIZE = ffi::CL_INVALID_GLOBAL_WORK_SIZE as isize,
        CL_INVALID_PROPERTY = ffi::CL_INVALID_PROPERTY as isize,
        CL_INVALID_IMAGE_DESCRIPTOR = ffi::CL_INVALID_IMAGE_DESCRIPTOR as isize,
        CL_INVALID_COMPILER_OPTIONS = ffi::CL_INVALID_COMPILER_OPTIONS as isize,
        CL_INVALID_LINKER_OPTIONS = ffi::CL_INVALID_LINKER_OPTIONS as isize,
        CL_INVALID_DEVICE_PARTITION_COUNT = ffi::CL_INVALID_DEVICE_PARTITION_COUNT as isize,
        CL_INVALID_PIPE_SIZE = ffi::CL_INVALID_PIPE_SIZE as isize,
        CL_INVALID_DEVICE_QUEUE = ffi::CL_INVALID_DEVICE_QUEUE as isize,
        CL_PLATFORM_NOT_FOUND_KHR = ffi::CL_PLATFORM_NOT_FOUND_KHR as isize,
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}


/// A status code exactly as returned by a native entry point.
#[repr(transparent)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct StatusCode(pub cl_int);

impl StatusCode {
    pub const SUCCESS: StatusCode = StatusCode(ffi::CL_SUCCESS);

    /// Returns the raw code.
    #[inline]
    pub fn raw(self) -> cl_int {
        self.0
    }

    #[inline]
    pub fn is_success(self) -> bool {
        self.0 == ffi::CL_SUCCESS
    }

    /// Returns the named status, if this code is one OpenCL defines.
    pub fn status(self) -> Option<Status> {
        Status::from_i32(self.0)
    }

    /// Returns `Ok(())` for `CL_SUCCESS`, otherwise an `ApiError` naming
    /// `fn_name`.
    pub fn check(self, fn_name: &'static str) -> Result<()> {
        if self.is_success() {
            Ok(())
        } else {
            Err(ApiError::new(self.0, fn_name, None::<String>).into())
        }
    }
}

impl From<cl_int> for StatusCode {
    fn from(code: cl_int) -> StatusCode {
        StatusCode(code)
    }
}

impl From<Status> for StatusCode {
    fn from(status: Status) -> StatusCode {
        StatusCode(status as cl_int)
    }
}

impl PartialEq<Status> for StatusCode {
    fn eq(&self, other: &Status) -> bool {
        self.0 == *other as cl_int
    }
}

impl fmt::Display for StatusCode {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self.status() {
            Some(status) => write!(f, "{:?} ({})", status, self.0),
            None => write!(f, "unknown status ({})", self.0),
        }
    }
}
