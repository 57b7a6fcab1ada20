//! Memory object entry points.

use crate::ffi::{self, c_void, cl_buffer_create_type, cl_buffer_region, cl_image_info,
    cl_mem_info, size_t, MemObjectDestructorCallbackFn};
#[cfg(feature = "opencl_version_2_0")]
use crate::ffi::cl_pipe_info;
use crate::error::Result;
use crate::types::abs::ComputeMemory;
use crate::types::flags::MemFlags;
use crate::types::status::StatusCode;
use super::{bytes_mut, out};

impl ComputeMemory {
    /// `clCreateSubBuffer`
    pub unsafe fn create_sub_buffer(self, flags: MemFlags,
            buffer_create_type: cl_buffer_create_type, buffer_create_info: &cl_buffer_region)
            -> Result<(ComputeMemory, StatusCode)> {
        let mut errcode = ffi::CL_SUCCESS;
        let mem = call!(clCreateSubBuffer(self.as_ptr(), flags.bits(), buffer_create_type,
            buffer_create_info as *const cl_buffer_region as *const c_void, &mut errcode));
        Ok((ComputeMemory::from_raw(mem), StatusCode(errcode)))
    }

    /// `clRetainMemObject`
    pub unsafe fn retain(self) -> Result<StatusCode> {
        Ok(StatusCode(call!(clRetainMemObject(self.as_ptr()))))
    }

    /// `clReleaseMemObject`
    pub unsafe fn release(self) -> Result<StatusCode> {
        Ok(StatusCode(call!(clReleaseMemObject(self.as_ptr()))))
    }

    /// `clGetMemObjectInfo`
    pub unsafe fn get_info(self, param_name: cl_mem_info, param_value: &mut [u8],
            param_value_size_ret: Option<&mut size_t>) -> Result<StatusCode> {
        let (size, value) = bytes_mut(param_value);
        Ok(StatusCode(call!(clGetMemObjectInfo(self.as_ptr(), param_name, size, value,
            out(param_value_size_ret)))))
    }

    /// `clGetImageInfo`
    pub unsafe fn get_image_info(self, param_name: cl_image_info, param_value: &mut [u8],
            param_value_size_ret: Option<&mut size_t>) -> Result<StatusCode> {
        let (size, value) = bytes_mut(param_value);
        Ok(StatusCode(call!(clGetImageInfo(self.as_ptr(), param_name, size, value,
            out(param_value_size_ret)))))
    }

    /// `clGetPipeInfo`
    #[cfg(feature = "opencl_version_2_0")]
    pub unsafe fn get_pipe_info(self, param_name: cl_pipe_info, param_value: &mut [u8],
            param_value_size_ret: Option<&mut size_t>) -> Result<StatusCode> {
        let (size, value) = bytes_mut(param_value);
        Ok(StatusCode(call!(clGetPipeInfo(self.as_ptr(), param_name, size, value,
            out(param_value_size_ret)))))
    }

    /// `clSetMemObjectDestructorCallback`
    pub unsafe fn set_destructor_callback(self, pfn_notify: Option<MemObjectDestructorCallbackFn>,
            user_data: *mut c_void) -> Result<StatusCode> {
        Ok(StatusCode(call!(clSetMemObjectDestructorCallback(self.as_ptr(), pfn_notify,
            user_data))))
    }
}
