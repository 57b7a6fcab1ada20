//! Kernel entry points.

use crate::ffi::{c_void, cl_kernel_info, cl_kernel_work_group_info, cl_uint, size_t};
#[cfg(feature = "opencl_version_1_2")]
use crate::ffi::cl_kernel_arg_info;
#[cfg(feature = "opencl_version_2_1")]
use crate::ffi;
use crate::error::Result;
use crate::types::abs::{ComputeKernel, ComputeDevice};
use crate::types::status::StatusCode;
use super::{bytes_mut, out};

impl ComputeKernel {
    /// `clRetainKernel`
    pub unsafe fn retain(self) -> Result<StatusCode> {
        Ok(StatusCode(call!(clRetainKernel(self.as_ptr()))))
    }

    /// `clReleaseKernel`
    pub unsafe fn release(self) -> Result<StatusCode> {
        Ok(StatusCode(call!(clReleaseKernel(self.as_ptr()))))
    }

    /// `clSetKernelArg`
    ///
    /// A null `arg_value` with a non-zero `arg_size` allocates local memory.
    pub unsafe fn set_arg(self, arg_index: cl_uint, arg_size: size_t, arg_value: *const c_void)
            -> Result<StatusCode> {
        Ok(StatusCode(call!(clSetKernelArg(self.as_ptr(), arg_index, arg_size, arg_value))))
    }

    /// `clSetKernelArgSVMPointer`
    #[cfg(feature = "opencl_version_2_0")]
    pub unsafe fn set_arg_svm_pointer(self, arg_index: cl_uint, arg_value: *const c_void)
            -> Result<StatusCode> {
        Ok(StatusCode(call!(clSetKernelArgSVMPointer(self.as_ptr(), arg_index, arg_value))))
    }

    /// `clGetKernelInfo`
    pub unsafe fn get_info(self, param_name: cl_kernel_info, param_value: &mut [u8],
            param_value_size_ret: Option<&mut size_t>) -> Result<StatusCode> {
        let (size, value) = bytes_mut(param_value);
        Ok(StatusCode(call!(clGetKernelInfo(self.as_ptr(), param_name, size, value,
            out(param_value_size_ret)))))
    }

    /// `clGetKernelArgInfo`
    #[cfg(feature = "opencl_version_1_2")]
    pub unsafe fn get_arg_info(self, arg_index: cl_uint, param_name: cl_kernel_arg_info,
            param_value: &mut [u8], param_value_size_ret: Option<&mut size_t>)
            -> Result<StatusCode> {
        let (size, value) = bytes_mut(param_value);
        Ok(StatusCode(call!(clGetKernelArgInfo(self.as_ptr(), arg_index, param_name, size, value,
            out(param_value_size_ret)))))
    }

    /// `clGetKernelWorkGroupInfo`
    pub unsafe fn get_work_group_info(self, device: ComputeDevice,
            param_name: cl_kernel_work_group_info, param_value: &mut [u8],
            param_value_size_ret: Option<&mut size_t>) -> Result<StatusCode> {
        let (size, value) = bytes_mut(param_value);
        Ok(StatusCode(call!(clGetKernelWorkGroupInfo(self.as_ptr(), device.as_ptr(), param_name,
            size, value, out(param_value_size_ret)))))
    }

    /// `clCloneKernel`
    #[cfg(feature = "opencl_version_2_1")]
    pub unsafe fn clone_kernel(self) -> Result<(ComputeKernel, StatusCode)> {
        let mut errcode = ffi::CL_SUCCESS;
        let kernel = call!(clCloneKernel(self.as_ptr(), &mut errcode));
        Ok((ComputeKernel::from_raw(kernel), StatusCode(errcode)))
    }
}
