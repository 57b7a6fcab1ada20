//! Program entry points.

use std::ffi::CStr;
use crate::ffi::{self, c_void, cl_program_info, cl_program_build_info, cl_uint, size_t,
    BuildProgramCallbackFn};
#[cfg(feature = "opencl_version_1_2")]
use crate::ffi::c_char;
use crate::error::Result;
use crate::types::abs::{ComputeProgram, ComputeDevice, ComputeKernel};
use crate::types::status::StatusCode;
use super::{bytes_mut, list, list_mut, opt_cstr, out};

impl ComputeProgram {
    /// `clRetainProgram`
    pub unsafe fn retain(self) -> Result<StatusCode> {
        Ok(StatusCode(call!(clRetainProgram(self.as_ptr()))))
    }

    /// `clReleaseProgram`
    pub unsafe fn release(self) -> Result<StatusCode> {
        Ok(StatusCode(call!(clReleaseProgram(self.as_ptr()))))
    }

    /// `clBuildProgram`
    ///
    /// An empty `devices` slice builds for every device associated with the
    /// program.
    pub unsafe fn build(self, devices: &[ComputeDevice], options: Option<&CStr>,
            pfn_notify: Option<BuildProgramCallbackFn>, user_data: *mut c_void)
            -> Result<StatusCode> {
        let (num_devices, devices) = list(devices);
        Ok(StatusCode(call!(clBuildProgram(self.as_ptr(), num_devices, devices,
            opt_cstr(options), pfn_notify, user_data))))
    }

    /// `clCompileProgram`
    ///
    /// `header_include_names` is indexed like `input_headers`.
    #[cfg(feature = "opencl_version_1_2")]
    pub unsafe fn compile(self, devices: &[ComputeDevice], options: Option<&CStr>,
            input_headers: &[ComputeProgram], header_include_names: &[*const c_char],
            pfn_notify: Option<BuildProgramCallbackFn>, user_data: *mut c_void)
            -> Result<StatusCode> {
        let (num_devices, devices) = list(devices);
        let (num_input_headers, input_headers) = list(input_headers);
        Ok(StatusCode(call!(clCompileProgram(self.as_ptr(), num_devices, devices,
            opt_cstr(options), num_input_headers, input_headers, list(header_include_names).1,
            pfn_notify, user_data))))
    }

    /// `clGetProgramInfo`
    pub unsafe fn get_info(self, param_name: cl_program_info, param_value: &mut [u8],
            param_value_size_ret: Option<&mut size_t>) -> Result<StatusCode> {
        let (size, value) = bytes_mut(param_value);
        Ok(StatusCode(call!(clGetProgramInfo(self.as_ptr(), param_name, size, value,
            out(param_value_size_ret)))))
    }

    /// `clGetProgramBuildInfo`
    pub unsafe fn get_build_info(self, device: ComputeDevice, param_name: cl_program_build_info,
            param_value: &mut [u8], param_value_size_ret: Option<&mut size_t>)
            -> Result<StatusCode> {
        let (size, value) = bytes_mut(param_value);
        Ok(StatusCode(call!(clGetProgramBuildInfo(self.as_ptr(), device.as_ptr(), param_name,
            size, value, out(param_value_size_ret)))))
    }

    /// `clCreateKernel`
    pub unsafe fn create_kernel(self, kernel_name: &CStr)
            -> Result<(ComputeKernel, StatusCode)> {
        let mut errcode = ffi::CL_SUCCESS;
        let kernel = call!(clCreateKernel(self.as_ptr(), kernel_name.as_ptr(), &mut errcode));
        Ok((ComputeKernel::from_raw(kernel), StatusCode(errcode)))
    }

    /// `clCreateKernelsInProgram`
    pub unsafe fn create_kernels(self, kernels: &mut [ComputeKernel],
            num_kernels_ret: Option<&mut cl_uint>) -> Result<StatusCode> {
        let (num_kernels, kernels) = list_mut(kernels);
        Ok(StatusCode(call!(clCreateKernelsInProgram(self.as_ptr(), num_kernels, kernels,
            out(num_kernels_ret)))))
    }
}
