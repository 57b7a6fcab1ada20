//! Platform entry points.

#[cfg(feature = "opencl_version_1_2")]
use std::ffi::CStr;
use crate::ffi::{c_void, cl_platform_info, cl_uint, size_t};
use crate::error::Result;
use crate::types::abs::{ComputePlatform, ComputeDevice};
use crate::types::flags::DeviceType;
use crate::types::status::StatusCode;
use super::{bytes_mut, list_mut, out};

impl ComputePlatform {
    /// `clGetPlatformIDs`
    ///
    /// Pass an empty `platforms` slice with `num_platforms` set to query the
    /// count alone.
    pub unsafe fn get_ids(platforms: &mut [ComputePlatform], num_platforms: Option<&mut cl_uint>)
            -> Result<StatusCode> {
        let (num_entries, platforms) = list_mut(platforms);
        Ok(StatusCode(call!(clGetPlatformIDs(num_entries, platforms, out(num_platforms)))))
    }

    /// `clGetPlatformInfo`
    pub unsafe fn get_info(self, param_name: cl_platform_info, param_value: &mut [u8],
            param_value_size_ret: Option<&mut size_t>) -> Result<StatusCode> {
        let (size, value) = bytes_mut(param_value);
        Ok(StatusCode(call!(clGetPlatformInfo(self.as_ptr(), param_name, size, value,
            out(param_value_size_ret)))))
    }

    /// `clGetDeviceIDs`
    pub unsafe fn get_device_ids(self, device_type: DeviceType, devices: &mut [ComputeDevice],
            num_devices: Option<&mut cl_uint>) -> Result<StatusCode> {
        let (num_entries, devices) = list_mut(devices);
        Ok(StatusCode(call!(clGetDeviceIDs(self.as_ptr(), device_type.bits(), num_entries,
            devices, out(num_devices)))))
    }

    /// `clUnloadPlatformCompiler`
    #[cfg(feature = "opencl_version_1_2")]
    pub unsafe fn unload_compiler(self) -> Result<StatusCode> {
        Ok(StatusCode(call!(clUnloadPlatformCompiler(self.as_ptr()))))
    }

    /// `clGetExtensionFunctionAddressForPlatform`
    ///
    /// Returns the address exactly as reported, which is null when the
    /// platform does not provide `func_name`.
    #[cfg(feature = "opencl_version_1_2")]
    pub unsafe fn get_extension_function_address(self, func_name: &CStr) -> Result<*mut c_void> {
        Ok(call!(clGetExtensionFunctionAddressForPlatform(self.as_ptr(), func_name.as_ptr())))
    }
}
