//! Device entry points.

use crate::ffi::{cl_device_info, size_t};
#[cfg(feature = "opencl_version_1_2")]
use crate::ffi::{cl_device_partition_property, cl_uint};
use crate::error::Result;
use crate::types::abs::ComputeDevice;
use crate::types::status::StatusCode;
use super::{bytes_mut, out};
#[cfg(feature = "opencl_version_1_2")]
use super::{list_mut, opt_slice};

impl ComputeDevice {
    /// `clGetDeviceInfo`
    pub unsafe fn get_info(self, param_name: cl_device_info, param_value: &mut [u8],
            param_value_size_ret: Option<&mut size_t>) -> Result<StatusCode> {
        let (size, value) = bytes_mut(param_value);
        Ok(StatusCode(call!(clGetDeviceInfo(self.as_ptr(), param_name, size, value,
            out(param_value_size_ret)))))
    }

    /// `clCreateSubDevices`
    ///
    /// `properties` must already carry its terminating zero.
    #[cfg(feature = "opencl_version_1_2")]
    pub unsafe fn create_sub_devices(self, properties: Option<&[cl_device_partition_property]>,
            out_devices: &mut [ComputeDevice], num_devices_ret: Option<&mut cl_uint>)
            -> Result<StatusCode> {
        let (num_devices, out_devices) = list_mut(out_devices);
        Ok(StatusCode(call!(clCreateSubDevices(self.as_ptr(), opt_slice(properties), num_devices,
            out_devices, out(num_devices_ret)))))
    }

    /// `clRetainDevice`
    #[cfg(feature = "opencl_version_1_2")]
    pub unsafe fn retain(self) -> Result<StatusCode> {
        Ok(StatusCode(call!(clRetainDevice(self.as_ptr()))))
    }

    /// `clReleaseDevice`
    #[cfg(feature = "opencl_version_1_2")]
    pub unsafe fn release(self) -> Result<StatusCode> {
        Ok(StatusCode(call!(clReleaseDevice(self.as_ptr()))))
    }
}
