//! Sampler entry points.

use crate::ffi::{cl_sampler_info, size_t};
use crate::error::Result;
use crate::types::abs::ComputeSampler;
use crate::types::status::StatusCode;
use super::{bytes_mut, out};

impl ComputeSampler {
    /// `clRetainSampler`
    pub unsafe fn retain(self) -> Result<StatusCode> {
        Ok(StatusCode(call!(clRetainSampler(self.as_ptr()))))
    }

    /// `clReleaseSampler`
    pub unsafe fn release(self) -> Result<StatusCode> {
        Ok(StatusCode(call!(clReleaseSampler(self.as_ptr()))))
    }

    /// `clGetSamplerInfo`
    pub unsafe fn get_info(self, param_name: cl_sampler_info, param_value: &mut [u8],
            param_value_size_ret: Option<&mut size_t>) -> Result<StatusCode> {
        let (size, value) = bytes_mut(param_value);
        Ok(StatusCode(call!(clGetSamplerInfo(self.as_ptr(), param_name, size, value,
            out(param_value_size_ret)))))
    }
}
