//! Context entry points, including every `clCreate*` call taking a context.

#[cfg(feature = "opencl_version_1_2")]
use std::ffi::CStr;
use crate::ffi::{self, c_char, c_void, cl_context_info, cl_context_properties, cl_mem_object_type,
    cl_uint, cl_uchar, cl_int, cl_image_format, size_t, CreateContextCallbackFn};
#[cfg(feature = "opencl_version_1_2")]
use crate::ffi::{cl_image_desc, BuildProgramCallbackFn};
#[cfg(feature = "opencl_version_2_0")]
use crate::ffi::{cl_queue_properties, cl_sampler_properties, cl_pipe_properties};
use crate::error::Result;
use crate::types::abs::{ComputeContext, ComputeDevice, CommandQueue, ComputeMemory,
    ComputeSampler, ComputeProgram, ComputeEvent};
use crate::types::enums::{AddressingMode, FilterMode};
use crate::types::flags::{DeviceType, MemFlags, CommandQueueProperties};
use crate::types::status::StatusCode;
use super::{bytes_mut, cl_bool, list, list_mut, opt_slice, out};
#[cfg(feature = "opencl_version_1_2")]
use super::opt_cstr;
#[cfg(feature = "opencl_version_2_1")]
use super::bytes;

impl ComputeContext {
    /// `clCreateContext`
    ///
    /// `properties`, when given, must already carry its terminating zero
    /// (see [`ContextProperties::to_raw`](crate::ContextProperties::to_raw)).
    pub unsafe fn create(properties: Option<&[cl_context_properties]>, devices: &[ComputeDevice],
            pfn_notify: Option<CreateContextCallbackFn>, user_data: *mut c_void)
            -> Result<(ComputeContext, StatusCode)> {
        let (num_devices, devices) = list(devices);
        let mut errcode = ffi::CL_SUCCESS;
        let context = call!(clCreateContext(opt_slice(properties), num_devices, devices,
            pfn_notify, user_data, &mut errcode));
        Ok((ComputeContext::from_raw(context), StatusCode(errcode)))
    }

    /// `clCreateContextFromType`
    pub unsafe fn create_from_type(properties: Option<&[cl_context_properties]>,
            device_type: DeviceType, pfn_notify: Option<CreateContextCallbackFn>,
            user_data: *mut c_void) -> Result<(ComputeContext, StatusCode)> {
        let mut errcode = ffi::CL_SUCCESS;
        let context = call!(clCreateContextFromType(opt_slice(properties), device_type.bits(),
            pfn_notify, user_data, &mut errcode));
        Ok((ComputeContext::from_raw(context), StatusCode(errcode)))
    }

    /// `clRetainContext`
    pub unsafe fn retain(self) -> Result<StatusCode> {
        Ok(StatusCode(call!(clRetainContext(self.as_ptr()))))
    }

    /// `clReleaseContext`
    pub unsafe fn release(self) -> Result<StatusCode> {
        Ok(StatusCode(call!(clReleaseContext(self.as_ptr()))))
    }

    /// `clGetContextInfo`
    pub unsafe fn get_info(self, param_name: cl_context_info, param_value: &mut [u8],
            param_value_size_ret: Option<&mut size_t>) -> Result<StatusCode> {
        let (size, value) = bytes_mut(param_value);
        Ok(StatusCode(call!(clGetContextInfo(self.as_ptr(), param_name, size, value,
            out(param_value_size_ret)))))
    }

    /// `clCreateCommandQueue`
    pub unsafe fn create_command_queue(self, device: ComputeDevice,
            properties: CommandQueueProperties) -> Result<(CommandQueue, StatusCode)> {
        let mut errcode = ffi::CL_SUCCESS;
        let queue = call!(clCreateCommandQueue(self.as_ptr(), device.as_ptr(), properties.bits(),
            &mut errcode));
        Ok((CommandQueue::from_raw(queue), StatusCode(errcode)))
    }

    /// `clCreateCommandQueueWithProperties`
    #[cfg(feature = "opencl_version_2_0")]
    pub unsafe fn create_command_queue_with_properties(self, device: ComputeDevice,
            properties: Option<&[cl_queue_properties]>) -> Result<(CommandQueue, StatusCode)> {
        let mut errcode = ffi::CL_SUCCESS;
        let queue = call!(clCreateCommandQueueWithProperties(self.as_ptr(), device.as_ptr(),
            opt_slice(properties), &mut errcode));
        Ok((CommandQueue::from_raw(queue), StatusCode(errcode)))
    }

    /// `clCreateBuffer`
    pub unsafe fn create_buffer(self, flags: MemFlags, size: size_t, host_ptr: *mut c_void)
            -> Result<(ComputeMemory, StatusCode)> {
        let mut errcode = ffi::CL_SUCCESS;
        let mem = call!(clCreateBuffer(self.as_ptr(), flags.bits(), size, host_ptr, &mut errcode));
        Ok((ComputeMemory::from_raw(mem), StatusCode(errcode)))
    }

    /// `clCreateImage`
    #[cfg(feature = "opencl_version_1_2")]
    pub unsafe fn create_image(self, flags: MemFlags, image_format: &cl_image_format,
            image_desc: &cl_image_desc, host_ptr: *mut c_void)
            -> Result<(ComputeMemory, StatusCode)> {
        let mut errcode = ffi::CL_SUCCESS;
        let mem = call!(clCreateImage(self.as_ptr(), flags.bits(), image_format, image_desc,
            host_ptr, &mut errcode));
        Ok((ComputeMemory::from_raw(mem), StatusCode(errcode)))
    }

    /// `clCreatePipe`
    #[cfg(feature = "opencl_version_2_0")]
    pub unsafe fn create_pipe(self, flags: MemFlags, pipe_packet_size: cl_uint,
            pipe_max_packets: cl_uint, properties: Option<&[cl_pipe_properties]>)
            -> Result<(ComputeMemory, StatusCode)> {
        let mut errcode = ffi::CL_SUCCESS;
        let mem = call!(clCreatePipe(self.as_ptr(), flags.bits(), pipe_packet_size,
            pipe_max_packets, opt_slice(properties), &mut errcode));
        Ok((ComputeMemory::from_raw(mem), StatusCode(errcode)))
    }

    /// `clGetSupportedImageFormats`
    pub unsafe fn get_supported_image_formats(self, flags: MemFlags,
            image_type: cl_mem_object_type, image_formats: &mut [cl_image_format],
            num_image_formats: Option<&mut cl_uint>) -> Result<StatusCode> {
        let (num_entries, image_formats) = list_mut(image_formats);
        Ok(StatusCode(call!(clGetSupportedImageFormats(self.as_ptr(), flags.bits(), image_type,
            num_entries, image_formats, out(num_image_formats)))))
    }

    /// `clCreateSampler`
    pub unsafe fn create_sampler(self, normalized_coords: bool, addressing_mode: AddressingMode,
            filter_mode: FilterMode) -> Result<(ComputeSampler, StatusCode)> {
        let mut errcode = ffi::CL_SUCCESS;
        let sampler = call!(clCreateSampler(self.as_ptr(), cl_bool(normalized_coords),
            addressing_mode as cl_uint, filter_mode as cl_uint, &mut errcode));
        Ok((ComputeSampler::from_raw(sampler), StatusCode(errcode)))
    }

    /// `clCreateSamplerWithProperties`
    #[cfg(feature = "opencl_version_2_0")]
    pub unsafe fn create_sampler_with_properties(self,
            sampler_properties: Option<&[cl_sampler_properties]>)
            -> Result<(ComputeSampler, StatusCode)> {
        let mut errcode = ffi::CL_SUCCESS;
        let sampler = call!(clCreateSamplerWithProperties(self.as_ptr(),
            opt_slice(sampler_properties), &mut errcode));
        Ok((ComputeSampler::from_raw(sampler), StatusCode(errcode)))
    }

    /// `clCreateProgramWithSource`
    ///
    /// `lengths` may be `None` when every string is NUL terminated. A zero
    /// entry marks a single NUL terminated string.
    pub unsafe fn create_program_with_source(self, strings: &[*const c_char],
            lengths: Option<&[size_t]>) -> Result<(ComputeProgram, StatusCode)> {
        let (count, strings) = list(strings);
        let mut errcode = ffi::CL_SUCCESS;
        let program = call!(clCreateProgramWithSource(self.as_ptr(), count, strings,
            opt_slice(lengths), &mut errcode));
        Ok((ComputeProgram::from_raw(program), StatusCode(errcode)))
    }

    /// `clCreateProgramWithBinary`
    ///
    /// `lengths`, `binaries` and `binary_status` (if given) are indexed like
    /// `devices`.
    pub unsafe fn create_program_with_binary(self, devices: &[ComputeDevice],
            lengths: &[size_t], binaries: &[*const cl_uchar],
            binary_status: Option<&mut [cl_int]>) -> Result<(ComputeProgram, StatusCode)> {
        let (num_devices, devices) = list(devices);
        let binary_status = match binary_status {
            Some(status) => list_mut(status).1,
            None => std::ptr::null_mut(),
        };
        let mut errcode = ffi::CL_SUCCESS;
        let program = call!(clCreateProgramWithBinary(self.as_ptr(), num_devices, devices,
            list(lengths).1, list(binaries).1, binary_status, &mut errcode));
        Ok((ComputeProgram::from_raw(program), StatusCode(errcode)))
    }

    /// `clCreateProgramWithBuiltInKernels`
    ///
    /// `kernel_names` is a semicolon separated list.
    #[cfg(feature = "opencl_version_1_2")]
    pub unsafe fn create_program_with_built_in_kernels(self, devices: &[ComputeDevice],
            kernel_names: &CStr) -> Result<(ComputeProgram, StatusCode)> {
        let (num_devices, devices) = list(devices);
        let mut errcode = ffi::CL_SUCCESS;
        let program = call!(clCreateProgramWithBuiltInKernels(self.as_ptr(), num_devices,
            devices, kernel_names.as_ptr(), &mut errcode));
        Ok((ComputeProgram::from_raw(program), StatusCode(errcode)))
    }

    /// `clCreateProgramWithIL`
    #[cfg(feature = "opencl_version_2_1")]
    pub unsafe fn create_program_with_il(self, il: &[u8])
            -> Result<(ComputeProgram, StatusCode)> {
        let (length, il) = bytes(il);
        let mut errcode = ffi::CL_SUCCESS;
        let program = call!(clCreateProgramWithIL(self.as_ptr(), il, length, &mut errcode));
        Ok((ComputeProgram::from_raw(program), StatusCode(errcode)))
    }

    /// `clLinkProgram`
    #[cfg(feature = "opencl_version_1_2")]
    pub unsafe fn link_program(self, devices: &[ComputeDevice], options: Option<&CStr>,
            input_programs: &[ComputeProgram], pfn_notify: Option<BuildProgramCallbackFn>,
            user_data: *mut c_void) -> Result<(ComputeProgram, StatusCode)> {
        let (num_devices, devices) = list(devices);
        let (num_input_programs, input_programs) = list(input_programs);
        let mut errcode = ffi::CL_SUCCESS;
        let program = call!(clLinkProgram(self.as_ptr(), num_devices, devices, opt_cstr(options),
            num_input_programs, input_programs, pfn_notify, user_data, &mut errcode));
        Ok((ComputeProgram::from_raw(program), StatusCode(errcode)))
    }

    /// `clCreateUserEvent`
    pub unsafe fn create_user_event(self) -> Result<(ComputeEvent, StatusCode)> {
        let mut errcode = ffi::CL_SUCCESS;
        let event = call!(clCreateUserEvent(self.as_ptr(), &mut errcode));
        Ok((ComputeEvent::from_raw(event), StatusCode(errcode)))
    }

    /// `clSVMAlloc`
    ///
    /// The native call reports no status. A null pointer means failure.
    #[cfg(feature = "opencl_version_2_0")]
    pub unsafe fn svm_alloc(self, flags: MemFlags, size: size_t, alignment: cl_uint)
            -> Result<*mut c_void> {
        Ok(call!(clSVMAlloc(self.as_ptr(), flags.bits(), size, alignment)))
    }

    /// `clSVMFree`
    #[cfg(feature = "opencl_version_2_0")]
    pub unsafe fn svm_free(self, svm_pointer: *mut c_void) -> Result<()> {
        call!(clSVMFree(self.as_ptr(), svm_pointer));
        Ok(())
    }
}
