//! Result-returning wrappers around the forwarding methods.
//!
//! Every function here evaluates the native status and turns anything other
//! than `CL_SUCCESS` into an [`Error::Api`](crate::Error::Api) naming the
//! entry point that failed. Newly created objects come back as
//! [`Retained`] owners and are released when dropped.
//!
//! Handles passed in are assumed to be valid. Functions which hand host
//! memory to the runtime for longer than the call itself are `unsafe`.

use std::env;
use std::ffi::CString;
use std::mem;
use std::ptr;
use std::thread;
use std::time::Duration;
use enum_primitive::FromPrimitive;
use crate::ffi::{self, c_void, cl_int, cl_uint, size_t};
use crate::error::{ApiError, ApiWrapperError, ProgramBuildError, Result};
use crate::types::abs::{ComputePlatform, ComputeDevice, ComputeContext, CommandQueue,
    ComputeMemory, ComputeProgram, ComputeKernel, ComputeEvent, ComputeSampler};
use crate::types::context_properties::ContextProperties;
use crate::types::enums::{PlatformInfo, DeviceInfo, ContextInfo, CommandQueueInfo, MemInfo,
    SamplerInfo, ProgramInfo, ProgramBuildInfo, KernelInfo, EventInfo, ProfilingInfo,
    CommandExecutionStatus, AddressingMode, FilterMode};
use crate::types::flags::{DeviceType, MemFlags, CommandQueueProperties};
use crate::types::retained::Retained;
use crate::types::status::{Status, StatusCode};
use crate::util;
use crate::OclPrm;

/// Number of times `get_platform_ids` retries while the ICD reports
/// `CL_PLATFORM_NOT_FOUND_KHR`.
pub const PLATFORM_IDS_ATTEMPT_COUNT: u64 = 5;
/// Delay between platform list attempts.
pub const PLATFORM_IDS_ATTEMPT_TIMEOUT_MS: u64 = 2000;
/// Maximum number of devices returned by `get_device_ids` when no limit is
/// given.
pub const DEVICES_MAX: u32 = 64;

/// Environment variable selecting the default platform index.
pub const DEFAULT_PLATFORM_IDX_ENV_VAR: &str = "COMPUTE_CL_DEFAULT_PLATFORM_IDX";
/// Environment variable selecting the default device type.
pub const DEFAULT_DEVICE_TYPE_ENV_VAR: &str = "COMPUTE_CL_DEFAULT_DEVICE_TYPE";

//============================================================================
//============================================================================
//=========================== SUPPORT FUNCTIONS ==============================
//============================================================================
//============================================================================

/// Evaluates `status` and returns an `Err` with a failure message if it is
/// not `CL_SUCCESS`.
#[inline(always)]
fn eval_errcode<T, S>(status: StatusCode, result: T, fn_name: &'static str, fn_info: Option<S>)
        -> Result<T>
        where S: Into<String> {
    if status.is_success() {
        Ok(result)
    } else {
        Err(ApiError::new(status.raw(), fn_name, fn_info).into())
    }
}

/// Runs an info query twice: once for the result size, then to fill a
/// buffer of that size.
fn info_bytes<F>(fn_name: &'static str, mut query: F) -> Result<Vec<u8>>
        where F: FnMut(&mut [u8], Option<&mut size_t>) -> Result<StatusCode> {
    let mut result_size: size_t = 0;
    let status = query(&mut [], Some(&mut result_size))?;
    eval_errcode(status, (), fn_name, None::<String>)?;

    // If result size is zero, return an empty info result directly:
    if result_size == 0 {
        return Ok(vec![]);
    }

    let mut result = vec![0u8; result_size];
    let status = query(&mut result, None)?;
    eval_errcode(status, result, fn_name, None::<String>)
}

fn handles_from_bytes<H, F>(bytes: &[u8], from_value: F) -> Result<Vec<H>>
        where F: Fn(usize) -> H {
    Ok(util::bytes_to_vec::<usize>(bytes)?.into_iter().map(from_value).collect())
}

/// If the program pointed to by `program` has a build log of any length for
/// any of the devices listed in `device_ids`, the logs are collected and
/// returned as an error.
pub fn program_build_err(program: ComputeProgram, device_ids: &[ComputeDevice])
        -> std::result::Result<(), ProgramBuildError> {
    if device_ids.is_empty() {
        return Err(ProgramBuildError::DeviceListEmpty);
    }

    let mut logs = Vec::new();

    for &device_id in device_ids.iter() {
        match get_program_build_log(program, device_id) {
            Ok(log) => {
                if !log.is_empty() {
                    logs.push(log);
                }
            },
            Err(err) => return Err(ProgramBuildError::InfoResult(Box::new(err))),
        }
    }

    if logs.is_empty() {
        Ok(())
    } else {
        Err(ProgramBuildError::BuildLog(logs.join("\n\n")))
    }
}

//============================================================================
//============================= Platform API =================================
//============================================================================

/// Returns a list of available platforms.
pub fn get_platform_ids() -> Result<Vec<ComputePlatform>> {
    get_platform_ids_retrying(PLATFORM_IDS_ATTEMPT_COUNT,
        Duration::from_millis(PLATFORM_IDS_ATTEMPT_TIMEOUT_MS))
}

/// Returns a list of available platforms, retrying up to `attempts` times
/// (waiting `delay` in between) while the ICD loader reports
/// `CL_PLATFORM_NOT_FOUND_KHR`.
pub fn get_platform_ids_retrying(attempts: u64, delay: Duration)
        -> Result<Vec<ComputePlatform>> {
    let mut num_platforms: cl_uint = 0;

    // Get a count of available platforms:
    let mut status = unsafe { ComputePlatform::get_ids(&mut [], Some(&mut num_platforms))? };

    // Deal with ICD wake up problems when called from multiple threads at the
    // same time by adding a delay/retry loop:
    let mut iters_rmng = attempts;
    while status == Status::CL_PLATFORM_NOT_FOUND_KHR {
        if iters_rmng == 0 {
            return Err(ApiWrapperError::PlatformListUnavailable(
                retry_wait_secs(attempts, delay)).into());
        }

        log::warn!("Platform list unavailable (CL_PLATFORM_NOT_FOUND_KHR), retrying \
            ({} attempts remaining).", iters_rmng);
        thread::sleep(delay);

        status = unsafe { ComputePlatform::get_ids(&mut [], Some(&mut num_platforms))? };
        iters_rmng -= 1;
    }

    eval_errcode(status, (), "clGetPlatformIDs", None::<String>)?;

    // If no platforms are found, return an empty vec directly:
    if num_platforms == 0 {
        return Ok(vec![]);
    }

    let mut platforms = vec![ComputePlatform::ZERO; num_platforms as usize];
    let mut num_returned: cl_uint = 0;
    let status = unsafe { ComputePlatform::get_ids(&mut platforms, Some(&mut num_returned))? };
    eval_errcode(status, (), "clGetPlatformIDs", None::<String>)?;

    platforms.truncate(num_returned.min(num_platforms) as usize);
    Ok(platforms)
}

/// Total seconds spent waiting by `attempts` retries of `delay` each.
pub(crate) fn retry_wait_secs(attempts: u64, delay: Duration) -> u64 {
    let delay_ms = u64::try_from(delay.as_millis()).unwrap_or(u64::MAX);
    attempts.saturating_mul(delay_ms) / 1000
}

/// Returns platform information of the requested type as raw bytes.
pub fn get_platform_info(platform: ComputePlatform, request: PlatformInfo) -> Result<Vec<u8>> {
    info_bytes("clGetPlatformInfo", |value, size_ret| unsafe {
        platform.get_info(request as cl_uint, value, size_ret)
    })
}

/// Returns a string valued platform property (name, vendor, version, ...).
pub fn get_platform_info_string(platform: ComputePlatform, request: PlatformInfo)
        -> Result<String> {
    Ok(util::bytes_into_string(get_platform_info(platform, request)?)?)
}

//============================================================================
//============================= Device APIs  =================================
//============================================================================

/// Returns a list of available devices for a particular platform.
///
/// `device_types` defaults to [`default_device_type`], `devices_max` to
/// [`DEVICES_MAX`].
pub fn get_device_ids(platform: ComputePlatform, device_types: Option<DeviceType>,
        devices_max: Option<u32>) -> Result<Vec<ComputeDevice>> {
    let device_types = match device_types {
        Some(dt) => dt,
        None => default_device_type()?,
    };

    let devices_max = match devices_max {
        Some(0) => return Err(ApiWrapperError::GetDeviceIdsDevicesMaxZero.into()),
        Some(d) => d,
        None => DEVICES_MAX,
    };

    let mut device_ids = vec![ComputeDevice::ZERO; devices_max as usize];
    let mut devices_available: cl_uint = 0;

    let status = unsafe {
        platform.get_device_ids(device_types, &mut device_ids, Some(&mut devices_available))?
    };
    eval_errcode(status, (), "clGetDeviceIDs", None::<String>)?;

    // Trim vec len:
    device_ids.truncate(devices_available.min(devices_max) as usize);
    Ok(device_ids)
}

/// Returns information about a device as raw bytes.
pub fn get_device_info(device: ComputeDevice, request: DeviceInfo) -> Result<Vec<u8>> {
    info_bytes("clGetDeviceInfo", |value, size_ret| unsafe {
        device.get_info(request as cl_uint, value, size_ret)
    })
}

/// Returns a string valued device property.
pub fn get_device_info_string(device: ComputeDevice, request: DeviceInfo) -> Result<String> {
    Ok(util::bytes_into_string(get_device_info(device, request)?)?)
}

//============================================================================
//============================= Context APIs  ================================
//============================================================================

/// Creates a new context associated with `device_ids`.
pub fn create_context(properties: Option<&ContextProperties>, device_ids: &[ComputeDevice])
        -> Result<Retained<ComputeContext>> {
    if device_ids.is_empty() {
        return Err(ApiWrapperError::CreateContextNoDevicesSpecified.into());
    }

    let properties = properties.map(|p| p.to_raw());

    let (context, status) = unsafe {
        ComputeContext::create(properties.as_deref(), device_ids, None, ptr::null_mut())?
    };
    eval_errcode(status, (), "clCreateContext", None::<String>)?;

    Ok(unsafe { Retained::from_created(context) })
}

/// Returns context information as raw bytes.
pub fn get_context_info(context: ComputeContext, request: ContextInfo) -> Result<Vec<u8>> {
    info_bytes("clGetContextInfo", |value, size_ret| unsafe {
        context.get_info(request as cl_uint, value, size_ret)
    })
}

/// Returns the devices associated with `context`.
pub fn get_context_devices(context: ComputeContext) -> Result<Vec<ComputeDevice>> {
    let bytes = get_context_info(context, ContextInfo::Devices)?;
    handles_from_bytes(&bytes, ComputeDevice::from_value)
}

/// Returns the properties `context` was created with.
pub fn get_context_properties(context: ComputeContext) -> Result<ContextProperties> {
    let bytes = get_context_info(context, ContextInfo::Properties)?;
    ContextProperties::from_raw(&util::bytes_to_vec::<isize>(&bytes)?)
}

//============================================================================
//========================== Command Queue APIs ==============================
//============================================================================

/// Creates a new command queue for `device`.
pub fn create_command_queue(context: ComputeContext, device: ComputeDevice,
        properties: Option<CommandQueueProperties>) -> Result<Retained<CommandQueue>> {
    let (queue, status) = unsafe {
        context.create_command_queue(device, properties.unwrap_or_default())?
    };
    eval_errcode(status, (), "clCreateCommandQueue", None::<String>)?;
    Ok(unsafe { Retained::from_created(queue) })
}

/// Returns command queue information as raw bytes.
pub fn get_command_queue_info(queue: CommandQueue, request: CommandQueueInfo)
        -> Result<Vec<u8>> {
    info_bytes("clGetCommandQueueInfo", |value, size_ret| unsafe {
        queue.get_info(request as cl_uint, value, size_ret)
    })
}

/// Issues all previously queued commands to the device.
pub fn flush(queue: CommandQueue) -> Result<()> {
    let status = unsafe { queue.flush()? };
    eval_errcode(status, (), "clFlush", None::<String>)
}

/// Blocks until all previously queued commands have completed.
pub fn finish(queue: CommandQueue) -> Result<()> {
    let status = unsafe { queue.finish()? };
    eval_errcode(status, (), "clFinish", None::<String>)
}

//============================================================================
//========================== Memory Object APIs ==============================
//============================================================================

/// Returns a new buffer able to hold `len` elements of `T`, initialized from
/// `data` if the flags call for it.
///
/// # Safety
///
/// With `MemFlags::USE_HOST_PTR`, `data` must outlive the buffer.
pub unsafe fn create_buffer<T: OclPrm>(context: ComputeContext, flags: MemFlags, len: usize,
        data: Option<&[T]>) -> Result<Retained<ComputeMemory>> {
    let host_ptr = match data {
        Some(d) => {
            if d.len() != len {
                return Err(ApiWrapperError::CreateBufferDataLengthMismatch(len, d.len()).into());
            }
            d.as_ptr() as *mut c_void
        },
        None => ptr::null_mut(),
    };

    let (buffer, status) = context.create_buffer(flags, len * mem::size_of::<T>(), host_ptr)?;
    eval_errcode(status, (), "clCreateBuffer", None::<String>)?;
    Ok(Retained::from_created(buffer))
}

/// Returns a sub-buffer covering `len` elements of `T` starting at element
/// `origin` of `buffer`.
pub fn create_sub_buffer<T: OclPrm>(buffer: ComputeMemory, flags: MemFlags, origin: usize,
        len: usize) -> Result<Retained<ComputeMemory>> {
    let region = ffi::cl_buffer_region {
        origin: origin * mem::size_of::<T>(),
        size: len * mem::size_of::<T>(),
    };

    let (sub_buffer, status) = unsafe {
        buffer.create_sub_buffer(flags, ffi::CL_BUFFER_CREATE_TYPE_REGION, &region)?
    };
    eval_errcode(status, (), "clCreateSubBuffer", None::<String>)?;
    Ok(unsafe { Retained::from_created(sub_buffer) })
}

/// Returns memory object information as raw bytes.
pub fn get_mem_object_info(obj: ComputeMemory, request: MemInfo) -> Result<Vec<u8>> {
    info_bytes("clGetMemObjectInfo", |value, size_ret| unsafe {
        obj.get_info(request as cl_uint, value, size_ret)
    })
}

//============================================================================
//=========================== Sampler APIs ===================================
//============================================================================

/// Returns a new sampler.
pub fn create_sampler(context: ComputeContext, normalize_coords: bool,
        addressing_mode: AddressingMode, filter_mode: FilterMode)
        -> Result<Retained<ComputeSampler>> {
    let (sampler, status) = unsafe {
        context.create_sampler(normalize_coords, addressing_mode, filter_mode)?
    };
    eval_errcode(status, (), "clCreateSampler", None::<String>)?;
    Ok(unsafe { Retained::from_created(sampler) })
}

/// Returns sampler information as raw bytes.
pub fn get_sampler_info(sampler: ComputeSampler, request: SamplerInfo) -> Result<Vec<u8>> {
    info_bytes("clGetSamplerInfo", |value, size_ret| unsafe {
        sampler.get_info(request as cl_uint, value, size_ret)
    })
}

//============================================================================
//=========================== Program Object APIs ============================
//============================================================================

/// Creates a new program from source strings.
pub fn create_program_with_source(context: ComputeContext, src_strings: &[CString])
        -> Result<Retained<ComputeProgram>> {
    let ks_lens: Vec<size_t> = src_strings.iter().map(|cs| cs.as_bytes().len()).collect();
    let kern_string_ptrs: Vec<*const ffi::c_char> = src_strings.iter()
        .map(|cs| cs.as_ptr()).collect();

    let (program, status) = unsafe {
        context.create_program_with_source(&kern_string_ptrs, Some(&ks_lens[..]))?
    };
    eval_errcode(status, (), "clCreateProgramWithSource", None::<String>)?;
    Ok(unsafe { Retained::from_created(program) })
}

/// Builds `program` for `devices` (every associated device if `None` or empty).
///
/// On `CL_BUILD_PROGRAM_FAILURE` the per-device build logs are collected and
/// returned as a [`ProgramBuildError::BuildLog`].
pub fn build_program(program: ComputeProgram, devices: Option<&[ComputeDevice]>,
        options: &CString) -> Result<()> {
    let status = unsafe {
        program.build(devices.unwrap_or(&[]), Some(options.as_c_str()), None, ptr::null_mut())?
    };

    if status == Status::CL_BUILD_PROGRAM_FAILURE {
        match devices {
            Some(ds) if !ds.is_empty() => program_build_err(program, ds)?,
            _ => program_build_err(program, &get_program_devices(program)?)?,
        }
    }

    eval_errcode(status, (), "clBuildProgram", None::<String>)
}

/// Returns program information as raw bytes.
pub fn get_program_info(program: ComputeProgram, request: ProgramInfo) -> Result<Vec<u8>> {
    info_bytes("clGetProgramInfo", |value, size_ret| unsafe {
        program.get_info(request as cl_uint, value, size_ret)
    })
}

/// Returns the devices `program` is associated with.
pub fn get_program_devices(program: ComputeProgram) -> Result<Vec<ComputeDevice>> {
    let bytes = get_program_info(program, ProgramInfo::Devices)?;
    handles_from_bytes(&bytes, ComputeDevice::from_value)
}

/// Returns program build information for `device` as raw bytes.
pub fn get_program_build_info(program: ComputeProgram, device: ComputeDevice,
        request: ProgramBuildInfo) -> Result<Vec<u8>> {
    info_bytes("clGetProgramBuildInfo", |value, size_ret| unsafe {
        program.get_build_info(device, request as cl_uint, value, size_ret)
    })
}

/// Returns the build log of `program` for `device`.
pub fn get_program_build_log(program: ComputeProgram, device: ComputeDevice) -> Result<String> {
    let bytes = get_program_build_info(program, device, ProgramBuildInfo::BuildLog)?;
    Ok(util::bytes_into_string(bytes)?)
}

/// Creates, builds, and returns a new program from `src_strings`.
pub fn create_build_program(context: ComputeContext, src_strings: &[CString],
        devices: Option<&[ComputeDevice]>, options: &CString) -> Result<Retained<ComputeProgram>> {
    let program = create_program_with_source(context, src_strings)?;
    build_program(*program, devices, options)?;
    Ok(program)
}

//============================================================================
//========================== Kernel Object APIs ==============================
//============================================================================

/// A kernel argument.
#[derive(Clone, Copy, Debug)]
pub enum KernelArg<'a, T: OclPrm> {
    /// A memory object.
    Mem(ComputeMemory),
    /// A null memory object.
    MemNull,
    /// A sampler.
    Sampler(ComputeSampler),
    /// A single scalar value.
    Scalar(T),
    /// A vector value stored as a slice.
    Vector(&'a [T]),
    /// Local memory for `len` elements of `T`.
    Local(usize),
}

/// Returns a new kernel named `name` from `program`.
pub fn create_kernel<S: AsRef<str>>(program: ComputeProgram, name: S)
        -> Result<Retained<ComputeKernel>> {
    let name = CString::new(name.as_ref().as_bytes())?;
    let (kernel, status) = unsafe { program.create_kernel(&name)? };
    eval_errcode(status, (), "clCreateKernel", name.to_str().ok())?;
    Ok(unsafe { Retained::from_created(kernel) })
}

/// Sets the argument at `arg_index`.
pub fn set_kernel_arg<T: OclPrm>(kernel: ComputeKernel, arg_index: u32, arg: KernelArg<T>)
        -> Result<()> {
    let mem_null: ffi::cl_mem = ptr::null_mut();
    let mem_ptr;
    let sampler;
    let scalar;

    let (arg_size, arg_value): (size_t, *const c_void) = match arg {
        KernelArg::Mem(m) => {
            mem_ptr = m.as_ptr();
            (mem::size_of::<ffi::cl_mem>(), &mem_ptr as *const ffi::cl_mem as *const c_void)
        },
        KernelArg::MemNull => {
            (mem::size_of::<ffi::cl_mem>(), &mem_null as *const ffi::cl_mem as *const c_void)
        },
        KernelArg::Sampler(s) => {
            sampler = s.as_ptr();
            (mem::size_of::<ffi::cl_sampler>(),
                &sampler as *const ffi::cl_sampler as *const c_void)
        },
        KernelArg::Scalar(s) => {
            scalar = s;
            (mem::size_of::<T>(), &scalar as *const T as *const c_void)
        },
        KernelArg::Vector(v) => (mem::size_of_val(v), v.as_ptr() as *const c_void),
        KernelArg::Local(len) => (len * mem::size_of::<T>(), ptr::null()),
    };

    let status = unsafe { kernel.set_arg(arg_index, arg_size, arg_value)? };
    eval_errcode(status, (), "clSetKernelArg", Some(format!("arg index: {}", arg_index)))
}

/// Returns kernel information as raw bytes.
pub fn get_kernel_info(kernel: ComputeKernel, request: KernelInfo) -> Result<Vec<u8>> {
    info_bytes("clGetKernelInfo", |value, size_ret| unsafe {
        kernel.get_info(request as cl_uint, value, size_ret)
    })
}

/// Returns the function name of a kernel.
pub fn get_kernel_name(kernel: ComputeKernel) -> Result<String> {
    Ok(util::bytes_into_string(get_kernel_info(kernel, KernelInfo::FunctionName)?)?)
}

//============================================================================
//========================== Event Object APIs ===============================
//============================================================================

/// Blocks until every event in `events` has completed.
///
/// An empty list returns immediately.
pub fn wait_for_events(events: &[ComputeEvent]) -> Result<()> {
    if events.is_empty() {
        return Ok(());
    }
    let status = unsafe { ComputeEvent::wait_for_events(events)? };
    eval_errcode(status, (), "clWaitForEvents", None::<String>)
}

/// Returns event information as raw bytes.
pub fn get_event_info(event: ComputeEvent, request: EventInfo) -> Result<Vec<u8>> {
    info_bytes("clGetEventInfo", |value, size_ret| unsafe {
        event.get_info(request as cl_uint, value, size_ret)
    })
}

/// Returns the execution status of `event`.
///
/// A negative status (the command terminated abnormally) is returned as an
/// `Error::Api` carrying that status. A positive status OpenCL does not
/// define is an `ApiWrapperError::UnknownExecutionStatus`.
pub fn event_status(event: ComputeEvent) -> Result<CommandExecutionStatus> {
    let mut status_bytes = [0u8; mem::size_of::<cl_int>()];
    let status = unsafe {
        event.get_info(ffi::CL_EVENT_COMMAND_EXECUTION_STATUS, &mut status_bytes, None)?
    };
    eval_errcode(status, (), "clGetEventInfo", None::<String>)?;

    let status_int: cl_int = util::bytes_to(&status_bytes)?;
    if status_int < 0 {
        return Err(ApiError::new(status_int, "clGetEventInfo",
            Some("command terminated abnormally")).into());
    }
    CommandExecutionStatus::from_i32(status_int)
        .ok_or_else(|| ApiWrapperError::UnknownExecutionStatus(status_int).into())
}

/// Returns true if `event` has completed.
pub fn event_is_complete(event: ComputeEvent) -> Result<bool> {
    Ok(event_status(event)? == CommandExecutionStatus::Complete)
}

/// Returns a new user event.
pub fn create_user_event(context: ComputeContext) -> Result<Retained<ComputeEvent>> {
    let (event, status) = unsafe { context.create_user_event()? };
    eval_errcode(status, (), "clCreateUserEvent", None::<String>)?;
    Ok(unsafe { Retained::from_created(event) })
}

/// Sets the execution status of a user event.
pub fn set_user_event_status(event: ComputeEvent, execution_status: CommandExecutionStatus)
        -> Result<()> {
    let status = unsafe { event.set_user_event_status(execution_status as cl_int)? };
    eval_errcode(status, (), "clSetUserEventStatus", None::<String>)
}

/// Returns profiling information for `event` as raw bytes.
pub fn get_event_profiling_info(event: ComputeEvent, request: ProfilingInfo)
        -> Result<Vec<u8>> {
    info_bytes("clGetEventProfilingInfo", |value, size_ret| unsafe {
        event.get_profiling_info(request as cl_uint, value, size_ret)
    })
}

//============================================================================
//======================= Enqueued Commands APIs =============================
//============================================================================

/// Enqueues a read from `buffer` into `data`, starting at element `offset`.
///
/// # Safety
///
/// When `block` is false, `data` must stay valid and untouched until the
/// command completes.
pub unsafe fn enqueue_read_buffer<T: OclPrm>(queue: CommandQueue, buffer: ComputeMemory,
        block: bool, offset: usize, data: &mut [T], wait_for: &[ComputeEvent],
        new_event: Option<&mut ComputeEvent>) -> Result<()> {
    let status = queue.enqueue_read_buffer(buffer, block, offset * mem::size_of::<T>(), data,
        wait_for, new_event)?;
    eval_errcode(status, (), "clEnqueueReadBuffer", None::<String>)
}

/// Enqueues a write of `data` into `buffer`, starting at element `offset`.
///
/// # Safety
///
/// When `block` is false, `data` must stay valid until the command completes.
pub unsafe fn enqueue_write_buffer<T: OclPrm>(queue: CommandQueue, buffer: ComputeMemory,
        block: bool, offset: usize, data: &[T], wait_for: &[ComputeEvent],
        new_event: Option<&mut ComputeEvent>) -> Result<()> {
    let status = queue.enqueue_write_buffer(buffer, block, offset * mem::size_of::<T>(), data,
        wait_for, new_event)?;
    eval_errcode(status, (), "clEnqueueWriteBuffer", None::<String>)
}

/// Enqueues a kernel over `work_dims` dimensions.
///
/// # Safety
///
/// The kernel's arguments must describe memory the kernel may access for
/// the duration of the command.
pub unsafe fn enqueue_kernel(queue: CommandQueue, kernel: ComputeKernel, work_dims: u32,
        global_work_offset: Option<[usize; 3]>, global_work_dims: &[usize; 3],
        local_work_dims: Option<[usize; 3]>, wait_for: &[ComputeEvent],
        new_event: Option<&mut ComputeEvent>) -> Result<()> {
    let status = queue.enqueue_nd_range_kernel(kernel, work_dims,
        global_work_offset.as_ref().map(|o| &o[..]), &global_work_dims[..],
        local_work_dims.as_ref().map(|l| &l[..]), wait_for, new_event)?;

    if status.is_success() {
        Ok(())
    } else {
        let name = get_kernel_name(kernel).ok();
        eval_errcode(status, (), "clEnqueueNDRangeKernel", name)
    }
}

//============================================================================
//============================ Configuration =================================
//============================================================================

/// Returns the default platform index set by the
/// `COMPUTE_CL_DEFAULT_PLATFORM_IDX` environment variable, or zero.
pub fn default_platform_idx() -> usize {
    match env::var(DEFAULT_PLATFORM_IDX_ENV_VAR) {
        Ok(s) => s.trim().parse::<usize>().unwrap_or(0),
        Err(_) => 0,
    }
}

/// Returns the default or first platform.
pub fn default_platform() -> Result<ComputePlatform> {
    let platform_list = get_platform_ids()?;

    if platform_list.is_empty() {
        Err(ApiWrapperError::NoPlatforms.into())
    } else {
        let default_platform_idx = default_platform_idx();
        match platform_list.get(default_platform_idx) {
            Some(&platform) => Ok(platform),
            None => Err(ApiWrapperError::PlatformIndexOutOfRange(default_platform_idx,
                platform_list.len()).into()),
        }
    }
}

/// Returns the default device type as specified by the
/// `COMPUTE_CL_DEFAULT_DEVICE_TYPE` environment variable or else
/// `DeviceType::ALL`.
pub fn default_device_type() -> Result<DeviceType> {
    match env::var(DEFAULT_DEVICE_TYPE_ENV_VAR) {
        Ok(ref s) => DeviceType::from_env_name(s)
            .ok_or_else(|| ApiWrapperError::InvalidDefaultDeviceType(s.to_owned()).into()),
        Err(_) => Ok(DeviceType::ALL),
    }
}
