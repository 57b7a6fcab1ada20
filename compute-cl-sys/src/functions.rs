//! Entry-point signatures and the runtime-resolved function table.
//!
//! Each entry is declared once as `clName / clName_fn (args) -> ret;`. The
//! `entry_points!` macro turns the list into:
//!
//! * a `clName_fn` function pointer type per entry point,
//! * the `ClFunctions` table with one `Option<clName_fn>` field per entry
//!   point (field name == native symbol name),
//! * `ClFunctions::load`, which resolves every symbol present in a library.

use libloading::Library;

use crate::*;

macro_rules! entry_points {
    ($(
        $(#[$attr:meta])*
        $name:ident / $fn_ty:ident ( $($arg:ident: $arg_ty:ty),* $(,)? ) -> $ret:ty;
    )*) => {
        $(
            $(#[$attr])*
            pub type $fn_ty = unsafe extern "system" fn($($arg: $arg_ty),*) -> $ret;
        )*

        /// A table of OpenCL entry points.
        ///
        /// A `None` field means the symbol was absent from the library the
        /// table was loaded from (or was left unset by whoever built it).
        #[derive(Clone, Copy, Default)]
        pub struct ClFunctions {
            $(
                $(#[$attr])*
                pub $name: Option<$fn_ty>,
            )*
        }

        /// Names of every entry point in [`ClFunctions`], in declaration order.
        pub const ENTRY_POINTS: &[&str] = &[
            $( $(#[$attr])* stringify!($name), )*
        ];

        impl ClFunctions {
            /// Resolves every entry point exported by `lib`.
            ///
            /// Missing symbols are left as `None`.
            ///
            /// # Safety
            ///
            /// `lib` must be an OpenCL implementation (or ICD loader) whose
            /// exports match the C signatures declared here, and it must
            /// outlive every use of the returned table.
            pub unsafe fn load(lib: &Library) -> ClFunctions {
                let mut fns = ClFunctions::default();
                $(
                    $(#[$attr])*
                    {
                        fns.$name = symbol::<$fn_ty>(lib, concat!(stringify!($name), "\0"));
                    }
                )*
                fns
            }

            /// Returns `true` if the entry point named `name` is present.
            pub fn is_loaded(&self, name: &str) -> bool {
                match name {
                    $( $(#[$attr])* stringify!($name) => self.$name.is_some(), )*
                    _ => false,
                }
            }

            /// Returns the number of entry points present.
            pub fn loaded_count(&self) -> usize {
                ENTRY_POINTS.iter().filter(|name| self.is_loaded(name)).count()
            }
        }
    };
}

unsafe fn symbol<T: Copy>(lib: &Library, name: &'static str) -> Option<T> {
    match lib.get::<T>(name.as_bytes()) {
        Ok(sym) => Some(*sym),
        Err(err) => {
            log::debug!("OpenCL entry point '{}' unavailable: {}",
                name.trim_end_matches('\0'), err);
            None
        },
    }
}

impl std::fmt::Debug for ClFunctions {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        f.debug_struct("ClFunctions")
            .field("loaded", &self.loaded_count())
            .field("declared", &ENTRY_POINTS.len())
            .finish()
    }
}

entry_points! {
    //========================== Platform API ===========================
    clGetPlatformIDs / clGetPlatformIDs_fn(num_entries: cl_uint, platforms: *mut cl_platform_id,
        num_platforms: *mut cl_uint) -> cl_int;
    clGetPlatformInfo / clGetPlatformInfo_fn(platform: cl_platform_id,
        param_name: cl_platform_info, param_value_size: size_t, param_value: *mut c_void,
        param_value_size_ret: *mut size_t) -> cl_int;
    #[cfg(feature = "opencl_version_1_2")]
    clUnloadPlatformCompiler / clUnloadPlatformCompiler_fn(platform: cl_platform_id) -> cl_int;
    #[cfg(feature = "opencl_version_1_2")]
    clGetExtensionFunctionAddressForPlatform / clGetExtensionFunctionAddressForPlatform_fn(
        platform: cl_platform_id, func_name: *const c_char) -> *mut c_void;

    //=========================== Device APIs ===========================
    clGetDeviceIDs / clGetDeviceIDs_fn(platform: cl_platform_id, device_type: cl_device_type,
        num_entries: cl_uint, devices: *mut cl_device_id, num_devices: *mut cl_uint) -> cl_int;
    clGetDeviceInfo / clGetDeviceInfo_fn(device: cl_device_id, param_name: cl_device_info,
        param_value_size: size_t, param_value: *mut c_void,
        param_value_size_ret: *mut size_t) -> cl_int;
    #[cfg(feature = "opencl_version_1_2")]
    clCreateSubDevices / clCreateSubDevices_fn(in_device: cl_device_id,
        properties: *const cl_device_partition_property, num_devices: cl_uint,
        out_devices: *mut cl_device_id, num_devices_ret: *mut cl_uint) -> cl_int;
    #[cfg(feature = "opencl_version_1_2")]
    clRetainDevice / clRetainDevice_fn(device: cl_device_id) -> cl_int;
    #[cfg(feature = "opencl_version_1_2")]
    clReleaseDevice / clReleaseDevice_fn(device: cl_device_id) -> cl_int;

    //=========================== Context APIs ==========================
    clCreateContext / clCreateContext_fn(properties: *const cl_context_properties,
        num_devices: cl_uint, devices: *const cl_device_id,
        pfn_notify: Option<CreateContextCallbackFn>, user_data: *mut c_void,
        errcode_ret: *mut cl_int) -> cl_context;
    clCreateContextFromType / clCreateContextFromType_fn(
        properties: *const cl_context_properties, device_type: cl_device_type,
        pfn_notify: Option<CreateContextCallbackFn>, user_data: *mut c_void,
        errcode_ret: *mut cl_int) -> cl_context;
    clRetainContext / clRetainContext_fn(context: cl_context) -> cl_int;
    clReleaseContext / clReleaseContext_fn(context: cl_context) -> cl_int;
    clGetContextInfo / clGetContextInfo_fn(context: cl_context, param_name: cl_context_info,
        param_value_size: size_t, param_value: *mut c_void,
        param_value_size_ret: *mut size_t) -> cl_int;

    //======================== Command Queue APIs =======================
    clCreateCommandQueue / clCreateCommandQueue_fn(context: cl_context, device: cl_device_id,
        properties: cl_command_queue_properties, errcode_ret: *mut cl_int) -> cl_command_queue;
    #[cfg(feature = "opencl_version_2_0")]
    clCreateCommandQueueWithProperties / clCreateCommandQueueWithProperties_fn(
        context: cl_context, device: cl_device_id, properties: *const cl_queue_properties,
        errcode_ret: *mut cl_int) -> cl_command_queue;
    clRetainCommandQueue / clRetainCommandQueue_fn(command_queue: cl_command_queue) -> cl_int;
    clReleaseCommandQueue / clReleaseCommandQueue_fn(command_queue: cl_command_queue) -> cl_int;
    clGetCommandQueueInfo / clGetCommandQueueInfo_fn(command_queue: cl_command_queue,
        param_name: cl_command_queue_info, param_value_size: size_t, param_value: *mut c_void,
        param_value_size_ret: *mut size_t) -> cl_int;

    //========================== Memory Object APIs =====================
    clCreateBuffer / clCreateBuffer_fn(context: cl_context, flags: cl_mem_flags, size: size_t,
        host_ptr: *mut c_void, errcode_ret: *mut cl_int) -> cl_mem;
    clCreateSubBuffer / clCreateSubBuffer_fn(buffer: cl_mem, flags: cl_mem_flags,
        buffer_create_type: cl_buffer_create_type, buffer_create_info: *const c_void,
        errcode_ret: *mut cl_int) -> cl_mem;
    #[cfg(feature = "opencl_version_1_2")]
    clCreateImage / clCreateImage_fn(context: cl_context, flags: cl_mem_flags,
        image_format: *const cl_image_format, image_desc: *const cl_image_desc,
        host_ptr: *mut c_void, errcode_ret: *mut cl_int) -> cl_mem;
    #[cfg(feature = "opencl_version_2_0")]
    clCreatePipe / clCreatePipe_fn(context: cl_context, flags: cl_mem_flags,
        pipe_packet_size: cl_uint, pipe_max_packets: cl_uint,
        properties: *const cl_pipe_properties, errcode_ret: *mut cl_int) -> cl_mem;
    clRetainMemObject / clRetainMemObject_fn(memobj: cl_mem) -> cl_int;
    clReleaseMemObject / clReleaseMemObject_fn(memobj: cl_mem) -> cl_int;
    clGetSupportedImageFormats / clGetSupportedImageFormats_fn(context: cl_context,
        flags: cl_mem_flags, image_type: cl_mem_object_type, num_entries: cl_uint,
        image_formats: *mut cl_image_format, num_image_formats: *mut cl_uint) -> cl_int;
    clGetMemObjectInfo / clGetMemObjectInfo_fn(memobj: cl_mem, param_name: cl_mem_info,
        param_value_size: size_t, param_value: *mut c_void,
        param_value_size_ret: *mut size_t) -> cl_int;
    clGetImageInfo / clGetImageInfo_fn(image: cl_mem, param_name: cl_image_info,
        param_value_size: size_t, param_value: *mut c_void,
        param_value_size_ret: *mut size_t) -> cl_int;
    #[cfg(feature = "opencl_version_2_0")]
    clGetPipeInfo / clGetPipeInfo_fn(pipe: cl_mem, param_name: cl_pipe_info,
        param_value_size: size_t, param_value: *mut c_void,
        param_value_size_ret: *mut size_t) -> cl_int;
    clSetMemObjectDestructorCallback / clSetMemObjectDestructorCallback_fn(memobj: cl_mem,
        pfn_notify: Option<MemObjectDestructorCallbackFn>, user_data: *mut c_void) -> cl_int;

    //======================== Shared Virtual Memory ====================
    #[cfg(feature = "opencl_version_2_0")]
    clSVMAlloc / clSVMAlloc_fn(context: cl_context, flags: cl_svm_mem_flags, size: size_t,
        alignment: cl_uint) -> *mut c_void;
    #[cfg(feature = "opencl_version_2_0")]
    clSVMFree / clSVMFree_fn(context: cl_context, svm_pointer: *mut c_void) -> ();

    //============================ Sampler APIs =========================
    clCreateSampler / clCreateSampler_fn(context: cl_context, normalized_coords: cl_bool,
        addressing_mode: cl_addressing_mode, filter_mode: cl_filter_mode,
        errcode_ret: *mut cl_int) -> cl_sampler;
    #[cfg(feature = "opencl_version_2_0")]
    clCreateSamplerWithProperties / clCreateSamplerWithProperties_fn(context: cl_context,
        sampler_properties: *const cl_sampler_properties,
        errcode_ret: *mut cl_int) -> cl_sampler;
    clRetainSampler / clRetainSampler_fn(sampler: cl_sampler) -> cl_int;
    clReleaseSampler / clReleaseSampler_fn(sampler: cl_sampler) -> cl_int;
    clGetSamplerInfo / clGetSamplerInfo_fn(sampler: cl_sampler, param_name: cl_sampler_info,
        param_value_size: size_t, param_value: *mut c_void,
        param_value_size_ret: *mut size_t) -> cl_int;

    //======================== Program Object APIs ======================
    clCreateProgramWithSource / clCreateProgramWithSource_fn(context: cl_context,
        count: cl_uint, strings: *const *const c_char, lengths: *const size_t,
        errcode_ret: *mut cl_int) -> cl_program;
    clCreateProgramWithBinary / clCreateProgramWithBinary_fn(context: cl_context,
        num_devices: cl_uint, device_list: *const cl_device_id, lengths: *const size_t,
        binaries: *const *const cl_uchar, binary_status: *mut cl_int,
        errcode_ret: *mut cl_int) -> cl_program;
    #[cfg(feature = "opencl_version_1_2")]
    clCreateProgramWithBuiltInKernels / clCreateProgramWithBuiltInKernels_fn(
        context: cl_context, num_devices: cl_uint, device_list: *const cl_device_id,
        kernel_names: *const c_char, errcode_ret: *mut cl_int) -> cl_program;
    #[cfg(feature = "opencl_version_2_1")]
    clCreateProgramWithIL / clCreateProgramWithIL_fn(context: cl_context, il: *const c_void,
        length: size_t, errcode_ret: *mut cl_int) -> cl_program;
    clRetainProgram / clRetainProgram_fn(program: cl_program) -> cl_int;
    clReleaseProgram / clReleaseProgram_fn(program: cl_program) -> cl_int;
    clBuildProgram / clBuildProgram_fn(program: cl_program, num_devices: cl_uint,
        device_list: *const cl_device_id, options: *const c_char,
        pfn_notify: Option<BuildProgramCallbackFn>, user_data: *mut c_void) -> cl_int;
    #[cfg(feature = "opencl_version_1_2")]
    clCompileProgram / clCompileProgram_fn(program: cl_program, num_devices: cl_uint,
        device_list: *const cl_device_id, options: *const c_char, num_input_headers: cl_uint,
        input_headers: *const cl_program, header_include_names: *const *const c_char,
        pfn_notify: Option<BuildProgramCallbackFn>, user_data: *mut c_void) -> cl_int;
    #[cfg(feature = "opencl_version_1_2")]
    clLinkProgram / clLinkProgram_fn(context: cl_context, num_devices: cl_uint,
        device_list: *const cl_device_id, options: *const c_char, num_input_programs: cl_uint,
        input_programs: *const cl_program, pfn_notify: Option<BuildProgramCallbackFn>,
        user_data: *mut c_void, errcode_ret: *mut cl_int) -> cl_program;
    clGetProgramInfo / clGetProgramInfo_fn(program: cl_program, param_name: cl_program_info,
        param_value_size: size_t, param_value: *mut c_void,
        param_value_size_ret: *mut size_t) -> cl_int;
    clGetProgramBuildInfo / clGetProgramBuildInfo_fn(program: cl_program, device: cl_device_id,
        param_name: cl_program_build_info, param_value_size: size_t, param_value: *mut c_void,
        param_value_size_ret: *mut size_t) -> cl_int;

    //======================== Kernel Object APIs =======================
    clCreateKernel / clCreateKernel_fn(program: cl_program, kernel_name: *const c_char,
        errcode_ret: *mut cl_int) -> cl_kernel;
    clCreateKernelsInProgram / clCreateKernelsInProgram_fn(program: cl_program,
        num_kernels: cl_uint, kernels: *mut cl_kernel, num_kernels_ret: *mut cl_uint) -> cl_int;
    #[cfg(feature = "opencl_version_2_1")]
    clCloneKernel / clCloneKernel_fn(source_kernel: cl_kernel,
        errcode_ret: *mut cl_int) -> cl_kernel;
    clRetainKernel / clRetainKernel_fn(kernel: cl_kernel) -> cl_int;
    clReleaseKernel / clReleaseKernel_fn(kernel: cl_kernel) -> cl_int;
    clSetKernelArg / clSetKernelArg_fn(kernel: cl_kernel, arg_index: cl_uint, arg_size: size_t,
        arg_value: *const c_void) -> cl_int;
    #[cfg(feature = "opencl_version_2_0")]
    clSetKernelArgSVMPointer / clSetKernelArgSVMPointer_fn(kernel: cl_kernel,
        arg_index: cl_uint, arg_value: *const c_void) -> cl_int;
    clGetKernelInfo / clGetKernelInfo_fn(kernel: cl_kernel, param_name: cl_kernel_info,
        param_value_size: size_t, param_value: *mut c_void,
        param_value_size_ret: *mut size_t) -> cl_int;
    #[cfg(feature = "opencl_version_1_2")]
    clGetKernelArgInfo / clGetKernelArgInfo_fn(kernel: cl_kernel, arg_indx: cl_uint,
        param_name: cl_kernel_arg_info, param_value_size: size_t, param_value: *mut c_void,
        param_value_size_ret: *mut size_t) -> cl_int;
    clGetKernelWorkGroupInfo / clGetKernelWorkGroupInfo_fn(kernel: cl_kernel,
        device: cl_device_id, param_name: cl_kernel_work_group_info, param_value_size: size_t,
        param_value: *mut c_void, param_value_size_ret: *mut size_t) -> cl_int;

    //======================== Event Object APIs ========================
    clWaitForEvents / clWaitForEvents_fn(num_events: cl_uint,
        event_list: *const cl_event) -> cl_int;
    clGetEventInfo / clGetEventInfo_fn(event: cl_event, param_name: cl_event_info,
        param_value_size: size_t, param_value: *mut c_void,
        param_value_size_ret: *mut size_t) -> cl_int;
    clCreateUserEvent / clCreateUserEvent_fn(context: cl_context,
        errcode_ret: *mut cl_int) -> cl_event;
    clRetainEvent / clRetainEvent_fn(event: cl_event) -> cl_int;
    clReleaseEvent / clReleaseEvent_fn(event: cl_event) -> cl_int;
    clSetUserEventStatus / clSetUserEventStatus_fn(event: cl_event,
        execution_status: cl_int) -> cl_int;
    clSetEventCallback / clSetEventCallback_fn(event: cl_event,
        command_exec_callback_type: cl_int, pfn_notify: Option<EventCallbackFn>,
        user_data: *mut c_void) -> cl_int;

    //=========================== Profiling APIs ========================
    clGetEventProfilingInfo / clGetEventProfilingInfo_fn(event: cl_event,
        param_name: cl_profiling_info, param_value_size: size_t, param_value: *mut c_void,
        param_value_size_ret: *mut size_t) -> cl_int;

    //===================== Flush and Finish APIs =======================
    clFlush / clFlush_fn(command_queue: cl_command_queue) -> cl_int;
    clFinish / clFinish_fn(command_queue: cl_command_queue) -> cl_int;

    //==================== Enqueued Commands APIs =======================
    clEnqueueReadBuffer / clEnqueueReadBuffer_fn(command_queue: cl_command_queue,
        buffer: cl_mem, blocking_read: cl_bool, offset: size_t, size: size_t, ptr: *mut c_void,
        num_events_in_wait_list: cl_uint, event_wait_list: *const cl_event,
        event: *mut cl_event) -> cl_int;
    clEnqueueReadBufferRect / clEnqueueReadBufferRect_fn(command_queue: cl_command_queue,
        buffer: cl_mem, blocking_read: cl_bool, buffer_origin: *const size_t,
        host_origin: *const size_t, region: *const size_t, buffer_row_pitch: size_t,
        buffer_slice_pitch: size_t, host_row_pitch: size_t, host_slice_pitch: size_t,
        ptr: *mut c_void, num_events_in_wait_list: cl_uint, event_wait_list: *const cl_event,
        event: *mut cl_event) -> cl_int;
    clEnqueueWriteBuffer / clEnqueueWriteBuffer_fn(command_queue: cl_command_queue,
        buffer: cl_mem, blocking_write: cl_bool, offset: size_t, size: size_t,
        ptr: *const c_void, num_events_in_wait_list: cl_uint, event_wait_list: *const cl_event,
        event: *mut cl_event) -> cl_int;
    clEnqueueWriteBufferRect / clEnqueueWriteBufferRect_fn(command_queue: cl_command_queue,
        buffer: cl_mem, blocking_write: cl_bool, buffer_origin: *const size_t,
        host_origin: *const size_t, region: *const size_t, buffer_row_pitch: size_t,
        buffer_slice_pitch: size_t, host_row_pitch: size_t, host_slice_pitch: size_t,
        ptr: *const c_void, num_events_in_wait_list: cl_uint, event_wait_list: *const cl_event,
        event: *mut cl_event) -> cl_int;
    #[cfg(feature = "opencl_version_1_2")]
    clEnqueueFillBuffer / clEnqueueFillBuffer_fn(command_queue: cl_command_queue,
        buffer: cl_mem, pattern: *const c_void, pattern_size: size_t, offset: size_t,
        size: size_t, num_events_in_wait_list: cl_uint, event_wait_list: *const cl_event,
        event: *mut cl_event) -> cl_int;
    clEnqueueCopyBuffer / clEnqueueCopyBuffer_fn(command_queue: cl_command_queue,
        src_buffer: cl_mem, dst_buffer: cl_mem, src_offset: size_t, dst_offset: size_t,
        size: size_t, num_events_in_wait_list: cl_uint, event_wait_list: *const cl_event,
        event: *mut cl_event) -> cl_int;
    clEnqueueCopyBufferRect / clEnqueueCopyBufferRect_fn(command_queue: cl_command_queue,
        src_buffer: cl_mem, dst_buffer: cl_mem, src_origin: *const size_t,
        dst_origin: *const size_t, region: *const size_t, src_row_pitch: size_t,
        src_slice_pitch: size_t, dst_row_pitch: size_t, dst_slice_pitch: size_t,
        num_events_in_wait_list: cl_uint, event_wait_list: *const cl_event,
        event: *mut cl_event) -> cl_int;
    clEnqueueReadImage / clEnqueueReadImage_fn(command_queue: cl_command_queue, image: cl_mem,
        blocking_read: cl_bool, origin: *const size_t, region: *const size_t, row_pitch: size_t,
        slice_pitch: size_t, ptr: *mut c_void, num_events_in_wait_list: cl_uint,
        event_wait_list: *const cl_event, event: *mut cl_event) -> cl_int;
    clEnqueueWriteImage / clEnqueueWriteImage_fn(command_queue: cl_command_queue, image: cl_mem,
        blocking_write: cl_bool, origin: *const size_t, region: *const size_t,
        input_row_pitch: size_t, input_slice_pitch: size_t, ptr: *const c_void,
        num_events_in_wait_list: cl_uint, event_wait_list: *const cl_event,
        event: *mut cl_event) -> cl_int;
    #[cfg(feature = "opencl_version_1_2")]
    clEnqueueFillImage / clEnqueueFillImage_fn(command_queue: cl_command_queue, image: cl_mem,
        fill_color: *const c_void, origin: *const size_t, region: *const size_t,
        num_events_in_wait_list: cl_uint, event_wait_list: *const cl_event,
        event: *mut cl_event) -> cl_int;
    clEnqueueCopyImage / clEnqueueCopyImage_fn(command_queue: cl_command_queue,
        src_image: cl_mem, dst_image: cl_mem, src_origin: *const size_t,
        dst_origin: *const size_t, region: *const size_t, num_events_in_wait_list: cl_uint,
        event_wait_list: *const cl_event, event: *mut cl_event) -> cl_int;
    clEnqueueCopyImageToBuffer / clEnqueueCopyImageToBuffer_fn(
        command_queue: cl_command_queue, src_image: cl_mem, dst_buffer: cl_mem,
        src_origin: *const size_t, region: *const size_t, dst_offset: size_t,
        num_events_in_wait_list: cl_uint, event_wait_list: *const cl_event,
        event: *mut cl_event) -> cl_int;
    clEnqueueCopyBufferToImage / clEnqueueCopyBufferToImage_fn(
        command_queue: cl_command_queue, src_buffer: cl_mem, dst_image: cl_mem,
        src_offset: size_t, dst_origin: *const size_t, region: *const size_t,
        num_events_in_wait_list: cl_uint, event_wait_list: *const cl_event,
        event: *mut cl_event) -> cl_int;
    clEnqueueMapBuffer / clEnqueueMapBuffer_fn(command_queue: cl_command_queue, buffer: cl_mem,
        blocking_map: cl_bool, map_flags: cl_map_flags, offset: size_t, size: size_t,
        num_events_in_wait_list: cl_uint, event_wait_list: *const cl_event,
        event: *mut cl_event, errcode_ret: *mut cl_int) -> *mut c_void;
    clEnqueueMapImage / clEnqueueMapImage_fn(command_queue: cl_command_queue, image: cl_mem,
        blocking_map: cl_bool, map_flags: cl_map_flags, origin: *const size_t,
        region: *const size_t, image_row_pitch: *mut size_t, image_slice_pitch: *mut size_t,
        num_events_in_wait_list: cl_uint, event_wait_list: *const cl_event,
        event: *mut cl_event, errcode_ret: *mut cl_int) -> *mut c_void;
    clEnqueueUnmapMemObject / clEnqueueUnmapMemObject_fn(command_queue: cl_command_queue,
        memobj: cl_mem, mapped_ptr: *mut c_void, num_events_in_wait_list: cl_uint,
        event_wait_list: *const cl_event, event: *mut cl_event) -> cl_int;
    #[cfg(feature = "opencl_version_1_2")]
    clEnqueueMigrateMemObjects / clEnqueueMigrateMemObjects_fn(
        command_queue: cl_command_queue, num_mem_objects: cl_uint, mem_objects: *const cl_mem,
        flags: cl_mem_migration_flags, num_events_in_wait_list: cl_uint,
        event_wait_list: *const cl_event, event: *mut cl_event) -> cl_int;
    clEnqueueNDRangeKernel / clEnqueueNDRangeKernel_fn(command_queue: cl_command_queue,
        kernel: cl_kernel, work_dim: cl_uint, global_work_offset: *const size_t,
        global_work_size: *const size_t, local_work_size: *const size_t,
        num_events_in_wait_list: cl_uint, event_wait_list: *const cl_event,
        event: *mut cl_event) -> cl_int;
    clEnqueueTask / clEnqueueTask_fn(command_queue: cl_command_queue, kernel: cl_kernel,
        num_events_in_wait_list: cl_uint, event_wait_list: *const cl_event,
        event: *mut cl_event) -> cl_int;
    clEnqueueNativeKernel / clEnqueueNativeKernel_fn(command_queue: cl_command_queue,
        user_func: Option<NativeKernelFn>, args: *mut c_void, cb_args: size_t,
        num_mem_objects: cl_uint, mem_list: *const cl_mem, args_mem_loc: *const *const c_void,
        num_events_in_wait_list: cl_uint, event_wait_list: *const cl_event,
        event: *mut cl_event) -> cl_int;
    #[cfg(feature = "opencl_version_1_2")]
    clEnqueueMarkerWithWaitList / clEnqueueMarkerWithWaitList_fn(
        command_queue: cl_command_queue, num_events_in_wait_list: cl_uint,
        event_wait_list: *const cl_event, event: *mut cl_event) -> cl_int;
    #[cfg(feature = "opencl_version_1_2")]
    clEnqueueBarrierWithWaitList / clEnqueueBarrierWithWaitList_fn(
        command_queue: cl_command_queue, num_events_in_wait_list: cl_uint,
        event_wait_list: *const cl_event, event: *mut cl_event) -> cl_int;
    #[cfg(feature = "opencl_version_2_0")]
    clEnqueueSVMMap / clEnqueueSVMMap_fn(command_queue: cl_command_queue,
        blocking_map: cl_bool, flags: cl_map_flags, svm_ptr: *mut c_void, size: size_t,
        num_events_in_wait_list: cl_uint, event_wait_list: *const cl_event,
        event: *mut cl_event) -> cl_int;
    #[cfg(feature = "opencl_version_2_0")]
    clEnqueueSVMUnmap / clEnqueueSVMUnmap_fn(command_queue: cl_command_queue,
        svm_ptr: *mut c_void, num_events_in_wait_list: cl_uint,
        event_wait_list: *const cl_event, event: *mut cl_event) -> cl_int;
}
