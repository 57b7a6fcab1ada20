//! Command queue entry points: flush, finish and every `clEnqueue*` call.
//!
//! Enqueue methods end with the wait list and an optional out-event, in that
//! order, as the native functions do.

use crate::ffi::{self, c_void, cl_command_queue_info, cl_uint, size_t, NativeKernelFn};
use crate::error::Result;
use crate::types::abs::{CommandQueue, ComputeMemory, ComputeKernel, ComputeEvent};
use crate::types::flags::MapFlags;
#[cfg(feature = "opencl_version_1_2")]
use crate::types::flags::MemMigrationFlags;
use crate::types::status::StatusCode;
use super::{bytes, bytes_mut, cl_bool, list, opt_slice, out, wait_list};

impl CommandQueue {
    /// `clRetainCommandQueue`
    pub unsafe fn retain(self) -> Result<StatusCode> {
        Ok(StatusCode(call!(clRetainCommandQueue(self.as_ptr()))))
    }

    /// `clReleaseCommandQueue`
    pub unsafe fn release(self) -> Result<StatusCode> {
        Ok(StatusCode(call!(clReleaseCommandQueue(self.as_ptr()))))
    }

    /// `clGetCommandQueueInfo`
    pub unsafe fn get_info(self, param_name: cl_command_queue_info, param_value: &mut [u8],
            param_value_size_ret: Option<&mut size_t>) -> Result<StatusCode> {
        let (size, value) = bytes_mut(param_value);
        Ok(StatusCode(call!(clGetCommandQueueInfo(self.as_ptr(), param_name, size, value,
            out(param_value_size_ret)))))
    }

    /// `clFlush`
    pub unsafe fn flush(self) -> Result<StatusCode> {
        Ok(StatusCode(call!(clFlush(self.as_ptr()))))
    }

    /// `clFinish`
    pub unsafe fn finish(self) -> Result<StatusCode> {
        Ok(StatusCode(call!(clFinish(self.as_ptr()))))
    }

    /// `clEnqueueReadBuffer`
    ///
    /// Reads `size_of_val(data)` bytes starting at byte `offset` of `buffer`.
    pub unsafe fn enqueue_read_buffer<T: Copy>(self, buffer: ComputeMemory, blocking: bool,
            offset: size_t, data: &mut [T], wait_for: &[ComputeEvent],
            new_event: Option<&mut ComputeEvent>) -> Result<StatusCode> {
        let (size, ptr) = bytes_mut(data);
        let (num_events, events) = wait_list(wait_for);
        Ok(StatusCode(call!(clEnqueueReadBuffer(self.as_ptr(), buffer.as_ptr(), cl_bool(blocking),
            offset, size, ptr, num_events, events, ComputeEvent::out_ptr(new_event)))))
    }

    /// `clEnqueueReadBufferRect`
    pub unsafe fn enqueue_read_buffer_rect<T: Copy>(self, buffer: ComputeMemory, blocking: bool,
            buffer_origin: &[size_t; 3], host_origin: &[size_t; 3], region: &[size_t; 3],
            buffer_row_pitch: size_t, buffer_slice_pitch: size_t, host_row_pitch: size_t,
            host_slice_pitch: size_t, data: &mut [T], wait_for: &[ComputeEvent],
            new_event: Option<&mut ComputeEvent>) -> Result<StatusCode> {
        let (_, ptr) = bytes_mut(data);
        let (num_events, events) = wait_list(wait_for);
        Ok(StatusCode(call!(clEnqueueReadBufferRect(self.as_ptr(), buffer.as_ptr(),
            cl_bool(blocking), buffer_origin.as_ptr(), host_origin.as_ptr(), region.as_ptr(),
            buffer_row_pitch, buffer_slice_pitch, host_row_pitch, host_slice_pitch, ptr,
            num_events, events, ComputeEvent::out_ptr(new_event)))))
    }

    /// `clEnqueueWriteBuffer`
    ///
    /// Writes `size_of_val(data)` bytes starting at byte `offset` of `buffer`.
    pub unsafe fn enqueue_write_buffer<T: Copy>(self, buffer: ComputeMemory, blocking: bool,
            offset: size_t, data: &[T], wait_for: &[ComputeEvent],
            new_event: Option<&mut ComputeEvent>) -> Result<StatusCode> {
        let (size, ptr) = bytes(data);
        let (num_events, events) = wait_list(wait_for);
        Ok(StatusCode(call!(clEnqueueWriteBuffer(self.as_ptr(), buffer.as_ptr(),
            cl_bool(blocking), offset, size, ptr, num_events, events,
            ComputeEvent::out_ptr(new_event)))))
    }

    /// `clEnqueueWriteBufferRect`
    pub unsafe fn enqueue_write_buffer_rect<T: Copy>(self, buffer: ComputeMemory, blocking: bool,
            buffer_origin: &[size_t; 3], host_origin: &[size_t; 3], region: &[size_t; 3],
            buffer_row_pitch: size_t, buffer_slice_pitch: size_t, host_row_pitch: size_t,
            host_slice_pitch: size_t, data: &[T], wait_for: &[ComputeEvent],
            new_event: Option<&mut ComputeEvent>) -> Result<StatusCode> {
        let (_, ptr) = bytes(data);
        let (num_events, events) = wait_list(wait_for);
        Ok(StatusCode(call!(clEnqueueWriteBufferRect(self.as_ptr(), buffer.as_ptr(),
            cl_bool(blocking), buffer_origin.as_ptr(), host_origin.as_ptr(), region.as_ptr(),
            buffer_row_pitch, buffer_slice_pitch, host_row_pitch, host_slice_pitch, ptr,
            num_events, events, ComputeEvent::out_ptr(new_event)))))
    }

    /// `clEnqueueFillBuffer`
    ///
    /// `offset` and `size` are in bytes, the pattern size is
    /// `size_of_val(pattern)`.
    #[cfg(feature = "opencl_version_1_2")]
    pub unsafe fn enqueue_fill_buffer<T: Copy>(self, buffer: ComputeMemory, pattern: &[T],
            offset: size_t, size: size_t, wait_for: &[ComputeEvent],
            new_event: Option<&mut ComputeEvent>) -> Result<StatusCode> {
        let (pattern_size, pattern) = bytes(pattern);
        let (num_events, events) = wait_list(wait_for);
        Ok(StatusCode(call!(clEnqueueFillBuffer(self.as_ptr(), buffer.as_ptr(), pattern,
            pattern_size, offset, size, num_events, events, ComputeEvent::out_ptr(new_event)))))
    }

    /// `clEnqueueCopyBuffer`
    pub unsafe fn enqueue_copy_buffer(self, src_buffer: ComputeMemory, dst_buffer: ComputeMemory,
            src_offset: size_t, dst_offset: size_t, size: size_t, wait_for: &[ComputeEvent],
            new_event: Option<&mut ComputeEvent>) -> Result<StatusCode> {
        let (num_events, events) = wait_list(wait_for);
        Ok(StatusCode(call!(clEnqueueCopyBuffer(self.as_ptr(), src_buffer.as_ptr(),
            dst_buffer.as_ptr(), src_offset, dst_offset, size, num_events, events,
            ComputeEvent::out_ptr(new_event)))))
    }

    /// `clEnqueueCopyBufferRect`
    pub unsafe fn enqueue_copy_buffer_rect(self, src_buffer: ComputeMemory,
            dst_buffer: ComputeMemory, src_origin: &[size_t; 3], dst_origin: &[size_t; 3],
            region: &[size_t; 3], src_row_pitch: size_t, src_slice_pitch: size_t,
            dst_row_pitch: size_t, dst_slice_pitch: size_t, wait_for: &[ComputeEvent],
            new_event: Option<&mut ComputeEvent>) -> Result<StatusCode> {
        let (num_events, events) = wait_list(wait_for);
        Ok(StatusCode(call!(clEnqueueCopyBufferRect(self.as_ptr(), src_buffer.as_ptr(),
            dst_buffer.as_ptr(), src_origin.as_ptr(), dst_origin.as_ptr(), region.as_ptr(),
            src_row_pitch, src_slice_pitch, dst_row_pitch, dst_slice_pitch, num_events, events,
            ComputeEvent::out_ptr(new_event)))))
    }

    /// `clEnqueueReadImage`
    pub unsafe fn enqueue_read_image<T: Copy>(self, image: ComputeMemory, blocking: bool,
            origin: &[size_t; 3], region: &[size_t; 3], row_pitch: size_t, slice_pitch: size_t,
            data: &mut [T], wait_for: &[ComputeEvent], new_event: Option<&mut ComputeEvent>)
            -> Result<StatusCode> {
        let (_, ptr) = bytes_mut(data);
        let (num_events, events) = wait_list(wait_for);
        Ok(StatusCode(call!(clEnqueueReadImage(self.as_ptr(), image.as_ptr(), cl_bool(blocking),
            origin.as_ptr(), region.as_ptr(), row_pitch, slice_pitch, ptr, num_events, events,
            ComputeEvent::out_ptr(new_event)))))
    }

    /// `clEnqueueWriteImage`
    pub unsafe fn enqueue_write_image<T: Copy>(self, image: ComputeMemory, blocking: bool,
            origin: &[size_t; 3], region: &[size_t; 3], input_row_pitch: size_t,
            input_slice_pitch: size_t, data: &[T], wait_for: &[ComputeEvent],
            new_event: Option<&mut ComputeEvent>) -> Result<StatusCode> {
        let (_, ptr) = bytes(data);
        let (num_events, events) = wait_list(wait_for);
        Ok(StatusCode(call!(clEnqueueWriteImage(self.as_ptr(), image.as_ptr(), cl_bool(blocking),
            origin.as_ptr(), region.as_ptr(), input_row_pitch, input_slice_pitch, ptr,
            num_events, events, ComputeEvent::out_ptr(new_event)))))
    }

    /// `clEnqueueFillImage`
    ///
    /// `fill_color` is four channel values of the type the image format calls
    /// for.
    #[cfg(feature = "opencl_version_1_2")]
    pub unsafe fn enqueue_fill_image<T: Copy>(self, image: ComputeMemory, fill_color: &[T; 4],
            origin: &[size_t; 3], region: &[size_t; 3], wait_for: &[ComputeEvent],
            new_event: Option<&mut ComputeEvent>) -> Result<StatusCode> {
        let (num_events, events) = wait_list(wait_for);
        Ok(StatusCode(call!(clEnqueueFillImage(self.as_ptr(), image.as_ptr(),
            fill_color.as_ptr() as *const c_void, origin.as_ptr(), region.as_ptr(), num_events,
            events, ComputeEvent::out_ptr(new_event)))))
    }

    /// `clEnqueueCopyImage`
    pub unsafe fn enqueue_copy_image(self, src_image: ComputeMemory, dst_image: ComputeMemory,
            src_origin: &[size_t; 3], dst_origin: &[size_t; 3], region: &[size_t; 3],
            wait_for: &[ComputeEvent], new_event: Option<&mut ComputeEvent>)
            -> Result<StatusCode> {
        let (num_events, events) = wait_list(wait_for);
        Ok(StatusCode(call!(clEnqueueCopyImage(self.as_ptr(), src_image.as_ptr(),
            dst_image.as_ptr(), src_origin.as_ptr(), dst_origin.as_ptr(), region.as_ptr(),
            num_events, events, ComputeEvent::out_ptr(new_event)))))
    }

    /// `clEnqueueCopyImageToBuffer`
    pub unsafe fn enqueue_copy_image_to_buffer(self, src_image: ComputeMemory,
            dst_buffer: ComputeMemory, src_origin: &[size_t; 3], region: &[size_t; 3],
            dst_offset: size_t, wait_for: &[ComputeEvent], new_event: Option<&mut ComputeEvent>)
            -> Result<StatusCode> {
        let (num_events, events) = wait_list(wait_for);
        Ok(StatusCode(call!(clEnqueueCopyImageToBuffer(self.as_ptr(), src_image.as_ptr(),
            dst_buffer.as_ptr(), src_origin.as_ptr(), region.as_ptr(), dst_offset, num_events,
            events, ComputeEvent::out_ptr(new_event)))))
    }

    /// `clEnqueueCopyBufferToImage`
    pub unsafe fn enqueue_copy_buffer_to_image(self, src_buffer: ComputeMemory,
            dst_image: ComputeMemory, src_offset: size_t, dst_origin: &[size_t; 3],
            region: &[size_t; 3], wait_for: &[ComputeEvent], new_event: Option<&mut ComputeEvent>)
            -> Result<StatusCode> {
        let (num_events, events) = wait_list(wait_for);
        Ok(StatusCode(call!(clEnqueueCopyBufferToImage(self.as_ptr(), src_buffer.as_ptr(),
            dst_image.as_ptr(), src_offset, dst_origin.as_ptr(), region.as_ptr(), num_events,
            events, ComputeEvent::out_ptr(new_event)))))
    }

    /// `clEnqueueMapBuffer`
    pub unsafe fn enqueue_map_buffer(self, buffer: ComputeMemory, blocking: bool,
            map_flags: MapFlags, offset: size_t, size: size_t, wait_for: &[ComputeEvent],
            new_event: Option<&mut ComputeEvent>) -> Result<(*mut c_void, StatusCode)> {
        let (num_events, events) = wait_list(wait_for);
        let mut errcode = ffi::CL_SUCCESS;
        let mapped = call!(clEnqueueMapBuffer(self.as_ptr(), buffer.as_ptr(), cl_bool(blocking),
            map_flags.bits(), offset, size, num_events, events, ComputeEvent::out_ptr(new_event),
            &mut errcode));
        Ok((mapped, StatusCode(errcode)))
    }

    /// `clEnqueueMapImage`
    pub unsafe fn enqueue_map_image(self, image: ComputeMemory, blocking: bool,
            map_flags: MapFlags, origin: &[size_t; 3], region: &[size_t; 3],
            image_row_pitch: &mut size_t, image_slice_pitch: Option<&mut size_t>,
            wait_for: &[ComputeEvent], new_event: Option<&mut ComputeEvent>)
            -> Result<(*mut c_void, StatusCode)> {
        let (num_events, events) = wait_list(wait_for);
        let mut errcode = ffi::CL_SUCCESS;
        let mapped = call!(clEnqueueMapImage(self.as_ptr(), image.as_ptr(), cl_bool(blocking),
            map_flags.bits(), origin.as_ptr(), region.as_ptr(), image_row_pitch,
            out(image_slice_pitch), num_events, events, ComputeEvent::out_ptr(new_event),
            &mut errcode));
        Ok((mapped, StatusCode(errcode)))
    }

    /// `clEnqueueUnmapMemObject`
    pub unsafe fn enqueue_unmap_mem_object(self, memobj: ComputeMemory, mapped_ptr: *mut c_void,
            wait_for: &[ComputeEvent], new_event: Option<&mut ComputeEvent>)
            -> Result<StatusCode> {
        let (num_events, events) = wait_list(wait_for);
        Ok(StatusCode(call!(clEnqueueUnmapMemObject(self.as_ptr(), memobj.as_ptr(), mapped_ptr,
            num_events, events, ComputeEvent::out_ptr(new_event)))))
    }

    /// `clEnqueueMigrateMemObjects`
    #[cfg(feature = "opencl_version_1_2")]
    pub unsafe fn enqueue_migrate_mem_objects(self, mem_objects: &[ComputeMemory],
            flags: MemMigrationFlags, wait_for: &[ComputeEvent],
            new_event: Option<&mut ComputeEvent>) -> Result<StatusCode> {
        let (num_mem_objects, mem_objects) = list(mem_objects);
        let (num_events, events) = wait_list(wait_for);
        Ok(StatusCode(call!(clEnqueueMigrateMemObjects(self.as_ptr(), num_mem_objects,
            mem_objects, flags.bits(), num_events, events, ComputeEvent::out_ptr(new_event)))))
    }

    /// `clEnqueueNDRangeKernel`
    ///
    /// `work_dim` is passed as given. The offset, global and local size
    /// slices must each hold at least `work_dim` entries; `None` passes
    /// `NULL`.
    pub unsafe fn enqueue_nd_range_kernel(self, kernel: ComputeKernel, work_dim: cl_uint,
            global_work_offset: Option<&[size_t]>, global_work_size: &[size_t],
            local_work_size: Option<&[size_t]>, wait_for: &[ComputeEvent],
            new_event: Option<&mut ComputeEvent>) -> Result<StatusCode> {
        let (num_events, events) = wait_list(wait_for);
        Ok(StatusCode(call!(clEnqueueNDRangeKernel(self.as_ptr(), kernel.as_ptr(), work_dim,
            opt_slice(global_work_offset), list(global_work_size).1,
            opt_slice(local_work_size), num_events, events, ComputeEvent::out_ptr(new_event)))))
    }

    /// `clEnqueueTask`
    pub unsafe fn enqueue_task(self, kernel: ComputeKernel, wait_for: &[ComputeEvent],
            new_event: Option<&mut ComputeEvent>) -> Result<StatusCode> {
        let (num_events, events) = wait_list(wait_for);
        Ok(StatusCode(call!(clEnqueueTask(self.as_ptr(), kernel.as_ptr(), num_events, events,
            ComputeEvent::out_ptr(new_event)))))
    }

    /// `clEnqueueNativeKernel`
    ///
    /// `args` is copied by the runtime. `args_mem_loc` holds, for each entry
    /// of `mem_list`, the location inside `args` where the runtime stores the
    /// corresponding global memory pointer.
    pub unsafe fn enqueue_native_kernel(self, user_func: Option<NativeKernelFn>,
            args: &mut [u8], mem_list: &[ComputeMemory], args_mem_loc: &[*const c_void],
            wait_for: &[ComputeEvent], new_event: Option<&mut ComputeEvent>)
            -> Result<StatusCode> {
        let (cb_args, args) = bytes_mut(args);
        let (num_mem_objects, mem_list) = list(mem_list);
        let (num_events, events) = wait_list(wait_for);
        Ok(StatusCode(call!(clEnqueueNativeKernel(self.as_ptr(), user_func, args, cb_args,
            num_mem_objects, mem_list, list(args_mem_loc).1, num_events, events,
            ComputeEvent::out_ptr(new_event)))))
    }

    /// `clEnqueueMarkerWithWaitList`
    #[cfg(feature = "opencl_version_1_2")]
    pub unsafe fn enqueue_marker_with_wait_list(self, wait_for: &[ComputeEvent],
            new_event: Option<&mut ComputeEvent>) -> Result<StatusCode> {
        let (num_events, events) = wait_list(wait_for);
        Ok(StatusCode(call!(clEnqueueMarkerWithWaitList(self.as_ptr(), num_events, events,
            ComputeEvent::out_ptr(new_event)))))
    }

    /// `clEnqueueBarrierWithWaitList`
    #[cfg(feature = "opencl_version_1_2")]
    pub unsafe fn enqueue_barrier_with_wait_list(self, wait_for: &[ComputeEvent],
            new_event: Option<&mut ComputeEvent>) -> Result<StatusCode> {
        let (num_events, events) = wait_list(wait_for);
        Ok(StatusCode(call!(clEnqueueBarrierWithWaitList(self.as_ptr(), num_events, events,
            ComputeEvent::out_ptr(new_event)))))
    }

    /// `clEnqueueSVMMap`
    #[cfg(feature = "opencl_version_2_0")]
    pub unsafe fn enqueue_svm_map(self, blocking: bool, flags: MapFlags, svm_ptr: *mut c_void,
            size: size_t, wait_for: &[ComputeEvent], new_event: Option<&mut ComputeEvent>)
            -> Result<StatusCode> {
        let (num_events, events) = wait_list(wait_for);
        Ok(StatusCode(call!(clEnqueueSVMMap(self.as_ptr(), cl_bool(blocking), flags.bits(),
            svm_ptr, size, num_events, events, ComputeEvent::out_ptr(new_event)))))
    }

    /// `clEnqueueSVMUnmap`
    #[cfg(feature = "opencl_version_2_0")]
    pub unsafe fn enqueue_svm_unmap(self, svm_ptr: *mut c_void, wait_for: &[ComputeEvent],
            new_event: Option<&mut ComputeEvent>) -> Result<StatusCode> {
        let (num_events, events) = wait_list(wait_for);
        Ok(StatusCode(call!(clEnqueueSVMUnmap(self.as_ptr(), svm_ptr, num_events, events,
            ComputeEvent::out_ptr(new_event)))))
    }
}
