//! Event and profiling entry points.

use crate::ffi::{c_void, cl_event_info, cl_int, cl_profiling_info, size_t, EventCallbackFn};
use crate::error::Result;
use crate::types::abs::ComputeEvent;
use crate::types::status::StatusCode;
use super::{bytes_mut, list, out};

impl ComputeEvent {
    /// `clWaitForEvents`
    pub unsafe fn wait_for_events(events: &[ComputeEvent]) -> Result<StatusCode> {
        let (num_events, events) = list(events);
        Ok(StatusCode(call!(clWaitForEvents(num_events, events))))
    }

    /// `clGetEventInfo`
    pub unsafe fn get_info(self, param_name: cl_event_info, param_value: &mut [u8],
            param_value_size_ret: Option<&mut size_t>) -> Result<StatusCode> {
        let (size, value) = bytes_mut(param_value);
        Ok(StatusCode(call!(clGetEventInfo(self.as_ptr(), param_name, size, value,
            out(param_value_size_ret)))))
    }

    /// `clRetainEvent`
    pub unsafe fn retain(self) -> Result<StatusCode> {
        Ok(StatusCode(call!(clRetainEvent(self.as_ptr()))))
    }

    /// `clReleaseEvent`
    pub unsafe fn release(self) -> Result<StatusCode> {
        Ok(StatusCode(call!(clReleaseEvent(self.as_ptr()))))
    }

    /// `clSetUserEventStatus`
    pub unsafe fn set_user_event_status(self, execution_status: cl_int) -> Result<StatusCode> {
        Ok(StatusCode(call!(clSetUserEventStatus(self.as_ptr(), execution_status))))
    }

    /// `clSetEventCallback`
    pub unsafe fn set_callback(self, command_exec_callback_type: cl_int,
            pfn_notify: Option<EventCallbackFn>, user_data: *mut c_void) -> Result<StatusCode> {
        Ok(StatusCode(call!(clSetEventCallback(self.as_ptr(), command_exec_callback_type,
            pfn_notify, user_data))))
    }

    /// `clGetEventProfilingInfo`
    pub unsafe fn get_profiling_info(self, param_name: cl_profiling_info, param_value: &mut [u8],
            param_value_size_ret: Option<&mut size_t>) -> Result<StatusCode> {
        let (size, value) = bytes_mut(param_value);
        Ok(StatusCode(call!(clGetEventProfilingInfo(self.as_ptr(), param_name, size, value,
            out(param_value_size_ret)))))
    }
}
