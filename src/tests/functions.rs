//! The `Result` returning function layer.

use std::env;
use std::ffi::CString;
use std::time::Duration;
use crate::ffi;
use crate::{Error, ApiWrapperError, ProgramBuildError, Status, ComputeDevice, ComputeEvent,
    DeviceType, MemFlags, KernelArg, PlatformInfo, DeviceInfo, CommandExecutionStatus,
    ProfilingInfo, ContextInfo, AddressingMode, FilterMode, MemInfo};
use crate::util;
use super::mock;

fn first_device() -> ComputeDevice {
    let platform = crate::get_platform_ids().unwrap()[0];
    crate::get_device_ids(platform, Some(DeviceType::ALL), None).unwrap()[0]
}

#[test]
fn platform_list() {
    mock::install();
    let platforms = crate::get_platform_ids().unwrap();

    assert_eq!(platforms.len(), mock::PLATFORM_COUNT);
    assert_eq!(platforms[1].value(), mock::platform_addr(1));
    assert_eq!(crate::get_platform_info_string(platforms[0], PlatformInfo::Name).unwrap(),
        mock::PLATFORM_NAME);
    assert_eq!(crate::get_platform_info_string(platforms[0], PlatformInfo::Vendor).unwrap(),
        mock::PLATFORM_VENDOR);
}

#[test]
fn platform_list_retries_until_available() {
    mock::install();
    mock::with(|s| s.platform_not_found = 2);

    let platforms = crate::get_platform_ids_retrying(3, Duration::from_millis(1)).unwrap();
    assert_eq!(platforms.len(), mock::PLATFORM_COUNT);
    // Two failed count queries, one successful count query, one list query.
    assert_eq!(mock::call_count("clGetPlatformIDs"), 4);
}

#[test]
fn platform_list_gives_up() {
    mock::install();
    mock::with(|s| s.platform_not_found = 10);

    match crate::get_platform_ids_retrying(2, Duration::from_millis(1)) {
        Err(Error::Wrapper(ApiWrapperError::PlatformListUnavailable(_))) => (),
        other => panic!("unexpected result: {:?}", other),
    }
    assert_eq!(mock::call_count("clGetPlatformIDs"), 3);
}

#[test]
fn retry_wait_saturates() {
    assert_eq!(crate::functions::retry_wait_secs(5, Duration::from_millis(2000)), 10);
    assert_eq!(crate::functions::retry_wait_secs(u64::MAX, Duration::from_secs(1)),
        u64::MAX / 1000);
    assert_eq!(crate::functions::retry_wait_secs(2, Duration::MAX), u64::MAX / 1000);
}

#[test]
fn platform_list_error_names_entry_point() {
    mock::install();
    mock::fail_next("clGetPlatformIDs", ffi::CL_OUT_OF_HOST_MEMORY);

    let err = crate::get_platform_ids().unwrap_err();
    match err {
        Error::Api(ref api) => {
            assert_eq!(api.fn_name(), "clGetPlatformIDs");
            assert_eq!(api.status(), Some(Status::CL_OUT_OF_HOST_MEMORY));
        },
        ref other => panic!("unexpected error: {:?}", other),
    }
    assert!(err.to_string().contains("clGetPlatformIDs"));
}

#[test]
fn device_list_respects_max() {
    mock::install();
    let platform = crate::get_platform_ids().unwrap()[1];

    let devices = crate::get_device_ids(platform, Some(DeviceType::GPU), Some(2)).unwrap();
    assert_eq!(devices, vec![ComputeDevice::from_value(mock::device_addr(1, 0)),
        ComputeDevice::from_value(mock::device_addr(1, 1))]);
    mock::with(|s| assert_eq!(s.last_device_type, ffi::CL_DEVICE_TYPE_GPU));

    let devices = crate::get_device_ids(platform, Some(DeviceType::ALL), None).unwrap();
    assert_eq!(devices.len(), mock::DEVICES_PER_PLATFORM);
    mock::with(|s| assert_eq!(s.last_num_entries, crate::DEVICES_MAX));

    match crate::get_device_ids(platform, Some(DeviceType::ALL), Some(0)) {
        Err(Error::Wrapper(ApiWrapperError::GetDeviceIdsDevicesMaxZero)) => (),
        other => panic!("unexpected result: {:?}", other),
    }
}

#[test]
fn device_info() {
    mock::install();
    let device = first_device();

    let name = crate::get_device_info_string(device, DeviceInfo::Name).unwrap();
    assert_eq!(name, format!("Mock Device {:#x}", device.value()));

    let bytes = crate::get_device_info(device, DeviceInfo::Type).unwrap();
    let bits: ffi::cl_device_type = util::bytes_to(&bytes).unwrap();
    assert_eq!(DeviceType::from_bits_truncate(bits), DeviceType::GPU);

    let units: u32 = util::bytes_to(&crate::get_device_info(device, DeviceInfo::MaxComputeUnits)
        .unwrap()).unwrap();
    assert_eq!(units, 8);
}

#[test]
fn context_lifecycle() {
    mock::install();
    let device = first_device();

    match crate::create_context(None, &[]) {
        Err(Error::Wrapper(ApiWrapperError::CreateContextNoDevicesSpecified)) => (),
        other => panic!("unexpected result: {:?}", other),
    }
    assert!(mock::calls().iter().all(|&c| c != "clCreateContext"));

    let context = crate::create_context(None, &[device]).unwrap();
    assert_eq!(crate::get_context_devices(*context).unwrap(), vec![device]);
    assert!(crate::get_context_properties(*context).unwrap().is_empty());

    let num: u32 = util::bytes_to(&crate::get_context_info(*context, ContextInfo::NumDevices)
        .unwrap()).unwrap();
    assert_eq!(num, 1);

    let addr = context.value();
    drop(context);
    assert_eq!(mock::ref_count(addr), 0);
}

#[test]
fn create_failure_returns_api_error() {
    mock::install();
    let device = first_device();
    mock::fail_next("clCreateContext", ffi::CL_DEVICE_NOT_AVAILABLE);

    let err = crate::create_context(None, &[device]).unwrap_err();
    assert_eq!(err.api_status(), Some(Status::CL_DEVICE_NOT_AVAILABLE));
}

#[test]
fn buffers() {
    mock::install();
    let context = crate::create_context(None, &[first_device()]).unwrap();
    let data = vec![3i32; 10];

    match unsafe { crate::create_buffer(*context, MemFlags::COPY_HOST_PTR, 12, Some(&data[..])) } {
        Err(Error::Wrapper(ApiWrapperError::CreateBufferDataLengthMismatch(12, 10))) => (),
        other => panic!("unexpected result: {:?}", other),
    }

    let buffer = unsafe {
        crate::create_buffer(*context, MemFlags::COPY_HOST_PTR, 10, Some(&data[..])).unwrap()
    };
    mock::with(|s| {
        assert_eq!(s.last_buffer_size, 40);
        assert_eq!(s.last_host_ptr, data.as_ptr() as usize);
    });

    let sub = crate::create_sub_buffer::<i32>(*buffer, MemFlags::default(), 2, 4).unwrap();
    mock::with(|s| assert_eq!(s.last_region, Some((8, 16))));
    assert_ne!(sub.handle(), buffer.handle());

    let empty = unsafe { crate::create_buffer::<f32>(*context, MemFlags::default(), 0, None) };
    assert_eq!(empty.unwrap_err().api_status(), Some(Status::CL_INVALID_BUFFER_SIZE));

    // No `clGetMemObjectInfo` in the table.
    match crate::get_mem_object_info(*buffer, MemInfo::Size) {
        Err(Error::EntryPointUnavailable("clGetMemObjectInfo")) => (),
        other => panic!("unexpected result: {:?}", other),
    }
}

#[test]
fn samplers() {
    mock::install();
    let context = crate::create_context(None, &[first_device()]).unwrap();
    let sampler = crate::create_sampler(*context, true, AddressingMode::ClampToEdge,
        FilterMode::Linear).unwrap();
    assert_eq!(mock::ref_count(sampler.value()), 1);
}

#[test]
fn program_build_and_kernel() {
    mock::install();
    let device = first_device();
    let context = crate::create_context(None, &[device]).unwrap();
    let src = vec![
        CString::new("kernel void add(global float* a, float b) {").unwrap(),
        CString::new(" a[get_global_id(0)] += b; }").unwrap(),
    ];
    let options = CString::new("-DVALUE=1").unwrap();

    let program = crate::create_build_program(*context, &src, Some(&[device][..]), &options)
        .unwrap();
    mock::with(|s| {
        assert_eq!(s.last_sources.concat(),
            "kernel void add(global float* a, float b) { a[get_global_id(0)] += b; }");
        assert_eq!(s.last_build_options.as_deref(), Some("-DVALUE=1"));
        assert_eq!(s.last_build_devices, vec![device.value()]);
    });

    let kernel = crate::create_kernel(*program, "add").unwrap();
    assert_eq!(crate::get_kernel_name(*kernel).unwrap(), "add");

    mock::fail_next("clCreateKernel", ffi::CL_INVALID_KERNEL_NAME);
    let err = crate::create_kernel(*program, "sub").unwrap_err();
    assert_eq!(err.api_status(), Some(Status::CL_INVALID_KERNEL_NAME));
    assert!(err.to_string().contains("sub"));
}

#[test]
fn build_failure_collects_logs() {
    mock::install();
    let device = first_device();
    let context = crate::create_context(None, &[device]).unwrap();
    let program = crate::create_program_with_source(*context,
        &[CString::new("kernel void broken() { nope; }").unwrap()]).unwrap();
    let options = CString::new("").unwrap();

    mock::with(|s| s.build_log = "error: use of undeclared identifier 'nope'".to_owned());
    mock::fail_next("clBuildProgram", ffi::CL_BUILD_PROGRAM_FAILURE);

    // Every device the program knows about is asked for its log.
    match crate::build_program(*program, None, &options) {
        Err(Error::ProgramBuild(ProgramBuildError::BuildLog(log))) => {
            assert!(log.contains("undeclared identifier"));
            assert!(log.contains(&format!("{:#x}", mock::device_addr(0, 1))));
        },
        other => panic!("unexpected result: {:?}", other),
    }
}

#[test]
fn build_failure_without_log_is_api_error() {
    mock::install();
    let device = first_device();
    let context = crate::create_context(None, &[device]).unwrap();
    let program = crate::create_program_with_source(*context,
        &[CString::new("kernel void k() {}").unwrap()]).unwrap();

    mock::fail_next("clBuildProgram", ffi::CL_BUILD_PROGRAM_FAILURE);
    let err = crate::build_program(*program, Some(&[device][..]), &CString::new("").unwrap())
        .unwrap_err();
    assert_eq!(err.api_status(), Some(Status::CL_BUILD_PROGRAM_FAILURE));

    match crate::program_build_err(*program, &[]) {
        Err(ProgramBuildError::DeviceListEmpty) => (),
        other => panic!("unexpected result: {:?}", other),
    }
}

#[test]
fn build_failure_with_empty_device_list_collects_logs() {
    mock::install();
    let context = crate::create_context(None, &[first_device()]).unwrap();
    let program = crate::create_program_with_source(*context,
        &[CString::new("kernel void broken() { nope; }").unwrap()]).unwrap();

    mock::with(|s| s.build_log = "error: expected ';'".to_owned());
    mock::fail_next("clBuildProgram", ffi::CL_BUILD_PROGRAM_FAILURE);

    // An empty list builds for every device, so every device is asked.
    match crate::build_program(*program, Some(&[][..]), &CString::new("").unwrap()) {
        Err(Error::ProgramBuild(ProgramBuildError::BuildLog(log))) => {
            assert!(log.contains("expected ';'"));
            assert!(log.contains(&format!("{:#x}", mock::device_addr(0, 0))));
            assert!(log.contains(&format!("{:#x}", mock::device_addr(0, 1))));
        },
        other => panic!("unexpected result: {:?}", other),
    }
    mock::with(|s| assert!(s.last_build_devices.is_empty()));
}

#[test]
fn single_character_build_log_is_kept() {
    mock::install();
    let device = first_device();
    let program = crate::ComputeProgram::from_value(0x9000);
    mock::with(|s| {
        s.build_log = "E".to_owned();
        s.bare_build_log = true;
    });

    match crate::program_build_err(program, &[device]) {
        Err(ProgramBuildError::BuildLog(log)) => assert_eq!(log, "E"),
        other => panic!("unexpected result: {:?}", other),
    }

    mock::with(|s| s.build_log = " \n".to_owned());
    assert!(crate::program_build_err(program, &[device]).is_ok());
}

#[test]
fn kernel_args() {
    mock::install();
    let device = first_device();
    let context = crate::create_context(None, &[device]).unwrap();
    let program = crate::create_program_with_source(*context,
        &[CString::new("kernel void k() {}").unwrap()]).unwrap();
    let kernel = crate::create_kernel(*program, "k").unwrap();
    let buffer = unsafe {
        crate::create_buffer::<f32>(*context, MemFlags::default(), 4, None).unwrap()
    };

    let last_arg = || mock::with(|s| s.last_kernel_arg.clone()).unwrap();

    crate::set_kernel_arg(*kernel, 0, KernelArg::<f32>::Mem(*buffer)).unwrap();
    assert_eq!(last_arg(), (0, std::mem::size_of::<usize>(),
        util::into_bytes(buffer.value())));

    crate::set_kernel_arg(*kernel, 1, KernelArg::<f32>::MemNull).unwrap();
    assert_eq!(last_arg(), (1, std::mem::size_of::<usize>(), util::into_bytes(0usize)));

    crate::set_kernel_arg(*kernel, 2, KernelArg::Scalar(2.5f32)).unwrap();
    assert_eq!(last_arg(), (2, 4, util::into_bytes(2.5f32)));

    crate::set_kernel_arg(*kernel, 3, KernelArg::Vector(&[1u16, 2, 3, 4][..])).unwrap();
    assert_eq!(last_arg(), (3, 8, util::into_bytes([1u16, 2, 3, 4])));

    crate::set_kernel_arg(*kernel, 4, KernelArg::<f64>::Local(16)).unwrap();
    assert_eq!(last_arg(), (4, 128, vec![]));

    mock::fail_next("clSetKernelArg", ffi::CL_INVALID_ARG_INDEX);
    let err = crate::set_kernel_arg(*kernel, 9, KernelArg::Scalar(1u32)).unwrap_err();
    assert_eq!(err.api_status(), Some(Status::CL_INVALID_ARG_INDEX));
}

#[test]
fn enqueue_commands() {
    mock::install();
    let device = first_device();
    let context = crate::create_context(None, &[device]).unwrap();
    let queue = crate::create_command_queue(*context, device, None).unwrap();
    let buffer = unsafe {
        crate::create_buffer::<u32>(*context, MemFlags::default(), 16, None).unwrap()
    };
    let program = crate::create_program_with_source(*context,
        &[CString::new("kernel void k() {}").unwrap()]).unwrap();
    let kernel = crate::create_kernel(*program, "k").unwrap();

    let data = [7u32; 8];
    let mut write_event = ComputeEvent::ZERO;
    unsafe {
        crate::enqueue_write_buffer(*queue, *buffer, false, 4, &data[..], &[],
            Some(&mut write_event)).unwrap();
    }
    mock::with(|s| {
        let transfer = s.last_transfer.clone().unwrap();
        assert_eq!((transfer.blocking, transfer.offset, transfer.size), (false, 16, 32));
    });
    let write_event = unsafe { crate::Retained::from_created(write_event) };

    let mut out = [0u32; 8];
    unsafe {
        crate::enqueue_read_buffer(*queue, *buffer, true, 0, &mut out[..], &[*write_event], None)
            .unwrap();
    }
    mock::with(|s| assert_eq!(s.last_wait_list, vec![write_event.value()]));

    unsafe {
        crate::enqueue_kernel(*queue, *kernel, 1, None, &[128, 0, 0], Some([16, 0, 0]), &[],
            None).unwrap();
    }
    mock::with(|s| assert_eq!(s.last_work, Some((1, None, vec![128], Some(vec![16])))));

    mock::fail_next("clEnqueueNDRangeKernel", ffi::CL_INVALID_WORK_GROUP_SIZE);
    let err = unsafe {
        crate::enqueue_kernel(*queue, *kernel, 1, None, &[100, 0, 0], Some([16, 0, 0]), &[],
            None)
    }.unwrap_err();
    assert_eq!(err.api_status(), Some(Status::CL_INVALID_WORK_GROUP_SIZE));
    assert!(err.to_string().contains("(\"k\")"));

    crate::flush(*queue).unwrap();
    crate::finish(*queue).unwrap();
}

#[test]
fn user_events() {
    mock::install();
    let context = crate::create_context(None, &[first_device()]).unwrap();
    let event = crate::create_user_event(*context).unwrap();

    assert_eq!(crate::event_status(*event).unwrap(), CommandExecutionStatus::Submitted);
    assert!(!crate::event_is_complete(*event).unwrap());

    crate::set_user_event_status(*event, CommandExecutionStatus::Complete).unwrap();
    assert!(crate::event_is_complete(*event).unwrap());

    crate::wait_for_events(&[*event]).unwrap();
    mock::with(|s| assert_eq!(s.last_wait_list, vec![event.value()]));

    let start: u64 = util::bytes_to(&crate::get_event_profiling_info(*event,
        ProfilingInfo::Start).unwrap()).unwrap();
    assert_eq!(start, 300);
}

#[test]
fn aborted_event_is_an_error() {
    mock::install();
    let context = crate::create_context(None, &[first_device()]).unwrap();
    let event = crate::create_user_event(*context).unwrap();
    mock::with(|s| s.event_status = ffi::CL_OUT_OF_RESOURCES);

    let err = crate::event_status(*event).unwrap_err();
    assert_eq!(err.api_status(), Some(Status::CL_OUT_OF_RESOURCES));
}

#[test]
fn unknown_event_status_is_not_an_abort() {
    mock::install();
    let context = crate::create_context(None, &[first_device()]).unwrap();
    let event = crate::create_user_event(*context).unwrap();
    mock::with(|s| s.event_status = 7);

    match crate::event_status(*event) {
        Err(Error::Wrapper(ApiWrapperError::UnknownExecutionStatus(7))) => (),
        other => panic!("unexpected result: {:?}", other),
    }
}

#[test]
fn device_type_env_names() {
    assert_eq!(DeviceType::from_env_name("gpu"), Some(DeviceType::GPU));
    assert_eq!(DeviceType::from_env_name(" Accelerator "), Some(DeviceType::ACCELERATOR));
    assert_eq!(DeviceType::from_env_name("ALL"), Some(DeviceType::ALL));
    assert_eq!(DeviceType::from_env_name("toaster"), None);
    // The flag-name lookup from bitflags is exact.
    assert_eq!(DeviceType::from_name("CPU"), Some(DeviceType::CPU));
    assert_eq!(DeviceType::from_name("cpu"), None);
}

#[test]
fn empty_wait_list_skips_the_call() {
    mock::install();
    crate::wait_for_events(&[]).unwrap();
    assert_eq!(mock::call_count("clWaitForEvents"), 0);
}

#[test]
fn info_decoding_errors() {
    let err = util::bytes_to::<u32>(&[0u8; 3]).unwrap_err();
    assert!(matches!(err, util::UtilError::BytesTo { src: 3, dst: 4 }));

    let err = util::bytes_to_vec::<u64>(&[0u8; 12]).unwrap_err();
    assert!(matches!(err, util::UtilError::BytesToVec { src: 12, dst: 8 }));

    assert_eq!(util::bytes_into_string(b" name \0".to_vec()).unwrap(), "name");
    assert!(util::bytes_into_string(vec![0xff, 0xfe]).is_err());
    assert_eq!(util::bytes_to_vec::<u16>(&util::into_bytes([5u16, 6])).unwrap(), vec![5, 6]);
}

// Environment variables are process-wide, so every test that touches them
// lives here.
#[test]
fn defaults_from_environment() {
    mock::install();

    env::remove_var(crate::DEFAULT_DEVICE_TYPE_ENV_VAR);
    assert_eq!(crate::default_device_type().unwrap(), DeviceType::ALL);
    env::set_var(crate::DEFAULT_DEVICE_TYPE_ENV_VAR, "gpu");
    assert_eq!(crate::default_device_type().unwrap(), DeviceType::GPU);
    env::set_var(crate::DEFAULT_DEVICE_TYPE_ENV_VAR, "toaster");
    match crate::default_device_type() {
        Err(Error::Wrapper(ApiWrapperError::InvalidDefaultDeviceType(s))) =>
            assert_eq!(s, "toaster"),
        other => panic!("unexpected result: {:?}", other),
    }
    env::remove_var(crate::DEFAULT_DEVICE_TYPE_ENV_VAR);

    env::remove_var(crate::DEFAULT_PLATFORM_IDX_ENV_VAR);
    assert_eq!(crate::default_platform_idx(), 0);
    assert_eq!(crate::default_platform().unwrap().value(), mock::platform_addr(0));
    env::set_var(crate::DEFAULT_PLATFORM_IDX_ENV_VAR, "1");
    assert_eq!(crate::default_platform().unwrap().value(), mock::platform_addr(1));
    env::set_var(crate::DEFAULT_PLATFORM_IDX_ENV_VAR, "5");
    match crate::default_platform() {
        Err(Error::Wrapper(ApiWrapperError::PlatformIndexOutOfRange(5, 2))) => (),
        other => panic!("unexpected result: {:?}", other),
    }
    env::remove_var(crate::DEFAULT_PLATFORM_IDX_ENV_VAR);

    env::set_var(crate::api::LIBRARY_ENV_VAR, "/opt/vendor/libOpenCL.so");
    assert_eq!(crate::api::library_candidates(), vec!["/opt/vendor/libOpenCL.so".to_owned()]);
    env::remove_var(crate::api::LIBRARY_ENV_VAR);
    assert!(!crate::api::library_candidates().is_empty());
}
