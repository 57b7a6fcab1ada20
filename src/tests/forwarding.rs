use std::ffi::CString;
use std::ptr;
use std::sync::atomic::{AtomicUsize, Ordering};
use crate::ffi::{self, c_void, cl_int, cl_uint, size_t};
use crate::{api, Error, ComputePlatform, ComputeDevice, ComputeContext, ComputeEvent,
    ComputeMemory, CommandQueue, ComputeKernel, ComputeProgram, DeviceType, MapFlags, MemFlags,
    Status, StatusCode, CommandQueueProperties};
use super::mock;

#[test]
fn table_is_installed() {
    mock::install();
    assert!(api::is_initialized());
    assert!(!api::install(mock::table()));
    assert!(api::get().unwrap().clGetPlatformIDs.is_some());
}

#[test]
fn count_query_passes_null_list() {
    mock::install();
    let mut num: cl_uint = 0;
    let status = unsafe { ComputePlatform::get_ids(&mut [], Some(&mut num)).unwrap() };

    assert!(status.is_success());
    assert_eq!(num as usize, mock::PLATFORM_COUNT);
    assert_eq!(mock::calls(), vec!["clGetPlatformIDs"]);
}

#[test]
fn list_query_fills_handles() {
    mock::install();
    let mut platforms = [ComputePlatform::ZERO; 4];
    let status = unsafe { ComputePlatform::get_ids(&mut platforms, None).unwrap() };

    assert_eq!(status, Status::CL_SUCCESS);
    assert_eq!(platforms[0].value(), mock::platform_addr(0));
    assert_eq!(platforms[1].value(), mock::platform_addr(1));
    assert!(platforms[2].is_null());
}

#[test]
fn status_returned_untouched() {
    mock::install();

    // A code OpenCL does not define comes through unchanged.
    mock::fail_next("clGetPlatformIDs", -9999);
    let status = unsafe { ComputePlatform::get_ids(&mut [], None).unwrap() };
    assert_eq!(status, StatusCode(-9999));
    assert_eq!(status.status(), None);

    let status = unsafe { ComputePlatform::get_ids(&mut [], None).unwrap() };
    assert!(status.is_success());
}

#[test]
fn device_type_bits_forwarded() {
    mock::install();
    let platform = ComputePlatform::from_value(mock::platform_addr(1));
    let mut devices = [ComputeDevice::ZERO; 2];
    let mut available: cl_uint = 0;

    let status = unsafe {
        platform.get_device_ids(DeviceType::GPU | DeviceType::CPU, &mut devices,
            Some(&mut available)).unwrap()
    };

    assert!(status.is_success());
    assert_eq!(available as usize, mock::DEVICES_PER_PLATFORM);
    assert_eq!(devices[1].value(), mock::device_addr(1, 1));
    mock::with(|s| {
        assert_eq!(s.last_device_type, ffi::CL_DEVICE_TYPE_GPU | ffi::CL_DEVICE_TYPE_CPU);
        assert_eq!(s.last_num_entries, 2);
    });
}

#[test]
fn invalid_handle_reports_native_status() {
    mock::install();
    let bogus = ComputePlatform::from_value(0xdead0);
    let mut size: size_t = 0;
    let status = unsafe {
        bogus.get_info(ffi::CL_PLATFORM_NAME, &mut [], Some(&mut size)).unwrap()
    };
    assert_eq!(status, Status::CL_INVALID_PLATFORM);
    assert_eq!(size, 0);
}

#[test]
fn info_size_then_value() {
    mock::install();
    let platform = ComputePlatform::from_value(mock::platform_addr(0));
    let mut size: size_t = 0;

    unsafe {
        assert!(platform.get_info(ffi::CL_PLATFORM_NAME, &mut [], Some(&mut size))
            .unwrap().is_success());
        assert_eq!(size, mock::PLATFORM_NAME.len() + 1);

        let mut name = vec![0u8; size];
        assert!(platform.get_info(ffi::CL_PLATFORM_NAME, &mut name, None)
            .unwrap().is_success());
        assert_eq!(&name[..size - 1], mock::PLATFORM_NAME.as_bytes());

        let mut short = [0u8; 2];
        assert_eq!(platform.get_info(ffi::CL_PLATFORM_NAME, &mut short, None).unwrap(),
            Status::CL_INVALID_VALUE);
    }
}

#[test]
fn create_reports_errcode_with_null_handle() {
    mock::install();
    let device = ComputeDevice::from_value(mock::device_addr(0, 0));

    mock::fail_next("clCreateContext", ffi::CL_OUT_OF_HOST_MEMORY);
    let (context, status) = unsafe {
        ComputeContext::create(None, &[device], None, ptr::null_mut()).unwrap()
    };
    assert!(context.is_null());
    assert_eq!(status, Status::CL_OUT_OF_HOST_MEMORY);

    let (context, status) = unsafe {
        ComputeContext::create(None, &[device], None, ptr::null_mut()).unwrap()
    };
    assert!(status.is_success());
    assert!(!context.is_null());
    assert_eq!(mock::ref_count(context.value()), 1);
    unsafe { assert!(context.release().unwrap().is_success()); }
}

#[test]
fn empty_device_list_passed_as_null() {
    mock::install();
    let (context, status) = unsafe {
        ComputeContext::create(None, &[], None, ptr::null_mut()).unwrap()
    };
    assert!(context.is_null());
    assert_eq!(status, Status::CL_INVALID_VALUE);
}

#[test]
fn missing_entry_point() {
    mock::install();
    let res = unsafe {
        ComputeContext::create_from_type(None, DeviceType::ALL, None, ptr::null_mut())
    };
    match res {
        Err(Error::EntryPointUnavailable(name)) => assert_eq!(name, "clCreateContextFromType"),
        other => panic!("unexpected result: {:?}", other.map(|(c, s)| (c, s.raw()))),
    }
    // Nothing reached the runtime.
    assert!(mock::calls().is_empty());
}

#[test]
fn retain_release_on_raw_handles() {
    mock::install();
    let device = ComputeDevice::from_value(mock::device_addr(0, 0));
    let (context, _) = unsafe {
        ComputeContext::create(None, &[device], None, ptr::null_mut()).unwrap()
    };
    let (queue, status) = unsafe {
        context.create_command_queue(device, CommandQueueProperties::empty()).unwrap()
    };
    assert!(status.is_success());

    unsafe {
        assert!(queue.retain().unwrap().is_success());
        assert_eq!(mock::ref_count(queue.value()), 2);
        assert!(queue.release().unwrap().is_success());
        assert!(queue.release().unwrap().is_success());
        assert_eq!(mock::ref_count(queue.value()), 0);

        // The runtime decides what releasing a dead object means.
        assert_eq!(queue.release().unwrap(), Status::CL_INVALID_COMMAND_QUEUE);
        assert_eq!(CommandQueue::ZERO.flush().unwrap(), Status::CL_INVALID_COMMAND_QUEUE);
    }
}

#[test]
fn host_slices_forwarded_as_byte_size_and_pointer() {
    mock::install();
    let queue = CommandQueue::from_value(0x7000);
    let buffer = ComputeMemory::from_value(0x7040);
    let data = [1.0f32; 24];
    let mut event = ComputeEvent::ZERO;

    let status = unsafe {
        queue.enqueue_write_buffer(buffer, false, 16, &data[..], &[], Some(&mut event)).unwrap()
    };
    assert!(status.is_success());
    assert!(!event.is_null());

    mock::with(|s| {
        assert_eq!(s.last_transfer, Some(mock::Transfer {
            blocking: false,
            offset: 16,
            size: 24 * 4,
            host_ptr: data.as_ptr() as usize,
        }));
        assert!(s.last_wait_list.is_empty());
    });

    let mut out = vec![0u16; 5];
    let status = unsafe {
        queue.enqueue_read_buffer(buffer, true, 0, &mut out[..], &[event], None).unwrap()
    };
    assert!(status.is_success());
    assert!(out.iter().all(|&v| v == 0xABAB));
    mock::with(|s| {
        assert_eq!(s.last_transfer.as_ref().map(|t| (t.blocking, t.size)), Some((true, 10)));
        assert_eq!(s.last_wait_list, vec![event.value()]);
    });
}

#[test]
fn nd_range_optional_arrays() {
    mock::install();
    let queue = CommandQueue::from_value(0x7000);
    let kernel = ComputeKernel::from_value(0x7080);

    let status = unsafe {
        queue.enqueue_nd_range_kernel(kernel, 2, None, &[64, 32], Some(&[8, 8][..]), &[], None)
            .unwrap()
    };
    assert!(status.is_success());
    mock::with(|s| {
        assert_eq!(s.last_work, Some((2, None, vec![64, 32], Some(vec![8, 8]))));
    });
}

#[test]
fn build_options_forwarded() {
    mock::install();
    let program = ComputeProgram::from_value(0x9000);
    let device = ComputeDevice::from_value(mock::device_addr(0, 2));
    let options = CString::new("-cl-fast-relaxed-math").unwrap();

    let status = unsafe {
        program.build(&[device], Some(options.as_c_str()), None, ptr::null_mut()).unwrap()
    };
    assert!(status.is_success());
    mock::with(|s| {
        assert_eq!(s.last_build_options.as_deref(), Some("-cl-fast-relaxed-math"));
        assert_eq!(s.last_build_devices, vec![device.value()]);
    });

    unsafe { program.build(&[], None, None, ptr::null_mut()).unwrap(); }
    mock::with(|s| {
        assert_eq!(s.last_build_options, None);
        assert!(s.last_build_devices.is_empty());
    });
}

#[test]
fn mem_flags_reach_runtime() {
    mock::install();
    let context = ComputeContext::from_value(0x6000);
    let (buffer, status) = unsafe {
        context.create_buffer(MemFlags::READ_ONLY | MemFlags::ALLOC_HOST_PTR, 256,
            ptr::null_mut()).unwrap()
    };
    assert!(status.is_success());
    assert!(!buffer.is_null());
    mock::with(|s| assert_eq!(s.last_buffer_size, 256));

    let (buffer, status) = unsafe {
        context.create_buffer(MemFlags::default(), 0, ptr::null_mut()).unwrap()
    };
    assert!(buffer.is_null());
    assert_eq!(status, Status::CL_INVALID_BUFFER_SIZE);
}

extern "system" fn count_event(_event: ffi::cl_event, _status: cl_int, user_data: *mut c_void) {
    unsafe { (*(user_data as *const AtomicUsize)).fetch_add(1, Ordering::SeqCst); }
}

extern "system" fn count_mem(_mem: ffi::cl_mem, user_data: *mut c_void) {
    unsafe { (*(user_data as *const AtomicUsize)).fetch_add(1, Ordering::SeqCst); }
}

#[cfg(feature = "opencl_version_1_2")]
extern "system" fn count_program(_program: ffi::cl_program, user_data: *mut c_void) {
    unsafe { (*(user_data as *const AtomicUsize)).fetch_add(1, Ordering::SeqCst); }
}

extern "system" fn mark_args(args: *mut c_void) {
    unsafe { *(args as *mut u8) = 0x5A; }
}

fn hits_ptr(hits: &AtomicUsize) -> *mut c_void {
    hits as *const AtomicUsize as *mut c_void
}

#[test]
fn program_binaries_fill_per_device_status() {
    mock::install();
    let context = ComputeContext::from_value(0x6000);
    let devices = [ComputeDevice::from_value(mock::device_addr(0, 0)),
        ComputeDevice::from_value(mock::device_addr(0, 1))];
    let binary = [0x7fu8, b'E', b'L', b'F'];
    let lengths = [binary.len(), 0];
    let binaries = [binary.as_ptr(), ptr::null()];
    let mut binary_status: [cl_int; 2] = [1, 1];

    let (program, status) = unsafe {
        context.create_program_with_binary(&devices, &lengths, &binaries,
            Some(&mut binary_status[..])).unwrap()
    };
    assert!(program.is_null());
    assert_eq!(status, Status::CL_INVALID_BINARY);
    assert_eq!(binary_status, [ffi::CL_SUCCESS, ffi::CL_INVALID_BINARY]);
    mock::with(|s| {
        assert_eq!(s.last_args, vec![binary_status.as_ptr() as usize]);
        assert_eq!(s.last_lists, vec![
            vec![devices[0].value(), devices[1].value()],
            vec![4, 0],
            vec![binary.as_ptr() as usize, 0],
        ]);
    });

    // No status array: NULL goes through.
    let (program, status) = unsafe {
        context.create_program_with_binary(&devices[..1], &lengths[..1], &binaries[..1], None)
            .unwrap()
    };
    assert!(status.is_success());
    assert!(!program.is_null());
    mock::with(|s| assert_eq!(s.last_args, vec![0]));
}

#[cfg(feature = "opencl_version_1_2")]
#[test]
fn compile_forwards_headers_and_names() {
    mock::install();
    let program = ComputeProgram::from_value(0x9000);
    let device = ComputeDevice::from_value(mock::device_addr(1, 0));
    let headers = [ComputeProgram::from_value(0x9040), ComputeProgram::from_value(0x9080)];
    let names = [CString::new("common.h").unwrap(), CString::new("math/vec.h").unwrap()];
    let name_ptrs: Vec<_> = names.iter().map(|n| n.as_ptr()).collect();
    let options = CString::new("-I include").unwrap();
    let hits = AtomicUsize::new(0);

    let status = unsafe {
        program.compile(&[device], Some(options.as_c_str()), &headers, &name_ptrs,
            Some(count_program), hits_ptr(&hits)).unwrap()
    };
    assert!(status.is_success());
    assert_eq!(hits.load(Ordering::SeqCst), 1);
    mock::with(|s| {
        assert_eq!(s.last_build_devices, vec![device.value()]);
        assert_eq!(s.last_build_options.as_deref(), Some("-I include"));
        assert_eq!(s.last_lists, vec![vec![0x9040, 0x9080]]);
        assert_eq!(s.last_strings, vec!["common.h".to_owned(), "math/vec.h".to_owned()]);
    });

    // No headers: both arrays go through as NULL.
    unsafe { program.compile(&[], None, &[], &[], None, ptr::null_mut()).unwrap(); }
    mock::with(|s| {
        assert_eq!(s.last_lists, vec![Vec::<usize>::new()]);
        assert!(s.last_strings.is_empty());
        assert_eq!(s.last_build_options, None);
    });
}

#[cfg(feature = "opencl_version_1_2")]
#[test]
fn link_program_forwards_inputs() {
    mock::install();
    let context = ComputeContext::from_value(0x6000);
    let inputs = [ComputeProgram::from_value(0x9100), ComputeProgram::from_value(0x9140)];
    let hits = AtomicUsize::new(0);

    let (program, status) = unsafe {
        context.link_program(&[], None, &inputs, Some(count_program), hits_ptr(&hits)).unwrap()
    };
    assert!(status.is_success());
    assert!(!program.is_null());
    assert_eq!(hits.load(Ordering::SeqCst), 1);
    mock::with(|s| {
        assert!(s.last_build_devices.is_empty());
        assert_eq!(s.last_lists, vec![vec![0x9100, 0x9140]]);
    });

    let (program, status) = unsafe {
        context.link_program(&[], None, &[], None, ptr::null_mut()).unwrap()
    };
    assert!(program.is_null());
    assert_eq!(status, Status::CL_INVALID_VALUE);
}

#[cfg(feature = "opencl_version_1_2")]
#[test]
fn sub_devices_count_then_fill() {
    mock::install();
    let parent = ComputeDevice::from_value(mock::device_addr(0, 1));
    let props = [ffi::CL_DEVICE_PARTITION_EQUALLY, 2, 0];
    let mut count: cl_uint = 0;

    let status = unsafe {
        parent.create_sub_devices(Some(&props[..]), &mut [], Some(&mut count)).unwrap()
    };
    assert!(status.is_success());
    assert_eq!(count as usize, mock::COMPUTE_UNITS / 2);
    mock::with(|s| assert_eq!(s.last_args, vec![parent.value(), 0]));

    let mut subs = vec![ComputeDevice::ZERO; count as usize];
    let status = unsafe { parent.create_sub_devices(Some(&props[..]), &mut subs, None).unwrap() };
    assert!(status.is_success());
    assert_eq!(subs.last().map(|d| d.value()),
        Some(mock::sub_device_addr(parent.value(), count as usize - 1)));

    // A list too short for the partition is the runtime's call to reject.
    let mut short = [ComputeDevice::ZERO; 1];
    let status = unsafe { parent.create_sub_devices(Some(&props[..]), &mut short, None).unwrap() };
    assert_eq!(status, Status::CL_INVALID_VALUE);

    let status = unsafe { parent.create_sub_devices(None, &mut [], None).unwrap() };
    assert_eq!(status, Status::CL_INVALID_VALUE);
}

#[test]
fn supported_image_formats_count_then_fill() {
    mock::install();
    let context = ComputeContext::from_value(0x6000);
    let mut count: cl_uint = 0;

    let status = unsafe {
        context.get_supported_image_formats(MemFlags::READ_ONLY, ffi::CL_MEM_OBJECT_IMAGE2D,
            &mut [], Some(&mut count)).unwrap()
    };
    assert!(status.is_success());
    assert_eq!(count as usize, mock::IMAGE_FORMATS.len());
    mock::with(|s| assert_eq!(s.last_args,
        vec![ffi::CL_MEM_READ_ONLY as usize, ffi::CL_MEM_OBJECT_IMAGE2D as usize, 0]));

    let mut formats = vec![ffi::cl_image_format::default(); count as usize];
    unsafe {
        context.get_supported_image_formats(MemFlags::READ_ONLY, ffi::CL_MEM_OBJECT_IMAGE2D,
            &mut formats, None).unwrap();
    }
    assert_eq!(formats, mock::IMAGE_FORMATS.to_vec());
}

#[test]
fn rect_and_image_origins_forwarded() {
    mock::install();
    let queue = CommandQueue::from_value(0x7000);
    let buffer = ComputeMemory::from_value(0x7040);
    let mut out = [0u32; 64];

    let status = unsafe {
        queue.enqueue_read_buffer_rect(buffer, true, &[16, 2, 0], &[0, 1, 0], &[32, 4, 1],
            64, 0, 32, 0, &mut out[..], &[], None).unwrap()
    };
    assert!(status.is_success());
    mock::with(|s| {
        assert_eq!(s.last_lists, vec![vec![16, 2, 0], vec![0, 1, 0], vec![32, 4, 1]]);
        assert_eq!(s.last_args,
            vec![ffi::CL_TRUE as usize, 64, 0, 32, 0, out.as_ptr() as usize]);
    });

    let src = ComputeMemory::from_value(0x7100);
    let dst = ComputeMemory::from_value(0x7140);
    let wait = ComputeEvent::from_value(0x7180);
    let mut event = ComputeEvent::ZERO;
    let status = unsafe {
        queue.enqueue_copy_image(src, dst, &[1, 2, 3], &[4, 5, 6], &[7, 8, 9], &[wait],
            Some(&mut event)).unwrap()
    };
    assert!(status.is_success());
    assert!(!event.is_null());
    mock::with(|s| {
        assert_eq!(s.last_args, vec![src.value(), dst.value()]);
        assert_eq!(s.last_lists, vec![vec![1, 2, 3], vec![4, 5, 6], vec![7, 8, 9]]);
        assert_eq!(s.last_wait_list, vec![wait.value()]);
    });
}

#[test]
fn map_image_writes_pitches() {
    mock::install();
    let queue = CommandQueue::from_value(0x7000);
    let image = ComputeMemory::from_value(0x7200);
    let mut row_pitch: size_t = 0;
    let mut slice_pitch: size_t = 0;

    let (mapped, status) = unsafe {
        queue.enqueue_map_image(image, true, MapFlags::READ, &[0, 0, 0], &[16, 8, 2],
            &mut row_pitch, Some(&mut slice_pitch), &[], None).unwrap()
    };
    assert!(status.is_success());
    assert_eq!(mapped as usize, mock::MAPPED_ADDR);
    assert_eq!(row_pitch, 16 * 4);
    assert_eq!(slice_pitch, 16 * 4 * 8);
    mock::with(|s| {
        assert_eq!(s.last_args[0], ffi::CL_MAP_READ as usize);
        assert_eq!(s.last_lists, vec![vec![0, 0, 0], vec![16, 8, 2]]);
    });

    // 2D images take no slice pitch.
    let (_, status) = unsafe {
        queue.enqueue_map_image(image, false, MapFlags::WRITE, &[0, 0, 0], &[4, 4, 1],
            &mut row_pitch, None, &[], None).unwrap()
    };
    assert!(status.is_success());
    assert_eq!(row_pitch, 16);
    mock::with(|s| assert_eq!(s.last_args, vec![ffi::CL_MAP_WRITE as usize, 0]));
}

#[cfg(feature = "opencl_version_1_2")]
#[test]
fn migrate_mem_objects_list_and_flags() {
    mock::install();
    let queue = CommandQueue::from_value(0x7000);
    let mems = [ComputeMemory::from_value(0x7300), ComputeMemory::from_value(0x7340)];

    let status = unsafe {
        queue.enqueue_migrate_mem_objects(&mems, crate::MemMigrationFlags::HOST, &[], None)
            .unwrap()
    };
    assert!(status.is_success());
    mock::with(|s| {
        assert_eq!(s.last_args, vec![ffi::CL_MIGRATE_MEM_OBJECT_HOST as usize]);
        assert_eq!(s.last_lists, vec![vec![0x7300, 0x7340]]);
    });

    let status = unsafe {
        queue.enqueue_migrate_mem_objects(&[], crate::MemMigrationFlags::empty(), &[], None)
            .unwrap()
    };
    assert_eq!(status, Status::CL_INVALID_VALUE);
}

#[test]
fn native_kernel_mem_locations() {
    mock::install();
    let queue = CommandQueue::from_value(0x7000);
    let mems = [ComputeMemory::from_value(0x7400), ComputeMemory::from_value(0x7440)];
    let mut args = [0u8; 16];
    let base = args.as_mut_ptr() as usize;
    let locs = [base as *const c_void, (base + 8) as *const c_void];

    let status = unsafe {
        queue.enqueue_native_kernel(Some(mark_args), &mut args, &mems, &locs, &[], None).unwrap()
    };
    assert!(status.is_success());
    assert_eq!(args[0], 0x5A);
    mock::with(|s| {
        assert_eq!(s.last_args, vec![base, 16]);
        assert_eq!(s.last_lists, vec![vec![0x7400, 0x7440], vec![base, base + 8]]);
    });
}

#[test]
fn callbacks_receive_user_data() {
    mock::install();
    let hits = AtomicUsize::new(0);
    let event = ComputeEvent::from_value(0x7500);
    let buffer = ComputeMemory::from_value(0x7540);

    unsafe {
        assert!(event.set_callback(ffi::CL_COMPLETE, Some(count_event), hits_ptr(&hits))
            .unwrap().is_success());
        assert!(buffer.set_destructor_callback(Some(count_mem), hits_ptr(&hits))
            .unwrap().is_success());

        // A missing callback is passed as NULL and rejected by the runtime.
        assert_eq!(event.set_callback(ffi::CL_COMPLETE, None, ptr::null_mut()).unwrap(),
            Status::CL_INVALID_VALUE);
    }
    assert_eq!(hits.load(Ordering::SeqCst), 2);
    mock::with(|s| assert_eq!(s.last_args, vec![ffi::CL_COMPLETE as usize]));
}
