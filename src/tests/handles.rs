use std::collections::{BTreeSet, HashSet};
use std::mem;
use crate::ffi::c_void;
use crate::{ComputePlatform, ComputeDevice, ComputeContext, CommandQueue, ComputeMemory,
    ComputeProgram, ComputeKernel, ComputeEvent, ComputeSampler, ContextProperty,
    ContextPropertyKey, Status, StatusCode};
use super::random_addrs;

#[test]
fn handles_are_pointer_sized() {
    assert_eq!(mem::size_of::<ComputePlatform>(), mem::size_of::<*mut c_void>());
    assert_eq!(mem::size_of::<ComputeDevice>(), mem::size_of::<*mut c_void>());
    assert_eq!(mem::size_of::<ComputeContext>(), mem::size_of::<*mut c_void>());
    assert_eq!(mem::size_of::<CommandQueue>(), mem::size_of::<*mut c_void>());
    assert_eq!(mem::size_of::<ComputeMemory>(), mem::size_of::<*mut c_void>());
    assert_eq!(mem::size_of::<ComputeProgram>(), mem::size_of::<*mut c_void>());
    assert_eq!(mem::size_of::<ComputeKernel>(), mem::size_of::<*mut c_void>());
    assert_eq!(mem::size_of::<ComputeEvent>(), mem::size_of::<*mut c_void>());
    assert_eq!(mem::size_of::<ComputeSampler>(), mem::size_of::<*mut c_void>());
    assert_eq!(mem::size_of::<ContextProperty>(), 2 * mem::size_of::<isize>());
}

#[test]
fn zero_sentinel() {
    assert!(ComputeContext::ZERO.is_null());
    assert_eq!(ComputeContext::ZERO.value(), 0);
    assert_eq!(ComputeContext::null(), ComputeContext::ZERO);
    assert_eq!(ComputeContext::default(), ComputeContext::ZERO);
    assert_eq!(ComputeEvent::from_value(0), ComputeEvent::ZERO);
    assert!(!ComputeEvent::from_value(0x40).is_null());
}

#[test]
fn value_round_trips_through_raw_pointer() {
    for addr in random_addrs(16) {
        let kernel = ComputeKernel::from_value(addr);
        assert_eq!(kernel.value(), addr);
        assert_eq!(kernel.as_ptr() as usize, addr);
        assert_eq!(ComputeKernel::from_raw(kernel.as_ptr()), kernel);
        assert_eq!(usize::from(kernel), addr);
    }
}

#[test]
fn ordering_follows_address() {
    let addrs = random_addrs(64);
    let mut handles: Vec<ComputeMemory> = addrs.iter().map(|&a| ComputeMemory::from_value(a))
        .collect();
    handles.sort();

    let mut sorted = addrs.clone();
    sorted.sort();
    assert_eq!(handles.iter().map(|h| h.value()).collect::<Vec<_>>(), sorted);

    assert!(ComputeMemory::ZERO < ComputeMemory::from_value(1));
}

#[test]
fn equal_addresses_hash_together() {
    let addrs = random_addrs(32);
    let mut set = HashSet::new();
    let mut tree = BTreeSet::new();

    for &addr in addrs.iter().chain(addrs.iter()) {
        set.insert(ComputeProgram::from_value(addr));
        tree.insert(ComputeProgram::from_value(addr));
    }

    assert_eq!(set.len(), addrs.len());
    assert_eq!(tree.len(), addrs.len());
    assert!(set.contains(&ComputeProgram::from_value(addrs[7])));
}

#[test]
fn formatting() {
    let queue = CommandQueue::from_value(0xbeef0);
    assert_eq!(format!("{:?}", queue), "CommandQueue(0xbeef0)");
    assert_eq!(format!("{}", queue), "0xbeef0");
    assert_eq!(format!("{:?}", ComputeSampler::ZERO), "ComputeSampler(0x0)");
}

#[test]
fn handles_cross_threads() {
    let device = ComputeDevice::from_value(0x1230);
    let value = std::thread::spawn(move || device.value()).join().unwrap();
    assert_eq!(value, 0x1230);
}

#[test]
fn context_property_identity() {
    let platform = ComputePlatform::from_value(0x5550);
    let prop = ContextProperty::platform(platform);

    assert_eq!(prop.known_key(), Some(ContextPropertyKey::Platform));
    assert_eq!(prop.value(), 0x5550);
    assert_eq!(prop, ContextProperty::new(ContextPropertyKey::Platform as isize, 0x5550));
    assert!(ContextProperty::ZERO.is_terminator());
    assert_eq!(ContextProperty::default(), ContextProperty::ZERO);

    // Unknown vendor keys are carried untouched.
    let vendor = ContextProperty::new(0x4242, -7);
    assert_eq!(vendor.known_key(), None);
    assert_eq!(vendor.key(), 0x4242);
    assert!(ContextProperty::new(1, 0) < ContextProperty::new(1, 1));
    assert!(ContextProperty::new(1, 9) < ContextProperty::new(2, 0));
}

#[test]
fn status_codes_are_kept_verbatim() {
    assert!(StatusCode::SUCCESS.is_success());
    assert_eq!(StatusCode(-5), Status::CL_OUT_OF_RESOURCES);
    assert_eq!(StatusCode(-5).status(), Some(Status::CL_OUT_OF_RESOURCES));
    assert_eq!(StatusCode::from(Status::CL_INVALID_VALUE).raw(), -30);

    let vendor = StatusCode(-9999);
    assert_eq!(vendor.status(), None);
    assert_eq!(vendor.raw(), -9999);
    assert_eq!(vendor.to_string(), "unknown status (-9999)");

    let err = StatusCode(-30).check("clFoo").unwrap_err();
    assert_eq!(err.api_status(), Some(Status::CL_INVALID_VALUE));
    assert!(StatusCode::SUCCESS.check("clFoo").is_ok());
}
