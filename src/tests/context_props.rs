//! Context property lists, both standalone and as reported back by a
//! context.

use crate::{ComputePlatform, ComputeDevice, ContextProperties, ContextProperty,
    ContextPropertyKey, Error, ApiWrapperError};
use crate::ffi;
use super::mock;

#[test]
fn raw_list_is_zero_terminated() {
    let platform = ComputePlatform::from_value(0x1110);
    let props = ContextProperties::new().platform(platform).interop_user_sync(true);

    assert_eq!(props.to_raw(), vec![
        ffi::CL_CONTEXT_PLATFORM, 0x1110,
        ffi::CL_CONTEXT_INTEROP_USER_SYNC, 1,
        0,
    ]);
    assert_eq!(ContextProperties::new().to_raw(), vec![0]);
}

#[test]
fn setting_a_key_twice_replaces_it() {
    let first = ComputePlatform::from_value(0x10);
    let second = ComputePlatform::from_value(0x20);
    let props = ContextProperties::new()
        .platform(first)
        .interop_user_sync(false)
        .platform(second);

    assert_eq!(props.len(), 2);
    assert_eq!(props.get_platform(), Some(second));
    // Position of the first insertion is kept.
    assert_eq!(props.iter().next().and_then(|p| p.known_key()),
        Some(ContextPropertyKey::Platform));
}

#[test]
fn terminator_is_never_stored() {
    let mut props = ContextProperties::new();
    props.set(ContextProperty::ZERO);
    assert!(props.is_empty());
    assert_eq!(props.get_platform(), None);
}

#[test]
fn vendor_keys_survive_a_round_trip() {
    let raw = [0x4000, -3, ffi::CL_CONTEXT_PLATFORM, 0x2220, 0];
    let props = ContextProperties::from_raw(&raw).unwrap();

    assert_eq!(props.get(0x4000), Some(ContextProperty::new(0x4000, -3)));
    assert_eq!(props.get_platform(), Some(ComputePlatform::from_value(0x2220)));
    assert_eq!(props.to_raw(), raw.to_vec());
    assert_eq!((&props).into_iter().count(), 2);
}

#[test]
fn from_raw_stops_at_terminator() {
    let props = ContextProperties::from_raw(&[ffi::CL_CONTEXT_INTEROP_USER_SYNC, 1, 0, 77, 5])
        .unwrap();
    assert_eq!(props.len(), 1);

    // A missing terminator is tolerated.
    let props = ContextProperties::from_raw(&[ffi::CL_CONTEXT_INTEROP_USER_SYNC, 0]).unwrap();
    assert_eq!(props.len(), 1);

    assert!(ContextProperties::from_raw(&[]).unwrap().is_empty());
}

#[test]
fn from_raw_rejects_dangling_key() {
    match ContextProperties::from_raw(&[ffi::CL_CONTEXT_PLATFORM]) {
        Err(Error::Wrapper(ApiWrapperError::MalformedContextProperties(_))) => (),
        other => panic!("unexpected result: {:?}", other),
    }
}

#[test]
fn from_vec_deduplicates() {
    let props = ContextProperties::from(vec![
        ContextProperty::interop_user_sync(true),
        ContextProperty::ZERO,
        ContextProperty::interop_user_sync(false),
    ]);
    assert_eq!(props.len(), 1);
    assert_eq!(props.get(ffi::CL_CONTEXT_INTEROP_USER_SYNC).map(|p| p.value()), Some(0));
}

#[test]
fn context_reports_its_properties() {
    mock::install();
    let platform = crate::get_platform_ids().unwrap()[0];
    let device = ComputeDevice::from_value(mock::device_addr(0, 0));
    let props = ContextProperties::new().platform(platform);

    let context = crate::create_context(Some(&props), &[device]).unwrap();
    let reported = crate::get_context_properties(*context).unwrap();

    assert_eq!(reported, props);
    assert_eq!(reported.get_platform(), Some(platform));
}
