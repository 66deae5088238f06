//! Destinations the decoder has no rule for.

use std::collections::HashMap;

use dynscan::Scan;
use dynscan_testhelpers::test;
use dynscan_value::{DecodeErrorKind, decode, from_value, value};

#[derive(Scan)]
struct WithPointer {
    name: String,
    raw: *const u8,
}

#[derive(Scan)]
struct SkipsPointer {
    name: String,
    #[scan(skip)]
    raw: *const u8,
}

#[test]
fn raw_pointer_root_is_rejected() {
    let err = from_value::<*mut u8>(&value!(1)).unwrap_err();
    assert!(matches!(
        err.kind,
        DecodeErrorKind::UnsupportedDestination { .. }
    ));
    insta::assert_snapshot!(err, @"unsupported destination: no decode rule for *mut _");
}

#[test]
fn reachable_pointer_is_rejected_before_any_write() {
    let mut dest = WithPointer {
        name: "before".into(),
        raw: core::ptr::null(),
    };
    // `name` comes first and would decode fine on its own
    let err = decode(&value!({"name": "after"}), &mut dest).unwrap_err();
    assert_eq!(dest.name, "before");
    assert_eq!(err.target_shape.map(|s| s.to_string()).as_deref(), Some("WithPointer"));
    insta::assert_snapshot!(err, @"unsupported destination: no decode rule for *const _ at .raw");
}

#[test]
fn pointer_deep_inside_containers_is_found() {
    let mut dest: Vec<HashMap<String, WithPointer>> = Vec::new();
    let err = decode(&value!([{"a": {"name": "x"}}]), &mut dest).unwrap_err();
    match err.kind {
        DecodeErrorKind::UnsupportedDestination { path, shape } => {
            assert_eq!(path, "[]{}.raw");
            assert_eq!(shape.to_string(), "*const _");
        }
        other => panic!("unexpected error kind: {other:?}"),
    }
    assert!(dest.is_empty());
}

#[test]
fn skipped_pointer_fields_are_fine() {
    let dest: SkipsPointer = from_value(&value!({"name": "ok", "raw": 1})).unwrap();
    assert_eq!(dest.name, "ok");
    assert!(dest.raw.is_null());
}
