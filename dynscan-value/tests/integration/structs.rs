//! Struct decoding: key lookup, skipped fields, nesting.

use dynscan::Scan;
use dynscan_testhelpers::test;
use dynscan_value::{DecodeErrorKind, Value, decode, from_value, value};

#[allow(non_snake_case)]
#[derive(Scan, Debug, PartialEq)]
struct Inner {
    #[scan(tag = "str")]
    Strin: String,
    Iin: i64,
}

#[allow(non_snake_case)]
#[derive(Scan, Debug, PartialEq)]
struct Outer {
    Inner: Inner,
    Str: String,
    I: i32,
    Slc: Vec<i32>,
}

#[test]
fn nested_struct_with_tags_and_lowercase_fallback() {
    let v = value!({
        "inner": {"str": "hello", "iin": 42},
        "str": "outer",
        "i": 7,
        "slc": [1, 2, 3]
    });
    let outer: Outer = from_value(&v).unwrap();
    assert_eq!(
        outer,
        Outer {
            Inner: Inner {
                Strin: "hello".into(),
                Iin: 42,
            },
            Str: "outer".into(),
            I: 7,
            Slc: vec![1, 2, 3],
        }
    );
}

#[test]
fn tagged_field_only_consults_its_tag() {
    let v = value!({"Strin": "by name", "strin": "lowercase", "Iin": 1});
    let inner: Inner = from_value(&v).unwrap();
    assert_eq!(inner.Strin, "");
    assert_eq!(inner.Iin, 1);
}

#[test]
fn exact_name_wins_over_lowercase() {
    let inner: Inner = from_value(&value!({"Iin": 1, "iin": 2})).unwrap();
    assert_eq!(inner.Iin, 1);
}

#[derive(Scan, Debug, PartialEq)]
struct Session {
    user: String,
    #[scan(skip)]
    token: String,
    #[scan(tag = "-")]
    retries: u32,
}

#[test]
fn skipped_fields_are_never_written() {
    let mut session = Session {
        user: String::new(),
        token: "secret".into(),
        retries: 3,
    };
    decode(
        &value!({"user": "amy", "token": "leaked", "retries": 99, "-": 100}),
        &mut session,
    )
    .unwrap();
    assert_eq!(
        session,
        Session {
            user: "amy".into(),
            token: "secret".into(),
            retries: 3,
        }
    );
}

#[test]
fn missing_and_unknown_keys() {
    let mut inner = Inner {
        Strin: "kept".into(),
        Iin: 9,
    };
    decode(&value!({"unrelated": [1, 2], "other": null}), &mut inner).unwrap();
    assert_eq!(inner.Strin, "kept");
    assert_eq!(inner.Iin, 9);
}

#[test]
fn decoding_twice_gives_the_same_result() {
    let v = value!({
        "inner": {"str": "a", "Iin": -3},
        "Str": "b",
        "I": 1,
        "Slc": [4, 5]
    });
    let mut outer = Outer::zero();
    decode(&v, &mut outer).unwrap();
    let once = from_value::<Outer>(&v).unwrap();
    decode(&v, &mut outer).unwrap();
    assert_eq!(outer, once);
    assert_eq!(outer.Slc, [4, 5]);
}

#[test]
fn non_object_into_struct_is_a_mismatch() {
    let err = from_value::<Inner>(&value!([1, 2])).unwrap_err();
    assert!(matches!(
        err.kind,
        DecodeErrorKind::ShapeMismatch {
            got: dynscan_value::ValueType::Array,
            ..
        }
    ));
    insta::assert_snapshot!(err, @"shape mismatch: Inner wants an object, got array");
}

#[test]
fn error_path_names_the_matched_key() {
    let v = value!({"inner": {"str": 5}});
    let err = from_value::<Outer>(&v).unwrap_err();
    assert_eq!(err.path_string(), ".inner.str");
    insta::assert_snapshot!(err, @"at .inner.str: shape mismatch: String wants a string, got number `5`");
}

#[test]
fn error_stops_at_the_first_failing_field() {
    let mut outer = Outer::zero();
    let v = value!({"Inner": {"Iin": 1}, "Str": false, "I": 8});
    assert!(decode(&v, &mut outer).is_err());
    assert_eq!(outer.Inner.Iin, 1);
    assert_eq!(outer.I, 0);
}

#[derive(Scan, Debug, PartialEq)]
struct Node {
    value: i32,
    next: Option<Box<Node>>,
}

#[test]
fn recursive_types_decode() {
    let v = value!({"value": 1, "next": {"value": 2, "next": {"value": 3, "next": null}}});
    let node: Node = from_value(&v).unwrap();
    let mut values = Vec::new();
    let mut cursor = Some(&node);
    while let Some(n) = cursor {
        values.push(n.value);
        cursor = n.next.as_deref();
    }
    assert_eq!(values, [1, 2, 3]);
}

#[test]
fn null_clears_an_option_field() {
    let mut node = Node {
        value: 1,
        next: Some(Box::new(Node {
            value: 2,
            next: None,
        })),
    };
    decode(&value!({"next": null}), &mut node).unwrap();
    assert_eq!(node.next, None);
    assert_eq!(node.value, 1);
}

#[test]
fn null_under_the_name_falls_back_to_lowercase() {
    let inner: Inner = from_value(&value!({"Iin": null, "iin": 7})).unwrap();
    assert_eq!(inner.Iin, 7);
}

#[test]
fn null_into_a_plain_field_is_like_a_missing_key() {
    let mut inner = Inner {
        Strin: "kept".into(),
        Iin: 9,
    };
    decode(&value!({"Iin": null}), &mut inner).unwrap();
    assert_eq!(inner.Iin, 9);

    let inner: Inner = from_value(&value!({"Iin": null, "iin": null})).unwrap();
    assert_eq!(inner.Iin, 0);
}

#[test]
fn null_under_a_tag_is_still_a_mismatch() {
    let err = from_value::<Inner>(&value!({"str": null})).unwrap_err();
    assert_eq!(err.path_string(), ".str");
    assert!(matches!(
        err.kind,
        DecodeErrorKind::ShapeMismatch { value: Value::Null, .. }
    ));
}
