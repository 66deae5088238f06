//! Primitive coercion: exact kind matching and numeric narrowing.

use dynscan_testhelpers::test;
use dynscan_value::{DecodeErrorKind, Decoder, Value, ValueType, decode, from_value, value};

#[test]
fn integers_and_floats_round_trip() {
    assert_eq!(from_value::<i64>(&value!(5000)).unwrap(), 5000);
    assert_eq!(from_value::<usize>(&value!(5000)).unwrap(), 5000);
    assert_eq!(from_value::<f64>(&value!(1.67)).unwrap(), 1.67);
    assert_eq!(from_value::<f32>(&value!(1.5)).unwrap(), 1.5);
}

#[test]
fn bools_and_strings() {
    assert!(from_value::<bool>(&value!(true)).unwrap());
    assert_eq!(from_value::<String>(&value!("tcp")).unwrap(), "tcp");
}

#[test]
fn string_into_bool_is_a_mismatch_and_leaves_destination_alone() {
    let mut dest = true;
    let err = decode(&value!("false"), &mut dest).unwrap_err();
    match &err.kind {
        DecodeErrorKind::ShapeMismatch { expected, got, value } => {
            assert_eq!(expected.to_string(), "bool");
            assert_eq!(*got, ValueType::String);
            assert_eq!(value, &Value::from("false"));
        }
        other => panic!("unexpected error kind: {other:?}"),
    }
    assert!(dest);
    insta::assert_snapshot!(err, @r#"shape mismatch: bool wants a bool, got string `"false"`"#);
}

#[test]
fn no_cross_kind_coercion() {
    assert!(from_value::<i32>(&value!("12")).is_err());
    assert!(from_value::<String>(&value!(12)).is_err());
    assert!(from_value::<bool>(&value!(1)).is_err());
    assert!(from_value::<f64>(&value!(null)).is_err());
}

#[test]
fn narrowing_saturates_and_truncates() {
    assert_eq!(from_value::<i8>(&value!(1000)).unwrap(), i8::MAX);
    assert_eq!(from_value::<u16>(&value!(-1)).unwrap(), 0);
    assert_eq!(from_value::<i64>(&value!(3.99)).unwrap(), 3);
    assert_eq!(from_value::<u32>(&Value::Number(f64::INFINITY)).unwrap(), u32::MAX);
}

#[test]
fn strict_mode_rejects_lossy_numbers() {
    let strict = Decoder::new().strict_numbers(true);

    assert_eq!(strict.from_value::<u8>(&value!(255)).unwrap(), 255);

    let err = strict.from_value::<u8>(&value!(256)).unwrap_err();
    assert!(matches!(err.kind, DecodeErrorKind::NumberOutOfRange { .. }));
    insta::assert_snapshot!(err, @"number out of range: 256 is out of range for u8");

    let err = strict.from_value::<i64>(&value!(1.67)).unwrap_err();
    insta::assert_snapshot!(err, @"number out of range: 1.67 is not an integer, cannot be stored in i64");

    let err = strict.from_value::<f32>(&value!(1e300)).unwrap_err();
    assert!(err.to_string().ends_with("is out of range for f32"));

    assert_eq!(strict.from_value::<f64>(&value!(1e300)).unwrap(), 1e300);
}

#[test]
fn strict_mode_leaves_destination_alone() {
    let mut dest = 7_i32;
    let strict = Decoder::new().strict_numbers(true);
    assert!(strict.decode(&value!(0.5), &mut dest).is_err());
    assert_eq!(dest, 7);
}
