//! Map decoding.

use std::collections::{BTreeMap, HashMap};

use dynscan::Scan;
use dynscan_testhelpers::test;
use dynscan_value::{DecodeErrorKind, decode, from_value, value};

#[test]
fn flat_maps() {
    let v = value!({
        "tm1": {"a": 1, "b": 2},
        "tm2": {"x": "ex", "y": "why"}
    });

    let m1: HashMap<String, i32> = from_value(v.get("tm1").unwrap()).unwrap();
    assert_eq!(m1, HashMap::from([("a".into(), 1), ("b".into(), 2)]));

    let m2: BTreeMap<String, String> = from_value(v.get("tm2").unwrap()).unwrap();
    let entries: Vec<_> = m2.iter().map(|(k, v)| format!("{k}={v}")).collect();
    assert_eq!(entries, ["x=ex", "y=why"]);
}

#[test]
fn nested_maps() {
    let v = value!({"outer": {"inner": 1}, "empty": {}});
    let m3: HashMap<String, HashMap<String, i32>> = from_value(&v).unwrap();
    assert_eq!(m3["outer"]["inner"], 1);
    assert!(m3["empty"].is_empty());
}

#[allow(non_snake_case)]
#[derive(Scan, Debug, PartialEq)]
struct Ie3 {
    Ie1: i32,
    Ie2: String,
    Ie3: f32,
}

#[test]
fn maps_of_structs_and_absent_maps() {
    let v = value!({
        "first": {"ie1": 1, "ie2": "one", "ie3": 1.5},
        "second": {"Ie1": 2}
    });

    let m4: HashMap<String, Ie3> = from_value(&v).unwrap();
    assert_eq!(
        m4["first"],
        Ie3 {
            Ie1: 1,
            Ie2: "one".into(),
            Ie3: 1.5,
        }
    );
    assert_eq!(
        m4["second"],
        Ie3 {
            Ie1: 2,
            Ie2: String::new(),
            Ie3: 0.0,
        }
    );

    let mut m5: Option<HashMap<String, Ie3>> = None;
    decode(&v, &mut m5).unwrap();
    assert_eq!(m5.map(|m| m.len()), Some(2));
}

#[test]
fn decoding_merges_into_an_existing_map() {
    let mut m: HashMap<String, u8> = HashMap::from([("kept".into(), 1), ("replaced".into(), 2)]);
    decode(&value!({"replaced": 20, "added": 30}), &mut m).unwrap();
    assert_eq!(m.len(), 3);
    assert_eq!(m["kept"], 1);
    assert_eq!(m["replaced"], 20);
    assert_eq!(m["added"], 30);
}

#[test]
fn non_string_keys_are_refused_before_any_entry() {
    let mut m: HashMap<i64, String> = HashMap::from([(7, "seven".into())]);
    let err = decode(&value!({"1": "one"}), &mut m).unwrap_err();
    match &err.kind {
        DecodeErrorKind::InvalidMapKeyType {
            map_shape,
            key_shape,
        } => {
            assert_eq!(map_shape.to_string(), "HashMap<i64, String>");
            assert_eq!(key_shape.to_string(), "i64");
        }
        other => panic!("unexpected error kind: {other:?}"),
    }
    assert_eq!(m, HashMap::from([(7, "seven".into())]));
    insta::assert_snapshot!(err, @"invalid map key type: HashMap<i64, String> has i64 keys, only String is supported");

    let err = from_value::<BTreeMap<u8, u8>>(&value!({})).unwrap_err();
    assert!(matches!(err.kind, DecodeErrorKind::InvalidMapKeyType { .. }));
}

#[test]
fn non_object_into_map_is_a_mismatch() {
    let err = from_value::<HashMap<String, i32>>(&value!([1])).unwrap_err();
    insta::assert_snapshot!(err, @"shape mismatch: HashMap<String, i32> wants an object, got array");
}

#[test]
fn failing_entry_reports_its_key() {
    let err = from_value::<HashMap<String, Vec<u8>>>(&value!({"list": [1, null]})).unwrap_err();
    assert_eq!(err.path_string(), ".list[1]");
}
