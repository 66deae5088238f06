use std::collections::{BTreeMap, HashMap};

use dynscan::Scan;
use dynscan_config::ConfigError;
use dynscan_testhelpers::test;
use dynscan_value::Decoder;

use crate::fixture;

#[allow(non_snake_case)]
#[derive(Scan, Debug, PartialEq)]
struct Is {
    #[scan(tag = "str")]
    Strin: String,
    Iin: i64,
}

#[allow(non_snake_case)]
#[derive(Scan, Debug, PartialEq)]
struct S {
    Inner: Is,
    Str: String,
    I: i32,
    Slc: Vec<i32>,
}

#[test]
fn scan_struct() {
    let mut s = S::zero();
    fixture().scan("ts", &mut s).unwrap();
    assert_eq!(
        s,
        S {
            Inner: Is {
                Strin: "inner string".into(),
                Iin: 64,
            },
            Str: "outer string".into(),
            I: 32,
            Slc: vec![1, 2, 3, 4, 5],
        }
    );
}

#[test]
fn scan_maps() {
    let config = fixture();

    let mut m1: HashMap<String, i32> = HashMap::new();
    config.scan("tm1", &mut m1).unwrap();
    assert_eq!(m1["one"], 1);
    assert_eq!(m1["two"], 2);

    let mut m2: BTreeMap<String, String> = BTreeMap::new();
    config.scan("tm2", &mut m2).unwrap();
    assert_eq!(m2.values().collect::<Vec<_>>(), ["v1", "v2"]);

    let mut m3: HashMap<String, HashMap<String, i32>> = HashMap::new();
    config.scan("tm3", &mut m3).unwrap();
    assert_eq!(m3["b"]["z"], 3);
}

#[allow(non_snake_case)]
#[derive(Scan, Debug, PartialEq)]
struct Ie3 {
    Ie1: i32,
    Ie2: String,
    Ie3: f32,
}

#[test]
fn scan_map_of_structs_into_an_absent_map() {
    let mut m5: Option<HashMap<String, Ie3>> = None;
    fixture().scan("tm4", &mut m5).unwrap();
    let m5 = m5.unwrap();
    assert_eq!(m5["first"].Ie2, "one");
    assert_eq!(m5["second"].Ie3, 2.5);
}

#[test]
fn scan_slices_into_empty_and_presized_destinations() {
    let config = fixture();

    let mut s1: Vec<i32> = Vec::new();
    config.scan("sl1", &mut s1).unwrap();
    let mut is1: Vec<i32> = Vec::with_capacity(0);
    config.scan("sl1", &mut is1).unwrap();
    assert_eq!(s1, is1);
    assert_eq!(s1, [1, 2, 3]);

    let mut s2 = vec![String::from("stale")];
    config.scan("sl2", &mut s2).unwrap();
    assert_eq!(s2, ["a", "b", "c"]);
}

#[allow(non_snake_case)]
#[derive(Scan, Debug, PartialEq)]
struct St {
    I: i32,
    Str: String,
}

#[test]
fn scan_nested_slices() {
    let config = fixture();

    let mut st1: Vec<St> = Vec::new();
    config.scan("ss1", &mut st1).unwrap();
    assert_eq!(st1.len(), 2);
    assert_eq!(st1[1].Str, "s2");

    let mut st2: Vec<HashMap<String, i32>> = Vec::new();
    config.scan("ss2", &mut st2).unwrap();
    assert_eq!(st2[1]["b"], 2);

    let mut st3: Vec<Vec<i32>> = Vec::new();
    config.scan("ss3", &mut st3).unwrap();
    assert_eq!(st3, [vec![1, 2], vec![3], vec![]]);
}

#[test]
fn scan_with_strict_decoder() {
    let config = fixture();
    let strict = Decoder::new().strict_numbers(true);

    let mut n = 0_u8;
    let err = config.scan_with(&strict, "maxNews", &mut n).unwrap_err();
    insta::assert_snapshot!(err, @"cannot scan key maxNews: number out of range: 5000 is out of range for u8");
    assert_eq!(n, 0);

    config.scan("maxNews", &mut n).unwrap();
    assert_eq!(n, u8::MAX);
}

#[test]
fn scan_missing_key() {
    let mut s = S::zero();
    let err = fixture().scan("nope", &mut s).unwrap_err();
    assert!(matches!(err, ConfigError::KeyNotFound { ref key } if key == "nope"));
}
