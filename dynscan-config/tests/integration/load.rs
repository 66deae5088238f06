use std::io::Write;

use dynscan_config::{Config, ConfigError, DEFAULT_PATH};
use dynscan_testhelpers::test;

use crate::FIXTURE;

#[test]
fn load_from_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(FIXTURE.as_bytes()).unwrap();

    let config = Config::load(file.path()).unwrap();
    assert_eq!(config.get_str("redisProto"), Some("tcp"));
    assert_eq!(config.get_i64("maxNews"), Some(5000));
    assert_eq!(config.get_f64("floatTest"), Some(1.67));
    assert_eq!(config, crate::fixture());
}

#[test]
fn missing_file_is_an_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("absent.json");
    let err = Config::load(&path).unwrap_err();
    match err {
        ConfigError::Io { path: reported, .. } => assert_eq!(reported, path),
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn default_path_is_relative_to_the_working_directory() {
    assert_eq!(DEFAULT_PATH, "./config.json");
    // tests run from the crate root, which has no config.json
    assert!(matches!(
        Config::load_default(),
        Err(ConfigError::Io { .. })
    ));
}

#[test]
fn invalid_json_reports_its_location() {
    let err = Config::from_json_str("{\n  \"a\": 1,\n  oops\n}").unwrap_err();
    let ConfigError::Json(json) = &err else {
        panic!("unexpected error: {err:?}");
    };
    assert_eq!(json.line(), 3);
    assert!(err.to_string().starts_with("invalid JSON: "));
}

#[test]
fn top_level_must_be_an_object() {
    let err = Config::from_json_str("[1, 2, 3]").unwrap_err();
    insta::assert_snapshot!(err, @"config document must be an object, got array");
}
