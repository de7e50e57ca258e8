//! Tests for the error module.

use super::error::Error;

#[test]
fn test_error_display() {
    let err = Error::DuplicateVertex("an_id".to_string());
    assert_eq!(err.to_string(), "Vertex 'an_id' already exists");

    let err = Error::MissingVertex("id_9".to_string());
    assert_eq!(err.to_string(), "Vertex 'id_9' not found");
}

#[test]
fn test_error_codes_are_distinct() {
    let codes = [
        Error::DuplicateVertex(String::new()).code(),
        Error::MissingVertex(String::new()).code(),
        Error::Config(String::new()).code(),
    ];
    assert_eq!(codes, ["SG-001", "SG-002", "SG-003"]);
}

#[test]
fn test_error_from_figment() {
    let fig_err = figment::Error::from("bad value".to_string());
    let err: Error = fig_err.into();
    assert!(matches!(err, Error::Config(ref msg) if msg.contains("bad value")));
}
