//! Integration tests for parsing and validating transform names.

use filters::{ConfigError, Transform, TransformList};

/// Verifies every documented name parses to its transform.
#[test]
fn documented_names_parse() {
    assert_eq!("lower_case".parse::<Transform>(), Ok(Transform::LowerCase));
    assert_eq!("upper_case".parse::<Transform>(), Ok(Transform::UpperCase));
    assert_eq!("trim_spaces".parse::<Transform>(), Ok(Transform::TrimSpaces));
}

/// Verifies names are case-sensitive.
#[test]
fn names_are_case_sensitive() {
    assert_eq!(
        "UPPER_CASE".parse::<Transform>(),
        Err(ConfigError::UnknownTransform("UPPER_CASE".to_owned()))
    );
}

/// Verifies both case directions together are rejected in either order.
#[test]
fn conflicting_case_in_either_order() {
    assert_eq!(
        TransformList::parse("lower_case,upper_case"),
        Err(ConfigError::ConflictingCase)
    );
    assert_eq!(
        TransformList::parse_names(["upper_case", "trim_spaces", "lower_case"]),
        Err(ConfigError::ConflictingCase)
    );
}

/// Verifies an unknown name is reported even when a conflict follows it.
#[test]
fn unknown_name_reported_before_conflict() {
    assert_eq!(
        TransformList::parse("lower_case,shout,upper_case"),
        Err(ConfigError::UnknownTransform("shout".to_owned()))
    );
}

/// Verifies empty segments are rejected.
#[test]
fn empty_segment_rejected() {
    assert_eq!(
        TransformList::parse("upper_case,,trim_spaces"),
        Err(ConfigError::UnknownTransform(String::new()))
    );
}

/// Verifies the list displays in the same form it parses from.
#[test]
fn display_matches_input_order() {
    let list = TransformList::parse("trim_spaces,upper_case,trim_spaces").expect("valid list");
    assert_eq!(list.len(), 3);
    assert_eq!(list.to_string(), "trim_spaces,upper_case,trim_spaces");
}

/// Verifies the empty string parses to an empty list.
#[test]
fn empty_string_is_empty_list() {
    let list = TransformList::parse("").expect("valid list");
    assert!(list.is_empty());
}
