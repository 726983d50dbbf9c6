//! Tests for `validation` module.

use super::*;
use crate::config::ValidationLimits;
use crate::error::Violation;
use crate::geo::{Coordinates, GeoBoundingBox, GeoRadius};
use crate::validate::Validate;
use serde_json::json;

// =========================================================================
// Range
// =========================================================================

#[test]
fn test_range_without_bounds_fails() {
    let err = Range::new().validate().unwrap_err();

    assert_eq!(err.violation(), &Violation::NoRangeBounds);
    assert_eq!(err.path(), "");
}

#[test]
fn test_range_with_any_single_bound_passes() {
    assert!(Range::new().gt(1.0).validate().is_ok());
    assert!(Range::new().gte(1.0).validate().is_ok());
    assert!(Range::new().lt(1.0).validate().is_ok());
    assert!(Range::new().lte(1.0).validate().is_ok());
}

#[test]
fn test_range_bounds_are_not_ordered() {
    assert!(Range::new().gt(10.0).lt(1.0).validate().is_ok());
}

#[test]
fn test_range_non_finite_bound_fails() {
    let err = Range::new().gte(0.0).lt(f32::INFINITY).validate().unwrap_err();

    assert_eq!(err.path(), "lt");
    assert_eq!(err.code(), "QF-104");
}

// =========================================================================
// Match
// =========================================================================

#[test]
fn test_match_scalars_pass() {
    assert!(Match::value("red").validate().is_ok());
    assert!(Match::value(42).validate().is_ok());
    assert!(Match::value(true).validate().is_ok());
    assert!(Match::text("hello").validate().is_ok());
    assert!(Match::any([1, 2, 3]).validate().is_ok());
    assert!(Match::except(Vec::<i64>::new()).validate().is_ok());
}

#[test]
fn test_match_null_value_fails() {
    let err = Match::Value(json!(null)).validate().unwrap_err();

    assert_eq!(err.path(), "value");
    assert_eq!(err.violation(), &Violation::NonScalarValue("null"));
}

#[test]
fn test_match_any_reports_offending_index() {
    let err = Match::Any(vec![json!("a"), json!({"nested": 1})])
        .validate()
        .unwrap_err();

    assert_eq!(err.path(), "any[1]");
    assert_eq!(err.violation(), &Violation::NonScalarValue("object"));
}

#[test]
fn test_match_except_rejects_arrays() {
    let err = Match::Except(vec![json!([1, 2])]).validate().unwrap_err();

    assert_eq!(err.path(), "except[0]");
}

// =========================================================================
// Conditions
// =========================================================================

#[test]
fn test_condition_empty_key_fails_before_payload() {
    // Arrange
    let cond = Condition::Range(RangeCondition {
        key: String::new(),
        range: None,
    });

    // Act
    let err = cond.validate().unwrap_err();

    // Assert
    assert_eq!(err.path(), "key");
    assert_eq!(err.violation(), &Violation::EmptyKey);
}

#[test]
fn test_condition_missing_payload_names_field() {
    let cases: Vec<(Condition, &str)> = vec![
        (
            MatchCondition {
                key: "k".into(),
                matcher: None,
            }
            .into(),
            "match",
        ),
        (
            RangeCondition {
                key: "k".into(),
                range: None,
            }
            .into(),
            "range",
        ),
        (
            GeoBoundingBoxCondition {
                key: "k".into(),
                geo_bounding_box: None,
            }
            .into(),
            "geo_bounding_box",
        ),
        (
            GeoRadiusCondition {
                key: "k".into(),
                geo_radius: None,
            }
            .into(),
            "geo_radius",
        ),
    ];

    for (cond, field) in cases {
        let err = cond.validate().unwrap_err();
        assert_eq!(err.path(), field);
        assert_eq!(err.violation(), &Violation::MissingPayload(field));
    }
}

#[test]
fn test_condition_delegates_to_payload() {
    let cond = Condition::geo_radius("loc", GeoRadius::new(Coordinates::new(0.0, 190.0), 1.0));

    let err = cond.validate().unwrap_err();

    assert_eq!(err.path(), "geo_radius.center.lon");
}

// =========================================================================
// Filter
// =========================================================================

#[test]
fn test_empty_filter_is_valid() {
    assert!(Filter::new().validate().is_ok());
}

#[test]
fn test_filter_reports_first_invalid_condition() {
    // Arrange
    let filter = Filter::new()
        .match_value("color", "red")
        .range("price", Range::new().lte(100.0))
        .must([MatchCondition {
            key: "size".into(),
            matcher: None,
        }])
        .range("weight", Range::new());

    // Act
    let err = filter.validate().unwrap_err();

    // Assert
    assert_eq!(err.path(), "conditions[2].match");
    assert_eq!(
        err.to_string(),
        "conditions[2].match: no match conditions are specified"
    );
}

#[test]
fn test_filter_validation_is_idempotent() {
    let filter = Filter::new()
        .match_value("a", 1)
        .range("b", Range::new());

    let first = filter.validate();
    let second = filter.validate();

    assert_eq!(first, second);
    assert_eq!(filter.len(), 2);
}

#[test]
fn test_validate_all_collects_every_invalid_condition() {
    // Arrange
    let filter = Filter::new()
        .range("a", Range::new())
        .match_value("ok", 1)
        .within_bounding_box(
            "",
            GeoBoundingBox::new(Coordinates::new(0.0, 0.0), Coordinates::new(0.0, 0.0)),
        );

    // Act
    let errors = filter.validate_all();

    // Assert
    let paths: Vec<&str> = errors.iter().map(|e| e.path()).collect();
    assert_eq!(paths, vec!["conditions[0].range", "conditions[2].key"]);
}

#[test]
fn test_validate_all_is_empty_for_valid_filter() {
    assert!(Filter::new().match_value("a", 1).validate_all().is_empty());
}

// =========================================================================
// Limits
// =========================================================================

fn tight_limits() -> ValidationLimits {
    ValidationLimits {
        max_conditions: 2,
        max_key_length: 4,
        max_match_values: 2,
    }
}

#[test]
fn test_limits_reject_too_many_conditions() {
    let filter = Filter::new()
        .match_value("a", 1)
        .match_value("b", 2)
        .match_value("c", 3);

    let err = filter.validate_with(&tight_limits()).unwrap_err();

    assert_eq!(err.path(), "conditions");
    assert_eq!(
        err.violation(),
        &Violation::TooManyConditions { count: 3, max: 2 }
    );
}

#[test]
fn test_limits_reject_long_key() {
    let filter = Filter::new().match_value("colour", "red");

    let err = filter.validate_with(&tight_limits()).unwrap_err();

    assert_eq!(err.path(), "conditions[0].key");
    assert_eq!(err.code(), "QF-110");
}

#[test]
fn test_limits_reject_long_any_list() {
    let filter = Filter::new().match_any("tag", ["a", "b", "c"]);

    let err = filter.validate_with(&tight_limits()).unwrap_err();

    assert_eq!(err.path(), "conditions[0].match.any");
    assert_eq!(
        err.violation(),
        &Violation::TooManyMatchValues { count: 3, max: 2 }
    );
}

#[test]
fn test_limits_apply_structural_checks_first() {
    let filter = Filter::new().range("price", Range::new());

    let err = filter.validate_with(&tight_limits()).unwrap_err();

    assert_eq!(err.violation(), &Violation::NoRangeBounds);
}

#[test]
fn test_unlimited_limits_match_plain_validation() {
    let filter = Filter::new()
        .match_any("tag", (0..100).collect::<Vec<i64>>())
        .range("price", Range::new().gt(1.0));

    assert!(filter.validate_with(&ValidationLimits::unlimited()).is_ok());
    assert!(filter.validate().is_ok());
}
