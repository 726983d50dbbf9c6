//! Tests for `builders` module.

use super::*;
use crate::geo::{Coordinates, GeoBoundingBox, GeoRadius};
use serde_json::{json, Value};

#[test]
fn test_match_value_builds_match_condition() {
    let cond = Condition::match_value("color", "red");

    assert!(matches!(
        &cond,
        Condition::Match(MatchCondition { key, matcher: Some(Match::Value(Value::String(v))) })
            if key == "color" && v == "red"
    ));
    assert_eq!(cond.kind(), ConditionKind::Match);
}

#[test]
fn test_match_any_collects_values_in_order() {
    let cond = Condition::match_any("tag", ["a", "b", "c"]);

    let Condition::Match(MatchCondition {
        matcher: Some(Match::Any(values)),
        ..
    }) = cond
    else {
        panic!("expected an any-match");
    };
    assert_eq!(values, vec![json!("a"), json!("b"), json!("c")]);
}

#[test]
fn test_match_except_accepts_mixed_scalars() {
    let cond = Condition::match_except("status", vec![json!(1), json!("archived"), json!(true)]);

    assert!(matches!(
        cond,
        Condition::Match(MatchCondition { matcher: Some(Match::Except(ref v)), .. }) if v.len() == 3
    ));
}

#[test]
fn test_range_builder_sets_only_requested_bounds() {
    let range = Range::new().gte(1.0).lt(5.0);

    assert_eq!(range.gt, None);
    assert_eq!(range.gte, Some(1.0));
    assert_eq!(range.lt, Some(5.0));
    assert_eq!(range.lte, None);
    assert!(range.has_bounds());
    assert!(!Range::default().has_bounds());
}

#[test]
fn test_geo_builders_pick_the_right_variant() {
    let radius = GeoRadius::new(Coordinates::new(1.0, 2.0), 3.0);
    let bbox = GeoBoundingBox::new(Coordinates::new(2.0, 1.0), Coordinates::new(1.0, 2.0));

    assert_eq!(
        Condition::geo_radius("loc", radius).kind(),
        ConditionKind::GeoRadius
    );
    assert_eq!(
        Condition::geo_bounding_box("loc", bbox).kind(),
        ConditionKind::GeoBoundingBox
    );
}

#[test]
fn test_filter_must_preserves_insertion_order() {
    // Arrange
    let filter = Filter::new()
        .must([Condition::match_value("b", 1)])
        .must([Condition::range("a", Range::new().gt(0.0)), Condition::match_text("c", "x")]);

    // Act
    let keys: Vec<&str> = filter.conditions().iter().map(Condition::key).collect();

    // Assert
    assert_eq!(keys, vec!["b", "a", "c"]);
}

#[test]
fn test_filter_must_does_not_deduplicate() {
    let filter = Filter::new()
        .match_value("color", "red")
        .match_value("color", "red");

    assert_eq!(filter.len(), 2);
    assert_eq!(filter.conditions()[0], filter.conditions()[1]);
}

#[test]
fn test_filter_must_accepts_condition_structs() {
    let filter = Filter::new().must([RangeCondition::new("price", Range::new().lte(100.0))]);

    assert_eq!(filter.conditions()[0].kind(), ConditionKind::Range);
}

#[test]
fn test_filter_push_mutates_in_place() {
    let mut filter = Filter::new();

    filter
        .push(Condition::match_value("a", 1))
        .push(MatchCondition::new("b", Match::text("x")));

    assert_eq!(filter.len(), 2);
    assert_eq!(filter.conditions()[1].key(), "b");
}

#[test]
fn test_filter_convenience_builders() {
    let filter = Filter::new()
        .match_value("color", "red")
        .match_text("title", "rust")
        .match_any("tag", [1, 2])
        .match_except("lang", ["fr"])
        .range("price", Range::new().lte(10.0))
        .within_radius("loc", GeoRadius::new(Coordinates::new(0.0, 0.0), 5.0))
        .within_bounding_box(
            "loc",
            GeoBoundingBox::new(Coordinates::new(1.0, 0.0), Coordinates::new(0.0, 1.0)),
        );

    let kinds: Vec<&str> = filter
        .conditions()
        .iter()
        .map(|c| c.kind().field_name())
        .collect();

    assert_eq!(
        kinds,
        vec![
            "match",
            "match",
            "match",
            "match",
            "range",
            "geo_radius",
            "geo_bounding_box"
        ]
    );
}

#[test]
fn test_condition_structs_default_to_missing_payload() {
    assert_eq!(RangeCondition::default().range, None);
    assert_eq!(MatchCondition::default().matcher, None);
    assert!(GeoRadiusCondition::default().key.is_empty());
    assert_eq!(GeoBoundingBoxCondition::default().geo_bounding_box, None);
}
