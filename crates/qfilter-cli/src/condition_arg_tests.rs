//! Tests for condition argument parsing.

use crate::condition_arg::*;
use qfilter_core::{
    Condition, Coordinates, GeoBoundingBox, GeoRadius, Range, Validate, Violation,
};
use serde_json::json;

fn parse(s: &str) -> Condition {
    s.parse::<ConditionArg>().expect("should parse").0
}

#[test]
fn test_scalar_inference() {
    assert_eq!(scalar("true"), json!(true));
    assert_eq!(scalar("42"), json!(42));
    assert_eq!(scalar("-1.5"), json!(-1.5));
    assert_eq!(scalar("red"), json!("red"));
    assert_eq!(scalar("\"42\""), json!("42"));
    assert_eq!(scalar("inf"), json!("inf"));
}

#[test]
fn test_parse_match_kinds() {
    assert_eq!(parse("match:color=red"), Condition::match_value("color", "red"));
    assert_eq!(
        parse("text:title=vector search"),
        Condition::match_text("title", "vector search")
    );
    assert_eq!(parse("any:tag=rust, db"), Condition::match_any("tag", ["rust", "db"]));
    assert_eq!(parse("except:status=0,9"), Condition::match_except("status", [0, 9]));
}

#[test]
fn test_parse_empty_any_list() {
    assert_eq!(
        parse("any:tag="),
        Condition::match_any("tag", Vec::<String>::new())
    );
}

#[test]
fn test_parse_range() {
    assert_eq!(
        parse("range:price=gte:10,lt:99.5"),
        Condition::range("price", Range::new().gte(10.0).lt(99.5))
    );
}

#[test]
fn test_parse_range_without_bounds_is_left_to_validation() {
    let cond = parse("range:price=");

    let err = cond.validate().unwrap_err();

    assert_eq!(err.violation(), &Violation::NoRangeBounds);
}

#[test]
fn test_parse_geo_conditions() {
    assert_eq!(
        parse("geo-radius:home=48.5,2.25,2500"),
        Condition::geo_radius("home", GeoRadius::new(Coordinates::new(48.5, 2.25), 2500.0))
    );
    assert_eq!(
        parse("geo-box:store=52.75,13,52.25,13.75"),
        Condition::geo_bounding_box(
            "store",
            GeoBoundingBox::new(Coordinates::new(52.75, 13.0), Coordinates::new(52.25, 13.75))
        )
    );
}

#[test]
fn test_parse_keeps_key_with_colons_in_value() {
    assert_eq!(parse("match:url=http://x"), Condition::match_value("url", "http://x"));
}

#[test]
fn test_parse_errors() {
    assert_eq!(
        "color=red".parse::<ConditionArg>().unwrap_err(),
        ConditionArgError::Malformed("color=red".into())
    );
    assert_eq!(
        "fuzzy:color=red".parse::<ConditionArg>().unwrap_err(),
        ConditionArgError::UnknownKind("fuzzy".into())
    );
    assert_eq!(
        "range:price=between:3".parse::<ConditionArg>().unwrap_err(),
        ConditionArgError::UnknownOperator("between".into())
    );
    assert_eq!(
        "geo-radius:loc=1,2".parse::<ConditionArg>().unwrap_err(),
        ConditionArgError::WrongArity {
            kind: "geo-radius",
            expected: 3,
            actual: 2
        }
    );
    assert_eq!(
        "geo-box:loc=1,2,x,4".parse::<ConditionArg>().unwrap_err(),
        ConditionArgError::InvalidNumber("x".into())
    );
}
