//! Command-line syntax for filter conditions.
//!
//! Each condition is one argument of the form `KIND:KEY=ARGS`:
//!
//! | Kind         | Example                               |
//! |--------------|---------------------------------------|
//! | `match`      | `match:color=red`                     |
//! | `text`       | `text:title=vector search`            |
//! | `any`        | `any:tag=rust,db`                     |
//! | `except`     | `except:status=0,9`                   |
//! | `range`      | `range:price=gte:10,lt:99.5`          |
//! | `geo-radius` | `geo-radius:home=48.85,2.35,2500`     |
//! | `geo-box`    | `geo-box:store=52.6,13.2,52.4,13.6`   |
//!
//! Only the syntax is checked here. Values that parse but break an invariant
//! (latitude 95, a range with no bounds) are left for filter validation.

use std::str::FromStr;

use qfilter_core::{Condition, Coordinates, GeoBoundingBox, GeoRadius, Range};
use serde_json::Value;
use thiserror::Error;

/// Syntax errors in a condition argument.
#[derive(Error, Debug, PartialEq)]
pub enum ConditionArgError {
    /// Missing `KIND:` prefix or `=`.
    #[error("expected KIND:KEY=ARGS, got '{0}'")]
    Malformed(String),

    /// Unknown condition kind.
    #[error("unknown condition kind '{0}' (expected match, text, any, except, range, geo-radius, geo-box)")]
    UnknownKind(String),

    /// Unknown range operator.
    #[error("unknown range operator '{0}' (expected gt, gte, lt, lte)")]
    UnknownOperator(String),

    /// A number could not be parsed.
    #[error("invalid number '{0}'")]
    InvalidNumber(String),

    /// Wrong number of comma-separated numbers for a geo condition.
    #[error("{kind} expects {expected} numbers, got {actual}")]
    WrongArity {
        /// Condition kind.
        kind: &'static str,
        /// Expected count.
        expected: usize,
        /// Actual count.
        actual: usize,
    },
}

/// A condition parsed from the command line.
#[derive(Debug, Clone, PartialEq)]
pub struct ConditionArg(pub Condition);

impl FromStr for ConditionArg {
    type Err = ConditionArgError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let malformed = || ConditionArgError::Malformed(s.to_string());
        let (kind, rest) = s.split_once(':').ok_or_else(malformed)?;
        let (key, args) = rest.split_once('=').ok_or_else(malformed)?;

        let condition = match kind {
            "match" => Condition::match_value(key, scalar(args)),
            "text" => Condition::match_text(key, args),
            "any" => Condition::match_any(key, list(args)),
            "except" => Condition::match_except(key, list(args)),
            "range" => Condition::range(key, range(args)?),
            "geo-radius" => {
                let [lat, lon, radius] = numbers::<3>("geo-radius", args)?;
                Condition::geo_radius(key, GeoRadius::new(Coordinates::new(lat, lon), radius))
            }
            "geo-box" => {
                let [top, left, bottom, right] = numbers::<4>("geo-box", args)?;
                Condition::geo_bounding_box(
                    key,
                    GeoBoundingBox::new(Coordinates::new(top, left), Coordinates::new(bottom, right)),
                )
            }
            other => return Err(ConditionArgError::UnknownKind(other.to_string())),
        };
        Ok(Self(condition))
    }
}

/// Infers the JSON type of a bare value: bool, integer, float, else string.
/// Double quotes force a string (`"42"`).
pub fn scalar(raw: &str) -> Value {
    if let Some(quoted) = raw
        .strip_prefix('"')
        .and_then(|r| r.strip_suffix('"'))
    {
        return Value::String(quoted.to_string());
    }
    if let Ok(b) = raw.parse::<bool>() {
        return Value::Bool(b);
    }
    if let Ok(i) = raw.parse::<i64>() {
        return Value::from(i);
    }
    match raw.parse::<f64>() {
        Ok(f) if f.is_finite() => Value::from(f),
        _ => Value::String(raw.to_string()),
    }
}

fn list(raw: &str) -> Vec<Value> {
    if raw.is_empty() {
        return Vec::new();
    }
    raw.split(',').map(|v| scalar(v.trim())).collect()
}

fn number(raw: &str) -> Result<f32, ConditionArgError> {
    raw.trim()
        .parse::<f32>()
        .map_err(|_| ConditionArgError::InvalidNumber(raw.to_string()))
}

fn numbers<const N: usize>(
    kind: &'static str,
    raw: &str,
) -> Result<[f32; N], ConditionArgError> {
    let parsed = raw
        .split(',')
        .map(number)
        .collect::<Result<Vec<f32>, _>>()?;
    let actual = parsed.len();
    parsed.try_into().map_err(|_| ConditionArgError::WrongArity {
        kind,
        expected: N,
        actual,
    })
}

fn range(raw: &str) -> Result<Range, ConditionArgError> {
    let mut range = Range::new();
    for bound in raw.split(',').filter(|b| !b.trim().is_empty()) {
        let (op, value) = bound
            .split_once(':')
            .ok_or_else(|| ConditionArgError::Malformed(bound.to_string()))?;
        let value = number(value)?;
        range = match op.trim() {
            "gt" => range.gt(value),
            "gte" => range.gte(value),
            "lt" => range.lt(value),
            "lte" => range.lte(value),
            other => return Err(ConditionArgError::UnknownOperator(other.to_string())),
        };
    }
    Ok(range)
}
