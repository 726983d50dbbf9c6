//! Payload filters for vector search queries.
//!
//! A [`Filter`] holds an ordered list of [`Condition`]s that must all hold
//! ("must" semantics). Conditions are a closed set of four shapes, each
//! binding a payload key to one rule.
//!
//! ## Usage
//!
//! ```rust
//! use qfilter_core::{Condition, Filter, Range, Validate};
//!
//! let filter = Filter::new().must([
//!     Condition::match_value("color", "red"),
//!     Condition::range("price", Range::new().lte(100.0)),
//! ]);
//!
//! assert!(filter.validate().is_ok());
//! ```

mod builders;
#[cfg(test)]
mod builders_tests;
mod match_value;
mod range;
mod validation;
#[cfg(test)]
mod validation_tests;

use serde::Serialize;

pub use match_value::Match;
pub use range::Range;

use crate::geo::{GeoBoundingBox, GeoRadius};

/// An AND-combination of conditions; the root query object.
///
/// An empty filter is valid and constrains nothing. A filter is not
/// serializable by itself: validate it into a
/// [`ValidatedFilter`](crate::ValidatedFilter) first.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Filter {
    pub(crate) conditions: Vec<Condition>,
}

impl Filter {
    /// Creates an empty filter.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            conditions: Vec::new(),
        }
    }

    /// Conditions in insertion order.
    #[must_use]
    pub fn conditions(&self) -> &[Condition] {
        &self.conditions
    }

    /// Number of conditions.
    #[must_use]
    pub fn len(&self) -> usize {
        self.conditions.len()
    }

    /// Returns `true` if the filter has no conditions.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.conditions.is_empty()
    }
}

/// Wire discriminator of a condition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ConditionKind {
    /// `match`
    Match,
    /// `range`
    Range,
    /// `geo_bounding_box`
    GeoBoundingBox,
    /// `geo_radius`
    GeoRadius,
}

impl ConditionKind {
    /// Field name the payload is serialized under.
    #[must_use]
    pub const fn field_name(self) -> &'static str {
        match self {
            Self::Match => "match",
            Self::Range => "range",
            Self::GeoBoundingBox => "geo_bounding_box",
            Self::GeoRadius => "geo_radius",
        }
    }
}

impl std::fmt::Display for ConditionKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.field_name())
    }
}

/// A single constraint on one payload field.
///
/// Serializes without a wrapper: the payload field name (`match`, `range`,
/// `geo_bounding_box`, `geo_radius`) is the discriminator.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Condition {
    /// Value matching.
    Match(MatchCondition),
    /// Numeric interval.
    Range(RangeCondition),
    /// Rectangular geo region.
    GeoBoundingBox(GeoBoundingBoxCondition),
    /// Circular geo region.
    GeoRadius(GeoRadiusCondition),
}

impl Condition {
    /// Payload key this condition constrains.
    #[must_use]
    pub fn key(&self) -> &str {
        match self {
            Self::Match(c) => &c.key,
            Self::Range(c) => &c.key,
            Self::GeoBoundingBox(c) => &c.key,
            Self::GeoRadius(c) => &c.key,
        }
    }

    /// Which of the four shapes this is.
    #[must_use]
    pub const fn kind(&self) -> ConditionKind {
        match self {
            Self::Match(_) => ConditionKind::Match,
            Self::Range(_) => ConditionKind::Range,
            Self::GeoBoundingBox(_) => ConditionKind::GeoBoundingBox,
            Self::GeoRadius(_) => ConditionKind::GeoRadius,
        }
    }
}

/// Binds a key to a [`Match`] rule.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct MatchCondition {
    /// Payload field name.
    pub key: String,
    /// Matching rule; `None` fails validation.
    #[serde(rename = "match", skip_serializing_if = "Option::is_none")]
    pub matcher: Option<Match>,
}

/// Binds a key to a [`Range`].
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct RangeCondition {
    /// Payload field name.
    pub key: String,
    /// Interval; `None` fails validation.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub range: Option<Range>,
}

/// Binds a key to a [`GeoBoundingBox`].
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct GeoBoundingBoxCondition {
    /// Payload field name.
    pub key: String,
    /// Region; `None` fails validation.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub geo_bounding_box: Option<GeoBoundingBox>,
}

/// Binds a key to a [`GeoRadius`].
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct GeoRadiusCondition {
    /// Payload field name.
    pub key: String,
    /// Region; `None` fails validation.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub geo_radius: Option<GeoRadius>,
}

impl From<MatchCondition> for Condition {
    fn from(c: MatchCondition) -> Self {
        Self::Match(c)
    }
}

impl From<RangeCondition> for Condition {
    fn from(c: RangeCondition) -> Self {
        Self::Range(c)
    }
}

impl From<GeoBoundingBoxCondition> for Condition {
    fn from(c: GeoBoundingBoxCondition) -> Self {
        Self::GeoBoundingBox(c)
    }
}

impl From<GeoRadiusCondition> for Condition {
    fn from(c: GeoRadiusCondition) -> Self {
        Self::GeoRadius(c)
    }
}
