//! Builder methods for filters and conditions.
//!
//! None of these can fail: invalid input is kept as-is and reported by
//! validation.

use serde_json::Value;

use super::{
    Condition, Filter, GeoBoundingBoxCondition, GeoRadiusCondition, Match, MatchCondition, Range,
    RangeCondition,
};
use crate::geo::{GeoBoundingBox, GeoRadius};

impl Filter {
    /// Appends conditions in order. No deduplication, no reordering.
    #[must_use]
    pub fn must<I, C>(mut self, conditions: I) -> Self
    where
        I: IntoIterator<Item = C>,
        C: Into<Condition>,
    {
        self.conditions.extend(conditions.into_iter().map(Into::into));
        self
    }

    /// Appends one condition in place.
    pub fn push(&mut self, condition: impl Into<Condition>) -> &mut Self {
        self.conditions.push(condition.into());
        self
    }

    /// Appends a condition requiring `key` to equal `value`.
    #[must_use]
    pub fn match_value(self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.must([Condition::match_value(key, value)])
    }

    /// Appends a condition requiring `key` to contain `text`.
    #[must_use]
    pub fn match_text(self, key: impl Into<String>, text: impl Into<String>) -> Self {
        self.must([Condition::match_text(key, text)])
    }

    /// Appends a condition requiring `key` to equal one of `values`.
    #[must_use]
    pub fn match_any<I, V>(self, key: impl Into<String>, values: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<Value>,
    {
        self.must([Condition::match_any(key, values)])
    }

    /// Appends a condition requiring `key` to equal none of `values`.
    #[must_use]
    pub fn match_except<I, V>(self, key: impl Into<String>, values: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<Value>,
    {
        self.must([Condition::match_except(key, values)])
    }

    /// Appends a numeric interval condition on `key`.
    #[must_use]
    pub fn range(self, key: impl Into<String>, range: Range) -> Self {
        self.must([Condition::range(key, range)])
    }

    /// Appends a condition requiring the point at `key` to lie within `radius`.
    #[must_use]
    pub fn within_radius(self, key: impl Into<String>, radius: GeoRadius) -> Self {
        self.must([Condition::geo_radius(key, radius)])
    }

    /// Appends a condition requiring the point at `key` to lie within `bbox`.
    #[must_use]
    pub fn within_bounding_box(self, key: impl Into<String>, bbox: GeoBoundingBox) -> Self {
        self.must([Condition::geo_bounding_box(key, bbox)])
    }
}

impl Condition {
    /// Creates a match condition with the given rule.
    #[must_use]
    pub fn matching(key: impl Into<String>, matcher: Match) -> Self {
        MatchCondition::new(key, matcher).into()
    }

    /// Creates a single-value match condition.
    #[must_use]
    pub fn match_value(key: impl Into<String>, value: impl Into<Value>) -> Self {
        Self::matching(key, Match::value(value))
    }

    /// Creates a text match condition.
    #[must_use]
    pub fn match_text(key: impl Into<String>, text: impl Into<String>) -> Self {
        Self::matching(key, Match::text(text))
    }

    /// Creates an "any of" match condition.
    #[must_use]
    pub fn match_any<I, V>(key: impl Into<String>, values: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<Value>,
    {
        Self::matching(key, Match::any(values))
    }

    /// Creates an "except" match condition.
    #[must_use]
    pub fn match_except<I, V>(key: impl Into<String>, values: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<Value>,
    {
        Self::matching(key, Match::except(values))
    }

    /// Creates a range condition.
    #[must_use]
    pub fn range(key: impl Into<String>, range: Range) -> Self {
        RangeCondition::new(key, range).into()
    }

    /// Creates a bounding-box condition.
    #[must_use]
    pub fn geo_bounding_box(key: impl Into<String>, bbox: GeoBoundingBox) -> Self {
        GeoBoundingBoxCondition::new(key, bbox).into()
    }

    /// Creates a radius condition.
    #[must_use]
    pub fn geo_radius(key: impl Into<String>, radius: GeoRadius) -> Self {
        GeoRadiusCondition::new(key, radius).into()
    }
}

impl MatchCondition {
    /// Creates a match condition with its rule set.
    #[must_use]
    pub fn new(key: impl Into<String>, matcher: Match) -> Self {
        Self {
            key: key.into(),
            matcher: Some(matcher),
        }
    }
}

impl RangeCondition {
    /// Creates a range condition with its interval set.
    #[must_use]
    pub fn new(key: impl Into<String>, range: Range) -> Self {
        Self {
            key: key.into(),
            range: Some(range),
        }
    }
}

impl GeoBoundingBoxCondition {
    /// Creates a bounding-box condition with its region set.
    #[must_use]
    pub fn new(key: impl Into<String>, bbox: GeoBoundingBox) -> Self {
        Self {
            key: key.into(),
            geo_bounding_box: Some(bbox),
        }
    }
}

impl GeoRadiusCondition {
    /// Creates a radius condition with its region set.
    #[must_use]
    pub fn new(key: impl Into<String>, radius: GeoRadius) -> Self {
        Self {
            key: key.into(),
            geo_radius: Some(radius),
        }
    }
}
