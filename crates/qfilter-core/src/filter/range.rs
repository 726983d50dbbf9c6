//! Numeric interval constraint.

use serde::Serialize;

use crate::error::{ValidationError, Violation};
use crate::validate::Validate;
use crate::wire;

/// A numeric interval given by up to four bounds.
///
/// At least one bound must be set for the range to validate. Bounds are not
/// compared with each other, so an empty interval such as `gt: 5, lt: 1` is
/// structurally valid.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct Range {
    /// Exclusive lower bound.
    #[serde(
        skip_serializing_if = "Option::is_none",
        serialize_with = "wire::opt_number"
    )]
    pub gt: Option<f32>,
    /// Inclusive lower bound.
    #[serde(
        skip_serializing_if = "Option::is_none",
        serialize_with = "wire::opt_number"
    )]
    pub gte: Option<f32>,
    /// Exclusive upper bound.
    #[serde(
        skip_serializing_if = "Option::is_none",
        serialize_with = "wire::opt_number"
    )]
    pub lt: Option<f32>,
    /// Inclusive upper bound.
    #[serde(
        skip_serializing_if = "Option::is_none",
        serialize_with = "wire::opt_number"
    )]
    pub lte: Option<f32>,
}

impl Range {
    /// Creates a range with no bounds. It will not validate until at least
    /// one bound is set.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            gt: None,
            gte: None,
            lt: None,
            lte: None,
        }
    }

    /// Sets the exclusive lower bound.
    #[must_use]
    pub const fn gt(mut self, bound: f32) -> Self {
        self.gt = Some(bound);
        self
    }

    /// Sets the inclusive lower bound.
    #[must_use]
    pub const fn gte(mut self, bound: f32) -> Self {
        self.gte = Some(bound);
        self
    }

    /// Sets the exclusive upper bound.
    #[must_use]
    pub const fn lt(mut self, bound: f32) -> Self {
        self.lt = Some(bound);
        self
    }

    /// Sets the inclusive upper bound.
    #[must_use]
    pub const fn lte(mut self, bound: f32) -> Self {
        self.lte = Some(bound);
        self
    }

    /// Returns `true` if at least one bound is set.
    #[must_use]
    pub const fn has_bounds(&self) -> bool {
        self.gt.is_some() || self.gte.is_some() || self.lt.is_some() || self.lte.is_some()
    }

    fn bounds(&self) -> [(&'static str, Option<f32>); 4] {
        [
            ("gt", self.gt),
            ("gte", self.gte),
            ("lt", self.lt),
            ("lte", self.lte),
        ]
    }
}

impl Validate for Range {
    fn validate(&self) -> Result<(), ValidationError> {
        if !self.has_bounds() {
            return Err(ValidationError::new(Violation::NoRangeBounds));
        }
        for (name, bound) in self.bounds() {
            if let Some(b) = bound {
                if !b.is_finite() {
                    return Err(ValidationError::at(name, Violation::NonFiniteBound(b)));
                }
            }
        }
        Ok(())
    }
}
