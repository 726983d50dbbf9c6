//! Validation walk over filters and conditions.

use super::{
    Condition, Filter, GeoBoundingBoxCondition, GeoRadiusCondition, Match, MatchCondition,
    RangeCondition,
};
use crate::config::ValidationLimits;
use crate::error::{ValidationError, Violation};
use crate::validate::Validate;

/// Shared shape of the four condition structs: key check, presence check,
/// then delegation to the payload.
fn validate_keyed<P: Validate>(
    key: &str,
    payload: Option<&P>,
    field: &'static str,
) -> Result<(), ValidationError> {
    if key.is_empty() {
        return Err(ValidationError::at("key", Violation::EmptyKey));
    }
    let Some(payload) = payload else {
        return Err(ValidationError::at(field, Violation::MissingPayload(field)));
    };
    payload.validate().map_err(|e| e.within(field))
}

impl Validate for MatchCondition {
    fn validate(&self) -> Result<(), ValidationError> {
        validate_keyed(&self.key, self.matcher.as_ref(), "match")
    }
}

impl Validate for RangeCondition {
    fn validate(&self) -> Result<(), ValidationError> {
        validate_keyed(&self.key, self.range.as_ref(), "range")
    }
}

impl Validate for GeoBoundingBoxCondition {
    fn validate(&self) -> Result<(), ValidationError> {
        validate_keyed(&self.key, self.geo_bounding_box.as_ref(), "geo_bounding_box")
    }
}

impl Validate for GeoRadiusCondition {
    fn validate(&self) -> Result<(), ValidationError> {
        validate_keyed(&self.key, self.geo_radius.as_ref(), "geo_radius")
    }
}

impl Validate for Condition {
    fn validate(&self) -> Result<(), ValidationError> {
        match self {
            Self::Match(c) => c.validate(),
            Self::Range(c) => c.validate(),
            Self::GeoBoundingBox(c) => c.validate(),
            Self::GeoRadius(c) => c.validate(),
        }
    }
}

impl Condition {
    /// Structural validation followed by the size limits that apply to a
    /// single condition.
    fn validate_with(&self, limits: &ValidationLimits) -> Result<(), ValidationError> {
        self.validate()?;

        let key_len = self.key().len();
        if key_len > limits.max_key_length {
            return Err(ValidationError::at(
                "key",
                Violation::KeyTooLong {
                    len: key_len,
                    max: limits.max_key_length,
                },
            ));
        }

        if let Self::Match(MatchCondition {
            matcher: Some(m @ (Match::Any(_) | Match::Except(_))),
            ..
        }) = self
        {
            let count = m.list_len().unwrap_or_default();
            if count > limits.max_match_values {
                return Err(ValidationError::at(
                    m.field_name(),
                    Violation::TooManyMatchValues {
                        count,
                        max: limits.max_match_values,
                    },
                )
                .within("match"));
            }
        }
        Ok(())
    }
}

fn condition_path(index: usize) -> String {
    format!("conditions[{index}]")
}

fn report(err: ValidationError) -> ValidationError {
    tracing::debug!(
        path = err.path(),
        code = err.code(),
        "filter rejected: {}",
        err.violation()
    );
    err
}

impl Validate for Filter {
    fn validate(&self) -> Result<(), ValidationError> {
        for (i, condition) in self.conditions.iter().enumerate() {
            condition
                .validate()
                .map_err(|e| report(e.within(&condition_path(i))))?;
        }
        Ok(())
    }
}

impl Filter {
    /// Validates the filter and enforces size limits.
    ///
    /// The condition count is checked first, then each condition in order:
    /// structure, key length, and `any`/`except` list size.
    pub fn validate_with(&self, limits: &ValidationLimits) -> Result<(), ValidationError> {
        if self.conditions.len() > limits.max_conditions {
            return Err(report(ValidationError::at(
                "conditions",
                Violation::TooManyConditions {
                    count: self.conditions.len(),
                    max: limits.max_conditions,
                },
            )));
        }
        for (i, condition) in self.conditions.iter().enumerate() {
            condition
                .validate_with(limits)
                .map_err(|e| report(e.within(&condition_path(i))))?;
        }
        Ok(())
    }

    /// Validates every condition and collects the first violation of each,
    /// in condition order. An empty result means the filter is valid.
    #[must_use]
    pub fn validate_all(&self) -> Vec<ValidationError> {
        let errors: Vec<ValidationError> = self
            .conditions
            .iter()
            .enumerate()
            .filter_map(|(i, c)| c.validate().err().map(|e| e.within(&condition_path(i))))
            .collect();
        if !errors.is_empty() {
            tracing::debug!(count = errors.len(), "filter has invalid conditions");
        }
        errors
    }
}
