//! Wire document for the storage service's query endpoint.
//!
//! ```json
//! {"must":[{"key":"color","match":{"value":"red"}},{"key":"price","range":{"lte":100}}]}
//! ```
//!
//! Only a [`ValidatedFilter`] can be serialized, so an invalid filter never
//! reaches the wire. Absent optional fields are omitted, never written as
//! `null`.

use serde::ser::{SerializeStruct, Serializer};
use serde::Serialize;
use serde_json::Value;

use crate::config::ValidationLimits;
use crate::error::{Result, ValidationError};
use crate::filter::Filter;
use crate::validate::Validate;

/// Largest magnitude below which every integral `f32` is exact (2^24).
const EXACT_INTEGER_LIMIT: f32 = 16_777_216.0;

/// Writes an `f32` the way the storage service expects numbers: integral
/// values as JSON integers (`100`, not `100.0`), everything else with the
/// shortest `f32` representation.
pub(crate) fn number<S: Serializer>(
    value: &f32,
    serializer: S,
) -> std::result::Result<S::Ok, S::Error> {
    let v = *value;
    if v.is_finite() && v.fract() == 0.0 && v.abs() < EXACT_INTEGER_LIMIT {
        serializer.serialize_i64(v as i64)
    } else {
        serializer.serialize_f32(v)
    }
}

/// [`number`] for optional fields; pair with `skip_serializing_if`.
#[allow(clippy::ref_option)]
pub(crate) fn opt_number<S: Serializer>(
    value: &Option<f32>,
    serializer: S,
) -> std::result::Result<S::Ok, S::Error> {
    match value {
        Some(v) => number(v, serializer),
        None => serializer.serialize_none(),
    }
}

/// A filter that passed validation and can be sent over the wire.
///
/// Obtained from [`Filter::into_validated`], [`Filter::into_validated_with`]
/// or `TryFrom<Filter>`. It exposes no way to mutate the conditions.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidatedFilter(Filter);

impl ValidatedFilter {
    /// The validated filter.
    #[must_use]
    pub fn as_filter(&self) -> &Filter {
        &self.0
    }

    /// Gives back the filter, e.g. to extend it and validate again.
    #[must_use]
    pub fn into_inner(self) -> Filter {
        self.0
    }

    /// Compact wire document.
    pub fn to_json(&self) -> Result<String> {
        tracing::trace!(conditions = self.0.len(), "serializing filter");
        Ok(serde_json::to_string(self)?)
    }

    /// Indented wire document, for logs and terminals.
    pub fn to_json_pretty(&self) -> Result<String> {
        tracing::trace!(conditions = self.0.len(), "serializing filter (pretty)");
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Wire document as a JSON value, for embedding in a larger request body.
    pub fn to_value(&self) -> Result<Value> {
        tracing::trace!(conditions = self.0.len(), "serializing filter to value");
        Ok(serde_json::to_value(self)?)
    }
}

impl Serialize for ValidatedFilter {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut doc = serializer.serialize_struct("Filter", 1)?;
        doc.serialize_field("must", &self.0.conditions)?;
        doc.end()
    }
}

impl TryFrom<Filter> for ValidatedFilter {
    type Error = ValidationError;

    fn try_from(filter: Filter) -> std::result::Result<Self, Self::Error> {
        filter.into_validated()
    }
}

impl Filter {
    /// Validates the filter and seals it for serialization.
    pub fn into_validated(self) -> std::result::Result<ValidatedFilter, ValidationError> {
        self.validate()?;
        Ok(ValidatedFilter(self))
    }

    /// Like [`Filter::into_validated`], also enforcing `limits`.
    pub fn into_validated_with(
        self,
        limits: &ValidationLimits,
    ) -> std::result::Result<ValidatedFilter, ValidationError> {
        self.validate_with(limits)?;
        Ok(ValidatedFilter(self))
    }
}
