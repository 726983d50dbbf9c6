//! Value-matching rule for a single payload field.

use serde::Serialize;
use serde_json::Value;

use crate::error::{ValidationError, Violation};
use crate::validate::Validate;

/// An equality or inclusion rule over scalar payload values.
///
/// Exactly one form is set at a time, so a rule that specifies nothing, or
/// several forms with unclear precedence, cannot be built. Serializes as a
/// single-key object: `{"value": ..}`, `{"text": ..}`, `{"any": [..]}` or
/// `{"except": [..]}`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Match {
    /// Field equals this scalar.
    Value(Value),
    /// Field contains this text.
    Text(String),
    /// Field equals any of these scalars.
    Any(Vec<Value>),
    /// Field equals none of these scalars.
    Except(Vec<Value>),
}

impl Match {
    /// Matches a single scalar value.
    #[must_use]
    pub fn value(value: impl Into<Value>) -> Self {
        Self::Value(value.into())
    }

    /// Matches a text fragment.
    #[must_use]
    pub fn text(text: impl Into<String>) -> Self {
        Self::Text(text.into())
    }

    /// Matches any of the given values.
    #[must_use]
    pub fn any<I, V>(values: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<Value>,
    {
        Self::Any(values.into_iter().map(Into::into).collect())
    }

    /// Matches everything except the given values.
    #[must_use]
    pub fn except<I, V>(values: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<Value>,
    {
        Self::Except(values.into_iter().map(Into::into).collect())
    }

    /// Wire name of the form that is set.
    #[must_use]
    pub const fn field_name(&self) -> &'static str {
        match self {
            Self::Value(_) => "value",
            Self::Text(_) => "text",
            Self::Any(_) => "any",
            Self::Except(_) => "except",
        }
    }

    /// Number of values in an `any`/`except` list, `None` for single values.
    #[must_use]
    pub fn list_len(&self) -> Option<usize> {
        match self {
            Self::Any(values) | Self::Except(values) => Some(values.len()),
            Self::Value(_) | Self::Text(_) => None,
        }
    }
}

impl Validate for Match {
    fn validate(&self) -> Result<(), ValidationError> {
        match self {
            Self::Value(value) => {
                check_scalar(value).map_err(|v| ValidationError::at("value", v))
            }
            Self::Text(_) => Ok(()),
            Self::Any(values) | Self::Except(values) => {
                for (i, value) in values.iter().enumerate() {
                    check_scalar(value).map_err(|v| {
                        ValidationError::at(format!("[{i}]"), v).within(self.field_name())
                    })?;
                }
                Ok(())
            }
        }
    }
}

fn check_scalar(value: &Value) -> Result<(), Violation> {
    match value {
        Value::String(_) | Value::Number(_) | Value::Bool(_) => Ok(()),
        Value::Null => Err(Violation::NonScalarValue("null")),
        Value::Array(_) => Err(Violation::NonScalarValue("array")),
        Value::Object(_) => Err(Violation::NonScalarValue("object")),
    }
}
