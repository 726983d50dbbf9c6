//! Error types for `QFilter`.
//!
//! Validation failures are reported through [`ValidationError`], which pairs
//! the dotted path of the offending field with the [`Violation`] found there.
//! Everything else surfaces as the crate-level [`Error`].

use std::fmt;

use thiserror::Error;

use crate::config::ConfigError;

/// Result type alias for `QFilter` operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in `QFilter` operations.
///
/// Error codes follow the pattern `QF-XXX`, shared with [`Violation::code`].
#[derive(Error, Debug)]
pub enum Error {
    /// A filter failed validation (QF-1XX, see [`Violation`]).
    #[error("[{code}] Validation error: {0}", code = .0.code())]
    Validation(#[from] ValidationError),

    /// The wire document could not be produced (QF-200).
    #[error("[QF-200] Serialization error: {0}")]
    Serialization(String),

    /// Configuration could not be loaded or is invalid (QF-201).
    #[error("[QF-201] Configuration error: {0}")]
    Config(#[from] ConfigError),
}

impl Error {
    /// Returns the error code (e.g., "QF-101").
    #[must_use]
    pub fn code(&self) -> &'static str {
        match self {
            Self::Validation(err) => err.code(),
            Self::Serialization(_) => "QF-200",
            Self::Config(_) => "QF-201",
        }
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization(err.to_string())
    }
}

/// The structural rule a field broke.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Violation {
    /// A condition key is the empty string (QF-101).
    #[error("key must not be empty")]
    EmptyKey,

    /// A condition was built without its payload (QF-102).
    ///
    /// Carries the wire name of the missing payload (`match`, `range`, ...).
    #[error("no {0} conditions are specified")]
    MissingPayload(&'static str),

    /// A range has none of `gt`, `gte`, `lt`, `lte` set (QF-103).
    #[error("no range conditions are specified")]
    NoRangeBounds,

    /// A range bound is NaN or infinite (QF-104).
    #[error("range bound {0} is not a finite number")]
    NonFiniteBound(f32),

    /// Latitude outside `[-90, 90]` (QF-105).
    #[error("latitude {0} is out of range [-90, 90]")]
    LatitudeOutOfRange(f32),

    /// Longitude outside `[-180, 180]` (QF-106).
    #[error("longitude {0} is out of range [-180, 180]")]
    LongitudeOutOfRange(f32),

    /// Radius is NaN or infinite (QF-107).
    #[error("radius {0} is not a finite number")]
    InvalidRadius(f32),

    /// A match value is not a string, number or boolean (QF-108).
    #[error("expected a scalar (string, number or boolean), got {0}")]
    NonScalarValue(&'static str),

    /// The filter holds more conditions than allowed (QF-109).
    #[error("{count} conditions exceed the limit of {max}")]
    TooManyConditions {
        /// Number of conditions in the filter.
        count: usize,
        /// Configured maximum.
        max: usize,
    },

    /// A key is longer than allowed (QF-110).
    #[error("key length {len} exceeds the limit of {max}")]
    KeyTooLong {
        /// Key length in bytes.
        len: usize,
        /// Configured maximum.
        max: usize,
    },

    /// An `any`/`except` list is longer than allowed (QF-111).
    #[error("{count} match values exceed the limit of {max}")]
    TooManyMatchValues {
        /// Number of values in the list.
        count: usize,
        /// Configured maximum.
        max: usize,
    },
}

impl Violation {
    /// Returns the error code (e.g., "QF-103").
    #[must_use]
    pub const fn code(&self) -> &'static str {
        match self {
            Self::EmptyKey => "QF-101",
            Self::MissingPayload(_) => "QF-102",
            Self::NoRangeBounds => "QF-103",
            Self::NonFiniteBound(_) => "QF-104",
            Self::LatitudeOutOfRange(_) => "QF-105",
            Self::LongitudeOutOfRange(_) => "QF-106",
            Self::InvalidRadius(_) => "QF-107",
            Self::NonScalarValue(_) => "QF-108",
            Self::TooManyConditions { .. } => "QF-109",
            Self::KeyTooLong { .. } => "QF-110",
            Self::TooManyMatchValues { .. } => "QF-111",
        }
    }
}

/// A structurally invalid entity and the path of the field that broke.
///
/// Paths use the wire field names, joined with `.` and indexed with `[n]`,
/// e.g. `conditions[2].geo_radius.center.lat`. An error raised directly on
/// the entity being validated has an empty path.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    path: String,
    violation: Violation,
}

impl ValidationError {
    /// Creates an error for a violation on the entity itself.
    #[must_use]
    pub fn new(violation: Violation) -> Self {
        Self {
            path: String::new(),
            violation,
        }
    }

    /// Creates an error for a violation on the named field.
    #[must_use]
    pub fn at(field: impl Into<String>, violation: Violation) -> Self {
        Self {
            path: field.into(),
            violation,
        }
    }

    /// Prefixes the path with the field this error was found under.
    ///
    /// Index segments (`[3]`) attach without a separating dot.
    #[must_use]
    pub fn within(mut self, field: &str) -> Self {
        self.path = if self.path.is_empty() {
            field.to_string()
        } else if self.path.starts_with('[') {
            format!("{field}{}", self.path)
        } else {
            format!("{field}.{}", self.path)
        };
        self
    }

    /// Dotted path of the offending field (empty for the root entity).
    #[must_use]
    pub fn path(&self) -> &str {
        &self.path
    }

    /// The rule that was broken.
    #[must_use]
    pub fn violation(&self) -> &Violation {
        &self.violation
    }

    /// Error code of the underlying violation.
    #[must_use]
    pub const fn code(&self) -> &'static str {
        self.violation.code()
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.path.is_empty() {
            write!(f, "{}", self.violation)
        } else {
            write!(f, "{}: {}", self.path, self.violation)
        }
    }
}

impl std::error::Error for ValidationError {}
