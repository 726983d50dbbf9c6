//! # `QFilter` Core
//!
//! Typed, validated payload filters for vector-similarity storage engines.
//!
//! A [`Filter`] is an ordered list of [`Condition`]s combined with AND
//! ("must") semantics. Each condition binds a payload field key to exactly
//! one rule: a [`Match`], a [`Range`], a [`GeoBoundingBox`] or a
//! [`GeoRadius`].
//!
//! Construction never fails. Every structural check is deferred to
//! [`Validate::validate`], and only a [`ValidatedFilter`] can be turned into
//! the wire document sent to the storage service.
//!
//! ## Quick Start
//!
//! ```rust
//! use qfilter_core::{Coordinates, Filter, GeoRadius, Range};
//!
//! let filter = Filter::new()
//!     .match_value("color", "red")
//!     .range("price", Range::new().lte(100.0))
//!     .within_radius("location", GeoRadius::new(Coordinates::new(52.52, 13.405), 1000.0));
//!
//! let validated = filter.into_validated()?;
//! let json = validated.to_json()?;
//! assert!(json.starts_with(r#"{"must":[{"key":"color","match":{"value":"red"}}"#));
//! # Ok::<(), qfilter_core::Error>(())
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
// Wire numbers are f32 by contract; integral values are narrowed on purpose.
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::float_cmp)]
#![allow(clippy::missing_errors_doc)]

pub mod config;
pub mod error;
pub mod filter;
pub mod geo;
pub mod validate;
pub mod wire;

pub use config::{ConfigError, LoggingConfig, OutputConfig, QFilterConfig, ValidationLimits};
pub use error::{Error, Result, ValidationError, Violation};
pub use filter::{
    Condition, ConditionKind, Filter, GeoBoundingBoxCondition, GeoRadiusCondition, Match,
    MatchCondition, Range, RangeCondition,
};
pub use geo::{Coordinates, GeoBoundingBox, GeoRadius};
pub use validate::Validate;
pub use wire::ValidatedFilter;
