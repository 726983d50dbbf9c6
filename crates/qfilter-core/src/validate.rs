//! Structural validation contract.
//!
//! Every entity of the filter model implements [`Validate`]. Checks are
//! purely structural (presence, shape, numeric bounds): nothing here knows
//! whether a key exists in the stored payloads.

use crate::error::ValidationError;

/// A value object that can check its own structural invariants.
///
/// Implementations are pure: calling `validate` any number of times on an
/// unmodified value yields the same result. The walk fails fast and reports
/// the first offending field.
pub trait Validate {
    /// Succeeds silently or reports the first broken invariant.
    fn validate(&self) -> Result<(), ValidationError>;
}

impl<T: Validate + ?Sized> Validate for &T {
    fn validate(&self) -> Result<(), ValidationError> {
        (**self).validate()
    }
}

impl<T: Validate + ?Sized> Validate for Box<T> {
    fn validate(&self) -> Result<(), ValidationError> {
        (**self).validate()
    }
}
