//! Geographic value types: points, circles and rectangles.

use serde::Serialize;

use crate::error::{ValidationError, Violation};
use crate::validate::Validate;
use crate::wire;

const LATITUDE_RANGE: std::ops::RangeInclusive<f32> = -90.0..=90.0;
const LONGITUDE_RANGE: std::ops::RangeInclusive<f32> = -180.0..=180.0;

/// A geographic point in degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Coordinates {
    /// Latitude, valid in `[-90, 90]`.
    #[serde(serialize_with = "wire::number")]
    pub lat: f32,
    /// Longitude, valid in `[-180, 180]`.
    #[serde(serialize_with = "wire::number")]
    pub lon: f32,
}

impl Coordinates {
    /// Creates a point. Out-of-range values are accepted here and rejected
    /// by [`Validate::validate`].
    #[must_use]
    pub const fn new(lat: f32, lon: f32) -> Self {
        Self { lat, lon }
    }
}

impl Validate for Coordinates {
    fn validate(&self) -> Result<(), ValidationError> {
        // NaN fails `contains`, so non-finite input is rejected here too.
        if !LATITUDE_RANGE.contains(&self.lat) {
            return Err(ValidationError::at(
                "lat",
                Violation::LatitudeOutOfRange(self.lat),
            ));
        }
        if !LONGITUDE_RANGE.contains(&self.lon) {
            return Err(ValidationError::at(
                "lon",
                Violation::LongitudeOutOfRange(self.lon),
            ));
        }
        Ok(())
    }
}

/// A circular region: every point within `radius` meters of `center`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct GeoRadius {
    /// Center of the circle.
    pub center: Coordinates,
    /// Radius in meters.
    #[serde(serialize_with = "wire::number")]
    pub radius: f32,
}

impl GeoRadius {
    /// Creates a circular region around `center`.
    #[must_use]
    pub const fn new(center: Coordinates, radius: f32) -> Self {
        Self { center, radius }
    }
}

impl Validate for GeoRadius {
    fn validate(&self) -> Result<(), ValidationError> {
        self.center.validate().map_err(|e| e.within("center"))?;
        // JSON has no NaN or infinity; sign and magnitude are not checked.
        if !self.radius.is_finite() {
            return Err(ValidationError::at(
                "radius",
                Violation::InvalidRadius(self.radius),
            ));
        }
        Ok(())
    }
}

/// A rectangular region spanned by two corners.
///
/// Corners are not reordered or compared: a box whose left edge lies east of
/// its right edge crosses the antimeridian and is passed through as-is.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct GeoBoundingBox {
    /// South-east corner.
    pub bottom_right: Coordinates,
    /// North-west corner.
    pub top_left: Coordinates,
}

impl GeoBoundingBox {
    /// Creates a box from its north-west and south-east corners.
    #[must_use]
    pub const fn new(top_left: Coordinates, bottom_right: Coordinates) -> Self {
        Self {
            bottom_right,
            top_left,
        }
    }
}

impl Validate for GeoBoundingBox {
    fn validate(&self) -> Result<(), ValidationError> {
        self.top_left.validate().map_err(|e| e.within("top_left"))?;
        self.bottom_right
            .validate()
            .map_err(|e| e.within("bottom_right"))
    }
}
