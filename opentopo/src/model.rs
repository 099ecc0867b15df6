//! Data model for elevation requests and results.
//!
//! All types here are transient: constructed per query and discarded once
//! the caller has consumed the result. Coordinate validation happens at
//! construction time, so a value of these types is valid by existence.

use serde::Serialize;

use crate::error::{ElevationError, Result};

/// Feet per meter.
pub const FEET_PER_METER: f64 = 3.28084;

/// Dataset queried when the caller does not name one.
pub const DEFAULT_DATASET: &str = "srtm90m";

/// Convert an elevation in meters to feet.
///
/// Pure and deterministic; defined for all finite inputs.
pub fn meters_to_feet(meters: f64) -> f64 {
    meters * FEET_PER_METER
}

/// A validated geographic coordinate in decimal degrees (WGS84).
///
/// Latitude is constrained to [-90, 90] and longitude to [-180, 180];
/// construction is the only way to obtain one, so out-of-range values
/// are rejected before they can reach the network.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Coordinate {
    latitude: f64,
    longitude: f64,
}

impl Coordinate {
    /// Create a coordinate, validating both components.
    ///
    /// # Errors
    ///
    /// Returns [`ElevationError::InvalidLatitude`] or
    /// [`ElevationError::InvalidLongitude`] if a component is out of range.
    pub fn new(latitude: f64, longitude: f64) -> Result<Self> {
        if !(-90.0..=90.0).contains(&latitude) {
            return Err(ElevationError::InvalidLatitude { lat: latitude });
        }
        if !(-180.0..=180.0).contains(&longitude) {
            return Err(ElevationError::InvalidLongitude { lon: longitude });
        }
        Ok(Self {
            latitude,
            longitude,
        })
    }

    /// Latitude in decimal degrees.
    pub fn latitude(&self) -> f64 {
        self.latitude
    }

    /// Longitude in decimal degrees.
    pub fn longitude(&self) -> f64 {
        self.longitude
    }
}

/// A single elevation query: one coordinate plus the dataset to query.
///
/// Immutable once constructed; build a fresh one per call.
#[derive(Debug, Clone, PartialEq)]
pub struct ElevationRequest {
    coordinate: Coordinate,
    dataset: String,
}

impl ElevationRequest {
    /// Create a request, validating the coordinate.
    ///
    /// # Errors
    ///
    /// Returns a validation error if the coordinate is out of range.
    pub fn new(latitude: f64, longitude: f64, dataset: impl Into<String>) -> Result<Self> {
        Ok(Self {
            coordinate: Coordinate::new(latitude, longitude)?,
            dataset: dataset.into(),
        })
    }

    /// The validated coordinate.
    pub fn coordinate(&self) -> Coordinate {
        self.coordinate
    }

    /// The dataset to query.
    pub fn dataset(&self) -> &str {
        &self.dataset
    }
}

/// An elevation measurement in both source and derived units.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Elevation {
    /// Elevation in meters, as reported by the provider.
    pub meters: f64,
    /// Elevation in feet, derived once at construction.
    pub feet: f64,
    /// The dataset the measurement came from. The provider reports this
    /// back and it may differ from the requested dataset name.
    pub dataset: String,
}

impl Elevation {
    /// Create a measurement, deriving feet from meters.
    pub fn new(meters: f64, dataset: impl Into<String>) -> Self {
        Self {
            meters,
            feet: meters_to_feet(meters),
            dataset: dataset.into(),
        }
    }
}

/// One resolved point: the coordinate the provider answered for and the
/// elevation it reported there.
///
/// The coordinate may differ from the one requested — providers snap
/// queries to the nearest grid point of the dataset.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ElevationResult {
    /// The (possibly grid-snapped) coordinate of the measurement.
    pub coordinate: Coordinate,
    /// The measurement at that coordinate.
    pub elevation: Elevation,
}

impl ElevationResult {
    /// Latitude of the measurement coordinate.
    pub fn latitude(&self) -> f64 {
        self.coordinate.latitude()
    }

    /// Longitude of the measurement coordinate.
    pub fn longitude(&self) -> f64 {
        self.coordinate.longitude()
    }
}

/// An ordered sequence of results from one query.
///
/// Empty is a legitimate outcome (no data at that location/dataset),
/// not an error.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ElevationResponse {
    /// Results in provider order.
    pub results: Vec<ElevationResult>,
}

impl ElevationResponse {
    /// Number of results. Always recomputed from the sequence length.
    pub fn count(&self) -> usize {
        self.results.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_meters_to_feet_conversion() {
        assert!((meters_to_feet(100.0) - 328.084).abs() / 328.084 < 1e-3);
        assert!((meters_to_feet(124.0) - 406.824).abs() / 406.824 < 1e-3);
        assert_eq!(meters_to_feet(0.0), 0.0);
    }

    #[test]
    fn test_coordinate_valid() {
        let coord = Coordinate::new(35.6893514, -78.7767045).unwrap();
        assert_eq!(coord.latitude(), 35.6893514);
        assert_eq!(coord.longitude(), -78.7767045);

        // Boundary values are valid.
        assert!(Coordinate::new(90.0, 180.0).is_ok());
        assert!(Coordinate::new(-90.0, -180.0).is_ok());
    }

    #[test]
    fn test_coordinate_invalid_latitude() {
        let err = Coordinate::new(999.0, 0.0).unwrap_err();
        assert!(matches!(err, ElevationError::InvalidLatitude { .. }));
    }

    #[test]
    fn test_coordinate_invalid_longitude() {
        let err = Coordinate::new(0.0, 999.0).unwrap_err();
        assert!(matches!(err, ElevationError::InvalidLongitude { .. }));
    }

    #[test]
    fn test_request_construction() {
        let request = ElevationRequest::new(35.6893514, -78.7767045, "srtm90m").unwrap();
        assert_eq!(request.coordinate().latitude(), 35.6893514);
        assert_eq!(request.dataset(), "srtm90m");

        assert!(ElevationRequest::new(999.0, 0.0, "srtm90m").is_err());
        assert!(ElevationRequest::new(0.0, 999.0, "srtm90m").is_err());
    }

    #[test]
    fn test_elevation_derives_feet() {
        let elevation = Elevation::new(124.0, "srtm90m");
        assert_eq!(elevation.meters, 124.0);
        assert!((elevation.feet - 406.824).abs() / 406.824 < 1e-3);
        assert_eq!(elevation.dataset, "srtm90m");

        let zero = Elevation::new(0.0, "srtm90m");
        assert_eq!(zero.feet, 0.0);
    }

    #[test]
    fn test_response_count_matches_length() {
        let mut response = ElevationResponse::default();
        assert_eq!(response.count(), 0);

        response.results.push(ElevationResult {
            coordinate: Coordinate::new(35.0, -78.0).unwrap(),
            elevation: Elevation::new(124.0, "srtm90m"),
        });
        assert_eq!(response.count(), 1);
        assert_eq!(response.count(), response.results.len());
    }
}
