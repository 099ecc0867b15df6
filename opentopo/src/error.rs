//! Error types for elevation queries.

use thiserror::Error;

/// Errors that can occur when querying elevation data.
#[derive(Error, Debug)]
pub enum ElevationError {
    /// Latitude outside the valid range.
    #[error("Latitude must be between -90 and 90 degrees, got {lat}")]
    InvalidLatitude { lat: f64 },

    /// Longitude outside the valid range.
    #[error("Longitude must be between -180 and 180 degrees, got {lon}")]
    InvalidLongitude { lon: f64 },

    /// Network-level failure reaching the provider (connect, timeout,
    /// reset), or a non-2xx HTTP status before the body was parsed.
    #[error("Transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// The provider was reachable but reported a non-OK status, or the
    /// response body did not match the documented shape.
    #[error("Elevation API error: {0}")]
    Api(String),
}

/// Result type alias using [`ElevationError`].
pub type Result<T> = std::result::Result<T, ElevationError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = ElevationError::InvalidLatitude { lat: 999.0 };
        assert!(err.to_string().contains("999"));
        assert!(err.to_string().contains("between"));

        let err = ElevationError::InvalidLongitude { lon: -200.5 };
        assert!(err.to_string().contains("-200.5"));
        assert!(err.to_string().contains("between"));

        let err = ElevationError::Api("Invalid dataset".to_string());
        assert_eq!(err.to_string(), "Elevation API error: Invalid dataset");
    }
}
