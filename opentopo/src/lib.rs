//! # opentopo — Open Topo Data elevation client
//!
//! Client library for single-point elevation queries (coordinate → terrain
//! height) against the public Open Topo Data API.
//!
//! ## Features
//!
//! - **Validated requests**: coordinates are range-checked at construction,
//!   before any network activity
//! - **Typed results**: strict response parsing into meters, derived feet,
//!   and the provider-reported dataset name
//! - **Shared client**: one pooled HTTP client reused across all queries
//! - **Explicit failures**: a small error taxonomy separating invalid
//!   input, transport failures, and provider-reported errors
//!
//! ## Quick Start
//!
//! ```ignore
//! use opentopo::{ElevationRequest, ElevationService, DEFAULT_DATASET};
//!
//! let service = ElevationService::new()?;
//!
//! let request = ElevationRequest::new(35.6893514, -78.7767045, DEFAULT_DATASET)?;
//! let response = service.get_elevation(&request).await?;
//!
//! for result in &response.results {
//!     println!(
//!         "({}, {}): {}m / {}ft [{}]",
//!         result.latitude(),
//!         result.longitude(),
//!         result.elevation.meters,
//!         result.elevation.feet,
//!         result.elevation.dataset,
//!     );
//! }
//! ```
//!
//! ## Datasets
//!
//! Open Topo Data serves several named terrain models (`srtm90m`,
//! `srtm30m`, `aster30m`, `etopo1`, ...). Queries default to `srtm90m`;
//! see <https://www.opentopodata.org/#public-api> for the full list and
//! coverage notes.

pub mod error;
pub mod model;
pub mod service;

// Re-export main types at crate root for convenience
pub use error::{ElevationError, Result};
pub use model::{
    meters_to_feet, Coordinate, Elevation, ElevationRequest, ElevationResponse,
    ElevationResult, DEFAULT_DATASET, FEET_PER_METER,
};
pub use service::{ElevationService, ElevationServiceBuilder, DEFAULT_BASE_URL};
