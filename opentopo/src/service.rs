//! Elevation queries against the Open Topo Data API.
//!
//! This module provides [`ElevationService`], a thin client over the public
//! Open Topo Data HTTP API (<https://www.opentopodata.org/>). Each query is
//! a single GET round-trip; the underlying [`reqwest::Client`] is created
//! once and reused across calls so connections are pooled rather than
//! re-negotiated per lookup.
//!
//! ```ignore
//! use opentopo::{ElevationRequest, ElevationService};
//!
//! let service = ElevationService::new()?;
//! let request = ElevationRequest::new(35.6893514, -78.7767045, "srtm90m")?;
//!
//! let response = service.get_elevation(&request).await?;
//! if let Some(result) = response.results.first() {
//!     println!("{}m ({}ft)", result.elevation.meters, result.elevation.feet);
//! }
//! ```

use std::time::Duration;

use serde::Deserialize;

use crate::error::{ElevationError, Result};
use crate::model::{
    Coordinate, Elevation, ElevationRequest, ElevationResponse, ElevationResult,
};

/// Public Open Topo Data API endpoint.
pub const DEFAULT_BASE_URL: &str = "https://api.opentopodata.org/v1";

/// Default request timeout in seconds.
const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// User agent sent with every request.
const USER_AGENT: &str = concat!("opentopo/", env!("CARGO_PKG_VERSION"));

/// Wire shape of an Open Topo Data response.
///
/// Deserialized strictly so a malformed payload surfaces as an API error
/// instead of a panic deep in field access.
#[derive(Debug, Deserialize)]
struct ApiResponse {
    status: String,
    #[serde(default)]
    results: Vec<ApiResult>,
    /// Provider error detail, present when `status` is not `"OK"`.
    #[serde(default)]
    error: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ApiResult {
    dataset: String,
    /// `null` for void points (e.g. open ocean).
    elevation: Option<f64>,
    location: ApiLocation,
}

#[derive(Debug, Deserialize)]
struct ApiLocation {
    lat: f64,
    lng: f64,
}

/// Client for single-point elevation queries.
///
/// Holds a shared HTTP client for its whole lifetime; cheap to call from
/// many tasks concurrently. Stateless apart from the client's own
/// connection pool.
///
/// # Example
///
/// ```ignore
/// use opentopo::ElevationService;
///
/// let service = ElevationService::builder()
///     .timeout_secs(5)
///     .build()?;
///
/// // Best-effort variant: a value or None, never an error.
/// let elevation = service.get_elevation_simple(35.68, -78.77, "srtm90m").await;
/// ```
pub struct ElevationService {
    /// Shared HTTP client, reused across all queries.
    client: reqwest::Client,
    /// API endpoint queried with `locations` and `dataset` parameters.
    base_url: String,
}

impl ElevationService {
    /// Create a service with default configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be constructed (e.g.
    /// TLS initialization failure).
    pub fn new() -> Result<Self> {
        Self::builder().build()
    }

    /// Create a builder for custom configuration.
    pub fn builder() -> ElevationServiceBuilder {
        ElevationServiceBuilder::new()
    }

    /// The API endpoint this service queries.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Query elevation for a validated request.
    ///
    /// Performs exactly one GET round-trip. An empty `results` array from
    /// the provider is a legitimate count-0 response, not an error.
    ///
    /// # Errors
    ///
    /// - [`ElevationError::Transport`] on network failure or a non-2xx
    ///   HTTP status.
    /// - [`ElevationError::Api`] when the provider reports a non-OK
    ///   status or returns a body that does not match the documented
    ///   shape.
    pub async fn get_elevation(&self, request: &ElevationRequest) -> Result<ElevationResponse> {
        let coordinate = request.coordinate();
        tracing::debug!(
            latitude = coordinate.latitude(),
            longitude = coordinate.longitude(),
            dataset = request.dataset(),
            "elevation query"
        );

        let locations = format!("{},{}", coordinate.latitude(), coordinate.longitude());
        let response = self
            .client
            .get(&self.base_url)
            .query(&[("locations", locations.as_str()), ("dataset", request.dataset())])
            .send()
            .await
            .map_err(|e| {
                tracing::error!(error = %e, "elevation request failed");
                ElevationError::Transport(e)
            })?;

        // Reject non-2xx before touching the body.
        let response = response.error_for_status().map_err(|e| {
            tracing::error!(error = %e, "elevation API returned an error status");
            ElevationError::Transport(e)
        })?;

        let text = response.text().await?;
        let body: ApiResponse = serde_json::from_str(&text)
            .map_err(|e| ElevationError::Api(format!("malformed response: {e}")))?;

        if body.status != "OK" {
            let detail = match body.error {
                Some(detail) => detail,
                None => format!("status {}", body.status),
            };
            return Err(ElevationError::Api(detail));
        }

        let mut results = Vec::with_capacity(body.results.len());
        for entry in body.results {
            let Some(meters) = entry.elevation else {
                // Void point (e.g. ocean): no usable measurement here.
                tracing::debug!(
                    latitude = entry.location.lat,
                    longitude = entry.location.lng,
                    "skipping result without an elevation value"
                );
                continue;
            };
            let coordinate = Coordinate::new(entry.location.lat, entry.location.lng)
                .map_err(|e| ElevationError::Api(format!("invalid result coordinate: {e}")))?;
            results.push(ElevationResult {
                coordinate,
                elevation: Elevation::new(meters, entry.dataset),
            });
        }

        tracing::debug!(count = results.len(), "elevation query succeeded");
        Ok(ElevationResponse { results })
    }

    /// Best-effort single-value lookup.
    ///
    /// Builds the request, queries, and returns the first result's
    /// [`Elevation`], or `None` when there is no data. Validation,
    /// transport, and API failures are logged and also collapse to
    /// `None` — this entry point never returns an error. Callers that
    /// need to distinguish "no data" from "request failed" should use
    /// [`get_elevation`](Self::get_elevation).
    pub async fn get_elevation_simple(
        &self,
        latitude: f64,
        longitude: f64,
        dataset: &str,
    ) -> Option<Elevation> {
        let request = match ElevationRequest::new(latitude, longitude, dataset) {
            Ok(request) => request,
            Err(e) => {
                tracing::warn!(latitude, longitude, error = %e, "invalid elevation request");
                return None;
            }
        };

        match self.get_elevation(&request).await {
            Ok(response) => response.results.into_iter().next().map(|r| r.elevation),
            Err(e) => {
                tracing::warn!(latitude, longitude, error = %e, "elevation lookup failed");
                None
            }
        }
    }
}

/// Builder for configuring an [`ElevationService`].
///
/// # Example
///
/// ```ignore
/// use opentopo::ElevationServiceBuilder;
///
/// let service = ElevationServiceBuilder::from_env()
///     .timeout_secs(5)
///     .build()?;
/// ```
pub struct ElevationServiceBuilder {
    base_url: String,
    timeout: Duration,
    client: Option<reqwest::Client>,
}

impl Default for ElevationServiceBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl ElevationServiceBuilder {
    /// Create a builder with default settings.
    pub fn new() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            client: None,
        }
    }

    /// Create a builder configured from environment variables.
    ///
    /// # Environment Variables
    ///
    /// | Variable | Description | Default |
    /// |----------|-------------|---------|
    /// | `OPENTOPO_BASE_URL` | API endpoint | Public Open Topo Data API |
    /// | `OPENTOPO_TIMEOUT_SECS` | Request timeout in seconds | 10 |
    pub fn from_env() -> Self {
        let mut builder = Self::new();

        if let Ok(base_url) = std::env::var("OPENTOPO_BASE_URL") {
            builder.base_url = base_url;
        }

        if let Some(secs) = std::env::var("OPENTOPO_TIMEOUT_SECS")
            .ok()
            .and_then(|s| s.parse().ok())
        {
            builder.timeout = Duration::from_secs(secs);
        }

        builder
    }

    /// Set the API endpoint.
    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Set the request timeout in seconds.
    ///
    /// Default is 10 seconds. Ignored when a client is injected with
    /// [`client`](Self::client).
    pub fn timeout_secs(mut self, secs: u64) -> Self {
        self.timeout = Duration::from_secs(secs);
        self
    }

    /// Use a preconfigured HTTP client instead of building one.
    ///
    /// Useful for sharing one connection pool across several services,
    /// or for supplying proxy/TLS settings owned by the embedding
    /// process.
    pub fn client(mut self, client: reqwest::Client) -> Self {
        self.client = Some(client);
        self
    }

    /// Build the [`ElevationService`].
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be constructed.
    pub fn build(self) -> Result<ElevationService> {
        let client = match self.client {
            Some(client) => client,
            None => reqwest::Client::builder()
                .timeout(self.timeout)
                .user_agent(USER_AGENT)
                .build()?,
        };

        Ok(ElevationService {
            client,
            base_url: self.base_url,
        })
    }
}
