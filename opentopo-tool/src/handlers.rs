//! Tool invocation handlers and schema definition.
//!
//! The envelope contract: every invocation returns a JSON object with a
//! `found` flag. Success carries the measurement fields; "no data here"
//! carries a human-readable `message`; invalid input and upstream
//! failures carry a generic `error` category. Upstream error detail is
//! logged, never placed in the envelope.

use serde::Deserialize;
use serde_json::{json, Value};

use opentopo::{ElevationRequest, DEFAULT_DATASET};

use crate::AppState;

/// Name the tool registers under.
pub const TOOL_NAME: &str = "get_elevation";

/// Arguments for a `get_elevation` tool call.
#[derive(Debug, Deserialize)]
pub struct ElevationArgs {
    /// Latitude in decimal degrees (-90 to 90).
    pub latitude: f64,
    /// Longitude in decimal degrees (-180 to 180).
    pub longitude: f64,
    /// Elevation dataset to query.
    #[serde(default = "default_dataset")]
    pub dataset: String,
}

fn default_dataset() -> String {
    DEFAULT_DATASET.to_string()
}

/// Tool definition for registration with an agent-protocol dispatcher:
/// name, description, and JSON Schema for the arguments.
pub fn definition() -> Value {
    json!({
        "name": TOOL_NAME,
        "description": "Get the terrain elevation at a geographic coordinate. \
            Returns the elevation in meters and feet from a named elevation \
            dataset, or found=false when the dataset has no data there.",
        "input_schema": {
            "type": "object",
            "properties": {
                "latitude": {
                    "type": "number",
                    "description": "Latitude in decimal degrees (-90 to 90)"
                },
                "longitude": {
                    "type": "number",
                    "description": "Longitude in decimal degrees (-180 to 180)"
                },
                "dataset": {
                    "type": "string",
                    "description": "Elevation dataset to query (default: srtm90m)"
                }
            },
            "required": ["latitude", "longitude"]
        }
    })
}

/// Dispatcher-facing entry point: parse raw tool-call arguments and
/// delegate. Unparsable arguments yield the `Invalid request` envelope.
pub async fn handle(state: &AppState, args: Value) -> Value {
    let args: ElevationArgs = match serde_json::from_value(args) {
        Ok(args) => args,
        Err(e) => {
            tracing::warn!(error = %e, "malformed tool arguments");
            return json!({"found": false, "error": "Invalid request"});
        }
    };

    get_elevation(state, args.latitude, args.longitude, &args.dataset).await
}

/// Look up elevation and fold the outcome into the envelope.
///
/// Never returns an error; see the module docs for the envelope shapes.
pub async fn get_elevation(
    state: &AppState,
    latitude: f64,
    longitude: f64,
    dataset: &str,
) -> Value {
    let request = match ElevationRequest::new(latitude, longitude, dataset) {
        Ok(request) => request,
        Err(e) => {
            // Rejected before any network activity.
            tracing::warn!(latitude, longitude, error = %e, "invalid elevation request");
            return json!({"found": false, "error": "Invalid request"});
        }
    };

    match state.elevation.get_elevation(&request).await {
        Ok(response) => match response.results.first() {
            Some(result) => {
                tracing::debug!(
                    latitude = result.latitude(),
                    longitude = result.longitude(),
                    meters = result.elevation.meters,
                    "elevation found"
                );
                // Echo the result's coordinate: the provider may have
                // snapped the query to a grid point.
                json!({
                    "found": true,
                    "latitude": result.latitude(),
                    "longitude": result.longitude(),
                    "elevation_meters": result.elevation.meters,
                    "elevation_feet": result.elevation.feet,
                    "dataset": result.elevation.dataset,
                })
            }
            None => json!({
                "found": false,
                "latitude": latitude,
                "longitude": longitude,
                "elevation_meters": null,
                "elevation_feet": null,
                "dataset": dataset,
                "message": format!(
                    "No elevation data found for ({latitude}, {longitude}) in dataset '{dataset}'"
                ),
            }),
        },
        Err(e) => {
            // Full detail for operators; only the category for the agent.
            tracing::error!(latitude, longitude, error = %e, "elevation lookup failed");
            json!({"found": false, "error": "API request failed"})
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_definition_shape() {
        let def = definition();
        assert_eq!(def["name"], TOOL_NAME);
        assert!(def["description"].is_string());

        let schema = &def["input_schema"];
        assert_eq!(schema["type"], "object");
        assert!(schema["properties"]["latitude"].is_object());
        assert!(schema["properties"]["longitude"].is_object());
        assert!(schema["properties"]["dataset"].is_object());
        assert_eq!(schema["required"], json!(["latitude", "longitude"]));
    }

    #[test]
    fn test_args_default_dataset() {
        let args: ElevationArgs =
            serde_json::from_value(json!({"latitude": 35.0, "longitude": -78.0})).unwrap();
        assert_eq!(args.dataset, DEFAULT_DATASET);

        let args: ElevationArgs = serde_json::from_value(
            json!({"latitude": 35.0, "longitude": -78.0, "dataset": "aster30m"}),
        )
        .unwrap();
        assert_eq!(args.dataset, "aster30m");
    }

    #[test]
    fn test_args_reject_missing_fields() {
        assert!(serde_json::from_value::<ElevationArgs>(json!({"latitude": 35.0})).is_err());
        assert!(serde_json::from_value::<ElevationArgs>(json!({})).is_err());
    }
}
