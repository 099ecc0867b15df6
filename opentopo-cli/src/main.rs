//! Command-line elevation lookups against the Open Topo Data API.
//!
//! ## Environment Variables
//!
//! | Variable | Description | Default |
//! |----------|-------------|---------|
//! | `OPENTOPO_BASE_URL` | API endpoint | Public Open Topo Data API |
//! | `OPENTOPO_TIMEOUT_SECS` | Request timeout in seconds | 10 |
//! | `OPENTOPO_DATASET` | Dataset to query | "srtm90m" |
//! | `RUST_LOG` | Log level (e.g. "info", "debug") | "warn" |

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use opentopo::ElevationServiceBuilder;
use opentopo_tool::{handlers, AppState};

/// Query terrain elevation for a coordinate
#[derive(Parser)]
#[command(name = "opentopo")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Latitude in decimal degrees
    #[arg(long)]
    lat: f64,

    /// Longitude in decimal degrees
    #[arg(long)]
    lon: f64,

    /// Elevation dataset to query
    #[arg(short, long, env = "OPENTOPO_DATASET", default_value = opentopo::DEFAULT_DATASET)]
    dataset: String,

    /// Override the API endpoint
    #[arg(long)]
    base_url: Option<String>,

    /// Override the request timeout in seconds
    #[arg(long)]
    timeout_secs: Option<u64>,

    /// Best-effort mode: print the first elevation value or null,
    /// without the result envelope
    #[arg(short, long)]
    simple: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "opentopo=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();

    // Environment first, then explicit flags on top.
    let mut builder = ElevationServiceBuilder::from_env();
    if let Some(base_url) = cli.base_url {
        builder = builder.base_url(base_url);
    }
    if let Some(secs) = cli.timeout_secs {
        builder = builder.timeout_secs(secs);
    }

    let elevation = builder
        .build()
        .context("Failed to create elevation service")?;

    if cli.simple {
        match elevation
            .get_elevation_simple(cli.lat, cli.lon, &cli.dataset)
            .await
        {
            Some(elevation) => println!("{}", serde_json::to_string_pretty(&elevation)?),
            None => println!("null"),
        }
        return Ok(());
    }

    let state = AppState { elevation };
    let envelope = handlers::get_elevation(&state, cli.lat, cli.lon, &cli.dataset).await;
    println!("{}", serde_json::to_string_pretty(&envelope)?);

    Ok(())
}
