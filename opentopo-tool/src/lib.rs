//! Agent tool facade for elevation lookups.
//!
//! Wraps [`opentopo::ElevationService`] as a tool an AI-agent dispatcher
//! can register and invoke. Every outcome — success, no data, invalid
//! input, upstream failure — is returned as a tagged JSON envelope; no
//! call through this crate ever raises, so the dispatcher can branch on
//! `found`/`error` without error handling of its own.

pub mod handlers;

use opentopo::ElevationService;

/// Application state shared across tool invocations.
///
/// Holds the process-lifetime elevation service (and with it the pooled
/// HTTP client); re-entrant, safe to share across concurrent calls.
pub struct AppState {
    /// Elevation service for upstream queries.
    pub elevation: ElevationService,
}

// Re-export commonly used items for convenience
pub use handlers::{definition, handle, ElevationArgs, TOOL_NAME};
