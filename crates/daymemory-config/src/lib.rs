//! Configuration for daymemory
//!
//! Loaded once at process start from a TOML file, before the first
//! request is served, and never mutated afterwards.

#![allow(clippy::must_use_candidate)]

mod env;
pub mod health;
mod loader;
pub mod server;
pub mod telemetry;

use serde::Deserialize;

pub use health::HealthConfig;
pub use server::ServerConfig;
pub use telemetry::{LogFormat, TelemetryConfig};

/// Top-level daymemory configuration
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// HTTP server configuration
    #[serde(default)]
    pub server: ServerConfig,
    /// Logging configuration
    #[serde(default)]
    pub telemetry: TelemetryConfig,
}
