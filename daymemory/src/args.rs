use std::path::PathBuf;

use clap::Parser;

/// Daymemory reminder service
#[derive(Debug, Parser)]
#[command(name = "daymemory", about = "Personal day-memory reminder API server")]
pub struct Args {
    /// Path to configuration file
    #[arg(short, long, default_value = "daymemory.toml", env = "DAYMEMORY_CONFIG")]
    pub config: PathBuf,

    /// Override the listen address
    #[arg(long, env = "DAYMEMORY_LISTEN")]
    pub listen: Option<std::net::SocketAddr>,
}
