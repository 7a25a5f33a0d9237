//! gateway-qa library
//!
//! Shared command-line options and command handlers for the `gateway-qa`
//! binary, which seeds a banking API gateway with test data and runs load
//! scenarios against it.
//!
//! # CLI Usage
//!
//! ```bash
//! # Seed 300 users with credit-card accounts and operations over HTTP
//! gateway-qa seeds build existing_user_get_operations
//!
//! # Same plan over the gRPC facade
//! gateway-qa seeds build existing_user_get_operations --transport grpc
//!
//! # Entity counts of a saved dump
//! gateway-qa seeds show existing_user_get_operations
//!
//! # Read-heavy load over the seeded users
//! gateway-qa loadtest run http-existing-user-get-operations --users 50 --spawn-rate 5 --run-time 300
//! ```

use clap::{Parser, ValueEnum};
use gateway_grpc_client::GrpcClientConfig;
use gateway_http_client::HttpClientConfig;
use seeds::DumpStore;
use std::path::PathBuf;
use std::time::Duration;

pub mod loadtest;
pub mod seeding;

#[derive(Parser, Clone, Debug)]
pub struct GatewayOpts {
    /// Base URL of the gateway HTTP API
    #[arg(
        long,
        default_value = "http://localhost:8003",
        env = "GATEWAY_HTTP_URL"
    )]
    pub gateway_http_url: String,

    /// URL of the gateway gRPC API
    #[arg(
        long,
        default_value = "http://localhost:9003",
        env = "GATEWAY_GRPC_URL"
    )]
    pub gateway_grpc_url: String,

    /// Per-request timeout in seconds
    #[arg(long, default_value = "100", env = "GATEWAY_TIMEOUT_SECS")]
    pub gateway_timeout_secs: u64,

    /// Directory holding seeds dumps
    #[arg(long, default_value = seeds::DEFAULT_DUMPS_DIR, env = "SEEDS_DUMPS_DIR")]
    pub dumps_dir: PathBuf,
}

impl GatewayOpts {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.gateway_timeout_secs)
    }

    pub fn http_config(&self) -> HttpClientConfig {
        HttpClientConfig::new(&self.gateway_http_url).with_timeout(self.timeout())
    }

    pub fn grpc_config(&self) -> GrpcClientConfig {
        GrpcClientConfig::new(&self.gateway_grpc_url).with_timeout(self.timeout())
    }

    pub fn dump_store(&self) -> DumpStore {
        DumpStore::new(self.dumps_dir.clone())
    }
}

/// Transport used to reach the gateway while seeding.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum TransportArg {
    #[value(name = "http")]
    Http,
    #[value(name = "grpc")]
    Grpc,
}
