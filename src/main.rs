//! Traction Vault - Entry Point
//!
//! A browser-based file manager for the fixed traction-power documentation
//! sections (catenaire, sousstation).

use log::{error, info};

use traction_vault::Server;
use traction_vault::config::ServerConfig;

#[tokio::main]
async fn main() {
    // Initialize the logger (env_logger picks up RUST_LOG environment variable)
    env_logger::init();

    info!("Launching traction vault server...");

    let config = match ServerConfig::load() {
        Ok(config) => config,
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            std::process::exit(1);
        }
    };

    let server = Server::new(config);
    server.start().await;
}
