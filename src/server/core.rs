//! Server core
//!
//! Owns the shared application state and runs the HTTP listener.

use log::{error, info, warn};
use std::path::PathBuf;
use std::sync::Arc;
use tokio::net::TcpListener;

use crate::auth::{CredentialStore, SessionRegistry, StaticCredentials};
use crate::config::ServerConfig;
use crate::server::routes;
use crate::storage::Section;

/// Shared state handed to every request handler.
#[derive(Clone)]
pub struct AppState {
    pub storage_root: PathBuf,
    pub sessions: SessionRegistry,
    pub credentials: Arc<dyn CredentialStore>,
}

pub struct Server {
    config: ServerConfig,
    state: AppState,
}

impl Server {
    /// Creates the server state and ensures the section directories exist.
    pub fn new(config: ServerConfig) -> Self {
        let storage_root = config.storage_root_path();

        for section in Section::ALL {
            let dir = storage_root.join(section.as_str());
            if let Err(e) = std::fs::create_dir_all(&dir) {
                warn!("Failed to create section directory {}: {}", dir.display(), e);
            }
        }
        info!("Storage root: {}", storage_root.display());

        let state = AppState {
            storage_root,
            sessions: SessionRegistry::new(),
            credentials: Arc::new(StaticCredentials::default()),
        };

        Self { config, state }
    }

    /// Binds the listener and serves requests until the process exits.
    pub async fn start(&self) {
        let addr = self.config.socket_addr();

        let listener = match TcpListener::bind(&addr).await {
            Ok(listener) => {
                info!("Server bound to {}", addr);
                listener
            }
            Err(e) => {
                error!("Failed to bind to {}: {}", addr, e);
                panic!("Server startup failed on socket {}: {}", addr, e);
            }
        };

        let app = routes::router(self.state.clone());

        info!("Starting traction vault server on {}", addr);
        if let Err(e) = axum::serve(listener, app).await {
            error!("Server error: {}", e);
        }
    }
}
