//! Route table
//!
//! Maps the HTTP surface onto its handlers. Body size limits are disabled
//! on the upload routes so whole-directory uploads go through.

use axum::Router;
use axum::extract::DefaultBodyLimit;
use axum::middleware;
use axum::routing::{get, post};

use crate::middleware::log_requests;
use crate::server::core::AppState;
use crate::server::handlers;

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::index).post(handlers::login))
        .route("/browse/:section", get(handlers::browse_root))
        .route("/browse/:section/*path", get(handlers::browse))
        .route("/create-folder", post(handlers::create_folder))
        .route(
            "/upload",
            post(handlers::upload_file).layer(DefaultBodyLimit::disable()),
        )
        .route(
            "/upload-folder",
            post(handlers::upload_folder).layer(DefaultBodyLimit::disable()),
        )
        .route("/delete", post(handlers::delete_entry))
        .route("/files/:section/*path", get(handlers::download_file))
        .route("/download-zip/:section", get(handlers::download_zip_root))
        .route("/download-zip/:section/*path", get(handlers::download_zip))
        .route("/logout", get(handlers::logout))
        .layer(middleware::from_fn(log_requests))
        .with_state(state)
}
