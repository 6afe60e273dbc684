//! Error responses
//!
//! Maps domain errors to HTTP responses at the routing boundary.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use log::error;

use super::types::{ArchiveError, AuthError, StorageError, VaultError};

impl IntoResponse for VaultError {
    fn into_response(self) -> Response {
        match &self {
            VaultError::Storage(StorageError::NotFound(_)) => {
                (StatusCode::NOT_FOUND, self.to_string()).into_response()
            }
            VaultError::Storage(StorageError::UnknownSection(_))
            | VaultError::Storage(StorageError::PathTraversal(_))
            | VaultError::Storage(StorageError::InvalidPath(_))
            | VaultError::Archive(ArchiveError::InvalidPath(_))
            | VaultError::Auth(AuthError::UnknownRole(_))
            | VaultError::Auth(AuthError::MalformedInput(_))
            | VaultError::MalformedInput(_) => {
                (StatusCode::BAD_REQUEST, self.to_string()).into_response()
            }
            _ => {
                error!("Internal error while handling request: {}", self);
                (StatusCode::INTERNAL_SERVER_ERROR, "Internal server error".to_string())
                    .into_response()
            }
        }
    }
}
