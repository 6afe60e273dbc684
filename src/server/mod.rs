//! Server core functionality
//!
//! This module contains the application state, routing table, request
//! handlers, and HTML rendering for the file manager.

pub mod core;
pub mod handlers;
pub mod routes;
pub mod templates;

pub use core::{AppState, Server};
