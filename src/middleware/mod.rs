//! HTTP middleware
//!
//! Cross-cutting request handling layered onto the router.

pub mod logging;

pub use logging::log_requests;
