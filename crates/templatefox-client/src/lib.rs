//! templatefox-client
//!
//! Authenticated HTTP client for the TemplateFox API, best-effort template
//! schema lookup, and the sequential batch generation runner.

pub mod batch;
pub mod client;
pub mod error;
pub mod schema;
