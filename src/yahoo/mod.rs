//! Yahoo Fantasy Sports API client: HTTP calls, response flattening, and a
//! small disk cache for league metadata.

pub mod cache;
pub mod flatten;
pub mod http;
pub mod types;
