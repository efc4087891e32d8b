//! # Adapters Layer (Hexagonal Architecture)
//!
//! Implements the node API outbound port over HTTP and names the node's
//! routes.

mod http;
pub mod routes;

pub use http::HttpNodeApi;
