//! # Outbound Ports
//!
//! Trait for the one external collaborator: the node's REST API.

use std::collections::BTreeMap;
use std::sync::Mutex;

use async_trait::async_trait;

use crate::domain::DataError;

/// Node REST API - outbound port.
///
/// One-shot GET of a route's body; no retries, no caching, no circuit
/// breaking. Typed deserialization happens on the facade side.
#[async_trait]
pub trait NodeApi: Send + Sync {
    /// Fetch the raw response body for a route.
    async fn get_text(&self, route: &str) -> Result<String, DataError>;
}

// =============================================================================
// Mock Implementation for Testing
// =============================================================================

/// Mock node API with canned responses, for tests.
#[derive(Default)]
pub struct MockNodeApi {
    responses: BTreeMap<String, String>,
    fail_all: bool,
    requests: Mutex<Vec<String>>,
}

impl MockNodeApi {
    /// Empty mock; every route misses.
    pub fn new() -> Self {
        Self::default()
    }

    /// Mock that fails every request with a network error.
    pub fn failing() -> Self {
        Self {
            fail_all: true,
            ..Self::default()
        }
    }

    /// Register a canned JSON body for a route.
    pub fn with_response(mut self, route: &str, body: impl Into<String>) -> Self {
        self.responses.insert(route.to_string(), body.into());
        self
    }

    /// Routes requested so far, in order.
    pub fn requested_routes(&self) -> Vec<String> {
        self.requests.lock().unwrap().clone()
    }

    /// Number of requests issued against this mock.
    pub fn request_count(&self) -> usize {
        self.requests.lock().unwrap().len()
    }
}

#[async_trait]
impl NodeApi for MockNodeApi {
    async fn get_text(&self, route: &str) -> Result<String, DataError> {
        self.requests.lock().unwrap().push(route.to_string());

        if self.fail_all {
            return Err(DataError::Network {
                route: route.to_string(),
                reason: "mock failure".to_string(),
            });
        }

        self.responses
            .get(route)
            .cloned()
            .ok_or_else(|| DataError::Network {
                route: route.to_string(),
                reason: "no canned response".to_string(),
            })
    }
}
