//! # Explorer Configuration
//!
//! The facade takes an explicit config object instead of reading the
//! process environment at call sites, so stub/production branching stays
//! testable. `from_env` exists for binaries.

use serde::{Deserialize, Serialize};

/// Default node endpoint for local development.
pub const DEFAULT_NODE_URL: &str = "http://localhost:7332";

/// Configuration consumed by the data-access facade.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ExplorerConfig {
    /// Node REST API endpoint.
    pub node_url: String,

    /// Global stub mode: blockchain-summary and entity fetches return stub
    /// data without touching the network.
    pub global_stub: bool,

    /// Entity stub mode: account/pool/per-epoch-stats fetches return stub
    /// data without touching the network.
    pub entity_stub: bool,

    /// Production flag. In production a failed remote call propagates as an
    /// error; outside production it falls back to stub data for the
    /// operations that allow it.
    pub production: bool,

    /// Validator-list ordering toggle: list quorum members first instead of
    /// leadership order. Pure presentation.
    pub quorum_first_ordering: bool,
}

impl Default for ExplorerConfig {
    fn default() -> Self {
        Self {
            node_url: DEFAULT_NODE_URL.to_string(),
            global_stub: false,
            entity_stub: false,
            production: false,
            quorum_first_ordering: false,
        }
    }
}

impl ExplorerConfig {
    /// Read configuration from the process environment.
    ///
    /// `STUB_MODE`, `ENTITY_STUB_MODE` and `MODE_1` accept `1`, `true`,
    /// `yes`, `on` (case-insensitive); `NODE_ENV=production` marks
    /// production; `NODE_URL` overrides the endpoint.
    pub fn from_env() -> Self {
        Self {
            node_url: std::env::var("NODE_URL").unwrap_or_else(|_| DEFAULT_NODE_URL.to_string()),
            global_stub: truthy(std::env::var("STUB_MODE").ok().as_deref()),
            entity_stub: truthy(std::env::var("ENTITY_STUB_MODE").ok().as_deref()),
            production: std::env::var("NODE_ENV").as_deref() == Ok("production"),
            quorum_first_ordering: truthy(std::env::var("MODE_1").ok().as_deref()),
        }
    }

    /// Config for tests: stub everything, never production.
    pub fn for_testing() -> Self {
        Self {
            global_stub: true,
            entity_stub: true,
            ..Self::default()
        }
    }
}

/// Accepted truthy spellings of an environment flag.
fn truthy(raw: Option<&str>) -> bool {
    match raw {
        None => false,
        Some(v) => matches!(
            v.trim().to_lowercase().as_str(),
            "1" | "true" | "yes" | "on"
        ),
    }
}
