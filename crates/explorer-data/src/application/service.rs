//! # Explorer Service
//!
//! Application facade over the node API. Every remote operation applies the
//! same discipline: serve deterministic stub data when the matching stub
//! gate is on, otherwise fetch and normalize; outside production a failed
//! fetch degrades to stub data with a warning instead of surfacing an error.

use serde::de::DeserializeOwned;

use explorer_types::Epoch;

use crate::config::ExplorerConfig;
use crate::domain::DataError;
use crate::ports::NodeApi;

/// Explorer Service - fetches entities from the node and normalizes them
/// into view models.
pub struct ExplorerService<N: NodeApi> {
    /// Outbound node connection.
    pub(crate) api: N,
    /// Stub gates and environment.
    pub(crate) config: ExplorerConfig,
}

impl<N: NodeApi> ExplorerService<N> {
    /// Create a new service over a node connection.
    pub fn new(api: N, config: ExplorerConfig) -> Self {
        Self { api, config }
    }

    /// The active configuration.
    pub fn config(&self) -> &ExplorerConfig {
        &self.config
    }

    /// The underlying node connection.
    pub fn api(&self) -> &N {
        &self.api
    }

    /// Internal: fetch a route and decode its JSON body.
    pub(crate) async fn get<T: DeserializeOwned>(&self, route: &str) -> Result<T, DataError> {
        tracing::debug!("[explorer-data] GET {}", route);
        let body = self.api.get_text(route).await?;
        serde_json::from_str(&body).map_err(|e| DataError::Decode {
            route: route.to_string(),
            reason: e.to_string(),
        })
    }

    /// Internal: whether a failed fetch degrades to stub data.
    pub(crate) fn stub_on_failure(&self) -> bool {
        !self.config.production
    }

    /// Validators of an epoch in display order.
    ///
    /// With `quorum_first_ordering` the full registry is listed with quorum
    /// members first (stable within each group); otherwise the epoch's
    /// leaders sequence is shown as-is.
    pub fn ordered_validators(&self, epoch: &Epoch) -> Vec<String> {
        if self.config.quorum_first_ordering {
            let mut pools = epoch.pools_registry.clone();
            pools.sort_by_key(|pool| !epoch.quorum.contains(pool));
            pools
        } else {
            epoch.leaders_sequence.clone()
        }
    }
}

/// Current wall clock, milliseconds since the UNIX epoch. Stub generators
/// take this as a parameter so tests can pin it.
pub(crate) fn now_ms() -> u64 {
    chrono::Utc::now().timestamp_millis().max(0) as u64
}
