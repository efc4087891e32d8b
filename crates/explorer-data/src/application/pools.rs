//! Validator pool operations.

use explorer_types::Pool;

use crate::adapters::routes;
use crate::domain::DataError;
use crate::mock;
use crate::ports::NodeApi;

use super::service::{now_ms, ExplorerService};

impl<N: NodeApi> ExplorerService<N> {
    /// A validator pool with its contract account and storage.
    ///
    /// No dev fallback: a failed pool fetch is an error in every
    /// environment.
    pub async fn pool_by_id(&self, pool_id: &str) -> Result<Pool, DataError> {
        if self.config.entity_stub {
            return Ok(mock::pool::pool_by_id(pool_id, now_ms()));
        }

        self.get(&routes::pool_stats(pool_id))
            .await
            .map_err(|err| err.for_entity("pool", pool_id))
    }
}
