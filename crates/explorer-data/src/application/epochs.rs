//! Epoch operations.

use explorer_types::{BlockStats, Epoch, EpochExtendedData};

use crate::adapters::routes;
use crate::domain::{tx_success_rate, DataError};
use crate::mock;
use crate::ports::NodeApi;

use super::service::{now_ms, ExplorerService};

impl<N: NodeApi> ExplorerService<N> {
    /// The network's current epoch, as reported by the node.
    pub async fn current_epoch(&self) -> Result<Epoch, DataError> {
        if self.config.global_stub {
            return Ok(mock::epoch::epoch_by_id(mock::block::STUB_EPOCH_ID, now_ms()).epoch);
        }

        match self.get(&routes::current_epoch()).await {
            Ok(epoch) => Ok(epoch),
            Err(err) if self.stub_on_failure() => {
                tracing::warn!(
                    "[explorer-data] current epoch unavailable, serving stub: {}",
                    err
                );
                Ok(mock::epoch::epoch_by_id(mock::block::STUB_EPOCH_ID, now_ms()).epoch)
            }
            Err(err) => Err(err.for_entity("current epoch", "current")),
        }
    }

    /// An epoch with the derived fields the epoch page renders.
    pub async fn epoch_by_id(&self, id: u64) -> Result<EpochExtendedData, DataError> {
        if self.config.global_stub {
            return Ok(mock::epoch::epoch_by_id(id, now_ms()));
        }

        match self.fetch_epoch_by_id(id).await {
            Ok(data) => Ok(data),
            Err(err) if self.stub_on_failure() => {
                tracing::warn!(
                    "[explorer-data] epoch \"{}\" unavailable, serving stub: {}",
                    id,
                    err
                );
                Ok(mock::epoch::epoch_by_id(id, now_ms()))
            }
            Err(err) => Err(err.for_entity("epoch", id.to_string())),
        }
    }

    async fn fetch_epoch_by_id(&self, id: u64) -> Result<EpochExtendedData, DataError> {
        // The current epoch decides `is_current` and is reused instead of
        // refetched when it is the one asked for.
        let current: Epoch = self.get(&routes::current_epoch()).await?;
        let is_current = id == current.id;
        let epoch: Epoch = if is_current {
            current
        } else {
            self.get(&routes::epoch_by_id(id)).await?
        };
        let stats = self.total_blocks_and_txs_by_epoch(epoch.id).await?;
        Ok(extend_epoch(epoch, is_current, &stats))
    }
}

fn extend_epoch(epoch: Epoch, is_current: bool, stats: &BlockStats) -> EpochExtendedData {
    EpochExtendedData {
        is_first: epoch.id == 0,
        is_current,
        shards_number: epoch.shards_registry.len(),
        validators_number: epoch.pools_registry.len(),
        quorum_size: epoch.quorum.len(),
        total_blocks_number: stats.total_blocks_number,
        total_txs_number: stats.total_txs_number,
        txs_success_rate: tx_success_rate(stats),
        epoch,
    }
}
