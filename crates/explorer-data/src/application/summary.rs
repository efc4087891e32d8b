//! Network-wide stats and the home-page summary.

use std::collections::BTreeMap;

use explorer_types::{
    BlockStats, BlockchainData, ChainInfo, ChainInfoView, Epoch, RecentBlockStats,
};

use crate::adapters::routes;
use crate::domain::{format_number, format_number_string, tx_success_rate, DataError};
use crate::mock;
use crate::ports::NodeApi;

use super::service::ExplorerService;

impl<N: NodeApi> ExplorerService<N> {
    /// Verification-thread aggregates of one epoch.
    pub async fn total_blocks_and_txs_by_epoch(
        &self,
        epoch_id: u64,
    ) -> Result<BlockStats, DataError> {
        if self.config.entity_stub {
            return Ok(mock::stats::stats_for_epoch(epoch_id));
        }
        self.get(&routes::verification_thread_stats_per_epoch(epoch_id))
            .await
    }

    /// Verification-thread aggregates of the most recent epochs, keyed by
    /// epoch id.
    pub async fn recent_total_blocks_and_txs(
        &self,
        limit: u32,
    ) -> Result<RecentBlockStats, DataError> {
        if self.config.entity_stub {
            return Ok(mock::stats::recent_stats(limit));
        }
        self.get(&routes::recent_verification_thread_stats(limit))
            .await
    }

    /// Shards active right now, from the shard-leaders mapping.
    pub async fn current_shards(&self) -> Result<Vec<String>, DataError> {
        if self.config.entity_stub {
            return Ok(mock::stats::shards());
        }
        let leaders: BTreeMap<String, serde_json::Value> =
            self.get(&routes::current_shards_leaders()).await?;
        Ok(leaders.into_keys().collect())
    }

    /// The home-page summary: current epoch, global aggregates, and protocol
    /// constants rendered for display.
    ///
    /// In global stub mode this returns hard-coded placeholders and performs
    /// no network calls. No dev fallback otherwise.
    pub async fn blockchain_data(&self) -> Result<BlockchainData, DataError> {
        if self.config.global_stub {
            return Ok(BlockchainData::placeholder());
        }

        self.fetch_blockchain_data()
            .await
            .map_err(|err| err.for_entity("blockchain data", "summary"))
    }

    async fn fetch_blockchain_data(&self) -> Result<BlockchainData, DataError> {
        let stats_route = routes::verification_thread_stats();
        let epoch_route = routes::current_epoch();
        let info_route = routes::chain_info();
        let (stats, epoch, chain) = tokio::try_join!(
            self.get::<BlockStats>(&stats_route),
            self.get::<Epoch>(&epoch_route),
            self.get::<ChainInfo>(&info_route),
        )?;
        let epoch_stats = self.total_blocks_and_txs_by_epoch(epoch.id).await?;

        let params = &chain.approvement_thread.params;
        Ok(BlockchainData {
            epoch_id: epoch.id,
            shards_number: epoch.shards_registry.len(),
            validators_number: epoch.pools_registry.len(),
            total_txs_number: format_number(stats.total_txs_number),
            txs_success_rate: tx_success_rate(&stats),
            total_blocks_number: format_number(stats.total_blocks_number),
            total_blocks_number_in_current_epoch: format_number(epoch_stats.total_blocks_number),
            slot_time_in_seconds: params.block_time as f64 / 1000.0,
            total_staked: format_number_string(&stats.total_staked),
            chain_info: ChainInfoView {
                validator_stake_size: format_number(params.validator_stake),
                core_major_version: chain.approvement_thread.version,
                quorum_size: format!("{} validators", params.quorum_size),
                minimal_stake_per_entity: params.minimal_stake_per_entity,
                epoch_duration: format!(
                    "{} hours",
                    trim_float(params.epoch_time as f64 / 3_600_000.0)
                ),
                leader_timeframe: format!(
                    "{} seconds",
                    trim_float(params.leadership_timeframe as f64 / 1000.0)
                ),
                slot_time: format!("{} seconds", trim_float(params.block_time as f64 / 1000.0)),
                max_block_size: format!(
                    "{:.2}Mb",
                    params.max_block_size_in_bytes as f64 / 1_000_000.0
                ),
                network_id: chain.genesis.network_id,
            },
        })
    }
}

/// Render a duration figure without a trailing `.0`.
fn trim_float(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{}", value as u64)
    } else {
        format!("{value:.1}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ExplorerConfig;
    use crate::ports::MockNodeApi;

    #[tokio::test]
    async fn test_global_stub_summary_makes_no_network_calls() {
        let service = ExplorerService::new(MockNodeApi::new(), ExplorerConfig::for_testing());
        let data = service.blockchain_data().await.unwrap();
        assert_eq!(data.chain_info.network_id, "a".repeat(64));
        assert_eq!(data.total_txs_number, "N/A");
        assert_eq!(service.api().request_count(), 0);
    }

    #[tokio::test]
    async fn test_summary_production_failure_propagates() {
        let mut config = ExplorerConfig::for_testing();
        config.global_stub = false;
        config.entity_stub = false;
        config.production = true;
        let service = ExplorerService::new(MockNodeApi::failing(), config);
        let err = service.blockchain_data().await.unwrap_err();
        assert!(matches!(
            err,
            DataError::Fetch {
                entity: "blockchain data",
                ..
            }
        ));
    }

    #[tokio::test]
    async fn test_summary_formats_protocol_constants() {
        let api = MockNodeApi::new()
            .with_response(
                "/verification_thread_stats",
                r#"{"totalBlocksNumber":1500000,"totalTxsNumber":42000000,
                    "successfulTxsNumber":41000000,"totalStaked":"45807498008"}"#,
            )
            .with_response(
                "/current_epoch",
                r#"{"id":9,"hash":"0xaa","poolsRegistry":["acc_a","acc_b"],
                    "shardsRegistry":["0","1"],"startTimestamp":0,
                    "quorum":["acc_a"],"leadersSequence":["acc_a"]}"#,
            )
            .with_response(
                "/chain_info",
                r#"{"genesis":{"networkID":"abc"},
                    "approvementThread":{"version":2,"params":{
                        "VALIDATOR_STAKE":55000,"MINIMAL_STAKE_PER_ENTITY":50,
                        "QUORUM_SIZE":21,"EPOCH_TIME":86400000,
                        "LEADERSHIP_TIMEFRAME":120000,"BLOCK_TIME":1000,
                        "MAX_BLOCK_SIZE_IN_BYTES":4000000}}}"#,
            )
            .with_response(
                "/verification_thread_stats_per_epoch/9",
                r#"{"totalBlocksNumber":95000,"totalTxsNumber":2400000,
                    "successfulTxsNumber":2320000,"totalStaked":"0"}"#,
            );
        let mut config = ExplorerConfig::for_testing();
        config.global_stub = false;
        config.entity_stub = false;
        config.production = true;
        let service = ExplorerService::new(api, config);

        let data = service.blockchain_data().await.unwrap();
        assert_eq!(data.total_txs_number, "42,000,000");
        assert_eq!(data.total_staked, "45,807,498,008");
        assert_eq!(data.slot_time_in_seconds, 1.0);
        assert_eq!(data.chain_info.quorum_size, "21 validators");
        assert_eq!(data.chain_info.epoch_duration, "24 hours");
        assert_eq!(data.chain_info.leader_timeframe, "120 seconds");
        assert_eq!(data.chain_info.max_block_size, "4.00Mb");
        assert_eq!(data.total_blocks_number_in_current_epoch, "95,000");
    }

    #[tokio::test]
    async fn test_current_shards_from_leaders_keys() {
        let api = MockNodeApi::new()
            .with_response("/current_shards_leaders", r#"{"0":"acc_a","1":"acc_b"}"#);
        let mut config = ExplorerConfig::for_testing();
        config.entity_stub = false;
        config.production = true;
        let service = ExplorerService::new(api, config);
        let shards = service.current_shards().await.unwrap();
        assert_eq!(shards, vec!["0", "1"]);
    }

    #[test]
    fn test_trim_float() {
        assert_eq!(trim_float(24.0), "24");
        assert_eq!(trim_float(1.5), "1.5");
    }
}
