//! # Stub-Mode Flows
//!
//! End-to-end facade behavior with the global stub gate on: every operation
//! answers deterministically and the node is never contacted.

#[cfg(test)]
mod tests {
    use explorer_data::{ExplorerConfig, ExplorerService, MockNodeApi};

    fn stub_service() -> ExplorerService<MockNodeApi> {
        ExplorerService::new(MockNodeApi::new(), ExplorerConfig::for_testing())
    }

    #[tokio::test]
    async fn test_block_page_scenario() {
        let service = stub_service();
        let view = service.block_by_id("0:49999").await.unwrap();

        // height 49999 lands on index (49999 % 64) + 1 within stub epoch 128
        let index = (49_999 % 64) + 1;
        assert_eq!(view.epoch_id, 128);
        assert_eq!(view.index, index);
        assert!(view.truncated_id.starts_with("128:"));
        assert_eq!(view.transactions.len(), ((index % 9) + 3) as usize);

        let proof = view.aggregated_finalization_proof.expect("stub blocks carry a proof");
        assert_eq!(proof.block_id, view.id);

        // the whole page was served without touching the node
        assert_eq!(service.api().request_count(), 0);
    }

    #[tokio::test]
    async fn test_blockchain_summary_defaults_without_network() {
        let service = stub_service();
        let data = service.blockchain_data().await.unwrap();

        assert_eq!(data.chain_info.network_id, "a".repeat(64));
        assert_eq!(data.total_blocks_number, "N/A");
        assert_eq!(data.chain_info.quorum_size, "N/A validators");
        assert_eq!(service.api().request_count(), 0);
    }

    #[tokio::test]
    async fn test_listing_heights_descend_by_one() {
        let service = stub_service();
        let rows = service.blocks_by_shard("2", 1, Some(20)).await.unwrap();

        assert_eq!(rows.len(), 20);
        let heights: Vec<u64> = rows
            .iter()
            .map(|row| row.sid.split(':').nth(1).unwrap().parse().unwrap())
            .collect();
        assert_eq!(heights[0], 50_000);
        assert!(heights.windows(2).all(|w| w[0] == w[1] + 1));
        assert!(rows.iter().all(|row| row.sid.starts_with("2:")));
    }

    #[tokio::test]
    async fn test_afp_echoes_requested_id() {
        let service = stub_service();
        let proof = service
            .aggregated_finalization_proof("128:acc_pool:9")
            .await
            .unwrap()
            .unwrap();
        assert_eq!(proof.block_id, "128:acc_pool:9");
        assert_eq!(
            proof.proofs.keys().map(String::as_str).collect::<Vec<_>>(),
            vec!["0", "1", "2"]
        );
    }

    #[tokio::test]
    async fn test_transaction_view_cross_references() {
        let service = stub_service();
        let view = service.transaction_by_hash("0xfeed").await.unwrap();

        assert_eq!(view.transaction.tx_hash, "0xfeed");
        assert_eq!(view.receipt.block_id, view.block.id);
        assert_eq!(view.block.creator, view.transaction.tx.creator);
        assert_eq!(view.creator_format_description, "ECDSA, EVM-compatible");
    }

    #[tokio::test]
    async fn test_epoch_registries_are_consistent() {
        let service = stub_service();
        let data = service.epoch_by_id(128).await.unwrap();

        assert!(data.is_current);
        assert_eq!(data.validators_number, data.epoch.pools_registry.len());
        assert_eq!(data.quorum_size, data.validators_number * 2 / 3);
        // the quorum is drawn from the registry
        assert!(data
            .epoch
            .quorum
            .iter()
            .all(|pool| data.epoch.pools_registry.contains(pool)));
        assert!(data
            .epoch
            .leaders_sequence
            .iter()
            .all(|pool| data.epoch.pools_registry.contains(pool)));
    }

    #[tokio::test]
    async fn test_stub_results_are_deterministic() {
        let service = stub_service();
        let first = service.block_by_id("128:acc_a:5").await.unwrap();
        let second = service.block_by_id("128:acc_a:5").await.unwrap();
        assert_eq!(first.id, second.id);
        assert_eq!(first.prev_hash, second.prev_hash);
        assert_eq!(
            first.transactions[0].tx_hash,
            second.transactions[0].tx_hash
        );
    }
}
