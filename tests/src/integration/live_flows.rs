//! # Live-Mode Flows
//!
//! Facade behavior against a scripted node: identifier resolution, error
//! propagation in production, and the dev fallback outside it.

#[cfg(test)]
mod tests {
    use explorer_data::{DataError, ExplorerConfig, ExplorerService, MockNodeApi};
    use explorer_types::Account;

    const BLOCK_JSON: &str = r#"{
        "creator": "acc_pool",
        "epoch": "epoch#128",
        "index": 5,
        "transactions": [{
            "v": 1,
            "creator": "acc_sender",
            "type": "TX",
            "nonce": 3,
            "fee": "1000",
            "payload": { "to": "acc_receiver", "amount": "500" },
            "sigType": "ED25519",
            "sig": "sig_live_tx"
        }],
        "time": 1700000000000,
        "prevHash": "0xprev"
    }"#;

    const AFP_JSON: &str = r#"{
        "prevBlockHash": "0xprev",
        "blockID": "128:acc_pool:5",
        "blockHash": "0xblock",
        "proofs": { "0": "sig_v0", "1": "sig_v1" }
    }"#;

    fn live_config() -> ExplorerConfig {
        let mut config = ExplorerConfig::for_testing();
        config.global_stub = false;
        config.entity_stub = false;
        config.production = true;
        config
    }

    #[tokio::test]
    async fn test_sid_and_composite_resolve_to_same_block() {
        let api = MockNodeApi::new()
            .with_response("/block_by_sid/0/499", BLOCK_JSON)
            .with_response("/block/128:acc_pool:5", BLOCK_JSON)
            .with_response("/aggregated_finalization_proof/128:acc_pool:5", AFP_JSON);
        let service = ExplorerService::new(api, live_config());

        let by_sid = service.block_by_id("0:499").await.unwrap();
        let by_composite = service.block_by_id("128:acc_pool:5").await.unwrap();

        assert_eq!(by_sid.id, "128:acc_pool:5");
        assert_eq!(by_sid.id, by_composite.id);
        assert_eq!(by_sid.prev_hash, by_composite.prev_hash);
        assert_eq!(
            by_sid.transactions[0].tx_hash,
            by_composite.transactions[0].tx_hash
        );
        assert_eq!(
            by_sid.aggregated_finalization_proof.unwrap().proofs.len(),
            2
        );
    }

    #[tokio::test]
    async fn test_failed_proof_subfetch_fails_the_block() {
        // block resolves but its proof route is not scripted
        let api = MockNodeApi::new().with_response("/block/128:acc_pool:5", BLOCK_JSON);
        let service = ExplorerService::new(api, live_config());

        let err = service.block_by_id("128:acc_pool:5").await.unwrap_err();
        assert!(matches!(err, DataError::Fetch { entity: "block", .. }));
    }

    #[tokio::test]
    async fn test_production_failures_propagate_with_context() {
        let service = ExplorerService::new(MockNodeApi::failing(), live_config());

        let err = service.block_by_id("0:499").await.unwrap_err();
        assert!(err.to_string().contains("block \"0:499\""));

        let err = service.epoch_by_id(7).await.unwrap_err();
        assert!(err.to_string().contains("epoch \"7\""));

        let err = service.transaction_by_hash("0xdead").await.unwrap_err();
        assert!(err.to_string().contains("transaction \"0xdead\""));
    }

    #[tokio::test]
    async fn test_dev_fallback_serves_stub_data() {
        let mut config = live_config();
        config.production = false;
        let service = ExplorerService::new(MockNodeApi::failing(), config);

        let view = service.block_by_id("0:49999").await.unwrap();
        assert_eq!(view.epoch_id, 128);

        let epoch = service.current_epoch().await.unwrap();
        assert_eq!(epoch.id, 128);
    }

    #[tokio::test]
    async fn test_account_polymorphism_over_the_wire() {
        let api = MockNodeApi::new()
            .with_response(
                "/account/0/acc_user",
                r#"{"type":"eoa","balance":"12","nonce":1,"gas":0}"#,
            )
            .with_response(
                "/account/x/system/staking",
                r#"{"type":"contract","lang":"WASM","balance":"0","gas":0,
                    "storages":["DEFAULT"],"storageAbstractionLastPayment":0}"#,
            );
        let service = ExplorerService::new(api, live_config());

        let user = service.account("0:acc_user", false).await.unwrap();
        assert!(matches!(user, Account::User(_)));

        // bare system id routes to the synthetic shard "x"
        let system = service.account("system/staking", false).await.unwrap();
        assert!(matches!(system, Account::Contract(_)));
    }
}
