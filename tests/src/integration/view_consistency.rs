//! # View Consistency
//!
//! Cross-checks between stub generators and the formatting helpers: the
//! derived fields a page renders must agree with the entity they came from.

#[cfg(test)]
mod tests {
    use explorer_data::mock;
    use explorer_data::{from_wei, truncate_middle, tx_success_rate};

    const NOW: u64 = 1_700_000_000_000;

    #[test]
    fn test_truncated_id_matches_creator() {
        let block = mock::block::block_by_id("128:acc_averyveryverylongcreatoraddress:7", NOW);
        assert_eq!(
            block.truncated_id,
            format!("128:{}:7", truncate_middle(&block.creator))
        );
    }

    #[test]
    fn test_stub_account_balance_formats() {
        let account = mock::account::account_by_id("0", "acc_user", NOW);
        assert_eq!(from_wei(account.balance()), "1.2345");
    }

    #[test]
    fn test_stub_pool_is_plausible() {
        let pool = mock::pool::pool_by_id("acc_validator_7", NOW);
        let storage = &pool.pool_storage;

        assert!(storage.activated);
        assert!((5.0..41.0).contains(&storage.percentage));
        assert!((35..80).contains(&storage.stakers.len()));
        assert!(storage
            .pool_url
            .contains(&format!("pool.{}.", pool.pool_origin_shard)));
        // every staker holds whole-coin stakes
        for stake in storage.stakers.values() {
            assert!(!from_wei(&stake.native).contains('.'));
        }
    }

    #[test]
    fn test_stub_epoch_stats_success_rate_is_a_percentage() {
        let stats = mock::stats::stats_for_epoch(42);
        assert!(stats.successful_txs_number <= stats.total_txs_number);
        let rate = tx_success_rate(&stats);
        assert!(rate.ends_with('%'));
        let value: f64 = rate.trim_end_matches('%').parse().unwrap();
        assert!((0.0..=100.0).contains(&value));
    }

    #[test]
    fn test_recent_stats_keyed_by_epoch_id() {
        let recent = mock::stats::recent_stats(5);
        assert_eq!(recent.len(), 5);
        assert!(recent.keys().all(|key| key.parse::<u64>().is_ok()));
    }

    #[test]
    fn test_epoch_timeline_precedes_now() {
        let data = mock::epoch::epoch_by_id(100, NOW);
        assert!(data.epoch.start_timestamp < NOW);
        let older = mock::epoch::epoch_by_id(50, NOW);
        assert!(older.epoch.start_timestamp < data.epoch.start_timestamp);
    }
}
