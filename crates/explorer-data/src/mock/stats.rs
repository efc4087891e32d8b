//! Stub network stats: verification-thread aggregates and the shard list.

use explorer_types::{BlockStats, RecentBlockStats};

/// Stub aggregates for one epoch; counters cycle with the epoch id.
pub fn stats_for_epoch(epoch_id: u64) -> BlockStats {
    let blocks = 95_000 + (epoch_id % 200) * 420;
    let txs = 2_400_000 + (epoch_id % 200) * 38_000;
    let success = (txs as f64 * (0.965 + (epoch_id % 7) as f64 * 0.002)).floor() as u64;

    BlockStats {
        total_blocks_number: blocks,
        total_txs_number: txs,
        successful_txs_number: success.min(txs),
        total_staked: "45807498008".to_string(),
    }
}

/// Stub aggregates for the last `limit` epochs, keyed by epoch id.
pub fn recent_stats(limit: u32) -> RecentBlockStats {
    let base_epoch = 1200u64;
    (0..u64::from(limit))
        .map(|i| {
            (
                (base_epoch + i).to_string(),
                BlockStats {
                    total_blocks_number: 120_000 + i * 1_250,
                    total_txs_number: 3_000_000 + i * 120_000,
                    successful_txs_number: 2_940_000 + i * 118_000,
                    total_staked: "45807498008".to_string(),
                },
            )
        })
        .collect()
}

/// Stub shard list.
pub fn shards() -> Vec<String> {
    vec!["0".into(), "1".into(), "2".into(), "3".into()]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_success_never_exceeds_total() {
        for id in [0u64, 1, 7, 128, 199, 4096] {
            let stats = stats_for_epoch(id);
            assert!(stats.successful_txs_number <= stats.total_txs_number);
        }
    }

    #[test]
    fn test_recent_stats_counts_up() {
        let stats = recent_stats(5);
        assert_eq!(stats.len(), 5);
        assert!(stats.contains_key("1200"));
        assert!(stats.contains_key("1204"));
        assert!(
            stats["1204"].total_txs_number > stats["1200"].total_txs_number
        );
    }

    #[test]
    fn test_shards() {
        assert_eq!(shards(), vec!["0", "1", "2", "3"]);
    }
}
