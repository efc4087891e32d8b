//! Node REST API routes, grouped by resource. All routes are GET and
//! return JSON; the explorer never mutates node state.

/// Chain info (protocol constants, genesis).
pub fn chain_info() -> String {
    "/chain_info".to_string()
}

/// Synchronization stats: current height per shard.
pub fn synchronization_stats() -> String {
    "/synchronization_stats".to_string()
}

/// Current shard leaders, keyed by shard.
pub fn current_shards_leaders() -> String {
    "/current_shards_leaders".to_string()
}

/// Latest `limit` blocks of a shard, walking down from `start_index`.
pub fn latest_blocks(shard: &str, start_index: u64, limit: u64) -> String {
    format!("/latest_blocks/{shard}/{start_index}/{limit}")
}

/// Block by shard-qualified SID.
pub fn block_by_sid(shard: &str, height: &str) -> String {
    format!("/block_by_sid/{shard}/{height}")
}

/// Block by composite id.
pub fn block_by_id(id: &str) -> String {
    format!("/block/{id}")
}

/// Aggregated finalization proof by composite block id.
pub fn aggregated_finalization_proof(block_id: &str) -> String {
    format!("/aggregated_finalization_proof/{block_id}")
}

/// Epoch by id.
pub fn epoch_by_id(id: u64) -> String {
    format!("/epoch_by_id/{id}")
}

/// The current epoch.
pub fn current_epoch() -> String {
    "/current_epoch".to_string()
}

/// Verification-thread stats, whole chain.
pub fn verification_thread_stats() -> String {
    "/verification_thread_stats".to_string()
}

/// Verification-thread stats for one epoch.
pub fn verification_thread_stats_per_epoch(epoch_id: u64) -> String {
    format!("/verification_thread_stats_per_epoch/{epoch_id}")
}

/// Verification-thread stats for the most recent `limit` epochs.
pub fn recent_verification_thread_stats(limit: u32) -> String {
    format!("/recent_verification_thread_stats_per_epoch/{limit}")
}

/// Transaction receipt by hash.
pub fn tx_receipt(hash: &str) -> String {
    format!("/tx_receipt/{hash}")
}

/// Transactions of an account.
pub fn account_transactions(shard: &str, account_id: &str) -> String {
    format!("/account_transactions/{shard}/{account_id}")
}

/// Account state by shard and id.
pub fn account_by_id(shard: &str, account_id: &str) -> String {
    format!("/account/{shard}/{account_id}")
}

/// Pool stats by pool id.
pub fn pool_stats(pool_id: &str) -> String {
    format!("/pool_stats/{pool_id}")
}
