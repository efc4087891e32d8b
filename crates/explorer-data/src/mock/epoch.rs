//! Stub epochs.
//!
//! The registries scale with the epoch id (4-5 shards, 28-36 validators),
//! the quorum is the first two thirds of the pools registry, and the
//! leaders sequence reuses the registry order. Epoch 128 plays the role of
//! the current epoch.

use explorer_types::{BlockStats, Epoch, EpochExtendedData};

use crate::domain::tx_success_rate;
use crate::mock::block::STUB_EPOCH_ID;
use crate::mock::seed::seed_hex;

const EPOCH_MS: u64 = 60 * 60 * 1000;

/// A stub epoch with derived page fields.
pub fn epoch_by_id(id: u64, now_ms: u64) -> EpochExtendedData {
    let is_first = id == 0;
    let is_current = id == STUB_EPOCH_ID;

    let shard_count = 4 + (id % 2);
    let validators_count = 28 + (id % 9);
    let quorum_size = (validators_count * 2 / 3) as usize;

    let shards_registry: Vec<String> = (0..shard_count).map(|i| i.to_string()).collect();
    let pools_registry: Vec<String> = (0..validators_count)
        .map(|i| format!("acc_{}", &seed_hex(&format!("epoch:{id}:pool:{i}"))[..48]))
        .collect();
    let quorum = pools_registry[..quorum_size].to_vec();
    let leaders_sequence = pools_registry.clone();

    // one epoch per hour, counted back from the current one
    let age = STUB_EPOCH_ID.saturating_sub(id);
    let start_timestamp = now_ms.saturating_sub(age * EPOCH_MS);

    let epoch = Epoch {
        id,
        hash: format!("0x{}", seed_hex(&format!("epoch:{id}:hash"))),
        pools_registry,
        shards_registry,
        start_timestamp,
        quorum,
        leaders_sequence,
    };

    // the epoch page carries its own aggregate series, fixed-offset rather
    // than ratio-derived like the per-epoch stats endpoint stub
    let stats = BlockStats {
        total_blocks_number: 95_000 + (id % 200) * 420,
        total_txs_number: 2_400_000 + (id % 200) * 38_000,
        successful_txs_number: 2_320_000 + (id % 200) * 36_000,
        total_staked: "45807498008".to_string(),
    };
    let txs_success_rate = tx_success_rate(&stats);

    EpochExtendedData {
        is_first,
        is_current,
        shards_number: epoch.shards_registry.len(),
        validators_number: epoch.pools_registry.len(),
        quorum_size,
        total_blocks_number: stats.total_blocks_number,
        total_txs_number: stats.total_txs_number,
        txs_success_rate,
        epoch,
    }
}
