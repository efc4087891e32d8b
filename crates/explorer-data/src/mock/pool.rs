//! Stub validator pools.
//!
//! Staking totals, the staker set, and the quorum flag are all seeded from
//! the pool id, so repeated fetches of one pool agree while different pools
//! diverge. A display tag in parentheses (`acc_...(POOL)`) is stripped
//! before building service URLs.

use std::collections::BTreeMap;

use explorer_types::{ContractAccount, Pool, PoolStorage, StakerStake};
use primitive_types::U256;

use crate::mock::seed::{fnv1a32, seed_hex};

fn wei() -> U256 {
    U256::from(1_000_000_000_000_000_000u128)
}

/// A stub pool for any pool id.
pub fn pool_by_id(pool_id: &str, now_ms: u64) -> Pool {
    let base_id = pool_id.split('(').next().unwrap_or(pool_id);
    let is_current_quorum_member = fnv1a32(&format!("quorum:{pool_id}")) % 3 == 0;
    let pool_origin_shard = (fnv1a32(&format!("shard:{pool_id}")) % 4).to_string();

    let total_staked_native =
        (U256::from(25_000 + fnv1a32(&format!("native:{pool_id}")) % 18_000) * wei()).to_string();
    let total_staked_multi =
        (U256::from(3_000 + fnv1a32(&format!("multi:{pool_id}")) % 4_000) * wei()).to_string();
    let percentage = f64::from(5 + fnv1a32(&format!("pct:{pool_id}")) % 35);

    let stakers_count = 35 + fnv1a32(&format!("stakers:{pool_id}")) % 45;
    let mut stakers = BTreeMap::new();
    for i in 0..stakers_count {
        let id = format!("0x{}", &seed_hex(&format!("{pool_id}:staker:{i}"))[..40]);
        let native = U256::from(10 + fnv1a32(&format!("{pool_id}:n:{i}")) % 900) * wei();
        let multi = U256::from(fnv1a32(&format!("{pool_id}:m:{i}")) % 120) * wei();
        stakers.insert(
            id,
            StakerStake {
                native: native.to_string(),
                multi: multi.to_string(),
            },
        );
    }

    Pool {
        is_active_validator: true,
        is_current_quorum_member,
        pool_metadata: ContractAccount {
            lang: "WASM".to_string(),
            balance: "0".to_string(),
            gas: 0,
            storages: Vec::new(),
            storage_abstraction_last_payment: now_ms,
        },
        pool_storage: PoolStorage {
            activated: true,
            percentage,
            total_staked_native,
            total_staked_multi,
            stakers,
            pool_url: format!("https://pool.{pool_origin_shard}.meridian.network/{base_id}"),
            wss_pool_url: format!("wss://pool.{pool_origin_shard}.meridian.network/{base_id}"),
        },
        pool_origin_shard,
    }
}
