//! Stub blocks and finalization proofs.
//!
//! Numeric fields that should look plausible across nearby blocks (height,
//! index, tx count, timestamps) come from modular arithmetic on the height
//! or index; opaque fields (hashes, signatures, addresses) come from the
//! seeded hash. Timestamps step back one 12-second slot per block.

use explorer_types::{
    AggregatedFinalizationProof, BlockExtendedView, BlockPreview, HashedTransaction, Transaction,
    TxKind, TxPayload,
};

use crate::domain::{composite_block_id, truncate_middle, BlockId, FormattedDate};
use crate::mock::seed::{mock_address, seed_hex};

/// Epoch id every stub entity pretends to live in.
pub const STUB_EPOCH_ID: u64 = 128;
/// Height the stub chain tip sits at.
pub const STUB_TIP_HEIGHT: u64 = 50_000;
/// Slot time the stub timestamps step by, milliseconds.
pub const STUB_SLOT_MS: u64 = 12_000;

/// One page of stub block previews for a shard, most recent first.
pub fn block_previews(shard: &str, page: u32, per_page: u32, now_ms: u64) -> Vec<BlockPreview> {
    let page = page.max(1) as u64;
    let per_page = per_page as u64;
    let start = (page - 1) * per_page;

    (0..per_page)
        .map(|i| {
            let offset = start + i;
            let height = STUB_TIP_HEIGHT.saturating_sub(offset);
            let creator = mock_address(&format!("{shard}:{height}"));
            let index = (height % 64) + 1;
            let txs_number = ((height % 7) + 1) as usize;
            let time = now_ms.saturating_sub(offset * STUB_SLOT_MS);

            BlockPreview {
                id: composite_block_id(STUB_EPOCH_ID, &creator, index),
                sid: format!("{shard}:{height}"),
                creator,
                epoch_id: STUB_EPOCH_ID,
                index,
                txs_number,
                created_at: FormattedDate(time).preview(),
            }
        })
        .collect()
}

/// A fully populated stub block for any block identifier.
///
/// SIDs derive creator and index from the height; composite ids are taken
/// apart and reused so the returned block's id equals the requested one.
pub fn block_by_id(id: &str, now_ms: u64) -> BlockExtendedView {
    let classified = BlockId::classify(id);

    let (shard, height, creator, index) = match &classified {
        BlockId::Sid { shard, height } => {
            let height: u64 = height.parse().unwrap_or(STUB_TIP_HEIGHT);
            let index = (height % 64) + 1;
            (shard.clone(), height, mock_address(id), index)
        }
        BlockId::Composite { raw } => {
            let mut parts = raw.split(':');
            let _epoch = parts.next();
            let creator = parts
                .next()
                .filter(|c| !c.is_empty())
                .map(str::to_string)
                .unwrap_or_else(|| mock_address(raw));
            let index = parts.next().and_then(|i| i.parse().ok()).unwrap_or(1);
            ("0".to_string(), STUB_TIP_HEIGHT, creator, index)
        }
    };

    let block_id = match &classified {
        BlockId::Sid { .. } => composite_block_id(STUB_EPOCH_ID, &creator, index),
        BlockId::Composite { raw } => raw.clone(),
    };
    let truncated_id = format!("{STUB_EPOCH_ID}:{}:{index}", truncate_middle(&creator));

    let tx_count = (index % 9) + 3;
    let transactions: Vec<HashedTransaction> = (0..tx_count)
        .map(|i| {
            let kind = if i % 4 == 0 {
                TxKind::EvmCall
            } else {
                TxKind::Transfer
            };
            let payload = match kind {
                TxKind::EvmCall => {
                    TxPayload::Evm(format!("0x{}", seed_hex(&format!("payload:{block_id}:{i}"))))
                }
                _ => TxPayload::Other(serde_json::json!({ "memo": "mock tx" })),
            };
            let mut sig = format!("sig_{shard}_{index}_{i}");
            while sig.len() < 64 {
                sig.push('0');
            }

            HashedTransaction {
                tx: Transaction {
                    v: 1,
                    creator: creator.clone(),
                    kind,
                    nonce: index * 100 + i,
                    fee: (1000 + i * 7).to_string(),
                    payload,
                    sig_type: "ED25519".to_string(),
                    sig,
                },
                tx_hash: format!("0x{}", seed_hex(&format!("{block_id}:{i}"))),
            }
        })
        .collect();

    let age_slots = STUB_TIP_HEIGHT.saturating_sub(height);
    let created_at = FormattedDate(now_ms.saturating_sub(age_slots * STUB_SLOT_MS)).full();

    BlockExtendedView {
        truncated_id,
        creator,
        epoch: format!("epoch#{STUB_EPOCH_ID}"),
        epoch_id: STUB_EPOCH_ID,
        index,
        txs_number: transactions.len(),
        transactions,
        created_at,
        prev_hash: format!("0x{}", seed_hex(&format!("prev:{block_id}"))),
        aggregated_finalization_proof: Some(aggregated_finalization_proof(&block_id)),
        id: block_id,
    }
}

/// Stub finalization proof. The `block_id` field always equals the input
/// so proof pages and block pages cross-reference consistently.
pub fn aggregated_finalization_proof(block_id: &str) -> AggregatedFinalizationProof {
    let proofs = (0..3)
        .map(|validator| {
            (
                validator.to_string(),
                format!(
                    "sig_{}",
                    &seed_hex(&format!("proof:{validator}:{block_id}"))[..32]
                ),
            )
        })
        .collect();

    AggregatedFinalizationProof {
        prev_block_hash: format!("0x{}", seed_hex(&format!("afp:prev:{block_id}"))),
        block_id: block_id.to_string(),
        block_hash: format!("0x{}", seed_hex(&format!("afp:block:{block_id}"))),
        proofs,
    }
}
