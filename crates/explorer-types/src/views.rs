//! # View Models
//!
//! Normalized shapes the data-access facade hands to pages. These are the
//! wire entities plus derived fields (composite ids, formatted dates,
//! aggregate counters) that the presentation layer renders verbatim.

use serde::{Deserialize, Serialize};

use crate::entities::{
    AggregatedFinalizationProof, Epoch, Transaction, TransactionReceipt, TxKind,
};

/// One row of the blocks-by-shard listing.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BlockPreview {
    /// Composite block id `{epochId}:{creator}:{index}`.
    pub id: String,
    /// Shard-qualified SID `{shard}:{height}`.
    pub sid: String,
    /// Creator address.
    pub creator: String,
    /// Numeric epoch id.
    pub epoch_id: u64,
    /// Index within the epoch.
    pub index: u64,
    /// Number of transactions in the block.
    pub txs_number: usize,
    /// Preview-formatted creation date.
    pub created_at: String,
}

/// A transaction with its display hash attached.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HashedTransaction {
    /// The transaction as included in the block.
    #[serde(flatten)]
    pub tx: Transaction,
    /// Display hash; format depends on the signature scheme.
    pub tx_hash: String,
}

/// Fully normalized block for the block page.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BlockExtendedView {
    /// Composite block id.
    pub id: String,
    /// Composite id with the creator truncated for display.
    pub truncated_id: String,
    /// Creator address.
    pub creator: String,
    /// Epoch label `epoch#<n>`.
    pub epoch: String,
    /// Numeric epoch id.
    pub epoch_id: u64,
    /// Index within the epoch.
    pub index: u64,
    /// Transactions with display hashes.
    pub transactions: Vec<HashedTransaction>,
    /// Number of transactions.
    pub txs_number: usize,
    /// Fully formatted creation date.
    pub created_at: String,
    /// Hash of the previous block by the same creator.
    pub prev_hash: String,
    /// Finalization proof; `None` while the block is not finalized.
    pub aggregated_finalization_proof: Option<AggregatedFinalizationProof>,
}

/// Fully normalized transaction for the transaction page.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionExtendedView {
    /// The including block, fully normalized.
    pub block: BlockExtendedView,
    /// Execution receipt.
    pub receipt: TransactionReceipt,
    /// The transaction itself with its display hash.
    pub transaction: HashedTransaction,
    /// Human-readable transaction type.
    pub type_description: String,
    /// Human-readable creator signature format.
    pub creator_format_description: String,
}

/// One row of an account's transaction listing.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionPreview {
    /// Transaction display hash.
    pub txid: String,
    /// Transaction type.
    pub tx_type: TxKind,
    /// Signature scheme label.
    pub sig_type: String,
    /// Priority fee, base units.
    pub priority_fee: String,
    /// Total fee, base units (or `N/A`).
    pub total_fee: String,
    /// Creator account id.
    pub creator: String,
}

/// Epoch plus the derived fields the epoch page renders.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EpochExtendedData {
    /// The epoch as reported by the node.
    #[serde(flatten)]
    pub epoch: Epoch,
    /// Whether this is epoch 0.
    pub is_first: bool,
    /// Whether this is the network's current epoch.
    pub is_current: bool,
    /// Number of shards in the epoch.
    pub shards_number: usize,
    /// Number of registered validator pools.
    pub validators_number: usize,
    /// Size of the quorum.
    pub quorum_size: usize,
    /// Blocks produced during the epoch.
    pub total_blocks_number: u64,
    /// Transactions executed during the epoch.
    pub total_txs_number: u64,
    /// Success rate, formatted percentage (or `N/A`).
    pub txs_success_rate: String,
}

/// Display rendering of the protocol constants.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChainInfoView {
    /// Network identifier.
    pub network_id: String,
    /// Validator stake size, locale-grouped.
    pub validator_stake_size: String,
    /// Core major version.
    pub core_major_version: u32,
    /// Quorum size, e.g. `21 validators`.
    pub quorum_size: String,
    /// Minimal stake per entity, base units.
    pub minimal_stake_per_entity: u64,
    /// Epoch duration, e.g. `24 hours`.
    pub epoch_duration: String,
    /// Leadership timeframe, e.g. `120 seconds`.
    pub leader_timeframe: String,
    /// Slot time, e.g. `1 seconds`.
    pub slot_time: String,
    /// Maximum block size, e.g. `4.00Mb`.
    pub max_block_size: String,
}

/// Home-page blockchain summary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BlockchainData {
    /// Current epoch id.
    pub epoch_id: u64,
    /// Number of shards in the current epoch.
    pub shards_number: usize,
    /// Number of validators in the current epoch.
    pub validators_number: usize,
    /// Total transactions, locale-grouped (or `N/A`).
    pub total_txs_number: String,
    /// Success rate, formatted percentage (or `N/A`).
    pub txs_success_rate: String,
    /// Total blocks, locale-grouped (or `N/A`).
    pub total_blocks_number: String,
    /// Blocks in the current epoch, locale-grouped (or `N/A`).
    pub total_blocks_number_in_current_epoch: String,
    /// Slot time in seconds.
    pub slot_time_in_seconds: f64,
    /// Total staked, locale-grouped (or `N/A`).
    pub total_staked: String,
    /// Protocol constants for display.
    pub chain_info: ChainInfoView,
}

impl BlockchainData {
    /// Placeholder summary rendered when the node is unreachable by design
    /// (global stub mode). The network id is a recognizable 64-character
    /// placeholder rather than a real genesis hash.
    pub fn placeholder() -> Self {
        Self {
            epoch_id: 0,
            shards_number: 0,
            validators_number: 0,
            total_txs_number: "N/A".into(),
            txs_success_rate: "N/A".into(),
            total_blocks_number: "N/A".into(),
            total_blocks_number_in_current_epoch: "N/A".into(),
            slot_time_in_seconds: 0.0,
            total_staked: "N/A".into(),
            chain_info: ChainInfoView {
                network_id: "a".repeat(64),
                validator_stake_size: "N/A".into(),
                core_major_version: 0,
                quorum_size: "N/A validators".into(),
                minimal_stake_per_entity: 0,
                epoch_duration: "N/A hours".into(),
                leader_timeframe: "N/A seconds".into(),
                slot_time: "N/A seconds".into(),
                max_block_size: "N/A Mb".into(),
            },
        }
    }
}
