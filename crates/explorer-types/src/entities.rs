//! # Wire Entities
//!
//! Shapes returned by the node's REST API, deserialized without
//! transformation. Field names follow the node's camelCase JSON.
//!
//! ## Clusters
//!
//! - **Chain**: `Block`, `Transaction`, `AggregatedFinalizationProof`
//! - **Epochs**: `Epoch`
//! - **Accounts & Pools**: `Account`, `Pool`, `PoolStorage`
//! - **Network & Stats**: `ChainInfo`, `SyncStats`, `BlockStats`

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

// =============================================================================
// CLUSTER A: THE CHAIN
// =============================================================================

/// A block as returned by the node.
///
/// A block is identified two ways: by its composite id
/// `{epochId}:{creator}:{indexInEpoch}` (derivable from the fields below)
/// and by a shard-qualified SID `{shard}:{absoluteHeight}`. The node includes
/// the `sid` only on the latest-blocks route.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Block {
    /// Address of the pool that produced the block.
    pub creator: String,
    /// Epoch label of the form `epoch#<n>`.
    pub epoch: String,
    /// Index of the block within the epoch, per creator.
    pub index: u64,
    /// Transactions included in the block.
    pub transactions: Vec<Transaction>,
    /// Creation timestamp, milliseconds since the UNIX epoch.
    pub time: u64,
    /// Hash of the previous block by the same creator.
    pub prev_hash: String,
    /// Shard-qualified SID, present on the latest-blocks route only.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sid: Option<String>,
}

/// Transaction type tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TxKind {
    /// Native address-to-address transfer.
    #[serde(rename = "TX")]
    Transfer,
    /// Contract deployment to the WASM vm.
    #[serde(rename = "WVM_CONTRACT_DEPLOY")]
    WasmDeploy,
    /// Call of a smart-contract in the WASM vm.
    #[serde(rename = "WVM_CALL")]
    WasmCall,
    /// Interaction with the EVM.
    #[serde(rename = "EVM_CALL")]
    EvmCall,
}

/// Transaction payload, polymorphic by transaction type.
///
/// EVM calls carry an opaque hex string; native transfers carry a structured
/// object; anything else is kept as raw JSON for display.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TxPayload {
    /// EVM call data (`0x`-prefixed hex).
    Evm(String),
    /// Native transfer payload.
    Transfer(TransferPayload),
    /// Any other payload shape, passed through untouched.
    Other(serde_json::Value),
}

/// Payload of a native transfer.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransferPayload {
    /// Recipient account id.
    pub to: String,
    /// Amount in base units (wei-like decimal string).
    pub amount: String,
    /// Accounts touched by execution, if the node reports them.
    #[serde(default)]
    pub touched_accounts: Vec<String>,
    /// Whether gas abstraction was used.
    #[serde(default)]
    pub gas_abstraction: bool,
}

/// A transaction as included in a block.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    /// Format version.
    pub v: u32,
    /// Creator identifier; its string shape encodes the signature scheme.
    pub creator: String,
    /// Transaction type.
    #[serde(rename = "type")]
    pub kind: TxKind,
    /// Creator's nonce.
    pub nonce: u64,
    /// Fee in base units (decimal string).
    pub fee: String,
    /// Type-dependent payload.
    pub payload: TxPayload,
    /// Signature scheme label as reported by the node.
    pub sig_type: String,
    /// Signature over the transaction.
    pub sig: String,
}

/// Set of per-validator signatures attesting finalization of a block.
///
/// Proofs are keyed by validator index within the quorum. A block without a
/// proof is simply not finalized yet.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AggregatedFinalizationProof {
    /// Hash of the previous block by the same creator.
    pub prev_block_hash: String,
    /// Composite id of the finalized block.
    #[serde(rename = "blockID")]
    pub block_id: String,
    /// Hash of the finalized block.
    pub block_hash: String,
    /// Validator index → signature.
    pub proofs: BTreeMap<String, String>,
}

/// Execution receipt of a transaction.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionReceipt {
    /// Shard the transaction executed on.
    pub shard: String,
    /// Composite id of the including block.
    #[serde(rename = "blockID")]
    pub block_id: String,
    /// Order of the transaction within the block.
    pub order: u64,
    /// Whether execution succeeded.
    pub is_ok: bool,
    /// Reason for failure, absent on success.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
    /// Priority fee paid, base units.
    pub priority_fee: String,
    /// Total fee paid, base units (or `N/A` when unknown).
    pub total_fee: String,
}

// =============================================================================
// CLUSTER B: EPOCHS
// =============================================================================

/// An epoch as returned by the node.
///
/// Invariants held by the node (and by the stub generators): `quorum` is a
/// subset of `pools_registry`, and `leaders_sequence` is drawn from
/// `pools_registry`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Epoch {
    /// Monotonically increasing epoch id.
    pub id: u64,
    /// Epoch hash.
    pub hash: String,
    /// All validator pools registered for the epoch.
    pub pools_registry: Vec<String>,
    /// Shards active in the epoch.
    pub shards_registry: Vec<String>,
    /// Epoch start, milliseconds since the UNIX epoch.
    pub start_timestamp: u64,
    /// Pools authorized to finalize blocks this epoch.
    pub quorum: Vec<String>,
    /// Block-production ordering of pools (repeats allowed).
    pub leaders_sequence: Vec<String>,
}

// =============================================================================
// CLUSTER C: ACCOUNTS & POOLS
// =============================================================================

/// An account, polymorphic over end-user and contract accounts.
///
/// The node discriminates with an explicit `type` field; deserialization
/// never guesses from present fields.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Account {
    /// Externally-owned (end-user) account.
    #[serde(rename = "eoa")]
    User(UserAccount),
    /// Contract account.
    #[serde(rename = "contract")]
    Contract(ContractAccount),
}

impl Account {
    /// Balance in base units, for either variant.
    pub fn balance(&self) -> &str {
        match self {
            Account::User(a) => &a.balance,
            Account::Contract(a) => &a.balance,
        }
    }
}

/// Externally-owned account state.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserAccount {
    /// Balance in base units (decimal string).
    pub balance: String,
    /// Number of transactions sent.
    pub nonce: u64,
    /// Abstract-gas counter.
    pub gas: u64,
}

/// Contract account state.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContractAccount {
    /// Source language tag (`EVM`, `WASM`, ...).
    pub lang: String,
    /// Balance in base units (decimal string).
    pub balance: String,
    /// Abstract-gas counter.
    pub gas: u64,
    /// Identifiers of the contract's storage cells.
    pub storages: Vec<String>,
    /// Last storage-abstraction payment, milliseconds since the UNIX epoch.
    pub storage_abstraction_last_payment: u64,
}

/// Staked amounts of a single staker within a pool.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StakerStake {
    /// Native coin stake, base units.
    pub native: String,
    /// Secondary multistaking unit, base units.
    pub multi: String,
}

/// On-chain storage of a validator pool contract.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PoolStorage {
    /// Whether the pool is activated.
    pub activated: bool,
    /// Share of total stake, percent.
    pub percentage: f64,
    /// Total native coin staked, base units.
    pub total_staked_native: String,
    /// Total secondary unit staked, base units.
    pub total_staked_multi: String,
    /// Staker account id → staked amounts.
    pub stakers: BTreeMap<String, StakerStake>,
    /// Pool service URL.
    #[serde(rename = "poolURL")]
    pub pool_url: String,
    /// Pool websocket URL.
    #[serde(rename = "wssPoolURL")]
    pub wss_pool_url: String,
}

/// A validator pool as returned by the pool-stats route.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Pool {
    /// Whether the pool is an active validator.
    pub is_active_validator: bool,
    /// Whether the pool sits in the current quorum.
    pub is_current_quorum_member: bool,
    /// Shard the pool originates from.
    pub pool_origin_shard: String,
    /// The pool's contract account.
    pub pool_metadata: ContractAccount,
    /// The pool's contract storage.
    pub pool_storage: PoolStorage,
}

// =============================================================================
// CLUSTER D: NETWORK & STATS
// =============================================================================

/// Process-wide chain information, nested exactly as the node reports it.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChainInfo {
    /// Genesis metadata.
    pub genesis: GenesisInfo,
    /// Approvement-thread version and protocol constants.
    pub approvement_thread: ApprovementThread,
}

/// Genesis metadata.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenesisInfo {
    /// Network identifier (64-character hex string).
    #[serde(rename = "networkID")]
    pub network_id: String,
}

/// Approvement-thread section of chain info.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApprovementThread {
    /// Core major version.
    pub version: u32,
    /// Protocol constants.
    pub params: ProtocolParams,
}

/// Protocol constants, SCREAMING_CASE on the wire.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProtocolParams {
    /// Stake size required to run a validator, base units.
    #[serde(rename = "VALIDATOR_STAKE")]
    pub validator_stake: u64,
    /// Minimal stake accepted from a single entity, base units.
    #[serde(rename = "MINIMAL_STAKE_PER_ENTITY")]
    pub minimal_stake_per_entity: u64,
    /// Number of validators in the quorum.
    #[serde(rename = "QUORUM_SIZE")]
    pub quorum_size: u64,
    /// Epoch duration, milliseconds.
    #[serde(rename = "EPOCH_TIME")]
    pub epoch_time: u64,
    /// Leadership timeframe, milliseconds.
    #[serde(rename = "LEADERSHIP_TIMEFRAME")]
    pub leadership_timeframe: u64,
    /// Slot time, milliseconds.
    #[serde(rename = "BLOCK_TIME")]
    pub block_time: u64,
    /// Maximum block size, bytes.
    #[serde(rename = "MAX_BLOCK_SIZE_IN_BYTES")]
    pub max_block_size_in_bytes: u64,
}

/// Verification-thread aggregates, global or per epoch.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BlockStats {
    /// Total number of blocks.
    pub total_blocks_number: u64,
    /// Total number of transactions.
    pub total_txs_number: u64,
    /// Number of successfully executed transactions.
    pub successful_txs_number: u64,
    /// Total native coin staked, base units.
    pub total_staked: String,
}

/// Verification-thread aggregates for the most recent epochs, keyed by
/// epoch id.
pub type RecentBlockStats = BTreeMap<String, BlockStats>;

/// Synchronization stats: current absolute height per shard.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SyncStats {
    /// Shard → current absolute block height.
    pub height_per_shard: BTreeMap<String, u64>,
}
