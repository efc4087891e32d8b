//! Block operations: shard listings, single blocks, finalization proofs.

use sha2::{Digest, Sha256};
use sha3::Keccak256;

use explorer_types::{
    AggregatedFinalizationProof, Block, BlockExtendedView, BlockPreview, HashedTransaction,
    SyncStats, Transaction, TxKind, TxPayload,
};

use crate::adapters::routes;
use crate::domain::{
    clamp_rows_per_page, composite_block_id, epoch_id_from_label, truncate_middle, BlockId,
    DataError, FormattedDate,
};
use crate::mock;
use crate::ports::NodeApi;

use super::service::{now_ms, ExplorerService};

impl<N: NodeApi> ExplorerService<N> {
    /// Latest blocks of a shard, newest first.
    ///
    /// `rows` is clamped to 10..=100 (default 10). A shard the node does not
    /// report a height for yields an empty listing, not an error.
    pub async fn blocks_by_shard(
        &self,
        shard: &str,
        page: u32,
        rows: Option<u32>,
    ) -> Result<Vec<BlockPreview>, DataError> {
        let shard = if shard.is_empty() { "0" } else { shard };
        let page = page.max(1);
        let per_page = clamp_rows_per_page(rows);

        if self.config.global_stub {
            return Ok(mock::block::block_previews(shard, page, per_page, now_ms()));
        }

        match self.fetch_blocks_by_shard(shard, page, per_page).await {
            Ok(previews) => Ok(previews),
            Err(err) if self.stub_on_failure() => {
                tracing::warn!(
                    "[explorer-data] blocks of shard \"{}\" unavailable, serving stub: {}",
                    shard,
                    err
                );
                Ok(mock::block::block_previews(shard, page, per_page, now_ms()))
            }
            Err(err) => Err(err.for_entity("blocks of shard", shard)),
        }
    }

    async fn fetch_blocks_by_shard(
        &self,
        shard: &str,
        page: u32,
        per_page: u32,
    ) -> Result<Vec<BlockPreview>, DataError> {
        let sync: SyncStats = self.get(&routes::synchronization_stats()).await?;
        let Some(&height) = sync.height_per_shard.get(shard) else {
            return Ok(Vec::new());
        };

        // The node lists downwards from an absolute height; the tip sits at
        // height - 1.
        let start = height
            .saturating_sub(1)
            .saturating_sub(u64::from(per_page) * u64::from(page - 1));
        let blocks: Vec<Block> = self
            .get(&routes::latest_blocks(shard, start, u64::from(per_page)))
            .await?;
        Ok(blocks.into_iter().map(block_preview).collect())
    }

    /// A single block, fully normalized, by composite id or SID.
    pub async fn block_by_id(&self, id: &str) -> Result<BlockExtendedView, DataError> {
        if self.config.global_stub {
            return Ok(mock::block::block_by_id(id, now_ms()));
        }

        match self.fetch_block_by_id(id).await {
            Ok(view) => Ok(view),
            Err(err) if self.stub_on_failure() => {
                tracing::warn!(
                    "[explorer-data] block \"{}\" unavailable, serving stub: {}",
                    id,
                    err
                );
                Ok(mock::block::block_by_id(id, now_ms()))
            }
            Err(err) => Err(err.for_entity("block", id)),
        }
    }

    pub(crate) async fn fetch_block_by_id(&self, id: &str) -> Result<BlockExtendedView, DataError> {
        let block: Block = match BlockId::classify(id) {
            BlockId::Sid { shard, height } => {
                self.get(&routes::block_by_sid(&shard, &height)).await?
            }
            BlockId::Composite { raw } => self.get(&routes::block_by_id(&raw)).await?,
        };

        let epoch_id = epoch_id_from_label(&block.epoch);
        let block_id = composite_block_id(epoch_id, &block.creator, block.index);

        // A failed proof fetch fails the whole block.
        let proof: Option<AggregatedFinalizationProof> = self
            .get(&routes::aggregated_finalization_proof(&block_id))
            .await?;

        let transactions: Vec<HashedTransaction> = block
            .transactions
            .into_iter()
            .map(|tx| HashedTransaction {
                tx_hash: display_tx_hash(&tx),
                tx,
            })
            .collect();

        Ok(BlockExtendedView {
            truncated_id: format!(
                "{}:{}:{}",
                epoch_id,
                truncate_middle(&block.creator),
                block.index
            ),
            id: block_id,
            creator: block.creator,
            epoch: block.epoch,
            epoch_id,
            index: block.index,
            txs_number: transactions.len(),
            transactions,
            created_at: FormattedDate(block.time).full(),
            prev_hash: block.prev_hash,
            aggregated_finalization_proof: proof,
        })
    }

    /// Finalization proof of a block; `None` while the block is not
    /// finalized. SIDs are resolved to the composite id first.
    pub async fn aggregated_finalization_proof(
        &self,
        id: &str,
    ) -> Result<Option<AggregatedFinalizationProof>, DataError> {
        if self.config.global_stub {
            return Ok(Some(mock::block::aggregated_finalization_proof(id)));
        }

        match self.fetch_aggregated_finalization_proof(id).await {
            Ok(proof) => Ok(proof),
            Err(err) if self.stub_on_failure() => {
                tracing::warn!(
                    "[explorer-data] finalization proof \"{}\" unavailable, serving stub: {}",
                    id,
                    err
                );
                Ok(Some(mock::block::aggregated_finalization_proof(id)))
            }
            Err(err) => Err(err.for_entity("aggregated finalization proof", id)),
        }
    }

    async fn fetch_aggregated_finalization_proof(
        &self,
        id: &str,
    ) -> Result<Option<AggregatedFinalizationProof>, DataError> {
        let composite = match BlockId::classify(id) {
            BlockId::Sid { shard, height } => {
                let block: Block = self.get(&routes::block_by_sid(&shard, &height)).await?;
                composite_block_id(
                    epoch_id_from_label(&block.epoch),
                    &block.creator,
                    block.index,
                )
            }
            BlockId::Composite { raw } => raw,
        };
        self.get(&routes::aggregated_finalization_proof(&composite))
            .await
    }
}

/// Listing row from a wire block.
fn block_preview(block: Block) -> BlockPreview {
    let epoch_id = epoch_id_from_label(&block.epoch);
    BlockPreview {
        id: composite_block_id(epoch_id, &block.creator, block.index),
        sid: block.sid.unwrap_or_default(),
        epoch_id,
        index: block.index,
        txs_number: block.transactions.len(),
        created_at: FormattedDate(block.time).preview(),
        creator: block.creator,
    }
}

/// Display hash of a transaction. EVM call data is hashed with Keccak-256
/// the way EVM tooling reports txids; everything else hashes the signature
/// with SHA-256.
pub(crate) fn display_tx_hash(tx: &Transaction) -> String {
    if tx.kind == TxKind::EvmCall {
        if let TxPayload::Evm(data) = &tx.payload {
            return format!("0x{}", hex::encode(Keccak256::digest(data.as_bytes())));
        }
    }
    hex::encode(Sha256::digest(tx.sig.as_bytes()))
}
