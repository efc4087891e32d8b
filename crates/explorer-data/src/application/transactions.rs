//! Transaction operations.

use explorer_types::{TransactionExtendedView, TransactionPreview, TransactionReceipt};

use crate::adapters::routes;
use crate::domain::{describe_tx_kind, DataError, SignatureScheme};
use crate::mock;
use crate::ports::NodeApi;

use super::service::{now_ms, ExplorerService};

/// Upper bound on the account-transactions listing.
const MAX_ACCOUNT_TXS: usize = 200;

impl<N: NodeApi> ExplorerService<N> {
    /// A transaction with its receipt, parent block, and display
    /// descriptions, located by display hash.
    pub async fn transaction_by_hash(
        &self,
        hash: &str,
    ) -> Result<TransactionExtendedView, DataError> {
        if self.config.global_stub {
            return Ok(mock::transaction::transaction_by_hash(hash, now_ms()));
        }

        match self.fetch_transaction_by_hash(hash).await {
            Ok(view) => Ok(view),
            Err(err) if self.stub_on_failure() => {
                tracing::warn!(
                    "[explorer-data] transaction \"{}\" unavailable, serving stub: {}",
                    hash,
                    err
                );
                Ok(mock::transaction::transaction_by_hash(hash, now_ms()))
            }
            Err(err) => Err(err.for_entity("transaction", hash)),
        }
    }

    async fn fetch_transaction_by_hash(
        &self,
        hash: &str,
    ) -> Result<TransactionExtendedView, DataError> {
        let receipt: TransactionReceipt = self.get(&routes::tx_receipt(hash)).await?;
        let block = self.fetch_block_by_id(&receipt.block_id).await?;

        // The receipt names the block, so a missing transaction is a node
        // inconsistency, not a routing problem.
        let transaction = block
            .transactions
            .iter()
            .find(|t| t.tx_hash == hash)
            .cloned()
            .ok_or_else(|| DataError::Decode {
                route: routes::block_by_id(&receipt.block_id),
                reason: format!(
                    "transaction {} not present in block {}",
                    hash, receipt.block_id
                ),
            })?;

        Ok(TransactionExtendedView {
            type_description: describe_tx_kind(transaction.tx.kind).to_string(),
            creator_format_description: SignatureScheme::infer(&transaction.tx.creator)
                .describe()
                .to_string(),
            block,
            receipt,
            transaction,
        })
    }

    /// Latest transactions sent by an account, capped at 200 rows.
    pub async fn account_transactions(
        &self,
        shard: &str,
        account_id: &str,
    ) -> Result<Vec<TransactionPreview>, DataError> {
        if self.config.global_stub {
            return Ok(mock::transaction::account_transactions(account_id));
        }

        match self.fetch_account_transactions(shard, account_id).await {
            Ok(previews) => Ok(previews),
            Err(err) if self.stub_on_failure() => {
                tracing::warn!(
                    "[explorer-data] transactions of account \"{}\" unavailable, serving stub: {}",
                    account_id,
                    err
                );
                Ok(mock::transaction::account_transactions(account_id))
            }
            Err(err) => Err(err.for_entity("transactions of account", account_id)),
        }
    }

    async fn fetch_account_transactions(
        &self,
        shard: &str,
        account_id: &str,
    ) -> Result<Vec<TransactionPreview>, DataError> {
        let mut previews: Vec<TransactionPreview> = self
            .get(&routes::account_transactions(shard, account_id))
            .await?;
        previews.truncate(MAX_ACCOUNT_TXS);
        Ok(previews)
    }
}
