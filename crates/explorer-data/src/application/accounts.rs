//! Account operations.

use explorer_types::Account;

use crate::adapters::routes;
use crate::domain::{DataError, ParsedAccountId};
use crate::mock;
use crate::ports::NodeApi;

use super::service::{now_ms, ExplorerService};

impl<N: NodeApi> ExplorerService<N> {
    /// An account by raw identifier; the shard is parsed out of the id.
    pub async fn account(&self, raw_id: &str, force_stub: bool) -> Result<Account, DataError> {
        let parsed = ParsedAccountId::parse(raw_id);
        self.account_by_id(&parsed.shard, &parsed.address, force_stub)
            .await
    }

    /// An account by shard and address.
    ///
    /// Stubbed when the entity gate is on or `force_stub` is set. No dev
    /// fallback: a failed account fetch is an error in every environment.
    pub async fn account_by_id(
        &self,
        shard: &str,
        id: &str,
        force_stub: bool,
    ) -> Result<Account, DataError> {
        if force_stub || self.config.entity_stub {
            return Ok(mock::account::account_by_id(shard, id, now_ms()));
        }

        self.get(&routes::account_by_id(shard, id))
            .await
            .map_err(|err| err.for_entity("account", format!("{shard}:{id}")))
    }
}
