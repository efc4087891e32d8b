//! Stub accounts.

use explorer_types::{Account, ContractAccount, UserAccount};

/// A stub account. Identifiers that look like contracts (a `contract_`
/// prefix or a `system/` path) become contract accounts; everything else
/// is an end-user account with a fixed fractional balance.
pub fn account_by_id(_shard: &str, id: &str, now_ms: u64) -> Account {
    let is_contract = id.starts_with("contract_") || id.contains("system/");
    if is_contract {
        return Account::Contract(ContractAccount {
            lang: "EVM".to_string(),
            balance: "0".to_string(),
            gas: 0,
            storages: Vec::new(),
            storage_abstraction_last_payment: now_ms,
        });
    }

    Account::User(UserAccount {
        // 1.2345 coins in base units
        balance: "1234500000000000000".to_string(),
        nonce: 42,
        gas: 0,
    })
}
