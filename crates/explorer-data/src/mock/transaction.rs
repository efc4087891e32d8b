//! Stub transactions.
//!
//! A stub transaction's parent block is itself a stub block generated from
//! a composite id built around the transaction's creator, so the view's
//! block reference and the receipt's block id always agree.

use explorer_types::{
    Transaction, TransactionExtendedView, TransactionPreview, TransactionReceipt,
    TransferPayload, HashedTransaction, TxKind, TxPayload,
};

use crate::domain::{composite_block_id, describe_tx_kind, SignatureScheme};
use crate::mock::block::{block_by_id, STUB_EPOCH_ID};
use crate::mock::seed::seed_hex;

/// A stub transaction view for any hash. `0x`-prefixed hashes get
/// EVM-style creator/recipient addresses.
pub fn transaction_by_hash(hash: &str, now_ms: u64) -> TransactionExtendedView {
    let evm_style = hash.starts_with("0x");
    let creator = if evm_style {
        format!("0x{}", &seed_hex(&format!("creator:{hash}"))[..40])
    } else {
        format!("acc_{}", &seed_hex(&format!("creator:{hash}"))[..48])
    };
    let to = if evm_style {
        format!("0x{}", &seed_hex(&format!("to:{hash}"))[..40])
    } else {
        format!("acc_{}", &seed_hex(&format!("to:{hash}"))[..48])
    };

    let block = block_by_id(&composite_block_id(STUB_EPOCH_ID, &creator, 1), now_ms);

    let receipt = TransactionReceipt {
        shard: "0".to_string(),
        block_id: block.id.clone(),
        order: 0,
        is_ok: true,
        reason: None,
        priority_fee: "0".to_string(),
        total_fee: "0".to_string(),
    };

    let tx = Transaction {
        v: 1,
        creator: creator.clone(),
        kind: TxKind::Transfer,
        nonce: 1,
        fee: "0".to_string(),
        payload: TxPayload::Transfer(TransferPayload {
            to,
            // 0.1 coins in base units
            amount: "100000000000000000".to_string(),
            touched_accounts: Vec::new(),
            gas_abstraction: false,
        }),
        sig_type: "ED25519".to_string(),
        sig: format!("sig_{}", &seed_hex(&format!("sig:{hash}"))[..64]),
    };

    TransactionExtendedView {
        block,
        receipt,
        type_description: describe_tx_kind(tx.kind).to_string(),
        creator_format_description: SignatureScheme::infer(&creator).describe().to_string(),
        transaction: HashedTransaction {
            tx,
            tx_hash: hash.to_string(),
        },
    }
}

/// Twelve stub transaction previews for an account, every fourth an EVM
/// call.
pub fn account_transactions(account_id: &str) -> Vec<TransactionPreview> {
    (0..12)
        .map(|i| TransactionPreview {
            txid: format!("0x{}", &seed_hex(&format!("acct:{account_id}:{i}"))[..64]),
            tx_type: if i % 4 == 0 {
                TxKind::EvmCall
            } else {
                TxKind::Transfer
            },
            sig_type: "ED25519".to_string(),
            priority_fee: (1000 + i * 17).to_string(),
            total_fee: "N/A".to_string(),
            creator: account_id.to_string(),
        })
        .collect()
}
