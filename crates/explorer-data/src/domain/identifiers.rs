//! # Identifier Parser
//!
//! Raw, URL-decoded identifier strings come in several shapes: blocks are
//! addressed by a shard-qualified SID or a composite id, accounts by an
//! optionally shard-prefixed address, and a creator string encodes its
//! signature scheme in its length. Parsing is best-effort by design:
//! malformed identifiers fall through to a default classification instead
//! of failing, so pages always render something.

use explorer_types::TxKind;

/// Block identifier, classified by colon-arity.
///
/// Exactly two colon-separated parts form a SID `{shard}:{height}`; anything
/// else is treated as a composite id `{epochId}:{creator}:{index}` and kept
/// raw for route building.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BlockId {
    /// Shard-qualified absolute height.
    Sid {
        /// Shard identifier.
        shard: String,
        /// Absolute height within the shard, kept raw (may be non-numeric).
        height: String,
    },
    /// Composite id `{epochId}:{creator}:{index}`, kept raw.
    Composite {
        /// The raw identifier.
        raw: String,
    },
}

impl BlockId {
    /// Classify a raw block identifier. Never fails.
    pub fn classify(raw: &str) -> Self {
        let parts: Vec<&str> = raw.split(':').collect();
        if parts.len() == 2 {
            BlockId::Sid {
                shard: parts[0].to_string(),
                height: parts[1].to_string(),
            }
        } else {
            BlockId::Composite {
                raw: raw.to_string(),
            }
        }
    }

    /// Whether this identifier is a SID.
    pub fn is_sid(&self) -> bool {
        matches!(self, BlockId::Sid { .. })
    }
}

/// An account identifier decomposed into shard and address.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedAccountId {
    /// Shard the account lives on; `x` for system contracts.
    pub shard: String,
    /// The account address, lowercased when EVM-style.
    pub address: String,
    /// Whether the identifier names a system contract.
    pub system_contract: bool,
}

impl ParsedAccountId {
    /// Parse a raw, URL-decoded account identifier.
    ///
    /// `shard:address` splits on the first colon. A bare EVM-style address
    /// defaults to shard `0`; any other bare identifier is a system/contract
    /// name addressed with the synthetic shard token `x`.
    pub fn parse(raw: &str) -> Self {
        if let Some((shard, address)) = raw.split_once(':') {
            return Self {
                shard: shard.to_string(),
                address: normalize_address(address),
                system_contract: false,
            };
        }

        if is_evm_address(raw) {
            Self {
                shard: "0".to_string(),
                address: raw.to_lowercase(),
                system_contract: false,
            }
        } else {
            Self {
                shard: "x".to_string(),
                address: raw.to_string(),
                system_contract: true,
            }
        }
    }
}

fn is_evm_address(s: &str) -> bool {
    s.starts_with("0x") && s.len() == 42
}

fn normalize_address(s: &str) -> String {
    if is_evm_address(s) {
        s.to_lowercase()
    } else {
        s.to_string()
    }
}

/// Signature scheme of a transaction creator, inferred from the shape of
/// its identifier string.
///
/// These are magic-length heuristics inherited from the node's address
/// formats; the length table must not be "improved". The 64-length check
/// wins over the `0x` prefix check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SignatureScheme {
    /// Single ED25519 key (43-44 characters).
    Ed25519,
    /// BLS multisig aggregate (98 characters).
    BlsMultisig,
    /// TBLS threshold signature (96 characters).
    TblsThreshold,
    /// Post-quantum scheme (64 characters).
    PostQuantum,
    /// ECDSA, EVM-compatible (`0x` + 40 hex).
    EcdsaEvm,
    /// Anything else.
    Unknown,
}

impl SignatureScheme {
    /// Infer the scheme from a creator identifier.
    pub fn infer(creator: &str) -> Self {
        let length = creator.len();
        if length == 44 || length == 43 {
            SignatureScheme::Ed25519
        } else if length == 98 {
            SignatureScheme::BlsMultisig
        } else if length == 96 {
            SignatureScheme::TblsThreshold
        } else if length == 64 {
            SignatureScheme::PostQuantum
        } else if creator.starts_with("0x") && length == 42 {
            SignatureScheme::EcdsaEvm
        } else {
            SignatureScheme::Unknown
        }
    }

    /// Human-readable format description shown on transaction pages.
    pub fn describe(&self) -> &'static str {
        match self {
            SignatureScheme::Ed25519 => "ED25519",
            SignatureScheme::BlsMultisig => "BLS, multisig",
            SignatureScheme::TblsThreshold => "TBLS, tsig",
            SignatureScheme::PostQuantum => "PQC, post-quantum",
            SignatureScheme::EcdsaEvm => "ECDSA, EVM-compatible",
            SignatureScheme::Unknown => "Unknown format",
        }
    }
}

/// Extract the numeric id from an epoch label of the form `epoch#<n>`.
/// Malformed labels yield 0.
pub fn epoch_id_from_label(label: &str) -> u64 {
    label
        .split('#')
        .nth(1)
        .and_then(|n| n.parse().ok())
        .unwrap_or(0)
}

/// Build the composite block id from its parts.
pub fn composite_block_id(epoch_id: u64, creator: &str, index: u64) -> String {
    format!("{epoch_id}:{creator}:{index}")
}

/// Human-readable description of a transaction type.
pub fn describe_tx_kind(kind: TxKind) -> &'static str {
    match kind {
        TxKind::Transfer => "simple address to address tx",
        TxKind::WasmDeploy => "contract deployment to WASM vm",
        TxKind::WasmCall => "call smart-contract in WASM vm",
        TxKind::EvmCall => "interaction with EVM",
    }
}
