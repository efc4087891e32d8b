//! # Seeded Hash
//!
//! Non-cryptographic 32-bit FNV-1a hash driving every stub value. The same
//! seed always produces the same output, which keeps stub entities stable
//! across calls and lets cross-references (a block's transactions, its
//! finalization proof) agree with each other. Collisions are a birthday
//! risk on a 32-bit space and acceptable for display-only fake data.

const FNV_OFFSET_BASIS: u32 = 2_166_136_261;
const FNV_PRIME: u32 = 16_777_619;

/// 32-bit FNV-1a over the seed's bytes.
pub fn fnv1a32(seed: &str) -> u32 {
    let mut h = FNV_OFFSET_BASIS;
    for byte in seed.bytes() {
        h ^= u32::from(byte);
        h = h.wrapping_mul(FNV_PRIME);
    }
    h
}

/// 64-character hex string derived from the seed: the 8-hex-digit hash
/// repeated to length.
pub fn seed_hex(seed: &str) -> String {
    let hex = format!("{:08x}", fnv1a32(seed));
    hex.repeat(8)
}

/// Deterministic account address for a seed.
pub fn mock_address(seed: &str) -> String {
    format!("acc_{}", &seed_hex(&format!("addr:{seed}"))[..48])
}
