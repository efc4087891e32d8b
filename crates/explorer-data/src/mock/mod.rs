//! # Stub Generator
//!
//! Deterministic, seeded substitute entities for when the node's API is
//! unreachable or stub mode is enabled. Everything here is a pure function
//! of its seed inputs and the caller-supplied clock; no I/O.
//!
//! Determinism matters twice: golden/snapshot tests need stable values, and
//! cross-references must hold (a stub block's finalization proof points at
//! the stub block's own id, a stub pool's stakers are seeded from the pool
//! id).

pub mod account;
pub mod block;
pub mod epoch;
pub mod pool;
pub mod seed;
pub mod stats;
pub mod transaction;

pub use seed::{fnv1a32, mock_address, seed_hex};
