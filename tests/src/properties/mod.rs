//! Property tests for the seeded hash and identifier parsing.

pub mod hashing;
pub mod parsing;
