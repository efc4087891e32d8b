//! # Domain Module
//!
//! Identifier parsing, display normalization, and errors for the explorer
//! data layer.

pub mod errors;
pub mod format;
pub mod identifiers;

pub use errors::*;
pub use format::*;
pub use identifiers::*;
