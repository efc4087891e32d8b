//! # Meridian Explorer Test Suite
//!
//! Unified test crate for cross-module flows.
//!
//! ## Structure
//!
//! ```text
//! tests/src/
//! ├── integration/      # Facade flows over stubbed and mocked nodes
//! │   ├── stub_flows.rs
//! │   ├── live_flows.rs
//! │   └── view_consistency.rs
//! └── properties/       # Property tests for hashing and parsing
//! ```
//!
//! ## Running Tests
//!
//! ```bash
//! # All tests
//! cargo test -p explorer-tests
//!
//! # By category
//! cargo test -p explorer-tests integration::
//! cargo test -p explorer-tests properties::
//! ```

#![allow(unused_imports)]
#![allow(dead_code)]

pub mod integration;
pub mod properties;
