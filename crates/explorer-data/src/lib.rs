//! # Explorer Data
//!
//! Data-access layer of the Meridian explorer: everything between the node's
//! REST API and the pages.
//!
//! ## Purpose
//!
//! Give the presentation layer one facade, [`ExplorerService`], that:
//! - classifies and parses user-supplied identifiers (block SIDs and
//!   composite ids, shard-qualified account ids, signature schemes),
//! - fetches wire entities from a node and normalizes them into view models,
//! - serves deterministic stub data when stub gates are on, and degrades to
//!   it outside production when the node is unreachable.
//!
//! ## Module Structure
//!
//! ```text
//! explorer-data/
//! ├── domain/          # Identifiers, formatting, errors
//! ├── mock/            # Seeded deterministic stub generators
//! ├── ports/           # NodeApi trait (outbound) + mock implementation
//! ├── adapters/        # reqwest-backed node client, route builders
//! ├── application/     # ExplorerService facade
//! └── config.rs        # ExplorerConfig (stub gates, node URL)
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod mock;
pub mod ports;

// Re-exports
pub use adapters::HttpNodeApi;
pub use application::ExplorerService;
pub use config::{ExplorerConfig, DEFAULT_NODE_URL};
pub use domain::{
    clamp_rows_per_page, composite_block_id, describe_tx_kind, epoch_id_from_label, format_number,
    format_number_string, from_wei, truncate_middle, tx_success_rate, BlockId, DataError,
    FormattedDate, ParsedAccountId, SignatureScheme, MAX_ROWS_PER_PAGE, MIN_ROWS_PER_PAGE,
};
pub use ports::{MockNodeApi, NodeApi};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    #[test]
    fn test_version() {
        assert!(!super::VERSION.is_empty());
    }
}
