//! # Application Layer
//!
//! `ExplorerService` is the data-access facade the presentation layer talks
//! to. The service is generic over the outbound [`NodeApi`](crate::ports::NodeApi)
//! port; its operations are split across one file per entity family.

mod accounts;
mod blocks;
mod epochs;
mod pools;
mod service;
mod summary;
mod transactions;

pub use service::ExplorerService;
