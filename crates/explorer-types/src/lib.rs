//! # Explorer Types Crate
//!
//! All entity shapes used by the Meridian explorer data layer.
//!
//! ## Design Principles
//!
//! - **Single Source of Truth**: every shape exchanged with the node's REST
//!   API or handed to the presentation layer is defined here.
//! - **Wire vs. view split**: [`entities`] holds the node's wire shapes
//!   (deserialized as-is, camelCase field names); [`views`] holds the
//!   normalized view models the facade produces for pages.
//! - **Read-only projections**: nothing here is persisted or mutated; every
//!   value is built fresh per request.

pub mod entities;
pub mod views;

pub use entities::*;
pub use views::*;
