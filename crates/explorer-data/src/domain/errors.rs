//! # Domain Errors
//!
//! Error types for the explorer data layer.

use thiserror::Error;

/// Errors produced while fetching and normalizing entities.
#[derive(Debug, Error)]
pub enum DataError {
    /// The remote call failed: unreachable node, timeout, or non-2xx status.
    #[error("network request to \"{route}\" failed: {reason}")]
    Network {
        /// Route the request was sent to.
        route: String,
        /// Underlying failure description.
        reason: String,
    },

    /// The response body could not be decoded into the expected shape.
    #[error("failed to decode response from \"{route}\": {reason}")]
    Decode {
        /// Route the response came from.
        route: String,
        /// Deserialization failure description.
        reason: String,
    },

    /// An entity fetch failed; wraps the underlying cause with the entity
    /// id so pages can surface a meaningful message.
    #[error("failed to fetch {entity} \"{id}\": {source}")]
    Fetch {
        /// Entity family, e.g. `block` or `pool`.
        entity: &'static str,
        /// Identifier the caller asked for.
        id: String,
        /// Underlying cause.
        #[source]
        source: Box<DataError>,
    },
}

impl DataError {
    /// Wrap this error with entity context for user-visible messages.
    pub fn for_entity(self, entity: &'static str, id: impl Into<String>) -> Self {
        DataError::Fetch {
            entity,
            id: id.into(),
            source: Box::new(self),
        }
    }
}
