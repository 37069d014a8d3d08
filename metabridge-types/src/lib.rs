//! Core type definitions for metabridge.
//!
//! This crate defines the types shared by the mapping, behavior, and store
//! crates:
//! - Record identifiers for local items, metadata elements, and remote servers
//! - The canonical Dublin Core field set ([`DcField`])
//! - Import behaviors ([`BehaviorKind`])
//! - Remote datastream descriptors ([`Datastream`])
//!
//! Schema-specific knowledge (MODS paths, element-set tables) lives in the
//! crates that consume these types, not here.

mod behavior;
mod datastream;
mod field;
mod ids;

pub use behavior::BehaviorKind;
pub use datastream::Datastream;
pub use field::DcField;
pub use ids::{ElementId, ItemId, ServerId};

/// Result type alias using the crate's error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in type operations.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("invalid UUID: {0}")]
    InvalidUuid(#[from] uuid::Error),

    #[error("unknown import behavior: {0}")]
    UnknownBehavior(String),

    #[error("unknown Dublin Core field: {0}")]
    UnknownField(String),
}
