//! # Built-in Vocabulary
//!
//! Static schema tables for ActivityStreams 2.0 and the ActivityPub actor
//! extensions. Entities are re-exported here (`vocab::NOTE`,
//! `vocab::CREATE`, ...); property specs live in [`properties`].

pub mod entities;
pub mod properties;

pub use entities::*;

use crate::schema::Schema;

/// Look up a built-in entity by canonical type name without going through a
/// registry.
pub fn entity(name: &str) -> Option<&'static Schema> {
    ENTITIES.iter().copied().find(|schema| schema.name == name)
}
