//! Domain layer - Core asset model with no transport or storage concerns
//!
//! This layer contains:
//! - Entities: Player, Room, Item, Link, User and their change sets
//! - Value Objects: typed identifiers, location references, size limits

pub mod entities;
pub mod value_objects;
