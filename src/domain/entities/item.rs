//! Item entity - Things that can be carried, dropped and nested

use chrono::{DateTime, Utc};

use super::Asset;
use crate::domain::value_objects::{ItemId, LocationRef, PlayerId};

/// An item somewhere in the world
///
/// An item is always inside exactly one container: a room, a player's
/// inventory, or another item.
#[derive(Debug, Clone, PartialEq)]
pub struct Item {
    pub id: ItemId,
    pub created: DateTime<Utc>,
    pub updated: DateTime<Utc>,
    pub name: String,
    pub description: String,
    pub owner_id: PlayerId,
    pub location: LocationRef,
}

/// Validated create/update request for an item
#[derive(Debug, Clone, PartialEq)]
pub struct ItemChange {
    pub name: String,
    pub description: String,
    pub owner_id: PlayerId,
    pub location: LocationRef,
}

impl Asset for Item {
    const KIND: &'static str = "item";

    type Id = ItemId;
    type Change = ItemChange;

    fn id(&self) -> ItemId {
        self.id
    }

    fn create(id: ItemId, change: ItemChange, now: DateTime<Utc>) -> Self {
        Self {
            id,
            created: now,
            updated: now,
            name: change.name,
            description: change.description,
            owner_id: change.owner_id,
            location: change.location,
        }
    }

    fn apply(&mut self, change: ItemChange, now: DateTime<Utc>) {
        self.name = change.name;
        self.description = change.description;
        self.owner_id = change.owner_id;
        self.location = change.location;
        self.updated = now;
    }
}
