//! Room entity - Places in the world
//!
//! Rooms form a hierarchy - a zone contains an inn, the inn contains rooms.
//! The parent_id field establishes this containment relationship.

use chrono::{DateTime, Utc};

use super::Asset;
use crate::domain::value_objects::{PlayerId, RoomId};

#[derive(Debug, Clone, PartialEq)]
pub struct Room {
    pub id: RoomId,
    pub created: DateTime<Utc>,
    pub updated: DateTime<Utc>,
    pub name: String,
    pub description: String,
    pub owner_id: PlayerId,
    pub parent_id: RoomId,
}

#[derive(Debug, Clone, PartialEq)]
pub struct RoomChange {
    pub name: String,
    pub description: String,
    pub owner_id: PlayerId,
    pub parent_id: RoomId,
}

impl Asset for Room {
    const KIND: &'static str = "room";

    type Id = RoomId;
    type Change = RoomChange;

    fn id(&self) -> RoomId {
        self.id
    }

    fn create(id: RoomId, change: RoomChange, now: DateTime<Utc>) -> Self {
        Self {
            id,
            created: now,
            updated: now,
            name: change.name,
            description: change.description,
            owner_id: change.owner_id,
            parent_id: change.parent_id,
        }
    }

    fn apply(&mut self, change: RoomChange, now: DateTime<Utc>) {
        self.name = change.name;
        self.description = change.description;
        self.owner_id = change.owner_id;
        self.parent_id = change.parent_id;
        self.updated = now;
    }
}
