//! Link entity - One-way exits between rooms

use chrono::{DateTime, Utc};

use super::Asset;
use crate::domain::value_objects::{LinkId, PlayerId, RoomId};

/// A one-way passage from `location_id` to `destination_id`
#[derive(Debug, Clone, PartialEq)]
pub struct Link {
    pub id: LinkId,
    pub created: DateTime<Utc>,
    pub updated: DateTime<Utc>,
    pub name: String,
    pub description: String,
    pub owner_id: PlayerId,
    /// Room the exit is in
    pub location_id: RoomId,
    /// Room the exit leads to
    pub destination_id: RoomId,
}

#[derive(Debug, Clone, PartialEq)]
pub struct LinkChange {
    pub name: String,
    pub description: String,
    pub owner_id: PlayerId,
    pub location_id: RoomId,
    pub destination_id: RoomId,
}

impl Asset for Link {
    const KIND: &'static str = "link";

    type Id = LinkId;
    type Change = LinkChange;

    fn id(&self) -> LinkId {
        self.id
    }

    fn create(id: LinkId, change: LinkChange, now: DateTime<Utc>) -> Self {
        Self {
            id,
            created: now,
            updated: now,
            name: change.name,
            description: change.description,
            owner_id: change.owner_id,
            location_id: change.location_id,
            destination_id: change.destination_id,
        }
    }

    fn apply(&mut self, change: LinkChange, now: DateTime<Utc>) {
        self.name = change.name;
        self.description = change.description;
        self.owner_id = change.owner_id;
        self.location_id = change.location_id;
        self.destination_id = change.destination_id;
        self.updated = now;
    }
}
