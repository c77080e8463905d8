//! Player entity

use chrono::{DateTime, Utc};

use super::Asset;
use crate::domain::value_objects::{PlayerId, RoomId};

/// A player character
#[derive(Debug, Clone, PartialEq)]
pub struct Player {
    pub id: PlayerId,
    pub created: DateTime<Utc>,
    pub updated: DateTime<Utc>,
    pub name: String,
    pub description: String,
    /// Room the player respawns in
    pub home_id: RoomId,
    /// Room the player is standing in
    pub location_id: RoomId,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PlayerChange {
    pub name: String,
    pub description: String,
    pub home_id: RoomId,
    pub location_id: RoomId,
}

impl Asset for Player {
    const KIND: &'static str = "player";

    type Id = PlayerId;
    type Change = PlayerChange;

    fn id(&self) -> PlayerId {
        self.id
    }

    fn create(id: PlayerId, change: PlayerChange, now: DateTime<Utc>) -> Self {
        Self {
            id,
            created: now,
            updated: now,
            name: change.name,
            description: change.description,
            home_id: change.home_id,
            location_id: change.location_id,
        }
    }

    fn apply(&mut self, change: PlayerChange, now: DateTime<Utc>) {
        self.name = change.name;
        self.description = change.description;
        self.home_id = change.home_id;
        self.location_id = change.location_id;
        self.updated = now;
    }
}
