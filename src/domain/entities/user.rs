//! User entity - Accounts that control a player

use chrono::{DateTime, Utc};

use super::Asset;
use crate::domain::value_objects::{PlayerId, UserId};

#[derive(Debug, Clone, PartialEq)]
pub struct User {
    pub id: UserId,
    pub created: DateTime<Utc>,
    pub updated: DateTime<Utc>,
    /// Unique login name
    pub login: String,
    /// SSH public key the user authenticates with
    pub public_key: String,
    pub player_id: PlayerId,
}

#[derive(Debug, Clone, PartialEq)]
pub struct UserChange {
    pub login: String,
    pub public_key: String,
    pub player_id: PlayerId,
}

impl Asset for User {
    const KIND: &'static str = "user";

    type Id = UserId;
    type Change = UserChange;

    fn id(&self) -> UserId {
        self.id
    }

    fn create(id: UserId, change: UserChange, now: DateTime<Utc>) -> Self {
        Self {
            id,
            created: now,
            updated: now,
            login: change.login,
            public_key: change.public_key,
            player_id: change.player_id,
        }
    }

    fn apply(&mut self, change: UserChange, now: DateTime<Utc>) {
        self.login = change.login;
        self.public_key = change.public_key;
        self.player_id = change.player_id;
        self.updated = now;
    }
}
