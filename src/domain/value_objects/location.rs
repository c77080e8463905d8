//! Polymorphic location references
//!
//! An item sits inside exactly one container at a time: a room, a player's
//! inventory or another item. [`LocationRef`] is the closed set of those
//! containers; the kind is carried by the variant, so the declared kind and
//! the wrapped identifier can never disagree.

use std::fmt;
use std::str::FromStr;

use uuid::Uuid;

use super::ids::{AssetId, IdError, ItemId, PlayerId, RoomId};

/// The kinds of asset that can contain another asset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LocationKind {
    Room,
    Player,
    Item,
}

impl LocationKind {
    pub const ALL: [LocationKind; 3] = [LocationKind::Room, LocationKind::Player, LocationKind::Item];

    /// Lowercase wire name
    pub fn as_str(&self) -> &'static str {
        match self {
            LocationKind::Room => "room",
            LocationKind::Player => "player",
            LocationKind::Item => "item",
        }
    }
}

impl fmt::Display for LocationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LocationKind {
    type Err = LocationRefError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| LocationRefError::InvalidKind(s.to_string()))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LocationRefError {
    #[error("{0}")]
    InvalidFormat(#[from] IdError),

    #[error("unknown location kind '{0}'")]
    InvalidKind(String),
}

/// Reference to the asset that currently holds another asset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LocationRef {
    Room(RoomId),
    Player(PlayerId),
    Item(ItemId),
}

impl LocationRef {
    /// Build a reference from an already-parsed identifier.
    pub fn new(kind: LocationKind, id: Uuid) -> Self {
        match kind {
            LocationKind::Room => LocationRef::Room(RoomId::from(id)),
            LocationKind::Player => LocationRef::Player(PlayerId::from(id)),
            LocationKind::Item => LocationRef::Item(ItemId::from(id)),
        }
    }

    /// Build a reference from wire strings. The identifier is checked before
    /// the kind tag; the kind tag is case-insensitive.
    pub fn parse(id: &str, kind: &str) -> Result<Self, LocationRefError> {
        let id = super::ids::parse_uuid(id)?;
        let kind = kind.parse::<LocationKind>()?;
        Ok(Self::new(kind, id))
    }

    pub fn id(&self) -> Uuid {
        match self {
            LocationRef::Room(id) => *id.as_uuid(),
            LocationRef::Player(id) => *id.as_uuid(),
            LocationRef::Item(id) => *id.as_uuid(),
        }
    }

    pub fn kind(&self) -> LocationKind {
        match self {
            LocationRef::Room(_) => LocationKind::Room,
            LocationRef::Player(_) => LocationKind::Player,
            LocationRef::Item(_) => LocationKind::Item,
        }
    }
}

impl From<RoomId> for LocationRef {
    fn from(id: RoomId) -> Self {
        LocationRef::Room(id)
    }
}

impl From<PlayerId> for LocationRef {
    fn from(id: PlayerId) -> Self {
        LocationRef::Player(id)
    }
}

impl From<ItemId> for LocationRef {
    fn from(id: ItemId) -> Self {
        LocationRef::Item(id)
    }
}
