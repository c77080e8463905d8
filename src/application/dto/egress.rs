//! Egress translation - domain assets into wire views
//!
//! Views are plain string projections: identifiers are canonical lowercase
//! hyphenated UUIDs, timestamps use [`TIMESTAMP_FORMAT`] in UTC, and an
//! item's location becomes `{"id": ..., "type": ...}`. Translation is total.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::domain::entities::{Item, Link, Player, Room, User};
use crate::domain::value_objects::LocationRef;

/// `YYYY-MM-DDTHH:MM:SS.ffffff`
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.6f";

pub fn format_timestamp(ts: &DateTime<Utc>) -> String {
    ts.format(TIMESTAMP_FORMAT).to_string()
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LocationView {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: String,
}

impl From<&LocationRef> for LocationView {
    fn from(location: &LocationRef) -> Self {
        Self {
            id: location.id().hyphenated().to_string(),
            kind: location.kind().as_str().to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PlayerView {
    pub id: String,
    pub created: String,
    pub updated: String,
    pub name: String,
    pub description: String,
    #[serde(rename = "homeID")]
    pub home_id: String,
    #[serde(rename = "locationID")]
    pub location_id: String,
}

impl From<&Player> for PlayerView {
    fn from(p: &Player) -> Self {
        Self {
            id: p.id.to_string(),
            created: format_timestamp(&p.created),
            updated: format_timestamp(&p.updated),
            name: p.name.clone(),
            description: p.description.clone(),
            home_id: p.home_id.to_string(),
            location_id: p.location_id.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RoomView {
    pub id: String,
    pub created: String,
    pub updated: String,
    pub name: String,
    pub description: String,
    #[serde(rename = "ownerID")]
    pub owner_id: String,
    #[serde(rename = "parentID")]
    pub parent_id: String,
}

impl From<&Room> for RoomView {
    fn from(r: &Room) -> Self {
        Self {
            id: r.id.to_string(),
            created: format_timestamp(&r.created),
            updated: format_timestamp(&r.updated),
            name: r.name.clone(),
            description: r.description.clone(),
            owner_id: r.owner_id.to_string(),
            parent_id: r.parent_id.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ItemView {
    pub id: String,
    pub created: String,
    pub updated: String,
    pub name: String,
    pub description: String,
    #[serde(rename = "ownerID")]
    pub owner_id: String,
    #[serde(rename = "locationID")]
    pub location: LocationView,
}

impl From<&Item> for ItemView {
    fn from(i: &Item) -> Self {
        Self {
            id: i.id.to_string(),
            created: format_timestamp(&i.created),
            updated: format_timestamp(&i.updated),
            name: i.name.clone(),
            description: i.description.clone(),
            owner_id: i.owner_id.to_string(),
            location: LocationView::from(&i.location),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LinkView {
    pub id: String,
    pub created: String,
    pub updated: String,
    pub name: String,
    pub description: String,
    #[serde(rename = "ownerID")]
    pub owner_id: String,
    #[serde(rename = "locationID")]
    pub location_id: String,
    #[serde(rename = "destinationID")]
    pub destination_id: String,
}

impl From<&Link> for LinkView {
    fn from(l: &Link) -> Self {
        Self {
            id: l.id.to_string(),
            created: format_timestamp(&l.created),
            updated: format_timestamp(&l.updated),
            name: l.name.clone(),
            description: l.description.clone(),
            owner_id: l.owner_id.to_string(),
            location_id: l.location_id.to_string(),
            destination_id: l.destination_id.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UserView {
    pub id: String,
    pub created: String,
    pub updated: String,
    pub login: String,
    #[serde(rename = "publicKey")]
    pub public_key: String,
    #[serde(rename = "playerID")]
    pub player_id: String,
}

impl From<&User> for UserView {
    fn from(u: &User) -> Self {
        Self {
            id: u.id.to_string(),
            created: format_timestamp(&u.created),
            updated: format_timestamp(&u.updated),
            login: u.login.clone(),
            public_key: u.public_key.clone(),
            player_id: u.player_id.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;
    use uuid::Uuid;

    use super::*;
    use crate::domain::value_objects::{ItemId, LocationKind, PlayerId};

    fn sample_item(kind: LocationKind) -> Item {
        let created = Utc.with_ymd_and_hms(2024, 3, 9, 7, 5, 1).unwrap();
        Item {
            id: ItemId::from_uuid(Uuid::from_u128(0x6ba7b8109dad11d180b400c04fd430c8)),
            created,
            updated: created + chrono::Duration::microseconds(1500),
            name: "Lantern".into(),
            description: "Brass, slightly dented".into(),
            owner_id: PlayerId::from_uuid(Uuid::from_u128(1)),
            location: LocationRef::new(kind, Uuid::from_u128(2)),
        }
    }

    #[test]
    fn test_timestamps_use_fixed_microsecond_format() {
        let view = ItemView::from(&sample_item(LocationKind::Room));
        assert_eq!(view.created, "2024-03-09T07:05:01.000000");
        assert_eq!(view.updated, "2024-03-09T07:05:01.001500");
    }

    #[test]
    fn test_location_is_tagged_with_lowercase_kind() {
        for kind in LocationKind::ALL {
            let view = ItemView::from(&sample_item(kind));
            assert_eq!(view.location.kind, kind.as_str());
            assert_eq!(view.location.id, "00000000-0000-0000-0000-000000000002");
        }
    }

    #[test]
    fn test_item_view_wire_shape() {
        let json = serde_json::to_value(ItemView::from(&sample_item(LocationKind::Player))).unwrap();
        assert_eq!(json["id"], "6ba7b810-9dad-11d1-80b4-00c04fd430c8");
        assert_eq!(json["ownerID"], "00000000-0000-0000-0000-000000000001");
        assert_eq!(json["locationID"]["type"], "player");
        assert_eq!(json["locationID"]["id"], "00000000-0000-0000-0000-000000000002");
    }

    #[test]
    fn test_translation_is_idempotent() {
        let item = sample_item(LocationKind::Item);
        let first = serde_json::to_vec(&ItemView::from(&item)).unwrap();
        let second = serde_json::to_vec(&ItemView::from(&item)).unwrap();
        assert_eq!(first, second);
    }
}
