//! Ingress translation - wire requests into validated change sets
//!
//! Requests are decoded leniently (a missing or `null` field decodes as empty)
//! so that it is reported by the same ordered rules as an invalid one.
//! Rules run in field order and the first failure wins: text fields are
//! checked for emptiness then length, then identifiers are parsed.

use serde::{Deserialize, Deserializer};

use crate::application::errors::ValidationError;
use crate::domain::entities::{ItemChange, LinkChange, PlayerChange, RoomChange, UserChange};
use crate::domain::value_objects::{
    AssetId, LocationRef, LocationRefError, MAX_DESCRIPTION_LEN, MAX_LOGIN_LEN, MAX_NAME_LEN,
    MAX_PUBLIC_KEY_LEN,
};

/// Length rule for one required text field
#[derive(Debug, Clone, Copy)]
pub struct TextRule {
    /// Name used in messages, e.g. `name` in "empty item name"
    pub field: &'static str,
    pub max_len: usize,
}

pub const NAME: TextRule = TextRule {
    field: "name",
    max_len: MAX_NAME_LEN,
};

pub const DESCRIPTION: TextRule = TextRule {
    field: "description",
    max_len: MAX_DESCRIPTION_LEN,
};

pub const LOGIN: TextRule = TextRule {
    field: "login",
    max_len: MAX_LOGIN_LEN,
};

pub const PUBLIC_KEY: TextRule = TextRule {
    field: "publicKey",
    max_len: MAX_PUBLIC_KEY_LEN,
};

impl TextRule {
    pub fn check(&self, asset: &'static str, value: String) -> Result<String, ValidationError> {
        if value.is_empty() {
            return Err(ValidationError::EmptyField {
                asset,
                field: self.field,
            });
        }
        if value.chars().count() > self.max_len {
            return Err(ValidationError::FieldTooLong {
                asset,
                field: self.field,
            });
        }
        Ok(value)
    }
}

/// Parse a required identifier field.
pub fn require_id<I: AssetId>(field: &'static str, raw: &str) -> Result<I, ValidationError> {
    I::parse(raw).map_err(|err| ValidationError::invalid_format(field, raw, err))
}

/// Decode `null` the same as an absent field.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct PlayerRequest {
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(deserialize_with = "null_as_default")]
    pub description: String,
    #[serde(rename = "homeID", deserialize_with = "null_as_default")]
    pub home_id: String,
    #[serde(rename = "locationID", deserialize_with = "null_as_default")]
    pub location_id: String,
}

impl PlayerRequest {
    pub fn into_change(self) -> Result<PlayerChange, ValidationError> {
        const ASSET: &str = "player";
        Ok(PlayerChange {
            name: NAME.check(ASSET, self.name)?,
            description: DESCRIPTION.check(ASSET, self.description)?,
            home_id: require_id("homeID", &self.home_id)?,
            location_id: require_id("locationID", &self.location_id)?,
        })
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RoomRequest {
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(deserialize_with = "null_as_default")]
    pub description: String,
    #[serde(rename = "ownerID", deserialize_with = "null_as_default")]
    pub owner_id: String,
    #[serde(rename = "parentID", deserialize_with = "null_as_default")]
    pub parent_id: String,
}

impl RoomRequest {
    pub fn into_change(self) -> Result<RoomChange, ValidationError> {
        const ASSET: &str = "room";
        Ok(RoomChange {
            name: NAME.check(ASSET, self.name)?,
            description: DESCRIPTION.check(ASSET, self.description)?,
            owner_id: require_id("ownerID", &self.owner_id)?,
            parent_id: require_id("parentID", &self.parent_id)?,
        })
    }
}

/// Wire form of a location reference: `{"id": "...", "type": "room"}`
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct LocationRequest {
    #[serde(deserialize_with = "null_as_default")]
    pub id: String,
    #[serde(rename = "type", deserialize_with = "null_as_default")]
    pub kind: String,
}

impl LocationRequest {
    fn into_location(
        self,
        field: &'static str,
        kind_field: &'static str,
    ) -> Result<LocationRef, ValidationError> {
        LocationRef::parse(&self.id, &self.kind).map_err(|err| match err {
            LocationRefError::InvalidFormat(source) => {
                ValidationError::invalid_format(field, self.id.as_str(), source)
            }
            LocationRefError::InvalidKind(value) => ValidationError::InvalidKind {
                field: kind_field,
                value,
            },
        })
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ItemRequest {
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(deserialize_with = "null_as_default")]
    pub description: String,
    #[serde(rename = "ownerID", deserialize_with = "null_as_default")]
    pub owner_id: String,
    #[serde(rename = "locationID", deserialize_with = "null_as_default")]
    pub location: LocationRequest,
}

impl ItemRequest {
    pub fn into_change(self) -> Result<ItemChange, ValidationError> {
        const ASSET: &str = "item";
        Ok(ItemChange {
            name: NAME.check(ASSET, self.name)?,
            description: DESCRIPTION.check(ASSET, self.description)?,
            owner_id: require_id("ownerID", &self.owner_id)?,
            location: self.location.into_location("locationID", "locationID.type")?,
        })
    }
}

/// Links always join two rooms; their ends are not polymorphic.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct LinkRequest {
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(deserialize_with = "null_as_default")]
    pub description: String,
    #[serde(rename = "ownerID", deserialize_with = "null_as_default")]
    pub owner_id: String,
    #[serde(rename = "locationID", deserialize_with = "null_as_default")]
    pub location_id: String,
    #[serde(rename = "destinationID", deserialize_with = "null_as_default")]
    pub destination_id: String,
}

impl LinkRequest {
    pub fn into_change(self) -> Result<LinkChange, ValidationError> {
        const ASSET: &str = "link";
        Ok(LinkChange {
            name: NAME.check(ASSET, self.name)?,
            description: DESCRIPTION.check(ASSET, self.description)?,
            owner_id: require_id("ownerID", &self.owner_id)?,
            location_id: require_id("locationID", &self.location_id)?,
            destination_id: require_id("destinationID", &self.destination_id)?,
        })
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct UserRequest {
    #[serde(deserialize_with = "null_as_default")]
    pub login: String,
    #[serde(rename = "publicKey", deserialize_with = "null_as_default")]
    pub public_key: String,
    #[serde(rename = "playerID", deserialize_with = "null_as_default")]
    pub player_id: String,
}

impl UserRequest {
    pub fn into_change(self) -> Result<UserChange, ValidationError> {
        const ASSET: &str = "user";
        Ok(UserChange {
            login: LOGIN.check(ASSET, self.login)?,
            public_key: PUBLIC_KEY.check(ASSET, self.public_key)?,
            player_id: require_id("playerID", &self.player_id)?,
        })
    }
}
