//! List filters built from query parameters
//!
//! A [`Filter`] is the pagination window plus a resource-specific scope.
//! Parsing is fail-fast and ordered: `limit`, then `offset`, then each
//! identifier parameter in the order the scope declares it, then any
//! cross-parameter rules. Error messages echo the raw query value.

use std::collections::HashMap;

use crate::application::errors::ValidationError;
use crate::domain::value_objects::{
    parse_uuid, AssetId, LocationKind, LocationRef, PlayerId, RoomId, DEFAULT_LIMIT, MAX_LIMIT,
};

/// Raw query parameters as received from the client. When a key is
/// repeated only its first value is kept.
#[derive(Debug, Clone, Default)]
pub struct QueryParams(HashMap<String, String>);

impl QueryParams {
    /// Present and non-empty value of `name`
    pub fn get(&self, name: &str) -> Option<&str> {
        self.0.get(name).map(String::as_str).filter(|v| !v.is_empty())
    }

    /// Parse `name` as an identifier if it is present.
    pub fn id<I: AssetId>(&self, name: &'static str) -> Result<Option<I>, ValidationError> {
        self.get(name)
            .map(|raw| I::parse(raw).map_err(|_| ValidationError::invalid_parameter(name, raw)))
            .transpose()
    }

    fn positive(&self, name: &'static str) -> Result<Option<u32>, ValidationError> {
        self.get(name)
            .map(|raw| {
                raw.parse::<u32>()
                    .ok()
                    .filter(|n| *n > 0)
                    .ok_or_else(|| ValidationError::invalid_parameter(name, raw))
            })
            .transpose()
    }

    /// Pagination window. A present `offset` must be strictly positive, so
    /// `offset=0` is rejected even though omitting it means the same thing.
    pub fn page(&self) -> Result<Page, ValidationError> {
        let limit = match self.positive("limit")? {
            Some(limit) if limit > MAX_LIMIT => {
                let raw = self.get("limit").unwrap_or_default();
                return Err(ValidationError::invalid_parameter("limit", raw));
            }
            Some(limit) => limit,
            None => DEFAULT_LIMIT,
        };
        let offset = self.positive("offset")?.unwrap_or(0);
        Ok(Page { offset, limit })
    }
}

impl FromIterator<(String, String)> for QueryParams {
    fn from_iter<T: IntoIterator<Item = (String, String)>>(pairs: T) -> Self {
        let mut params = HashMap::new();
        for (name, value) in pairs {
            params.entry(name).or_insert(value);
        }
        Self(params)
    }
}

/// Pagination window, `1 <= limit <= MAX_LIMIT`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Page {
    pub offset: u32,
    pub limit: u32,
}

impl Default for Page {
    fn default() -> Self {
        Self {
            offset: 0,
            limit: DEFAULT_LIMIT,
        }
    }
}

/// Resource-specific part of a list filter
pub trait FilterScope: Sized + Default + Send + Sync + 'static {
    fn from_query(query: &QueryParams) -> Result<Self, ValidationError>;
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Filter<S> {
    pub scope: S,
    pub page: Page,
}

impl<S: FilterScope> Filter<S> {
    pub fn from_query(query: &QueryParams) -> Result<Self, ValidationError> {
        let page = query.page()?;
        let scope = S::from_query(query)?;
        Ok(Self { scope, page })
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PlayerScope {
    pub location_id: Option<RoomId>,
}

impl FilterScope for PlayerScope {
    fn from_query(query: &QueryParams) -> Result<Self, ValidationError> {
        Ok(Self {
            location_id: query.id("locationID")?,
        })
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RoomScope {
    pub owner_id: Option<PlayerId>,
    pub parent_id: Option<RoomId>,
}

impl FilterScope for RoomScope {
    fn from_query(query: &QueryParams) -> Result<Self, ValidationError> {
        let owner_id = query.id("ownerID")?;
        let parent_id = query.id("parentID")?;
        Ok(Self {
            owner_id,
            parent_id,
        })
    }
}

/// Items may be filtered by owner or by location, never both.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ItemScope {
    pub owner_id: Option<PlayerId>,
    pub location: Option<LocationRef>,
}

impl FilterScope for ItemScope {
    fn from_query(query: &QueryParams) -> Result<Self, ValidationError> {
        let owner_id: Option<PlayerId> = query.id("ownerID")?;

        let location_id = query
            .get("locationID")
            .map(|raw| {
                parse_uuid(raw).map_err(|_| ValidationError::invalid_parameter("locationID", raw))
            })
            .transpose()?;

        let location_kind = query
            .get("locationType")
            .map(|raw| {
                raw.parse::<LocationKind>()
                    .map_err(|_| ValidationError::invalid_parameter("locationType", raw))
            })
            .transpose()?;

        let location = match (location_id, location_kind) {
            (Some(id), Some(kind)) => Some(LocationRef::new(kind, id)),
            (Some(_), None) => {
                return Err(ValidationError::MissingParameter {
                    name: "locationType",
                    when: "locationID",
                })
            }
            (None, Some(_)) => {
                return Err(ValidationError::MissingParameter {
                    name: "locationID",
                    when: "locationType",
                })
            }
            (None, None) => None,
        };

        if owner_id.is_some() && location.is_some() {
            return Err(ValidationError::MutuallyExclusiveParameters {
                first: "ownerID",
                second: "locationID/locationType",
            });
        }

        Ok(Self { owner_id, location })
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LinkScope {
    pub owner_id: Option<PlayerId>,
    pub location_id: Option<RoomId>,
    pub destination_id: Option<RoomId>,
}

impl FilterScope for LinkScope {
    fn from_query(query: &QueryParams) -> Result<Self, ValidationError> {
        let owner_id = query.id("ownerID")?;
        let location_id = query.id("locationID")?;
        let destination_id = query.id("destinationID")?;
        Ok(Self {
            owner_id,
            location_id,
            destination_id,
        })
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UserScope {
    pub player_id: Option<PlayerId>,
}

impl FilterScope for UserScope {
    fn from_query(query: &QueryParams) -> Result<Self, ValidationError> {
        Ok(Self {
            player_id: query.id("playerID")?,
        })
    }
}
