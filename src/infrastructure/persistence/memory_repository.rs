//! In-memory asset repository
//!
//! Keeps assets in insertion order behind a tokio `RwLock`. Used by the
//! server when no external store is configured and by tests.

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;

use crate::application::dto::{Filter, ItemScope, LinkScope, PlayerScope, RoomScope, UserScope};
use crate::application::errors::StoreError;
use crate::application::ports::outbound::AssetRepositoryPort;
use crate::application::resource::Resource;
use crate::domain::entities::{Asset, Item, Link, Player, Room, User};

/// Storage-side rules for an asset kept in memory.
pub trait MemoryRecord: Resource {
    /// Whether the asset passes the filter scope
    fn matches(&self, scope: &Self::Scope) -> bool;

    /// Uniqueness violation against an existing asset, if any
    fn conflicts_with(&self, _other: &Self) -> Option<StoreError> {
        None
    }
}

pub struct MemoryRepository<A: MemoryRecord> {
    assets: RwLock<Vec<A>>,
}

impl<A: MemoryRecord> Default for MemoryRepository<A> {
    fn default() -> Self {
        Self::new()
    }
}

impl<A: MemoryRecord> MemoryRepository<A> {
    pub fn new() -> Self {
        Self {
            assets: RwLock::new(Vec::new()),
        }
    }

    fn check_unique(assets: &[A], candidate: &A) -> Result<(), StoreError> {
        assets
            .iter()
            .filter(|other| other.id() != candidate.id())
            .find_map(|other| candidate.conflicts_with(other))
            .map_or(Ok(()), Err)
    }
}

#[async_trait]
impl<A: MemoryRecord> AssetRepositoryPort<A> for MemoryRepository<A> {
    async fn list(&self, filter: &Filter<A::Scope>) -> Result<Vec<A>, StoreError> {
        let assets = self.assets.read().await;
        Ok(assets
            .iter()
            .filter(|asset| asset.matches(&filter.scope))
            .skip(filter.page.offset as usize)
            .take(filter.page.limit as usize)
            .cloned()
            .collect())
    }

    async fn get(&self, id: A::Id) -> Result<A, StoreError> {
        let assets = self.assets.read().await;
        assets
            .iter()
            .find(|asset| asset.id() == id)
            .cloned()
            .ok_or_else(|| StoreError::not_found(A::KIND, id))
    }

    async fn create(&self, change: A::Change) -> Result<A, StoreError> {
        let asset = A::create(A::Id::from(uuid::Uuid::new_v4()), change, Utc::now());
        let mut assets = self.assets.write().await;
        Self::check_unique(&assets, &asset)?;
        assets.push(asset.clone());
        Ok(asset)
    }

    async fn update(&self, id: A::Id, change: A::Change) -> Result<A, StoreError> {
        let mut assets = self.assets.write().await;
        let index = assets
            .iter()
            .position(|asset| asset.id() == id)
            .ok_or_else(|| StoreError::not_found(A::KIND, id))?;

        let mut updated = assets[index].clone();
        updated.apply(change, Utc::now());
        Self::check_unique(&assets, &updated)?;
        assets[index] = updated.clone();
        Ok(updated)
    }

    async fn remove(&self, id: A::Id) -> Result<(), StoreError> {
        let mut assets = self.assets.write().await;
        let index = assets
            .iter()
            .position(|asset| asset.id() == id)
            .ok_or_else(|| StoreError::not_found(A::KIND, id))?;
        assets.remove(index);
        Ok(())
    }
}

fn matches_opt<T: PartialEq>(wanted: &Option<T>, actual: &T) -> bool {
    wanted.as_ref().map_or(true, |wanted| wanted == actual)
}

impl MemoryRecord for Player {
    fn matches(&self, scope: &PlayerScope) -> bool {
        matches_opt(&scope.location_id, &self.location_id)
    }
}

impl MemoryRecord for Room {
    fn matches(&self, scope: &RoomScope) -> bool {
        matches_opt(&scope.owner_id, &self.owner_id)
            && matches_opt(&scope.parent_id, &self.parent_id)
    }
}

impl MemoryRecord for Item {
    fn matches(&self, scope: &ItemScope) -> bool {
        matches_opt(&scope.owner_id, &self.owner_id)
            && matches_opt(&scope.location, &self.location)
    }
}

impl MemoryRecord for Link {
    fn matches(&self, scope: &LinkScope) -> bool {
        matches_opt(&scope.owner_id, &self.owner_id)
            && matches_opt(&scope.location_id, &self.location_id)
            && matches_opt(&scope.destination_id, &self.destination_id)
    }
}

impl MemoryRecord for User {
    fn matches(&self, scope: &UserScope) -> bool {
        matches_opt(&scope.player_id, &self.player_id)
    }

    fn conflicts_with(&self, other: &Self) -> Option<StoreError> {
        (self.login == other.login).then(|| StoreError::Conflict {
            entity_type: Self::KIND,
            field: "login",
            value: self.login.clone(),
        })
    }
}
