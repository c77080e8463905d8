//! Asset Service - Application service for asset management
//!
//! This service provides the list/get/create/update/remove use cases for
//! every resource. It only ever receives validated domain values; request
//! translation happens before it is called.

use std::sync::Arc;

use tracing::{debug, info, instrument};

use crate::application::dto::Filter;
use crate::application::errors::StoreError;
use crate::application::ports::outbound::AssetRepositoryPort;
use crate::application::resource::Resource;

pub struct AssetService<A: Resource> {
    repository: Arc<dyn AssetRepositoryPort<A>>,
}

impl<A: Resource> Clone for AssetService<A> {
    fn clone(&self) -> Self {
        Self {
            repository: Arc::clone(&self.repository),
        }
    }
}

impl<A: Resource> AssetService<A> {
    pub fn new(repository: Arc<dyn AssetRepositoryPort<A>>) -> Self {
        Self { repository }
    }

    #[instrument(skip(self, filter), fields(kind = A::KIND))]
    pub async fn list(&self, filter: &Filter<A::Scope>) -> Result<Vec<A>, StoreError> {
        let assets = self.repository.list(filter).await?;
        debug!(
            offset = filter.page.offset,
            limit = filter.page.limit,
            count = assets.len(),
            "Listed {}",
            A::COLLECTION
        );
        Ok(assets)
    }

    #[instrument(skip(self), fields(kind = A::KIND))]
    pub async fn get(&self, id: A::Id) -> Result<A, StoreError> {
        debug!(id = %id, "Fetching {}", A::KIND);
        self.repository.get(id).await
    }

    #[instrument(skip(self, change), fields(kind = A::KIND))]
    pub async fn create(&self, change: A::Change) -> Result<A, StoreError> {
        let asset = self.repository.create(change).await?;
        info!(id = %asset.id(), "Created {}", A::KIND);
        Ok(asset)
    }

    #[instrument(skip(self, change), fields(kind = A::KIND))]
    pub async fn update(&self, id: A::Id, change: A::Change) -> Result<A, StoreError> {
        let asset = self.repository.update(id, change).await?;
        info!(id = %id, "Updated {}", A::KIND);
        Ok(asset)
    }

    #[instrument(skip(self), fields(kind = A::KIND))]
    pub async fn remove(&self, id: A::Id) -> Result<(), StoreError> {
        self.repository.remove(id).await?;
        info!(id = %id, "Removed {}", A::KIND);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::dto::{Page, RoomScope};
    use crate::application::errors::ErrorKind;
    use crate::domain::entities::{Room, RoomChange};
    use crate::domain::value_objects::{PlayerId, RoomId};
    use crate::infrastructure::persistence::MemoryRepository;

    fn service() -> AssetService<Room> {
        AssetService::new(Arc::new(MemoryRepository::<Room>::new()))
    }

    fn room(name: &str, owner_id: PlayerId, parent_id: RoomId) -> RoomChange {
        RoomChange {
            name: name.to_string(),
            description: "A room".to_string(),
            owner_id,
            parent_id,
        }
    }

    #[tokio::test]
    async fn test_lifecycle() {
        let service = service();
        let owner = PlayerId::new();
        let lobby = service
            .create(room("Lobby", owner, RoomId::new()))
            .await
            .unwrap();
        let cellar = service
            .create(room("Cellar", owner, lobby.id))
            .await
            .unwrap();

        let filter = Filter {
            scope: RoomScope {
                owner_id: Some(owner),
                parent_id: Some(lobby.id),
            },
            page: Page::default(),
        };
        let children = service.list(&filter).await.unwrap();
        assert_eq!(children, vec![cellar.clone()]);

        let renamed = service
            .update(cellar.id, room("Wine cellar", owner, lobby.id))
            .await
            .unwrap();
        assert_eq!(renamed.name, "Wine cellar");
        assert_eq!(service.get(cellar.id).await.unwrap(), renamed);

        service.remove(cellar.id).await.unwrap();
        let err = service.get(cellar.id).await.unwrap_err();
        assert_eq!(err.kind(), ErrorKind::NotFound);
    }

    #[tokio::test]
    async fn test_update_of_unknown_room_is_not_found() {
        let err = service()
            .update(RoomId::new(), room("Nowhere", PlayerId::new(), RoomId::new()))
            .await
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::NotFound);
    }
}
