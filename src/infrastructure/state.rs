//! Shared application state

use std::sync::Arc;

use crate::application::ports::outbound::AssetRepositoryPort;
use crate::application::resource::Resource;
use crate::application::services::AssetService;
use crate::domain::entities::{Item, Link, Player, Room, User};
use crate::infrastructure::config::{AppConfig, BuildInfo};
use crate::infrastructure::persistence::MemoryRepository;

/// Shared application state
pub struct AppState {
    pub config: AppConfig,
    pub build: BuildInfo,
    // Application services
    pub player_service: AssetService<Player>,
    pub room_service: AssetService<Room>,
    pub item_service: AssetService<Item>,
    pub link_service: AssetService<Link>,
    pub user_service: AssetService<User>,
}

impl AppState {
    /// State backed by in-memory repositories
    pub fn new(config: AppConfig, build: BuildInfo) -> Self {
        Self {
            config,
            build,
            player_service: AssetService::new(in_memory::<Player>()),
            room_service: AssetService::new(in_memory::<Room>()),
            item_service: AssetService::new(in_memory::<Item>()),
            link_service: AssetService::new(in_memory::<Link>()),
            user_service: AssetService::new(in_memory::<User>()),
        }
    }
}

fn in_memory<A>() -> Arc<dyn AssetRepositoryPort<A>>
where
    A: crate::infrastructure::persistence::MemoryRecord,
{
    Arc::new(MemoryRepository::<A>::new())
}

/// Lookup of the service that owns a resource
pub trait ServiceFor<A: Resource> {
    fn service(&self) -> &AssetService<A>;
}

impl ServiceFor<Player> for AppState {
    fn service(&self) -> &AssetService<Player> {
        &self.player_service
    }
}

impl ServiceFor<Room> for AppState {
    fn service(&self) -> &AssetService<Room> {
        &self.room_service
    }
}

impl ServiceFor<Item> for AppState {
    fn service(&self) -> &AssetService<Item> {
        &self.item_service
    }
}

impl ServiceFor<Link> for AppState {
    fn service(&self) -> &AssetService<Link> {
        &self.link_service
    }
}

impl ServiceFor<User> for AppState {
    fn service(&self) -> &AssetService<User> {
        &self.user_service
    }
}
