//! Domain entities - Persisted game assets

mod item;
mod link;
mod player;
mod room;
mod user;

pub use item::{Item, ItemChange};
pub use link::{Link, LinkChange};
pub use player::{Player, PlayerChange};
pub use room::{Room, RoomChange};
pub use user::{User, UserChange};

use chrono::{DateTime, Utc};

use crate::domain::value_objects::AssetId;

/// A persisted game asset.
///
/// Every asset is created from, and later replaced by, a fully-populated
/// change set; storage only supplies the identifier and the timestamps.
pub trait Asset: Clone + Send + Sync + 'static {
    /// Lowercase singular name, used in messages
    const KIND: &'static str;

    type Id: AssetId;
    type Change: Clone + Send + Sync + 'static;

    fn id(&self) -> Self::Id;

    fn create(id: Self::Id, change: Self::Change, now: DateTime<Utc>) -> Self;

    /// Replace every mutable field and bump `updated`.
    fn apply(&mut self, change: Self::Change, now: DateTime<Utc>);
}
