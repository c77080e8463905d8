//! Per-resource wiring of filters, ingress requests and egress views
//!
//! Every asset type is handled by the same generic code; this table is the
//! only place where the five resources differ.

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::application::dto::{
    FilterScope, ItemRequest, ItemScope, ItemView, LinkRequest, LinkScope, LinkView,
    PlayerRequest, PlayerScope, PlayerView, RoomRequest, RoomScope, RoomView, UserRequest,
    UserScope, UserView,
};
use crate::application::errors::ValidationError;
use crate::domain::entities::{Asset, Item, Link, Player, Room, User};

pub trait Resource: Asset {
    /// Collection path segment, e.g. `items`
    const COLLECTION: &'static str;

    type Scope: FilterScope;
    type Request: DeserializeOwned + Send + 'static;
    type View: Serialize + for<'a> From<&'a Self> + Send;

    fn translate(request: Self::Request) -> Result<Self::Change, ValidationError>;

    fn view(&self) -> Self::View {
        <Self::View as From<&Self>>::from(self)
    }
}

impl Resource for Player {
    const COLLECTION: &'static str = "players";

    type Scope = PlayerScope;
    type Request = PlayerRequest;
    type View = PlayerView;

    fn translate(request: PlayerRequest) -> Result<Self::Change, ValidationError> {
        request.into_change()
    }
}

impl Resource for Room {
    const COLLECTION: &'static str = "rooms";

    type Scope = RoomScope;
    type Request = RoomRequest;
    type View = RoomView;

    fn translate(request: RoomRequest) -> Result<Self::Change, ValidationError> {
        request.into_change()
    }
}

impl Resource for Item {
    const COLLECTION: &'static str = "items";

    type Scope = ItemScope;
    type Request = ItemRequest;
    type View = ItemView;

    fn translate(request: ItemRequest) -> Result<Self::Change, ValidationError> {
        request.into_change()
    }
}

impl Resource for Link {
    const COLLECTION: &'static str = "links";

    type Scope = LinkScope;
    type Request = LinkRequest;
    type View = LinkView;

    fn translate(request: LinkRequest) -> Result<Self::Change, ValidationError> {
        request.into_change()
    }
}

impl Resource for User {
    const COLLECTION: &'static str = "users";

    type Scope = UserScope;
    type Request = UserRequest;
    type View = UserView;

    fn translate(request: UserRequest) -> Result<Self::Change, ValidationError> {
        request.into_change()
    }
}
