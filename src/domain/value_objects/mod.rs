//! Value objects - Immutable objects defined by their attributes

mod ids;
mod limits;
mod location;

pub use ids::*;
pub use limits::*;
pub use location::{LocationKind, LocationRef, LocationRefError};
