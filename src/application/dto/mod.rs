//! Data Transfer Objects - For API boundaries
//!
//! DTOs live in the application layer so infrastructure (HTTP) can
//! serialize/deserialize without pulling serde into the domain model.

pub mod egress;
pub mod filter;
pub mod ingress;

pub use egress::*;
pub use filter::*;
pub use ingress::*;
