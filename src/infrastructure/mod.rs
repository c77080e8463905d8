//! Infrastructure layer - External adapters and implementations
//!
//! This layer contains:
//! - Persistence: in-memory asset repositories
//! - HTTP: REST API routes and error responses
//! - Config: Application configuration and build metadata
//! - State: Shared application state

pub mod config;
pub mod http;
pub mod persistence;
pub mod state;
