//! Application services - Use case implementations

pub mod asset_service;

pub use asset_service::AssetService;
