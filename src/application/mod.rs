//! Application layer - Request translation, error classification and use cases
//!
//! This layer contains:
//! - DTOs: filter builder, ingress requests, egress views
//! - Errors: validation and storage failures and their classification
//! - Resource: the per-asset configuration table
//! - Ports: the storage contract
//! - Services: generic asset use cases

pub mod dto;
pub mod errors;
pub mod ports;
pub mod resource;
pub mod services;
