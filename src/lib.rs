//! Hyperlocal Match - provider matching engine for a local-services marketplace
//!
//! This library decides which service providers a customer sees and in what order:
//! zone validation, great-circle distance, visibility filtering, radius-bounded
//! ranking with a single-closest fallback, and the online/offline availability gate.

pub mod config;
pub mod core;
pub mod models;
pub mod routes;
pub mod services;

// Re-export commonly used types
pub use crate::core::{
    distance::{distance_km, haversine_distance},
    rank, request_go_offline, request_go_online, visible_providers, Matcher, MatchingConfig,
    ZoneTable,
};
pub use models::{Coordinate, Provider, ProviderLocation, RankedProvider, ServiceZone};
