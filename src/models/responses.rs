use serde::{Deserialize, Serialize};

use crate::core::availability::AvailabilityState;
use crate::models::domain::RankedProvider;

/// Response for the search endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchResponse {
    #[serde(rename = "customerArea")]
    pub customer_area: String,
    pub providers: Vec<RankedProvider>,
    #[serde(rename = "totalVisible")]
    pub total_visible: usize,
    #[serde(rename = "usedFallback")]
    pub used_fallback: bool,
}

/// Response for the distance endpoint
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct DistanceResponse {
    #[serde(rename = "distanceKm")]
    pub distance_km: f64,
}

/// Response after an availability toggle
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TransitionResponse {
    #[serde(rename = "providerId")]
    pub provider_id: String,
    pub from: AvailabilityState,
    pub to: AvailabilityState,
    #[serde(rename = "isOnline")]
    pub is_online: bool,
}

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub providers: usize,
    pub timestamp: chrono::DateTime<chrono::Utc>,
}

/// Error response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
    #[serde(rename = "statusCode")]
    pub status_code: u16,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>, message: impl Into<String>, status_code: u16) -> Self {
        Self {
            error: error.into(),
            message: message.into(),
            status_code,
        }
    }
}
