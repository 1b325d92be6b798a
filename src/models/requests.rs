use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

use crate::models::domain::{Coordinate, ServiceCategory};

/// Request to search for providers
///
/// Without a coordinate the configured reference location is used.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
#[validate(schema(function = "validate_search_coordinate"))]
pub struct SearchRequest {
    #[validate(range(min = -90.0, max = 90.0))]
    #[serde(default)]
    pub latitude: Option<f64>,
    #[validate(range(min = -180.0, max = 180.0))]
    #[serde(default)]
    pub longitude: Option<f64>,
}

impl SearchRequest {
    pub fn coordinate(&self) -> Option<Coordinate> {
        match (self.latitude, self.longitude) {
            (Some(latitude), Some(longitude)) => Some(Coordinate::new(latitude, longitude)),
            _ => None,
        }
    }
}

fn validate_search_coordinate(req: &SearchRequest) -> Result<(), ValidationError> {
    if req.latitude.is_some() != req.longitude.is_some() {
        return Err(ValidationError::new("latitude_and_longitude_required_together"));
    }
    Ok(())
}

/// Bare coordinate, e.g. for zone validation
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct CoordinateRequest {
    pub latitude: f64,
    pub longitude: f64,
}

impl From<CoordinateRequest> for Coordinate {
    fn from(req: CoordinateRequest) -> Self {
        Coordinate::new(req.latitude, req.longitude)
    }
}

/// Request to measure the distance between two points
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Validate)]
pub struct DistanceRequest {
    #[validate(range(min = -90.0, max = 90.0))]
    #[serde(alias = "from_latitude", rename = "fromLatitude")]
    pub from_latitude: f64,
    #[validate(range(min = -180.0, max = 180.0))]
    #[serde(alias = "from_longitude", rename = "fromLongitude")]
    pub from_longitude: f64,
    #[validate(range(min = -90.0, max = 90.0))]
    #[serde(alias = "to_latitude", rename = "toLatitude")]
    pub to_latitude: f64,
    #[validate(range(min = -180.0, max = 180.0))]
    #[serde(alias = "to_longitude", rename = "toLongitude")]
    pub to_longitude: f64,
}

/// Request to onboard a new provider
///
/// The location comes either from a device coordinate or from a typed landmark.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[validate(schema(function = "validate_onboarding_location"))]
pub struct OnboardProviderRequest {
    #[validate(length(min = 1))]
    pub name: String,
    #[validate(length(min = 1))]
    pub phone: String,
    pub service: ServiceCategory,
    #[serde(default)]
    pub latitude: Option<f64>,
    #[serde(default)]
    pub longitude: Option<f64>,
    #[serde(default)]
    pub landmark: Option<String>,
    #[serde(alias = "price_per_hour", rename = "pricePerHour", default)]
    pub price_per_hour: u32,
    #[serde(alias = "experience_years", rename = "experienceYears", default)]
    pub experience_years: u32,
}

fn validate_onboarding_location(req: &OnboardProviderRequest) -> Result<(), ValidationError> {
    let has_coordinate = req.latitude.is_some() && req.longitude.is_some();
    if !has_coordinate && req.landmark.is_none() {
        return Err(ValidationError::new("location_required"));
    }
    if req.latitude.is_some() != req.longitude.is_some() {
        return Err(ValidationError::new("latitude_and_longitude_required_together"));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_search_without_coordinate_is_valid() {
        let req = SearchRequest::default();
        assert!(req.validate().is_ok());
        assert!(req.coordinate().is_none());
    }

    #[test]
    fn test_search_with_half_coordinate_is_invalid() {
        let req = SearchRequest {
            latitude: Some(18.46),
            longitude: None,
        };
        assert!(req.validate().is_err());
    }

    #[test]
    fn test_search_out_of_range_latitude() {
        let req = SearchRequest {
            latitude: Some(120.0),
            longitude: Some(73.85),
        };
        assert!(req.validate().is_err());
    }

    #[test]
    fn test_onboarding_requires_a_location_source() {
        let req: OnboardProviderRequest = serde_json::from_value(serde_json::json!({
            "name": "Rajesh Kumar",
            "phone": "9876543210",
            "service": "Plumber",
            "pricePerHour": 450,
            "experienceYears": 8,
        }))
        .unwrap();
        assert!(req.validate().is_err());

        let req = OnboardProviderRequest {
            landmark: Some("Katraj Dairy".to_string()),
            ..req
        };
        assert!(req.validate().is_ok());
    }
}
