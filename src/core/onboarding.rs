use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::core::geofence::ZoneTable;
use crate::models::{
    Availability, Coordinate, Provider, ProviderLocation, ServiceCategory, Verifications,
};

/// Errors raised while turning an onboarding draft into a provider
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum OnboardingError {
    #[error("Service currently available in {zones} only.")]
    OutsideServiceArea { zones: String },

    #[error("Please enter an address or landmark.")]
    EmptyAddress,

    #[error("Could not find this location in our service area. Please try a landmark in {zones}.")]
    UnknownLandmark { zones: String },

    #[error("Please enter your full name.")]
    InvalidName,

    #[error("Please enter a 10-digit phone number.")]
    InvalidPhone,

    #[error("Please add your years of experience.")]
    MissingExperience,

    #[error("Please set your service location.")]
    MissingLocation,

    #[error("Please set your price per hour.")]
    MissingPrice,
}

impl OnboardingError {
    pub fn code(&self) -> &'static str {
        match self {
            OnboardingError::OutsideServiceArea { .. } => "outside_service_area",
            OnboardingError::EmptyAddress => "empty_address",
            OnboardingError::UnknownLandmark { .. } => "unknown_landmark",
            OnboardingError::InvalidName => "invalid_name",
            OnboardingError::InvalidPhone => "invalid_phone",
            OnboardingError::MissingExperience => "missing_experience",
            OnboardingError::MissingLocation => "missing_location",
            OnboardingError::MissingPrice => "missing_price",
        }
    }
}

/// Decides the initial administrative state of newly onboarded providers
pub trait OnboardingPolicy: Send + Sync {
    /// Does a newly onboarded provider start approved?
    fn starts_approved(&self, draft: &OnboardingDraft) -> bool;

    /// Must the phone number go through an OTP step before it counts as verified?
    fn requires_phone_otp(&self) -> bool {
        false
    }
}

/// Policy driven by the `[onboarding]` settings section
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct OnboardingRules {
    #[serde(default = "default_auto_approve")]
    pub auto_approve: bool,
    #[serde(default)]
    pub require_phone_otp: bool,
}

fn default_auto_approve() -> bool { true }

impl Default for OnboardingRules {
    fn default() -> Self {
        Self {
            auto_approve: default_auto_approve(),
            require_phone_otp: false,
        }
    }
}

impl OnboardingPolicy for OnboardingRules {
    fn starts_approved(&self, _draft: &OnboardingDraft) -> bool {
        self.auto_approve
    }

    fn requires_phone_otp(&self) -> bool {
        self.require_phone_otp
    }
}

/// Known place used in place of geocoding a free-text address
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Landmark {
    pub keyword: String,
    pub latitude: f64,
    pub longitude: f64,
}

impl Landmark {
    pub fn new(keyword: impl Into<String>, latitude: f64, longitude: f64) -> Self {
        Self {
            keyword: keyword.into(),
            latitude,
            longitude,
        }
    }
}

/// Data collected across the onboarding steps
#[derive(Debug, Clone, PartialEq)]
pub struct OnboardingDraft {
    pub name: String,
    pub phone: String,
    pub service: ServiceCategory,
    pub location: Option<ProviderLocation>,
    pub price_per_hour: u32,
    pub experience_years: u32,
}

/// Tag a device coordinate with its service zone
pub fn locate_coordinate(
    coord: &Coordinate,
    zones: &ZoneTable,
) -> Result<ProviderLocation, OnboardingError> {
    zones.assign(coord).ok_or_else(|| OnboardingError::OutsideServiceArea {
        zones: zones.describe(),
    })
}

/// Resolve a typed address to a zoned location through the landmark table
///
/// The first landmark whose keyword appears in the address (case-insensitive) wins.
pub fn locate_address(
    address: &str,
    landmarks: &[Landmark],
    zones: &ZoneTable,
) -> Result<ProviderLocation, OnboardingError> {
    let address = address.trim();
    if address.is_empty() {
        return Err(OnboardingError::EmptyAddress);
    }

    let lowered = address.to_lowercase();
    let landmark = landmarks
        .iter()
        .find(|l| lowered.contains(&l.keyword.to_lowercase()))
        .ok_or_else(|| OnboardingError::UnknownLandmark {
            zones: zones.describe(),
        })?;

    locate_coordinate(&Coordinate::new(landmark.latitude, landmark.longitude), zones)
}

fn normalize_phone(phone: &str) -> Option<String> {
    let digits: String = phone.chars().filter(|c| c.is_ascii_digit()).collect();
    (digits.len() == 10).then_some(digits)
}

/// Turn a finished draft into a new, offline provider record
pub fn complete_onboarding(
    draft: OnboardingDraft,
    policy: &dyn OnboardingPolicy,
) -> Result<Provider, OnboardingError> {
    let name = draft.name.trim();
    if name.chars().count() <= 2 {
        return Err(OnboardingError::InvalidName);
    }
    let phone = normalize_phone(&draft.phone).ok_or(OnboardingError::InvalidPhone)?;
    if draft.experience_years == 0 {
        return Err(OnboardingError::MissingExperience);
    }
    let location = draft.location.clone().ok_or(OnboardingError::MissingLocation)?;
    if draft.price_per_hour == 0 {
        return Err(OnboardingError::MissingPrice);
    }

    let is_approved = policy.starts_approved(&draft);

    Ok(Provider {
        id: format!("provider_{}", uuid::Uuid::new_v4()),
        name: name.to_string(),
        phone: Some(phone),
        profile_photo: String::new(),
        is_verified: false,
        is_approved,
        is_online: false,
        rating: 0.0,
        jobs_completed: 0,
        services: vec![draft.service],
        price_per_hour: Some(draft.price_per_hour),
        experience_years: Some(draft.experience_years),
        location: Some(location),
        availability: Availability::Today,
        work_gallery: Vec::new(),
        verifications: Verifications {
            phone: !policy.requires_phone_otp(),
            police: false,
        },
        reviews: Vec::new(),
        onboarded_at: Some(chrono::Utc::now()),
    })
}
