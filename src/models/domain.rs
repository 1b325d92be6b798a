use serde::{Deserialize, Serialize};
use std::fmt;

/// A point on the earth's surface in decimal degrees
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    pub latitude: f64,
    pub longitude: f64,
}

impl Coordinate {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self { latitude, longitude }
    }
}

/// Provider (or customer) location, tagged with the zone it was assigned to
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProviderLocation {
    pub latitude: f64,
    pub longitude: f64,
    #[serde(rename = "areaName")]
    pub area_name: String,
}

impl ProviderLocation {
    pub fn new(latitude: f64, longitude: f64, area_name: impl Into<String>) -> Self {
        Self {
            latitude,
            longitude,
            area_name: area_name.into(),
        }
    }

    pub fn coordinate(&self) -> Coordinate {
        Coordinate::new(self.latitude, self.longitude)
    }
}

/// Kinds of work a provider can be booked for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ServiceCategory {
    Plumber,
    Electrician,
    #[serde(rename = "AC Repair")]
    AcRepair,
    Carpenter,
    Painter,
}

impl fmt::Display for ServiceCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            ServiceCategory::Plumber => "Plumber",
            ServiceCategory::Electrician => "Electrician",
            ServiceCategory::AcRepair => "AC Repair",
            ServiceCategory::Carpenter => "Carpenter",
            ServiceCategory::Painter => "Painter",
        };
        f.write_str(label)
    }
}

/// Earliest slot a provider advertises
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Availability {
    #[default]
    Today,
    Tomorrow,
    Later,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Verifications {
    #[serde(default)]
    pub phone: bool,
    #[serde(default)]
    pub police: bool,
}

/// Customer review of a completed job
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Review {
    pub id: String,
    #[serde(rename = "authorName")]
    pub author_name: String,
    #[serde(rename = "authorImage", default)]
    pub author_image: String,
    pub rating: u8,
    #[serde(default)]
    pub comment: String,
    pub date: String,
}

/// Service provider record as held by the directory
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Provider {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(rename = "profilePhoto", default)]
    pub profile_photo: String,
    /// Manual trust flag, independent of operational gating
    #[serde(rename = "isVerified", default)]
    pub is_verified: bool,
    /// Administrative gate
    #[serde(rename = "isApproved", default)]
    pub is_approved: bool,
    /// Operational availability, controlled by the provider
    #[serde(rename = "isOnline", default)]
    pub is_online: bool,
    #[serde(default)]
    pub rating: f64,
    #[serde(rename = "jobsCompleted", default)]
    pub jobs_completed: u32,
    #[serde(default)]
    pub services: Vec<ServiceCategory>,
    #[serde(rename = "pricePerHour", default)]
    pub price_per_hour: Option<u32>,
    #[serde(rename = "experienceYears", default)]
    pub experience_years: Option<u32>,
    #[serde(default)]
    pub location: Option<ProviderLocation>,
    #[serde(default)]
    pub availability: Availability,
    #[serde(rename = "workGallery", default)]
    pub work_gallery: Vec<String>,
    #[serde(default)]
    pub verifications: Verifications,
    /// Most recent first
    #[serde(default)]
    pub reviews: Vec<Review>,
    #[serde(rename = "onboardedAt", default)]
    pub onboarded_at: Option<chrono::DateTime<chrono::Utc>>,
}

impl Provider {
    /// Hourly price, treating an unset price as zero
    pub fn price(&self) -> u32 {
        self.price_per_hour.unwrap_or(0)
    }

    /// Years of experience, treating an unset value as zero
    pub fn experience(&self) -> u32 {
        self.experience_years.unwrap_or(0)
    }
}

/// Provider as seen by a searching customer
///
/// Produced fresh on every search and never stored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankedProvider {
    #[serde(flatten)]
    pub provider: Provider,
    #[serde(rename = "distanceKm")]
    pub distance_km: f64,
    #[serde(rename = "isFar")]
    pub is_far: bool,
}

/// Geospatial bounding box, inclusive on all four edges
///
/// Serialized as `[minLat, minLng, maxLat, maxLng]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(from = "[f64; 4]", into = "[f64; 4]")]
pub struct BoundingBox {
    pub min_lat: f64,
    pub max_lat: f64,
    pub min_lon: f64,
    pub max_lon: f64,
}

impl From<[f64; 4]> for BoundingBox {
    fn from([min_lat, min_lon, max_lat, max_lon]: [f64; 4]) -> Self {
        Self {
            min_lat,
            max_lat,
            min_lon,
            max_lon,
        }
    }
}

impl From<BoundingBox> for [f64; 4] {
    fn from(bbox: BoundingBox) -> Self {
        [bbox.min_lat, bbox.min_lon, bbox.max_lat, bbox.max_lon]
    }
}

/// Named rectangular service zone
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServiceZone {
    pub name: String,
    pub bounds: BoundingBox,
}

impl ServiceZone {
    pub fn new(name: impl Into<String>, bounds: [f64; 4]) -> Self {
        Self {
            name: name.into(),
            bounds: bounds.into(),
        }
    }
}
