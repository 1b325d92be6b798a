// Core engine exports
pub mod availability;
pub mod distance;
pub mod filters;
pub mod geofence;
pub mod matcher;
pub mod onboarding;
pub mod profile;
pub mod ranking;

pub use availability::{request_go_offline, request_go_online, AvailabilityState, GateRejection, Transition};
pub use distance::{distance_km, haversine_distance};
pub use filters::{is_visible, visible_providers};
pub use geofence::{is_within_bounding_box, ZoneTable, ZoneValidation};
pub use matcher::{MatchResult, Matcher};
pub use onboarding::{
    complete_onboarding, locate_address, locate_coordinate, Landmark, OnboardingDraft,
    OnboardingError, OnboardingPolicy, OnboardingRules,
};
pub use profile::{ProfileError, ProfileUpdate};
pub use ranking::{rank, rank_detailed, AreaResolution, MatchingConfig, Ranking, DEFAULT_RADIUS_KM};
