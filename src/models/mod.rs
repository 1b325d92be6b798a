// Model exports
pub mod domain;
pub mod requests;
pub mod responses;

pub use domain::{
    Availability, BoundingBox, Coordinate, Provider, ProviderLocation, RankedProvider, Review,
    ServiceCategory, ServiceZone, Verifications,
};
pub use requests::{CoordinateRequest, DistanceRequest, OnboardProviderRequest, SearchRequest};
pub use responses::{
    DistanceResponse, ErrorResponse, HealthResponse, SearchResponse, TransitionResponse,
};
