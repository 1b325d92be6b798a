use actix_web::{web, HttpResponse, Responder};
use validator::Validate;

use super::{validation_failed, AppState};
use crate::core::distance::haversine_distance;
use crate::models::{
    Coordinate, CoordinateRequest, DistanceRequest, DistanceResponse, ErrorResponse,
    HealthResponse, SearchRequest, SearchResponse,
};

/// Configure search and geometry routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/health", web::get().to(health_check))
        .route("/search", web::post().to(search))
        .route("/zones", web::get().to(list_zones))
        .route("/zones/validate", web::post().to(validate_zone))
        .route("/distance", web::post().to(distance));
}

/// Health check endpoint
async fn health_check(state: web::Data<AppState>) -> impl Responder {
    HttpResponse::Ok().json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        providers: state.directory.len().await,
        timestamp: chrono::Utc::now(),
    })
}

/// Search endpoint
///
/// POST /api/v1/search
///
/// Request body (both fields optional, but only together):
/// ```json
/// { "latitude": 18.4591, "longitude": 73.8512 }
/// ```
async fn search(state: web::Data<AppState>, req: web::Json<SearchRequest>) -> impl Responder {
    if let Err(errors) = req.validate() {
        tracing::info!("Validation failed for search request: {:?}", errors);
        return validation_failed(errors);
    }

    let customer = match req.coordinate() {
        Some(coord) => match state.matcher.zones().assign(&coord) {
            Some(location) => location,
            None => {
                tracing::info!(
                    "Search from {:.4},{:.4} is outside the service area",
                    coord.latitude,
                    coord.longitude
                );
                return HttpResponse::UnprocessableEntity().json(ErrorResponse::new(
                    "outside_service_area",
                    format!(
                        "Service currently available in {} only.",
                        state.matcher.zones().describe()
                    ),
                    422,
                ));
            }
        },
        None => state.customer.clone(),
    };

    let snapshot = state.directory.snapshot().await;
    let result = state.matcher.search(&snapshot, &customer);

    tracing::info!(
        "Returning {} providers for {} (from {} visible, fallback: {})",
        result.providers.len(),
        customer.area_name,
        result.total_visible,
        result.used_fallback
    );

    HttpResponse::Ok().json(SearchResponse {
        customer_area: customer.area_name,
        providers: result.providers,
        total_visible: result.total_visible,
        used_fallback: result.used_fallback,
    })
}

/// List configured service zones in declaration order
async fn list_zones(state: web::Data<AppState>) -> impl Responder {
    HttpResponse::Ok().json(state.matcher.zones().zones())
}

/// Zone membership check
///
/// POST /api/v1/zones/validate
async fn validate_zone(
    state: web::Data<AppState>,
    req: web::Json<CoordinateRequest>,
) -> impl Responder {
    let coord = Coordinate::from(req.into_inner());
    HttpResponse::Ok().json(state.matcher.zones().validate_zone(&coord))
}

/// Great-circle distance between two points
///
/// POST /api/v1/distance
async fn distance(req: web::Json<DistanceRequest>) -> impl Responder {
    if let Err(errors) = req.validate() {
        return validation_failed(errors);
    }

    let distance_km = haversine_distance(
        req.from_latitude,
        req.from_longitude,
        req.to_latitude,
        req.to_longitude,
    );

    HttpResponse::Ok().json(DistanceResponse { distance_km })
}
