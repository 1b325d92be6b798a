use actix_web::{web, HttpResponse, Responder};
use validator::Validate;

use super::{directory_error_response, validation_failed, AppState};
use crate::core::{
    onboarding::{complete_onboarding, locate_address, locate_coordinate, OnboardingDraft, OnboardingError},
    profile::ProfileUpdate,
};
use crate::models::{Coordinate, ErrorResponse, OnboardProviderRequest, TransitionResponse};

/// Configure provider management routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/providers", web::post().to(onboard_provider))
        .route("/providers/{id}", web::get().to(get_provider))
        .route("/providers/{id}/online", web::post().to(go_online))
        .route("/providers/{id}/offline", web::post().to(go_offline))
        .route("/providers/{id}/profile", web::put().to(update_profile));
}

fn onboarding_rejected(err: &OnboardingError) -> HttpResponse {
    HttpResponse::UnprocessableEntity().json(ErrorResponse::new(err.code(), err.to_string(), 422))
}

/// Onboard a provider
///
/// POST /api/v1/providers
///
/// Request body:
/// ```json
/// {
///   "name": "string",
///   "phone": "10 digits",
///   "service": "Plumber|Electrician|AC Repair|Carpenter|Painter",
///   "latitude": 18.4591, "longitude": 73.8512,
///   "landmark": "Katraj Dairy",
///   "pricePerHour": 450,
///   "experienceYears": 8
/// }
/// ```
/// A coordinate takes precedence over a landmark.
async fn onboard_provider(
    state: web::Data<AppState>,
    req: web::Json<OnboardProviderRequest>,
) -> impl Responder {
    if let Err(errors) = req.validate() {
        return validation_failed(errors);
    }

    let req = req.into_inner();
    let zones = state.matcher.zones();

    let location = match (req.latitude, req.longitude, req.landmark.as_deref()) {
        (Some(latitude), Some(longitude), _) => {
            locate_coordinate(&Coordinate::new(latitude, longitude), zones)
        }
        (_, _, Some(landmark)) => locate_address(landmark, &state.landmarks, zones),
        _ => Err(OnboardingError::MissingLocation),
    };

    let location = match location {
        Ok(location) => location,
        Err(e) => {
            tracing::info!("Onboarding location rejected: {}", e);
            return onboarding_rejected(&e);
        }
    };

    let draft = OnboardingDraft {
        name: req.name,
        phone: req.phone,
        service: req.service,
        location: Some(location),
        price_per_hour: req.price_per_hour,
        experience_years: req.experience_years,
    };

    let provider = match complete_onboarding(draft, &state.onboarding) {
        Ok(provider) => provider,
        Err(e) => {
            tracing::info!("Onboarding draft rejected: {}", e);
            return onboarding_rejected(&e);
        }
    };

    match state.directory.insert(provider.clone()).await {
        Ok(()) => HttpResponse::Created().json(provider),
        Err(e) => directory_error_response(&e),
    }
}

/// Fetch a provider record
async fn get_provider(state: web::Data<AppState>, path: web::Path<String>) -> impl Responder {
    match state.directory.get(&path).await {
        Ok(provider) => HttpResponse::Ok().json(provider),
        Err(e) => directory_error_response(&e),
    }
}

async fn toggle(state: &AppState, provider_id: &str, online: bool) -> HttpResponse {
    match state.directory.set_online(provider_id, online).await {
        Ok(transition) => HttpResponse::Ok().json(TransitionResponse {
            is_online: transition.to.is_online(),
            provider_id: transition.provider_id,
            from: transition.from,
            to: transition.to,
        }),
        Err(e) => directory_error_response(&e),
    }
}

/// Ask to go online
///
/// POST /api/v1/providers/{id}/online
///
/// Rejected with 422 and a `missing_price`, `missing_experience` or
/// `missing_location` error when the profile is incomplete.
async fn go_online(state: web::Data<AppState>, path: web::Path<String>) -> impl Responder {
    toggle(&state, &path, true).await
}

/// Go offline; always permitted
async fn go_offline(state: web::Data<AppState>, path: web::Path<String>) -> impl Responder {
    toggle(&state, &path, false).await
}

/// Update price and experience
///
/// PUT /api/v1/providers/{id}/profile
async fn update_profile(
    state: web::Data<AppState>,
    path: web::Path<String>,
    req: web::Json<ProfileUpdate>,
) -> impl Responder {
    match state.directory.update_profile(&path, req.into_inner()).await {
        Ok(provider) => HttpResponse::Ok().json(provider),
        Err(e) => directory_error_response(&e),
    }
}
