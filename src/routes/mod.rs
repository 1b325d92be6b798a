// Route exports
pub mod providers;
pub mod search;

use actix_web::{web, HttpResponse};
use std::sync::Arc;

use crate::core::{onboarding::{Landmark, OnboardingRules}, Matcher};
use crate::models::{ErrorResponse, ProviderLocation};
use crate::services::{DirectoryError, ProviderDirectory};

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub directory: Arc<ProviderDirectory>,
    pub matcher: Matcher,
    /// Reference location for searches that carry no coordinate
    pub customer: ProviderLocation,
    pub landmarks: Arc<Vec<Landmark>>,
    pub onboarding: OnboardingRules,
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1")
            .configure(search::configure)
            .configure(providers::configure),
    );
}

pub(crate) fn validation_failed(errors: validator::ValidationErrors) -> HttpResponse {
    HttpResponse::BadRequest().json(ErrorResponse::new(
        "Validation failed",
        errors.to_string(),
        400,
    ))
}

pub(crate) fn directory_error_response(err: &DirectoryError) -> HttpResponse {
    match err {
        DirectoryError::NotFound(_) => {
            HttpResponse::NotFound().json(ErrorResponse::new("not_found", err.to_string(), 404))
        }
        DirectoryError::Duplicate(_) => {
            HttpResponse::Conflict().json(ErrorResponse::new("duplicate", err.to_string(), 409))
        }
        DirectoryError::Rejected(rejection) => HttpResponse::UnprocessableEntity().json(
            ErrorResponse::new(rejection.code(), rejection.to_string(), 422),
        ),
        DirectoryError::InvalidProfile(invalid) => HttpResponse::UnprocessableEntity().json(
            ErrorResponse::new(invalid.code(), invalid.to_string(), 422),
        ),
        DirectoryError::Io(_) | DirectoryError::Parse(_) => {
            tracing::error!("Directory failure: {}", err);
            HttpResponse::InternalServerError().json(ErrorResponse::new(
                "directory_error",
                err.to_string(),
                500,
            ))
        }
    }
}
