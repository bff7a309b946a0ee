//! HTTP request handlers for the compliance engine API.
//!
//! This module contains the handler functions for all API endpoints.

use std::time::Instant;

use axum::{
    Json, Router,
    extract::{State, rejection::JsonRejection},
    http::{StatusCode, header},
    response::IntoResponse,
    routing::post,
};
use chrono::Utc;
use tracing::{info, warn};
use uuid::Uuid;

use crate::classification::classify_fleet;
use crate::models::Employee;

use super::request::ClassificationRequest;
use super::response::{ApiError, ApiErrorResponse};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/classify", post(classify_handler))
        .with_state(state)
}

/// Handler for POST /classify endpoint.
///
/// Accepts a fleet classification request and returns the full report:
/// per-employee document records, health scores, buckets, and the fleet
/// summary.
async fn classify_handler(
    State(state): State<AppState>,
    payload: Result<Json<ClassificationRequest>, JsonRejection>,
) -> impl IntoResponse {
    // Generate correlation ID for request tracking
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing classification request");

    // Handle JSON parsing errors
    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => {
            let error = match rejection {
                JsonRejection::JsonDataError(err) => {
                    // Get the body text which contains the detailed error from serde
                    let body_text = err.body_text();
                    warn!(
                        correlation_id = %correlation_id,
                        error = %body_text,
                        "JSON data error"
                    );
                    // Check if it's a missing field error
                    if body_text.contains("missing field") {
                        ApiError::new("VALIDATION_ERROR", body_text)
                    } else {
                        ApiError::malformed_json(body_text)
                    }
                }
                JsonRejection::JsonSyntaxError(err) => {
                    warn!(
                        correlation_id = %correlation_id,
                        error = %err,
                        "JSON syntax error"
                    );
                    ApiError::malformed_json(format!("Invalid JSON syntax: {}", err))
                }
                JsonRejection::MissingJsonContentType(_) => ApiError::new(
                    "MISSING_CONTENT_TYPE",
                    "Content-Type must be application/json",
                ),
                _ => ApiError::malformed_json("Failed to parse request body"),
            };
            return (
                StatusCode::BAD_REQUEST,
                [(header::CONTENT_TYPE, "application/json")],
                Json(error),
            )
                .into_response();
        }
    };

    let config = state.config();

    // Validate a request-supplied threshold override before using it
    let thresholds = match request.thresholds {
        Some(overridden) => {
            if let Err(err) = overridden.validate() {
                warn!(
                    correlation_id = %correlation_id,
                    error = %err,
                    "Rejected threshold override"
                );
                let api_error: ApiErrorResponse = err.into();
                return (
                    api_error.status,
                    [(header::CONTENT_TYPE, "application/json")],
                    Json(api_error.error),
                )
                    .into_response();
            }
            overridden
        }
        None => *config.thresholds(),
    };

    // The only wall-clock read in the engine: requests without an explicit
    // reference instant are classified as of now.
    let as_of = request.as_of.unwrap_or_else(|| Utc::now().naive_utc());

    // Convert request types to domain types
    let employees: Vec<Employee> = request.employees.into_iter().map(Into::into).collect();

    // Perform the classification
    let start_time = Instant::now();
    let report = classify_fleet(
        &employees,
        as_of,
        &thresholds,
        config.points(),
        config.document_slots_per_employee(),
    );
    let duration = start_time.elapsed();

    info!(
        correlation_id = %correlation_id,
        employee_count = report.summary.total_employees,
        employees_with_expired = report.summary.employees_with_expired,
        compliance_rate = report.summary.compliance_rate,
        duration_us = duration.as_micros(),
        "Classification completed successfully"
    );

    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "application/json")],
        Json(report),
    )
        .into_response()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ConfigLoader;

    fn test_state() -> AppState {
        let config = ConfigLoader::load("./config/compliance").expect("Failed to load config");
        AppState::new(config)
    }

    #[test]
    fn test_router_creation() {
        // Verify the router builds with a loaded configuration
        let _router = create_router(test_state());
    }
}
