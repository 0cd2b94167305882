//! HTTP route handlers.

use axum::body::Bytes;
use axum::{
    Json, Router,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
};
use tower_http::trace::TraceLayer;
use tracing::{error, warn};

use crate::itinerary::{ItineraryError, TourItinerary};
use crate::routes_api::RouteProvider;

use super::dto::*;
use super::state::AppState;

/// Create the application router.
pub fn create_router<P: RouteProvider + 'static>(state: AppState<P>) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/travel/", post(build_tour::<P>))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Health check endpoint.
async fn health() -> &'static str {
    "ok"
}

/// Estimate a trip between two places.
async fn build_tour<P: RouteProvider + 'static>(
    State(state): State<AppState<P>>,
    body: Bytes,
) -> Result<Json<TourItinerary>, AppError> {
    // Parse JSON manually so we can log the body on failure
    let req: TourRequest = serde_json::from_slice(&body).map_err(|e| {
        warn!(error = %e, body = %String::from_utf8_lossy(&body), "invalid travel request");
        AppError::BadRequest {
            message: format!("Invalid JSON: {e}"),
        }
    })?;

    req.validate()
        .map_err(|message| AppError::BadRequest { message })?;

    let itinerary = state
        .builder
        .build(&req.place_a, &req.place_b, req.transportation_method)
        .await?;

    Ok(Json(itinerary))
}

/// Application error type.
#[derive(Debug)]
pub enum AppError {
    BadRequest { message: String },
    Internal { message: String },
}

impl From<ItineraryError> for AppError {
    fn from(e: ItineraryError) -> Self {
        AppError::Internal {
            message: e.to_string(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            AppError::BadRequest { message } => (StatusCode::BAD_REQUEST, message),
            AppError::Internal { message } => (StatusCode::INTERNAL_SERVER_ERROR, message),
        };

        if status.is_server_error() {
            error!(%status, %message, "request failed");
        } else {
            warn!(%status, %message, "request rejected");
        }

        let body = Json(ErrorResponse { detail: message });
        (status, body).into_response()
    }
}
