//! Chirp HTTP Routes
//!
//! Create, list and fetch chirps, plus a dry-run validation endpoint.

use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};

use super::response::{api_error, bad_request, chirp_error, with_store, ApiError};
use super::state::AppState;
use crate::chirps::prepare_body;
use crate::observability::{log_event_with_fields, Event};
use crate::store::{Chirp, RecordId};

/// Chirp routes, mounted under `/api`
pub fn chirp_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/chirps", post(create_chirp_handler).get(list_chirps_handler))
        .route("/chirps/:chirp_id", get(get_chirp_handler))
        .route("/validate_chirp", post(validate_chirp_handler))
}

// ==================
// Request/Response Types
// ==================

#[derive(Debug, Clone, Deserialize)]
pub struct CreateChirpRequest {
    pub body: String,
}

#[derive(Debug, Serialize)]
pub struct ValidateChirpResponse {
    pub cleaned_body: String,
}

// ==================
// Handlers
// ==================

async fn create_chirp_handler(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<CreateChirpRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<Chirp>), ApiError> {
    let Json(request) = payload.map_err(bad_request)?;
    let cleaned = prepare_body(&request.body, &state.blocked_words).map_err(chirp_error)?;

    let chirp = with_store(&state.store, move |store| store.create_chirp(&cleaned)).await?;

    state.metrics.increment_chirps_created();
    log_event_with_fields(
        Event::ChirpCreated,
        &[("id", chirp.id.to_string().as_str())],
    );
    Ok((StatusCode::CREATED, Json(chirp)))
}

async fn list_chirps_handler(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<Chirp>>, ApiError> {
    let chirps = with_store(&state.store, |store| store.list_chirps()).await?;
    Ok(Json(chirps))
}

async fn get_chirp_handler(
    State(state): State<Arc<AppState>>,
    Path(chirp_id): Path<String>,
) -> Result<Json<Chirp>, ApiError> {
    let id: RecordId = chirp_id.parse().map_err(|_| {
        api_error(
            StatusCode::BAD_REQUEST,
            format!("Invalid chirp id: {}", chirp_id),
        )
    })?;

    let chirp = with_store(&state.store, move |store| store.get_chirp(id)).await?;
    Ok(Json(chirp))
}

/// Apply the length check and filter without storing anything
async fn validate_chirp_handler(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<CreateChirpRequest>, JsonRejection>,
) -> Result<Json<ValidateChirpResponse>, ApiError> {
    let Json(request) = payload.map_err(bad_request)?;
    let cleaned_body = prepare_body(&request.body, &state.blocked_words).map_err(chirp_error)?;
    Ok(Json(ValidateChirpResponse { cleaned_body }))
}
