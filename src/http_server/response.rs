//! Error bodies and the blocking-store bridge shared by all routes

use std::sync::Arc;

use axum::{extract::rejection::JsonRejection, http::StatusCode, Json};
use serde::Serialize;

use crate::chirps::ChirpError;
use crate::observability::{log_event_with_fields, Event};
use crate::store::{RecordStore, StoreError, StoreResult};

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub code: u16,
}

/// Error half of every handler's return type
pub type ApiError = (StatusCode, Json<ErrorResponse>);

pub fn api_error(status: StatusCode, message: impl Into<String>) -> ApiError {
    (
        status,
        Json(ErrorResponse {
            error: message.into(),
            code: status.as_u16(),
        }),
    )
}

/// Map a store error; server-side details stay in the log
pub fn store_error(err: StoreError) -> ApiError {
    let status =
        StatusCode::from_u16(err.status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
    if err.is_client_error() {
        api_error(status, err.to_string())
    } else {
        api_error(status, "Internal server error")
    }
}

pub fn chirp_error(err: ChirpError) -> ApiError {
    log_event_with_fields(Event::ChirpRejected, &[("reason", err.to_string().as_str())]);
    let status = StatusCode::from_u16(err.status_code()).unwrap_or(StatusCode::BAD_REQUEST);
    api_error(status, err.to_string())
}

/// Undecodable or incomplete JSON body
pub fn bad_request(rejection: JsonRejection) -> ApiError {
    log_event_with_fields(Event::BadRequest, &[("reason", rejection.body_text().as_str())]);
    api_error(StatusCode::BAD_REQUEST, rejection.body_text())
}

/// Run a synchronous store call on the blocking pool
pub async fn with_store<T, F>(store: &Arc<RecordStore>, f: F) -> Result<T, ApiError>
where
    F: FnOnce(&RecordStore) -> StoreResult<T> + Send + 'static,
    T: Send + 'static,
{
    let store = Arc::clone(store);
    match tokio::task::spawn_blocking(move || f(&store)).await {
        Ok(result) => result.map_err(store_error),
        Err(e) => {
            log_event_with_fields(Event::StorageFailure, &[("error", e.to_string().as_str())]);
            Err(api_error(
                StatusCode::INTERNAL_SERVER_ERROR,
                "Internal server error",
            ))
        }
    }
}
