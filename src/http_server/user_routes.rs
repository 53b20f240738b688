//! User HTTP Routes
//!
//! Registration and login.
//!
//! Login collapses "unknown email" and "wrong password" into one 401 so the
//! response does not reveal which accounts exist. The distinction is kept in
//! the log.

use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    routing::post,
    Json, Router,
};
use serde::Deserialize;

use super::response::{api_error, bad_request, with_store, ApiError};
use super::state::AppState;
use crate::observability::{log_event_with_fields, Event};
use crate::store::{StoreError, UserPublic};

/// Generic login denial
pub const LOGIN_DENIED: &str = "Invalid email or password";

/// User routes, mounted under `/api`
pub fn user_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/users", post(create_user_handler))
        .route("/login", post(login_handler))
}

/// Email/password body for both signup and login
#[derive(Debug, Clone, Deserialize)]
pub struct CredentialsRequest {
    pub email: String,
    pub password: String,
}

async fn create_user_handler(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<CredentialsRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<UserPublic>), ApiError> {
    let Json(request) = payload.map_err(bad_request)?;

    let user = with_store(&state.store, move |store| {
        store.create_user(&request.email, &request.password)
    })
    .await?;

    state.metrics.increment_users_created();
    log_event_with_fields(
        Event::UserCreated,
        &[("id", user.id.to_string().as_str())],
    );
    Ok((StatusCode::CREATED, Json(user)))
}

async fn login_handler(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<CredentialsRequest>, JsonRejection>,
) -> Result<Json<UserPublic>, ApiError> {
    let Json(request) = payload.map_err(bad_request)?;

    let result = with_store(&state.store, move |store| {
        match store.authenticate(&request.email, &request.password) {
            Err(StoreError::NotFound(_)) => Ok(Err("unknown_email")),
            Err(StoreError::InvalidCredentials) => Ok(Err("wrong_password")),
            other => other.map(Ok),
        }
    })
    .await?;

    match result {
        Ok(user) => {
            log_event_with_fields(
                Event::LoginSucceeded,
                &[("id", user.id.to_string().as_str())],
            );
            Ok(Json(user))
        }
        Err(reason) => {
            state.metrics.increment_logins_rejected();
            log_event_with_fields(Event::LoginRejected, &[("reason", reason)]);
            Err(api_error(StatusCode::UNAUTHORIZED, LOGIN_DENIED))
        }
    }
}
