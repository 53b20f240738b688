//! Health, metrics and static-file routes
//!
//! Every request under `/app` bumps the file-server hit counter, which
//! `/admin/metrics` reports and `/api/reset` zeroes.

use std::path::Path;
use std::sync::Arc;

use axum::{
    extract::{Request, State},
    http::{header, StatusCode},
    middleware::{self, Next},
    response::{Html, IntoResponse, Response},
    routing::{get, post},
    Router,
};
use tower_http::services::ServeDir;

use super::state::AppState;
use crate::observability::{log_event_with_fields, Event, MetricsSnapshot};

/// `/healthz`, mounted under `/api`
pub fn health_routes() -> Router<Arc<AppState>> {
    Router::new().route("/healthz", get(health_handler))
}

/// `/reset`, mounted under `/api`
pub fn reset_routes() -> Router<Arc<AppState>> {
    Router::new().route("/reset", post(reset_handler))
}

/// `/metrics`, mounted under `/admin`
pub fn metrics_routes() -> Router<Arc<AppState>> {
    Router::new().route("/metrics", get(metrics_handler))
}

/// Static files from `root` under `/app`, counted
pub fn file_routes(root: &Path, state: Arc<AppState>) -> Router<Arc<AppState>> {
    Router::new()
        .nest_service("/app", ServeDir::new(root))
        .layer(middleware::from_fn_with_state(state, count_fileserver_hits))
}

async fn count_fileserver_hits(
    State(state): State<Arc<AppState>>,
    request: Request,
    next: Next,
) -> Response {
    state.metrics.increment_fileserver_hits();
    next.run(request).await
}

async fn health_handler() -> impl IntoResponse {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/plain; charset=utf-8")],
        "OK",
    )
}

async fn metrics_handler(State(state): State<Arc<AppState>>) -> Html<String> {
    Html(render_metrics_page(&state.metrics.snapshot()))
}

async fn reset_handler(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    state.metrics.reset_fileserver_hits();
    log_event_with_fields(Event::MetricsReset, &[]);
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/plain; charset=utf-8")],
        "Hits reset to 0",
    )
}

fn render_metrics_page(snap: &MetricsSnapshot) -> String {
    format!(
        "<html>\n  <body>\n    <h1>Welcome, Chirpy Admin</h1>\n    <p>Chirpy has been visited {} times!</p>\n    <ul>\n      <li>Chirps created: {}</li>\n      <li>Users created: {}</li>\n      <li>Logins rejected: {}</li>\n    </ul>\n  </body>\n</html>\n",
        snap.fileserver_hits, snap.chirps_created, snap.users_created, snap.logins_rejected
    )
}
