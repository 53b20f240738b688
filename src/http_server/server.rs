//! # HTTP Server
//!
//! Combines the route modules into one axum router over a shared
//! [`AppState`].

use std::io;
use std::net::SocketAddr;
use std::sync::Arc;

use axum::Router;
use tokio::net::TcpListener;
use tower::ServiceBuilder;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};

use super::admin_routes::{file_routes, health_routes, metrics_routes, reset_routes};
use super::chirp_routes::chirp_routes;
use super::config::HttpServerConfig;
use super::state::AppState;
use super::user_routes::user_routes;
use crate::observability::{log_event_with_fields, Event};
use crate::store::RecordStore;

/// HTTP server for chirpy
pub struct HttpServer {
    config: HttpServerConfig,
    state: Arc<AppState>,
    router: Router,
}

impl HttpServer {
    /// Build a server around an opened store
    pub fn new(config: HttpServerConfig, store: RecordStore) -> Self {
        let state = Arc::new(AppState::new(store, config.blocked_words.clone()));
        let router = build_router(&config, Arc::clone(&state));
        Self {
            config,
            state,
            router,
        }
    }

    /// Get the socket address
    pub fn socket_addr(&self) -> String {
        self.config.socket_addr()
    }

    /// Get the router (for testing)
    pub fn router(self) -> Router {
        self.router
    }

    /// Bind and serve until the process exits
    pub async fn start(self) -> io::Result<()> {
        let addr: SocketAddr = self.config.socket_addr().parse().map_err(|e| {
            io::Error::new(
                io::ErrorKind::InvalidInput,
                format!("Invalid socket address {}: {}", self.config.socket_addr(), e),
            )
        })?;

        let listener = TcpListener::bind(addr).await?;

        log_event_with_fields(
            Event::ServerStart,
            &[
                ("addr", addr.to_string().as_str()),
                ("database", self.state.store.path().display().to_string().as_str()),
            ],
        );

        axum::serve(listener, self.router).await
    }
}

/// Assemble all routes
///
/// - `/api/*` chirps, users, health, reset
/// - `/admin/metrics`
/// - `/app/*` static files
pub fn build_router(config: &HttpServerConfig, state: Arc<AppState>) -> Router {
    let api = Router::new()
        .merge(health_routes())
        .merge(chirp_routes())
        .merge(user_routes())
        .merge(reset_routes());

    Router::new()
        .nest("/api", api)
        .nest("/admin", metrics_routes())
        .merge(file_routes(&config.filesystem_root, Arc::clone(&state)))
        .layer(ServiceBuilder::new().layer(cors_layer(config)))
        .with_state(state)
}

fn cors_layer(config: &HttpServerConfig) -> CorsLayer {
    if config.cors_origins.is_empty() {
        CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any)
    } else {
        let origins: Vec<_> = config
            .cors_origins
            .iter()
            .filter_map(|s| s.parse().ok())
            .collect();

        CorsLayer::new()
            .allow_origin(AllowOrigin::list(origins))
            .allow_methods(Any)
            .allow_headers(Any)
    }
}
