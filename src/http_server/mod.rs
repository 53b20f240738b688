//! # Chirpy HTTP Server Module
//!
//! Thin axum layer over the record store. Handlers decode typed requests,
//! validate and filter chirp bodies, call the store on the blocking pool and
//! map store errors to status codes.
//!
//! # Endpoints
//!
//! - `GET /api/healthz`
//! - `POST /api/chirps`, `GET /api/chirps`, `GET /api/chirps/:chirp_id`
//! - `POST /api/validate_chirp`
//! - `POST /api/users`, `POST /api/login`
//! - `GET /admin/metrics`, `POST /api/reset`
//! - `/app/*` static files

pub mod admin_routes;
pub mod chirp_routes;
pub mod config;
pub mod response;
pub mod server;
pub mod state;
pub mod user_routes;

pub use config::HttpServerConfig;
pub use server::{build_router, HttpServer};
pub use state::AppState;
