//! chirpy - a small chirp service backed by a single-file JSON record store

pub mod auth;
pub mod chirps;
pub mod cli;
pub mod http_server;
pub mod observability;
pub mod store;
