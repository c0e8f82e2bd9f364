//! HTTP API application wiring (Axum router + service wiring).
//!
//! This folder is structured like:
//! - `services.rs`: store wiring behind `AppServices`
//! - `routes/`: HTTP routes + handlers (one file per area)
//! - `dto.rs`: request DTOs and JSON mapping helpers
//! - `errors.rs`: consistent error responses

use std::sync::Arc;

use axum::{routing::get, Extension, Router};

pub mod dto;
pub mod errors;
pub mod routes;
pub mod services;

/// Build the full HTTP router (public entrypoint used by `main.rs`).
pub fn build_app() -> Router {
    build_app_with(Arc::new(services::build_services()))
}

/// Build the router against explicit services (tests swap the store here).
pub fn build_app_with(services: Arc<services::AppServices>) -> Router {
    Router::new()
        .route("/hello-world", get(routes::system::hello_world))
        .nest("/api", routes::router())
        .layer(Extension(services))
}
