use axum::Router;

pub mod dogs;
pub mod system;

/// Router for the /api surface.
pub fn router() -> Router {
    Router::new().nest("/dogs", dogs::router())
}
