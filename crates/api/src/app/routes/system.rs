use axum::{http::StatusCode, response::IntoResponse, Json};

/// Greeting endpoint; answers regardless of store state.
pub async fn hello_world() -> axum::response::Response {
    (
        StatusCode::OK,
        Json(serde_json::json!({ "message": "hello world" })),
    )
        .into_response()
}
