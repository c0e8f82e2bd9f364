use std::sync::Arc;

use axum::{
    extract::{Extension, Path},
    http::StatusCode,
    response::IntoResponse,
    routing::get,
    Json, Router,
};

use dogpound_core::DogId;
use dogpound_dogs::{DogChanges, NewDog};

use crate::app::services::AppServices;
use crate::app::{dto, errors};

pub fn router() -> Router {
    Router::new()
        .route("/", get(list_dogs).post(create_dog))
        .route("/:id", get(get_dog).put(update_dog).delete(delete_dog))
}

pub async fn list_dogs(
    Extension(services): Extension<Arc<AppServices>>,
) -> axum::response::Response {
    match services.store().find_all().await {
        Ok(dogs) => {
            let items = dogs.iter().map(dto::dog_to_json).collect::<Vec<_>>();
            (StatusCode::OK, Json(items)).into_response()
        }
        Err(e) => errors::store_error_to_response(e),
    }
}

pub async fn get_dog(
    Extension(services): Extension<Arc<AppServices>>,
    Path(id): Path<String>,
) -> axum::response::Response {
    // An id that does not parse was never assigned by the store.
    let dog_id: DogId = match id.parse() {
        Ok(v) => v,
        Err(_) => return not_found(&id),
    };

    match services.store().find_by_id(dog_id).await {
        Ok(Some(dog)) => (StatusCode::OK, Json(dto::dog_to_json(&dog))).into_response(),
        Ok(None) => not_found(&id),
        Err(e) => errors::store_error_to_response(e),
    }
}

pub async fn create_dog(
    Extension(services): Extension<Arc<AppServices>>,
    Json(body): Json<dto::CreateDogRequest>,
) -> axum::response::Response {
    let missing = body.missing_fields();
    if !missing.is_empty() {
        return errors::json_error(
            StatusCode::UNPROCESSABLE_ENTITY,
            "validation_error",
            dto::required_fields_message(&missing),
        );
    }

    let new = match NewDog::new(
        body.name.unwrap_or_default(),
        body.weight.unwrap_or_default(),
        body.adopter_id,
    ) {
        Ok(v) => v,
        Err(e) => {
            return errors::json_error(
                StatusCode::UNPROCESSABLE_ENTITY,
                "validation_error",
                e.to_string(),
            )
        }
    };

    match services.store().create(new).await {
        Ok(dog) => (
            StatusCode::CREATED,
            Json(serde_json::json!({
                "message": "dog created",
                "data": dto::dog_to_json(&dog),
            })),
        )
            .into_response(),
        Err(e) => errors::store_error_to_response(e),
    }
}

pub async fn update_dog(
    Extension(services): Extension<Arc<AppServices>>,
    Path(id): Path<String>,
    Json(body): Json<dto::UpdateDogRequest>,
) -> axum::response::Response {
    // Body contract first: a request missing required fields is 400 even if
    // the id is unknown.
    let missing = body.missing_fields();
    if !missing.is_empty() {
        return errors::json_error(
            StatusCode::BAD_REQUEST,
            "validation_error",
            dto::required_fields_message(&missing),
        );
    }

    let dog_id: DogId = match id.parse() {
        Ok(v) => v,
        Err(_) => return not_found(&id),
    };

    let changes = match DogChanges::new(
        body.name.unwrap_or_default(),
        body.weight.unwrap_or_default(),
        body.adopter_id.flatten(),
    ) {
        Ok(v) => v,
        Err(e) => {
            return errors::json_error(StatusCode::BAD_REQUEST, "validation_error", e.to_string())
        }
    };

    match services.store().update(dog_id, changes).await {
        Ok(Some(dog)) => (StatusCode::OK, Json(dto::dog_to_json(&dog))).into_response(),
        Ok(None) => not_found(&id),
        Err(e) => errors::store_error_to_response(e),
    }
}

pub async fn delete_dog(
    Extension(services): Extension<Arc<AppServices>>,
    Path(id): Path<String>,
) -> axum::response::Response {
    let dog_id: DogId = match id.parse() {
        Ok(v) => v,
        Err(_) => return not_found(&id),
    };

    match services.store().delete(dog_id).await {
        Ok(Some(dog)) => (StatusCode::OK, Json(dto::dog_to_json(&dog))).into_response(),
        Ok(None) => not_found(&id),
        Err(e) => errors::store_error_to_response(e),
    }
}

fn not_found(id: &str) -> axum::response::Response {
    errors::json_error(StatusCode::NOT_FOUND, "not_found", format!("no dog with id {id}"))
}
