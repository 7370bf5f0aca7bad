use axum::{
    Json, Router,
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, patch},
};
use serde::Deserialize;
use serde_json::json;
use types::{RosterPage, UserId, UserRecord, UserStatus};

use crate::RosterStore;

pub fn users_router(store: RosterStore) -> Router {
    Router::new()
        .route("/api/v1/users", get(list_users))
        .route("/api/v1/users/{id}", patch(update_user).delete(delete_user))
        .with_state(store)
}

#[derive(Debug)]
pub enum ApiError {
    NotFound(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ApiError::NotFound(message) => (StatusCode::NOT_FOUND, message),
        };

        (status, Json(json!({ "error": message }))).into_response()
    }
}

#[derive(Deserialize)]
struct ListQuery {
    #[serde(default)]
    search: String,
    #[serde(default = "first_page")]
    page: usize,
}

fn first_page() -> usize {
    1
}

async fn list_users(
    State(store): State<RosterStore>,
    Query(query): Query<ListQuery>,
) -> Json<RosterPage> {
    Json(store.page(&query.search, query.page).await)
}

/// `{"status": ...}` sets the status; `{}` toggles it.
#[derive(Deserialize)]
struct UserPatch {
    status: Option<UserStatus>,
}

async fn update_user(
    State(store): State<RosterStore>,
    Path(id): Path<String>,
    Json(patch): Json<UserPatch>,
) -> Result<Json<UserRecord>, ApiError> {
    let id = UserId::new(id);
    let updated = match patch.status {
        Some(status) => store.set_status(&id, status).await,
        None => store.toggle_status(&id).await,
    };

    updated
        .map(Json)
        .ok_or_else(|| ApiError::NotFound(format!("user '{id}' not found")))
}

async fn delete_user(State(store): State<RosterStore>, Path(id): Path<String>) -> StatusCode {
    store.delete(&UserId::new(id)).await;
    StatusCode::NO_CONTENT
}
