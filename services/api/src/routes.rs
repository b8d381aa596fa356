//! API service routes

use axum::{
    Json, Router,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    routing::get,
};
use common::{NewUser, UpdateUser};
use serde_json::json;
use tracing::info;

use crate::{
    error::{ApiError, ApiResult},
    state::AppState,
};

/// Create the router for the API service
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health_check))
        .route("/users", get(get_users).post(create_user).put(update_user))
        .route("/users/:id", get(get_user))
        .with_state(state)
}

/// Health check endpoint
pub async fn health_check() -> impl IntoResponse {
    Json(json!({
        "status": "ok",
        "service": "users-api"
    }))
}

/// Get all users
pub async fn get_users(State(state): State<AppState>) -> impl IntoResponse {
    let mut users = state.user_registry.find_all().await;
    users.sort_by_key(|user| user.id);

    Json(users)
}

/// Create a new user
pub async fn create_user(
    State(state): State<AppState>,
    Json(payload): Json<NewUser>,
) -> ApiResult<impl IntoResponse> {
    info!("Create user request");
    let user = state.user_registry.create(payload).await?;

    Ok((StatusCode::CREATED, Json(user)))
}

/// Update an existing user
pub async fn update_user(
    State(state): State<AppState>,
    Json(payload): Json<UpdateUser>,
) -> ApiResult<impl IntoResponse> {
    info!("Update user request: {:?}", payload.id);
    let user = state.user_registry.update(payload).await?;

    Ok(Json(user))
}

/// Get a user by ID
pub async fn get_user(
    State(state): State<AppState>,
    Path(id): Path<u64>,
) -> ApiResult<impl IntoResponse> {
    let user = state
        .user_registry
        .find_by_id(id)
        .await
        .ok_or_else(|| ApiError::NotFound(format!("User with id = {} not found", id)))?;

    Ok(Json(user))
}
