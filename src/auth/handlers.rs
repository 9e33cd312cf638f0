use axum::{
    extract::{FromRef, Query, State},
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use tracing::instrument;

use crate::auth::dto::{
    ListQuery, LoginRequest, LoginResponse, MessageResponse, RegisterRequest, UserListResponse,
};
use crate::auth::jwt::JwtKeys;
use crate::auth::services;
use crate::error::ApiError;
use crate::state::AppState;

pub fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/auth/register", post(register))
        .route("/auth/login", post(login))
        .route("/auth/users", get(list_users))
}

#[instrument(skip(state, payload))]
pub async fn register(
    State(state): State<AppState>,
    Json(payload): Json<RegisterRequest>,
) -> Result<(StatusCode, Json<MessageResponse>), ApiError> {
    let body = services::register(&state.db, payload).await?;
    Ok((StatusCode::CREATED, Json(body)))
}

#[instrument(skip(state, payload))]
pub async fn login(
    State(state): State<AppState>,
    Json(payload): Json<LoginRequest>,
) -> Result<Json<LoginResponse>, ApiError> {
    let keys = JwtKeys::from_ref(&state);
    let body = services::login(&state.db, &keys, payload).await?;
    Ok(Json(body))
}

#[instrument(skip(state))]
pub async fn list_users(
    State(state): State<AppState>,
    Query(query): Query<ListQuery>,
) -> Result<Json<UserListResponse>, ApiError> {
    let body = services::list_users(&state.db, query).await?;
    Ok(Json(body))
}
