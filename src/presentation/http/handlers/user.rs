//! User Handlers
//!
//! Receive -> decode -> invoke service -> encode. Not-found is reported as
//! 404 on GET, PUT, and DELETE alike.

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};

use crate::application::dto::request::{CreateUserRequest, UpdateUserRequest};
use crate::application::dto::response::UserResponse;
use crate::application::services::{UserError, UserService, UserServiceImpl};
use crate::domain::User;
use crate::infrastructure::repositories::PgUserRepository;
use crate::presentation::http::extractors::JsonBody;
use crate::shared::error::AppError;
use crate::startup::AppState;

fn user_service(state: &AppState) -> UserServiceImpl<PgUserRepository> {
    let repo = Arc::new(PgUserRepository::new(state.db.clone()));
    UserServiceImpl::new(repo)
}

fn parse_id(id: &str) -> Result<i64, AppError> {
    id.parse()
        .map_err(|_| AppError::BadRequest("Invalid user ID".into()))
}

fn map_user_error(e: UserError) -> AppError {
    match e {
        UserError::NotFound => AppError::NotFound("User not found".into()),
        UserError::Validation(msg) => AppError::Validation(msg),
        e => AppError::Internal(e.to_string()),
    }
}

/// Create a new user
pub async fn create_user(
    State(state): State<AppState>,
    JsonBody(body): JsonBody<CreateUserRequest>,
) -> Result<Json<UserResponse>, AppError> {
    let service = user_service(&state);

    let created = service
        .create_user(User::new(body.name, body.age))
        .await
        .map_err(map_user_error)?;

    Ok(Json(UserResponse::from(created)))
}

/// List all users
pub async fn get_users(
    State(state): State<AppState>,
) -> Result<Json<Vec<UserResponse>>, AppError> {
    let service = user_service(&state);

    let users = service.get_users().await.map_err(map_user_error)?;

    Ok(Json(users.into_iter().map(UserResponse::from).collect()))
}

/// Get user by id
pub async fn get_user(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<UserResponse>, AppError> {
    let id = parse_id(&id)?;
    let service = user_service(&state);

    let user = service.get_user(id).await.map_err(map_user_error)?;

    Ok(Json(UserResponse::from(user)))
}

/// Replace an existing user's name/age. The id comes from the path and
/// overrides anything in the body.
pub async fn update_user(
    State(state): State<AppState>,
    Path(id): Path<String>,
    JsonBody(body): JsonBody<UpdateUserRequest>,
) -> Result<Json<UserResponse>, AppError> {
    let id = parse_id(&id)?;
    let service = user_service(&state);

    let updated = service
        .update_user(User {
            id,
            name: body.name,
            age: body.age,
        })
        .await
        .map_err(map_user_error)?;

    Ok(Json(UserResponse::from(updated)))
}

/// Delete a user by id
pub async fn delete_user(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<StatusCode, AppError> {
    let id = parse_id(&id)?;
    let service = user_service(&state);

    service.delete_user(id).await.map_err(map_user_error)?;

    Ok(StatusCode::NO_CONTENT)
}
