//! 用户处理器

use axum::{
    extract::State,
    http::StatusCode,
    response::Json,
};
use tracing::info;

use super::model::{CreateUserRequest, UpdateUserRequest, User};
use crate::app::AppState;
use crate::core::{format_object_id, ApiError, ListQuery, Pagination, UserId, ValidatedJson};

pub async fn create_user(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<CreateUserRequest>,
) -> Result<(StatusCode, Json<User>), ApiError> {
    let new_user = payload.into_new_user()?;
    let record = state.users.insert(new_user).await?;

    info!("Created user: {} ({})", record.name, record.id);

    Ok((StatusCode::CREATED, Json(record.into())))
}

pub async fn list_users(
    State(state): State<AppState>,
    query: ListQuery,
) -> Result<Json<Vec<User>>, ApiError> {
    let page = Pagination::from(&query);
    let records = state.users.list(page).await?;

    Ok(Json(records.into_iter().map(User::from).collect()))
}

pub async fn get_user(
    State(state): State<AppState>,
    UserId(id): UserId,
) -> Result<Json<User>, ApiError> {
    let record = state
        .users
        .find_by_id(id)
        .await?
        .ok_or_else(|| ApiError::NotFound(format_object_id(&id)))?;

    Ok(Json(record.into()))
}

pub async fn update_user(
    State(state): State<AppState>,
    UserId(id): UserId,
    ValidatedJson(payload): ValidatedJson<UpdateUserRequest>,
) -> Result<Json<User>, ApiError> {
    let changes = payload.into_changes()?;
    let record = state
        .users
        .update_by_id(id, changes)
        .await?
        .ok_or_else(|| ApiError::NotFound(format_object_id(&id)))?;

    info!("Updated user: {}", record.id);

    Ok(Json(record.into()))
}

pub async fn delete_user(
    State(state): State<AppState>,
    UserId(id): UserId,
) -> Result<StatusCode, ApiError> {
    if !state.users.delete_by_id(id).await? {
        return Err(ApiError::NotFound(format_object_id(&id)));
    }

    info!("Deleted user: {}", id);

    Ok(StatusCode::NO_CONTENT)
}
