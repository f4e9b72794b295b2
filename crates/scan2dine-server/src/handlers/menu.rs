use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use uuid::Uuid;
use validator::Validate;

use crate::auth::session::AuthSession;
use crate::database::models::MenuItem;
use crate::menu::grouping::CategoryGroup;
use crate::models::drafts::{MenuItemChanges, MenuItemDraft};
use crate::state::AppState;
use crate::utils::error::ApiError;

pub async fn list_items_handler(
    State(state): State<AppState>,
    session: AuthSession,
) -> Result<Json<Vec<MenuItem>>, ApiError> {
    let items = state.menu_service.list_items(&session).await?;
    Ok(Json(items))
}

pub async fn grouped_items_handler(
    State(state): State<AppState>,
    session: AuthSession,
) -> Result<Json<Vec<CategoryGroup>>, ApiError> {
    let groups = state.menu_service.grouped_items(&session).await?;
    Ok(Json(groups))
}

pub async fn create_item_handler(
    State(state): State<AppState>,
    session: AuthSession,
    Json(draft): Json<MenuItemDraft>,
) -> Result<(StatusCode, Json<MenuItem>), ApiError> {
    draft
        .validate()
        .map_err(|e| ApiError::BadRequest(e.to_string()))?;

    let item = state.menu_service.create_item(&session, &draft).await?;
    Ok((StatusCode::CREATED, Json(item)))
}

pub async fn update_item_handler(
    State(state): State<AppState>,
    session: AuthSession,
    Path(item_id): Path<Uuid>,
    Json(changes): Json<MenuItemChanges>,
) -> Result<Json<MenuItem>, ApiError> {
    changes
        .validate()
        .map_err(|e| ApiError::BadRequest(e.to_string()))?;

    let item = state
        .menu_service
        .update_item(&session, &item_id, &changes)
        .await?;
    Ok(Json(item))
}

pub async fn delete_item_handler(
    State(state): State<AppState>,
    session: AuthSession,
    Path(item_id): Path<Uuid>,
) -> Result<StatusCode, ApiError> {
    state.menu_service.delete_item(&session, &item_id).await?;
    Ok(StatusCode::NO_CONTENT)
}
