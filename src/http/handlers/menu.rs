use crate::http::{AppError, AppState};
use crate::model::{MenuItem, MenuItemCreate, MenuItemPatch};
use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use document_store::{DocumentId, ResourceManager};

pub async fn list_menu_items(State(state): State<AppState>) -> Result<Json<Vec<MenuItem>>, AppError> {
    Ok(Json(state.menu.list().await?))
}

pub async fn create_menu_item(
    State(state): State<AppState>,
    payload: Result<Json<MenuItemCreate>, JsonRejection>,
) -> Result<(StatusCode, Json<MenuItem>), AppError> {
    let Json(params) = payload?;
    let item = state.menu.create(params).await?;
    Ok((StatusCode::CREATED, Json(item)))
}

pub async fn update_menu_item(
    State(state): State<AppState>,
    path: Result<Path<String>, PathRejection>,
    payload: Result<Json<MenuItemPatch>, JsonRejection>,
) -> Result<Json<MenuItem>, AppError> {
    let Path(id) = path?;
    let Json(patch) = payload?;
    let item = state.menu.update(DocumentId::from(id), patch).await?;
    Ok(Json(item))
}

pub async fn delete_menu_item(
    State(state): State<AppState>,
    path: Result<Path<String>, PathRejection>,
) -> Result<StatusCode, AppError> {
    let Path(id) = path?;
    state.menu.delete(DocumentId::from(id)).await?;
    Ok(StatusCode::NO_CONTENT)
}

pub async fn toggle_menu_item(
    State(state): State<AppState>,
    path: Result<Path<String>, PathRejection>,
) -> Result<Json<MenuItem>, AppError> {
    let Path(id) = path?;
    let item = state.menu.toggle_availability(DocumentId::from(id)).await?;
    Ok(Json(item))
}
