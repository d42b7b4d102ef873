use crate::http::{AppError, AppState};
use crate::model::{Order, OrderCreate, OrderPatch};
use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use document_store::{DocumentId, ResourceManager};

/// Newest first.
pub async fn list_orders(State(state): State<AppState>) -> Result<Json<Vec<Order>>, AppError> {
    Ok(Json(state.orders.list().await?))
}

pub async fn create_order(
    State(state): State<AppState>,
    payload: Result<Json<OrderCreate>, JsonRejection>,
) -> Result<(StatusCode, Json<Order>), AppError> {
    let Json(params) = payload?;
    let order = state.orders.create(params).await?;
    Ok((StatusCode::CREATED, Json(order)))
}

pub async fn update_order_status(
    State(state): State<AppState>,
    path: Result<Path<String>, PathRejection>,
    payload: Result<Json<OrderPatch>, JsonRejection>,
) -> Result<Json<Order>, AppError> {
    let Path(id) = path?;
    let Json(OrderPatch { status }) = payload?;
    let order = state.orders.update_status(DocumentId::from(id), status).await?;
    Ok(Json(order))
}

pub async fn delete_order(
    State(state): State<AppState>,
    path: Result<Path<String>, PathRejection>,
) -> Result<StatusCode, AppError> {
    let Path(id) = path?;
    state.orders.delete(DocumentId::from(id)).await?;
    Ok(StatusCode::NO_CONTENT)
}
