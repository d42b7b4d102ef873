use crate::http::AppError;
use axum::Json;
use serde_json::{json, Value};

pub async fn health() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}

pub async fn not_found() -> AppError {
    AppError::NotFound("Route not found".into())
}

pub async fn method_not_allowed() -> AppError {
    AppError::MethodNotAllowed("Method not allowed".into())
}
