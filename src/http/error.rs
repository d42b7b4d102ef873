//! Maps resource errors onto HTTP responses.
//!
//! Every failure body has the shape `{"message": "..."}`.

use crate::menu_items::MenuError;
use crate::orders::OrderError;
use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use thiserror::Error;
use tracing::{error, warn};

#[derive(Debug, Error)]
pub enum AppError {
    /// Malformed body or a field the resource refused.
    #[error("{0}")]
    BadRequest(String),

    #[error("{0}")]
    NotFound(String),

    #[error("{0}")]
    MethodNotAllowed(String),

    /// The backing collection failed; the detail is logged, not returned.
    #[error("{context}")]
    Internal { context: String, detail: String },
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::MethodNotAllowed(_) => StatusCode::METHOD_NOT_ALLOWED,
            AppError::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        match &self {
            AppError::Internal { context, detail } => error!(%context, %detail, "Request failed"),
            other => warn!(status = status.as_u16(), message = %other, "Request rejected"),
        }
        (status, Json(json!({ "message": self.to_string() }))).into_response()
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::BadRequest(rejection.body_text())
    }
}

impl From<PathRejection> for AppError {
    fn from(rejection: PathRejection) -> Self {
        AppError::BadRequest(rejection.body_text())
    }
}

impl From<MenuError> for AppError {
    fn from(e: MenuError) -> Self {
        match e {
            MenuError::Validation(_) => AppError::BadRequest(e.to_string()),
            MenuError::NotFound(_) => AppError::NotFound("Menu item not found".into()),
            MenuError::Store(detail) => AppError::Internal {
                context: "Menu store unavailable".into(),
                detail,
            },
        }
    }
}

impl From<OrderError> for AppError {
    fn from(e: OrderError) -> Self {
        match e {
            OrderError::Validation(_) | OrderError::InvalidTransition { .. } => {
                AppError::BadRequest(e.to_string())
            }
            OrderError::NotFound(_) => AppError::NotFound("Order not found".into()),
            OrderError::Store(detail) => AppError::Internal {
                context: "Order store unavailable".into(),
                detail,
            },
        }
    }
}
