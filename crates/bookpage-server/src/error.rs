use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use thiserror::Error;
use uuid::Uuid;

use crate::store::StoreError;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("validation error: {0}")]
    Validation(String),

    #[error("business not found: {0}")]
    BusinessNotFound(Uuid),

    #[error("service not found: {0}")]
    ServiceNotFound(Uuid),

    #[error("appointment not found: {0}")]
    AppointmentNotFound(Uuid),

    #[error("not found: {0}")]
    NotFound(String),

    #[error("a business already exists for owner {0}")]
    BusinessExists(Uuid),

    #[error("missing or invalid user identity")]
    Unauthorized,

    #[error("store error: {0}")]
    Store(#[from] StoreError),
}

impl AppError {
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }

    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            Self::BusinessNotFound(_)
                | Self::ServiceNotFound(_)
                | Self::AppointmentNotFound(_)
                | Self::NotFound(_)
        )
    }
}

#[derive(Serialize)]
struct ErrorResponse {
    error: ErrorBody,
}

#[derive(Serialize)]
struct ErrorBody {
    code: &'static str,
    message: String,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code) = match &self {
            Self::Validation(_) => (StatusCode::BAD_REQUEST, "validation_error"),
            Self::BusinessNotFound(_) => (StatusCode::NOT_FOUND, "business_not_found"),
            Self::ServiceNotFound(_) => (StatusCode::NOT_FOUND, "service_not_found"),
            Self::AppointmentNotFound(_) => (StatusCode::NOT_FOUND, "appointment_not_found"),
            Self::NotFound(_) => (StatusCode::NOT_FOUND, "not_found"),
            Self::BusinessExists(_) => (StatusCode::CONFLICT, "business_exists"),
            Self::Unauthorized => (StatusCode::UNAUTHORIZED, "unauthorized"),
            Self::Store(_) => (StatusCode::INTERNAL_SERVER_ERROR, "store_error"),
        };

        if status.is_server_error() {
            tracing::error!(error = %self, "request failed");
        }

        let body = ErrorResponse {
            error: ErrorBody {
                code,
                message: self.to_string(),
            },
        };

        (status, Json(body)).into_response()
    }
}

pub type Result<T> = std::result::Result<T, AppError>;
