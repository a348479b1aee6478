use axum::{Json, http::StatusCode, response::IntoResponse};
use serde::Serialize;
use sqlx::Error as SqlxError;
use thiserror::Error as ThisError;
use tracing::error;

use crate::config::ConfigError;

#[derive(Debug, ThisError)]
pub enum ApiError {
    #[error("Database configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Database error: {0}")]
    Database(#[from] SqlxError),

    #[error("Invalid request: {0}")]
    Validation(String),

    #[error("Todo {0} not found")]
    NotFound(i32),

    /// An extractor refused the request (bad path, body or content type).
    #[error("Request rejected ({status}): {message}")]
    Rejected { status: StatusCode, message: String },
}

impl ApiError {
    /// Errors that mean the database could not be reached at all.
    pub fn is_unavailable(&self) -> bool {
        matches!(
            self,
            ApiError::Database(
                SqlxError::PoolTimedOut
                    | SqlxError::PoolClosed
                    | SqlxError::Io(_)
                    | SqlxError::Tls(_)
            )
        )
    }

    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::Config(_) => StatusCode::INTERNAL_SERVER_ERROR,
            ApiError::Database(_) if self.is_unavailable() => StatusCode::SERVICE_UNAVAILABLE,
            ApiError::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
            ApiError::Validation(_) => StatusCode::BAD_REQUEST,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Rejected { status, .. } => *status,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> axum::response::Response {
        let status = self.status();
        let body = match &self {
            ApiError::Config(_) => ApiErrorBody {
                code: "DATABASE_NOT_CONFIGURED".to_string(),
                message: "The database connection is not configured.".to_string(),
            },
            ApiError::Database(_) if self.is_unavailable() => ApiErrorBody {
                code: "DATABASE_UNAVAILABLE".to_string(),
                message: "The database is currently unreachable.".to_string(),
            },
            ApiError::Database(_) => ApiErrorBody {
                code: "INTERNAL_ERROR".to_string(),
                message: "An internal server error occurred.".to_string(),
            },
            ApiError::Validation(msg) => ApiErrorBody {
                code: "BAD_REQUEST".to_string(),
                message: msg.clone(),
            },
            ApiError::NotFound(_) => ApiErrorBody {
                code: "NOT_FOUND".to_string(),
                message: "Todo not found.".to_string(),
            },
            ApiError::Rejected { status, message } => ApiErrorBody {
                code: rejection_code(*status).to_string(),
                message: message.clone(),
            },
        };

        if status.is_server_error() {
            error!(error = %self, status = %status, "request failed");
        }
        (status, Json(ApiErrorResponse { error: body })).into_response()
    }
}

fn rejection_code(status: StatusCode) -> &'static str {
    match status {
        StatusCode::UNPROCESSABLE_ENTITY => "UNPROCESSABLE_ENTITY",
        StatusCode::UNSUPPORTED_MEDIA_TYPE => "UNSUPPORTED_MEDIA_TYPE",
        StatusCode::PAYLOAD_TOO_LARGE => "PAYLOAD_TOO_LARGE",
        _ if status.is_server_error() => "INTERNAL_ERROR",
        _ => "BAD_REQUEST",
    }
}

/// Standardized API error response body
#[derive(Serialize)]
pub struct ApiErrorBody {
    pub code: String,
    pub message: String,
}

#[derive(Serialize)]
pub struct ApiErrorResponse {
    pub error: ApiErrorBody,
}
