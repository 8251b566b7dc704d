use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;

use crate::application::ports::{CompletionError, FileLoaderError, RepositoryError};
use crate::infrastructure::export::ExportError;

#[derive(Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

/// Uniform error surface: an HTTP status plus a human-readable message.
/// There is deliberately no machine-readable error code enumeration.
#[derive(Debug)]
pub struct ApiError {
    pub status: StatusCode,
    pub message: String,
}

impl ApiError {
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            message: message.into(),
        }
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::NOT_FOUND,
            message: message.into(),
        }
    }

    pub fn unsupported_media(message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::UNSUPPORTED_MEDIA_TYPE,
            message: message.into(),
        }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            message: message.into(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        if self.status.is_server_error() {
            tracing::error!(status = %self.status, error = %self.message, "request failed");
        } else {
            tracing::warn!(status = %self.status, error = %self.message, "request rejected");
        }
        (
            self.status,
            Json(ErrorResponse {
                error: self.message,
            }),
        )
            .into_response()
    }
}

impl From<FileLoaderError> for ApiError {
    fn from(e: FileLoaderError) -> Self {
        match e {
            FileLoaderError::UnsupportedContentType(_) => Self::unsupported_media(e.to_string()),
            FileLoaderError::ExtractionFailed(_) | FileLoaderError::NoTextFound(_) => {
                Self::bad_request(e.to_string())
            }
        }
    }
}

impl From<CompletionError> for ApiError {
    fn from(e: CompletionError) -> Self {
        match e {
            CompletionError::MissingCredential => Self::internal(e.to_string()),
            CompletionError::Upstream(_) | CompletionError::InvalidResponse(_) => Self {
                status: StatusCode::BAD_GATEWAY,
                message: e.to_string(),
            },
        }
    }
}

impl From<RepositoryError> for ApiError {
    fn from(e: RepositoryError) -> Self {
        match e {
            RepositoryError::NotFound(_) => Self::not_found(e.to_string()),
            RepositoryError::ConnectionFailed(_) | RepositoryError::QueryFailed(_) => {
                Self::internal(e.to_string())
            }
        }
    }
}

impl From<ExportError> for ApiError {
    fn from(e: ExportError) -> Self {
        Self::internal(e.to_string())
    }
}
