//! Unified error types for the address API
//!
//! This module defines error types for each layer:
//! - `LookupError`: the single failure channel of the address lookup port
//! - `ErrorKind`: closed classification used to pick an HTTP status
//! - `AppError`: failures raised by the HTTP layer itself

use std::any::Any;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Classification of a failure, mapped 1:1 to an HTTP status
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    NotFound,
    InvalidInput,
    Upstream,
}

impl ErrorKind {
    pub fn status_code(self) -> StatusCode {
        match self {
            ErrorKind::NotFound => StatusCode::NOT_FOUND,
            ErrorKind::InvalidInput => StatusCode::BAD_REQUEST,
            ErrorKind::Upstream => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

/// Address lookup errors
///
/// The display texts are part of the public API: clients read them from the
/// `error` field of the response body.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LookupError {
    /// Connection failure, timeout, non-2xx status or undecodable body
    #[error("Failed to lookup address: {0}")]
    Transport(String),

    /// The upstream answered but reported a failure in its own status field
    #[error("{service} error: {message}")]
    Upstream { service: String, message: String },

    #[error("Address not found for zipcode: {zipcode}")]
    NotFound { zipcode: String },
}

impl LookupError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            LookupError::NotFound { .. } => ErrorKind::NotFound,
            LookupError::Transport(_) | LookupError::Upstream { .. } => ErrorKind::Upstream,
        }
    }
}

impl From<reqwest::Error> for LookupError {
    fn from(e: reqwest::Error) -> Self {
        LookupError::Transport(e.to_string())
    }
}

/// Application layer errors - raised outside the lookup channel
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Invalid request: {0}")]
    BadRequest(String),

    #[error("An unexpected error occurred: {0}")]
    Unexpected(String),
}

impl AppError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            AppError::BadRequest(_) => ErrorKind::InvalidInput,
            AppError::Unexpected(_) => ErrorKind::Upstream,
        }
    }
}

/// Error response body for JSON responses
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.kind().status_code();
        if status.is_server_error() {
            tracing::error!("{}", self);
        }

        (status, Json(ErrorResponse::new(self.to_string()))).into_response()
    }
}

/// Response for a panic caught by `CatchPanicLayer`
pub fn panic_response(panic: Box<dyn Any + Send + 'static>) -> Response {
    let detail = if let Some(s) = panic.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = panic.downcast_ref::<&str>() {
        s.to_string()
    } else {
        "unknown panic".to_string()
    };

    AppError::Unexpected(detail).into_response()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn panic_response_reports_payload() {
        let response = panic_response(Box::new("lookup exploded"));
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let response = panic_response(Box::new(42_u8));
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn lookup_error_messages_match_wire_format() {
        assert_eq!(
            LookupError::Transport("connection refused".to_string()).to_string(),
            "Failed to lookup address: connection refused"
        );
        assert_eq!(
            LookupError::Upstream {
                service: "ZipCloud API".to_string(),
                message: "Unknown error".to_string(),
            }
            .to_string(),
            "ZipCloud API error: Unknown error"
        );
        assert_eq!(
            LookupError::NotFound {
                zipcode: "9999999".to_string()
            }
            .to_string(),
            "Address not found for zipcode: 9999999"
        );
    }

    #[test]
    fn lookup_error_kinds_map_to_statuses() {
        let not_found = LookupError::NotFound {
            zipcode: "0000000".to_string(),
        };
        assert_eq!(not_found.kind().status_code(), StatusCode::NOT_FOUND);

        let transport = LookupError::Transport("HTTP status server error (502 Bad Gateway)".into());
        assert_eq!(transport.kind(), ErrorKind::Upstream);
        assert_eq!(
            transport.kind().status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );

        let upstream = LookupError::Upstream {
            service: "ZipCloud API".to_string(),
            message: "invalid parameter".to_string(),
        };
        assert_eq!(upstream.kind(), ErrorKind::Upstream);
    }

    #[test]
    fn app_error_statuses() {
        assert_eq!(
            AppError::BadRequest("missing".into()).kind().status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            AppError::Unexpected("boom".into()).kind().status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
        assert_eq!(
            AppError::Unexpected("boom".into()).to_string(),
            "An unexpected error occurred: boom"
        );
    }

    #[test]
    fn serialize_error_response() {
        let json = serde_json::to_string(&ErrorResponse::new("Address not found")).unwrap();
        assert_eq!(json, r#"{"error":"Address not found"}"#);
    }
}
