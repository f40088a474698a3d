use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::{Deserialize, Serialize};
use std::net::SocketAddr;
use thiserror::Error;

use crate::translation::{INTERNAL_ERROR_MESSAGE, TranslateError};

#[derive(Debug, Error)]
pub enum ServerError {
    #[error("invalid CORS origin '{origin}'")]
    InvalidOrigin { origin: String },
    #[error("failed to bind HTTP listener on {addr}: {source}")]
    Bind {
        addr: SocketAddr,
        #[source]
        source: std::io::Error,
    },
    #[error("HTTP server error: {0}")]
    Serve(#[from] std::io::Error),
}

/// Body of every non-2xx response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl ErrorResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            error: message.into(),
        }
    }
}

pub fn status_for(error: &TranslateError) -> StatusCode {
    match error {
        TranslateError::InvalidRequest => StatusCode::BAD_REQUEST,
        TranslateError::AllProvidersUnavailable { .. } => StatusCode::SERVICE_UNAVAILABLE,
        TranslateError::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

impl IntoResponse for TranslateError {
    fn into_response(self) -> Response {
        (status_for(&self), Json(ErrorResponse::new(self.to_string()))).into_response()
    }
}

/// Response used when a handler panics.
pub fn internal_error_response() -> Response {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(ErrorResponse::new(INTERNAL_ERROR_MESSAGE)),
    )
        .into_response()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_mapping() {
        assert_eq!(
            status_for(&TranslateError::InvalidRequest),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            status_for(&TranslateError::AllProvidersUnavailable { failures: vec![] }),
            StatusCode::SERVICE_UNAVAILABLE
        );
        assert_eq!(
            status_for(&TranslateError::internal("bad body")),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_into_response_status() {
        let response = TranslateError::InvalidRequest.into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        assert_eq!(
            internal_error_response().status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }
}
