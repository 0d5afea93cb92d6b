//! WebServer-specific error types

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use shared::{logging, ComponentId, SharedError};
use standings::StandingsError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum WebServerError {
    #[error("HTTP server startup failed on {address}: {message}")]
    ServerStartup { address: String, message: String },

    #[error("Invalid request: {details}")]
    InvalidRequest { details: String },

    #[error(transparent)]
    Standings(#[from] StandingsError),

    #[error("Shared component error: {0}")]
    SharedError(#[from] SharedError),

    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),
}

impl WebServerError {
    pub fn invalid(details: impl Into<String>) -> Self {
        WebServerError::InvalidRequest {
            details: details.into(),
        }
    }

    /// Stable machine-readable category returned in error bodies
    pub fn kind(&self) -> &'static str {
        match self {
            WebServerError::InvalidRequest { .. } => "invalid_request",
            WebServerError::Standings(e) => e.kind(),
            _ => "internal",
        }
    }

    /// Text sent to clients. Server-side failures get a fixed message per
    /// kind; their detail goes to the log only.
    pub fn public_message(&self) -> String {
        if !self.status_code().is_server_error() {
            return self.to_string();
        }
        match self {
            WebServerError::Standings(e @ StandingsError::PartialWrite { .. }) => e.to_string(),
            WebServerError::Standings(StandingsError::StorageUnavailable { .. }) => {
                "League data is temporarily unavailable".to_string()
            }
            _ => "Internal server error".to_string(),
        }
    }

    pub fn status_code(&self) -> StatusCode {
        match self.kind() {
            "not_found" => StatusCode::NOT_FOUND,
            "invalid_request" => StatusCode::BAD_REQUEST,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

/// JSON body of every error response
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub message: String,
    pub error: &'static str,
}

impl IntoResponse for WebServerError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if status.is_server_error() {
            logging::log_error(ComponentId::current(), "Request failed", &self);
        }

        let body = ErrorBody {
            message: self.public_message(),
            error: self.kind(),
        };
        (status, Json(body)).into_response()
    }
}

pub type WebServerResult<T> = Result<T, WebServerError>;
