use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use plivo::PlivoError;
use std::error::Error;
use std::fmt::{self, Display, Formatter};

/// Faults surfaced by the JSON routes. IVR webhook routes never answer
/// with these under normal operation: an unrecognized digit is a menu
/// branch, not an error.
#[derive(Debug)]
pub enum AppError {
    Validation(String),
    Configuration(String),
    Upstream { status: StatusCode, message: String },
    TemplateNotFound(String),
    Internal(String),
}

impl Display for AppError {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        match *self {
            AppError::Validation(ref msg) => f.write_str(msg),
            AppError::Configuration(ref msg) => f.write_str(msg),
            AppError::Upstream { ref message, .. } => write!(f, "Plivo API error: {}", message),
            AppError::TemplateNotFound(ref name) => {
                write!(f, "Unknown call-control document: {}", name)
            }
            AppError::Internal(ref msg) => f.write_str(msg),
        }
    }
}

impl Error for AppError {}

impl AppError {
    fn status(&self) -> StatusCode {
        match *self {
            AppError::Validation(_) | AppError::Configuration(_) => StatusCode::BAD_REQUEST,
            // Mirror the provider's status on its errors
            AppError::Upstream { status, .. } => status,
            AppError::TemplateNotFound(_) | AppError::Internal(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        log::debug!("Request failed: {}", self);

        (
            self.status(),
            Json(serde_json::json!({ "error": self.to_string() })),
        )
            .into_response()
    }
}

impl From<PlivoError> for AppError {
    fn from(err: PlivoError) -> Self {
        match err {
            PlivoError::HttpError(status, message) => AppError::Upstream { status, message },
            PlivoError::ReqwestError(e) => AppError::Upstream {
                status: if e.is_timeout() {
                    StatusCode::GATEWAY_TIMEOUT
                } else {
                    StatusCode::BAD_GATEWAY
                },
                message: e.to_string(),
            },
            PlivoError::ParsingError => {
                AppError::Internal("Failed to parse the Plivo response".to_string())
            }
        }
    }
}
