use std::any::Any;

use arigold_orchestrator::OrchestratorError;
use arigold_orchestrator::validation::InvalidRequest;
use arigold_protocol::ErrorKind;
use arigold_protocol::http::ErrorResponse;
use axum::Json;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::response::Response;
use thiserror::Error;
use tracing::error;
use tracing::warn;

/// Errors that end an invocation before an outcome exists. Failures of the
/// generation call are not among them: those are reported in a 200 body.
#[derive(Debug, Error)]
pub enum HttpError {
    #[error(transparent)]
    InvalidInput(#[from] InvalidRequest),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl HttpError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            HttpError::InvalidInput(_) => ErrorKind::InvalidInput,
            HttpError::Internal(_) => ErrorKind::Internal,
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            HttpError::InvalidInput(_) => StatusCode::BAD_REQUEST,
            HttpError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

/// Response for a panic that escaped a handler, used with
/// `tower_http::catch_panic::CatchPanicLayer`.
pub fn panic_response(panic: Box<dyn Any + Send + 'static>) -> Response {
    let message = if let Some(message) = panic.downcast_ref::<String>() {
        message.clone()
    } else if let Some(message) = panic.downcast_ref::<&str>() {
        (*message).to_string()
    } else {
        "handler panicked".to_string()
    };
    HttpError::Internal(message).into_response()
}

impl From<OrchestratorError> for HttpError {
    fn from(err: OrchestratorError) -> Self {
        HttpError::Internal(err.to_string())
    }
}

impl IntoResponse for HttpError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            error!("Error processing request: {self}");
        } else {
            warn!("Rejected request: {self}");
        }

        let body = ErrorResponse {
            error: self.to_string(),
        };
        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn statuses_follow_variant() {
        assert_eq!(
            HttpError::from(InvalidRequest::MissingBody).status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            HttpError::Internal("boom".to_string()).status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
        assert_eq!(
            HttpError::Internal("boom".to_string()).to_string(),
            "Internal error: boom"
        );
    }

    #[test]
    fn panic_payloads_become_internal_errors() {
        let formatted = panic_response(Box::new(format!("index {} out of range", 3)));
        assert_eq!(formatted.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let opaque = panic_response(Box::new(7_u8));
        assert_eq!(opaque.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
