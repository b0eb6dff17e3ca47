use axum::{
    http::{header, StatusCode},
    response::{IntoResponse, Response},
};
use thiserror::Error;
use tracing::error;

/// Error returned by every HTTP handler.
///
/// Bodies are short plain-text diagnostics. Underlying causes are logged
/// here and never sent to the client.
#[derive(Debug, Error)]
pub enum ApiError {
    /// A reporting resource could not be opened or read.
    #[error("{message}: {cause}")]
    Report { message: &'static str, cause: String },

    #[error("Database error: {0}")]
    Database(String),

    /// A blocking task panicked or was cancelled.
    #[error("Internal error: {0}")]
    Internal(String),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::Report { .. } | ApiError::Database(_) | ApiError::Internal(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    /// Text sent to the client.
    pub fn public_message(&self) -> &str {
        match self {
            ApiError::Report { message, .. } => *message,
            ApiError::Database(_) => "Database error",
            ApiError::Internal(_) => "Internal server error",
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        error!(error = %self, "request failed");
        let status = self.status();
        (
            status,
            [(header::CONTENT_TYPE, "text/plain; charset=utf-8")],
            self.public_message().to_string(),
        )
            .into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_report_error_exposes_fixed_message_only() {
        let err = ApiError::Report {
            message: "Error reading KEGG pathway data",
            cause: "No such file or directory (os error 2)".to_string(),
        };
        assert_eq!(err.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(err.public_message(), "Error reading KEGG pathway data");
    }

    #[test]
    fn test_database_error_hides_cause() {
        let err = ApiError::Database("password authentication failed".to_string());
        assert_eq!(err.public_message(), "Database error");
    }

    #[test]
    fn test_into_response_is_plain_text_500() {
        let resp = ApiError::Internal("join error".to_string()).into_response();
        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let ct = resp.headers().get(header::CONTENT_TYPE).unwrap();
        assert!(ct.to_str().unwrap().starts_with("text/plain"));
    }
}
