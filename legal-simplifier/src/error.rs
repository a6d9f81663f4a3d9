use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

/// Fallback message when a failure carries no usable text of its own.
pub const GENERIC_FAILURE_MESSAGE: &str = "Failed to get a response from the AI model.";

pub const EMPTY_INPUT_MESSAGE: &str = "Please enter some legal text to simplify.";

/// Failure of a single simplification attempt.
///
/// Every variant is terminal for the submission that produced it.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SimplifyError {
    #[error("{0}")]
    InvalidInput(String),

    #[error("{0}")]
    NotConfigured(String),

    #[error("Backend request failed with status {status}: {body}")]
    Transport { status: u16, body: String },

    #[error("Received an invalid response from the AI model.")]
    MalformedResponse,

    #[error("{0}")]
    Unknown(String),
}

impl SimplifyError {
    pub fn empty_input() -> Self {
        SimplifyError::InvalidInput(EMPTY_INPUT_MESSAGE.to_string())
    }

    pub fn missing_api_key(variable: &str) -> Self {
        SimplifyError::NotConfigured(format!(
            "API key is not configured. Please set {} in your environment variables.",
            variable
        ))
    }

    /// Wrap an unexpected failure, keeping its message when there is one.
    pub fn unknown(message: impl Into<String>) -> Self {
        let message = message.into();
        if message.trim().is_empty() {
            SimplifyError::Unknown(GENERIC_FAILURE_MESSAGE.to_string())
        } else {
            SimplifyError::Unknown(message)
        }
    }

    /// Short label used for logs and metrics.
    pub fn kind(&self) -> &'static str {
        match self {
            SimplifyError::InvalidInput(_) => "invalid_input",
            SimplifyError::NotConfigured(_) => "not_configured",
            SimplifyError::Transport { .. } => "transport",
            SimplifyError::MalformedResponse => "malformed_response",
            SimplifyError::Unknown(_) => "unknown",
        }
    }
}

impl From<reqwest::Error> for SimplifyError {
    fn from(err: reqwest::Error) -> Self {
        // The request URL carries the API key.
        SimplifyError::unknown(err.without_url().to_string())
    }
}

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Bad Gateway: {0}")]
    BadGateway(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Internal server error: {0}")]
    InternalError(#[from] anyhow::Error),
}

impl From<SimplifyError> for AppError {
    fn from(err: SimplifyError) -> Self {
        match err {
            SimplifyError::InvalidInput(msg) => AppError::BadRequest(msg),
            SimplifyError::NotConfigured(_) => AppError::ConfigError(err.to_string()),
            SimplifyError::Transport { .. }
            | SimplifyError::MalformedResponse
            | SimplifyError::Unknown(_) => AppError::BadGateway(err.to_string()),
        }
    }
}

impl From<config::ConfigError> for AppError {
    fn from(err: config::ConfigError) -> Self {
        AppError::ConfigError(err.to_string())
    }
}

impl From<std::io::Error> for AppError {
    fn from(err: std::io::Error) -> Self {
        AppError::InternalError(anyhow::Error::new(err))
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        #[derive(Serialize)]
        struct ErrorResponse {
            error: String,
            #[serde(skip_serializing_if = "Option::is_none")]
            details: Option<String>,
        }

        let (status, error_message, details) = match self {
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg, None),
            AppError::Conflict(msg) => (StatusCode::CONFLICT, msg, None),
            AppError::BadGateway(msg) => (StatusCode::BAD_GATEWAY, msg, None),
            AppError::ConfigError(msg) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Configuration error".to_string(),
                Some(msg),
            ),
            AppError::InternalError(err) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Internal server error".to_string(),
                Some(format!("{:#}", err)),
            ),
        };

        (
            status,
            Json(ErrorResponse {
                error: error_message,
                details,
            }),
        )
            .into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn transport_error_mentions_status_and_body() {
        let err = SimplifyError::Transport {
            status: 500,
            body: "server error".to_string(),
        };
        let message = err.to_string();
        assert!(message.contains("500"));
        assert!(message.contains("server error"));
    }

    #[test]
    fn unknown_keeps_original_message() {
        let err = SimplifyError::unknown("connection reset by peer");
        assert_eq!(err.to_string(), "connection reset by peer");
    }

    #[test]
    fn unknown_falls_back_to_generic_message() {
        let err = SimplifyError::unknown("   ");
        assert_eq!(err.to_string(), GENERIC_FAILURE_MESSAGE);
    }

    #[test]
    fn not_configured_names_the_variable() {
        let err = SimplifyError::missing_api_key("GEMINI_API_KEY");
        assert!(err.to_string().contains("GEMINI_API_KEY"));
    }

    #[test]
    fn simplify_errors_map_to_http_statuses() {
        let cases = [
            (SimplifyError::empty_input(), StatusCode::BAD_REQUEST),
            (
                SimplifyError::missing_api_key("KEY"),
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
            (SimplifyError::MalformedResponse, StatusCode::BAD_GATEWAY),
            (
                SimplifyError::Transport {
                    status: 503,
                    body: String::new(),
                },
                StatusCode::BAD_GATEWAY,
            ),
        ];

        for (err, expected) in cases {
            let response = AppError::from(err).into_response();
            assert_eq!(response.status(), expected);
        }
    }
}
