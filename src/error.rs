use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};
use serde_json::json;
use thiserror::Error;

#[derive(Error, Debug, Clone)]
pub enum Error {
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    #[error("Metrics fetch failed: {0}")]
    Metrics(String),

    #[error("Narrative generation failed: {0}")]
    Narrative(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(String),

    #[error("Serialization error: {0}")]
    Json(String),

    #[error("HTTP error: {0}")]
    Http(String),
}

pub type Result<T> = std::result::Result<T, Error>;

// Conversion from std::io::Error
impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err.to_string())
    }
}

// Conversion from serde_json::Error
impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Json(err.to_string())
    }
}

// Conversion from reqwest::Error
impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        Error::Http(err.to_string())
    }
}

// Convert to HTTP status codes for API responses. Every request-path
// failure maps to a client error, matching the original wire behavior.
impl From<&Error> for StatusCode {
    fn from(err: &Error) -> Self {
        match err {
            Error::Config(_) | Error::Io(_) => StatusCode::INTERNAL_SERVER_ERROR,
            _ => StatusCode::BAD_REQUEST,
        }
    }
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        let status = StatusCode::from(&self);
        let body = Json(json!({
            "ok": false,
            "error": self.to_string(),
        }));
        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_path_errors_are_client_errors() {
        let errors = [
            Error::InvalidRequest("ca too short".to_string()),
            Error::Metrics("no pairs".to_string()),
            Error::Narrative("upstream 500".to_string()),
            Error::Http("connection refused".to_string()),
            Error::Json("unexpected eof".to_string()),
        ];
        for err in errors {
            assert_eq!(StatusCode::from(&err), StatusCode::BAD_REQUEST);
        }
    }

    #[test]
    fn test_config_errors_are_server_errors() {
        let err = Error::Config("GEMINI_API_KEY is not set".to_string());
        assert_eq!(StatusCode::from(&err), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
