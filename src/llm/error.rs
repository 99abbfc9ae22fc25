use reqwest::Error as ReqwestError;
use serde_json::Error as SerdeJsonError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum LLMError {
    #[error("Network request failed: {0}")]
    RequestError(#[from] ReqwestError),

    #[error("JSON serialization/deserialization error: {0}")]
    SerdeError(#[from] SerdeJsonError),

    /// Structured error object returned by the API (`{"error": {...}}`).
    #[error("{code} {status}. {message}")]
    ApiError {
        code: u16,
        status: String,
        message: String,
    },

    #[error("HTTP Error {status}: {reason}")]
    HttpStatus {
        status: u16,
        reason: String,
        body: String,
    },

    #[error("Content not found in response: Expected at {0}")]
    ContentNotFound(String),

    #[error("Error: {0}")]
    OtherError(String),

    #[error("Any error: {0}")]
    AnyhowError(#[from] anyhow::Error),
}

impl LLMError {
    /// Raw response body, when the failure came with one.
    pub fn response_body(&self) -> Option<&str> {
        match self {
            LLMError::HttpStatus { body, .. } => Some(body),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_http_status_display_and_body() {
        let err = LLMError::HttpStatus {
            status: 500,
            reason: "Internal Server Error".to_string(),
            body: "boom".to_string(),
        };
        assert_eq!(err.to_string(), "HTTP Error 500: Internal Server Error");
        assert_eq!(err.response_body(), Some("boom"));
    }

    #[test]
    fn test_api_error_has_no_body() {
        let err = LLMError::ApiError {
            code: 400,
            status: "INVALID_ARGUMENT".to_string(),
            message: "API key not valid. Please pass a valid API key.".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "400 INVALID_ARGUMENT. API key not valid. Please pass a valid API key."
        );
        assert!(err.response_body().is_none());
    }
}
