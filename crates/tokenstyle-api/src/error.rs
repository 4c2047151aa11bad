//! API client errors.

use thiserror::Error;

/// Error returned by the API adapters and fetchers.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The request could not be sent or the response could not be read.
    #[error("http request failed: {0}")]
    Http(#[from] reqwest::Error),
    /// The server answered with a non-success status.
    #[error("api returned {status}: {message}")]
    Status { status: u16, message: String },
    /// A request body could not be encoded or a response could not be
    /// decoded into the expected record.
    #[error("invalid api payload: {0}")]
    Json(#[from] serde_json::Error),
    /// Client configuration is missing or invalid.
    #[error("invalid api configuration for {variable}: {reason}")]
    Config { variable: String, reason: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_error_display() {
        let err = ApiError::Status {
            status: 401,
            message: "invalid credentials".to_string(),
        };
        assert_eq!(err.to_string(), "api returned 401: invalid credentials");
    }

    #[test]
    fn test_config_error_display() {
        let err = ApiError::Config {
            variable: "API_BASE_URL".to_string(),
            reason: "not set".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains("API_BASE_URL"));
        assert!(msg.contains("not set"));
    }

    #[test]
    fn test_json_error_from() {
        let source = serde_json::from_str::<u32>("\"x\"").unwrap_err();
        assert!(matches!(ApiError::from(source), ApiError::Json(_)));
    }
}
