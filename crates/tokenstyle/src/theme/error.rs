//! Theme loading errors.

use thiserror::Error;

/// Error returned when a theme document cannot be loaded.
#[derive(Debug, Error)]
pub enum ThemeError {
    /// The YAML document is malformed or has the wrong shape.
    #[error("invalid theme yaml: {0}")]
    Yaml(#[from] serde_yaml::Error),
    /// The JSON document is malformed or has the wrong shape.
    #[error("invalid theme json: {0}")]
    Json(#[from] serde_json::Error),
}
