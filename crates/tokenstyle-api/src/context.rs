//! API location and URL construction.

use crate::error::ApiError;

/// Environment variable read by [`ApiContext::from_env`].
pub const API_BASE_URL_VAR: &str = "API_BASE_URL";

/// Where the API lives.
///
/// Server-side rendering and the browser may reach the API through
/// different roots, so every adapter takes the context explicitly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiContext {
    pub api_root_url: String,
}

impl ApiContext {
    pub fn new(api_root_url: impl Into<String>) -> Self {
        Self {
            api_root_url: api_root_url.into(),
        }
    }

    /// Reads the API root from the `API_BASE_URL` environment variable.
    pub fn from_env() -> Result<Self, ApiError> {
        Self::from_env_var(API_BASE_URL_VAR)
    }

    /// Reads the API root from the named environment variable.
    pub fn from_env_var(variable: &str) -> Result<Self, ApiError> {
        let value = std::env::var(variable).map_err(|e| ApiError::Config {
            variable: variable.to_string(),
            reason: e.to_string(),
        })?;
        if value.trim().is_empty() {
            return Err(ApiError::Config {
                variable: variable.to_string(),
                reason: "value is empty".to_string(),
            });
        }
        Ok(Self::new(value))
    }

    /// Builds the URL of a resource below the API root.
    ///
    /// One trailing slash is removed from the root before `/` and `path`
    /// are appended.
    ///
    /// ```rust
    /// use tokenstyle_api::ApiContext;
    ///
    /// let context = ApiContext::new("http://api.test/");
    /// assert_eq!(context.endpoint("users/5"), "http://api.test/users/5");
    /// ```
    pub fn endpoint(&self, path: &str) -> String {
        let root = self
            .api_root_url
            .strip_suffix('/')
            .unwrap_or(&self.api_root_url);
        format!("{}/{}", root, path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    fn test_endpoint_without_trailing_slash() {
        let context = ApiContext::new("http://api.test");
        assert_eq!(context.endpoint("auth/signin"), "http://api.test/auth/signin");
    }

    #[test]
    fn test_endpoint_strips_one_trailing_slash() {
        let context = ApiContext::new("http://api.test/");
        assert_eq!(context.endpoint("users/5"), "http://api.test/users/5");

        let context = ApiContext::new("http://api.test//");
        assert_eq!(context.endpoint("users/5"), "http://api.test//users/5");
    }

    #[test]
    fn test_endpoint_keeps_root_path() {
        let context = ApiContext::new("http://localhost:8000/api/proxy/");
        assert_eq!(
            context.endpoint("users/1"),
            "http://localhost:8000/api/proxy/users/1"
        );
    }

    #[test]
    #[serial]
    fn test_from_env_var_reads_value() {
        std::env::set_var("TOKENSTYLE_TEST_API_ROOT", "http://api.test/");
        let context = ApiContext::from_env_var("TOKENSTYLE_TEST_API_ROOT").unwrap();
        assert_eq!(context.api_root_url, "http://api.test/");
        std::env::remove_var("TOKENSTYLE_TEST_API_ROOT");
    }

    #[test]
    #[serial]
    fn test_from_env_var_missing() {
        std::env::remove_var("TOKENSTYLE_TEST_API_ROOT");
        let err = ApiContext::from_env_var("TOKENSTYLE_TEST_API_ROOT").unwrap_err();
        assert!(matches!(err, ApiError::Config { .. }));
    }

    #[test]
    #[serial]
    fn test_from_env_var_empty() {
        std::env::set_var("TOKENSTYLE_TEST_API_ROOT", "  ");
        let err = ApiContext::from_env_var("TOKENSTYLE_TEST_API_ROOT").unwrap_err();
        assert!(err.to_string().contains("value is empty"));
        std::env::remove_var("TOKENSTYLE_TEST_API_ROOT");
    }
}
