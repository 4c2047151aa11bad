//! Request description and the fetch capability the adapters delegate to.

use std::fmt;

use async_trait::async_trait;
use serde::Deserialize;

use crate::error::ApiError;

/// Message used when a failed response carries no `message` of its own.
pub const DEFAULT_ERROR_MESSAGE: &str = "an error occurred during the API request";

/// HTTP method of an [`ApiRequest`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
}

impl Method {
    pub fn as_str(self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Post => "POST",
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A fully built request, ready to hand to a [`Fetcher`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiRequest {
    pub method: Method,
    pub url: String,
    pub headers: Vec<(String, String)>,
    pub body: Option<String>,
}

impl ApiRequest {
    /// A request that sends and accepts JSON.
    pub fn json(method: Method, url: impl Into<String>) -> Self {
        Self {
            method,
            url: url.into(),
            headers: vec![
                ("Accept".to_string(), "application/json".to_string()),
                ("Content-Type".to_string(), "application/json".to_string()),
            ],
            body: None,
        }
    }

    /// Sets the body, returning the updated request for chaining.
    pub fn with_body(mut self, body: impl Into<String>) -> Self {
        self.body = Some(body.into());
        self
    }

    /// Returns the first header value with a case-insensitively matching name.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }
}

/// The HTTP capability the adapters delegate to.
///
/// Implementations send the request and return the parsed JSON body of a
/// successful response. Their errors reach callers unchanged.
#[async_trait]
pub trait Fetcher: Send + Sync {
    async fn fetch(&self, request: ApiRequest) -> Result<serde_json::Value, ApiError>;
}

#[derive(Deserialize)]
struct ErrorBody {
    message: Option<String>,
}

/// [`Fetcher`] backed by a `reqwest` client.
///
/// A non-success status becomes [`ApiError::Status`], carrying the `message`
/// field of the JSON error body when the server sent one.
#[derive(Debug, Clone, Default)]
pub struct HttpFetcher {
    client: reqwest::Client,
}

impl HttpFetcher {
    pub fn new() -> Self {
        Self::default()
    }

    /// Uses a preconfigured client, e.g. one with a timeout or proxy.
    pub fn with_client(client: reqwest::Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl Fetcher for HttpFetcher {
    async fn fetch(&self, request: ApiRequest) -> Result<serde_json::Value, ApiError> {
        let method = match request.method {
            Method::Get => reqwest::Method::GET,
            Method::Post => reqwest::Method::POST,
        };

        let mut builder = self.client.request(method, request.url.as_str());
        for (name, value) in &request.headers {
            builder = builder.header(name.as_str(), value.as_str());
        }
        if let Some(body) = request.body {
            builder = builder.body(body);
        }

        let response = builder.send().await.map_err(|e| {
            tracing::warn!(url = %request.url, error = %e, "api request failed");
            ApiError::Http(e)
        })?;

        let status = response.status();
        if !status.is_success() {
            let message = response
                .json::<ErrorBody>()
                .await
                .ok()
                .and_then(|body| body.message)
                .unwrap_or_else(|| DEFAULT_ERROR_MESSAGE.to_string());
            tracing::warn!(url = %request.url, status = status.as_u16(), %message, "api returned an error");
            return Err(ApiError::Status {
                status: status.as_u16(),
                message,
            });
        }

        Ok(response.json::<serde_json::Value>().await?)
    }
}
