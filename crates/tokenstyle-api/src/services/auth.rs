//! Authentication endpoints.

use serde::Serialize;

use crate::context::ApiContext;
use crate::error::ApiError;
use crate::fetch::{ApiRequest, Fetcher, Method};
use crate::types::User;

/// Credentials for [`signin`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SigninParams {
    pub username: String,
    pub password: String,
}

impl SigninParams {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }
}

/// Signs in and returns the signed-in user.
///
/// Sends `POST <root>/auth/signin` with the credentials as a JSON body.
pub async fn signin<F: Fetcher + ?Sized>(
    fetcher: &F,
    context: &ApiContext,
    params: &SigninParams,
) -> Result<User, ApiError> {
    let request = ApiRequest::json(Method::Post, context.endpoint("auth/signin"))
        .with_body(serde_json::to_string(params)?);
    tracing::debug!(method = %request.method, url = %request.url, "signing in");

    let value = fetcher.fetch(request).await?;
    Ok(serde_json::from_value(value)?)
}
