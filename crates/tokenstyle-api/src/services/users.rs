//! User endpoints.

use crate::context::ApiContext;
use crate::error::ApiError;
use crate::fetch::{ApiRequest, Fetcher, Method};
use crate::types::User;

/// Parameters for [`get_user`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GetUserParams {
    pub id: u64,
}

/// Fetches one user by id with `GET <root>/users/<id>`.
pub async fn get_user<F: Fetcher + ?Sized>(
    fetcher: &F,
    context: &ApiContext,
    GetUserParams { id }: GetUserParams,
) -> Result<User, ApiError> {
    let request = ApiRequest::json(Method::Get, context.endpoint(&format!("users/{}", id)));
    tracing::debug!(method = %request.method, url = %request.url, "fetching user");

    let value = fetcher.fetch(request).await?;
    Ok(serde_json::from_value(value)?)
}
