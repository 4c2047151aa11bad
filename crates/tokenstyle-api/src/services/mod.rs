//! Typed adapters, one module per API resource.
//!
//! Each adapter builds an [`ApiRequest`](crate::ApiRequest), hands it to the
//! injected [`Fetcher`](crate::Fetcher) and decodes the JSON result. No
//! retries, caching or error translation happen here.

mod auth;
mod users;

pub use auth::{signin, SigninParams};
pub use users::{get_user, GetUserParams};
