//! # Tokenstyle API - Typed API Adapters
//!
//! Thin async wrappers around the application's HTTP API. Each adapter
//! builds a JSON request below an [`ApiContext`] root, delegates it to a
//! [`Fetcher`], and decodes the result into a domain record.
//!
//! ## Endpoints
//!
//! | Adapter | Request |
//! |---------|---------|
//! | [`signin`] | `POST <root>/auth/signin` with `{username, password}` |
//! | [`get_user`] | `GET <root>/users/<id>` |
//!
//! Both send `Accept: application/json` and `Content-Type: application/json`.
//!
//! ## Example
//!
//! ```rust,no_run
//! use tokenstyle_api::{get_user, ApiContext, GetUserParams, HttpFetcher};
//!
//! # async fn run() -> Result<(), tokenstyle_api::ApiError> {
//! let context = ApiContext::from_env()?;
//! let user = get_user(&HttpFetcher::new(), &context, GetUserParams { id: 1 }).await?;
//! println!("{}", user.display_name);
//! # Ok(())
//! # }
//! ```

mod context;
mod error;
mod fetch;
pub mod services;
mod types;

pub use context::{ApiContext, API_BASE_URL_VAR};
pub use error::ApiError;
pub use fetch::{ApiRequest, Fetcher, HttpFetcher, Method, DEFAULT_ERROR_MESSAGE};
pub use services::{get_user, signin, GetUserParams, SigninParams};
pub use types::User;
