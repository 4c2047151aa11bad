//! Domain records returned by the API.

use serde::{Deserialize, Serialize};

/// A registered user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: u64,
    pub username: String,
    pub display_name: String,
    pub email: String,
    pub profile_image_url: String,
    pub description: String,
}
