//! Wire DTOs for the storefront auth endpoints.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// Authenticated storefront user.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Backend document id.
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    pub email: String,
    /// Storefront role (e.g. `"user"`, `"admin"`).
    #[serde(default = "default_role")]
    pub role: String,
}

fn default_role() -> String {
    "user".to_owned()
}

/// Body of `POST /api/v1/login`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Successful login / profile response.
#[derive(Clone, Debug, Deserialize)]
pub struct AuthResponse {
    #[serde(default)]
    pub success: bool,
    pub user: User,
}

/// Error body returned with non-2xx statuses.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct ErrorResponse {
    #[serde(default)]
    pub message: String,
}
