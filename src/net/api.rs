//! REST helpers for the storefront auth endpoints.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): stubs returning `None`/`ApiError::Unavailable` since
//! these endpoints are only meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Failures are typed as [`ApiError`]; the auth store flattens them into a
//! single display string before they reach the view.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::types::{LoginRequest, User};
#[cfg(any(test, feature = "hydrate"))]
use super::types::ErrorResponse;
#[cfg(feature = "hydrate")]
use super::types::AuthResponse;

/// Why a backend call did not yield a user.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    #[error("network error: {0}")]
    Network(String),
    #[error("{message}")]
    Rejected { status: u16, message: String },
    #[error("unexpected response: {0}")]
    Decode(String),
    #[error("not available on server")]
    Unavailable,
}

#[cfg(any(test, feature = "hydrate"))]
fn is_success(status: u16) -> bool {
    (200..300).contains(&status)
}

/// Message for a rejected request: the backend's `message` when it sent one,
/// otherwise a generic line carrying the status.
#[cfg(any(test, feature = "hydrate"))]
fn rejection_message(status: u16, body: &str) -> String {
    let parsed: ErrorResponse = serde_json::from_str(body).unwrap_or_default();
    let message = parsed.message.trim();
    if message.is_empty() {
        format!("login failed: {status}")
    } else {
        message.to_owned()
    }
}

#[cfg(any(test, feature = "hydrate"))]
fn rejected(status: u16, body: &str) -> ApiError {
    ApiError::Rejected { status, message: rejection_message(status, body) }
}

/// Submit credentials to `endpoint` and return the authenticated user.
///
/// # Errors
///
/// Returns [`ApiError::Network`] if the request cannot be sent,
/// [`ApiError::Rejected`] for non-2xx statuses, and [`ApiError::Decode`] when
/// the success body is malformed.
#[cfg_attr(not(feature = "hydrate"), allow(unused_variables))]
pub async fn login(endpoint: &str, request: &LoginRequest) -> Result<User, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::post(endpoint)
            .json(request)
            .map_err(|e| ApiError::Network(e.to_string()))?
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        let status = resp.status();
        if !is_success(status) {
            let body = resp.text().await.unwrap_or_default();
            return Err(rejected(status, &body));
        }
        let body: AuthResponse = resp.json().await.map_err(|e| ApiError::Decode(e.to_string()))?;
        Ok(body.user)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err(ApiError::Unavailable)
    }
}

/// Fetch the user behind an existing session cookie.
/// Returns `None` if not authenticated or on the server.
#[cfg_attr(not(feature = "hydrate"), allow(unused_variables))]
pub async fn fetch_current_user(endpoint: &str) -> Option<User> {
    #[cfg(feature = "hydrate")]
    {
        let resp = match gloo_net::http::Request::get(endpoint).send().await {
            Ok(resp) => resp,
            Err(e) => {
                log::debug!("session probe failed: {e}");
                return None;
            }
        };
        if !is_success(resp.status()) {
            return None;
        }
        match resp.json::<AuthResponse>().await {
            Ok(body) => Some(body.user),
            Err(e) => {
                log::warn!("session probe returned malformed body: {e}");
                None
            }
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        None
    }
}
