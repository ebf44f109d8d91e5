//! Runtime configuration for the login view and the SSR server.
//!
//! SYSTEM CONTEXT
//! ==============
//! `LoginConfig` is provided through Leptos context by `App`; the server binary
//! reads its listen port from `PORT` and everything else from
//! `[package.metadata.leptos]` / `LEPTOS_*`.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use crate::state::toast::ToastPosition;

pub const DEFAULT_PORT: u16 = 3000;

const LOGIN_ENDPOINT: &str = "/api/v1/login";
const PROFILE_ENDPOINT: &str = "/api/v1/myprofile";
const REGISTER_PATH: &str = "/register";
const TOAST_TTL_MS: u64 = 5000;

/// Endpoints and presentation knobs for the login flow.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LoginConfig {
    /// `POST` target for credential submission.
    pub login_endpoint: String,
    /// `GET` target used to detect an existing session at startup.
    pub profile_endpoint: String,
    /// Where the "New User?" link points.
    pub register_path: String,
    pub toast_position: ToastPosition,
    /// How long a notification stays on screen before it is dismissed.
    pub toast_ttl_ms: u64,
    /// Refuse a second submit while the first login request is in flight.
    pub block_resubmit_while_pending: bool,
}

impl Default for LoginConfig {
    fn default() -> Self {
        Self {
            login_endpoint: LOGIN_ENDPOINT.to_owned(),
            profile_endpoint: PROFILE_ENDPOINT.to_owned(),
            register_path: REGISTER_PATH.to_owned(),
            toast_position: ToastPosition::BottomCenter,
            toast_ttl_ms: TOAST_TTL_MS,
            block_resubmit_while_pending: true,
        }
    }
}

/// Server startup configuration failures.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid PORT {value:?}: {source}")]
    InvalidPort {
        value: String,
        #[source]
        source: std::num::ParseIntError,
    },
    #[error("leptos configuration: {0}")]
    Leptos(String),
}

/// Parse a listen port from its raw environment value.
///
/// # Errors
///
/// Returns [`ConfigError::InvalidPort`] when the value is not a `u16`.
pub fn parse_port(raw: &str) -> Result<u16, ConfigError> {
    raw.trim()
        .parse()
        .map_err(|source| ConfigError::InvalidPort { value: raw.to_owned(), source })
}
