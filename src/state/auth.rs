//! Auth-session store for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! One `AuthStore` is provided through context by `App`. Views read its
//! `AuthState` and mutate it only through the store actions (`login`,
//! `clear_error`, `load_session`), which funnel every change through the pure
//! [`reduce`] function.
//!
//! ERROR HANDLING
//! ==============
//! Backend failures of any kind collapse into the single `error` string; the
//! store never distinguishes bad credentials from transport problems.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use leptos::prelude::*;

use crate::net::types::User;

/// Authentication state shared by every auth-aware view.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AuthState {
    pub loading: bool,
    /// Last authentication failure, until a view clears it.
    pub error: Option<String>,
    pub is_authenticated: bool,
    pub user: Option<User>,
}

/// Named transitions applied by [`reduce`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AuthAction {
    LoginRequest,
    LoginSuccess(User),
    LoginFail(String),
    ClearError,
    SessionRequest,
    SessionRestored(User),
    /// The startup probe found no session. Not an error for the user.
    SessionMissing,
}

/// Apply one action to the state.
pub fn reduce(state: &mut AuthState, action: AuthAction) {
    match action {
        AuthAction::LoginRequest | AuthAction::SessionRequest => {
            state.loading = true;
        }
        AuthAction::LoginSuccess(user) | AuthAction::SessionRestored(user) => {
            state.loading = false;
            state.is_authenticated = true;
            state.user = Some(user);
        }
        AuthAction::LoginFail(message) => {
            state.loading = false;
            state.is_authenticated = false;
            state.user = None;
            state.error = Some(message);
        }
        AuthAction::ClearError => {
            state.error = None;
        }
        AuthAction::SessionMissing => {
            state.loading = false;
            state.is_authenticated = false;
            state.user = None;
        }
    }
}

/// Handle to the shared auth state. `Copy`, so closures can capture it freely.
#[derive(Clone, Copy, Debug)]
pub struct AuthStore {
    state: RwSignal<AuthState>,
}

impl Default for AuthStore {
    fn default() -> Self {
        Self::new()
    }
}

impl AuthStore {
    pub fn new() -> Self {
        Self { state: RwSignal::new(AuthState::default()) }
    }

    /// Read-only view of the state for selectors.
    pub fn state(&self) -> ReadSignal<AuthState> {
        self.state.read_only()
    }

    pub fn dispatch(&self, action: AuthAction) {
        self.state.update(|s| reduce(s, action));
    }

    /// Start a login round-trip against `endpoint`.
    ///
    /// Marks the store as loading immediately; the outcome lands later as
    /// either `LoginSuccess` or `LoginFail`.
    pub fn login(&self, endpoint: String, identifier: String, secret: String) {
        self.dispatch(AuthAction::LoginRequest);
        let request = crate::net::types::LoginRequest { email: identifier, password: secret };

        #[cfg(feature = "hydrate")]
        {
            let store = *self;
            leptos::task::spawn_local(async move {
                let action = match crate::net::api::login(&endpoint, &request).await {
                    Ok(user) => AuthAction::LoginSuccess(user),
                    Err(e) => AuthAction::LoginFail(e.to_string()),
                };
                store.dispatch(action);
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            log::debug!("login for {} skipped outside the browser ({endpoint})", request.email);
            self.dispatch(AuthAction::LoginFail(
                crate::net::api::ApiError::Unavailable.to_string(),
            ));
        }
    }

    pub fn clear_error(&self) {
        self.dispatch(AuthAction::ClearError);
    }

    /// Probe `endpoint` for an existing session so a returning user counts as
    /// authenticated. No-op on the server.
    #[cfg_attr(not(feature = "hydrate"), allow(unused_variables))]
    pub fn load_session(&self, endpoint: String) {
        #[cfg(feature = "hydrate")]
        {
            self.dispatch(AuthAction::SessionRequest);
            let store = *self;
            leptos::task::spawn_local(async move {
                let action = match crate::net::api::fetch_current_user(&endpoint).await {
                    Some(user) => AuthAction::SessionRestored(user),
                    None => AuthAction::SessionMissing,
                };
                store.dispatch(action);
            });
        }
    }
}
