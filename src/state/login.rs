//! Submission state machine for the login view.
//!
//! DESIGN
//! ======
//! The view never reacts to the auth store directly. Each store change is
//! reduced to an [`AuthSnapshot`] and handed to [`LoginController::observe`],
//! which diffs it against the previous snapshot and returns the side effects
//! to perform. Effects run afterwards through a [`LoginEffects`] sink, so the
//! whole flow is testable with plain data and a recording sink.
//!
//! ```text
//!   Idle ──submit──▶ Pending ──store error──▶ Failed ──submit──▶ Pending
//!                       │
//!                       └──authenticated──▶ Succeeded (navigates away)
//! ```
//!
//! The controller keeps its own copy of the last error (the local echo). It
//! is set whenever the store reports a new error and is not cleared when the
//! store error is, so the inline message stays visible after the toast fades.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use crate::state::auth::AuthState;
use crate::state::toast::ToastPosition;

/// Values currently typed into the form.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Credentials {
    pub identifier: String,
    pub secret: String,
}

/// The parts of `AuthState` the controller reacts to.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AuthSnapshot {
    pub loading: bool,
    /// Non-empty error text, if any. Empty strings count as absent.
    pub error: Option<String>,
    pub is_authenticated: bool,
}

impl From<&AuthState> for AuthSnapshot {
    fn from(state: &AuthState) -> Self {
        Self {
            loading: state.loading,
            error: state.error.clone().filter(|e| !e.is_empty()),
            is_authenticated: state.is_authenticated,
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum LoginPhase {
    #[default]
    Idle,
    Pending,
    Failed,
    Succeeded,
}

/// Side effect requested by the controller.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LoginEffect {
    Login(Credentials),
    Navigate(String),
    Notify { message: String, position: ToastPosition },
    ClearError,
}

/// Executes controller effects against the outside world.
pub trait LoginEffects {
    fn login(&self, credentials: Credentials);
    fn clear_error(&self);
    fn navigate(&self, path: &str);
    fn notify(&self, message: &str, position: ToastPosition);
}

/// Run `effects` in order against `sink`.
pub fn run_effects<S: LoginEffects + ?Sized>(effects: Vec<LoginEffect>, sink: &S) {
    for effect in effects {
        match effect {
            LoginEffect::Login(credentials) => sink.login(credentials),
            LoginEffect::Navigate(path) => sink.navigate(&path),
            LoginEffect::Notify { message, position } => sink.notify(&message, position),
            LoginEffect::ClearError => sink.clear_error(),
        }
    }
}

/// Effects implied by the store moving from `old` to `new`.
///
/// Only genuine transitions produce effects: entering the authenticated state
/// yields one `Navigate`, and a newly appeared error yields one `Notify`
/// followed by one `ClearError`. Identical snapshots yield nothing.
pub fn transition(
    old: &AuthSnapshot,
    new: &AuthSnapshot,
    redirect_target: &str,
    position: ToastPosition,
) -> Vec<LoginEffect> {
    let mut effects = Vec::new();
    if new.is_authenticated && !old.is_authenticated {
        effects.push(LoginEffect::Navigate(redirect_target.to_owned()));
    }
    if let Some(message) = new_error(old, new) {
        effects.push(LoginEffect::Notify { message: message.to_owned(), position });
        effects.push(LoginEffect::ClearError);
    }
    effects
}

fn new_error<'a>(old: &AuthSnapshot, new: &'a AuthSnapshot) -> Option<&'a str> {
    match (&old.error, &new.error) {
        (_, None) => None,
        (Some(prev), Some(next)) if prev == next => None,
        (_, Some(next)) => Some(next.as_str()),
    }
}

/// Phase after observing `new`, given whether it carried a fresh error.
fn next_phase(phase: LoginPhase, new: &AuthSnapshot, fresh_error: bool) -> LoginPhase {
    if new.is_authenticated {
        LoginPhase::Succeeded
    } else if fresh_error {
        LoginPhase::Failed
    } else if new.loading {
        LoginPhase::Pending
    } else if phase == LoginPhase::Pending || phase == LoginPhase::Succeeded {
        LoginPhase::Idle
    } else {
        phase
    }
}

/// Per-view controller state: current phase, last observed snapshot, and the
/// sticky local error.
#[derive(Clone, Debug)]
pub struct LoginController {
    phase: LoginPhase,
    last: AuthSnapshot,
    local_error: Option<String>,
    position: ToastPosition,
    block_resubmit: bool,
}

impl LoginController {
    pub fn new(position: ToastPosition, block_resubmit: bool) -> Self {
        Self {
            phase: LoginPhase::Idle,
            last: AuthSnapshot::default(),
            local_error: None,
            position,
            block_resubmit,
        }
    }

    pub fn phase(&self) -> LoginPhase {
        self.phase
    }

    /// Last error reported by the store, kept after the store clears it.
    pub fn local_error(&self) -> Option<&str> {
        self.local_error.as_deref()
    }

    /// Handle a form submit.
    ///
    /// Returns a single `Login` effect carrying the credentials unchanged, or
    /// nothing when a request is already in flight (if resubmit blocking is
    /// on) or the session is already established.
    pub fn submit(&mut self, credentials: Credentials) -> Vec<LoginEffect> {
        match self.phase {
            LoginPhase::Pending if self.block_resubmit => {
                log::debug!("login submit ignored: request already pending");
                Vec::new()
            }
            LoginPhase::Succeeded => Vec::new(),
            _ => {
                self.phase = LoginPhase::Pending;
                vec![LoginEffect::Login(credentials)]
            }
        }
    }

    /// Observe the store and return the effects this change requires.
    pub fn observe(&mut self, snapshot: &AuthSnapshot, redirect_target: &str) -> Vec<LoginEffect> {
        let effects = transition(&self.last, snapshot, redirect_target, self.position);
        let fresh_error = new_error(&self.last, snapshot);
        if let Some(message) = fresh_error {
            log::error!("login error: {message}");
            self.local_error = Some(message.to_owned());
        }
        self.phase = next_phase(self.phase, snapshot, fresh_error.is_some());
        self.last = snapshot.clone();
        effects
    }
}
