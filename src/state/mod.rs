//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by concern: `auth` is the process-wide session store,
//! `login` the login view's submission state machine, and `toast` the
//! notification queue.

pub mod auth;
pub mod login;
pub mod toast;
