use std::cell::RefCell;

use super::*;

const POS: ToastPosition = ToastPosition::BottomCenter;

fn controller() -> LoginController {
    LoginController::new(POS, true)
}

fn creds(identifier: &str, secret: &str) -> Credentials {
    Credentials { identifier: identifier.to_owned(), secret: secret.to_owned() }
}

fn loading() -> AuthSnapshot {
    AuthSnapshot { loading: true, ..AuthSnapshot::default() }
}

fn failed(message: &str) -> AuthSnapshot {
    AuthSnapshot { error: Some(message.to_owned()), ..AuthSnapshot::default() }
}

fn authenticated() -> AuthSnapshot {
    AuthSnapshot { is_authenticated: true, ..AuthSnapshot::default() }
}

fn notify(message: &str) -> LoginEffect {
    LoginEffect::Notify { message: message.to_owned(), position: POS }
}

#[derive(Default)]
struct RecordingSink {
    calls: RefCell<Vec<String>>,
}

impl LoginEffects for RecordingSink {
    fn login(&self, credentials: Credentials) {
        self.calls
            .borrow_mut()
            .push(format!("login:{}:{}", credentials.identifier, credentials.secret));
    }

    fn clear_error(&self) {
        self.calls.borrow_mut().push("clear".to_owned());
    }

    fn navigate(&self, path: &str) {
        self.calls.borrow_mut().push(format!("navigate:{path}"));
    }

    fn notify(&self, message: &str, position: ToastPosition) {
        self.calls.borrow_mut().push(format!("notify:{message}:{}", position.css_class()));
    }
}

// =============================================================
// AuthSnapshot
// =============================================================

#[test]
fn snapshot_from_state_drops_empty_error() {
    let state = AuthState { error: Some(String::new()), ..AuthState::default() };
    assert_eq!(AuthSnapshot::from(&state).error, None);
}

#[test]
fn snapshot_from_state_copies_flags() {
    let state = AuthState {
        loading: true,
        error: Some("x".to_owned()),
        is_authenticated: false,
        user: None,
    };
    let snap = AuthSnapshot::from(&state);
    assert!(snap.loading);
    assert_eq!(snap.error.as_deref(), Some("x"));
    assert!(!snap.is_authenticated);
}

// =============================================================
// transition
// =============================================================

#[test]
fn transition_identical_snapshots_yield_nothing() {
    for snap in [AuthSnapshot::default(), loading(), failed("X"), authenticated()] {
        assert!(transition(&snap, &snap, "/", POS).is_empty());
    }
}

#[test]
fn transition_into_authenticated_navigates() {
    let effects = transition(&loading(), &authenticated(), "/account", POS);
    assert_eq!(effects, vec![LoginEffect::Navigate("/account".to_owned())]);
}

#[test]
fn transition_new_error_notifies_then_clears() {
    let effects = transition(&loading(), &failed("X"), "/", POS);
    assert_eq!(effects, vec![notify("X"), LoginEffect::ClearError]);
}

#[test]
fn transition_changed_error_counts_as_new() {
    let effects = transition(&failed("X"), &failed("Y"), "/", POS);
    assert_eq!(effects, vec![notify("Y"), LoginEffect::ClearError]);
}

#[test]
fn transition_error_cleared_yields_nothing() {
    assert!(transition(&failed("X"), &AuthSnapshot::default(), "/", POS).is_empty());
}

#[test]
fn transition_loading_toggle_yields_nothing() {
    assert!(transition(&AuthSnapshot::default(), &loading(), "/", POS).is_empty());
    assert!(transition(&loading(), &AuthSnapshot::default(), "/", POS).is_empty());
}

// =============================================================
// LoginController::submit
// =============================================================

#[test]
fn submit_passes_credentials_through_unchanged() {
    let mut c = controller();
    let effects = c.submit(creds("  a@b.com ", " pw "));
    assert_eq!(effects, vec![LoginEffect::Login(creds("  a@b.com ", " pw "))]);
    assert_eq!(c.phase(), LoginPhase::Pending);
}

#[test]
fn submit_while_pending_is_refused() {
    let mut c = controller();
    assert_eq!(c.submit(creds("a@b.com", "pw")).len(), 1);
    c.observe(&loading(), "/");
    assert!(c.submit(creds("a@b.com", "pw")).is_empty());
}

#[test]
fn submit_while_pending_allowed_when_guard_off() {
    let mut c = LoginController::new(POS, false);
    c.submit(creds("a@b.com", "pw"));
    c.observe(&loading(), "/");
    assert_eq!(c.submit(creds("a@b.com", "pw2")), vec![LoginEffect::Login(creds("a@b.com", "pw2"))]);
}

#[test]
fn submit_after_success_is_refused() {
    let mut c = controller();
    c.submit(creds("a@b.com", "pw"));
    c.observe(&authenticated(), "/");
    assert!(c.submit(creds("a@b.com", "pw")).is_empty());
}

#[test]
fn submit_after_failure_retries() {
    let mut c = controller();
    c.submit(creds("a@b.com", "bad"));
    c.observe(&loading(), "/");
    c.observe(&failed("Invalid email or password"), "/");
    c.observe(&AuthSnapshot::default(), "/");
    assert_eq!(c.phase(), LoginPhase::Failed);
    assert_eq!(c.submit(creds("a@b.com", "good")).len(), 1);
    assert_eq!(c.phase(), LoginPhase::Pending);
}

// =============================================================
// LoginController::observe
// =============================================================

#[test]
fn observe_error_sets_local_echo_and_requests_clear() {
    let mut c = controller();
    c.submit(creds("a@b.com", "bad"));
    c.observe(&loading(), "/");
    let effects = c.observe(&failed("X"), "/");
    assert_eq!(effects, vec![notify("X"), LoginEffect::ClearError]);
    assert_eq!(c.local_error(), Some("X"));
    assert_eq!(c.phase(), LoginPhase::Failed);
}

#[test]
fn local_echo_survives_store_clear() {
    let mut c = controller();
    c.observe(&failed("X"), "/");
    let effects = c.observe(&AuthSnapshot::default(), "/");
    assert!(effects.is_empty());
    assert_eq!(c.local_error(), Some("X"));
}

#[test]
fn local_echo_overwritten_by_next_error() {
    let mut c = controller();
    c.observe(&failed("X"), "/");
    c.observe(&AuthSnapshot::default(), "/");
    c.observe(&failed("Y"), "/");
    assert_eq!(c.local_error(), Some("Y"));
}

#[test]
fn same_error_after_clear_is_surfaced_again() {
    let mut c = controller();
    c.observe(&failed("X"), "/");
    c.observe(&AuthSnapshot::default(), "/");
    c.observe(&loading(), "/");
    let effects = c.observe(&failed("X"), "/");
    assert_eq!(effects, vec![notify("X"), LoginEffect::ClearError]);
}

#[test]
fn repeated_observation_is_idempotent() {
    let mut c = controller();
    assert_eq!(c.observe(&failed("X"), "/").len(), 2);
    assert!(c.observe(&failed("X"), "/").is_empty());
    assert!(c.observe(&failed("X"), "/").is_empty());

    let mut c = controller();
    assert_eq!(c.observe(&authenticated(), "/cart").len(), 1);
    assert!(c.observe(&authenticated(), "/cart").is_empty());
}

#[test]
fn redirect_change_while_authenticated_does_not_renavigate() {
    let mut c = controller();
    c.observe(&authenticated(), "/cart");
    assert!(c.observe(&authenticated(), "/account").is_empty());
}

#[test]
fn success_navigates_once_to_target() {
    let mut c = controller();
    c.submit(creds("a@b.com", "pw"));
    c.observe(&loading(), "/shipping");
    let effects = c.observe(&authenticated(), "/shipping");
    assert_eq!(effects, vec![LoginEffect::Navigate("/shipping".to_owned())]);
    assert_eq!(c.phase(), LoginPhase::Succeeded);
}

#[test]
fn already_authenticated_on_first_observation_navigates() {
    let mut c = controller();
    let effects = c.observe(&authenticated(), "/");
    assert_eq!(effects, vec![LoginEffect::Navigate("/".to_owned())]);
}

#[test]
fn loading_without_outcome_returns_to_idle() {
    let mut c = controller();
    c.observe(&loading(), "/");
    assert_eq!(c.phase(), LoginPhase::Pending);
    c.observe(&AuthSnapshot::default(), "/");
    assert_eq!(c.phase(), LoginPhase::Idle);
}

// =============================================================
// run_effects
// =============================================================

#[test]
fn run_effects_dispatches_in_order() {
    let sink = RecordingSink::default();
    run_effects(
        vec![
            LoginEffect::Login(creds("a@b.com", "pw")),
            notify("X"),
            LoginEffect::ClearError,
            LoginEffect::Navigate("/account".to_owned()),
        ],
        &sink,
    );
    assert_eq!(
        sink.calls.into_inner(),
        vec![
            "login:a@b.com:pw".to_owned(),
            "notify:X:toast--bottom-center".to_owned(),
            "clear".to_owned(),
            "navigate:/account".to_owned(),
        ]
    );
}

#[test]
fn full_failure_flow_clears_store_exactly_once() {
    let sink = RecordingSink::default();
    let mut c = controller();
    run_effects(c.submit(creds("a@b.com", "bad")), &sink);
    for snap in [loading(), failed("X"), failed("X"), AuthSnapshot::default(), AuthSnapshot::default()] {
        run_effects(c.observe(&snap, "/"), &sink);
    }
    let calls = sink.calls.into_inner();
    assert_eq!(calls.iter().filter(|c| c.as_str() == "clear").count(), 1);
    assert_eq!(calls.iter().filter(|c| c.starts_with("notify:")).count(), 1);
    assert_eq!(calls.iter().filter(|c| c.starts_with("login:")).count(), 1);
    assert_eq!(c.local_error(), Some("X"));
}
