//! Login page: email + password form backed by the shared auth store.
//!
//! SYSTEM CONTEXT
//! ==============
//! The page owns the form fields and a `LoginController`. Store changes are
//! fed to the controller from a single effect; whatever effects it returns
//! (navigate, toast, clear the store error) run through [`PageEffects`].

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use leptos::prelude::*;
use leptos_meta::Title;
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_location, use_navigate};

use crate::components::toast_host::push_toast;
use crate::config::LoginConfig;
use crate::state::auth::AuthStore;
use crate::state::login::{AuthSnapshot, Credentials, LoginController, LoginEffects, run_effects};
use crate::state::toast::{ToastPosition, ToastState};
use crate::util::redirect::resolve_redirect;

fn submit_label(loading: bool) -> &'static str {
    if loading { "Logging in..." } else { "LOGIN" }
}

/// Binds controller effects to the store, the toast queue and the router.
#[derive(Clone)]
struct PageEffects<N> {
    store: AuthStore,
    toasts: RwSignal<ToastState>,
    navigate: N,
    config: LoginConfig,
}

impl<N> LoginEffects for PageEffects<N>
where
    N: Fn(&str, NavigateOptions),
{
    fn login(&self, credentials: Credentials) {
        self.store
            .login(self.config.login_endpoint.clone(), credentials.identifier, credentials.secret);
    }

    fn clear_error(&self) {
        self.store.clear_error();
    }

    fn navigate(&self, path: &str) {
        (self.navigate)(path, NavigateOptions::default());
    }

    fn notify(&self, message: &str, position: ToastPosition) {
        push_toast(self.toasts, message, position, self.config.toast_ttl_ms);
    }
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let store = expect_context::<AuthStore>();
    let toasts = expect_context::<RwSignal<ToastState>>();
    let config = expect_context::<LoginConfig>();
    let location = use_location();

    let credentials = RwSignal::new(Credentials::default());
    let controller = RwSignal::new(LoginController::new(
        config.toast_position,
        config.block_resubmit_while_pending,
    ));
    let redirect = Memo::new(move |_| resolve_redirect(&location.search.get()));
    let loading = Memo::new(move |_| store.state().with(|s| s.loading));
    let register_path = config.register_path.clone();

    let effects = PageEffects { store, toasts, navigate: use_navigate(), config };

    let observer_effects = effects.clone();
    Effect::new(move || {
        let snapshot = store.state().with(|s| AuthSnapshot::from(s));
        let target = redirect.get();
        let pending = controller
            .try_update(|c| c.observe(&snapshot, &target))
            .unwrap_or_default();
        run_effects(pending, &observer_effects);
    });

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let submitted = credentials.get_untracked();
        let pending = controller.try_update(|c| c.submit(submitted)).unwrap_or_default();
        run_effects(pending, &effects);
    };

    let local_error = move || controller.with(|c| c.local_error().map(str::to_owned));

    view! {
        <Title text="Login"/>
        <div class="row wrapper">
            <div class="col-10 col-lg-5">
                <form class="shadow-lg" on:submit=on_submit>
                    <h1 class="mb-3">"Login"</h1>

                    <Show when=move || local_error().is_some()>
                        <p class="text-danger">{move || local_error().unwrap_or_default()}</p>
                    </Show>

                    <div class="form-group">
                        <label for="email_field">"Email"</label>
                        <input
                            type="email"
                            id="email_field"
                            class="form-control"
                            required=true
                            prop:value=move || credentials.with(|c| c.identifier.clone())
                            on:input=move |ev| {
                                credentials.update(|c| c.identifier = event_target_value(&ev));
                            }
                        />
                    </div>

                    <div class="form-group">
                        <label for="password_field">"Password"</label>
                        <input
                            type="password"
                            id="password_field"
                            class="form-control"
                            required=true
                            prop:value=move || credentials.with(|c| c.secret.clone())
                            on:input=move |ev| {
                                credentials.update(|c| c.secret = event_target_value(&ev));
                            }
                        />
                    </div>

                    <button
                        id="login_button"
                        type="submit"
                        class="btn btn-block py-3"
                        disabled=move || loading.get()
                    >
                        {move || submit_label(loading.get())}
                    </button>

                    <a href=register_path class="float-right mt-3">
                        "New User?"
                    </a>
                </form>
            </div>
        </div>
    }
}
