//! Notification overlay.
//!
//! SYSTEM CONTEXT
//! ==============
//! Mounted once by `App`. Anything with access to the `ToastState` signal can
//! queue a toast through [`push_toast`]; the host renders the queue and each
//! toast removes itself after its lifetime or when clicked.

use leptos::prelude::*;

use crate::state::toast::{ToastPosition, ToastState};

/// Queue `message` and schedule its dismissal after `ttl_ms`.
#[cfg_attr(not(feature = "hydrate"), allow(unused_variables))]
pub fn push_toast(toasts: RwSignal<ToastState>, message: &str, position: ToastPosition, ttl_ms: u64) {
    let Some(id) = toasts.try_update(|t| t.push(message, position)) else {
        return;
    };

    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        gloo_timers::future::sleep(std::time::Duration::from_millis(ttl_ms)).await;
        toasts.update(|t| t.dismiss(id));
    });
}

/// Renders queued toasts anchored by their position.
#[component]
pub fn ToastHost() -> impl IntoView {
    let toasts = expect_context::<RwSignal<ToastState>>();

    view! {
        <div class="toast-host" role="status" aria-live="polite">
            <For
                each=move || toasts.get().toasts
                key=|toast| toast.id
                children=move |toast| {
                    let id = toast.id;
                    let class = format!("toast toast--error {}", toast.position.css_class());
                    view! {
                        <div class=class on:click=move |_| toasts.update(|t| t.dismiss(id))>
                            {toast.message}
                        </div>
                    }
                }
            />
        </div>
    }
}
