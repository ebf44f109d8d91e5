//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::toast_host::ToastHost;
use crate::config::LoginConfig;
use crate::pages::{home::HomePage, login::LoginPage};
use crate::state::auth::AuthStore;
use crate::state::toast::ToastState;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the auth store, toast queue and login configuration, probes for
/// an existing session, and sets up client-side routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let config = LoginConfig::default();
    let store = AuthStore::new();
    let toasts = RwSignal::new(ToastState::default());

    store.load_session(config.profile_endpoint.clone());

    provide_context(config);
    provide_context(store);
    provide_context(toasts);

    view! {
        <Title text="Storefront"/>

        <Router>
            <main>
                <Routes fallback=|| "Page not found.".into_view()>
                    <Route path=StaticSegment("login") view=LoginPage/>
                    <Route path=StaticSegment("") view=HomePage/>
                </Routes>
            </main>
        </Router>
        <ToastHost/>
    }
}
