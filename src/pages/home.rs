//! Storefront landing page and default post-login destination.

use leptos::prelude::*;
use leptos::tachys::view::any_view::IntoAny;

use crate::state::auth::AuthStore;

#[component]
pub fn HomePage() -> impl IntoView {
    let store = expect_context::<AuthStore>();
    let user_name = move || store.state().with(|s| s.user.as_ref().map(|u| u.name.clone()));

    view! {
        <div class="home-page">
            <h1>"Latest Products"</h1>
            {move || match user_name() {
                Some(name) => view! { <p class="home-page__user">"Signed in as " {name}</p> }.into_any(),
                None => view! { <a href="/login" class="btn">"Login"</a> }.into_any(),
            }}
        </div>
    }
}
