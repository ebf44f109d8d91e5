//! # storefront-login
//!
//! Leptos + WASM login view for the storefront frontend.
//!
//! The view collects credentials, dispatches the login action on the shared
//! auth store, and redirects once the store reports an authenticated session.
//! Submission and error surfacing run through an explicit state machine in
//! [`state::login`] so the transition logic is testable without a browser.

pub mod app;
pub mod components;
pub mod config;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// Browser entry point: installs logging and hydrates the server-rendered body.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    if let Err(e) = console_log::init_with_level(log::Level::Debug) {
        web_sys::console::warn_1(&format!("console logger unavailable: {e}").into());
    }
    leptos::mount::hydrate_body(app::App);
}
