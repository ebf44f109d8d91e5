//! SSR server for the storefront login view.
//!
//! Renders the Leptos app with `leptos_axum` and serves the hydrate bundle
//! from the site root. Listen port comes from `PORT` (default 3000); the rest
//! of the site layout from `[package.metadata.leptos]` / `LEPTOS_*`.

use axum::Router;
use leptos::prelude::*;
use leptos_axum::{LeptosRoutes, generate_route_list};
use tower_http::trace::TraceLayer;

use storefront_login::app::{App, shell};
use storefront_login::config::{ConfigError, DEFAULT_PORT, parse_port};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt::init();

    let port = match std::env::var("PORT") {
        Ok(raw) => parse_port(&raw)?,
        Err(_) => DEFAULT_PORT,
    };

    let conf = get_configuration(None).map_err(|e| ConfigError::Leptos(e.to_string()))?;
    let leptos_options = conf.leptos_options;
    let routes = generate_route_list(App);

    let app = Router::new()
        .leptos_routes(&leptos_options, routes, {
            let opts = leptos_options.clone();
            move || shell(opts.clone())
        })
        .fallback(leptos_axum::file_and_error_handler(shell))
        .layer(TraceLayer::new_for_http())
        .with_state(leptos_options);

    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{port}")).await?;
    tracing::info!(%port, "storefront login listening");
    axum::serve(listener, app.into_make_service()).await?;
    Ok(())
}
