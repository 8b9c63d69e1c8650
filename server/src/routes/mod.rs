//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! The host serves exactly one Leptos app: the post composer at `/`, its
//! compiled assets under `/pkg`, and a health check. There are no API routes;
//! the composer never talks back to the server after hydration.

use std::path::PathBuf;

use axum::Router;
use axum::http::StatusCode;
use axum::routing::get;
use leptos::config::LeptosOptions;
use leptos::prelude::*;
use leptos_axum::{LeptosRoutes, generate_route_list};
use tower_http::compression::CompressionLayer;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::error::ServerError;

/// Routes that do not depend on the Leptos build output.
pub fn base_routes() -> Router {
    Router::new().route("/healthz", get(healthz))
}

/// Leptos SSR frontend built from the workspace's Leptos configuration.
///
/// # Errors
///
/// Returns an error if the Leptos configuration cannot be loaded (missing or
/// malformed `[package.metadata.leptos]` / `[[workspace.metadata.leptos]]`).
pub fn leptos_app() -> Result<Router, ServerError> {
    let conf = get_configuration(None).map_err(|e| ServerError::Leptos(e.to_string()))?;
    Ok(leptos_router(conf.leptos_options))
}

/// Base routes + composer SSR + `/pkg` assets, traced and compressed.
pub fn leptos_router(leptos_options: LeptosOptions) -> Router {
    let routes = generate_route_list(composer::app::App);

    let ssr = Router::new()
        .leptos_routes(&leptos_options, routes, {
            let opts = leptos_options.clone();
            move || composer::app::shell(opts.clone())
        })
        .with_state(leptos_options.clone());

    // Leptos static assets (WASM, CSS, JS) live under the site root /pkg directory.
    let site_root_path = PathBuf::from(leptos_options.site_root.as_ref());

    base_routes()
        .merge(ssr)
        .nest_service("/pkg", ServeDir::new(site_root_path.join("pkg")))
        .layer(TraceLayer::new_for_http())
        .layer(CompressionLayer::new())
}

async fn healthz() -> StatusCode {
    StatusCode::OK
}

#[cfg(test)]
#[path = "mod_test.rs"]
mod tests;
