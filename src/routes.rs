//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! The portfolio is a static page enhanced by the `client` WASM package.
//! This router serves the page files at `/` and the compiled package under
//! `/pkg`; it carries no application behavior of its own.

use axum::Router;
use axum::http::StatusCode;
use axum::routing::get;
use tower_http::compression::CompressionLayer;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::config::ServerConfig;

#[cfg(test)]
#[path = "routes_test.rs"]
mod tests;

/// Build the preview router for `config`.
pub fn app(config: &ServerConfig) -> Router {
    let site = ServeDir::new(&config.site_dir).append_index_html_on_directories(true);

    Router::new()
        .route("/healthz", get(healthz))
        .nest_service("/pkg", ServeDir::new(&config.pkg_dir))
        .fallback_service(site)
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
}

async fn healthz() -> StatusCode {
    StatusCode::OK
}
