//! PNM Gardeners site library.
//!
//! Server-rendered pages over the REST backend. Every page degrades to the
//! fallback content when the backend is unreachable, so the router can be
//! mounted and exercised without one.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod admin;
pub mod api;
pub mod config;
pub mod content;
pub mod error;
pub mod filters;
pub mod forms;
pub mod gallery;
pub mod listing;
pub mod map;
pub mod middleware;
pub mod routes;
pub mod state;

use axum::{Router, middleware as axum_middleware};
use tower_http::{services::ServeDir, trace::TraceLayer};

use state::AppState;

/// Build the application router with every page, static files and layers.
pub fn app(state: AppState) -> Router {
    let static_dir = ServeDir::new(&state.config().static_dir);

    Router::new()
        .merge(routes::routes())
        .nest_service("/static", static_dir)
        .with_state(state)
        .layer(axum_middleware::from_fn(middleware::security_headers_middleware))
        .layer(TraceLayer::new_for_http())
        .layer(axum_middleware::from_fn(middleware::request_id_middleware))
}
