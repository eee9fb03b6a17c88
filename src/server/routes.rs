//! Route table and router assembly.

use axum::middleware;
use axum::routing::get;
use axum::Router;
use tower_http::services::ServeDir;

use super::handlers;
use super::AppState;

/// Navigable GET routes.
///
/// axum has no url-map introspection, so the sitemap and the `routes`
/// CLI command read this table instead. Alias paths repeat their
/// endpoint name.
pub const ROUTES: &[(&str, &str)] = &[
    ("/", "index"),
    ("/about", "about"),
    ("/acknowledgment", "acknowledgment"),
    ("/alive", "alive"),
    ("/contact", "contact"),
    ("/editorial-board", "editorial_board"),
    ("/favicon.ico", "favicon"),
    ("/health", "alive"),
    ("/humans.txt", "humans_txt"),
    ("/info", "info"),
    ("/management", "editorial_board"),
    ("/management-board", "editorial_board"),
    ("/robots.txt", "robots_txt"),
    ("/search", "search"),
    ("/sitemap", "sitemap"),
    ("/style.css", "css"),
];

/// Build the application router.
pub fn create_router(state: AppState) -> Router {
    let static_dir = state.settings.static_dir.clone();

    Router::new()
        .route("/", get(handlers::index))
        .route("/about", get(handlers::about))
        .route("/acknowledgment", get(handlers::acknowledgment))
        .route("/humans.txt", get(handlers::humans_txt))
        .route("/contact", get(handlers::contact))
        .route("/editorial-board", get(handlers::editorial_board))
        .route("/management-board", get(handlers::editorial_board))
        .route("/management", get(handlers::editorial_board))
        .route("/search", get(handlers::search))
        .route("/health", get(handlers::alive))
        .route("/alive", get(handlers::alive))
        .route("/info", get(handlers::info))
        .route("/robots.txt", get(handlers::robots_txt))
        .route("/favicon.ico", get(handlers::favicon))
        .route("/style.css", get(handlers::css))
        .route("/sitemap", get(handlers::sitemap))
        .nest_service("/static", ServeDir::new(static_dir))
        .fallback(handlers::not_found)
        .layer(middleware::from_fn_with_state(
            state.clone(),
            handlers::canonical_redirect,
        ))
        .with_state(state)
}
