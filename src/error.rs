//! Error taxonomy for the web front end.
//!
//! Rendering is pure, so errors only arise at the edges: the database
//! liveness probe and root-level static files.

use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};
use thiserror::Error;

use crate::server::templates;

/// Errors surfaced by request handlers.
#[derive(Debug, Error)]
pub enum AppError {
    /// The database handle did not answer the liveness probe.
    #[error("database is offline")]
    DatabaseOffline,

    /// A root-level static file is missing from the static directory.
    #[error("static file {0} not found")]
    StaticFileMissing(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            AppError::DatabaseOffline => {
                (StatusCode::SERVICE_UNAVAILABLE, Html(templates::error_503())).into_response()
            }
            AppError::StaticFileMissing(name) => {
                tracing::error!("root static file {} not found!", name);
                let messages = [format!("static file {} not found.", name)];
                (
                    StatusCode::NOT_FOUND,
                    Html(templates::not_found_404(&messages)),
                )
                    .into_response()
            }
            AppError::Io(err) => {
                tracing::error!("500 error: {}", err);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Html(templates::error_500()),
                )
                    .into_response()
            }
        }
    }
}
