//! Web server for the seminar listing site.
//!
//! Provides:
//! - The browse/refine search pages built on `crate::forms`
//! - A handful of static pages, redirects and error pages
//! - A health check delegating to the database handle
//! - An info page with host, database and git metadata

mod handlers;
mod routes;
pub mod templates;

pub use routes::{create_router, ROUTES};

use std::net::SocketAddr;
use std::sync::Arc;

use crate::config::Settings;
use crate::db::{Database, PingDatabase};
use crate::git_info::GitInfo;

/// Shared state for the web server.
#[derive(Clone)]
pub struct AppState {
    pub db: Arc<dyn Database>,
    pub settings: Arc<Settings>,
}

impl AppState {
    pub fn new(settings: &Settings, db: Arc<dyn Database>) -> Self {
        Self {
            db,
            settings: Arc::new(settings.clone()),
        }
    }

    pub fn from_settings(settings: &Settings) -> Self {
        let db = Arc::new(PingDatabase::new(settings.db.clone()));
        Self::new(settings, db)
    }
}

/// Start the web server.
pub async fn serve(settings: &Settings, host: &str, port: u16) -> anyhow::Result<()> {
    // Collect the git banner before the first request needs it.
    let git = GitInfo::cached();
    tracing::debug!("serving revision {}", git.rev);

    let state = AppState::from_settings(settings);
    let app = create_router(state);

    let addr: SocketAddr = format!("{}:{}", host, port).parse()?;
    tracing::info!("Starting server at http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
