//! Database handle seam.
//!
//! The query layer lives outside this crate; the front end only needs
//! liveness for the health check and connection metadata for the info
//! page.

use std::time::Duration;

use async_trait::async_trait;
use tokio::net::TcpStream;
use tokio::time::timeout;
use tracing::debug;

use crate::config::DbSettings;

/// Liveness and identity of the backing database.
#[async_trait]
pub trait Database: Send + Sync {
    /// Whether the database currently answers connections.
    async fn is_alive(&self) -> bool;

    /// Connection metadata lines for the info page.
    fn summary(&self) -> String;
}

/// Probes the configured server with a bounded TCP connect.
pub struct PingDatabase {
    settings: DbSettings,
}

impl PingDatabase {
    pub fn new(settings: DbSettings) -> Self {
        Self { settings }
    }
}

#[async_trait]
impl Database for PingDatabase {
    async fn is_alive(&self) -> bool {
        let addr = format!("{}:{}", self.settings.host, self.settings.port);
        match timeout(Duration::from_secs(2), TcpStream::connect(&addr)).await {
            Ok(Ok(_)) => true,
            Ok(Err(err)) => {
                debug!("database probe to {} failed: {}", addr, err);
                false
            }
            Err(_) => {
                debug!("database probe to {} timed out", addr);
                false
            }
        }
    }

    fn summary(&self) -> String {
        let s = &self.settings;
        format!(
            "Connection: postgres://{}@{}:{}/{}\n\
             User: {}\n\
             Read only: {}\n\
             Read and write to userdb: {}\n\
             Read and write to knowls: {}",
            s.user,
            s.host,
            s.port,
            s.name,
            s.user,
            s.read_only,
            s.read_and_write_userdb,
            s.read_and_write_knowls
        )
    }
}

/// Fixed-answer handle for tests and offline development.
pub struct StaticDatabase {
    alive: bool,
}

impl StaticDatabase {
    pub fn new(alive: bool) -> Self {
        Self { alive }
    }
}

#[async_trait]
impl Database for StaticDatabase {
    async fn is_alive(&self) -> bool {
        self.alive
    }

    fn summary(&self) -> String {
        "Connection: static\nUser: -\nRead only: true".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_static_database_reports_fixed_answer() {
        assert!(StaticDatabase::new(true).is_alive().await);
        assert!(!StaticDatabase::new(false).is_alive().await);
    }

    #[test]
    fn test_ping_summary_lists_connection_metadata() {
        let db = PingDatabase::new(DbSettings::default());
        let summary = db.summary();
        assert!(summary.contains("Connection: postgres://"));
        assert!(summary.contains("Read only:"));
    }
}
