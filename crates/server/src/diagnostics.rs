//! Optional database diagnostics
//!
//! The documentation site does not need a database. Deployments may still
//! attach one, and `GET /test` reports whether it is reachable. The database
//! is modeled as an injected capability ([`DatabaseSlot`]) so the probe works
//! unchanged when nothing is attached. Every failure is folded into the
//! report; the probe itself never fails.

use std::any::Any;
use std::fmt;
use std::panic::{self, AssertUnwindSafe};
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::config::ServerConfig;

/// Longest error text copied into a report.
pub const MAX_ERROR_CHARS: usize = 50;

/// Most collection names listed in a report.
pub const MAX_COLLECTIONS: usize = 10;

pub const BACKEND_RUNNING: &str = "✅ Running";
pub const DB_MODULE_MISSING: &str = "❌ Database module not found (run enable-database first)";
pub const DB_NOT_INITIALIZED: &str = "⚠️  Available but not initialized";
pub const DB_AVAILABLE: &str = "✅ Available";
pub const DB_WORKING: &str = "✅ Connected & Working";
pub const SETTING_SET: &str = "✅ Set";
pub const SETTING_NOT_SET: &str = "❌ Not Set";

/// Failure reported by a database handle.
#[derive(Debug, Clone, thiserror::Error)]
#[error("{0}")]
pub struct ProbeError(pub String);

/// Read-only view of an attached database, used only for diagnostics.
#[async_trait]
pub trait DatabaseProbe: Send + Sync {
    /// Database name, when the driver exposes one.
    fn name(&self) -> Option<String>;

    /// Names of the collections (or tables) in the database.
    async fn list_collections(&self) -> Result<Vec<String>, ProbeError>;
}

/// Database capability injected at startup.
#[derive(Clone, Default)]
pub enum DatabaseSlot {
    /// No database support is compiled in or configured.
    #[default]
    Absent,
    /// Setting up the database failed; carries the error text.
    Failed(String),
    /// Database support is present but no handle was created.
    Uninitialized,
    /// A live handle.
    Connected(Arc<dyn DatabaseProbe>),
}

impl fmt::Debug for DatabaseSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DatabaseSlot::Absent => f.write_str("Absent"),
            DatabaseSlot::Failed(err) => f.debug_tuple("Failed").field(err).finish(),
            DatabaseSlot::Uninitialized => f.write_str("Uninitialized"),
            DatabaseSlot::Connected(_) => f.write_str("Connected(..)"),
        }
    }
}

impl DatabaseSlot {
    /// Short state label used by the readiness endpoint.
    pub fn label(&self) -> &'static str {
        match self {
            DatabaseSlot::Absent => "not_configured",
            DatabaseSlot::Failed(_) => "error",
            DatabaseSlot::Uninitialized => "uninitialized",
            DatabaseSlot::Connected(_) => "connected",
        }
    }
}

/// Body of `GET /test`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiagnosticReport {
    pub backend: String,
    pub database: String,
    pub database_url: String,
    pub database_name: String,
    pub connection_status: String,
    pub collections: Vec<String>,
}

/// Cut `message` to at most [`MAX_ERROR_CHARS`] characters.
pub fn truncate_error(message: &str) -> String {
    message.chars().take(MAX_ERROR_CHARS).collect()
}

// Empty values count as unset.
fn setting_label(value: &Option<String>) -> String {
    let is_set = value.as_deref().is_some_and(|v| !v.is_empty());
    let label = if is_set { SETTING_SET } else { SETTING_NOT_SET };
    label.to_string()
}

fn connected_error(message: &str) -> String {
    format!("⚠️  Connected but Error: {}", truncate_error(message))
}

fn panic_message(payload: Box<dyn Any + Send>) -> String {
    if let Some(message) = payload.downcast_ref::<&str>() {
        format!("panicked: {message}")
    } else if let Some(message) = payload.downcast_ref::<String>() {
        format!("panicked: {message}")
    } else {
        "panicked".to_string()
    }
}

/// Ask the driver for its collections. Driver panics and timeouts come back
/// as [`ProbeError`]s.
async fn list_collections(
    db: &Arc<dyn DatabaseProbe>,
    timeout: Duration,
) -> Result<Vec<String>, ProbeError> {
    let name = panic::catch_unwind(AssertUnwindSafe(|| db.name()))
        .map_err(|payload| ProbeError(panic_message(payload)))?;
    tracing::debug!(name = ?name, "probing database");

    let driver = Arc::clone(db);
    let handle = tokio::spawn(async move { driver.list_collections().await });
    let abort = handle.abort_handle();

    match tokio::time::timeout(timeout, handle).await {
        Ok(Ok(listed)) => listed,
        Ok(Err(err)) if err.is_panic() => Err(ProbeError(panic_message(err.into_panic()))),
        Ok(Err(err)) => Err(ProbeError(err.to_string())),
        Err(_) => {
            abort.abort();
            Err(ProbeError(format!("timed out after {}ms", timeout.as_millis())))
        }
    }
}

/// Probe the database slot and describe the result.
pub async fn probe_database(
    slot: &DatabaseSlot,
    config: &ServerConfig,
    timeout: Duration,
) -> DiagnosticReport {
    let mut report = DiagnosticReport {
        backend: BACKEND_RUNNING.to_string(),
        database: "❌ Not Available".to_string(),
        database_url: String::new(),
        database_name: String::new(),
        connection_status: "Not Connected".to_string(),
        collections: Vec::new(),
    };

    match slot {
        DatabaseSlot::Absent => {
            report.database = DB_MODULE_MISSING.to_string();
        }
        DatabaseSlot::Failed(err) => {
            tracing::warn!(error = %err, "database setup failed");
            report.database = format!("❌ Error: {}", truncate_error(err));
        }
        DatabaseSlot::Uninitialized => {
            report.database = DB_NOT_INITIALIZED.to_string();
        }
        DatabaseSlot::Connected(db) => {
            report.database = DB_AVAILABLE.to_string();
            report.connection_status = "Connected".to_string();

            match list_collections(db, timeout).await {
                Ok(collections) => {
                    report.collections = collections.into_iter().take(MAX_COLLECTIONS).collect();
                    report.database = DB_WORKING.to_string();
                }
                Err(err) => {
                    tracing::warn!(error = %err, "database probe failed");
                    report.database = connected_error(&err.0);
                }
            }
        }
    }

    // Settings are reported by presence only, never by value.
    report.database_url = setting_label(&config.database_url);
    report.database_name = setting_label(&config.database_name);
    report
}

#[cfg(test)]
mod tests {
    use super::*;

    struct FakeDb {
        collections: Result<Vec<String>, ProbeError>,
        delay: Duration,
    }

    #[async_trait]
    impl DatabaseProbe for FakeDb {
        fn name(&self) -> Option<String> {
            Some("docy".into())
        }

        async fn list_collections(&self) -> Result<Vec<String>, ProbeError> {
            tokio::time::sleep(self.delay).await;
            self.collections.clone()
        }
    }

    fn connected(collections: Result<Vec<String>, ProbeError>) -> DatabaseSlot {
        DatabaseSlot::Connected(Arc::new(FakeDb {
            collections,
            delay: Duration::ZERO,
        }))
    }

    const TIMEOUT: Duration = Duration::from_secs(1);

    #[test]
    fn truncate_is_char_safe() {
        let long = "é".repeat(80);
        let cut = truncate_error(&long);
        assert_eq!(cut.chars().count(), MAX_ERROR_CHARS);
        assert_eq!(truncate_error("short"), "short");
    }

    #[tokio::test]
    async fn absent_database_reports_missing_module() {
        let report = probe_database(&DatabaseSlot::Absent, &ServerConfig::default(), TIMEOUT).await;
        assert_eq!(report.backend, BACKEND_RUNNING);
        assert_eq!(report.database, DB_MODULE_MISSING);
        assert_eq!(report.connection_status, "Not Connected");
        assert_eq!(report.database_url, SETTING_NOT_SET);
        assert_eq!(report.database_name, SETTING_NOT_SET);
        assert!(report.collections.is_empty());
    }

    #[tokio::test]
    async fn failed_setup_error_is_truncated() {
        let slot = DatabaseSlot::Failed("x".repeat(200));
        let report = probe_database(&slot, &ServerConfig::default(), TIMEOUT).await;
        assert_eq!(report.database, format!("❌ Error: {}", "x".repeat(50)));
    }

    #[tokio::test]
    async fn uninitialized_database_is_reported() {
        let report =
            probe_database(&DatabaseSlot::Uninitialized, &ServerConfig::default(), TIMEOUT).await;
        assert_eq!(report.database, DB_NOT_INITIALIZED);
    }

    #[tokio::test]
    async fn working_database_lists_first_ten_collections() {
        let names: Vec<String> = (0..15).map(|i| format!("c{i}")).collect();
        let config = ServerConfig {
            database_url: Some("mongodb://db".into()),
            database_name: Some("docy".into()),
            ..Default::default()
        };
        let report = probe_database(&connected(Ok(names)), &config, TIMEOUT).await;
        assert_eq!(report.database, DB_WORKING);
        assert_eq!(report.connection_status, "Connected");
        assert_eq!(report.collections.len(), MAX_COLLECTIONS);
        assert_eq!(report.collections[0], "c0");
        assert_eq!(report.database_url, SETTING_SET);
        assert_eq!(report.database_name, SETTING_SET);
    }

    #[tokio::test]
    async fn listing_error_is_reported_and_truncated() {
        let slot = connected(Err(ProbeError("y".repeat(120))));
        let report = probe_database(&slot, &ServerConfig::default(), TIMEOUT).await;
        assert_eq!(
            report.database,
            format!("⚠️  Connected but Error: {}", "y".repeat(50))
        );
        assert_eq!(report.connection_status, "Connected");
        assert!(report.collections.is_empty());
    }

    struct PanickingDb {
        in_name: bool,
    }

    #[async_trait]
    impl DatabaseProbe for PanickingDb {
        fn name(&self) -> Option<String> {
            if self.in_name {
                panic!("driver lost its name");
            }
            None
        }

        async fn list_collections(&self) -> Result<Vec<String>, ProbeError> {
            panic!("driver crashed while listing");
        }
    }

    #[tokio::test]
    async fn panicking_listing_is_reported() {
        let slot = DatabaseSlot::Connected(Arc::new(PanickingDb { in_name: false }));
        let report = probe_database(&slot, &ServerConfig::default(), TIMEOUT).await;
        assert_eq!(report.connection_status, "Connected");
        assert_eq!(
            report.database,
            connected_error("panicked: driver crashed while listing")
        );
        assert!(report.collections.is_empty());
    }

    #[tokio::test]
    async fn panicking_name_is_reported() {
        let slot = DatabaseSlot::Connected(Arc::new(PanickingDb { in_name: true }));
        let report = probe_database(&slot, &ServerConfig::default(), TIMEOUT).await;
        assert!(report
            .database
            .starts_with("⚠️  Connected but Error: panicked: driver lost its name"));
        assert!(report.collections.is_empty());
    }

    #[tokio::test]
    async fn empty_settings_count_as_unset() {
        let config = ServerConfig {
            database_url: Some(String::new()),
            database_name: Some("docy".into()),
            ..Default::default()
        };
        let report = probe_database(&DatabaseSlot::Absent, &config, TIMEOUT).await;
        assert_eq!(report.database_url, SETTING_NOT_SET);
        assert_eq!(report.database_name, SETTING_SET);
    }

    #[tokio::test(start_paused = true)]
    async fn slow_database_times_out() {
        let slot = DatabaseSlot::Connected(Arc::new(FakeDb {
            collections: Ok(vec!["late".into()]),
            delay: Duration::from_secs(60),
        }));
        let report = probe_database(&slot, &ServerConfig::default(), TIMEOUT).await;
        assert!(report.database.starts_with("⚠️  Connected but Error: timed out"));
        assert!(report.collections.is_empty());
    }
}
