use crate::config::ServerConfig;
use crate::diagnostics::DatabaseSlot;
use crate::error::ServerResult;
use matcher::{AnswerMatcher, MatchConfig};
use metrics_exporter_prometheus::PrometheusHandle;
use pages::PageRegistry;
use std::sync::Arc;

/// Shared application state
#[derive(Clone)]
pub struct ServerState {
    /// Server configuration
    pub config: Arc<ServerConfig>,

    /// Documentation pages (immutable for the process lifetime)
    pub registry: Arc<PageRegistry>,

    /// Answer matcher over `registry`
    pub matcher: Arc<AnswerMatcher>,

    /// Optional database, probed by the diagnostics endpoint only
    pub database: DatabaseSlot,

    /// Prometheus render handle, present once a recorder is installed
    pub metrics: Option<PrometheusHandle>,
}

impl ServerState {
    /// Create server state over the bundled pages with no database attached
    pub fn new(config: ServerConfig) -> ServerResult<Self> {
        Self::with_registry(config, PageRegistry::builtin())
    }

    /// Create server state over an explicit page registry
    pub fn with_registry(config: ServerConfig, registry: Arc<PageRegistry>) -> ServerResult<Self> {
        let matcher = AnswerMatcher::with_config(Arc::clone(&registry), MatchConfig::default())?;

        Ok(Self {
            config: Arc::new(config),
            registry,
            matcher: Arc::new(matcher),
            database: DatabaseSlot::Absent,
            metrics: None,
        })
    }

    /// Attach a database capability
    pub fn with_database(mut self, database: DatabaseSlot) -> Self {
        self.database = database;
        self
    }

    /// Attach a Prometheus render handle
    pub fn with_metrics(mut self, handle: PrometheusHandle) -> Self {
        self.metrics = Some(handle);
        self
    }
}

/// Server metadata for the root endpoint
#[derive(Debug, serde::Serialize)]
pub struct ServerMetadata {
    pub message: String,
    pub version: String,
    pub pages: usize,
}
