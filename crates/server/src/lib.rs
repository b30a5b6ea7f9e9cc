//! Docy Server - HTTP REST API for the Docy documentation site
//!
//! This crate serves the static documentation pages and the keyword-based
//! question answering over them. It supports:
//!
//! - **Pages**: list all pages or fetch one by slug
//! - **Ask**: answer a free-text question with links to matching pages
//! - **Diagnostics**: report whether an optional database is reachable
//! - **Health & Metrics**: liveness/readiness probes and Prometheus metrics
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use server::ServerConfig;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = ServerConfig::load()?;
//!     server::start_server(config).await?;
//!     Ok(())
//! }
//! ```
//!
//! # API Endpoints
//!
//! - `GET /` - Backend status message
//! - `GET /api/pages` - List documentation pages
//! - `GET /api/pages/{slug}` - Get a page by slug
//! - `POST /api/ask` - Ask a question about the docs
//! - `GET /test` - Database diagnostics
//! - `GET /health` - Liveness probe
//! - `GET /ready` - Readiness probe
//! - `GET /metrics` - Prometheus metrics

pub mod config;
pub mod diagnostics;
pub mod error;
pub mod middleware;
pub mod routes;
pub mod server;
pub mod state;
pub mod telemetry;

pub use config::ServerConfig;
pub use diagnostics::{DatabaseProbe, DatabaseSlot, DiagnosticReport, ProbeError};
pub use error::{ServerError, ServerResult};
pub use server::{build_router, serve, start_server};
pub use state::ServerState;
