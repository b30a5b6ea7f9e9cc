//! Logging and metrics wiring
//!
//! Tracing output goes through `tracing-subscriber` with an env-filter built
//! from `log_level`. Metrics use the `metrics` facade with a Prometheus
//! recorder; the matcher reports into it through [`PrometheusMatchMetrics`].

use std::sync::Arc;
use std::time::Duration;

use matcher::{set_match_metrics, MatchMetrics, MatchOutcome};
use metrics_exporter_prometheus::{PrometheusBuilder, PrometheusHandle};
use tracing_subscriber::EnvFilter;

use crate::config::{LogFormat, ServerConfig};

/// Install the global tracing subscriber
///
/// Does nothing if a subscriber is already installed.
pub fn init_tracing(config: &ServerConfig) {
    let filter = EnvFilter::try_new(&config.log_level).unwrap_or_else(|err| {
        eprintln!("invalid log_level {:?} ({err}), falling back to info", config.log_level);
        EnvFilter::new("info")
    });

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_thread_ids(true)
        .with_thread_names(true);

    let result = match config.log_format {
        LogFormat::Json => builder.json().try_init(),
        LogFormat::Text => builder.try_init(),
    };
    if result.is_err() {
        tracing::debug!("tracing subscriber already installed");
    }
}

/// Install the Prometheus recorder and route matcher metrics into it
pub fn install_metrics() -> anyhow::Result<PrometheusHandle> {
    let handle = PrometheusBuilder::new().install_recorder()?;
    set_match_metrics(Some(Arc::new(PrometheusMatchMetrics)));
    Ok(handle)
}

/// Matcher metrics reported through the `metrics` facade
#[derive(Debug, Default, Clone, Copy)]
pub struct PrometheusMatchMetrics;

impl MatchMetrics for PrometheusMatchMetrics {
    fn record_ask(&self, latency: Duration, outcome: MatchOutcome) {
        metrics::counter!("docy_ask_total", "outcome" => outcome.as_str()).increment(1);
        metrics::histogram!("docy_ask_duration_seconds").record(latency.as_secs_f64());
        if let MatchOutcome::Matched(sources) = outcome {
            metrics::histogram!("docy_ask_sources").record(sources as f64);
        }
    }
}
