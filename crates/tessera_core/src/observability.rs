//! OpenTelemetry metrics bootstrap.
//!
//! The fetch stage records `tessera.fetch.success` and `tessera.fetch.failure`
//! on the global meter provider. Nothing is exported until
//! [`init_observability`] installs one, and without the `metrics` feature
//! installation is skipped entirely.
//!
//! Readers export on an interval, so short-lived processes must call
//! [`shutdown_observability`] before exiting to deliver what was recorded.
//! The stdout exporter prints to stdout and interleaves with any JSON the
//! process writes there; pipelines that parse stdout should export over OTLP.

use std::time::Duration;
use tessera_error::ConfigError;
use tracing::{info, instrument};

/// Collector used when `OTEL_EXPORTER=otlp` and no endpoint is set.
pub const DEFAULT_OTLP_ENDPOINT: &str = "http://localhost:4318";

/// Where metrics are sent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MetricsExporter {
    /// Print periodic snapshots to stdout.
    Stdout,
    /// Push to an OTLP/HTTP collector.
    Otlp {
        /// Collector endpoint
        endpoint: String,
    },
}

impl MetricsExporter {
    /// Choose an exporter from the `OTEL_EXPORTER` and
    /// `OTEL_EXPORTER_OTLP_ENDPOINT` values. Anything other than `otlp`
    /// selects stdout.
    pub fn from_values(exporter: Option<&str>, endpoint: Option<&str>) -> Self {
        match exporter.map(str::trim) {
            Some(name) if name.eq_ignore_ascii_case("otlp") => MetricsExporter::Otlp {
                endpoint: endpoint.unwrap_or(DEFAULT_OTLP_ENDPOINT).to_string(),
            },
            _ => MetricsExporter::Stdout,
        }
    }
}

/// Metrics settings for one process.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ObservabilityConfig {
    /// Reported as `service.name`
    pub service_name: &'static str,
    /// How often readers export
    pub export_interval: Duration,
    /// Export target
    pub exporter: MetricsExporter,
}

impl ObservabilityConfig {
    /// Settings read from the standard OpenTelemetry environment variables,
    /// exporting once a minute.
    pub fn from_env(service_name: &'static str) -> Self {
        let exporter = std::env::var("OTEL_EXPORTER").ok();
        let endpoint = std::env::var("OTEL_EXPORTER_OTLP_ENDPOINT").ok();
        Self {
            service_name,
            export_interval: Duration::from_secs(60),
            exporter: MetricsExporter::from_values(exporter.as_deref(), endpoint.as_deref()),
        }
    }
}

/// Provider installed by [`init_observability`], kept for shutdown.
#[cfg(feature = "metrics")]
static PROVIDER: std::sync::OnceLock<opentelemetry_sdk::metrics::SdkMeterProvider> =
    std::sync::OnceLock::new();

/// Install the global meter provider described by `config`.
///
/// Only the first call installs a provider; later calls are logged and
/// ignored.
///
/// # Errors
///
/// Returns a configuration error if the OTLP exporter cannot be built.
#[cfg(feature = "metrics")]
#[instrument(skip_all, fields(service_name = config.service_name))]
pub fn init_observability(config: &ObservabilityConfig) -> Result<(), ConfigError> {
    use opentelemetry::{KeyValue, global};
    use opentelemetry_otlp::{MetricExporter as OtlpExporter, WithExportConfig};
    use opentelemetry_sdk::{
        Resource,
        metrics::{PeriodicReader, SdkMeterProvider},
    };
    use opentelemetry_stdout::MetricExporter as StdoutExporter;
    use tessera_error::ConfigErrorKind;

    if PROVIDER.get().is_some() {
        info!("Meter provider already installed");
        return Ok(());
    }

    let resource = Resource::builder_empty()
        .with_attributes([KeyValue::new("service.name", config.service_name)])
        .build();

    let provider = match &config.exporter {
        MetricsExporter::Otlp { endpoint } => {
            info!(endpoint = %endpoint, "Using OTLP metrics exporter");
            let exporter = OtlpExporter::builder()
                .with_http()
                .with_endpoint(endpoint)
                .with_timeout(Duration::from_secs(10))
                .build()
                .map_err(|e| ConfigError::new(ConfigErrorKind::Exporter(e.to_string())))?;
            let reader = PeriodicReader::builder(exporter)
                .with_interval(config.export_interval)
                .build();
            SdkMeterProvider::builder()
                .with_resource(resource)
                .with_reader(reader)
                .build()
        }
        MetricsExporter::Stdout => {
            info!("Using stdout metrics exporter");
            let reader = PeriodicReader::builder(StdoutExporter::default())
                .with_interval(config.export_interval)
                .build();
            SdkMeterProvider::builder()
                .with_resource(resource)
                .with_reader(reader)
                .build()
        }
    };

    global::set_meter_provider(provider.clone());
    if PROVIDER.set(provider).is_err() {
        info!("Meter provider installed concurrently, keeping the first");
    }
    info!(
        interval_secs = config.export_interval.as_secs(),
        "Meter provider registered globally"
    );
    Ok(())
}

/// Metrics are compiled out; logs and returns.
///
/// # Errors
///
/// Never fails.
#[cfg(not(feature = "metrics"))]
#[instrument(skip_all, fields(service_name = config.service_name))]
pub fn init_observability(config: &ObservabilityConfig) -> Result<(), ConfigError> {
    info!(exporter = ?config.exporter, "Metrics feature disabled, skipping meter provider");
    Ok(())
}

/// Flush pending metrics and shut the installed provider down.
///
/// Safe to call without a prior [`init_observability`].
#[cfg(feature = "metrics")]
#[instrument]
pub fn shutdown_observability() {
    match PROVIDER.get() {
        Some(provider) => match provider.shutdown() {
            Ok(()) => info!("Metrics flushed and provider shut down"),
            Err(e) => tracing::warn!(error = %e, "Meter provider shutdown failed"),
        },
        None => info!("No meter provider installed"),
    }
}

/// Metrics are compiled out; nothing to flush.
#[cfg(not(feature = "metrics"))]
#[instrument]
pub fn shutdown_observability() {
    info!("Metrics feature disabled, nothing to shut down");
}
