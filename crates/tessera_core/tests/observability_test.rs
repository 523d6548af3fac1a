//! Tests for metrics exporter selection and lifecycle.

use tessera_core::observability::{
    DEFAULT_OTLP_ENDPOINT, MetricsExporter, ObservabilityConfig, init_observability,
    shutdown_observability,
};

#[test]
fn test_otlp_selected_case_insensitively() {
    assert_eq!(
        MetricsExporter::from_values(Some(" OTLP "), Some("http://collector:4318")),
        MetricsExporter::Otlp {
            endpoint: "http://collector:4318".to_string()
        }
    );
}

#[test]
fn test_otlp_endpoint_defaults() {
    assert_eq!(
        MetricsExporter::from_values(Some("otlp"), None),
        MetricsExporter::Otlp {
            endpoint: DEFAULT_OTLP_ENDPOINT.to_string()
        }
    );
}

#[test]
fn test_anything_else_is_stdout() {
    assert_eq!(MetricsExporter::from_values(None, None), MetricsExporter::Stdout);
    assert_eq!(
        MetricsExporter::from_values(Some("jaeger"), Some("http://x")),
        MetricsExporter::Stdout
    );
}

#[test]
fn test_init_then_shutdown_completes() {
    // Nothing is recorded here, so the stdout exporter has nothing to print.
    let config = ObservabilityConfig {
        service_name: "tessera-test",
        export_interval: std::time::Duration::from_secs(3600),
        exporter: MetricsExporter::Stdout,
    };
    shutdown_observability();
    init_observability(&config).unwrap();
    init_observability(&config).unwrap();
    shutdown_observability();
}
