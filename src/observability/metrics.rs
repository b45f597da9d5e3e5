//! Metrics collection for `tsconfig-validator`.
//!
//! Counters go through the `metrics` facade, so a host application can
//! install its own recorder. The CLI installs a Prometheus recorder without
//! an HTTP listener and renders it to a textfile on request.

use std::sync::OnceLock;
use std::time::Duration;

use metrics::{counter, describe_counter, describe_histogram, histogram};
use metrics_exporter_prometheus::{PrometheusBuilder, PrometheusHandle};

use crate::config::ValidationReport;
use crate::error::ValidatorError;

/// Handle of the recorder installed by [`init_metrics`].
static HANDLE: OnceLock<PrometheusHandle> = OnceLock::new();

/// Installs the global Prometheus recorder and returns its render handle.
///
/// Repeated calls return the handle from the first call.
///
/// # Errors
///
/// Returns `ValidatorError::Io` if another recorder is already installed.
pub fn init_metrics() -> Result<PrometheusHandle, ValidatorError> {
    if let Some(handle) = HANDLE.get() {
        tracing::debug!("metrics already initialized, skipping");
        return Ok(handle.clone());
    }
    let handle = PrometheusBuilder::new()
        .install_recorder()
        .map_err(|e| ValidatorError::Io(std::io::Error::other(e.to_string())))?;
    describe_metrics();
    Ok(HANDLE.get_or_init(|| handle).clone())
}

/// Registers metric descriptions with the global recorder.
pub fn describe_metrics() {
    describe_counter!(
        "tsconfig_documents_validated_total",
        "Total number of configuration documents validated"
    );
    describe_counter!(
        "tsconfig_issues_total",
        "Total number of validation issues by kind"
    );
    describe_counter!(
        "tsconfig_load_failures_total",
        "Documents that could not be read or parsed"
    );
    describe_histogram!(
        "tsconfig_validation_duration_ms",
        "Load and validation duration in milliseconds"
    );
}

/// Records one validated document and its issues.
pub fn record_report(report: &ValidationReport, duration: Duration) {
    let outcome = if report.has_errors() {
        "invalid"
    } else {
        "valid"
    };
    counter!("tsconfig_documents_validated_total", "outcome" => outcome).increment(1);
    for issue in &report.issues {
        counter!("tsconfig_issues_total", "kind" => issue.kind.as_str()).increment(1);
    }
    histogram!("tsconfig_validation_duration_ms").record(duration.as_secs_f64() * 1000.0);
}

/// Records a document that never reached validation.
pub fn record_load_failure(exit_code: i32) {
    counter!("tsconfig_load_failures_total", "exit_code" => exit_code.to_string()).increment(1);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::validate;
    use crate::schema::SchemaTable;

    #[test]
    fn recording_without_recorder_is_a_noop() {
        let report = validate(&serde_json::json!({"bogus": 1}), SchemaTable::tsconfig());
        record_report(&report, Duration::from_millis(1));
        record_load_failure(3);
    }
}
