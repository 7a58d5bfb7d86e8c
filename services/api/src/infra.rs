use metrics_exporter_prometheus::PrometheusHandle;
use psc_hours::estimation::{DeliveryError, ReportSink};
use std::sync::atomic::AtomicBool;
use std::sync::Arc;
use tracing::info;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

/// Sink that records dispatched reports in the service log. Deployments
/// that send real documents (mail, PDF hand-off) swap this implementation
/// at the ReportSink seam.
#[derive(Debug, Default, Clone)]
pub(crate) struct LoggingReportSink;

impl ReportSink for LoggingReportSink {
    fn deliver(&self, destination: &str, document: &[u8]) -> Result<(), DeliveryError> {
        info!(%destination, bytes = document.len(), "estimate report dispatched");
        Ok(())
    }
}
