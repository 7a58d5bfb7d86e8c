use std::sync::Arc;

use axum::extract::State;
use axum::routing::post;
use axum::{Json, Router};
use chrono::{Local, NaiveDate};
use serde::Deserialize;

use super::delivery::ReportSink;
use super::engine::ClassificationResult;
use super::service::{EstimateOutcome, EstimateService};
use super::snapshot::FeatureSnapshot;

/// Router builder exposing the estimation endpoints.
///
/// Malformed bodies (missing, or a non-boolean flag value) are rejected by
/// the `Json` extractor before the engine is reached; unknown keys inside
/// the snapshot are ignored.
pub fn estimate_router<S>(service: Arc<EstimateService<S>>) -> Router
where
    S: ReportSink + 'static,
{
    Router::new()
        .route("/api/v1/estimates/calculate", post(calculate_handler::<S>))
        .route("/api/v1/estimates/report", post(report_handler::<S>))
        .with_state(service)
}

pub(crate) async fn calculate_handler<S>(
    State(service): State<Arc<EstimateService<S>>>,
    Json(snapshot): Json<FeatureSnapshot>,
) -> Json<ClassificationResult>
where
    S: ReportSink + 'static,
{
    Json(service.estimate(&snapshot))
}

/// Body for the report endpoint. `features` is required: a request without
/// the flags object is a boundary error, not an all-false snapshot.
#[derive(Debug, Deserialize)]
pub struct ReportRequest {
    pub features: FeatureSnapshot,
    #[serde(default)]
    pub destination: Option<String>,
    #[serde(default)]
    pub prepared_on: Option<NaiveDate>,
}

pub(crate) async fn report_handler<S>(
    State(service): State<Arc<EstimateService<S>>>,
    Json(request): Json<ReportRequest>,
) -> Json<EstimateOutcome>
where
    S: ReportSink + 'static,
{
    let prepared_on = request
        .prepared_on
        .unwrap_or_else(|| Local::now().date_naive());
    Json(service.report(&request.features, request.destination.as_deref(), prepared_on))
}
