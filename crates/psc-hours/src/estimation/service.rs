use std::sync::Arc;

use chrono::NaiveDate;
use serde::Serialize;

use super::delivery::ReportSink;
use super::engine::{ClassificationResult, EstimationEngine};
use super::report::{render_document, selected_features};
use super::snapshot::FeatureSnapshot;

/// Service composing the scoring engine, the report renderer, and the
/// outbound delivery sink.
pub struct EstimateService<S> {
    engine: Arc<EstimationEngine>,
    sink: Arc<S>,
}

impl<S> EstimateService<S>
where
    S: ReportSink + 'static,
{
    pub fn new(engine: Arc<EstimationEngine>, sink: Arc<S>) -> Self {
        Self { engine, sink }
    }

    /// Classify one snapshot. Pure: no state survives the call.
    pub fn estimate(&self, snapshot: &FeatureSnapshot) -> ClassificationResult {
        self.engine.classify(snapshot)
    }

    /// Classify, render the printable document, and optionally deliver it.
    ///
    /// A sink failure never discards the computed hours: it is reported in
    /// the outcome's `delivery` field instead of as an error.
    pub fn report(
        &self,
        snapshot: &FeatureSnapshot,
        destination: Option<&str>,
        prepared_on: NaiveDate,
    ) -> EstimateOutcome {
        let result = self.engine.classify(snapshot);
        let selections = selected_features(snapshot, self.engine.table());
        let document = render_document(&result, &selections, prepared_on);

        let delivery = match destination {
            None => DeliveryStatus::NotRequested,
            Some(destination) => match self.sink.deliver(destination, document.as_bytes()) {
                Ok(()) => DeliveryStatus::Delivered {
                    destination: destination.to_string(),
                },
                Err(err) => DeliveryStatus::Failed {
                    destination: destination.to_string(),
                    reason: err.to_string(),
                },
            },
        };

        EstimateOutcome {
            result,
            document,
            delivery,
        }
    }
}

/// Result of a report request: the computed hours, the rendered document,
/// and what happened to delivery.
#[derive(Debug, Clone, Serialize)]
pub struct EstimateOutcome {
    pub result: ClassificationResult,
    pub document: String,
    pub delivery: DeliveryStatus,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum DeliveryStatus {
    NotRequested,
    Delivered { destination: String },
    Failed { destination: String, reason: String },
}
