//! Feature-to-hours estimation.
//!
//! The rule [`catalog`] is static configuration validated once at startup;
//! the [`engine`] is a pure function from a [`FeatureSnapshot`] to a
//! [`ClassificationResult`]; [`report`] and [`delivery`] are the outbound
//! collaborator seams.

pub mod catalog;
pub mod delivery;
pub mod domain;
pub mod engine;
pub mod report;
pub mod router;
pub mod service;
pub mod snapshot;

pub use catalog::{CatalogError, Rule, RuleTable};
pub use delivery::{DeliveryError, ReportSink};
pub use domain::{FeatureFlag, JustificationCategory, ServiceModule};
pub use engine::{BreakdownItem, ClassificationResult, EstimationEngine, ModuleBreakdown};
pub use report::{render_document, selected_features, ModuleFeatureGroup};
pub use router::{estimate_router, ReportRequest};
pub use service::{DeliveryStatus, EstimateOutcome, EstimateService};
pub use snapshot::FeatureSnapshot;
