//! Professional-services hours estimation for event-management projects.
//!
//! The core is a table-driven rule engine mapping boolean project feature
//! flags to categorized hour contributions per service module. Everything
//! around it (HTTP boundary, report rendering, delivery) consumes the
//! engine's output and carries no decision logic of its own.

pub mod config;
pub mod error;
pub mod estimation;
pub mod telemetry;
