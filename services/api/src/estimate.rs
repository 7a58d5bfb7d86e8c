use crate::infra::LoggingReportSink;
use chrono::{Local, NaiveDate};
use clap::Args;
use psc_hours::error::AppError;
use psc_hours::estimation::{
    render_document, selected_features, EstimationEngine, FeatureFlag, FeatureSnapshot, ReportSink,
};

#[derive(Args, Debug)]
pub(crate) struct EstimateArgs {
    /// Feature flag key to enable (repeatable), e.g. --flag bre_include --flag housing
    #[arg(long = "flag", value_name = "KEY")]
    pub(crate) flags: Vec<String>,
    /// Print the classification result as JSON instead of the report
    #[arg(long)]
    pub(crate) json: bool,
    /// Deliver the rendered report to this address through the logging sink
    #[arg(long, value_name = "ADDRESS")]
    pub(crate) deliver_to: Option<String>,
    /// Report date (YYYY-MM-DD, defaults to today)
    #[arg(long, value_parser = parse_date)]
    pub(crate) prepared_on: Option<NaiveDate>,
}

fn parse_date(raw: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d")
        .map_err(|err| format!("failed to parse '{raw}' as YYYY-MM-DD ({err})"))
}

pub(crate) fn run_estimate(args: EstimateArgs) -> Result<(), AppError> {
    let engine = EstimationEngine::standard();
    engine.table().validate()?;

    let mut snapshot = FeatureSnapshot::default();
    for key in &args.flags {
        match FeatureFlag::from_key(key) {
            Some(flag) => snapshot.set(flag, true),
            // Mirrors the request boundary: unrecognized identifiers are
            // ignored, not fatal.
            None => eprintln!("ignoring unrecognized feature key '{key}'"),
        }
    }

    let result = engine.classify(&snapshot);

    if args.json {
        println!("{}", serde_json::to_string_pretty(&result)?);
        return Ok(());
    }

    let prepared_on = args
        .prepared_on
        .unwrap_or_else(|| Local::now().date_naive());
    let selections = selected_features(&snapshot, engine.table());
    let document = render_document(&result, &selections, prepared_on);
    print!("{document}");

    if let Some(destination) = &args.deliver_to {
        match LoggingReportSink.deliver(destination, document.as_bytes()) {
            Ok(()) => println!("\nReport delivered to {destination}"),
            Err(err) => println!("\nHours computed, but delivery failed: {err}"),
        }
    }

    Ok(())
}

pub(crate) fn run_features() {
    for flag in FeatureFlag::ALL {
        println!("{:<26} {}", flag.key(), flag.label());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_date_accepts_iso_dates() {
        let date = parse_date(" 2026-08-06 ").expect("valid date");
        assert_eq!(date, NaiveDate::from_ymd_opt(2026, 8, 6).expect("valid"));
    }

    #[test]
    fn parse_date_rejects_other_formats() {
        assert!(parse_date("08/06/2026").is_err());
    }
}
