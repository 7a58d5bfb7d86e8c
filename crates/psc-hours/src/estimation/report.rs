use chrono::NaiveDate;
use serde::Serialize;

use super::catalog::RuleTable;
use super::domain::ServiceModule;
use super::engine::ClassificationResult;
use super::snapshot::FeatureSnapshot;

/// Human-readable labels of the selected features, grouped by module.
#[derive(Debug, Clone, Serialize)]
pub struct ModuleFeatureGroup {
    pub module: ServiceModule,
    pub module_label: &'static str,
    pub features: Vec<&'static str>,
}

/// Collect the selected feature labels per module, in canonical module
/// order. Modules with nothing selected are omitted.
pub fn selected_features(snapshot: &FeatureSnapshot, table: &RuleTable) -> Vec<ModuleFeatureGroup> {
    ServiceModule::ALL
        .into_iter()
        .filter_map(|module| {
            let features: Vec<&'static str> = table
                .rules()
                .iter()
                .filter(|rule| rule.module == module && snapshot.get(rule.flag))
                .map(|rule| rule.flag.label())
                .collect();
            (!features.is_empty()).then_some(ModuleFeatureGroup {
                module,
                module_label: module.label(),
                features,
            })
        })
        .collect()
}

/// Render the printable estimate document.
///
/// Plain text on purpose: the delivery seam receives opaque bytes, and the
/// HTML/PDF collaborators that dress this up live outside this crate.
pub fn render_document(
    result: &ClassificationResult,
    selections: &[ModuleFeatureGroup],
    prepared_on: NaiveDate,
) -> String {
    let mut document = String::new();
    document.push_str("Professional Services Hours Estimate\n");
    document.push_str(&format!("Prepared {prepared_on}\n"));

    let mut any_module = false;
    for breakdown in &result.modules {
        let selection = selections
            .iter()
            .find(|group| group.module == breakdown.module);
        if breakdown.hours == 0 && breakdown.items.is_empty() && selection.is_none() {
            continue;
        }
        any_module = true;

        document.push_str(&format!(
            "\n{}: {} hours\n",
            breakdown.module_label, breakdown.hours
        ));
        for item in &breakdown.items {
            document.push_str(&format!("  {}: {}\n", item.category_label, item.hours));
        }
        if let Some(group) = selection {
            document.push_str(&format!("  Selected: {}\n", group.features.join(", ")));
        }
    }

    if !any_module {
        document.push_str("\nNo modules selected.\n");
    }

    if !result.justification.is_empty() {
        document.push_str("\nOverall justification\n");
        for item in &result.justification {
            document.push_str(&format!("  {}: {}\n", item.category_label, item.hours));
        }
    }

    document.push_str(&format!("\nTotal PSC Hours: {}\n", result.total_hours));
    document
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::estimation::engine::EstimationEngine;

    fn prepared_on() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 8, 6).expect("valid date")
    }

    #[test]
    fn renders_selected_modules_with_breakdowns() {
        let engine = EstimationEngine::standard();
        let mut snapshot = FeatureSnapshot::default();
        snapshot.bre_include = true;
        snapshot.housing = true;

        let result = engine.classify(&snapshot);
        let selections = selected_features(&snapshot, engine.table());
        let document = render_document(&result, &selections, prepared_on());

        assert!(document.contains("Prepared 2026-08-06"));
        assert!(document.contains("Attendee Registration: 12 hours"));
        assert!(document.contains("Selected: Attendee Registration (base), Housing & Room Blocks"));
        assert!(document.contains("Total PSC Hours: 12"));
        assert!(!document.contains("Kiosk & Badges:"));
    }

    #[test]
    fn empty_snapshot_renders_a_zero_document() {
        let engine = EstimationEngine::standard();
        let snapshot = FeatureSnapshot::default();

        let result = engine.classify(&snapshot);
        let selections = selected_features(&snapshot, engine.table());
        let document = render_document(&result, &selections, prepared_on());

        assert!(document.contains("No modules selected."));
        assert!(document.contains("Total PSC Hours: 0"));
        assert!(!document.contains("Overall justification"));
    }

    #[test]
    fn gated_out_module_still_lists_its_selection() {
        // Sub-feature ticked while the module is excluded: zero hours, but
        // the selection is still visible so reviewers can spot the mismatch.
        let engine = EstimationEngine::standard();
        let mut snapshot = FeatureSnapshot::default();
        snapshot.housing = true;

        let result = engine.classify(&snapshot);
        let selections = selected_features(&snapshot, engine.table());
        let document = render_document(&result, &selections, prepared_on());

        assert!(document.contains("Attendee Registration: 0 hours"));
        assert!(document.contains("Selected: Housing & Room Blocks"));
        assert!(document.contains("Total PSC Hours: 0"));
    }

    #[test]
    fn selection_groups_follow_module_order() {
        let engine = EstimationEngine::standard();
        let mut snapshot = FeatureSnapshot::default();
        snapshot.kiosk_include = true;
        snapshot.bre_include = true;

        let groups = selected_features(&snapshot, engine.table());
        let modules: Vec<_> = groups.iter().map(|group| group.module).collect();
        assert_eq!(
            modules,
            vec![
                ServiceModule::AttendeeRegistration,
                ServiceModule::KioskBadges
            ]
        );
    }
}
