use serde::Serialize;

use super::catalog::RuleTable;
use super::domain::{JustificationCategory, ServiceModule};
use super::snapshot::FeatureSnapshot;

const MODULE_COUNT: usize = ServiceModule::ALL.len();
const CATEGORY_COUNT: usize = JustificationCategory::ALL.len();

/// Stateless scorer applying the rule table to a feature snapshot.
///
/// `classify` is a pure function of its input: each call owns its
/// accumulator matrix, so a single engine can serve concurrent requests
/// without coordination.
pub struct EstimationEngine {
    table: RuleTable,
}

impl EstimationEngine {
    pub fn new(table: RuleTable) -> Self {
        Self { table }
    }

    /// Engine over the shipping rule table.
    pub fn standard() -> Self {
        Self::new(RuleTable::standard())
    }

    pub fn table(&self) -> &RuleTable {
        &self.table
    }

    pub fn classify(&self, snapshot: &FeatureSnapshot) -> ClassificationResult {
        let mut matrix = [[0.0_f64; CATEGORY_COUNT]; MODULE_COUNT];

        for rule in self.table.rules() {
            if !snapshot.get(rule.flag) {
                continue;
            }
            if let Some(requires) = rule.requires {
                if !snapshot.get(requires) {
                    continue;
                }
            }
            let row = &mut matrix[rule.module.index()];
            for (category, hours) in &rule.hours {
                row[category.index()] += hours;
            }
        }

        // Module gating is applied unconditionally, even though the shipping
        // table already sets `requires` on every sub-feature rule: a table
        // edit that drops the prerequisite must not leak hours for a module
        // the caller excluded.
        for module in ServiceModule::ALL {
            if !snapshot.get(module.include_flag()) {
                matrix[module.index()] = [0.0; CATEGORY_COUNT];
            }
        }

        let mut modules = Vec::with_capacity(MODULE_COUNT);
        let mut total_hours = 0_u32;
        for module in ServiceModule::ALL {
            let row = &matrix[module.index()];
            // Truncate toward zero exactly once, after all of the module's
            // contributions are summed.
            let hours = row.iter().sum::<f64>().trunc() as u32;
            total_hours += hours;
            modules.push(ModuleBreakdown {
                module,
                module_label: module.label(),
                hours,
                items: breakdown_items(row),
            });
        }

        let mut justification = Vec::new();
        for category in JustificationCategory::ALL {
            let across_modules: f64 = matrix.iter().map(|row| row[category.index()]).sum();
            let hours = across_modules.trunc() as u32;
            if hours > 0 {
                justification.push(BreakdownItem {
                    category,
                    category_label: category.label(),
                    hours,
                });
            }
        }

        ClassificationResult {
            modules,
            total_hours,
            justification,
        }
    }
}

fn breakdown_items(row: &[f64; CATEGORY_COUNT]) -> Vec<BreakdownItem> {
    JustificationCategory::ALL
        .into_iter()
        .filter_map(|category| {
            let hours = row[category.index()].trunc() as u32;
            (hours > 0).then_some(BreakdownItem {
                category,
                category_label: category.label(),
                hours,
            })
        })
        .collect()
}

/// Non-zero hours attributed to one justification category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BreakdownItem {
    pub category: JustificationCategory,
    pub category_label: &'static str,
    pub hours: u32,
}

/// One module's integer hours and its non-zero category breakdown, in
/// canonical category order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ModuleBreakdown {
    pub module: ServiceModule,
    pub module_label: &'static str,
    pub hours: u32,
    pub items: Vec<BreakdownItem>,
}

/// Full response for one snapshot: all six modules in canonical order, the
/// overall total, and the cross-module justification summary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ClassificationResult {
    pub modules: Vec<ModuleBreakdown>,
    pub total_hours: u32,
    pub justification: Vec<BreakdownItem>,
}

impl ClassificationResult {
    /// Breakdown for `module`; every module is present in every result.
    pub fn module(&self, module: ServiceModule) -> &ModuleBreakdown {
        &self.modules[module.index()]
    }
}
