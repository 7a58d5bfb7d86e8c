//! Static feature-to-hours configuration.
//!
//! The table is data only: construction performs no computation, and the
//! process builds it exactly once at startup. [`RuleTable::validate`] checks
//! the table's internal consistency; a failure there is a fatal
//! configuration error and must prevent the service from answering requests.

mod rules;
mod validate;

use super::domain::{FeatureFlag, JustificationCategory, ServiceModule};

/// One entry of the rule table: a feature flag bound to a module, an
/// optional prerequisite flag, and its hour contributions per category.
#[derive(Debug, Clone)]
pub struct Rule {
    pub flag: FeatureFlag,
    pub module: ServiceModule,
    /// Flag that must also be set for this rule to contribute. `None` for
    /// module include rules.
    pub requires: Option<FeatureFlag>,
    /// Non-negative hour contributions, listed in canonical category order.
    pub hours: Vec<(JustificationCategory, f64)>,
}

/// Immutable lookup over the full rule set.
#[derive(Debug)]
pub struct RuleTable {
    rules: Vec<Rule>,
}

impl RuleTable {
    /// The shipping configuration derived from the intake questionnaire.
    pub fn standard() -> Self {
        Self {
            rules: rules::standard_rules(),
        }
    }

    /// Build a table from arbitrary rules. Callers own validation.
    pub fn from_rules(rules: Vec<Rule>) -> Self {
        Self { rules }
    }

    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    /// The rule triggered by `flag`, if any.
    pub fn rule_for(&self, flag: FeatureFlag) -> Option<&Rule> {
        self.rules.iter().find(|rule| rule.flag == flag)
    }

    /// Check referential and arithmetic integrity, collecting every issue
    /// rather than stopping at the first.
    pub fn validate(&self) -> Result<(), CatalogError> {
        validate::validate_rules(&self.rules)
    }
}

/// Fatal rule-table configuration error raised at startup.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("invalid rule table: {}", issues.join("; "))]
    Invalid { issues: Vec<String> },
}
