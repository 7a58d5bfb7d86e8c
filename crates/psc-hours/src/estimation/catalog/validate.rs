use std::collections::HashSet;

use super::{CatalogError, Rule};
use crate::estimation::domain::ServiceModule;

/// Validate the rule table once at startup.
/// Returns all issues at once (not just the first).
pub(super) fn validate_rules(rules: &[Rule]) -> Result<(), CatalogError> {
    let mut issues = Vec::new();

    let mut triggers = HashSet::new();
    for rule in rules {
        if !triggers.insert(rule.flag) {
            issues.push(format!(
                "flag '{}' triggers more than one rule",
                rule.flag.key()
            ));
        }
    }

    for module in ServiceModule::ALL {
        let include = module.include_flag();
        match rules.iter().find(|rule| rule.flag == include) {
            None => issues.push(format!(
                "module '{}' has no include rule for '{}'",
                module.label(),
                include.key()
            )),
            Some(rule) => {
                if rule.module != module {
                    issues.push(format!(
                        "include rule '{}' is bound to module '{}'",
                        include.key(),
                        rule.module.label()
                    ));
                }
                if rule.requires.is_some() {
                    issues.push(format!(
                        "include rule '{}' must not declare a prerequisite",
                        include.key()
                    ));
                }
            }
        }
    }

    for rule in rules {
        if let Some(requires) = rule.requires {
            if !triggers.contains(&requires) {
                issues.push(format!(
                    "rule '{}' requires '{}', which triggers no rule",
                    rule.flag.key(),
                    requires.key()
                ));
            }
        }

        if rule.hours.is_empty() {
            issues.push(format!("rule '{}' contributes no hours", rule.flag.key()));
        }

        let mut seen_categories = HashSet::new();
        let mut last_index = None;
        for (category, hours) in &rule.hours {
            if !seen_categories.insert(*category) {
                issues.push(format!(
                    "rule '{}' lists category '{}' twice",
                    rule.flag.key(),
                    category.label()
                ));
            }
            if let Some(last) = last_index {
                if category.index() < last {
                    issues.push(format!(
                        "rule '{}' lists categories out of canonical order",
                        rule.flag.key()
                    ));
                }
            }
            last_index = Some(category.index());

            if !hours.is_finite() || *hours < 0.0 {
                issues.push(format!(
                    "rule '{}' has a negative or non-finite contribution for '{}'",
                    rule.flag.key(),
                    category.label()
                ));
            }
        }
    }

    if issues.is_empty() {
        Ok(())
    } else {
        Err(CatalogError::Invalid { issues })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::estimation::domain::{FeatureFlag, JustificationCategory};
    use crate::estimation::RuleTable;

    fn include_rules() -> Vec<Rule> {
        ServiceModule::ALL
            .into_iter()
            .map(|module| Rule {
                flag: module.include_flag(),
                module,
                requires: None,
                hours: vec![(JustificationCategory::BuildConfigure, 1.0)],
            })
            .collect()
    }

    #[test]
    fn duplicate_trigger_is_reported() {
        let mut rules = include_rules();
        rules.push(Rule {
            flag: ServiceModule::Appointments.include_flag(),
            module: ServiceModule::Appointments,
            requires: None,
            hours: vec![(JustificationCategory::BuildConfigure, 1.0)],
        });

        let err = RuleTable::from_rules(rules).validate().unwrap_err();
        let CatalogError::Invalid { issues } = err;
        assert!(issues
            .iter()
            .any(|issue| issue.contains("triggers more than one rule")));
    }

    #[test]
    fn missing_include_rule_is_reported() {
        let mut rules = include_rules();
        rules.retain(|rule| rule.module != ServiceModule::KioskBadges);

        let err = RuleTable::from_rules(rules).validate().unwrap_err();
        let CatalogError::Invalid { issues } = err;
        assert!(issues.iter().any(|issue| issue.contains("kiosk_include")));
    }

    #[test]
    fn dangling_prerequisite_is_reported() {
        let mut rules = include_rules();
        rules.push(Rule {
            flag: FeatureFlag::Housing,
            module: ServiceModule::AttendeeRegistration,
            requires: Some(FeatureFlag::Wayfinding),
            hours: vec![(JustificationCategory::BuildConfigure, 2.0)],
        });

        let err = RuleTable::from_rules(rules).validate().unwrap_err();
        let CatalogError::Invalid { issues } = err;
        assert!(issues
            .iter()
            .any(|issue| issue.contains("requires 'wayfinding'")));
    }

    #[test]
    fn negative_contribution_is_reported() {
        let mut rules = include_rules();
        rules.push(Rule {
            flag: FeatureFlag::Housing,
            module: ServiceModule::AttendeeRegistration,
            requires: Some(ServiceModule::AttendeeRegistration.include_flag()),
            hours: vec![(JustificationCategory::BuildConfigure, -1.0)],
        });

        let err = RuleTable::from_rules(rules).validate().unwrap_err();
        let CatalogError::Invalid { issues } = err;
        assert!(issues.iter().any(|issue| issue.contains("negative")));
    }

    #[test]
    fn collects_all_issues() {
        let rules = vec![Rule {
            flag: FeatureFlag::Housing,
            module: ServiceModule::AttendeeRegistration,
            requires: Some(FeatureFlag::Wayfinding),
            hours: Vec::new(),
        }];

        let err = RuleTable::from_rules(rules).validate().unwrap_err();
        let CatalogError::Invalid { issues } = err;
        // six missing include rules, one dangling prerequisite, one empty rule
        assert!(issues.len() >= 8);
    }
}
