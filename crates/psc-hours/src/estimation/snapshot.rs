use serde::{Deserialize, Serialize};

use super::domain::FeatureFlag;

/// Flat boolean snapshot of project characteristics supplied by the caller.
///
/// Every omitted field defaults to `false` and unrecognized keys are ignored,
/// so older or newer clients can post whatever checklist revision they have.
/// Field names are the wire identifiers from [`FeatureFlag::key`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FeatureSnapshot {
    // Attendee registration
    pub workflows: bool,
    pub field_logic: bool,
    pub product_logic: bool,
    pub session_logic: bool,
    pub complex_reporting: bool,
    pub housing: bool,
    pub table_seating: bool,
    pub lookup_integration: bool,
    pub integrations: bool,
    #[serde(rename = "SSO")]
    pub sso: bool,
    // Mobile app & online
    pub hybrid_virtual: bool,
    pub multi_event: bool,
    pub wayfinding: bool,
    #[serde(rename = "CEUs")]
    pub ceus: bool,
    pub sponsor_branding: bool,
    pub leads: bool,
    pub new_dev: bool,
    // Abstract management
    pub complex_workflows: bool,
    pub multiple_review_rounds: bool,
    pub multiple_proposal_calls: bool,
    // Exhibitor registration
    pub floor_plan: bool,
    pub year_round: bool,
    pub complex_sponsors: bool,
    // Appointments
    pub multi_scheduling: bool,
    pub first_time_system: bool,
    pub matchmaking: bool,
    // Kiosk & badges
    pub personal_agenda: bool,
    pub double_sided: bool,
    pub logic_based_badges: bool,
    pub multi_badge_types: bool,
    pub customer_hardware: bool,
    // Module include toggles
    pub bre_include: bool,
    pub app_include: bool,
    pub appointments_include: bool,
    pub abs_include: bool,
    pub exh_include: bool,
    pub kiosk_include: bool,
}

impl FeatureSnapshot {
    pub const fn get(&self, flag: FeatureFlag) -> bool {
        match flag {
            FeatureFlag::Workflows => self.workflows,
            FeatureFlag::FieldLogic => self.field_logic,
            FeatureFlag::ProductLogic => self.product_logic,
            FeatureFlag::SessionLogic => self.session_logic,
            FeatureFlag::ComplexReporting => self.complex_reporting,
            FeatureFlag::Housing => self.housing,
            FeatureFlag::TableSeating => self.table_seating,
            FeatureFlag::LookupIntegration => self.lookup_integration,
            FeatureFlag::Integrations => self.integrations,
            FeatureFlag::SingleSignOn => self.sso,
            FeatureFlag::HybridVirtual => self.hybrid_virtual,
            FeatureFlag::MultiEvent => self.multi_event,
            FeatureFlag::Wayfinding => self.wayfinding,
            FeatureFlag::ContinuingEducation => self.ceus,
            FeatureFlag::SponsorBranding => self.sponsor_branding,
            FeatureFlag::Leads => self.leads,
            FeatureFlag::NewDevelopment => self.new_dev,
            FeatureFlag::ComplexWorkflows => self.complex_workflows,
            FeatureFlag::MultipleReviewRounds => self.multiple_review_rounds,
            FeatureFlag::MultipleProposalCalls => self.multiple_proposal_calls,
            FeatureFlag::FloorPlan => self.floor_plan,
            FeatureFlag::YearRound => self.year_round,
            FeatureFlag::ComplexSponsors => self.complex_sponsors,
            FeatureFlag::MultiScheduling => self.multi_scheduling,
            FeatureFlag::FirstTimeSystem => self.first_time_system,
            FeatureFlag::Matchmaking => self.matchmaking,
            FeatureFlag::PersonalAgenda => self.personal_agenda,
            FeatureFlag::DoubleSided => self.double_sided,
            FeatureFlag::LogicBasedBadges => self.logic_based_badges,
            FeatureFlag::MultiBadgeTypes => self.multi_badge_types,
            FeatureFlag::CustomerHardware => self.customer_hardware,
            FeatureFlag::AttendeeRegistrationInclude => self.bre_include,
            FeatureFlag::MobileAppInclude => self.app_include,
            FeatureFlag::AppointmentsInclude => self.appointments_include,
            FeatureFlag::AbstractManagementInclude => self.abs_include,
            FeatureFlag::ExhibitorRegistrationInclude => self.exh_include,
            FeatureFlag::KioskInclude => self.kiosk_include,
        }
    }

    pub fn set(&mut self, flag: FeatureFlag, value: bool) {
        match flag {
            FeatureFlag::Workflows => self.workflows = value,
            FeatureFlag::FieldLogic => self.field_logic = value,
            FeatureFlag::ProductLogic => self.product_logic = value,
            FeatureFlag::SessionLogic => self.session_logic = value,
            FeatureFlag::ComplexReporting => self.complex_reporting = value,
            FeatureFlag::Housing => self.housing = value,
            FeatureFlag::TableSeating => self.table_seating = value,
            FeatureFlag::LookupIntegration => self.lookup_integration = value,
            FeatureFlag::Integrations => self.integrations = value,
            FeatureFlag::SingleSignOn => self.sso = value,
            FeatureFlag::HybridVirtual => self.hybrid_virtual = value,
            FeatureFlag::MultiEvent => self.multi_event = value,
            FeatureFlag::Wayfinding => self.wayfinding = value,
            FeatureFlag::ContinuingEducation => self.ceus = value,
            FeatureFlag::SponsorBranding => self.sponsor_branding = value,
            FeatureFlag::Leads => self.leads = value,
            FeatureFlag::NewDevelopment => self.new_dev = value,
            FeatureFlag::ComplexWorkflows => self.complex_workflows = value,
            FeatureFlag::MultipleReviewRounds => self.multiple_review_rounds = value,
            FeatureFlag::MultipleProposalCalls => self.multiple_proposal_calls = value,
            FeatureFlag::FloorPlan => self.floor_plan = value,
            FeatureFlag::YearRound => self.year_round = value,
            FeatureFlag::ComplexSponsors => self.complex_sponsors = value,
            FeatureFlag::MultiScheduling => self.multi_scheduling = value,
            FeatureFlag::FirstTimeSystem => self.first_time_system = value,
            FeatureFlag::Matchmaking => self.matchmaking = value,
            FeatureFlag::PersonalAgenda => self.personal_agenda = value,
            FeatureFlag::DoubleSided => self.double_sided = value,
            FeatureFlag::LogicBasedBadges => self.logic_based_badges = value,
            FeatureFlag::MultiBadgeTypes => self.multi_badge_types = value,
            FeatureFlag::CustomerHardware => self.customer_hardware = value,
            FeatureFlag::AttendeeRegistrationInclude => self.bre_include = value,
            FeatureFlag::MobileAppInclude => self.app_include = value,
            FeatureFlag::AppointmentsInclude => self.appointments_include = value,
            FeatureFlag::AbstractManagementInclude => self.abs_include = value,
            FeatureFlag::ExhibitorRegistrationInclude => self.exh_include = value,
            FeatureFlag::KioskInclude => self.kiosk_include = value,
        }
    }

    /// Flags currently set, in the catalog's canonical flag order.
    pub fn enabled(&self) -> Vec<FeatureFlag> {
        FeatureFlag::ALL
            .into_iter()
            .filter(|flag| self.get(*flag))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_object_deserializes_to_all_false() {
        let snapshot: FeatureSnapshot = serde_json::from_str("{}").expect("valid json");
        assert_eq!(snapshot, FeatureSnapshot::default());
        assert!(snapshot.enabled().is_empty());
    }

    #[test]
    fn unknown_keys_are_ignored() {
        let snapshot: FeatureSnapshot =
            serde_json::from_str(r#"{"housing": true, "multiple_POCs": true}"#)
                .expect("unknown keys tolerated");
        assert!(snapshot.housing);
        assert_eq!(snapshot.enabled(), vec![FeatureFlag::Housing]);
    }

    #[test]
    fn capitalized_wire_keys_map_to_fields() {
        let snapshot: FeatureSnapshot =
            serde_json::from_str(r#"{"SSO": true, "CEUs": true}"#).expect("valid json");
        assert!(snapshot.sso);
        assert!(snapshot.ceus);
        assert!(snapshot.get(FeatureFlag::SingleSignOn));
        assert!(snapshot.get(FeatureFlag::ContinuingEducation));
    }

    #[test]
    fn non_boolean_value_is_rejected() {
        let result = serde_json::from_str::<FeatureSnapshot>(r#"{"housing": "yes"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn set_and_get_cover_every_flag() {
        let mut snapshot = FeatureSnapshot::default();
        for flag in FeatureFlag::ALL {
            assert!(!snapshot.get(flag));
            snapshot.set(flag, true);
            assert!(snapshot.get(flag));
        }
        assert_eq!(snapshot.enabled().len(), FeatureFlag::ALL.len());
    }
}
