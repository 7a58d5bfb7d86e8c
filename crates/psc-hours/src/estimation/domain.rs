use serde::Serialize;

/// Service areas whose implementation hours are estimated independently.
///
/// Each module is gated by a single include flag; the order of `ALL` is the
/// canonical display order used throughout results and reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ServiceModule {
    AttendeeRegistration,
    MobileApp,
    Appointments,
    AbstractManagement,
    ExhibitorRegistration,
    KioskBadges,
}

impl ServiceModule {
    pub const ALL: [Self; 6] = [
        Self::AttendeeRegistration,
        Self::MobileApp,
        Self::Appointments,
        Self::AbstractManagement,
        Self::ExhibitorRegistration,
        Self::KioskBadges,
    ];

    pub const fn label(self) -> &'static str {
        match self {
            Self::AttendeeRegistration => "Attendee Registration",
            Self::MobileApp => "Mobile App & Online",
            Self::Appointments => "Appointments",
            Self::AbstractManagement => "Abstract Management",
            Self::ExhibitorRegistration => "Exhibitor Registration",
            Self::KioskBadges => "Kiosk & Badges",
        }
    }

    /// The flag that must be set for any of this module's hours to count.
    pub const fn include_flag(self) -> FeatureFlag {
        match self {
            Self::AttendeeRegistration => FeatureFlag::AttendeeRegistrationInclude,
            Self::MobileApp => FeatureFlag::MobileAppInclude,
            Self::Appointments => FeatureFlag::AppointmentsInclude,
            Self::AbstractManagement => FeatureFlag::AbstractManagementInclude,
            Self::ExhibitorRegistration => FeatureFlag::ExhibitorRegistrationInclude,
            Self::KioskBadges => FeatureFlag::KioskInclude,
        }
    }

    pub(crate) const fn index(self) -> usize {
        self as usize
    }
}

/// Work-type buckets explaining where estimated hours go.
///
/// The order of `ALL` is significant: breakdown and justification items are
/// always emitted in this order, never alphabetically or by activation order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum JustificationCategory {
    KickoffWrapUp,
    ModuleTraining,
    SupportQa,
    BuildConfigure,
    ReviewTesting,
    LaunchMeetings,
}

impl JustificationCategory {
    pub const ALL: [Self; 6] = [
        Self::KickoffWrapUp,
        Self::ModuleTraining,
        Self::SupportQa,
        Self::BuildConfigure,
        Self::ReviewTesting,
        Self::LaunchMeetings,
    ];

    pub const fn label(self) -> &'static str {
        match self {
            Self::KickoffWrapUp => "Kickoff & Wrap-Up Calls",
            Self::ModuleTraining => "Module Training",
            Self::SupportQa => "Support & Q&A",
            Self::BuildConfigure => "Build & Configuration",
            Self::ReviewTesting => "Review & Testing",
            Self::LaunchMeetings => "Pre/Post-Launch Meetings",
        }
    }

    pub(crate) const fn index(self) -> usize {
        self as usize
    }
}

/// The closed set of project characteristics a caller can toggle.
///
/// `key()` values are the wire identifiers accepted in request snapshots and
/// on the CLI; they are carried over verbatim from the intake questionnaire,
/// including the two capitalized keys `CEUs` and `SSO`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FeatureFlag {
    // Attendee registration
    Workflows,
    FieldLogic,
    ProductLogic,
    SessionLogic,
    ComplexReporting,
    Housing,
    TableSeating,
    LookupIntegration,
    Integrations,
    SingleSignOn,
    // Mobile app & online
    HybridVirtual,
    MultiEvent,
    Wayfinding,
    ContinuingEducation,
    SponsorBranding,
    Leads,
    NewDevelopment,
    // Abstract management
    ComplexWorkflows,
    MultipleReviewRounds,
    MultipleProposalCalls,
    // Exhibitor registration
    FloorPlan,
    YearRound,
    ComplexSponsors,
    // Appointments
    MultiScheduling,
    FirstTimeSystem,
    Matchmaking,
    // Kiosk & badges
    PersonalAgenda,
    DoubleSided,
    LogicBasedBadges,
    MultiBadgeTypes,
    CustomerHardware,
    // Module include toggles
    AttendeeRegistrationInclude,
    MobileAppInclude,
    AppointmentsInclude,
    AbstractManagementInclude,
    ExhibitorRegistrationInclude,
    KioskInclude,
}

impl FeatureFlag {
    pub const ALL: [Self; 37] = [
        Self::Workflows,
        Self::FieldLogic,
        Self::ProductLogic,
        Self::SessionLogic,
        Self::ComplexReporting,
        Self::Housing,
        Self::TableSeating,
        Self::LookupIntegration,
        Self::Integrations,
        Self::SingleSignOn,
        Self::HybridVirtual,
        Self::MultiEvent,
        Self::Wayfinding,
        Self::ContinuingEducation,
        Self::SponsorBranding,
        Self::Leads,
        Self::NewDevelopment,
        Self::ComplexWorkflows,
        Self::MultipleReviewRounds,
        Self::MultipleProposalCalls,
        Self::FloorPlan,
        Self::YearRound,
        Self::ComplexSponsors,
        Self::MultiScheduling,
        Self::FirstTimeSystem,
        Self::Matchmaking,
        Self::PersonalAgenda,
        Self::DoubleSided,
        Self::LogicBasedBadges,
        Self::MultiBadgeTypes,
        Self::CustomerHardware,
        Self::AttendeeRegistrationInclude,
        Self::MobileAppInclude,
        Self::AppointmentsInclude,
        Self::AbstractManagementInclude,
        Self::ExhibitorRegistrationInclude,
        Self::KioskInclude,
    ];

    /// Wire identifier used in request snapshots and CLI arguments.
    pub const fn key(self) -> &'static str {
        match self {
            Self::Workflows => "workflows",
            Self::FieldLogic => "field_logic",
            Self::ProductLogic => "product_logic",
            Self::SessionLogic => "session_logic",
            Self::ComplexReporting => "complex_reporting",
            Self::Housing => "housing",
            Self::TableSeating => "table_seating",
            Self::LookupIntegration => "lookup_integration",
            Self::Integrations => "integrations",
            Self::SingleSignOn => "SSO",
            Self::HybridVirtual => "hybrid_virtual",
            Self::MultiEvent => "multi_event",
            Self::Wayfinding => "wayfinding",
            Self::ContinuingEducation => "CEUs",
            Self::SponsorBranding => "sponsor_branding",
            Self::Leads => "leads",
            Self::NewDevelopment => "new_dev",
            Self::ComplexWorkflows => "complex_workflows",
            Self::MultipleReviewRounds => "multiple_review_rounds",
            Self::MultipleProposalCalls => "multiple_proposal_calls",
            Self::FloorPlan => "floor_plan",
            Self::YearRound => "year_round",
            Self::ComplexSponsors => "complex_sponsors",
            Self::MultiScheduling => "multi_scheduling",
            Self::FirstTimeSystem => "first_time_system",
            Self::Matchmaking => "matchmaking",
            Self::PersonalAgenda => "personal_agenda",
            Self::DoubleSided => "double_sided",
            Self::LogicBasedBadges => "logic_based_badges",
            Self::MultiBadgeTypes => "multi_badge_types",
            Self::CustomerHardware => "customer_hardware",
            Self::AttendeeRegistrationInclude => "bre_include",
            Self::MobileAppInclude => "app_include",
            Self::AppointmentsInclude => "appointments_include",
            Self::AbstractManagementInclude => "abs_include",
            Self::ExhibitorRegistrationInclude => "exh_include",
            Self::KioskInclude => "kiosk_include",
        }
    }

    /// Human-readable label shown in rendered reports.
    pub const fn label(self) -> &'static str {
        match self {
            Self::Workflows => "Registration Workflows",
            Self::FieldLogic => "Field Logic",
            Self::ProductLogic => "Product Logic",
            Self::SessionLogic => "Session Logic",
            Self::ComplexReporting => "Complex Reporting",
            Self::Housing => "Housing & Room Blocks",
            Self::TableSeating => "Table Seating",
            Self::LookupIntegration => "Lookup Integration",
            Self::Integrations => "Third-Party Integrations",
            Self::SingleSignOn => "Single Sign-On",
            Self::HybridVirtual => "Hybrid/Virtual Event",
            Self::MultiEvent => "Multi-Event App",
            Self::Wayfinding => "Wayfinding",
            Self::ContinuingEducation => "Continuing Education Credits",
            Self::SponsorBranding => "Sponsor Branding",
            Self::Leads => "Lead Capture",
            Self::NewDevelopment => "Custom Development",
            Self::ComplexWorkflows => "Complex Review Workflows",
            Self::MultipleReviewRounds => "Multiple Review Rounds",
            Self::MultipleProposalCalls => "Multiple Proposal Calls",
            Self::FloorPlan => "Interactive Floor Plan",
            Self::YearRound => "Year-Round Portal",
            Self::ComplexSponsors => "Complex Sponsorship Tiers",
            Self::MultiScheduling => "Multi-Track Scheduling",
            Self::FirstTimeSystem => "First Appointment System",
            Self::Matchmaking => "Attendee Matchmaking",
            Self::PersonalAgenda => "Personal Agenda Printing",
            Self::DoubleSided => "Double-Sided Badges",
            Self::LogicBasedBadges => "Logic-Based Badges",
            Self::MultiBadgeTypes => "Multiple Badge Types",
            Self::CustomerHardware => "Customer-Provided Hardware",
            Self::AttendeeRegistrationInclude => "Attendee Registration (base)",
            Self::MobileAppInclude => "Mobile App & Online (base)",
            Self::AppointmentsInclude => "Appointments (base)",
            Self::AbstractManagementInclude => "Abstract Management (base)",
            Self::ExhibitorRegistrationInclude => "Exhibitor Registration (base)",
            Self::KioskInclude => "Kiosk & Badges (base)",
        }
    }

    /// Resolve a wire identifier back to its flag, if recognized.
    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|flag| flag.key() == key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn module_order_matches_display_order() {
        let labels: Vec<_> = ServiceModule::ALL.iter().map(|m| m.label()).collect();
        assert_eq!(labels[0], "Attendee Registration");
        assert_eq!(labels[5], "Kiosk & Badges");
    }

    #[test]
    fn every_flag_key_round_trips() {
        for flag in FeatureFlag::ALL {
            assert_eq!(FeatureFlag::from_key(flag.key()), Some(flag));
        }
    }

    #[test]
    fn flag_keys_are_unique() {
        for (i, a) in FeatureFlag::ALL.iter().enumerate() {
            for b in &FeatureFlag::ALL[i + 1..] {
                assert_ne!(a.key(), b.key());
            }
        }
    }

    #[test]
    fn unknown_key_is_not_recognized() {
        assert_eq!(FeatureFlag::from_key("multiple_POCs"), None);
        assert_eq!(FeatureFlag::from_key("sso"), None);
    }
}
