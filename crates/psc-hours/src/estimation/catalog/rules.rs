use super::Rule;
use crate::estimation::domain::{
    FeatureFlag::{self, *},
    JustificationCategory::{self, *},
    ServiceModule,
};

fn include_rule(module: ServiceModule, hours: Vec<(JustificationCategory, f64)>) -> Rule {
    Rule {
        flag: module.include_flag(),
        module,
        requires: None,
        hours,
    }
}

fn sub_rule(
    flag: FeatureFlag,
    module: ServiceModule,
    hours: Vec<(JustificationCategory, f64)>,
) -> Rule {
    Rule {
        flag,
        module,
        requires: Some(module.include_flag()),
        hours,
    }
}

/// The shipping rule table.
///
/// Include rules carry each module's base engagement hours; sub-feature
/// rules add the incremental work a selected characteristic brings. All
/// hour values are per-category contributions and may be fractional;
/// totals are truncated only after a module's contributions are summed.
pub(super) fn standard_rules() -> Vec<Rule> {
    use ServiceModule::*;

    vec![
        // Module bases
        include_rule(
            AttendeeRegistration,
            vec![
                (KickoffWrapUp, 2.0),
                (ModuleTraining, 2.5),
                (SupportQa, 1.0),
                (BuildConfigure, 3.0),
                (ReviewTesting, 1.0),
                (LaunchMeetings, 1.0),
            ],
        ),
        include_rule(
            MobileApp,
            vec![
                (KickoffWrapUp, 1.0),
                (ModuleTraining, 1.5),
                (BuildConfigure, 1.5),
                (ReviewTesting, 0.5),
                (LaunchMeetings, 1.0),
            ],
        ),
        include_rule(
            Appointments,
            vec![
                (KickoffWrapUp, 1.0),
                (ModuleTraining, 1.0),
                (SupportQa, 0.5),
                (BuildConfigure, 2.0),
                (ReviewTesting, 0.5),
                (LaunchMeetings, 0.5),
            ],
        ),
        include_rule(
            AbstractManagement,
            vec![
                (KickoffWrapUp, 1.0),
                (ModuleTraining, 1.5),
                (SupportQa, 0.5),
                (BuildConfigure, 1.5),
                (ReviewTesting, 0.5),
                (LaunchMeetings, 0.5),
            ],
        ),
        include_rule(
            ExhibitorRegistration,
            vec![
                (KickoffWrapUp, 1.0),
                (ModuleTraining, 1.5),
                (SupportQa, 0.5),
                (BuildConfigure, 1.5),
                (ReviewTesting, 0.5),
                (LaunchMeetings, 0.5),
            ],
        ),
        include_rule(
            KioskBadges,
            vec![
                (KickoffWrapUp, 0.5),
                (ModuleTraining, 1.0),
                (SupportQa, 0.5),
                (BuildConfigure, 2.0),
                (ReviewTesting, 1.0),
                (LaunchMeetings, 0.5),
            ],
        ),
        // Attendee registration
        sub_rule(Workflows, AttendeeRegistration, vec![(BuildConfigure, 0.5)]),
        sub_rule(
            FieldLogic,
            AttendeeRegistration,
            vec![(BuildConfigure, 1.5), (ReviewTesting, 0.5)],
        ),
        sub_rule(
            ProductLogic,
            AttendeeRegistration,
            vec![(BuildConfigure, 1.5), (ReviewTesting, 0.5)],
        ),
        sub_rule(
            SessionLogic,
            AttendeeRegistration,
            vec![(BuildConfigure, 1.5), (ReviewTesting, 0.5)],
        ),
        sub_rule(
            ComplexReporting,
            AttendeeRegistration,
            vec![(ModuleTraining, 0.5), (BuildConfigure, 2.0), (ReviewTesting, 0.5)],
        ),
        sub_rule(
            Housing,
            AttendeeRegistration,
            vec![(BuildConfigure, 1.5), (ReviewTesting, 0.5)],
        ),
        sub_rule(
            TableSeating,
            AttendeeRegistration,
            vec![(BuildConfigure, 1.5), (ReviewTesting, 0.5)],
        ),
        sub_rule(
            LookupIntegration,
            AttendeeRegistration,
            vec![(BuildConfigure, 0.5)],
        ),
        sub_rule(
            Integrations,
            AttendeeRegistration,
            vec![(BuildConfigure, 1.5), (ReviewTesting, 0.5)],
        ),
        sub_rule(
            SingleSignOn,
            AttendeeRegistration,
            vec![(SupportQa, 0.5), (BuildConfigure, 1.0), (ReviewTesting, 0.5)],
        ),
        // Mobile app & online
        sub_rule(
            HybridVirtual,
            MobileApp,
            vec![(ModuleTraining, 0.5), (BuildConfigure, 0.5)],
        ),
        sub_rule(MultiEvent, MobileApp, vec![(BuildConfigure, 1.0)]),
        sub_rule(Wayfinding, MobileApp, vec![(BuildConfigure, 1.0)]),
        sub_rule(
            ContinuingEducation,
            MobileApp,
            vec![(BuildConfigure, 0.5), (ReviewTesting, 0.5)],
        ),
        sub_rule(SponsorBranding, MobileApp, vec![(BuildConfigure, 1.0)]),
        sub_rule(
            Leads,
            MobileApp,
            vec![(ModuleTraining, 0.5), (BuildConfigure, 0.5)],
        ),
        sub_rule(
            NewDevelopment,
            MobileApp,
            vec![(BuildConfigure, 2.0), (ReviewTesting, 1.0)],
        ),
        // Abstract management
        sub_rule(ComplexWorkflows, AbstractManagement, vec![(BuildConfigure, 1.0)]),
        sub_rule(
            MultipleReviewRounds,
            AbstractManagement,
            vec![(SupportQa, 0.5), (BuildConfigure, 0.5)],
        ),
        sub_rule(
            MultipleProposalCalls,
            AbstractManagement,
            vec![(SupportQa, 0.5), (BuildConfigure, 0.5)],
        ),
        // Exhibitor registration
        sub_rule(FloorPlan, ExhibitorRegistration, vec![(BuildConfigure, 1.0)]),
        sub_rule(
            YearRound,
            ExhibitorRegistration,
            vec![(SupportQa, 0.5), (BuildConfigure, 0.5)],
        ),
        sub_rule(
            ComplexSponsors,
            ExhibitorRegistration,
            vec![(BuildConfigure, 1.0)],
        ),
        // Appointments
        sub_rule(MultiScheduling, Appointments, vec![(BuildConfigure, 1.0)]),
        sub_rule(
            FirstTimeSystem,
            Appointments,
            vec![(ModuleTraining, 0.5), (SupportQa, 0.5)],
        ),
        sub_rule(Matchmaking, Appointments, vec![(BuildConfigure, 1.0)]),
        // Kiosk & badges
        sub_rule(PersonalAgenda, KioskBadges, vec![(BuildConfigure, 1.0)]),
        sub_rule(
            DoubleSided,
            KioskBadges,
            vec![(BuildConfigure, 0.5), (ReviewTesting, 0.5)],
        ),
        sub_rule(LogicBasedBadges, KioskBadges, vec![(BuildConfigure, 1.0)]),
        sub_rule(
            MultiBadgeTypes,
            KioskBadges,
            vec![(BuildConfigure, 0.5), (ReviewTesting, 0.5)],
        ),
        sub_rule(
            CustomerHardware,
            KioskBadges,
            vec![(ModuleTraining, 0.5), (SupportQa, 0.5)],
        ),
    ]
}
