use crate::flow::Effect;

use super::state::DashboardSummary;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DashboardEffect {
    Loading,
    ScreenUpdated {
        summary: DashboardSummary,
        enabled: bool,
    },
    QuickPrivacyToggled(bool),
    OpenFakeLocation,
    OpenInternetPrivacy,
    OpenPermissions,
    OpenTrackers,
    OpenAppTrackers(String),
    Error(String),
}

impl Effect for DashboardEffect {}
