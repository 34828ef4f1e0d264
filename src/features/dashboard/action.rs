use crate::flow::Action;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DashboardAction {
    Init,
    /// Flip quick privacy.
    TogglePrivacy,
    ShowFakeLocation,
    ShowInternetPrivacy,
    ShowPermissions,
    ShowTrackers,
    ShowAppTrackers { package_name: String },
}

impl Action for DashboardAction {}
