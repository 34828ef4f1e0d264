use crate::flow::Action;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppTrackersAction {
    Init { package_name: String },
    /// `enabled: false` whitelists the app.
    BlockAllToggle { enabled: bool },
    ToggleTracker { tracker_id: String, blocked: bool },
}

impl Action for AppTrackersAction {}
