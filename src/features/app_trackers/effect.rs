use crate::flow::Effect;
use crate::modules::ApplicationDescription;

use super::state::TrackerBlockState;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppTrackersEffect {
    AppLoaded {
        app: ApplicationDescription,
        blocking_activated: bool,
        trackers: Vec<TrackerBlockState>,
    },
    BlockingActivated(bool),
    TrackerToggled { tracker_id: String, blocked: bool },
    Error(String),
}

impl Effect for AppTrackersEffect {}
