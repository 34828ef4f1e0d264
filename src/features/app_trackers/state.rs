use serde::Serialize;

use crate::flow::State;
use crate::modules::{ApplicationDescription, Tracker};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TrackerBlockState {
    pub tracker: Tracker,
    pub blocked: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct AppTrackersState {
    pub app: Option<ApplicationDescription>,
    pub trackers: Vec<TrackerBlockState>,
    /// False while the app is whitelisted.
    pub blocking_activated: bool,
}

impl State for AppTrackersState {}
