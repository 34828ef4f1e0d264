use serde::Serialize;

use crate::flow::State;
use crate::modules::{TrackedApp, Tracker};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TrackerDetails {
    pub tracker: Tracker,
    pub apps: Vec<TrackedApp>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct TrackersState {
    pub trackers: Vec<Tracker>,
    pub selected: Option<TrackerDetails>,
}

impl State for TrackersState {}
