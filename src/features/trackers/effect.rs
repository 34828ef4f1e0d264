use crate::flow::Effect;
use crate::modules::Tracker;

use super::state::TrackerDetails;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TrackersEffect {
    TrackersLoaded(Vec<Tracker>),
    TrackerSelected(TrackerDetails),
    Error(String),
}

impl Effect for TrackersEffect {}
