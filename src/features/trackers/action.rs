use crate::flow::Action;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TrackersAction {
    LoadTrackers,
    SelectTracker(String),
    /// Block or allow the selected tracker for one app.
    ToggleTracker { uid: u32, blocked: bool },
}

impl Action for TrackersAction {}
