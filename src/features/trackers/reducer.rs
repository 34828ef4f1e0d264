use crate::flow::Reducer;

use super::effect::TrackersEffect;
use super::state::TrackersState;

pub struct TrackersReducer;

impl Reducer for TrackersReducer {
    type State = TrackersState;
    type Effect = TrackersEffect;

    fn reduce(state: Self::State, effect: Self::Effect) -> Self::State {
        match effect {
            TrackersEffect::TrackersLoaded(trackers) => TrackersState { trackers, ..state },
            TrackersEffect::TrackerSelected(details) => TrackersState {
                selected: Some(details),
                ..state
            },
            TrackersEffect::Error(_) => state,
        }
    }
}
