use crate::flow::Reducer;

use super::effect::AppTrackersEffect;
use super::state::AppTrackersState;

pub struct AppTrackersReducer;

impl Reducer for AppTrackersReducer {
    type State = AppTrackersState;
    type Effect = AppTrackersEffect;

    fn reduce(state: Self::State, effect: Self::Effect) -> Self::State {
        match effect {
            AppTrackersEffect::AppLoaded {
                app,
                blocking_activated,
                trackers,
            } => AppTrackersState {
                app: Some(app),
                trackers,
                blocking_activated,
            },
            AppTrackersEffect::BlockingActivated(blocking_activated) => AppTrackersState {
                blocking_activated,
                ..state
            },
            AppTrackersEffect::TrackerToggled {
                tracker_id,
                blocked,
            } => {
                let mut state = state;
                if let Some(entry) = state
                    .trackers
                    .iter_mut()
                    .find(|entry| entry.tracker.id == tracker_id)
                {
                    entry.blocked = blocked;
                }
                state
            }
            AppTrackersEffect::Error(_) => state,
        }
    }
}
