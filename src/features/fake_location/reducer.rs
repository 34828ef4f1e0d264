use crate::flow::Reducer;
use crate::modules::LocationMode;

use super::effect::FakeLocationEffect;
use super::state::FakeLocationState;

pub struct FakeLocationReducer;

impl Reducer for FakeLocationReducer {
    type State = FakeLocationState;
    type Effect = FakeLocationEffect;

    fn reduce(state: Self::State, effect: Self::Effect) -> Self::State {
        match effect {
            FakeLocationEffect::LocationModeUpdated { mode, location } => FakeLocationState {
                is_enabled: mode != LocationMode::Real,
                mode,
                location: if mode == LocationMode::Real {
                    None
                } else {
                    location
                },
            },
            FakeLocationEffect::Error(_) => state,
        }
    }
}
