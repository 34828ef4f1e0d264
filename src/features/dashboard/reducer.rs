use crate::flow::Reducer;

use super::effect::DashboardEffect;
use super::state::DashboardState;

pub struct DashboardReducer;

impl Reducer for DashboardReducer {
    type State = DashboardState;
    type Effect = DashboardEffect;

    fn reduce(state: Self::State, effect: Self::Effect) -> Self::State {
        match effect {
            DashboardEffect::Loading => DashboardState::Loading,
            DashboardEffect::ScreenUpdated { summary, enabled } => {
                if enabled {
                    DashboardState::Enabled(summary)
                } else {
                    DashboardState::Disabled(summary)
                }
            }
            DashboardEffect::QuickPrivacyToggled(enabled) => match state {
                DashboardState::Loading => DashboardState::Loading,
                DashboardState::Disabled(summary) | DashboardState::Enabled(summary) => {
                    if enabled {
                        DashboardState::Enabled(summary)
                    } else {
                        DashboardState::Disabled(summary)
                    }
                }
            },
            DashboardEffect::OpenFakeLocation
            | DashboardEffect::OpenInternetPrivacy
            | DashboardEffect::OpenPermissions
            | DashboardEffect::OpenTrackers
            | DashboardEffect::OpenAppTrackers(_)
            | DashboardEffect::Error(_) => state,
        }
    }
}
