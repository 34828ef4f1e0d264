use crate::flow::Reducer;

use super::effect::InternetPrivacyEffect;
use super::state::InternetPrivacyState;

pub struct InternetPrivacyReducer;

impl Reducer for InternetPrivacyReducer {
    type State = InternetPrivacyState;
    type Effect = InternetPrivacyEffect;

    fn reduce(state: Self::State, effect: Self::Effect) -> Self::State {
        match effect {
            InternetPrivacyEffect::ModeUpdated(mode) => InternetPrivacyState { mode },
            InternetPrivacyEffect::ShowVpnPrompt(_) | InternetPrivacyEffect::Error(_) => state,
        }
    }
}
