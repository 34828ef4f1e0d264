use crate::flow::{SingleEvent, SingleEventProducer};
use crate::modules::{InternetPrivacyMode, VpnPrompt};

use super::action::InternetPrivacyAction;
use super::effect::InternetPrivacyEffect;
use super::state::InternetPrivacyState;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InternetPrivacyEvent {
    RealIpSelected,
    HiddenIpSelected,
    StartVpnPrompt(VpnPrompt),
    Error(String),
}

impl SingleEvent for InternetPrivacyEvent {}

pub struct InternetPrivacyEvents;

impl SingleEventProducer for InternetPrivacyEvents {
    type State = InternetPrivacyState;
    type Action = InternetPrivacyAction;
    type Effect = InternetPrivacyEffect;
    type Event = InternetPrivacyEvent;

    fn produce(
        _state: &Self::State,
        action: &Self::Action,
        effect: &Self::Effect,
    ) -> Option<Self::Event> {
        use InternetPrivacyMode::{HideIp, HideIpLoading, RealIp, RealIpLoading};

        match (action, effect) {
            (_, InternetPrivacyEffect::Error(message)) => {
                Some(InternetPrivacyEvent::Error(message.clone()))
            }
            (_, InternetPrivacyEffect::ShowVpnPrompt(prompt)) => {
                Some(InternetPrivacyEvent::StartVpnPrompt(prompt.clone()))
            }
            (
                InternetPrivacyAction::UseHiddenIp
                | InternetPrivacyAction::VpnPromptResult { granted: true },
                InternetPrivacyEffect::ModeUpdated(HideIp | HideIpLoading),
            ) => Some(InternetPrivacyEvent::HiddenIpSelected),
            (
                InternetPrivacyAction::UseRealIp,
                InternetPrivacyEffect::ModeUpdated(RealIp | RealIpLoading),
            ) => Some(InternetPrivacyEvent::RealIpSelected),
            (_, InternetPrivacyEffect::ModeUpdated(_)) => None,
        }
    }
}
