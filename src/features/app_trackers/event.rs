use crate::flow::{SingleEvent, SingleEventProducer};

use super::action::AppTrackersAction;
use super::effect::AppTrackersEffect;
use super::state::AppTrackersState;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppTrackersEvent {
    Error(String),
}

impl SingleEvent for AppTrackersEvent {}

pub struct AppTrackersEvents;

impl SingleEventProducer for AppTrackersEvents {
    type State = AppTrackersState;
    type Action = AppTrackersAction;
    type Effect = AppTrackersEffect;
    type Event = AppTrackersEvent;

    fn produce(
        _state: &Self::State,
        _action: &Self::Action,
        effect: &Self::Effect,
    ) -> Option<Self::Event> {
        match effect {
            AppTrackersEffect::Error(message) => Some(AppTrackersEvent::Error(message.clone())),
            AppTrackersEffect::AppLoaded { .. }
            | AppTrackersEffect::BlockingActivated(_)
            | AppTrackersEffect::TrackerToggled { .. } => None,
        }
    }
}
