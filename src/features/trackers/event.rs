use crate::flow::{SingleEvent, SingleEventProducer};

use super::action::TrackersAction;
use super::effect::TrackersEffect;
use super::state::TrackersState;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TrackersEvent {
    Error(String),
}

impl SingleEvent for TrackersEvent {}

pub struct TrackersEvents;

impl SingleEventProducer for TrackersEvents {
    type State = TrackersState;
    type Action = TrackersAction;
    type Effect = TrackersEffect;
    type Event = TrackersEvent;

    fn produce(
        _state: &Self::State,
        _action: &Self::Action,
        effect: &Self::Effect,
    ) -> Option<Self::Event> {
        match effect {
            TrackersEffect::Error(message) => Some(TrackersEvent::Error(message.clone())),
            TrackersEffect::TrackersLoaded(_) | TrackersEffect::TrackerSelected(_) => None,
        }
    }
}
