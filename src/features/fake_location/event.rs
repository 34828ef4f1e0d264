use crate::flow::{SingleEvent, SingleEventProducer};
use crate::modules::Location;

use super::action::FakeLocationAction;
use super::effect::FakeLocationEffect;
use super::state::FakeLocationState;

#[derive(Debug, Clone, PartialEq)]
pub enum FakeLocationEvent {
    RealLocationSelected,
    RandomLocationSelected(Location),
    SpecificLocationSaved(Location),
    Error(String),
}

impl SingleEvent for FakeLocationEvent {}

pub struct FakeLocationEvents;

impl SingleEventProducer for FakeLocationEvents {
    type State = FakeLocationState;
    type Action = FakeLocationAction;
    type Effect = FakeLocationEffect;
    type Event = FakeLocationEvent;

    fn produce(
        state: &Self::State,
        action: &Self::Action,
        effect: &Self::Effect,
    ) -> Option<Self::Event> {
        if let FakeLocationEffect::Error(message) = effect {
            return Some(FakeLocationEvent::Error(message.clone()));
        }
        match action {
            FakeLocationAction::Init => None,
            FakeLocationAction::UseRealLocation => Some(FakeLocationEvent::RealLocationSelected),
            FakeLocationAction::UseRandomLocation => state
                .location
                .map(FakeLocationEvent::RandomLocationSelected),
            FakeLocationAction::SetSpecificLocation { .. } => state
                .location
                .map(FakeLocationEvent::SpecificLocationSaved),
        }
    }
}
