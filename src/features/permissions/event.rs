use crate::flow::{SingleEvent, SingleEventProducer};

use super::action::PermissionsAction;
use super::effect::PermissionsEffect;
use super::state::PermissionsState;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PermissionsEvent {
    Error(String),
}

impl SingleEvent for PermissionsEvent {}

pub struct PermissionsEvents;

impl SingleEventProducer for PermissionsEvents {
    type State = PermissionsState;
    type Action = PermissionsAction;
    type Effect = PermissionsEffect;
    type Event = PermissionsEvent;

    fn produce(
        _state: &Self::State,
        _action: &Self::Action,
        effect: &Self::Effect,
    ) -> Option<Self::Event> {
        match effect {
            PermissionsEffect::Error(message) => Some(PermissionsEvent::Error(message.clone())),
            PermissionsEffect::PermissionsLoaded(_)
            | PermissionsEffect::PermissionAppsLoaded(_)
            | PermissionsEffect::PermissionToggled { .. } => None,
        }
    }
}
