use crate::flow::{SingleEvent, SingleEventProducer};

use super::action::DashboardAction;
use super::effect::DashboardEffect;
use super::state::DashboardState;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DashboardEvent {
    NavigateToFakeLocation,
    NavigateToInternetPrivacy,
    NavigateToPermissions,
    NavigateToTrackers,
    NavigateToAppTrackers(String),
    Error(String),
}

impl SingleEvent for DashboardEvent {}

pub struct DashboardEvents;

impl SingleEventProducer for DashboardEvents {
    type State = DashboardState;
    type Action = DashboardAction;
    type Effect = DashboardEffect;
    type Event = DashboardEvent;

    fn produce(
        _state: &Self::State,
        _action: &Self::Action,
        effect: &Self::Effect,
    ) -> Option<Self::Event> {
        match effect {
            DashboardEffect::OpenFakeLocation => Some(DashboardEvent::NavigateToFakeLocation),
            DashboardEffect::OpenInternetPrivacy => Some(DashboardEvent::NavigateToInternetPrivacy),
            DashboardEffect::OpenPermissions => Some(DashboardEvent::NavigateToPermissions),
            DashboardEffect::OpenTrackers => Some(DashboardEvent::NavigateToTrackers),
            DashboardEffect::OpenAppTrackers(package_name) => {
                Some(DashboardEvent::NavigateToAppTrackers(package_name.clone()))
            }
            DashboardEffect::Error(message) => Some(DashboardEvent::Error(message.clone())),
            DashboardEffect::Loading
            | DashboardEffect::ScreenUpdated { .. }
            | DashboardEffect::QuickPrivacyToggled(_) => None,
        }
    }
}
