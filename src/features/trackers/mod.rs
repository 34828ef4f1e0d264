//! Trackers screen: every known tracker, and per tracker the apps using it.

mod action;
mod actor;
mod effect;
mod event;
mod reducer;
mod state;

use std::sync::Arc;

pub use action::TrackersAction;
pub use actor::TrackersActor;
pub use effect::TrackersEffect;
pub use event::{TrackersEvent, TrackersEvents};
pub use reducer::TrackersReducer;
pub use state::{TrackerDetails, TrackersState};

use crate::flow::{Feature, Scope};
use crate::modules::TrackersPrivacyModule;

pub type TrackersFeature = Feature<TrackersState, TrackersAction, TrackersEffect, TrackersEvent>;

pub fn create(
    scope: Scope,
    initial: TrackersState,
    module: Arc<dyn TrackersPrivacyModule>,
) -> TrackersFeature {
    Feature::builder("trackers", initial, TrackersActor::new(module), TrackersReducer)
        .single_events(TrackersEvents)
        .scope(scope)
        .build()
}
