//! Per-app tracker screen: whitelist an app or block its trackers one by one.

mod action;
mod actor;
mod effect;
mod event;
mod reducer;
mod state;

use std::sync::Arc;

pub use action::AppTrackersAction;
pub use actor::AppTrackersActor;
pub use effect::AppTrackersEffect;
pub use event::{AppTrackersEvent, AppTrackersEvents};
pub use reducer::AppTrackersReducer;
pub use state::{AppTrackersState, TrackerBlockState};

use crate::flow::{Feature, Scope};
use crate::modules::{PermissionsPrivacyModule, TrackersPrivacyModule};

pub type AppTrackersFeature =
    Feature<AppTrackersState, AppTrackersAction, AppTrackersEffect, AppTrackersEvent>;

pub fn create(
    scope: Scope,
    initial: AppTrackersState,
    permissions: Arc<dyn PermissionsPrivacyModule>,
    trackers: Arc<dyn TrackersPrivacyModule>,
) -> AppTrackersFeature {
    Feature::builder(
        "app_trackers",
        initial,
        AppTrackersActor::new(permissions, trackers),
        AppTrackersReducer,
    )
    .single_events(AppTrackersEvents)
    .scope(scope)
    .build()
}
