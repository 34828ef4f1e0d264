//! Fake location screen: real, random city, or user-picked coordinates.

mod action;
mod actor;
mod effect;
mod event;
mod reducer;
mod state;

use std::sync::Arc;

pub use action::FakeLocationAction;
pub use actor::FakeLocationActor;
pub use effect::FakeLocationEffect;
pub use event::{FakeLocationEvent, FakeLocationEvents};
pub use reducer::FakeLocationReducer;
pub use state::FakeLocationState;

use crate::config::LocationConfig;
use crate::flow::{Feature, Scope};
use crate::modules::LocationPrivacyModule;

pub type FakeLocationFeature =
    Feature<FakeLocationState, FakeLocationAction, FakeLocationEffect, FakeLocationEvent>;

pub fn create(
    scope: Scope,
    initial: FakeLocationState,
    module: Arc<dyn LocationPrivacyModule>,
    config: &LocationConfig,
) -> FakeLocationFeature {
    Feature::builder(
        "fake_location",
        initial,
        FakeLocationActor::new(module, config),
        FakeLocationReducer,
    )
    .single_events(FakeLocationEvents)
    .scope(scope)
    .build()
}
