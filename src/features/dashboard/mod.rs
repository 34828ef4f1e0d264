//! Dashboard: summary of every privacy setting, quick privacy switch, and
//! navigation to the detail screens.

mod action;
mod actor;
mod effect;
mod event;
mod reducer;
mod state;

pub use action::DashboardAction;
pub use actor::DashboardActor;
pub use effect::DashboardEffect;
pub use event::{DashboardEvent, DashboardEvents};
pub use reducer::DashboardReducer;
pub use state::{DashboardState, DashboardSummary};

use crate::flow::{Feature, Scope};
use crate::modules::PrivacyModules;

pub type DashboardFeature = Feature<DashboardState, DashboardAction, DashboardEffect, DashboardEvent>;

pub fn create(scope: Scope, initial: DashboardState, modules: PrivacyModules) -> DashboardFeature {
    Feature::builder(
        "dashboard",
        initial,
        DashboardActor::new(modules),
        DashboardReducer,
    )
    .single_events(DashboardEvents)
    .scope(scope)
    .build()
}
