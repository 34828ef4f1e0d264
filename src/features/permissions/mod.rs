//! Permissions screen: list permissions, inspect the apps holding one,
//! grant or revoke it per app.

mod action;
mod actor;
mod effect;
mod event;
mod reducer;
mod state;

use std::sync::Arc;

pub use action::PermissionsAction;
pub use actor::PermissionsActor;
pub use effect::PermissionsEffect;
pub use event::{PermissionsEvent, PermissionsEvents};
pub use reducer::PermissionsReducer;
pub use state::{PermissionApps, PermissionsState};

use crate::flow::{Feature, Scope};
use crate::modules::PermissionsPrivacyModule;

pub type PermissionsFeature =
    Feature<PermissionsState, PermissionsAction, PermissionsEffect, PermissionsEvent>;

pub fn create(
    scope: Scope,
    initial: PermissionsState,
    module: Arc<dyn PermissionsPrivacyModule>,
) -> PermissionsFeature {
    Feature::builder(
        "permissions",
        initial,
        PermissionsActor::new(module),
        PermissionsReducer,
    )
    .single_events(PermissionsEvents)
    .scope(scope)
    .build()
}
