use crate::flow::Reducer;

use super::effect::PermissionsEffect;
use super::state::PermissionsState;

pub struct PermissionsReducer;

impl Reducer for PermissionsReducer {
    type State = PermissionsState;
    type Effect = PermissionsEffect;

    fn reduce(state: Self::State, effect: Self::Effect) -> Self::State {
        match effect {
            PermissionsEffect::PermissionsLoaded(permissions) => PermissionsState {
                permissions,
                ..state
            },
            PermissionsEffect::PermissionAppsLoaded(current) => PermissionsState {
                current: Some(current),
                ..state
            },
            PermissionsEffect::PermissionToggled {
                permission_id,
                package_name,
                mode,
            } => {
                let mut state = state;
                // A late toggle for a permission that is no longer open is dropped.
                if let Some(current) = state
                    .current
                    .as_mut()
                    .filter(|current| current.permission.id == permission_id)
                {
                    if let Some(entry) = current
                        .apps
                        .iter_mut()
                        .find(|entry| entry.app.package_name == package_name)
                    {
                        entry.mode = mode;
                    }
                }
                state
            }
            PermissionsEffect::Error(_) => state,
        }
    }
}
