use crate::flow::Effect;
use crate::modules::{Permission, PermissionMode};

use super::state::PermissionApps;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PermissionsEffect {
    PermissionsLoaded(Vec<Permission>),
    PermissionAppsLoaded(PermissionApps),
    PermissionToggled {
        permission_id: String,
        package_name: String,
        mode: PermissionMode,
    },
    Error(String),
}

impl Effect for PermissionsEffect {}
