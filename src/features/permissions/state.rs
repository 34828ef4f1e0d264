use serde::Serialize;

use crate::flow::State;
use crate::modules::{AppPermission, Permission};

/// One permission with the apps that requested it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PermissionApps {
    pub permission: Permission,
    pub apps: Vec<AppPermission>,
}

impl PermissionApps {
    pub fn granted_count(&self) -> usize {
        self.apps.iter().filter(|app| app.mode.is_granted()).count()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct PermissionsState {
    pub permissions: Vec<Permission>,
    /// Permission currently opened, if any.
    pub current: Option<PermissionApps>,
}

impl State for PermissionsState {}
