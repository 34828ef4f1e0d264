use crate::flow::Action;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PermissionsAction {
    LoadPermissions,
    LoadPermissionApps(String),
    /// Grant or revoke the currently opened permission for one app.
    TogglePermission { package_name: String, grant: bool },
}

impl Action for PermissionsAction {}
