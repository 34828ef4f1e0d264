use async_trait::async_trait;

use super::error::ModuleError;
use super::types::{AppPermission, ApplicationDescription, Permission, PermissionMode};

/// Permission query/toggle service (app-ops).
#[async_trait]
pub trait PermissionsPrivacyModule: Send + Sync {
    /// Every runtime permission tracked by the dashboard.
    async fn list_permissions(&self) -> Result<Vec<Permission>, ModuleError>;

    /// Apps that requested `permission_id`, with their current mode.
    async fn apps_for_permission(
        &self,
        permission_id: &str,
    ) -> Result<Vec<AppPermission>, ModuleError>;

    async fn set_permission_mode(
        &self,
        package_name: &str,
        permission_id: &str,
        mode: PermissionMode,
    ) -> Result<(), ModuleError>;

    async fn application_description(
        &self,
        package_name: &str,
    ) -> Result<ApplicationDescription, ModuleError>;
}
