use std::collections::HashMap;

use async_trait::async_trait;
use parking_lot::Mutex;

use super::{AppRegistry, FailureSwitch};
use crate::config::PermissionFixture;
use crate::modules::{
    AppPermission, ApplicationDescription, ModuleError, Permission, PermissionMode,
    PermissionsPrivacyModule,
};

/// App-ops table keyed by permission id, then package name.
pub struct MemoryPermissions {
    registry: AppRegistry,
    permissions: Vec<Permission>,
    modes: Mutex<HashMap<String, HashMap<String, PermissionMode>>>,
    failures: FailureSwitch,
}

impl MemoryPermissions {
    pub fn new(registry: AppRegistry, fixtures: &[PermissionFixture]) -> Self {
        let permissions = fixtures
            .iter()
            .map(|fixture| Permission {
                id: fixture.id.clone(),
                label: fixture.label.clone(),
            })
            .collect();

        let modes = fixtures
            .iter()
            .map(|fixture| {
                let allowed = fixture
                    .allowed
                    .iter()
                    .map(|package| (package.clone(), PermissionMode::Allowed));
                let ignored = fixture
                    .ignored
                    .iter()
                    .map(|package| (package.clone(), PermissionMode::Ignored));
                (fixture.id.clone(), allowed.chain(ignored).collect())
            })
            .collect();

        Self {
            registry,
            permissions,
            modes: Mutex::new(modes),
            failures: FailureSwitch::default(),
        }
    }

    pub fn failures(&self) -> &FailureSwitch {
        &self.failures
    }

    /// Current mode, without going through the async contract.
    pub fn mode_of(&self, package_name: &str, permission_id: &str) -> Option<PermissionMode> {
        self.modes
            .lock()
            .get(permission_id)
            .and_then(|apps| apps.get(package_name).copied())
    }

    fn unknown_permission(permission_id: &str) -> ModuleError {
        ModuleError::NotFound {
            what: format!("Permission '{}'", permission_id),
        }
    }
}

#[async_trait]
impl PermissionsPrivacyModule for MemoryPermissions {
    async fn list_permissions(&self) -> Result<Vec<Permission>, ModuleError> {
        self.failures.check()?;
        Ok(self.permissions.clone())
    }

    async fn apps_for_permission(
        &self,
        permission_id: &str,
    ) -> Result<Vec<AppPermission>, ModuleError> {
        self.failures.check()?;
        let modes = self.modes.lock();
        let apps = modes
            .get(permission_id)
            .ok_or_else(|| Self::unknown_permission(permission_id))?;

        let mut entries = apps
            .iter()
            .map(|(package, mode)| {
                Ok(AppPermission {
                    app: self.registry.by_package(package)?,
                    mode: *mode,
                })
            })
            .collect::<Result<Vec<_>, ModuleError>>()?;
        entries.sort_by(|a, b| a.app.label.cmp(&b.app.label));
        Ok(entries)
    }

    async fn set_permission_mode(
        &self,
        package_name: &str,
        permission_id: &str,
        mode: PermissionMode,
    ) -> Result<(), ModuleError> {
        self.failures.check()?;
        self.registry.by_package(package_name)?;
        let mut modes = self.modes.lock();
        let apps = modes
            .get_mut(permission_id)
            .ok_or_else(|| Self::unknown_permission(permission_id))?;
        let Some(current) = apps.get_mut(package_name) else {
            return Err(ModuleError::Rejected {
                reason: format!(
                    "App '{}' did not request permission '{}'",
                    package_name, permission_id
                ),
            });
        };
        *current = mode;
        tracing::debug!(package_name, permission_id, ?mode, "Permission mode set");
        Ok(())
    }

    async fn application_description(
        &self,
        package_name: &str,
    ) -> Result<ApplicationDescription, ModuleError> {
        self.failures.check()?;
        self.registry.by_package(package_name)
    }
}
