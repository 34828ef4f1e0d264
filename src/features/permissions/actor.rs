use std::sync::Arc;

use crate::flow::{effects, Actor, Effects};
use crate::modules::{ModuleError, PermissionMode, PermissionsPrivacyModule};

use super::action::PermissionsAction;
use super::effect::PermissionsEffect;
use super::state::{PermissionApps, PermissionsState};

pub struct PermissionsActor {
    module: Arc<dyn PermissionsPrivacyModule>,
}

impl PermissionsActor {
    pub fn new(module: Arc<dyn PermissionsPrivacyModule>) -> Self {
        Self { module }
    }
}

impl Actor for PermissionsActor {
    type State = PermissionsState;
    type Action = PermissionsAction;
    type Effect = PermissionsEffect;

    fn act(&self, state: Self::State, action: Self::Action) -> Effects<Self::Effect> {
        let module = Arc::clone(&self.module);
        match action {
            PermissionsAction::LoadPermissions => effects::once(async move {
                match module.list_permissions().await {
                    Ok(permissions) => PermissionsEffect::PermissionsLoaded(permissions),
                    Err(err) => failure("Can't load permissions", err),
                }
            }),
            PermissionsAction::LoadPermissionApps(permission_id) => effects::once(async move {
                let loaded = async move {
                    let permission = module
                        .list_permissions()
                        .await?
                        .into_iter()
                        .find(|permission| permission.id == permission_id)
                        .ok_or_else(|| ModuleError::NotFound {
                            what: format!("Permission '{}'", permission_id),
                        })?;
                    let apps = module.apps_for_permission(&permission.id).await?;
                    Ok::<_, ModuleError>(PermissionApps { permission, apps })
                };
                match loaded.await {
                    Ok(current) => PermissionsEffect::PermissionAppsLoaded(current),
                    Err(err) => failure("Can't load permission", err),
                }
            }),
            PermissionsAction::TogglePermission {
                package_name,
                grant,
            } => {
                let Some(current) = state.current else {
                    return effects::just(PermissionsEffect::Error(
                        "Can't toggle permission".to_string(),
                    ));
                };
                let permission_id = current.permission.id;
                let mode = if grant {
                    PermissionMode::Allowed
                } else {
                    PermissionMode::Ignored
                };
                effects::once(async move {
                    match module
                        .set_permission_mode(&package_name, &permission_id, mode)
                        .await
                    {
                        Ok(()) => PermissionsEffect::PermissionToggled {
                            permission_id,
                            package_name,
                            mode,
                        },
                        Err(err) => failure("Can't toggle permission", err),
                    }
                })
            }
        }
    }
}

fn failure(message: &str, err: ModuleError) -> PermissionsEffect {
    tracing::warn!(error = %err, "{}", message);
    PermissionsEffect::Error(message.to_string())
}
