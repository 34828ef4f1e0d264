mod common;

use common::within;
use privacy_central::features::permissions::{
    self, PermissionsAction, PermissionsEvent, PermissionsFeature, PermissionsState,
};
use privacy_central::flow::Scope;
use privacy_central::modules::memory::MemoryModules;
use privacy_central::modules::{ModuleError, PermissionMode};

const CAMERA: &str = "android.permission.CAMERA";

fn feature(modules: &MemoryModules) -> PermissionsFeature {
    permissions::create(
        Scope::new(),
        PermissionsState::default(),
        modules.permissions.clone(),
    )
}

async fn run_all(feature: &PermissionsFeature, actions: Vec<PermissionsAction>) {
    for action in actions {
        feature.submit(action).unwrap();
        within(feature.settle()).await;
    }
}

#[tokio::test]
async fn load_lists_permissions() {
    let modules = common::modules();
    let feature = feature(&modules);

    run_all(&feature, vec![PermissionsAction::LoadPermissions]).await;

    let labels: Vec<String> = feature
        .state()
        .permissions
        .into_iter()
        .map(|permission| permission.label)
        .collect();
    assert_eq!(labels, vec!["Location", "Camera", "Microphone"]);
}

#[tokio::test]
async fn opening_permission_lists_apps_by_label() {
    let modules = common::modules();
    let feature = feature(&modules);

    run_all(
        &feature,
        vec![PermissionsAction::LoadPermissionApps(CAMERA.to_string())],
    )
    .await;

    let current = feature.state().current.expect("permission opened");
    assert_eq!(current.permission.id, CAMERA);
    let apps: Vec<&str> = current
        .apps
        .iter()
        .map(|entry| entry.app.label.as_str())
        .collect();
    assert_eq!(apps, vec!["Camera", "Chat"]);
    assert_eq!(current.granted_count(), 2);
}

#[tokio::test]
async fn revoking_updates_module_and_state() {
    let modules = common::modules();
    let feature = feature(&modules);

    run_all(
        &feature,
        vec![
            PermissionsAction::LoadPermissionApps(CAMERA.to_string()),
            PermissionsAction::TogglePermission {
                package_name: "org.example.camera".to_string(),
                grant: false,
            },
        ],
    )
    .await;

    assert_eq!(
        modules.permissions.mode_of("org.example.camera", CAMERA),
        Some(PermissionMode::Ignored)
    );
    let current = feature.state().current.expect("permission opened");
    assert_eq!(current.granted_count(), 1);
}

#[tokio::test]
async fn toggle_without_open_permission_reports_error() {
    let modules = common::modules();
    let feature = feature(&modules);
    let mut events = feature.single_events().unwrap();

    run_all(
        &feature,
        vec![PermissionsAction::TogglePermission {
            package_name: "org.example.camera".to_string(),
            grant: false,
        }],
    )
    .await;

    assert_eq!(
        events.drain(),
        vec![PermissionsEvent::Error("Can't toggle permission".to_string())]
    );
    assert_eq!(
        modules.permissions.mode_of("org.example.camera", CAMERA),
        Some(PermissionMode::Allowed)
    );
}

#[tokio::test]
async fn module_failure_keeps_state() {
    let modules = common::modules();
    let feature = feature(&modules);
    let mut events = feature.single_events().unwrap();

    modules.permissions.failures().fail_next(ModuleError::Unavailable {
        module: "permissions",
    });
    run_all(&feature, vec![PermissionsAction::LoadPermissions]).await;

    assert_eq!(
        events.drain(),
        vec![PermissionsEvent::Error("Can't load permissions".to_string())]
    );
    assert_eq!(feature.state(), PermissionsState::default());
}

#[tokio::test]
async fn toggling_app_that_never_requested_permission_is_rejected() {
    let modules = common::modules();
    let feature = feature(&modules);
    let mut events = feature.single_events().unwrap();

    run_all(
        &feature,
        vec![
            PermissionsAction::LoadPermissionApps(CAMERA.to_string()),
            PermissionsAction::TogglePermission {
                package_name: "org.example.maps".to_string(),
                grant: true,
            },
        ],
    )
    .await;

    assert_eq!(
        events.drain(),
        vec![PermissionsEvent::Error("Can't toggle permission".to_string())]
    );
    assert_eq!(modules.permissions.mode_of("org.example.maps", CAMERA), None);
    let current = feature.state().current.expect("permission opened");
    assert_eq!(current.apps.len(), 2);
}
