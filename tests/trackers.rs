mod common;

use common::within;
use privacy_central::features::app_trackers::{
    self, AppTrackersAction, AppTrackersEvent, AppTrackersFeature, AppTrackersState,
};
use privacy_central::features::trackers::{
    self, TrackersAction, TrackersEvent, TrackersFeature, TrackersState,
};
use privacy_central::flow::Scope;
use privacy_central::modules::memory::MemoryModules;
use privacy_central::modules::TrackersPrivacyModule;

const NEWS: u32 = 10103;
const MAPS: u32 = 10101;
const CHAT: u32 = 10104;

fn trackers_feature(modules: &MemoryModules) -> TrackersFeature {
    trackers::create(
        Scope::new(),
        TrackersState::default(),
        modules.trackers.clone(),
    )
}

fn app_trackers_feature(modules: &MemoryModules) -> AppTrackersFeature {
    app_trackers::create(
        Scope::new(),
        AppTrackersState::default(),
        modules.permissions.clone(),
        modules.trackers.clone(),
    )
}

#[tokio::test]
async fn toggle_without_selection_reports_error() {
    let modules = common::modules();
    let feature = trackers_feature(&modules);
    let mut events = feature.single_events().unwrap();

    feature
        .submit(TrackersAction::ToggleTracker {
            uid: NEWS,
            blocked: false,
        })
        .unwrap();
    within(feature.settle()).await;

    assert_eq!(
        events.drain(),
        vec![TrackersEvent::Error("Can't toggle tracker".to_string())]
    );
    assert_eq!(feature.state(), TrackersState::default());
    assert!(modules.trackers.is_effectively_blocked(NEWS, "adtrack"));
}

#[tokio::test]
async fn load_lists_every_tracker() {
    let modules = common::modules();
    let feature = trackers_feature(&modules);

    feature.submit(TrackersAction::LoadTrackers).unwrap();
    within(feature.settle()).await;

    let ids: Vec<String> = feature
        .state()
        .trackers
        .into_iter()
        .map(|tracker| tracker.id)
        .collect();
    assert_eq!(ids, vec!["adtrack".to_string(), "crashbeacon".to_string()]);
}

#[tokio::test]
async fn selected_tracker_lists_apps_with_block_status() {
    let modules = common::modules();
    let feature = trackers_feature(&modules);

    feature
        .submit(TrackersAction::SelectTracker("adtrack".to_string()))
        .unwrap();
    within(feature.settle()).await;

    let selected = feature.state().selected.expect("tracker selected");
    assert_eq!(selected.tracker.id, "adtrack");
    let apps: Vec<(u32, bool)> = selected
        .apps
        .iter()
        .map(|entry| (entry.app.uid, entry.blocked))
        .collect();
    assert_eq!(apps, vec![(NEWS, true), (MAPS, false)]);
}

#[tokio::test]
async fn toggling_selected_tracker_updates_module_and_state() {
    let modules = common::modules();
    let feature = trackers_feature(&modules);

    feature
        .submit(TrackersAction::SelectTracker("adtrack".to_string()))
        .unwrap();
    within(feature.settle()).await;
    feature
        .submit(TrackersAction::ToggleTracker {
            uid: MAPS,
            blocked: true,
        })
        .unwrap();
    within(feature.settle()).await;

    assert!(modules.trackers.is_effectively_blocked(MAPS, "adtrack"));
    let selected = feature.state().selected.expect("tracker selected");
    assert!(selected.apps.iter().all(|entry| entry.blocked));
}

#[tokio::test]
async fn unknown_tracker_reports_error() {
    let modules = common::modules();
    let feature = trackers_feature(&modules);
    let mut events = feature.single_events().unwrap();

    feature
        .submit(TrackersAction::SelectTracker("nope".to_string()))
        .unwrap();
    within(feature.settle()).await;

    assert_eq!(
        events.drain(),
        vec![TrackersEvent::Error("Can't load tracker".to_string())]
    );
    assert!(feature.state().selected.is_none());
}

#[tokio::test]
async fn app_trackers_load_app_and_block_status() {
    let modules = common::modules();
    let feature = app_trackers_feature(&modules);

    feature
        .submit(AppTrackersAction::Init {
            package_name: "org.example.news".to_string(),
        })
        .unwrap();
    within(feature.settle()).await;

    let state = feature.state();
    assert_eq!(state.app.map(|app| app.uid), Some(NEWS));
    assert!(state.blocking_activated);
    assert_eq!(state.trackers.len(), 1);
    assert_eq!(state.trackers[0].tracker.id, "adtrack");
    assert!(state.trackers[0].blocked);
}

#[tokio::test]
async fn app_trackers_without_app_report_error() {
    let modules = common::modules();
    let feature = app_trackers_feature(&modules);
    let mut events = feature.single_events().unwrap();

    feature
        .submit(AppTrackersAction::BlockAllToggle { enabled: false })
        .unwrap();
    within(feature.settle()).await;

    assert_eq!(
        events.drain(),
        vec![AppTrackersEvent::Error("No application selected".to_string())]
    );
}

#[tokio::test]
async fn whitelisted_app_cannot_toggle_single_trackers() {
    let modules = common::modules();
    let feature = app_trackers_feature(&modules);
    let mut events = feature.single_events().unwrap();

    for action in [
        AppTrackersAction::Init {
            package_name: "org.example.chat".to_string(),
        },
        AppTrackersAction::BlockAllToggle { enabled: false },
        AppTrackersAction::ToggleTracker {
            tracker_id: "crashbeacon".to_string(),
            blocked: true,
        },
    ] {
        feature.submit(action).unwrap();
        within(feature.settle()).await;
    }

    assert!(!feature.state().blocking_activated);
    assert!(modules.trackers.is_whitelisted(CHAT).await.unwrap());
    assert!(!modules.trackers.is_blocked(CHAT, "crashbeacon").await.unwrap());
    assert_eq!(
        events.drain(),
        vec![AppTrackersEvent::Error(
            "Enable tracker blocking first".to_string()
        )]
    );
}

#[tokio::test]
async fn app_tracker_toggle_updates_entry() {
    let modules = common::modules();
    let feature = app_trackers_feature(&modules);

    for action in [
        AppTrackersAction::Init {
            package_name: "org.example.chat".to_string(),
        },
        AppTrackersAction::ToggleTracker {
            tracker_id: "crashbeacon".to_string(),
            blocked: true,
        },
    ] {
        feature.submit(action).unwrap();
        within(feature.settle()).await;
    }

    assert!(feature.state().trackers[0].blocked);
    assert!(modules.trackers.is_effectively_blocked(CHAT, "crashbeacon"));
}
