use std::sync::Arc;

use crate::flow::{effects, Actor, Effects};
use crate::modules::{ModuleError, PermissionsPrivacyModule, TrackersPrivacyModule};

use super::action::AppTrackersAction;
use super::effect::AppTrackersEffect;
use super::state::{AppTrackersState, TrackerBlockState};

pub struct AppTrackersActor {
    permissions: Arc<dyn PermissionsPrivacyModule>,
    trackers: Arc<dyn TrackersPrivacyModule>,
}

impl AppTrackersActor {
    pub fn new(
        permissions: Arc<dyn PermissionsPrivacyModule>,
        trackers: Arc<dyn TrackersPrivacyModule>,
    ) -> Self {
        Self {
            permissions,
            trackers,
        }
    }
}

impl Actor for AppTrackersActor {
    type State = AppTrackersState;
    type Action = AppTrackersAction;
    type Effect = AppTrackersEffect;

    fn act(&self, state: Self::State, action: Self::Action) -> Effects<Self::Effect> {
        let permissions = Arc::clone(&self.permissions);
        let trackers = Arc::clone(&self.trackers);
        match action {
            AppTrackersAction::Init { package_name } => effects::once(async move {
                let loaded = async move {
                    let app = permissions.application_description(&package_name).await?;
                    let blocking_activated = !trackers.is_whitelisted(app.uid).await?;
                    let mut entries = Vec::new();
                    for tracker in trackers.trackers_for_app(app.uid).await? {
                        let blocked = trackers.is_blocked(app.uid, &tracker.id).await?;
                        entries.push(TrackerBlockState { tracker, blocked });
                    }
                    Ok::<_, ModuleError>(AppTrackersEffect::AppLoaded {
                        app,
                        blocking_activated,
                        trackers: entries,
                    })
                };
                loaded
                    .await
                    .unwrap_or_else(|err| failure("Can't load application trackers", err))
            }),
            AppTrackersAction::BlockAllToggle { enabled } => {
                let Some(app) = state.app else {
                    return effects::just(AppTrackersEffect::Error(
                        "No application selected".to_string(),
                    ));
                };
                effects::once(async move {
                    match trackers.set_whitelisted(app.uid, !enabled).await {
                        Ok(()) => AppTrackersEffect::BlockingActivated(enabled),
                        Err(err) => failure("Can't change tracker blocking", err),
                    }
                })
            }
            AppTrackersAction::ToggleTracker {
                tracker_id,
                blocked,
            } => {
                let Some(app) = state.app else {
                    return effects::just(AppTrackersEffect::Error(
                        "No application selected".to_string(),
                    ));
                };
                if !state.blocking_activated {
                    return effects::just(AppTrackersEffect::Error(
                        "Enable tracker blocking first".to_string(),
                    ));
                }
                effects::once(async move {
                    match trackers.set_blocked(app.uid, &tracker_id, blocked).await {
                        Ok(()) => AppTrackersEffect::TrackerToggled {
                            tracker_id,
                            blocked,
                        },
                        Err(err) => failure("Can't toggle tracker", err),
                    }
                })
            }
        }
    }
}

fn failure(message: &str, err: ModuleError) -> AppTrackersEffect {
    tracing::warn!(error = %err, "{}", message);
    AppTrackersEffect::Error(message.to_string())
}
