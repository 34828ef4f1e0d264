use std::sync::Arc;

use crate::flow::{effects, Actor, Effects};
use crate::modules::{ModuleError, TrackedApp, Tracker, TrackersPrivacyModule};

use super::action::TrackersAction;
use super::effect::TrackersEffect;
use super::state::{TrackerDetails, TrackersState};

pub struct TrackersActor {
    module: Arc<dyn TrackersPrivacyModule>,
}

impl TrackersActor {
    pub fn new(module: Arc<dyn TrackersPrivacyModule>) -> Self {
        Self { module }
    }
}

impl Actor for TrackersActor {
    type State = TrackersState;
    type Action = TrackersAction;
    type Effect = TrackersEffect;

    fn act(&self, state: Self::State, action: Self::Action) -> Effects<Self::Effect> {
        let module = Arc::clone(&self.module);
        match action {
            TrackersAction::LoadTrackers => effects::once(async move {
                match module.trackers().await {
                    Ok(trackers) => TrackersEffect::TrackersLoaded(trackers),
                    Err(err) => failure("Can't load trackers", err),
                }
            }),
            TrackersAction::SelectTracker(tracker_id) => effects::once(async move {
                let found = async move {
                    let tracker = module
                        .trackers()
                        .await?
                        .into_iter()
                        .find(|tracker| tracker.id == tracker_id)
                        .ok_or_else(|| ModuleError::NotFound {
                            what: format!("Tracker '{}'", tracker_id),
                        })?;
                    details(module.as_ref(), tracker).await
                };
                match found.await {
                    Ok(details) => TrackersEffect::TrackerSelected(details),
                    Err(err) => failure("Can't load tracker", err),
                }
            }),
            TrackersAction::ToggleTracker { uid, blocked } => {
                let Some(selected) = state.selected else {
                    return effects::just(TrackersEffect::Error(
                        "Can't toggle tracker".to_string(),
                    ));
                };
                effects::once(async move {
                    let toggled = async move {
                        module
                            .set_blocked(uid, &selected.tracker.id, blocked)
                            .await?;
                        details(module.as_ref(), selected.tracker).await
                    };
                    match toggled.await {
                        Ok(details) => TrackersEffect::TrackerSelected(details),
                        Err(err) => failure("Can't toggle tracker", err),
                    }
                })
            }
        }
    }
}

async fn details(
    module: &dyn TrackersPrivacyModule,
    tracker: Tracker,
) -> Result<TrackerDetails, ModuleError> {
    let mut apps = Vec::new();
    for app in module.apps_for_tracker(&tracker.id).await? {
        let blocked = module.is_blocked(app.uid, &tracker.id).await?;
        apps.push(TrackedApp { app, blocked });
    }
    Ok(TrackerDetails { tracker, apps })
}

fn failure(message: &str, err: ModuleError) -> TrackersEffect {
    tracing::warn!(error = %err, "{}", message);
    TrackersEffect::Error(message.to_string())
}
