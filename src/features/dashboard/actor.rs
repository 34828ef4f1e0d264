use futures::StreamExt;

use crate::flow::{effects, Actor, Effects};
use crate::modules::{ModuleError, PrivacyModules};

use super::action::DashboardAction;
use super::effect::DashboardEffect;
use super::state::{DashboardState, DashboardSummary};

pub struct DashboardActor {
    modules: PrivacyModules,
}

impl DashboardActor {
    pub fn new(modules: PrivacyModules) -> Self {
        Self { modules }
    }
}

impl Actor for DashboardActor {
    type State = DashboardState;
    type Action = DashboardAction;
    type Effect = DashboardEffect;

    fn act(&self, _state: Self::State, action: Self::Action) -> Effects<Self::Effect> {
        let modules = self.modules.clone();
        match action {
            DashboardAction::Init => effects::just(DashboardEffect::Loading)
                .chain(effects::once(async move { screen(&modules).await }))
                .boxed(),
            DashboardAction::TogglePrivacy => effects::many(async move {
                let toggled = async {
                    let enabled = !modules.trackers.is_blocking_enabled().await?;
                    modules.trackers.set_blocking_enabled(enabled).await?;
                    Ok::<_, ModuleError>(enabled)
                };
                match toggled.await {
                    Ok(enabled) => vec![
                        DashboardEffect::QuickPrivacyToggled(enabled),
                        screen(&modules).await,
                    ],
                    Err(err) => vec![failure("Can't toggle quick privacy", err)],
                }
            }),
            DashboardAction::ShowFakeLocation => effects::just(DashboardEffect::OpenFakeLocation),
            DashboardAction::ShowInternetPrivacy => {
                effects::just(DashboardEffect::OpenInternetPrivacy)
            }
            DashboardAction::ShowPermissions => effects::just(DashboardEffect::OpenPermissions),
            DashboardAction::ShowTrackers => effects::just(DashboardEffect::OpenTrackers),
            DashboardAction::ShowAppTrackers { package_name } => {
                effects::just(DashboardEffect::OpenAppTrackers(package_name))
            }
        }
    }
}

async fn screen(modules: &PrivacyModules) -> DashboardEffect {
    match summary(modules).await {
        Ok((summary, enabled)) => DashboardEffect::ScreenUpdated { summary, enabled },
        Err(err) => failure("Can't load dashboard", err),
    }
}

async fn summary(modules: &PrivacyModules) -> Result<(DashboardSummary, bool), ModuleError> {
    let location = modules.location.fake_location_state().await?;
    let internet = modules.ip_scrambler.status().await?;
    let trackers = modules.trackers.trackers().await?;
    let statistics = modules.trackers.statistics().await?;
    let permissions = modules.permissions.list_permissions().await?;
    let enabled = modules.trackers.is_blocking_enabled().await?;

    Ok((
        DashboardSummary {
            location_mode: location.mode,
            internet_mode: internet.into(),
            trackers_count: trackers.len(),
            active_trackers_count: statistics.active_trackers,
            total_calls: statistics.total_calls,
            blocked_calls: statistics.blocked_calls,
            permissions_count: permissions.len(),
        },
        enabled,
    ))
}

fn failure(message: &str, err: ModuleError) -> DashboardEffect {
    tracing::warn!(error = %err, "{}", message);
    DashboardEffect::Error(message.to_string())
}
