//! Demo command line: drives one feature against in-memory modules.

use std::fmt::Debug;
use std::path::PathBuf;
use std::sync::Arc;

use clap::{Parser, Subcommand, ValueEnum};
use futures::stream::{self, BoxStream, StreamExt};
use serde::Serialize;

use crate::config::Config;
use crate::features::{
    app_trackers, dashboard, fake_location, internet_privacy, permissions, trackers,
};
use crate::flow::{Action, Effect, Feature, Scope, SingleEvent, State, View};
use crate::modules::memory::MemoryModules;

#[derive(Debug, Parser)]
#[command(name = "privacy-central", version, about = "Privacy dashboard demo")]
pub struct Cli {
    /// Config file (defaults to the user config directory).
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Print the final state as JSON.
    #[arg(long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Show the dashboard summary.
    Dashboard {
        /// Flip quick privacy before printing.
        #[arg(long)]
        toggle: bool,
    },
    /// Switch IP scrambling.
    Internet {
        #[arg(value_enum)]
        mode: IpChoice,
        /// Accept the VPN consent prompt if one comes up.
        #[arg(long)]
        accept_vpn: bool,
    },
    /// Choose the reported location.
    Location {
        #[command(subcommand)]
        choice: LocationChoice,
    },
    /// List permissions, or the apps holding one.
    Permissions {
        permission: Option<String>,
        /// Grant the permission to this package.
        #[arg(long, requires = "permission")]
        grant: Option<String>,
        /// Revoke the permission from this package.
        #[arg(long, requires = "permission")]
        revoke: Option<String>,
    },
    /// List trackers, or the apps using one.
    Trackers {
        tracker: Option<String>,
        /// Block the tracker for this app uid.
        #[arg(long, requires = "tracker")]
        block: Option<u32>,
        /// Allow the tracker for this app uid.
        #[arg(long, requires = "tracker")]
        allow: Option<u32>,
    },
    /// Trackers of one app.
    AppTrackers {
        package: String,
        #[arg(long, value_enum)]
        block_all: Option<Switch>,
        /// Block one tracker for this app.
        #[arg(long)]
        block: Option<String>,
        /// Allow one tracker for this app.
        #[arg(long)]
        allow: Option<String>,
    },
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum IpChoice {
    Hide,
    Real,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum Switch {
    On,
    Off,
}

#[derive(Debug, Subcommand)]
pub enum LocationChoice {
    Real,
    Random,
    Set {
        #[arg(allow_negative_numbers = true)]
        latitude: f64,
        #[arg(allow_negative_numbers = true)]
        longitude: f64,
    },
}

/// Load the config named on the command line, or the default one.
pub fn load_config(cli: &Cli) -> anyhow::Result<Config> {
    match &cli.config {
        Some(path) if !path.exists() => {
            anyhow::bail!("Config file '{}' does not exist", path.display())
        }
        Some(path) => Ok(Config::load_from(path)?),
        None => Ok(Config::load()?),
    }
}

pub async fn run(cli: Cli, config: Config) -> anyhow::Result<()> {
    let session = Scope::new();
    let _teardown = session.guard();
    let memory = MemoryModules::from_config(&config);
    let modules = memory.privacy_modules();
    let output = Output { json: cli.json };

    match cli.command {
        Command::Dashboard { toggle } => {
            let feature = dashboard::create(
                session.child(),
                dashboard::DashboardState::Loading,
                modules,
            );
            let mut events = feature.single_events()?;
            let view_scope = session.child();
            feature.take_view(
                &view_scope,
                Arc::new(ConsoleView::<_, dashboard::DashboardAction>::new("dashboard")),
                vec![dashboard::DashboardAction::Init],
            );
            feature.settle().await;
            if toggle {
                drive(&feature, vec![dashboard::DashboardAction::TogglePrivacy]).await?;
            }
            view_scope.cancel();
            output.print(&feature, &events.drain())
        }
        Command::Internet { mode, accept_vpn } => {
            let feature = internet_privacy::create(
                session.child(),
                internet_privacy::InternetPrivacyState::default(),
                Arc::clone(&modules.ip_scrambler),
            );
            feature.add_external_actions(internet_privacy::status_actions(
                modules.ip_scrambler.as_ref(),
            ));
            let mut events = feature.single_events()?;
            let choice = match mode {
                IpChoice::Hide => internet_privacy::InternetPrivacyAction::UseHiddenIp,
                IpChoice::Real => internet_privacy::InternetPrivacyAction::UseRealIp,
            };
            drive(
                &feature,
                vec![internet_privacy::InternetPrivacyAction::LoadInternetMode, choice],
            )
            .await?;

            let mut seen = events.drain();
            let prompted = seen
                .iter()
                .any(|event| matches!(event, internet_privacy::InternetPrivacyEvent::StartVpnPrompt(_)));
            if prompted && accept_vpn {
                drive(
                    &feature,
                    vec![internet_privacy::InternetPrivacyAction::VpnPromptResult { granted: true }],
                )
                .await?;
                seen.extend(events.drain());
            }
            output.print(&feature, &seen)
        }
        Command::Location { choice } => {
            let feature = fake_location::create(
                session.child(),
                fake_location::FakeLocationState::default(),
                Arc::clone(&modules.location),
                &config.location,
            );
            let mut events = feature.single_events()?;
            let choice = match choice {
                LocationChoice::Real => fake_location::FakeLocationAction::UseRealLocation,
                LocationChoice::Random => fake_location::FakeLocationAction::UseRandomLocation,
                LocationChoice::Set {
                    latitude,
                    longitude,
                } => fake_location::FakeLocationAction::SetSpecificLocation {
                    latitude,
                    longitude,
                },
            };
            drive(&feature, vec![fake_location::FakeLocationAction::Init, choice]).await?;
            output.print(&feature, &events.drain())
        }
        Command::Permissions {
            permission,
            grant,
            revoke,
        } => {
            let feature = permissions::create(
                session.child(),
                permissions::PermissionsState::default(),
                Arc::clone(&modules.permissions),
            );
            let mut events = feature.single_events()?;
            let mut actions = vec![permissions::PermissionsAction::LoadPermissions];
            if let Some(permission) = permission {
                actions.push(permissions::PermissionsAction::LoadPermissionApps(permission));
            }
            let toggles = grant
                .map(|package_name| (package_name, true))
                .into_iter()
                .chain(revoke.map(|package_name| (package_name, false)));
            for (package_name, grant) in toggles {
                actions.push(permissions::PermissionsAction::TogglePermission {
                    package_name,
                    grant,
                });
            }
            drive(&feature, actions).await?;
            output.print(&feature, &events.drain())
        }
        Command::Trackers {
            tracker,
            block,
            allow,
        } => {
            let feature = trackers::create(
                session.child(),
                trackers::TrackersState::default(),
                Arc::clone(&modules.trackers),
            );
            let mut events = feature.single_events()?;
            let mut actions = vec![trackers::TrackersAction::LoadTrackers];
            if let Some(tracker) = tracker {
                actions.push(trackers::TrackersAction::SelectTracker(tracker));
            }
            let toggles = block
                .map(|uid| (uid, true))
                .into_iter()
                .chain(allow.map(|uid| (uid, false)));
            for (uid, blocked) in toggles {
                actions.push(trackers::TrackersAction::ToggleTracker { uid, blocked });
            }
            drive(&feature, actions).await?;
            output.print(&feature, &events.drain())
        }
        Command::AppTrackers {
            package,
            block_all,
            block,
            allow,
        } => {
            let feature = app_trackers::create(
                session.child(),
                app_trackers::AppTrackersState::default(),
                Arc::clone(&modules.permissions),
                Arc::clone(&modules.trackers),
            );
            let mut events = feature.single_events()?;
            let mut actions = vec![app_trackers::AppTrackersAction::Init {
                package_name: package,
            }];
            if let Some(switch) = block_all {
                actions.push(app_trackers::AppTrackersAction::BlockAllToggle {
                    enabled: matches!(switch, Switch::On),
                });
            }
            let toggles = block
                .map(|tracker_id| (tracker_id, true))
                .into_iter()
                .chain(allow.map(|tracker_id| (tracker_id, false)));
            for (tracker_id, blocked) in toggles {
                actions.push(app_trackers::AppTrackersAction::ToggleTracker {
                    tracker_id,
                    blocked,
                });
            }
            drive(&feature, actions).await?;
            output.print(&feature, &events.drain())
        }
    }
}

/// Submit `actions` one at a time, letting each settle before the next so
/// later actions see the state earlier ones produced.
async fn drive<S, A, E, Ev>(feature: &Feature<S, A, E, Ev>, actions: Vec<A>) -> anyhow::Result<()>
where
    S: State,
    A: Action,
    E: Effect,
    Ev: SingleEvent,
{
    for action in actions {
        feature.submit(action)?;
        feature.settle().await;
    }
    Ok(())
}

/// Logs every rendered state; submits nothing on its own.
struct ConsoleView<S, A> {
    screen: &'static str,
    _types: std::marker::PhantomData<fn(S) -> A>,
}

impl<S, A> ConsoleView<S, A> {
    fn new(screen: &'static str) -> Self {
        Self {
            screen,
            _types: std::marker::PhantomData,
        }
    }
}

impl<S: State, A: Action> View for ConsoleView<S, A> {
    type State = S;
    type Action = A;

    fn render(&self, state: S) {
        tracing::info!(screen = self.screen, ?state, "Render");
    }

    fn actions(&self) -> BoxStream<'static, A> {
        stream::empty().boxed()
    }
}

struct Output {
    json: bool,
}

impl Output {
    fn print<S, A, E, Ev>(&self, feature: &Feature<S, A, E, Ev>, events: &[Ev]) -> anyhow::Result<()>
    where
        S: State + Serialize,
        A: Action,
        E: Effect,
        Ev: SingleEvent + Debug,
    {
        let state = feature.state();
        if self.json {
            let events: Vec<String> = events.iter().map(|event| format!("{:?}", event)).collect();
            let document = serde_json::json!({
                "feature": feature.name(),
                "state": serde_json::to_value(&state)?,
                "events": events,
            });
            println!("{}", serde_json::to_string_pretty(&document)?);
        } else {
            println!("{}: {:#?}", feature.name(), state);
            for event in events {
                println!("event: {:?}", event);
            }
        }
        Ok(())
    }
}
