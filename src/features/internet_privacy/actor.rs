use std::sync::Arc;

use crate::flow::{effects, Actor, Effects};
use crate::modules::{InternetPrivacyMode, IpScramblerModule, ModuleError};

use super::action::InternetPrivacyAction;
use super::effect::InternetPrivacyEffect;
use super::state::InternetPrivacyState;

pub struct InternetPrivacyActor {
    module: Arc<dyn IpScramblerModule>,
}

impl InternetPrivacyActor {
    pub fn new(module: Arc<dyn IpScramblerModule>) -> Self {
        Self { module }
    }
}

impl Actor for InternetPrivacyActor {
    type State = InternetPrivacyState;
    type Action = InternetPrivacyAction;
    type Effect = InternetPrivacyEffect;

    fn act(&self, state: Self::State, action: Self::Action) -> Effects<Self::Effect> {
        let module = Arc::clone(&self.module);
        match action {
            InternetPrivacyAction::LoadInternetMode => effects::once(async move {
                match module.status().await {
                    Ok(status) => InternetPrivacyEffect::ModeUpdated(status.into()),
                    Err(err) => failure("Can't read IP scrambling status", err),
                }
            }),
            InternetPrivacyAction::UseHiddenIp => {
                if state.mode != InternetPrivacyMode::RealIp {
                    return effects::none();
                }
                effects::once(async move {
                    match module.prepare_android_vpn().await {
                        Ok(Some(prompt)) => InternetPrivacyEffect::ShowVpnPrompt(prompt),
                        Ok(None) => start(module.as_ref()).await,
                        Err(err) => failure("Can't hide IP", err),
                    }
                })
            }
            InternetPrivacyAction::VpnPromptResult { granted: true } => {
                effects::once(async move { start(module.as_ref()).await })
            }
            InternetPrivacyAction::VpnPromptResult { granted: false } => effects::just(
                InternetPrivacyEffect::Error("VPN permission denied".to_string()),
            ),
            InternetPrivacyAction::UseRealIp => {
                if state.mode != InternetPrivacyMode::HideIp {
                    return effects::none();
                }
                effects::once(async move {
                    if let Err(err) = module.stop().await {
                        return failure("Can't restore real IP", err);
                    }
                    match module.status().await {
                        Ok(status) => InternetPrivacyEffect::ModeUpdated(status.into()),
                        Err(err) => failure("Can't restore real IP", err),
                    }
                })
            }
            InternetPrivacyAction::StatusChanged(status) => {
                effects::just(InternetPrivacyEffect::ModeUpdated(status.into()))
            }
        }
    }
}

async fn start(module: &dyn IpScramblerModule) -> InternetPrivacyEffect {
    if let Err(err) = module.start().await {
        return failure("Can't hide IP", err);
    }
    match module.status().await {
        Ok(status) => InternetPrivacyEffect::ModeUpdated(status.into()),
        Err(err) => failure("Can't hide IP", err),
    }
}

fn failure(message: &str, err: ModuleError) -> InternetPrivacyEffect {
    tracing::warn!(error = %err, "{}", message);
    InternetPrivacyEffect::Error(message.to_string())
}
