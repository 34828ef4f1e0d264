use crate::flow::Effect;
use crate::modules::{InternetPrivacyMode, VpnPrompt};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InternetPrivacyEffect {
    ModeUpdated(InternetPrivacyMode),
    ShowVpnPrompt(VpnPrompt),
    Error(String),
}

impl Effect for InternetPrivacyEffect {}
