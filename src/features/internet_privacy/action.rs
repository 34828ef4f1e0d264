use crate::flow::Action;
use crate::modules::IpScramblerStatus;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InternetPrivacyAction {
    /// Read the current status from the module.
    LoadInternetMode,
    UseRealIp,
    UseHiddenIp,
    /// Outcome of the VPN consent prompt.
    VpnPromptResult { granted: bool },
    /// Pushed by the module's status listener.
    StatusChanged(IpScramblerStatus),
}

impl Action for InternetPrivacyAction {}
