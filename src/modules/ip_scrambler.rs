use async_trait::async_trait;
use tokio::sync::watch;

use super::error::ModuleError;
use super::types::{IpScramblerStatus, VpnPrompt};

/// Internet traffic anonymization (VPN-based IP scrambling).
#[async_trait]
pub trait IpScramblerModule: Send + Sync {
    /// `Some(prompt)` when the user still has to consent to the VPN.
    async fn prepare_android_vpn(&self) -> Result<Option<VpnPrompt>, ModuleError>;

    async fn start(&self) -> Result<(), ModuleError>;

    async fn stop(&self) -> Result<(), ModuleError>;

    async fn status(&self) -> Result<IpScramblerStatus, ModuleError>;

    /// Push-style status listener. The receiver starts at the current status.
    fn status_updates(&self) -> watch::Receiver<IpScramblerStatus>;
}
