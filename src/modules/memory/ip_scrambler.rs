use std::sync::atomic::{AtomicBool, Ordering};

use async_trait::async_trait;
use tokio::sync::watch;

use super::FailureSwitch;
use crate::modules::{IpScramblerModule, IpScramblerStatus, ModuleError, VpnPrompt};

/// Simulated IP scrambling service.
///
/// `start` goes Starting → On and `stop` goes Stopping → Off, pushing each
/// status to listeners. Until `start` succeeds once, `prepare_android_vpn`
/// keeps asking for consent when consent is required.
pub struct MemoryIpScrambler {
    consent_pending: AtomicBool,
    status: watch::Sender<IpScramblerStatus>,
    failures: FailureSwitch,
}

impl MemoryIpScrambler {
    pub fn new(require_consent: bool) -> Self {
        let (status, _) = watch::channel(IpScramblerStatus::Off);
        Self {
            consent_pending: AtomicBool::new(require_consent),
            status,
            failures: FailureSwitch::default(),
        }
    }

    pub fn failures(&self) -> &FailureSwitch {
        &self.failures
    }

    /// Simulate a status change coming from the service itself.
    pub fn push_status(&self, status: IpScramblerStatus) {
        tracing::debug!(?status, "IP scrambler status");
        self.status.send_replace(status);
    }

    pub fn current(&self) -> IpScramblerStatus {
        *self.status.borrow()
    }
}

#[async_trait]
impl IpScramblerModule for MemoryIpScrambler {
    async fn prepare_android_vpn(&self) -> Result<Option<VpnPrompt>, ModuleError> {
        self.failures.check()?;
        if !self.consent_pending.load(Ordering::SeqCst) {
            return Ok(None);
        }
        Ok(Some(VpnPrompt {
            id: uuid::Uuid::new_v4().to_string(),
            message: "Allow the privacy service to set up a VPN connection?".to_string(),
        }))
    }

    async fn start(&self) -> Result<(), ModuleError> {
        self.failures.check()?;
        if matches!(self.current(), IpScramblerStatus::On | IpScramblerStatus::Starting) {
            return Ok(());
        }
        self.consent_pending.store(false, Ordering::SeqCst);
        self.push_status(IpScramblerStatus::Starting);
        self.push_status(IpScramblerStatus::On);
        Ok(())
    }

    async fn stop(&self) -> Result<(), ModuleError> {
        self.failures.check()?;
        if matches!(self.current(), IpScramblerStatus::Off | IpScramblerStatus::Stopping) {
            return Ok(());
        }
        self.push_status(IpScramblerStatus::Stopping);
        self.push_status(IpScramblerStatus::Off);
        Ok(())
    }

    async fn status(&self) -> Result<IpScramblerStatus, ModuleError> {
        self.failures.check()?;
        Ok(self.current())
    }

    fn status_updates(&self) -> watch::Receiver<IpScramblerStatus> {
        self.status.subscribe()
    }
}
