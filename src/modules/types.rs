use serde::{Deserialize, Serialize};

/// Installed application as seen by the privacy modules.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ApplicationDescription {
    pub package_name: String,
    pub uid: u32,
    pub label: String,
}

/// A runtime permission (e.g. "android.permission.CAMERA").
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Permission {
    pub id: String,
    pub label: String,
}

/// App-op mode of one permission for one app.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PermissionMode {
    Allowed,
    Ignored,
    Foreground,
    #[default]
    Default,
}

impl PermissionMode {
    pub fn is_granted(self) -> bool {
        matches!(self, Self::Allowed | Self::Foreground)
    }
}

/// One app's mode for a permission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppPermission {
    pub app: ApplicationDescription,
    pub mode: PermissionMode,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Location {
    pub latitude: f64,
    pub longitude: f64,
}

impl Location {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    /// Latitude within [-90, 90] and longitude within [-180, 180].
    pub fn is_valid(&self) -> bool {
        (-90.0..=90.0).contains(&self.latitude) && (-180.0..=180.0).contains(&self.longitude)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LocationMode {
    #[default]
    Real,
    Random,
    Custom,
}

/// What the location module currently reports to apps.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct FakeLocationState {
    pub mode: LocationMode,
    pub location: Option<Location>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InternetPrivacyMode {
    #[default]
    RealIp,
    HideIp,
    RealIpLoading,
    HideIpLoading,
}

/// Status pushed by the IP scrambling service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IpScramblerStatus {
    #[default]
    Off,
    Starting,
    On,
    Stopping,
}

impl From<IpScramblerStatus> for InternetPrivacyMode {
    fn from(status: IpScramblerStatus) -> Self {
        match status {
            IpScramblerStatus::Off => InternetPrivacyMode::RealIp,
            IpScramblerStatus::Starting => InternetPrivacyMode::HideIpLoading,
            IpScramblerStatus::On => InternetPrivacyMode::HideIp,
            IpScramblerStatus::Stopping => InternetPrivacyMode::RealIpLoading,
        }
    }
}

/// System consent dialog that must be shown before the VPN can start.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VpnPrompt {
    pub id: String,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Tracker {
    pub id: String,
    pub name: String,
    pub hostname: String,
}

/// An app contacting a tracker, with its block status for that tracker.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrackedApp {
    pub app: ApplicationDescription,
    pub blocked: bool,
}

/// Aggregated tracker activity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct TrackerStatistics {
    pub total_calls: u64,
    pub blocked_calls: u64,
    pub active_trackers: usize,
}
