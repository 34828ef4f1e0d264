//! Contracts of the platform privacy modules the features delegate to.
//!
//! Real implementations live on the device; [`memory`] provides in-process
//! ones seeded from fixtures, used by the demo CLI and the tests.

mod error;
mod ip_scrambler;
mod location;
pub mod memory;
mod permissions;
mod trackers;
mod types;

use std::sync::Arc;

pub use error::ModuleError;
pub use ip_scrambler::IpScramblerModule;
pub use location::LocationPrivacyModule;
pub use permissions::PermissionsPrivacyModule;
pub use trackers::TrackersPrivacyModule;
pub use types::{
    AppPermission, ApplicationDescription, FakeLocationState, InternetPrivacyMode,
    IpScramblerStatus, Location, LocationMode, Permission, PermissionMode, TrackedApp, Tracker,
    TrackerStatistics, VpnPrompt,
};

/// Handles to every privacy module, as consumed by the features.
#[derive(Clone)]
pub struct PrivacyModules {
    pub permissions: Arc<dyn PermissionsPrivacyModule>,
    pub location: Arc<dyn LocationPrivacyModule>,
    pub ip_scrambler: Arc<dyn IpScramblerModule>,
    pub trackers: Arc<dyn TrackersPrivacyModule>,
}
