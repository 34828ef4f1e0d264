//! In-process privacy modules.
//!
//! Every instance owns its data: a session (or a test) builds its own
//! [`MemoryModules`] from a [`Config`]; nothing is shared globally.

mod ip_scrambler;
mod location;
mod permissions;
mod trackers;

use std::sync::Arc;

use parking_lot::Mutex;

pub use ip_scrambler::MemoryIpScrambler;
pub use location::MemoryLocation;
pub use permissions::MemoryPermissions;
pub use trackers::MemoryTrackers;

use crate::config::Config;
use crate::modules::{ApplicationDescription, ModuleError, PrivacyModules};

/// One-shot failure injection shared by the memory modules.
#[derive(Debug, Default)]
pub struct FailureSwitch {
    next: Mutex<Option<ModuleError>>,
}

impl FailureSwitch {
    /// Make the next call to the module fail with `error`.
    pub fn fail_next(&self, error: ModuleError) {
        *self.next.lock() = Some(error);
    }

    pub(crate) fn check(&self) -> Result<(), ModuleError> {
        match self.next.lock().take() {
            Some(error) => Err(error),
            None => Ok(()),
        }
    }
}

/// Installed apps known to a session.
#[derive(Debug, Clone, Default)]
pub struct AppRegistry {
    apps: Arc<Vec<ApplicationDescription>>,
}

impl AppRegistry {
    pub fn new(apps: Vec<ApplicationDescription>) -> Self {
        Self {
            apps: Arc::new(apps),
        }
    }

    pub fn by_package(&self, package_name: &str) -> Result<ApplicationDescription, ModuleError> {
        self.apps
            .iter()
            .find(|app| app.package_name == package_name)
            .cloned()
            .ok_or_else(|| ModuleError::NotFound {
                what: format!("Application '{}'", package_name),
            })
    }

    pub fn by_uid(&self, uid: u32) -> Result<ApplicationDescription, ModuleError> {
        self.apps
            .iter()
            .find(|app| app.uid == uid)
            .cloned()
            .ok_or_else(|| ModuleError::NotFound {
                what: format!("Application with uid {}", uid),
            })
    }

    pub fn all(&self) -> &[ApplicationDescription] {
        &self.apps
    }
}

/// The full set of memory modules for one session.
#[derive(Clone)]
pub struct MemoryModules {
    pub permissions: Arc<MemoryPermissions>,
    pub location: Arc<MemoryLocation>,
    pub ip_scrambler: Arc<MemoryIpScrambler>,
    pub trackers: Arc<MemoryTrackers>,
}

impl MemoryModules {
    pub fn from_config(config: &Config) -> Self {
        let fixtures = &config.fixtures;
        let registry = AppRegistry::new(
            fixtures
                .apps
                .iter()
                .map(|app| ApplicationDescription {
                    package_name: app.package_name.clone(),
                    uid: app.uid,
                    label: app.label.clone(),
                })
                .collect(),
        );

        tracing::debug!(
            apps = registry.all().len(),
            permissions = fixtures.permissions.len(),
            trackers = fixtures.trackers.len(),
            "Seeding memory modules"
        );

        Self {
            permissions: Arc::new(MemoryPermissions::new(registry.clone(), &fixtures.permissions)),
            location: Arc::new(MemoryLocation::new(fixtures.fake_location)),
            ip_scrambler: Arc::new(MemoryIpScrambler::new(fixtures.require_vpn_consent)),
            trackers: Arc::new(MemoryTrackers::new(registry, fixtures)),
        }
    }

    /// Erase the concrete types for the features.
    pub fn privacy_modules(&self) -> PrivacyModules {
        PrivacyModules {
            permissions: self.permissions.clone(),
            location: self.location.clone(),
            ip_scrambler: self.ip_scrambler.clone(),
            trackers: self.trackers.clone(),
        }
    }
}
