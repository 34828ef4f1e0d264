use async_trait::async_trait;

use super::error::ModuleError;
use super::types::{FakeLocationState, Location, LocationMode};

/// Fake location service.
#[async_trait]
pub trait LocationPrivacyModule: Send + Sync {
    async fn fake_location_state(&self) -> Result<FakeLocationState, ModuleError>;

    /// Stop faking and report the device's real location again.
    async fn use_real_location(&self) -> Result<(), ModuleError>;

    /// Start (or keep) faking, reporting `location`.
    ///
    /// # Errors
    /// `InvalidInput` when `mode` is [`LocationMode::Real`] or the
    /// coordinates are out of range.
    async fn use_fake_location(
        &self,
        mode: LocationMode,
        location: Location,
    ) -> Result<(), ModuleError>;
}
