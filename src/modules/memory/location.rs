use async_trait::async_trait;
use parking_lot::Mutex;

use super::FailureSwitch;
use crate::config::FakeLocationFixture;
use crate::modules::{FakeLocationState, Location, LocationMode, LocationPrivacyModule, ModuleError};

pub struct MemoryLocation {
    state: Mutex<FakeLocationState>,
    failures: FailureSwitch,
}

impl MemoryLocation {
    pub fn new(fixture: Option<FakeLocationFixture>) -> Self {
        let state = match fixture {
            Some(fake) if fake.mode != LocationMode::Real => FakeLocationState {
                mode: fake.mode,
                location: Some(Location::new(fake.latitude, fake.longitude)),
            },
            _ => FakeLocationState::default(),
        };
        Self {
            state: Mutex::new(state),
            failures: FailureSwitch::default(),
        }
    }

    pub fn failures(&self) -> &FailureSwitch {
        &self.failures
    }

    pub fn current(&self) -> FakeLocationState {
        *self.state.lock()
    }
}

#[async_trait]
impl LocationPrivacyModule for MemoryLocation {
    async fn fake_location_state(&self) -> Result<FakeLocationState, ModuleError> {
        self.failures.check()?;
        Ok(self.current())
    }

    async fn use_real_location(&self) -> Result<(), ModuleError> {
        self.failures.check()?;
        *self.state.lock() = FakeLocationState::default();
        tracing::debug!("Fake location stopped");
        Ok(())
    }

    async fn use_fake_location(
        &self,
        mode: LocationMode,
        location: Location,
    ) -> Result<(), ModuleError> {
        self.failures.check()?;
        if mode == LocationMode::Real {
            return Err(ModuleError::InvalidInput(
                "A fake location needs a random or custom mode".to_string(),
            ));
        }
        if !location.is_valid() {
            return Err(ModuleError::InvalidInput(format!(
                "Coordinates ({}, {}) out of range",
                location.latitude, location.longitude
            )));
        }
        *self.state.lock() = FakeLocationState {
            mode,
            location: Some(location),
        };
        tracing::debug!(?mode, latitude = location.latitude, longitude = location.longitude, "Fake location set");
        Ok(())
    }
}
