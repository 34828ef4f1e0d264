//! TOML configuration: module fixtures, fake location candidates, logging.

mod loader;
mod types;

pub use loader::ConfigError;
pub use types::{
    AppFixture, City, Config, FakeLocationFixture, FixtureConfig, LocationConfig, LoggingConfig,
    PermissionFixture, TrackerFixture,
};
