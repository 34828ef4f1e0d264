use async_trait::async_trait;

use super::error::ModuleError;
use super::types::{ApplicationDescription, Tracker, TrackerStatistics};

/// Tracker block/allow-list service backed by the system blocker.
#[async_trait]
pub trait TrackersPrivacyModule: Send + Sync {
    async fn trackers(&self) -> Result<Vec<Tracker>, ModuleError>;

    async fn trackers_for_app(&self, uid: u32) -> Result<Vec<Tracker>, ModuleError>;

    async fn apps_for_tracker(
        &self,
        tracker_id: &str,
    ) -> Result<Vec<ApplicationDescription>, ModuleError>;

    async fn is_blocked(&self, uid: u32, tracker_id: &str) -> Result<bool, ModuleError>;

    async fn set_blocked(
        &self,
        uid: u32,
        tracker_id: &str,
        blocked: bool,
    ) -> Result<(), ModuleError>;

    /// A whitelisted app bypasses tracker blocking entirely.
    async fn is_whitelisted(&self, uid: u32) -> Result<bool, ModuleError>;

    async fn set_whitelisted(&self, uid: u32, whitelisted: bool) -> Result<(), ModuleError>;

    /// Global switch ("quick privacy").
    async fn is_blocking_enabled(&self) -> Result<bool, ModuleError>;

    async fn set_blocking_enabled(&self, enabled: bool) -> Result<(), ModuleError>;

    async fn statistics(&self) -> Result<TrackerStatistics, ModuleError>;
}
