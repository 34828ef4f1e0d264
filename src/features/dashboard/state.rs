use serde::Serialize;

use crate::flow::State;
use crate::modules::{InternetPrivacyMode, LocationMode};

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct DashboardSummary {
    pub location_mode: LocationMode,
    pub internet_mode: InternetPrivacyMode,
    pub trackers_count: usize,
    pub active_trackers_count: usize,
    pub total_calls: u64,
    pub blocked_calls: u64,
    pub permissions_count: usize,
}

/// `Enabled` means quick privacy (global tracker blocking) is on.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
#[serde(tag = "status", content = "summary", rename_all = "snake_case")]
pub enum DashboardState {
    #[default]
    Loading,
    Disabled(DashboardSummary),
    Enabled(DashboardSummary),
}

impl DashboardState {
    pub fn summary(&self) -> Option<&DashboardSummary> {
        match self {
            Self::Loading => None,
            Self::Disabled(summary) | Self::Enabled(summary) => Some(summary),
        }
    }

    pub fn is_enabled(&self) -> bool {
        matches!(self, Self::Enabled(_))
    }
}

impl State for DashboardState {}
