use serde::Serialize;

use crate::flow::State;
use crate::modules::{Location, LocationMode};

#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct FakeLocationState {
    pub is_enabled: bool,
    pub mode: LocationMode,
    /// Reported coordinates; `None` while the real location is used.
    pub location: Option<Location>,
}

impl State for FakeLocationState {}
