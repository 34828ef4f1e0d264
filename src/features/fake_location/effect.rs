use crate::flow::Effect;
use crate::modules::{Location, LocationMode};

#[derive(Debug, Clone, PartialEq)]
pub enum FakeLocationEffect {
    LocationModeUpdated {
        mode: LocationMode,
        location: Option<Location>,
    },
    Error(String),
}

impl Effect for FakeLocationEffect {}
