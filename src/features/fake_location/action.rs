use crate::flow::Action;

#[derive(Debug, Clone, PartialEq)]
pub enum FakeLocationAction {
    /// Read the module's current mode.
    Init,
    UseRealLocation,
    UseRandomLocation,
    SetSpecificLocation { latitude: f64, longitude: f64 },
}

impl Action for FakeLocationAction {}
