use thiserror::Error;

/// Errors surfaced by the feature engine itself.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum FlowError {
    #[error("Single events of feature '{feature}' already have a consumer")]
    SingleEventsTaken { feature: String },

    #[error("Feature '{feature}' is closed")]
    Closed { feature: String },
}
