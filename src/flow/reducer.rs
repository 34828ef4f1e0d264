//! Reducer trait.

use super::actor::Effect;
use super::state::State;

/// Reducer folds effects into state.
///
/// The reducer is the only place where state transitions happen.
/// It must be a pure, total function: (State, Effect) -> State
pub trait Reducer: Send + Sync + 'static {
    /// The state type this reducer operates on.
    type State: State;

    /// The effect type this reducer handles.
    type Effect: Effect;

    /// Apply an effect and return the new state.
    ///
    /// This should be a pure function with no side effects.
    fn reduce(state: Self::State, effect: Self::Effect) -> Self::State;
}
