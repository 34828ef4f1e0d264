//! Actions, effects and the actor that connects them.

use std::fmt::Debug;

use futures::stream::BoxStream;

use super::state::State;

/// Marker trait for action objects.
///
/// Actions represent:
/// - User actions (toggles, selections)
/// - System events (module status callbacks, timers)
///
/// The engine keeps a copy of each action for single event production,
/// hence `Clone`.
pub trait Action: Clone + Debug + Send + Sync + 'static {}

/// Marker trait for effect objects: "what happened" while handling an action.
pub trait Effect: Clone + Debug + Send + 'static {}

/// Ordered sequence of effects produced for one action.
pub type Effects<E> = BoxStream<'static, E>;

/// Maps an incoming action to a sequence of effects.
///
/// The actor never touches state directly. It may call privacy modules
/// while producing effects, but module failures must come out as error
/// effects, never as panics.
pub trait Actor: Send + Sync + 'static {
    type State: State;
    type Action: Action;
    type Effect: Effect;

    /// Produce the effects for `action`, given the state at dispatch time.
    fn act(&self, state: Self::State, action: Self::Action) -> Effects<Self::Effect>;
}
