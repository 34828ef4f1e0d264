use futures::stream::BoxStream;

use super::actor::Action;
use super::state::State;

/// Something that renders state and emits actions (a screen).
pub trait View: Send + Sync + 'static {
    type State: State;
    type Action: Action;

    /// Called for every published state, in publication order.
    fn render(&self, state: Self::State);

    /// Stream of actions this view submits while attached.
    fn actions(&self) -> BoxStream<'static, Self::Action>;
}
