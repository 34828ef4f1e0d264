//! One-shot notifications derived from processed effects.

use std::fmt::Debug;
use std::pin::Pin;
use std::sync::Arc;
use std::task::{Context, Poll};

use futures::Stream;
use parking_lot::Mutex;
use tokio::sync::mpsc;

use super::actor::{Action, Effect};
use super::state::State;

/// Marker trait for single events (toasts, navigation triggers).
///
/// Single events are not part of state: they are queued until consumed and
/// never replayed.
pub trait SingleEvent: Debug + Send + 'static {}

/// Derives an optional single event from a processed effect.
///
/// Called under the reducer lock with the state *after* the effect was
/// applied.
pub trait SingleEventProducer: Send + Sync + 'static {
    type State: State;
    type Action: Action;
    type Effect: Effect;
    type Event: SingleEvent;

    fn produce(
        state: &Self::State,
        action: &Self::Action,
        effect: &Self::Effect,
    ) -> Option<Self::Event>;
}

pub(crate) type EventSlot<Ev> = Arc<Mutex<Option<mpsc::UnboundedReceiver<Ev>>>>;

/// The single consumer of a feature's events.
///
/// Only one `SingleEvents` exists per feature at a time. Dropping it hands
/// the queue back to the feature so a later consumer picks up whatever was
/// not consumed yet; consumed events are gone for good.
pub struct SingleEvents<Ev> {
    receiver: Option<mpsc::UnboundedReceiver<Ev>>,
    slot: EventSlot<Ev>,
}

impl<Ev> SingleEvents<Ev> {
    pub(crate) fn new(receiver: mpsc::UnboundedReceiver<Ev>, slot: EventSlot<Ev>) -> Self {
        Self {
            receiver: Some(receiver),
            slot,
        }
    }

    /// Wait for the next event. Returns `None` once the feature is gone.
    pub async fn recv(&mut self) -> Option<Ev> {
        match self.receiver.as_mut() {
            Some(receiver) => receiver.recv().await,
            None => None,
        }
    }

    /// Take an already queued event without waiting.
    pub fn try_recv(&mut self) -> Option<Ev> {
        self.receiver.as_mut()?.try_recv().ok()
    }

    /// Drain every event queued right now.
    pub fn drain(&mut self) -> Vec<Ev> {
        let mut events = Vec::new();
        while let Some(event) = self.try_recv() {
            events.push(event);
        }
        events
    }
}

impl<Ev> Stream for SingleEvents<Ev> {
    type Item = Ev;

    fn poll_next(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Ev>> {
        match self.receiver.as_mut() {
            Some(receiver) => receiver.poll_recv(cx),
            None => Poll::Ready(None),
        }
    }
}

impl<Ev> Drop for SingleEvents<Ev> {
    fn drop(&mut self) {
        if let Some(receiver) = self.receiver.take() {
            *self.slot.lock() = Some(receiver);
        }
    }
}
