//! Hot, replay-latest state holder.

use std::pin::Pin;
use std::sync::Arc;
use std::task::{Context, Poll};

use futures::Stream;
use parking_lot::Mutex;
use tokio::sync::mpsc;

/// Observable cell holding the current value.
///
/// Each subscriber first receives the value current at subscription time,
/// then every later publication, in order and without gaps. Publishing never
/// waits on subscribers; closed subscriptions are pruned on the next publish.
pub struct StateFlow<S> {
    inner: Arc<Mutex<StateFlowInner<S>>>,
}

struct StateFlowInner<S> {
    value: S,
    subscribers: Vec<mpsc::UnboundedSender<S>>,
}

impl<S: Clone> StateFlow<S> {
    pub fn new(initial: S) -> Self {
        Self {
            inner: Arc::new(Mutex::new(StateFlowInner {
                value: initial,
                subscribers: Vec::new(),
            })),
        }
    }

    /// Snapshot of the current value.
    pub fn value(&self) -> S {
        self.inner.lock().value.clone()
    }

    /// Replace the current value and deliver it to every subscriber.
    pub fn publish(&self, value: S) {
        let mut inner = self.inner.lock();
        inner
            .subscribers
            .retain(|subscriber| subscriber.send(value.clone()).is_ok());
        inner.value = value;
    }

    /// Subscribe, starting from the current value.
    pub fn subscribe(&self) -> StateSubscription<S> {
        let (sender, receiver) = mpsc::unbounded_channel();
        let mut inner = self.inner.lock();
        // Cannot fail: the receiver is still in scope.
        let _ = sender.send(inner.value.clone());
        inner.subscribers.push(sender);
        StateSubscription { receiver }
    }

    pub fn subscriber_count(&self) -> usize {
        let mut inner = self.inner.lock();
        inner.subscribers.retain(|subscriber| !subscriber.is_closed());
        inner.subscribers.len()
    }
}

impl<S> Clone for StateFlow<S> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

/// Ordered stream of state values for one subscriber.
pub struct StateSubscription<S> {
    receiver: mpsc::UnboundedReceiver<S>,
}

impl<S> StateSubscription<S> {
    pub async fn recv(&mut self) -> Option<S> {
        self.receiver.recv().await
    }

    pub fn try_recv(&mut self) -> Option<S> {
        self.receiver.try_recv().ok()
    }
}

impl<S> Stream for StateSubscription<S> {
    type Item = S;

    fn poll_next(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<S>> {
        self.receiver.poll_recv(cx)
    }
}
