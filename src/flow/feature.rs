//! The feature engine: one store per screen.

use std::any::Any;
use std::panic::AssertUnwindSafe;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use futures::{FutureExt, Stream, StreamExt};
use parking_lot::Mutex;
use tokio::sync::{mpsc, watch};
use tokio::task::JoinHandle;

use super::actor::{Action, Actor, Effect};
use super::error::FlowError;
use super::event::{EventSlot, SingleEvent, SingleEventProducer, SingleEvents};
use super::logger::{LoggingHandler, TracingLogger};
use super::reducer::Reducer;
use super::scope::Scope;
use super::state::State;
use super::state_flow::{StateFlow, StateSubscription};
use super::view::View;

type ReduceFn<S, E> = fn(S, E) -> S;
type ProduceFn<S, A, E, Ev> = fn(&S, &A, &E) -> Option<Ev>;

/// State container implementing unidirectional data flow.
///
/// Every submitted action runs its actor on its own task inside the
/// feature's scope, so actions are processed concurrently. Effect
/// application is serialized by a single engine-wide lock: read state,
/// reduce, publish, emit single event, release.
///
/// `Feature` is a cheap handle; clones share the same engine.
pub struct Feature<S: State, A: Action, E: Effect, Ev: SingleEvent> {
    inner: Arc<FeatureInner<S, A, E, Ev>>,
}

struct FeatureInner<S: State, A: Action, E: Effect, Ev: SingleEvent> {
    name: String,
    state: StateFlow<S>,
    /// Sole serialization point for state transitions.
    lock: tokio::sync::Mutex<()>,
    actor: Box<dyn Actor<State = S, Action = A, Effect = E>>,
    reduce: ReduceFn<S, E>,
    produce: Option<ProduceFn<S, A, E, Ev>>,
    events_tx: mpsc::UnboundedSender<Ev>,
    events_slot: EventSlot<Ev>,
    logger: Box<dyn LoggingHandler>,
    scope: Scope,
    sources: AtomicUsize,
    in_flight: watch::Sender<usize>,
}

impl<S: State, A: Action, E: Effect, Ev: SingleEvent> Clone for Feature<S, A, E, Ev> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<S: State, A: Action, E: Effect, Ev: SingleEvent> Feature<S, A, E, Ev> {
    /// Start building a feature from its initial state, actor and reducer.
    pub fn builder<Ac, R>(
        name: impl Into<String>,
        initial: S,
        actor: Ac,
        _reducer: R,
    ) -> FeatureBuilder<S, A, E, Ev>
    where
        Ac: Actor<State = S, Action = A, Effect = E>,
        R: Reducer<State = S, Effect = E>,
    {
        FeatureBuilder {
            name: name.into(),
            initial,
            actor: Box::new(actor),
            reduce: R::reduce,
            produce: None,
            logger: None,
            scope: None,
        }
    }

    pub fn name(&self) -> &str {
        &self.inner.name
    }

    /// Snapshot of the current state.
    pub fn state(&self) -> S {
        self.inner.state.value()
    }

    /// Hot, replay-latest state stream: the current state first, then every
    /// later publication.
    pub fn subscribe(&self) -> StateSubscription<S> {
        self.inner.state.subscribe()
    }

    /// The scope every task of this feature runs in.
    pub fn scope(&self) -> &Scope {
        &self.inner.scope
    }

    /// Whether at least one view or external action source is attached.
    pub fn is_active(&self) -> bool {
        self.inner.sources.load(Ordering::SeqCst) > 0
    }

    /// Submit one action for processing.
    ///
    /// # Errors
    /// Returns [`FlowError::Closed`] once the feature's scope is cancelled.
    pub fn submit(&self, action: A) -> Result<(), FlowError> {
        if self.inner.scope.is_cancelled() {
            return Err(FlowError::Closed {
                feature: self.inner.name.clone(),
            });
        }
        self.inner.logger.on_action(&action);
        let ticket = InFlight::enter(Arc::clone(&self.inner));
        let inner = Arc::clone(&self.inner);
        self.inner.scope.spawn(async move {
            let _ticket = ticket;
            inner.process(action).await;
        });
        Ok(())
    }

    /// Attach a view.
    ///
    /// The view is rendered with the current state right away and then with
    /// every publication. `initial_actions` are submitted in order before
    /// this returns; the view's own action stream is drained afterwards.
    /// The view counts as attached until `view_scope` or the feature scope
    /// is cancelled, even once its action stream is exhausted. Cancelling
    /// `view_scope` detaches this view only; in-flight actions keep running
    /// in the feature scope.
    pub fn take_view<V>(
        &self,
        view_scope: &Scope,
        view: Arc<V>,
        initial_actions: Vec<A>,
    ) -> JoinHandle<Option<()>>
    where
        V: View<State = S, Action = A>,
    {
        let mut states = self.subscribe();
        let feature_scope = self.inner.scope.clone();
        let renderer = Arc::clone(&view);
        view_scope.spawn(async move {
            tokio::select! {
                _ = feature_scope.cancelled() => {}
                _ = async {
                    while let Some(state) = states.recv().await {
                        renderer.render(state);
                    }
                } => {}
            }
        });

        let source = Source::attach(Arc::clone(&self.inner), "view");
        for action in initial_actions {
            if self.submit(action).is_err() {
                break;
            }
        }

        let feature = self.clone();
        let feature_scope = self.inner.scope.clone();
        let attached = view_scope.clone();
        view_scope.spawn(async move {
            // The view stays attached after its action stream ends.
            let _source = source;
            tokio::select! {
                _ = feature_scope.cancelled() => {}
                _ = async {
                    feature.drain(view.actions()).await;
                    attached.cancelled().await;
                } => {}
            }
        })
    }

    /// Drain an action stream that does not belong to any view (system
    /// callbacks, timers) until it ends or the feature scope is cancelled.
    pub fn add_external_actions<St>(&self, actions: St) -> JoinHandle<Option<()>>
    where
        St: Stream<Item = A> + Send + 'static,
    {
        let feature = self.clone();
        let source = Source::attach(Arc::clone(&self.inner), "external");
        self.inner.scope.spawn(async move {
            let _source = source;
            feature.drain(actions).await;
        })
    }

    /// Take the single event queue. There is one consumer at a time.
    ///
    /// # Errors
    /// Returns [`FlowError::SingleEventsTaken`] while another consumer holds
    /// the queue.
    pub fn single_events(&self) -> Result<SingleEvents<Ev>, FlowError> {
        let receiver =
            self.inner
                .events_slot
                .lock()
                .take()
                .ok_or_else(|| FlowError::SingleEventsTaken {
                    feature: self.inner.name.clone(),
                })?;
        Ok(SingleEvents::new(receiver, Arc::clone(&self.inner.events_slot)))
    }

    /// Wait until no submitted action is still being processed.
    pub async fn settle(&self) {
        let mut in_flight = self.inner.in_flight.subscribe();
        let _ = in_flight.wait_for(|count| *count == 0).await;
    }

    /// Cancel the feature scope and every task in it.
    pub fn close(&self) {
        self.inner.scope.cancel();
    }

    async fn drain<St>(&self, actions: St)
    where
        St: Stream<Item = A> + Send,
    {
        futures::pin_mut!(actions);
        while let Some(action) = actions.next().await {
            if self.submit(action).is_err() {
                break;
            }
        }
    }
}

impl<S: State, A: Action, E: Effect, Ev: SingleEvent> FeatureInner<S, A, E, Ev> {
    async fn process(&self, action: A) {
        let run = async {
            let mut effects = self.actor.act(self.state.value(), action.clone());
            while let Some(effect) = effects.next().await {
                self.apply(&action, effect).await;
            }
        };

        if let Err(panic) = AssertUnwindSafe(run).catch_unwind().await {
            self.logger.on_failure(&action, &panic_reason(panic.as_ref()));
        }
    }

    async fn apply(&self, action: &A, effect: E) {
        let _guard = self.lock.lock().await;
        self.logger.on_effect(&effect);

        let event_effect = self.produce.map(|_| effect.clone());
        let next = (self.reduce)(self.state.value(), effect);
        self.state.publish(next.clone());
        self.logger.on_state(&next);

        if let (Some(produce), Some(effect)) = (self.produce, event_effect) {
            if let Some(event) = produce(&next, action, &effect) {
                self.logger.on_single_event(&event);
                // The receiver lives in `events_slot` for as long as `self`.
                let _ = self.events_tx.send(event);
            }
        }
    }
}

/// Configures and builds a [`Feature`].
pub struct FeatureBuilder<S: State, A: Action, E: Effect, Ev: SingleEvent> {
    name: String,
    initial: S,
    actor: Box<dyn Actor<State = S, Action = A, Effect = E>>,
    reduce: ReduceFn<S, E>,
    produce: Option<ProduceFn<S, A, E, Ev>>,
    logger: Option<Box<dyn LoggingHandler>>,
    scope: Option<Scope>,
}

impl<S: State, A: Action, E: Effect, Ev: SingleEvent> FeatureBuilder<S, A, E, Ev> {
    pub fn single_events<P>(mut self, _producer: P) -> Self
    where
        P: SingleEventProducer<State = S, Action = A, Effect = E, Event = Ev>,
    {
        self.produce = Some(P::produce);
        self
    }

    /// Replace the default [`TracingLogger`].
    pub fn logger(mut self, logger: impl LoggingHandler) -> Self {
        self.logger = Some(Box::new(logger));
        self
    }

    /// Run inside `scope` instead of a fresh one.
    pub fn scope(mut self, scope: Scope) -> Self {
        self.scope = Some(scope);
        self
    }

    pub fn build(self) -> Feature<S, A, E, Ev> {
        let (events_tx, events_rx) = mpsc::unbounded_channel();
        let (in_flight, _) = watch::channel(0);
        let logger = self
            .logger
            .unwrap_or_else(|| Box::new(TracingLogger::new(self.name.clone())));

        Feature {
            inner: Arc::new(FeatureInner {
                name: self.name,
                state: StateFlow::new(self.initial),
                lock: tokio::sync::Mutex::new(()),
                actor: self.actor,
                reduce: self.reduce,
                produce: self.produce,
                events_tx,
                events_slot: Arc::new(Mutex::new(Some(events_rx))),
                logger,
                scope: self.scope.unwrap_or_default(),
                sources: AtomicUsize::new(0),
                in_flight,
            }),
        }
    }
}

/// Counts one submitted action until its task ends (or is dropped).
struct InFlight<S: State, A: Action, E: Effect, Ev: SingleEvent> {
    inner: Arc<FeatureInner<S, A, E, Ev>>,
}

impl<S: State, A: Action, E: Effect, Ev: SingleEvent> InFlight<S, A, E, Ev> {
    fn enter(inner: Arc<FeatureInner<S, A, E, Ev>>) -> Self {
        inner.in_flight.send_modify(|count| *count += 1);
        Self { inner }
    }
}

impl<S: State, A: Action, E: Effect, Ev: SingleEvent> Drop for InFlight<S, A, E, Ev> {
    fn drop(&mut self) {
        self.inner
            .in_flight
            .send_modify(|count| *count = count.saturating_sub(1));
    }
}

/// Keeps the feature Active while an action source is attached.
struct Source<S: State, A: Action, E: Effect, Ev: SingleEvent> {
    inner: Arc<FeatureInner<S, A, E, Ev>>,
    kind: &'static str,
}

impl<S: State, A: Action, E: Effect, Ev: SingleEvent> Source<S, A, E, Ev> {
    fn attach(inner: Arc<FeatureInner<S, A, E, Ev>>, kind: &'static str) -> Self {
        inner.sources.fetch_add(1, Ordering::SeqCst);
        inner.logger.on_stream_start(kind);
        Self { inner, kind }
    }
}

impl<S: State, A: Action, E: Effect, Ev: SingleEvent> Drop for Source<S, A, E, Ev> {
    fn drop(&mut self) {
        self.inner.sources.fetch_sub(1, Ordering::SeqCst);
        self.inner.logger.on_stream_complete(self.kind);
    }
}

fn panic_reason(panic: &(dyn Any + Send)) -> String {
    if let Some(message) = panic.downcast_ref::<&str>() {
        (*message).to_string()
    } else if let Some(message) = panic.downcast_ref::<String>() {
        message.clone()
    } else {
        "unknown panic".to_string()
    }
}
