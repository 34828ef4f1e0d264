//! Shared test utilities: fixture modules, recording views and loggers.

#![allow(dead_code, unused_imports)]

use std::fmt::Debug;
use std::future::Future;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use futures::stream::{self, BoxStream, StreamExt};
use parking_lot::Mutex;
use privacy_central::config::Config;
use privacy_central::flow::{Action, LoggingHandler, State, View};
use privacy_central::modules::memory::MemoryModules;
use tempfile::TempDir;
use tokio::sync::mpsc;

/// Fixture modules seeded with the default demo data and a fixed rng seed.
pub fn modules() -> MemoryModules {
    MemoryModules::from_config(&config())
}

pub fn config() -> Config {
    let mut config = Config::default();
    config.location.rng_seed = Some(7);
    config
}

/// Write `content` to a config file inside a fresh temp dir.
pub fn temp_config(content: &str) -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let path = temp_dir.path().join("config.toml");
    std::fs::write(&path, content).expect("Failed to write config");
    (temp_dir, path)
}

/// Fail the test instead of hanging when `future` never completes.
pub async fn within<F: Future>(future: F) -> F::Output {
    tokio::time::timeout(Duration::from_secs(5), future)
        .await
        .expect("timed out")
}

/// View that records every rendered state and forwards actions sent
/// through [`RecordingView::sender`].
pub struct RecordingView<S, A> {
    rendered: Mutex<Vec<S>>,
    actions: Mutex<Option<mpsc::UnboundedReceiver<A>>>,
    sender: mpsc::UnboundedSender<A>,
}

impl<S: State, A: Action> RecordingView<S, A> {
    pub fn new() -> Arc<Self> {
        let (sender, receiver) = mpsc::unbounded_channel();
        Arc::new(Self {
            rendered: Mutex::new(Vec::new()),
            actions: Mutex::new(Some(receiver)),
            sender,
        })
    }

    pub fn rendered(&self) -> Vec<S> {
        self.rendered.lock().clone()
    }

    pub fn sender(&self) -> mpsc::UnboundedSender<A> {
        self.sender.clone()
    }

    /// Wait until at least `count` states were rendered.
    pub async fn wait_rendered(&self, count: usize) -> Vec<S> {
        within(async {
            loop {
                let rendered = self.rendered();
                if rendered.len() >= count {
                    return rendered;
                }
                tokio::time::sleep(Duration::from_millis(5)).await;
            }
        })
        .await
    }
}

impl<S: State, A: Action> View for RecordingView<S, A> {
    type State = S;
    type Action = A;

    fn render(&self, state: S) {
        self.rendered.lock().push(state);
    }

    fn actions(&self) -> BoxStream<'static, A> {
        match self.actions.lock().take() {
            Some(mut receiver) => stream::poll_fn(move |cx| receiver.poll_recv(cx)).boxed(),
            None => stream::empty().boxed(),
        }
    }
}

/// Logging handler that keeps every callback as a line of text.
#[derive(Clone, Default)]
pub struct RecordingLogger {
    lines: Arc<Mutex<Vec<String>>>,
}

impl RecordingLogger {
    pub fn lines(&self) -> Vec<String> {
        self.lines.lock().clone()
    }

    pub fn count(&self, prefix: &str) -> usize {
        self.lines
            .lock()
            .iter()
            .filter(|line| line.starts_with(prefix))
            .count()
    }

    fn push(&self, line: String) {
        self.lines.lock().push(line);
    }
}

impl LoggingHandler for RecordingLogger {
    fn on_stream_start(&self, source: &str) {
        self.push(format!("stream_start {}", source));
    }

    fn on_stream_complete(&self, source: &str) {
        self.push(format!("stream_complete {}", source));
    }

    fn on_action(&self, action: &dyn Debug) {
        self.push(format!("action {:?}", action));
    }

    fn on_effect(&self, effect: &dyn Debug) {
        self.push(format!("effect {:?}", effect));
    }

    fn on_state(&self, state: &dyn Debug) {
        self.push(format!("state {:?}", state));
    }

    fn on_single_event(&self, event: &dyn Debug) {
        self.push(format!("event {:?}", event));
    }

    fn on_failure(&self, action: &dyn Debug, reason: &str) {
        self.push(format!("failure {:?} {}", action, reason));
    }
}
