//! Diagnostics hooks for the feature engine.

use std::fmt::Debug;

/// Observes the engine's lifecycle. Purely diagnostic: nothing a handler
/// does changes how actions are processed.
pub trait LoggingHandler: Send + Sync + 'static {
    fn on_stream_start(&self, _source: &str) {}

    fn on_stream_complete(&self, _source: &str) {}

    fn on_action(&self, _action: &dyn Debug) {}

    fn on_effect(&self, _effect: &dyn Debug) {}

    fn on_state(&self, _state: &dyn Debug) {}

    fn on_single_event(&self, _event: &dyn Debug) {}

    fn on_failure(&self, _action: &dyn Debug, _reason: &str) {}
}

/// Handler that drops everything.
pub struct SilentLogger;

impl LoggingHandler for SilentLogger {}

/// Default handler: structured `tracing` events tagged with the feature
/// name and instance id.
pub struct TracingLogger {
    feature: String,
    instance: String,
}

impl TracingLogger {
    pub fn new(feature: impl Into<String>) -> Self {
        Self {
            feature: feature.into(),
            instance: uuid::Uuid::new_v4().simple().to_string()[..8].to_string(),
        }
    }
}

impl LoggingHandler for TracingLogger {
    fn on_stream_start(&self, source: &str) {
        tracing::debug!(feature = %self.feature, instance = %self.instance, source, "Stream started");
    }

    fn on_stream_complete(&self, source: &str) {
        tracing::debug!(feature = %self.feature, instance = %self.instance, source, "Stream completed");
    }

    fn on_action(&self, action: &dyn Debug) {
        tracing::debug!(feature = %self.feature, instance = %self.instance, ?action, "Action received");
    }

    fn on_effect(&self, effect: &dyn Debug) {
        tracing::debug!(feature = %self.feature, instance = %self.instance, ?effect, "Effect applied");
    }

    fn on_state(&self, state: &dyn Debug) {
        tracing::trace!(feature = %self.feature, instance = %self.instance, ?state, "State published");
    }

    fn on_single_event(&self, event: &dyn Debug) {
        tracing::debug!(feature = %self.feature, instance = %self.instance, ?event, "Single event emitted");
    }

    fn on_failure(&self, action: &dyn Debug, reason: &str) {
        tracing::warn!(
            feature = %self.feature,
            instance = %self.instance,
            ?action,
            reason,
            "Action processing aborted"
        );
    }
}
