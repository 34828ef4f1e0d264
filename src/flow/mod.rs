//! Unidirectional state management primitives.
//!
//! Every feature screen is a [`Feature`]: a store that turns actions into
//! effects (via an [`Actor`]) and folds effects into state (via a
//! [`Reducer`]).
//!
//! # Architecture
//!
//! ```text
//!             ┌──────────── SingleEvent (one-shot) ─────────┐
//!             │                                              ▼
//! Action ──→ Actor ──→ Effect* ──→ Reducer ──→ State ──→ View
//!    ↑                     (serialized under one lock)      │
//!    └──────────────────────────────────────────────────────┘
//! ```
//!
//! - **State**: immutable snapshot of what a screen renders
//! - **Action**: user or system intent
//! - **Effect**: outcome of an action, folded into state
//! - **SingleEvent**: transient notification, delivered at most once

mod actor;
pub mod effects;
mod error;
mod event;
mod feature;
mod logger;
mod reducer;
mod scope;
mod state;
mod state_flow;
mod view;

pub use actor::{Action, Actor, Effect, Effects};
pub use error::FlowError;
pub use event::{SingleEvent, SingleEventProducer, SingleEvents};
pub use feature::{Feature, FeatureBuilder};
pub use logger::{LoggingHandler, SilentLogger, TracingLogger};
pub use reducer::Reducer;
pub use scope::{Scope, ScopeGuard};
pub use state::State;
pub use state_flow::{StateFlow, StateSubscription};
pub use view::View;
