//! Base trait for feature state.

use std::fmt::Debug;

/// Marker trait for state objects.
///
/// States should be:
/// - Immutable (Clone to create new states)
/// - Self-contained (all data needed to render the view)
/// - Shareable across tasks (every observer gets its own copy)
pub trait State: Clone + Debug + Send + Sync + 'static {}
