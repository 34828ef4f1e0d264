//! IP scrambling screen.
//!
//! - `action.rs` / `effect.rs` / `event.rs` - closed sets of inputs and outputs
//! - `actor.rs` - calls into the [`IpScramblerModule`]
//! - `reducer.rs` - mode transitions (pure)

mod action;
mod actor;
mod effect;
mod event;
mod reducer;
mod state;

use std::sync::Arc;

use futures::stream::{self, BoxStream, StreamExt};

pub use action::InternetPrivacyAction;
pub use actor::InternetPrivacyActor;
pub use effect::InternetPrivacyEffect;
pub use event::{InternetPrivacyEvent, InternetPrivacyEvents};
pub use reducer::InternetPrivacyReducer;
pub use state::InternetPrivacyState;

use crate::flow::{Feature, Scope};
use crate::modules::IpScramblerModule;

pub type InternetPrivacyFeature = Feature<
    InternetPrivacyState,
    InternetPrivacyAction,
    InternetPrivacyEffect,
    InternetPrivacyEvent,
>;

pub fn create(
    scope: Scope,
    initial: InternetPrivacyState,
    module: Arc<dyn IpScramblerModule>,
) -> InternetPrivacyFeature {
    Feature::builder(
        "internet_privacy",
        initial,
        InternetPrivacyActor::new(module),
        InternetPrivacyReducer,
    )
    .single_events(InternetPrivacyEvents)
    .scope(scope)
    .build()
}

/// Adapt the module's status listener into an external action stream.
///
/// The current status is skipped; only later changes become actions.
pub fn status_actions(
    module: &dyn IpScramblerModule,
) -> BoxStream<'static, InternetPrivacyAction> {
    let updates = module.status_updates();
    stream::unfold(updates, |mut updates| async move {
        updates.changed().await.ok()?;
        let status = *updates.borrow_and_update();
        Some((InternetPrivacyAction::StatusChanged(status), updates))
    })
    .boxed()
}
