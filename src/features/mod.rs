//! Feature definitions, one per screen.
//!
//! Each feature wires its closed Action / Effect / State / SingleEvent sets
//! and an actor/reducer pair around calls into the privacy modules.

pub mod app_trackers;
pub mod dashboard;
pub mod fake_location;
pub mod internet_privacy;
pub mod permissions;
pub mod trackers;
