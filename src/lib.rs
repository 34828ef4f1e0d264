//! Privacy dashboard core.
//!
//! [`flow`] is a small unidirectional state store; [`features`] builds one
//! store per screen on top of it, delegating the actual privacy work to the
//! module contracts in [`modules`].

pub mod cli;
pub mod config;
pub mod features;
pub mod flow;
pub mod logging;
pub mod modules;
