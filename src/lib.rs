//! Connectivity prober for `MongoDB` deployments
//!
//! Builds a client per target, issues the administrative `ping` command and
//! reports the outcome; see the `probe` module for the core operation.

pub mod cli;
pub mod errors;
pub mod probe;
pub mod target;
