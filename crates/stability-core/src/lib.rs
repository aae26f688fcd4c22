//! Shared foundations for frequency-stability analysis
//!
//! This crate carries the pieces every estimator in the stability-stats
//! workspace depends on:
//!
//! - a unified [`Error`]/[`Result`] pair,
//! - [`taus`]: averaging-time validation and generation,
//! - [`phase`]: conversion between fractional-frequency and phase data,
//! - [`types`]: the [`DeviationResult`] container returned by estimators.
//!
//! All routines here are pure functions over immutable slices; no state is
//! kept between calls.

pub mod error;
pub mod phase;
pub mod taus;
pub mod types;

pub use error::{Error, Result};
pub use phase::{frequency_to_phase, phase_to_frequency};
pub use taus::{tau_m, TauSpec};
pub use types::{DeviationPoint, DeviationResult};
