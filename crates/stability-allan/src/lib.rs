//! Allan deviation family estimators for frequency-stability analysis
//!
//! Given a phase or fractional-frequency record sampled at a fixed rate, the
//! estimators here produce `(tau, deviation, error, n)` points for a set of
//! averaging times, as used to characterize clock and oscillator noise.
//!
//! # Estimators
//!
//! - **ADEV / OADEV**: classic and overlapping Allan deviation
//! - **MDEV**: modified Allan deviation (boxcar-smoothed second difference)
//! - **TDEV**: time deviation, `tau * MDEV(tau) / sqrt(3)`
//! - **HDEV / OHDEV**: third-difference Hadamard deviation, insensitive to
//!   linear frequency drift
//! - **TOTDEV**: total deviation over a doubly-reflected record, reducing
//!   end effects
//!
//! Each estimator has a frequency-domain and a phase-domain entry point; the
//! frequency variants integrate their input once via
//! [`stability_core::frequency_to_phase`] and share the phase-domain core.
//! Uncertainties come from a pluggable equivalent-degrees-of-freedom policy
//! ([`EdfPolicy`]); the default [`WhiteFmEdf`] assumes white frequency noise.
//!
//! # Usage
//!
//! ```rust
//! use stability_allan::{oadev, TauSpec};
//!
//! // Fractional-frequency samples at 1 Hz
//! let freq = vec![892.0, 809.0, 823.0, 798.0, 671.0, 644.0, 883.0, 903.0, 677.0];
//! let result = oadev(&freq, 1.0, &TauSpec::List(vec![1.0, 2.0])).unwrap();
//!
//! for point in result.iter() {
//!     println!("tau {:>6.1}s  oadev {:.5e} +/- {:.1e}  (n={})",
//!              point.tau, point.deviation, point.error, point.n);
//! }
//! ```
//!
//! The TOTDEV implementation is the doubly-reflected TOTVAR of NIST SP1065.
//! The bias-corrected endpoint-matched variant behind some published tables
//! is an open research item and intentionally not guessed at here.

mod adev;
mod hadamard;
mod mdev;
mod totdev;

pub mod api;
pub mod edf;
pub mod kind;

pub use api::{
    adev, adev_phase, deviation, deviation_phase, hdev, hdev_phase, mdev, mdev_phase, oadev,
    oadev_phase, ohdev, ohdev_phase, tdev, tdev_phase, totdev, totdev_phase,
};
pub use edf::{confidence_interval, EdfPolicy, PairCountEdf, WhiteFmEdf};
pub use kind::EstimatorKind;

// Re-export the shared foundations so downstream callers need one import.
pub use stability_core::{
    frequency_to_phase, phase_to_frequency, DeviationPoint, DeviationResult, Error, Result,
    TauSpec,
};
