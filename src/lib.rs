//! Frequency-stability analysis toolkit
//!
//! This facade crate re-exports the stability-stats workspace:
//!
//! - [`stability_core`]: tau generation, phase/frequency conversion, the
//!   shared error and result types
//! - [`stability_allan`]: the Allan deviation family estimators (ADEV, OADEV,
//!   MDEV, TDEV, HDEV, OHDEV, TOTDEV) and edf-based uncertainty policies
//!
//! # Example
//!
//! ```rust
//! use stability_stats::{adev, TauSpec};
//!
//! let freq = vec![892.0, 809.0, 823.0, 798.0, 671.0, 644.0, 883.0, 903.0, 677.0];
//! let result = adev(&freq, 1.0, &TauSpec::List(vec![1.0, 2.0])).unwrap();
//! assert_eq!(result.taus(), &[1.0, 2.0]);
//! ```

pub use stability_allan;
pub use stability_core;

// Flat surface for the common case
pub use stability_allan::{
    adev, adev_phase, confidence_interval, deviation, deviation_phase, hdev, hdev_phase, mdev,
    mdev_phase, oadev, oadev_phase, ohdev, ohdev_phase, tdev, tdev_phase, totdev, totdev_phase,
    EdfPolicy, EstimatorKind, PairCountEdf, WhiteFmEdf,
};
pub use stability_core::{
    frequency_to_phase, phase_to_frequency, tau_m, DeviationPoint, DeviationResult, Error, Result,
    TauSpec,
};
