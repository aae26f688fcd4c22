//! Estimator entry points and input validation
//!
//! Every estimator has a paired surface: a fractional-frequency entry point
//! (`adev`, `oadev`, ...) that integrates its input once, and a phase entry
//! point (`adev_phase`, ...) that skips the conversion. Both route into a
//! single phase-domain core, so the windowing logic exists exactly once.
//!
//! Partial success is normal operation: a requested tau whose windows do not
//! fit the record is dropped from the result, and only invalid arguments
//! (non-positive rate or tau, empty or too-short input) are errors.

use crate::edf::{EdfPolicy, WhiteFmEdf};
use crate::kind::EstimatorKind;
use stability_core::{frequency_to_phase, tau_m, DeviationResult, Error, Result, TauSpec};
use tracing::debug;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Compute any estimator on phase data with an explicit edf policy.
///
/// This is the pluggable-uncertainty path; the named entry points below all
/// delegate here with [`WhiteFmEdf`].
pub fn deviation_phase(
    kind: EstimatorKind,
    phase: &[f64],
    rate: f64,
    taus: &TauSpec,
    policy: &impl EdfPolicy,
) -> Result<DeviationResult> {
    if rate <= 0.0 {
        return Err(Error::invalid_rate(rate));
    }
    if phase.is_empty() {
        return Err(Error::empty_input());
    }
    if phase.len() < kind.min_phase_len() {
        return Err(Error::InsufficientData {
            expected: kind.min_phase_len(),
            actual: phase.len(),
        });
    }

    let (taus_used, ms) = tau_m(phase.len(), rate, taus)?;
    debug!(
        estimator = kind.name(),
        samples = phase.len(),
        requested = ms.len(),
        "computing deviations"
    );

    let pairs: Vec<(f64, usize)> = taus_used.into_iter().zip(ms).collect();

    // Each tau is independent and reads the record immutably.
    #[cfg(feature = "parallel")]
    let estimates: Vec<(f64, f64, usize)> = pairs
        .par_iter()
        .map(|&(tau, m)| {
            let (dev, n) = kind.deviation_at(phase, rate, m);
            (tau, dev, n)
        })
        .collect();
    #[cfg(not(feature = "parallel"))]
    let estimates: Vec<(f64, f64, usize)> = pairs
        .iter()
        .map(|&(tau, m)| {
            let (dev, n) = kind.deviation_at(phase, rate, m);
            (tau, dev, n)
        })
        .collect();

    let mut taus_out = Vec::new();
    let mut devs = Vec::new();
    let mut errors = Vec::new();
    let mut ns = Vec::new();
    for ((tau, dev, n), (_, m)) in estimates.into_iter().zip(pairs) {
        if n == 0 {
            continue;
        }
        taus_out.push(tau);
        devs.push(dev);
        errors.push(policy.error(kind, dev, n, m, phase.len()));
        ns.push(n);
    }

    Ok(DeviationResult::new(taus_out, devs, errors, ns))
}

/// Compute any estimator on fractional-frequency data with an explicit edf
/// policy.
pub fn deviation(
    kind: EstimatorKind,
    freq: &[f64],
    rate: f64,
    taus: &TauSpec,
    policy: &impl EdfPolicy,
) -> Result<DeviationResult> {
    let phase = frequency_to_phase(freq, rate)?;
    deviation_phase(kind, &phase, rate, taus, policy)
}

macro_rules! estimator_entry_points {
    ($(($freq_fn:ident, $phase_fn:ident, $kind:expr, $doc_name:literal)),+ $(,)?) => {
        $(
            #[doc = concat!($doc_name, " of fractional-frequency data.")]
            ///
            /// `rate` is the sample rate in Hz; `taus` selects the averaging
            /// times. Returns one point per achievable tau, sorted ascending.
            pub fn $freq_fn(freq: &[f64], rate: f64, taus: &TauSpec) -> Result<DeviationResult> {
                deviation($kind, freq, rate, taus, &WhiteFmEdf)
            }

            #[doc = concat!($doc_name, " of phase data.")]
            ///
            /// Identical to the frequency entry point after
            /// `frequency_to_phase`; use this when the data is already a
            /// time-error record.
            pub fn $phase_fn(phase: &[f64], rate: f64, taus: &TauSpec) -> Result<DeviationResult> {
                deviation_phase($kind, phase, rate, taus, &WhiteFmEdf)
            }
        )+
    };
}

estimator_entry_points! {
    (adev, adev_phase, EstimatorKind::Adev, "Allan deviation"),
    (oadev, oadev_phase, EstimatorKind::Oadev, "Overlapping Allan deviation"),
    (mdev, mdev_phase, EstimatorKind::Mdev, "Modified Allan deviation"),
    (tdev, tdev_phase, EstimatorKind::Tdev, "Time deviation"),
    (hdev, hdev_phase, EstimatorKind::Hdev, "Hadamard deviation"),
    (ohdev, ohdev_phase, EstimatorKind::Ohdev, "Overlapping Hadamard deviation"),
    (totdev, totdev_phase, EstimatorKind::Totdev, "Total deviation"),
}
