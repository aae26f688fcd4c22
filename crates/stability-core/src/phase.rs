//! Conversion between fractional-frequency and phase (time-error) sequences
//!
//! Several estimators are naturally defined on phase data, so frequency-domain
//! entry points integrate their input once and share the phase-domain core.
//! Integration is exact cumulative summation scaled by the sample interval;
//! differentiation is the inverse scaled first difference. No smoothing or
//! interpolation is applied.

use crate::error::{Error, Result};

/// Integrate fractional-frequency data into phase data.
///
/// The output carries a leading zero-phase reference point, so its length is
/// `freq.len() + 1`:
///
/// `phase[0] = 0`, `phase[i] = phase[i-1] + freq[i-1] / rate`.
pub fn frequency_to_phase(freq: &[f64], rate: f64) -> Result<Vec<f64>> {
    if rate <= 0.0 {
        return Err(Error::invalid_rate(rate));
    }
    if freq.is_empty() {
        return Err(Error::empty_input());
    }

    let tau0 = 1.0 / rate;
    let mut phase = Vec::with_capacity(freq.len() + 1);
    phase.push(0.0);
    let mut acc = 0.0;
    for f in freq {
        acc += f * tau0;
        phase.push(acc);
    }
    Ok(phase)
}

/// Differentiate phase data into fractional-frequency data.
///
/// Inverse of [`frequency_to_phase`]; the output length is
/// `phase.len() - 1`:
///
/// `freq[i] = (phase[i+1] - phase[i]) * rate`.
pub fn phase_to_frequency(phase: &[f64], rate: f64) -> Result<Vec<f64>> {
    if rate <= 0.0 {
        return Err(Error::invalid_rate(rate));
    }
    if phase.len() < 2 {
        return Err(Error::InsufficientData {
            expected: 2,
            actual: phase.len(),
        });
    }

    Ok(phase.windows(2).map(|w| (w[1] - w[0]) * rate).collect())
}
