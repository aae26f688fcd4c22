//! Equivalent degrees of freedom and uncertainty estimation
//!
//! A deviation point estimate is turned into a one-sigma uncertainty through
//! an equivalent-degrees-of-freedom (edf) model: `error = deviation /
//! sqrt(edf)`. The edf depends on the estimator family — overlapping
//! estimators average correlated terms, so their edf grows slower than the
//! raw term count — and on the noise type the published reference values
//! assume. The model is a pluggable policy keyed by [`EstimatorKind`].

use crate::kind::EstimatorKind;
use stability_core::{Error, Result};
use statrs::distribution::{ChiSquared, ContinuousCDF};

/// Per-estimator equivalent-degrees-of-freedom model
pub trait EdfPolicy {
    /// Equivalent degrees of freedom for a point estimate built from `n`
    /// terms at averaging factor `m` over a phase record of `phase_len`
    /// samples. Always at least 1.
    fn edf(&self, kind: EstimatorKind, n: usize, m: usize, phase_len: usize) -> f64;

    /// One-sigma uncertainty of a deviation point estimate
    fn error(
        &self,
        kind: EstimatorKind,
        deviation: f64,
        n: usize,
        m: usize,
        phase_len: usize,
    ) -> f64 {
        deviation / self.edf(kind, n, m, phase_len).sqrt()
    }
}

/// Default edf model, calibrated for white frequency noise.
///
/// Non-overlapping estimators use `n - 1` independent pairs. Overlapping,
/// modified, and total estimators use the standard white-FM approximation
/// `(3(N-1)/(2m) - 2(N-2)/N) * 4m^2 / (4m^2 + 5)`. The same second-difference
/// approximation is applied to the overlapping Hadamard family; replacing it
/// with Greenhall's tabulated edf is a known refinement.
#[derive(Debug, Clone, Copy, Default)]
pub struct WhiteFmEdf;

impl EdfPolicy for WhiteFmEdf {
    fn edf(&self, kind: EstimatorKind, n: usize, m: usize, phase_len: usize) -> f64 {
        match kind {
            EstimatorKind::Adev | EstimatorKind::Hdev => n.saturating_sub(1).max(1) as f64,
            _ => {
                let nn = phase_len as f64;
                let mf = m as f64;
                let edf = (3.0 * (nn - 1.0) / (2.0 * mf) - 2.0 * (nn - 2.0) / nn)
                    * (4.0 * mf * mf)
                    / (4.0 * mf * mf + 5.0);
                edf.max(1.0)
            }
        }
    }
}

/// Legacy edf model: every averaged term counts as independent (`edf = n`).
///
/// Reproduces the `deviation / sqrt(n)` error bars of older stability tools.
#[derive(Debug, Clone, Copy, Default)]
pub struct PairCountEdf;

impl EdfPolicy for PairCountEdf {
    fn edf(&self, _kind: EstimatorKind, n: usize, _m: usize, _phase_len: usize) -> f64 {
        n.max(1) as f64
    }
}

/// Chi-square confidence interval `(lower, upper)` for a deviation estimate.
///
/// The squared deviation is treated as `edf`-distributed chi-square scaled by
/// the true variance, giving
/// `lower = dev * sqrt(edf / chi2_inv(1 - alpha/2))` and
/// `upper = dev * sqrt(edf / chi2_inv(alpha/2))`.
pub fn confidence_interval(
    deviation: f64,
    edf: f64,
    confidence_level: f64,
) -> Result<(f64, f64)> {
    if !(confidence_level > 0.0 && confidence_level < 1.0) {
        return Err(Error::InvalidParameter(format!(
            "Confidence level {confidence_level} must be in (0, 1)"
        )));
    }
    if !deviation.is_finite() || deviation < 0.0 {
        return Err(Error::InvalidInput(format!(
            "Deviation {deviation} must be finite and non-negative"
        )));
    }
    let chi2 =
        ChiSquared::new(edf).map_err(|e| Error::InvalidParameter(format!("edf {edf}: {e}")))?;

    let alpha = 1.0 - confidence_level;
    let hi_quantile = chi2.inverse_cdf(1.0 - alpha / 2.0);
    let lo_quantile = chi2.inverse_cdf(alpha / 2.0);
    Ok((
        deviation * (edf / hi_quantile).sqrt(),
        deviation * (edf / lo_quantile).sqrt(),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_non_overlapping_edf_is_pair_count_minus_one() {
        let policy = WhiteFmEdf;
        assert_relative_eq!(policy.edf(EstimatorKind::Adev, 8, 1, 10), 7.0);
        assert_relative_eq!(policy.edf(EstimatorKind::Hdev, 2, 2, 10), 1.0);
        // Clamped for a single pair
        assert_relative_eq!(policy.edf(EstimatorKind::Adev, 1, 4, 10), 1.0);
    }

    #[test]
    fn test_overlapping_edf_exceeds_non_overlapping() {
        let policy = WhiteFmEdf;
        // Same record and factor: OADEV keeps more information than ADEV
        let n_adev = 49usize; // 100 phase samples, m = 1, stride m
        let oadev_edf = policy.edf(EstimatorKind::Oadev, 98, 1, 100);
        let adev_edf = policy.edf(EstimatorKind::Adev, n_adev, 1, 100);
        assert!(oadev_edf > adev_edf);
    }

    #[test]
    fn test_overlapping_edf_shrinks_with_factor() {
        let policy = WhiteFmEdf;
        let e1 = policy.edf(EstimatorKind::Oadev, 98, 1, 100);
        let e10 = policy.edf(EstimatorKind::Oadev, 80, 10, 100);
        assert!(e10 < e1);
        assert!(e10 >= 1.0);
    }

    #[test]
    fn test_pair_count_policy() {
        let policy = PairCountEdf;
        assert_relative_eq!(policy.edf(EstimatorKind::Oadev, 6, 2, 10), 6.0);
        let err = policy.error(EstimatorKind::Oadev, 3.0, 9, 2, 10);
        assert_relative_eq!(err, 1.0);
    }

    #[test]
    fn test_confidence_interval_brackets_estimate() {
        let (lo, hi) = confidence_interval(1.0, 20.0, 0.95).unwrap();
        assert!(lo < 1.0 && 1.0 < hi);

        // More data tightens the interval
        let (lo2, hi2) = confidence_interval(1.0, 200.0, 0.95).unwrap();
        assert!(hi2 - lo2 < hi - lo);
    }

    #[test]
    fn test_confidence_interval_invalid_arguments() {
        assert!(confidence_interval(1.0, 10.0, 0.0).is_err());
        assert!(confidence_interval(1.0, 10.0, 1.0).is_err());
        assert!(confidence_interval(-1.0, 10.0, 0.95).is_err());
        assert!(confidence_interval(1.0, 0.0, 0.95).is_err());
    }
}
