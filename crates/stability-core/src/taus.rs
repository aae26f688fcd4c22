//! Averaging-time (tau) generation and validation
//!
//! Every estimator works on integer averaging factors `m`, where
//! `tau = m / rate`. This module turns a tau request — an explicit list or a
//! spacing mode — into the sorted, deduplicated set of achievable `(tau, m)`
//! pairs for a phase record of a given length.

use crate::error::{Error, Result};

/// Requested averaging times for an estimator run
#[derive(Debug, Clone, PartialEq)]
pub enum TauSpec {
    /// Explicit averaging times, in seconds
    List(Vec<f64>),
    /// Every achievable integer averaging factor
    All,
    /// Powers of two: m = 1, 2, 4, 8, ...
    Octave,
    /// Powers of ten: m = 1, 10, 100, ...
    Decade,
}

impl Default for TauSpec {
    fn default() -> Self {
        TauSpec::Octave
    }
}

impl From<Vec<f64>> for TauSpec {
    fn from(taus: Vec<f64>) -> Self {
        TauSpec::List(taus)
    }
}

impl From<&[f64]> for TauSpec {
    fn from(taus: &[f64]) -> Self {
        TauSpec::List(taus.to_vec())
    }
}

/// Resolve a tau request against a phase record of length `len`.
///
/// Returns parallel `(taus_used, ms)` vectors, sorted ascending, with
/// duplicate averaging factors collapsed. Factors are kept when
/// `1 <= m <= len - 1`; a requested tau with no achievable factor is silently
/// dropped rather than reported as an error. A non-positive rate or a
/// non-positive (or non-finite) requested tau is a caller error.
pub fn tau_m(len: usize, rate: f64, spec: &TauSpec) -> Result<(Vec<f64>, Vec<usize>)> {
    if rate <= 0.0 {
        return Err(Error::invalid_rate(rate));
    }
    let max_m = len.saturating_sub(1);

    let mut ms: Vec<usize> = Vec::new();
    match spec {
        TauSpec::List(taus) => {
            for &tau in taus {
                if !tau.is_finite() || tau <= 0.0 {
                    return Err(Error::invalid_tau(tau));
                }
                let mf = (tau * rate).round();
                if mf < 1.0 || mf > max_m as f64 {
                    tracing::trace!(tau, len, "requested tau has no achievable averaging factor");
                    continue;
                }
                let m = mf as usize;
                if !ms.contains(&m) {
                    ms.push(m);
                }
            }
            ms.sort_unstable();
        }
        TauSpec::All => ms.extend(1..=max_m),
        TauSpec::Octave => {
            let mut m = 1usize;
            while m <= max_m {
                ms.push(m);
                match m.checked_mul(2) {
                    Some(next) => m = next,
                    None => break,
                }
            }
        }
        TauSpec::Decade => {
            let mut m = 1usize;
            while m <= max_m {
                ms.push(m);
                match m.checked_mul(10) {
                    Some(next) => m = next,
                    None => break,
                }
            }
        }
    }

    let taus_used = ms.iter().map(|&m| m as f64 / rate).collect();
    Ok((taus_used, ms))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_list_basic() {
        let (taus, ms) = tau_m(10, 1.0, &TauSpec::List(vec![1.0, 2.0])).unwrap();
        assert_eq!(ms, vec![1, 2]);
        assert_relative_eq!(taus[0], 1.0);
        assert_relative_eq!(taus[1], 2.0);
    }

    #[test]
    fn test_list_dedupes_and_sorts() {
        // 2.1 and 1.9 both round to m=2 at rate 1
        let (taus, ms) = tau_m(10, 1.0, &TauSpec::List(vec![4.0, 2.1, 1.9, 1.0])).unwrap();
        assert_eq!(ms, vec![1, 2, 4]);
        assert!(taus.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_unachievable_taus_dropped() {
        // m would be 0 (0.2 rounds down) and 20 (> len-1): both dropped
        let (taus, ms) = tau_m(10, 1.0, &TauSpec::List(vec![0.2, 20.0, 3.0])).unwrap();
        assert_eq!(ms, vec![3]);
        assert_eq!(taus.len(), 1);
    }

    #[test]
    fn test_rate_scales_factors() {
        let (taus, ms) = tau_m(101, 10.0, &TauSpec::List(vec![0.1, 1.0])).unwrap();
        assert_eq!(ms, vec![1, 10]);
        assert_relative_eq!(taus[0], 0.1);
        assert_relative_eq!(taus[1], 1.0);
    }

    #[test]
    fn test_generator_modes() {
        let (_, ms) = tau_m(10, 1.0, &TauSpec::All).unwrap();
        assert_eq!(ms, vec![1, 2, 3, 4, 5, 6, 7, 8, 9]);

        let (_, ms) = tau_m(10, 1.0, &TauSpec::Octave).unwrap();
        assert_eq!(ms, vec![1, 2, 4, 8]);

        let (_, ms) = tau_m(1001, 1.0, &TauSpec::Decade).unwrap();
        assert_eq!(ms, vec![1, 10, 100, 1000]);
    }

    #[test]
    fn test_generator_modes_saturate_on_huge_records() {
        // Factor doubling/decading must stop cleanly when the next step
        // would overflow, not wrap or panic.
        let (_, ms) = tau_m(usize::MAX, 1.0, &TauSpec::Octave).unwrap();
        assert_eq!(ms.len(), usize::BITS as usize);
        assert!(ms.windows(2).all(|w| w[1] == 2 * w[0]));

        let (_, ms) = tau_m(usize::MAX, 1.0, &TauSpec::Decade).unwrap();
        assert!(ms.windows(2).all(|w| w[1] == 10 * w[0]));
        assert!(*ms.last().unwrap() <= usize::MAX - 1);
    }

    #[test]
    fn test_invalid_arguments() {
        assert!(tau_m(10, 0.0, &TauSpec::All).is_err());
        assert!(tau_m(10, 1.0, &TauSpec::List(vec![-1.0])).is_err());
        assert!(tau_m(10, 1.0, &TauSpec::List(vec![0.0])).is_err());
        assert!(tau_m(10, 1.0, &TauSpec::List(vec![f64::NAN])).is_err());
    }

    #[test]
    fn test_short_record_yields_empty() {
        let (taus, ms) = tau_m(1, 1.0, &TauSpec::List(vec![1.0])).unwrap();
        assert!(taus.is_empty());
        assert!(ms.is_empty());
    }
}
