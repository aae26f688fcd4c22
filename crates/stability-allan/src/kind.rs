//! Estimator kinds and their shared dispatch

use std::fmt;

/// The deviation estimators this crate computes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EstimatorKind {
    /// Allan deviation, non-overlapping windows
    Adev,
    /// Overlapping Allan deviation
    Oadev,
    /// Modified Allan deviation
    Mdev,
    /// Time deviation, `tau * MDEV(tau) / sqrt(3)`
    Tdev,
    /// Hadamard deviation, non-overlapping windows
    Hdev,
    /// Overlapping Hadamard deviation
    Ohdev,
    /// Total deviation, doubly-reflected record
    Totdev,
}

impl EstimatorKind {
    /// Conventional short name of the estimator
    pub fn name(&self) -> &'static str {
        match self {
            EstimatorKind::Adev => "ADEV",
            EstimatorKind::Oadev => "OADEV",
            EstimatorKind::Mdev => "MDEV",
            EstimatorKind::Tdev => "TDEV",
            EstimatorKind::Hdev => "HDEV",
            EstimatorKind::Ohdev => "OHDEV",
            EstimatorKind::Totdev => "TOTDEV",
        }
    }

    /// Whether every valid starting index is used, rather than only
    /// non-overlapping blocks
    pub fn is_overlapping(&self) -> bool {
        !matches!(self, EstimatorKind::Adev | EstimatorKind::Hdev)
    }

    /// Minimum phase-record length accepted by the dispatcher; shorter input
    /// is a caller error rather than an empty result
    pub fn min_phase_len(&self) -> usize {
        match self {
            EstimatorKind::Adev | EstimatorKind::Oadev | EstimatorKind::Totdev => 2,
            EstimatorKind::Mdev
            | EstimatorKind::Tdev
            | EstimatorKind::Hdev
            | EstimatorKind::Ohdev => 3,
        }
    }

    /// Point estimate `(deviation, n)` at one averaging factor.
    ///
    /// `n = 0` marks a factor whose windows do not fit the record.
    pub(crate) fn deviation_at(&self, phase: &[f64], rate: f64, m: usize) -> (f64, usize) {
        match self {
            EstimatorKind::Adev => crate::adev::adev_at(phase, rate, m, m),
            EstimatorKind::Oadev => crate::adev::adev_at(phase, rate, m, 1),
            EstimatorKind::Mdev => crate::mdev::mdev_at(phase, rate, m),
            EstimatorKind::Tdev => {
                let (dev, n) = crate::mdev::mdev_at(phase, rate, m);
                let tau = m as f64 / rate;
                (tau * dev / 3f64.sqrt(), n)
            }
            EstimatorKind::Hdev => crate::hadamard::hdev_at(phase, rate, m, m),
            EstimatorKind::Ohdev => crate::hadamard::hdev_at(phase, rate, m, 1),
            EstimatorKind::Totdev => crate::totdev::totdev_at(phase, rate, m),
        }
    }
}

impl fmt::Display for EstimatorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
