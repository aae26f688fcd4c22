//! Result types for deviation estimators

use std::fmt;

/// A single deviation estimate at one averaging time
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DeviationPoint {
    /// Averaging time, in seconds
    pub tau: f64,
    /// Deviation estimate (square root of the estimator variance)
    pub deviation: f64,
    /// One-sigma uncertainty of the deviation
    pub error: f64,
    /// Number of difference terms averaged at this tau
    pub n: usize,
}

/// Result of a deviation estimator run
///
/// Holds four parallel sequences sorted ascending by tau. Every retained tau
/// averaged at least one term; taus whose windows did not fit the record are
/// dropped, not reported as zero or NaN.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DeviationResult {
    taus: Vec<f64>,
    deviations: Vec<f64>,
    errors: Vec<f64>,
    ns: Vec<usize>,
}

impl DeviationResult {
    /// Create a result from parallel sequences.
    ///
    /// # Panics
    /// Panics if the sequences differ in length or any pair count is zero.
    pub fn new(taus: Vec<f64>, deviations: Vec<f64>, errors: Vec<f64>, ns: Vec<usize>) -> Self {
        assert!(
            taus.len() == deviations.len()
                && taus.len() == errors.len()
                && taus.len() == ns.len(),
            "result sequences must have equal lengths"
        );
        assert!(ns.iter().all(|&n| n >= 1), "retained taus must have n >= 1");
        Self {
            taus,
            deviations,
            errors,
            ns,
        }
    }

    /// Averaging times actually used, ascending
    pub fn taus(&self) -> &[f64] {
        &self.taus
    }

    /// Deviation estimates, parallel to [`taus`](Self::taus)
    pub fn deviations(&self) -> &[f64] {
        &self.deviations
    }

    /// One-sigma uncertainties, parallel to [`taus`](Self::taus)
    pub fn errors(&self) -> &[f64] {
        &self.errors
    }

    /// Difference-term counts, parallel to [`taus`](Self::taus)
    pub fn ns(&self) -> &[usize] {
        &self.ns
    }

    /// Number of retained taus
    pub fn len(&self) -> usize {
        self.taus.len()
    }

    /// Check whether any tau survived
    pub fn is_empty(&self) -> bool {
        self.taus.is_empty()
    }

    /// Iterate over the retained taus as [`DeviationPoint`]s
    pub fn iter(&self) -> impl Iterator<Item = DeviationPoint> + '_ {
        self.taus
            .iter()
            .zip(&self.deviations)
            .zip(&self.errors)
            .zip(&self.ns)
            .map(|(((&tau, &deviation), &error), &n)| DeviationPoint {
                tau,
                deviation,
                error,
                n,
            })
    }

    /// Decompose into `(taus, deviations, errors, ns)`
    pub fn into_parts(self) -> (Vec<f64>, Vec<f64>, Vec<f64>, Vec<usize>) {
        (self.taus, self.deviations, self.errors, self.ns)
    }
}

impl fmt::Display for DeviationResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "tau        deviation      error          n")?;
        for p in self.iter() {
            writeln!(
                f,
                "{:<10.4e} {:<14.6e} {:<14.6e} {}",
                p.tau, p.deviation, p.error, p.n
            )?;
        }
        Ok(())
    }
}
