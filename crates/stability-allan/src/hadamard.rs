//! Hadamard deviation (HDEV) and overlapping Hadamard deviation (OHDEV)
//!
//! The Hadamard kernel is a third difference,
//! `x[i+3m] - 3*x[i+2m] + 3*x[i+m] - x[i]`, which cancels linear frequency
//! drift. HDEV strides by `m`, OHDEV by 1.

/// Hadamard variance point estimate at averaging factor `m`.
///
/// Sums squared third differences for `i = 0, stride, 2*stride, ...` while
/// all indices stay in range; variance is `sum / (6 n tau^2)`. Returns
/// `n = 0` when no window fits.
pub(crate) fn hdev_at(phase: &[f64], rate: f64, m: usize, stride: usize) -> (f64, usize) {
    debug_assert!(m >= 1 && stride >= 1);
    if 3 * m >= phase.len() {
        return (0.0, 0);
    }

    let mut sum = 0.0;
    let mut n = 0usize;
    let mut i = 0usize;
    while i + 3 * m < phase.len() {
        let d = phase[i + 3 * m] - 3.0 * phase[i + 2 * m] + 3.0 * phase[i + m] - phase[i];
        sum += d * d;
        n += 1;
        i += stride;
    }

    let tau = m as f64 / rate;
    ((sum / (6.0 * n as f64 * tau * tau)).sqrt(), n)
}
