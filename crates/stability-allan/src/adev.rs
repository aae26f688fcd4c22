//! Allan deviation (ADEV) and overlapping Allan deviation (OADEV)
//!
//! Both share the two-sample second-difference kernel
//! `D(i, m) = x[i+2m] - 2*x[i+m] + x[i]`; ADEV evaluates it on
//! non-overlapping windows (stride `m`), OADEV at every starting index
//! (stride 1).

/// Allan variance point estimate at averaging factor `m`.
///
/// Sums `D(i, m)^2` for `i = 0, stride, 2*stride, ...` while all indices stay
/// in range, and returns `(sqrt(sum / (2 n tau^2)), n)`. Returns `n = 0` when
/// no window fits; the caller drops such taus.
pub(crate) fn adev_at(phase: &[f64], rate: f64, m: usize, stride: usize) -> (f64, usize) {
    debug_assert!(m >= 1 && stride >= 1);
    if 2 * m >= phase.len() {
        return (0.0, 0);
    }

    let mut sum = 0.0;
    let mut n = 0usize;
    let mut i = 0usize;
    while i + 2 * m < phase.len() {
        let d = phase[i + 2 * m] - 2.0 * phase[i + m] + phase[i];
        sum += d * d;
        n += 1;
        i += stride;
    }

    let tau = m as f64 / rate;
    ((sum / (2.0 * n as f64 * tau * tau)).sqrt(), n)
}
