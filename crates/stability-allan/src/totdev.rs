//! Total deviation (TOTDEV)
//!
//! TOTDEV reduces end effects by extending the phase record with an odd
//! reflection about its first and last points (N-2 points on each side) and
//! averaging the second difference over the N-2 interior points of the
//! original record. This is the doubly-reflected TOTVAR of NIST SP1065; the
//! bias-corrected endpoint-matched variant used for some published tables is
//! a separate, unimplemented correction (see crate docs).

/// Total variance point estimate at averaging factor `m`.
///
/// Valid for `m <= N - 1`; the term count is fixed at `N - 2`. Returns
/// `n = 0` for records too short to extend.
pub(crate) fn totdev_at(phase: &[f64], rate: f64, m: usize) -> (f64, usize) {
    debug_assert!(m >= 1);
    let len = phase.len();
    if len < 3 || m > len - 1 {
        return (0.0, 0);
    }

    // Extended record: reflect about x[0], original data, reflect about x[N-1].
    let mut ext = Vec::with_capacity(3 * len - 4);
    for j in (1..len - 1).rev() {
        ext.push(2.0 * phase[0] - phase[j]);
    }
    ext.extend_from_slice(phase);
    for j in 1..len - 1 {
        ext.push(2.0 * phase[len - 1] - phase[len - 1 - j]);
    }

    let mid = len - 2;
    let mut sum = 0.0;
    for i in 1..len - 1 {
        let d = ext[mid + i - m] - 2.0 * ext[mid + i] + ext[mid + i + m];
        sum += d * d;
    }

    let n = len - 2;
    let tau = m as f64 / rate;
    ((sum / (2.0 * n as f64 * tau * tau)).sqrt(), n)
}
