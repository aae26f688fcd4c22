//! Modified Allan deviation (MDEV)
//!
//! MDEV averages the second difference over a boxcar of `m` adjacent starting
//! indices before squaring, which is what separates white from flicker phase
//! noise. The boxcar sum is maintained as a running value, so the whole scan
//! is O(N) regardless of `m`.

/// Modified Allan variance point estimate at averaging factor `m`.
///
/// `n = N - 3m + 1` boxcar-summed second differences are squared and the
/// variance is `sum / (2 n m^4 tau0^2)`. Returns `n = 0` when `3m > N`.
pub(crate) fn mdev_at(phase: &[f64], rate: f64, m: usize) -> (f64, usize) {
    debug_assert!(m >= 1);
    let len = phase.len();
    if 3 * m > len {
        return (0.0, 0);
    }

    let mut v = 0.0;
    for j in 0..m {
        v += phase[j + 2 * m] - 2.0 * phase[j + m] + phase[j];
    }
    let mut sum = v * v;
    let mut n = 1usize;

    // Slide the boxcar: add the incoming second difference, drop the outgoing.
    for i in 0..(len - 3 * m) {
        v += phase[i + 3 * m] - 3.0 * phase[i + 2 * m] + 3.0 * phase[i + m] - phase[i];
        sum += v * v;
        n += 1;
    }

    let mf = m as f64;
    let tau0 = 1.0 / rate;
    let var = sum / (2.0 * n as f64 * mf.powi(4) * tau0 * tau0);
    (var.sqrt(), n)
}
