//! Benchmarks for the deviation estimators over a long phase record.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use stability_allan::{deviation_phase, EstimatorKind, TauSpec, WhiteFmEdf};

fn synthetic_phase(len: usize) -> Vec<f64> {
    let mut rng = ChaCha8Rng::seed_from_u64(42);
    let mut phase = Vec::with_capacity(len);
    let mut acc = 0.0;
    for _ in 0..len {
        acc += rng.gen_range(-1.0..1.0);
        phase.push(acc);
    }
    phase
}

fn bench_estimators(c: &mut Criterion) {
    let phase = synthetic_phase(100_000);
    let taus = TauSpec::Octave;

    let mut group = c.benchmark_group("deviation_estimators");
    for kind in [
        EstimatorKind::Adev,
        EstimatorKind::Oadev,
        EstimatorKind::Mdev,
        EstimatorKind::Hdev,
        EstimatorKind::Ohdev,
        EstimatorKind::Totdev,
    ] {
        group.bench_function(kind.name(), |b| {
            b.iter(|| {
                deviation_phase(kind, black_box(&phase), 1.0, &taus, &WhiteFmEdf).unwrap()
            })
        });
    }
    group.finish();
}

criterion_group!(benches, bench_estimators);
criterion_main!(benches);
