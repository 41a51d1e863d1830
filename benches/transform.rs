use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use ffts::{plan, CapabilityHint, Complex32, Direction, PlanConfig};
use once_cell::sync::Lazy;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

static SIZES: &[usize] = &[64, 256, 1024, 4096, 16384];

fn random_signal(n: usize) -> Vec<Complex32> {
    static RNG_SEED: u64 = 0xC0FFEE;
    let mut rng = ChaCha8Rng::seed_from_u64(RNG_SEED ^ n as u64);
    (0..n)
        .map(|_| Complex32::new(rng.gen_range(-1.0..1.0), rng.gen_range(-1.0..1.0)))
        .collect()
}

static SIGNALS: Lazy<Vec<(usize, Vec<Complex32>)>> =
    Lazy::new(|| SIZES.iter().map(|&n| (n, random_signal(n))).collect());

fn bench_auto_backend(c: &mut Criterion) {
    let mut group = c.benchmark_group("execute_auto");
    for (n, input) in SIGNALS.iter() {
        let p = plan(PlanConfig::new(*n, Direction::Forward)).unwrap();
        let mut output = vec![Complex32::new(0.0, 0.0); *n];
        group.bench_with_input(BenchmarkId::from_parameter(n), n, |b, _| {
            b.iter(|| p.execute(input, &mut output));
        });
    }
    group.finish();
}

fn bench_scalar_backend(c: &mut Criterion) {
    let mut group = c.benchmark_group("execute_scalar_only");
    for (n, input) in SIGNALS.iter() {
        let p = plan(
            PlanConfig::new(*n, Direction::Forward).capability_hint(CapabilityHint::ScalarOnly),
        )
        .unwrap();
        let mut output = vec![Complex32::new(0.0, 0.0); *n];
        group.bench_with_input(BenchmarkId::from_parameter(n), n, |b, _| {
            b.iter(|| p.execute(input, &mut output));
        });
    }
    group.finish();
}

criterion_group!(benches, bench_auto_backend, bench_scalar_backend);
criterion_main!(benches);
