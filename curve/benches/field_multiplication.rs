use criterion::{black_box, criterion_group, criterion_main, Criterion};
use stark_curve::{Felt, RandomField, Scalar};
use rand::rngs::StdRng;
use rand::SeedableRng;

fn bench_felt_mul(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(42);
    let a = Felt::random(&mut rng);
    let b = Felt::random(&mut rng);
    c.bench_function("felt_mul", |bencher| {
        bencher.iter(|| black_box(black_box(a) * black_box(b)))
    });
}

fn bench_scalar_mul(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(42);
    let a = Scalar::random(&mut rng);
    let b = Scalar::random(&mut rng);
    c.bench_function("scalar_field_mul", |bencher| {
        bencher.iter(|| black_box(black_box(a) * black_box(b)))
    });
}

fn bench_felt_inverse(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(42);
    let a = Felt::random_nonzero(&mut rng);
    c.bench_function("felt_inverse", |bencher| {
        bencher.iter(|| black_box(black_box(a).inverse()))
    });
}

fn bench_felt_sqrt(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(42);
    let a = Felt::random(&mut rng).square();
    c.bench_function("felt_sqrt", |bencher| {
        bencher.iter(|| black_box(black_box(a).sqrt()))
    });
}

criterion_group!(
    benches,
    bench_felt_mul,
    bench_scalar_mul,
    bench_felt_inverse,
    bench_felt_sqrt
);
criterion_main!(benches);
