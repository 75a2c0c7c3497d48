use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use stark_curve::{
    double_scalar_mul, hash_chain, pedersen_hash, CurveParams, Felt, Group, ProjectivePoint,
    RandomField, Scalar, GENERATOR, PEDERSEN_POINTS,
};
use rand::rngs::StdRng;
use rand::SeedableRng;

fn random_scalar(rng: &mut StdRng) -> Scalar {
    Scalar::random(rng)
}

fn bench_affine_double(c: &mut Criterion) {
    let g = GENERATOR;
    c.bench_function("affine_double", |bencher| {
        bencher.iter(|| black_box(black_box(g).try_double()))
    });
}

fn bench_projective_double(c: &mut Criterion) {
    let g = GENERATOR.to_projective();
    c.bench_function("projective_double", |bencher| {
        bencher.iter(|| black_box(black_box(g).double()))
    });
}

fn bench_affine_add(c: &mut Criterion) {
    let g = GENERATOR;
    let h = PEDERSEN_POINTS[0];
    c.bench_function("affine_add", |bencher| {
        bencher.iter(|| black_box(black_box(g).try_add(&black_box(h))))
    });
}

fn bench_projective_add(c: &mut Criterion) {
    let g = GENERATOR.to_projective();
    let h = PEDERSEN_POINTS[0].to_projective();
    c.bench_function("projective_add", |bencher| {
        bencher.iter(|| black_box(black_box(g) + black_box(h)))
    });
}

fn bench_scalar_mul_vartime(c: &mut Criterion) {
    let g = GENERATOR.to_projective();
    let mut rng = StdRng::seed_from_u64(42);
    let scalar = random_scalar(&mut rng);

    c.bench_function("scalar_mul_vartime", |bencher| {
        bencher.iter(|| black_box(black_box(g).mul_vartime(black_box(&scalar))))
    });
}

fn bench_scalar_mul_ladder(c: &mut Criterion) {
    let g = GENERATOR.to_projective();
    let mut rng = StdRng::seed_from_u64(42);
    let scalar = random_scalar(&mut rng);

    c.bench_function("scalar_mul_ladder", |bencher| {
        bencher.iter(|| black_box(black_box(g).mul_ct(black_box(&scalar))))
    });
}

fn bench_double_scalar_mul(c: &mut Criterion) {
    let g = GENERATOR.to_projective();
    let h: ProjectivePoint = PEDERSEN_POINTS[1].to_projective();
    let mut rng = StdRng::seed_from_u64(42);
    let a = random_scalar(&mut rng);
    let b = random_scalar(&mut rng);

    c.bench_function("double_scalar_mul", |bencher| {
        bencher.iter(|| black_box(double_scalar_mul(&a, &g, &b, &h)))
    });
}

fn bench_pedersen(c: &mut Criterion) {
    let params = CurveParams::default();
    let mut rng = StdRng::seed_from_u64(7);
    let a = Felt::random(&mut rng);
    let b = Felt::random(&mut rng);

    c.bench_function("pedersen_hash", |bencher| {
        bencher.iter(|| black_box(pedersen_hash(&params, black_box(&a), black_box(&b))))
    });
}

fn bench_hash_chain(c: &mut Criterion) {
    let params = CurveParams::default();
    let mut group = c.benchmark_group("hash_chain");

    for size in [1, 4, 16].iter() {
        let mut rng = StdRng::seed_from_u64(12345);
        let values: Vec<Felt> = (0..*size).map(|_| Felt::random(&mut rng)).collect();

        group.bench_with_input(BenchmarkId::from_parameter(size), size, |bencher, _| {
            bencher.iter(|| black_box(hash_chain(&params, black_box(&values))))
        });
    }
    group.finish();
}

criterion_group!(
    benches,
    bench_affine_double,
    bench_projective_double,
    bench_affine_add,
    bench_projective_add,
    bench_scalar_mul_vartime,
    bench_scalar_mul_ladder,
    bench_double_scalar_mul,
    bench_pedersen,
    bench_hash_chain
);
criterion_main!(benches);
