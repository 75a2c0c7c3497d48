use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use stark_curve::{CurveParams, Felt};
use stark_tx::{hash_tx, Transaction};

fn transaction(calldata_len: u64) -> Transaction {
    Transaction {
        contract_address: Felt::from_u64(0x1234),
        entry_point_selector: Felt::from_u64(0x5678),
        calldata: (0..calldata_len).map(Felt::from_u64).collect(),
        nonce: Felt::from_u64(1),
        ..Transaction::default()
    }
}

fn bench_hash_tx(c: &mut Criterion) {
    let params = CurveParams::default();
    let account = Felt::from_u64(0xabcd);
    let mut group = c.benchmark_group("hash_tx");

    for size in [0u64, 4, 16].iter() {
        let tx = transaction(*size);
        group.bench_with_input(BenchmarkId::from_parameter(size), size, |bencher, _| {
            bencher.iter(|| black_box(hash_tx(&params, black_box(&account), black_box(&tx))))
        });
    }
    group.finish();
}

criterion_group!(benches, bench_hash_tx);
criterion_main!(benches);
