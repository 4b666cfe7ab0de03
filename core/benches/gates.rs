use std::hint::black_box;

use boolgate_core::{Ciphertext, CloudKey, GateError, SecretKey, TOY_PARAMETERS, encrypt, gates, key_pair};
use boolgate_sampling::{DEFAULT_SEED, Source};
use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};

type BinaryGate = fn(&CloudKey, &mut Ciphertext, &Ciphertext, &Ciphertext) -> Result<(), GateError>;

fn bench_gates(c: &mut Criterion) {
    let mut group = c.benchmark_group("gates::toy");

    let mut source: Source = Source::new(DEFAULT_SEED);
    let (sk, ck): (SecretKey, CloudKey) = key_pair(&TOY_PARAMETERS, &mut source).unwrap();

    let a: Ciphertext = encrypt(&mut source, &sk, &[true]);
    let b: Ciphertext = encrypt(&mut source, &sk, &[false]);
    let mut out: Ciphertext = Ciphertext::empty(ck.parameters(), a.shape());

    let binary: [(&str, BinaryGate); 4] = [
        ("and", gates::and),
        ("or", gates::or),
        ("xor", gates::xor),
        ("nand", gates::nand),
    ];

    for (name, gate) in binary {
        group.bench_with_input(BenchmarkId::from_parameter(name), &(), |bench, _| {
            bench.iter(|| {
                gate(&ck, &mut out, &a, &b).unwrap();
                black_box(&out);
            })
        });
    }

    group.bench_with_input(BenchmarkId::from_parameter("not"), &(), |bench, _| {
        bench.iter(|| {
            gates::not(&mut out, &a).unwrap();
            black_box(&out);
        })
    });

    group.finish();
}

fn bench_key_pair(c: &mut Criterion) {
    let mut group = c.benchmark_group("key_pair::toy");
    let mut source: Source = Source::new(DEFAULT_SEED);

    group.bench_function("key_pair", |bench| {
        bench.iter(|| black_box(key_pair(&TOY_PARAMETERS, &mut source).unwrap()))
    });

    group.finish();
}

criterion_group!(benches, bench_gates, bench_key_pair);
criterion_main!(benches);
