use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use ecrypt::prelude::*;
use ecrypt_tests::{fixture_key, NIST_CURVES};
use rand::rngs::OsRng;

fn bench_encrypt(c: &mut Criterion) {
    let mut group = c.benchmark_group("ECIES-encrypt");

    for curve in NIST_CURVES {
        let sk = fixture_key(curve, 1);
        for size in [16usize, 1024, 16384] {
            let plaintext = vec![0x5au8; size];
            group.bench_with_input(BenchmarkId::new(curve.name(), size), &size, |b, _| {
                b.iter(|| {
                    black_box(encrypt(&mut OsRng, sk.public_key(), &plaintext, None, None).unwrap())
                })
            });
        }
    }

    group.finish();
}

fn bench_decrypt(c: &mut Criterion) {
    let mut group = c.benchmark_group("ECIES-decrypt");

    for curve in NIST_CURVES {
        let sk = fixture_key(curve, 2);
        for size in [16usize, 1024, 16384] {
            let plaintext = vec![0xa5u8; size];
            let envelope = encrypt(&mut OsRng, sk.public_key(), &plaintext, None, None).unwrap();
            group.bench_with_input(BenchmarkId::new(curve.name(), size), &size, |b, _| {
                b.iter(|| black_box(sk.decrypt(&envelope, None, None).unwrap()))
            });
        }
    }

    group.finish();
}

fn bench_keygen(c: &mut Criterion) {
    let mut group = c.benchmark_group("ECIES-keygen");
    for curve in NIST_CURVES {
        group.bench_function(curve.name(), |b| {
            b.iter(|| black_box(generate_key(&mut OsRng, curve, None).unwrap()))
        });
    }
    group.finish();
}

criterion_group!(benches, bench_encrypt, bench_decrypt, bench_keygen);
criterion_main!(benches);
