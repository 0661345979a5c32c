//! Benchmarks for the Rijndael block cipher core
//!
//! Covers key expansion for the three key sizes and single-block
//! encryption and decryption against a prepared schedule.

use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use rijndael_core::{decrypt_block, encrypt_block, Direction, RoundKeys};

/// Benchmark round-key schedule expansion
fn bench_key_expansion(c: &mut Criterion) {
    let mut group = c.benchmark_group("rijndael_key_expansion");
    let mut rng = ChaCha8Rng::seed_from_u64(42);
    let mut key = [0u8; 32];
    rng.fill(&mut key[..]);

    group.bench_function("128bit", |b| {
        b.iter(|| {
            let keys = RoundKeys::expand(black_box(&key[..16]), Direction::Encrypt).unwrap();
            black_box(keys);
        });
    });

    group.bench_function("192bit", |b| {
        b.iter(|| {
            let keys = RoundKeys::expand(black_box(&key[..24]), Direction::Encrypt).unwrap();
            black_box(keys);
        });
    });

    group.bench_function("256bit", |b| {
        b.iter(|| {
            let keys = RoundKeys::expand(black_box(&key[..32]), Direction::Encrypt).unwrap();
            black_box(keys);
        });
    });

    // The decryption schedule pays for the extra equivalence transform.
    group.bench_function("256bit_decrypt", |b| {
        b.iter(|| {
            let keys = RoundKeys::expand(black_box(&key[..32]), Direction::Decrypt).unwrap();
            black_box(keys);
        });
    });

    group.finish();
}

/// Benchmark single-block encryption
fn bench_block_encrypt(c: &mut Criterion) {
    let mut group = c.benchmark_group("rijndael_block_encrypt");
    group.throughput(Throughput::Bytes(16));

    let mut rng = ChaCha8Rng::seed_from_u64(42);
    let mut key = [0u8; 32];
    rng.fill(&mut key[..]);
    let mut block = [0u8; 16];
    rng.fill(&mut block);

    for &(name, key_len) in &[("128bit", 16usize), ("192bit", 24), ("256bit", 32)] {
        let keys = RoundKeys::expand(&key[..key_len], Direction::Encrypt).unwrap();
        group.bench_function(name, |b| {
            let mut output = [0u8; 16];
            b.iter(|| {
                encrypt_block(black_box(&keys), black_box(&block), None, &mut output).unwrap();
                black_box(output);
            });
        });
    }

    group.finish();
}

/// Benchmark single-block decryption
fn bench_block_decrypt(c: &mut Criterion) {
    let mut group = c.benchmark_group("rijndael_block_decrypt");
    group.throughput(Throughput::Bytes(16));

    let mut rng = ChaCha8Rng::seed_from_u64(42);
    let mut key = [0u8; 32];
    rng.fill(&mut key[..]);
    let mut block = [0u8; 16];
    rng.fill(&mut block);

    for &(name, key_len) in &[("128bit", 16usize), ("192bit", 24), ("256bit", 32)] {
        let keys = RoundKeys::expand(&key[..key_len], Direction::Decrypt).unwrap();
        group.bench_function(name, |b| {
            let mut output = [0u8; 16];
            b.iter(|| {
                decrypt_block(black_box(&keys), black_box(&block), None, &mut output).unwrap();
                black_box(output);
            });
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_key_expansion,
    bench_block_encrypt,
    bench_block_decrypt
);
criterion_main!(benches);
