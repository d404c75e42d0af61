use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use rand::{RngCore, SeedableRng};
use rand_chacha::ChaCha20Rng;

use aes_core::{
    encrypt_block, expand_key, process_blocks, Aes128Key, Block, Operation, ProcessingHint,
};

fn bench_single_block(c: &mut Criterion) {
    let mut rng = ChaCha20Rng::from_seed([1u8; 32]);
    let mut key_bytes = [0u8; 16];
    rng.fill_bytes(&mut key_bytes);
    let key = Aes128Key::from(key_bytes);
    let round_keys = expand_key(&key);

    let mut group = c.benchmark_group("single");
    group.throughput(Throughput::Bytes(16));
    group.bench_function("expand_key", |b| {
        b.iter(|| expand_key(black_box(&key)));
    });
    group.bench_function("encrypt_block", |b| {
        let mut block = [0u8; 16];
        rng.fill_bytes(&mut block);
        b.iter(|| encrypt_block(black_box(&block), &round_keys));
    });
    group.finish();
}

fn bench_batch(c: &mut Criterion) {
    let mut rng = ChaCha20Rng::from_seed([2u8; 32]);
    let key = Aes128Key::from([0u8; 16]);
    let blocks: Vec<Block> = (0..4096)
        .map(|_| {
            let mut b = [0u8; 16];
            rng.fill_bytes(&mut b);
            b
        })
        .collect();

    let mut group = c.benchmark_group("batch");
    group.throughput(Throughput::Bytes((blocks.len() * 16) as u64));
    group.sample_size(20);
    for (name, hint) in [
        ("standard", ProcessingHint::Standard),
        ("batch_optimized", ProcessingHint::BatchOptimized),
    ] {
        group.bench_function(name, |b| {
            b.iter(|| {
                let mut data = blocks.clone();
                process_blocks(&mut data, &key, Operation::Encrypt, hint);
                data
            });
        });
    }
    group.finish();
}

criterion_group!(benches, bench_single_block, bench_batch);
criterion_main!(benches);
