use criterion::{black_box, criterion_group, criterion_main, Criterion};
use seedkit_crypto::{base58, base58check, Wordlist};
use seedkit_types::{Entropy, Mnemonic};

fn base58_encode_bench(c: &mut Criterion) {
    let address = [0x42u8; 25];
    let wif = [0xA5u8; 38];

    c.bench_function("base58_encode_25B", |b| {
        b.iter(|| base58::encode(black_box(&address)))
    });
    c.bench_function("base58_encode_38B", |b| {
        b.iter(|| base58::encode(black_box(&wif)))
    });
}

fn base58_decode_bench(c: &mut Criterion) {
    let text = base58::encode(&[0x42u8; 25]);

    c.bench_function("base58_decode_25B", |b| {
        b.iter(|| base58::decode(black_box(&text)))
    });
}

fn base58check_bench(c: &mut Criterion) {
    let payload = [0x65u8; 20];
    let text = base58check::encode(0, &payload);

    c.bench_function("base58check_encode_20B", |b| {
        b.iter(|| base58check::encode(black_box(0), black_box(&payload)))
    });
    c.bench_function("base58check_decode_verified", |b| {
        b.iter(|| base58check::decode_verified(black_box(&text)))
    });
}

fn mnemonic_bench(c: &mut Criterion) {
    let wordlist = Wordlist::english();
    let entropy = Entropy::from_bytes(&[0x7Fu8; 32]).unwrap();

    c.bench_function("mnemonic_from_entropy_256", |b| {
        b.iter(|| seedkit_crypto::mnemonic_from_entropy(black_box(&entropy), &wordlist))
    });
}

fn seed_bench(c: &mut Criterion) {
    let mnemonic = Mnemonic::from_phrase(
        "legal winner thank year wave sausage worth useful legal winner thank yellow",
    );

    c.bench_function("to_seed_pbkdf2_2048", |b| {
        b.iter(|| seedkit_crypto::to_seed(black_box(&mnemonic), "TREZOR"))
    });
}

criterion_group!(
    benches,
    base58_encode_bench,
    base58_decode_bench,
    base58check_bench,
    mnemonic_bench,
    seed_bench,
);
criterion_main!(benches);
