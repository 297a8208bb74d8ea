use cryptonite::crypter::pbkdf2_hmac_sha256_vec;
use cryptonite::ecdh::{FieldElement, derive_public_key, derive_shared_secret, x25519};

use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;

const SCALAR: [u8; 32] = [0x42; 32];

fn basepoint_u() -> [u8; 32] {
    let mut u = [0u8; 32];
    u[0] = 9;
    u
}

pub fn bench_ladder(c: &mut Criterion) {
    let u = basepoint_u();

    c.bench_function("x25519 ladder", |b| {
        b.iter(|| x25519(black_box(&SCALAR), black_box(&u)))
    });
}

pub fn bench_public_key(c: &mut Criterion) {
    c.bench_function("derive_public_key (fixed base)", |b| {
        b.iter(|| derive_public_key(Some(black_box(&SCALAR[..]))))
    });
}

pub fn bench_shared_secret(c: &mut Criterion) {
    let peer = basepoint_u();

    c.bench_function("derive_shared_secret", |b| {
        b.iter(|| derive_shared_secret(Some(black_box(&peer[..])), Some(black_box(&SCALAR[..]))))
    });
}

pub fn bench_invert(c: &mut Criterion) {
    let element = FieldElement::from_bytes(&SCALAR);

    c.bench_function("field invert", |b| b.iter(|| black_box(element).invert()));
}

pub fn bench_pbkdf2(c: &mut Criterion) {
    c.bench_function("pbkdf2-hmac-sha256 12513 iterations", |b| {
        b.iter(|| pbkdf2_hmac_sha256_vec(black_box(b"password"), &[0], 12_513, 32))
    });
}

criterion_group!(
    benches,
    bench_ladder,
    bench_public_key,
    bench_shared_secret,
    bench_invert,
    bench_pbkdf2
);
criterion_main!(benches);
