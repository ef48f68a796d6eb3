use criterion::{Criterion, criterion_group, criterion_main};
use ecfun_ecdsa::{
    ECDSA,
    ecfun::{PrivateKey, Scalar},
};

const MESSAGE: &[u8; 32] = b"hello world you are beautiful!!!";

lazy_static::lazy_static! {
    static ref SK: PrivateKey = PrivateKey::new(Scalar::from_bytes_mod_order(*b"xxxxxxxxxxxxxxxxxxxxxxxxxxxxxxxx")).unwrap();
    static ref SCHEME: ECDSA = ECDSA::default();
}

fn sign_ecdsa(c: &mut Criterion) {
    let mut group = c.benchmark_group("ecdsa_sign");

    group.bench_function("ecfun::ecdsa_sign", |b| b.iter(|| SCHEME.sign(&SK, MESSAGE)));
}

fn verify_ecdsa(c: &mut Criterion) {
    let mut group = c.benchmark_group("ecdsa_verify");

    let signature = SCHEME.sign(&SK, MESSAGE);
    let pk = SCHEME.verification_key_for(SK.secret());

    group.bench_function("ecfun::ecdsa_verify", |b| {
        b.iter(|| SCHEME.verify(&pk, MESSAGE, &signature))
    });
}

criterion_group!(benches, sign_ecdsa, verify_ecdsa);
criterion_main!(benches);
