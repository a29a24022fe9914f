use criterion::{black_box, criterion_group, criterion_main, Criterion};
use playfair_core::Cipher;

pub fn grid_construction(c: &mut Criterion) {
    c.bench_function("Grid Construction", |b| {
        b.iter(|| Cipher::new(black_box("playfairexample")).expect("Keyword is not valid."))
    });
}

criterion_group!(benches, grid_construction);
criterion_main!(benches);
