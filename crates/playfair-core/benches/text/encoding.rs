use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use playfair_core::Cipher;

pub fn text_encoding(c: &mut Criterion) {
    let cipher = Cipher::new("playfairexample").expect("Keyword is not valid.");
    let plain_text = "Hide the gold in the tree stump. ".repeat(64);

    let mut group = c.benchmark_group("Text Encoding");
    group.throughput(Throughput::Bytes(plain_text.len() as u64));
    group.bench_function("encode", |b| {
        b.iter(|| {
            cipher
                .encode(black_box(&plain_text))
                .expect("Cannot encode plain text")
        })
    });
    group.finish();
}

criterion_group!(benches, text_encoding);
criterion_main!(benches);
