use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use playfair_core::Cipher;

pub fn text_decoding(c: &mut Criterion) {
    let cipher = Cipher::new("playfairexample").expect("Keyword is not valid.");
    let cipher_text = "bmodzbxdnabekudmuixmmouvif".repeat(64);

    let mut group = c.benchmark_group("Text Decoding");
    group.throughput(Throughput::Bytes(cipher_text.len() as u64));
    group.bench_function("decode", |b| {
        b.iter(|| {
            cipher
                .decode(black_box(&cipher_text))
                .expect("Cannot decode cipher text")
        })
    });
    group.finish();
}

criterion_group!(benches, text_decoding);
criterion_main!(benches);
