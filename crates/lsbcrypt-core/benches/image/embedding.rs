use criterion::{criterion_group, criterion_main, Criterion};
use image::{ImageBuffer, Rgb, RgbImage};
use lsbcrypt_core::media::image::{EmbeddingStrategy, LsbCodec};
use lsbcrypt_core::media::payload::Payload;

pub fn image_embedding(c: &mut Criterion) {
    let carrier: RgbImage =
        ImageBuffer::from_fn(512, 512, |x, y| Rgb([x as u8, y as u8, (x ^ y) as u8]));
    let secret_message = Payload::frame([7; 16], vec![42; 1024])
        .and_then(|p| p.to_bytes())
        .expect("Cannot frame the secret message");

    c.bench_function("Image Embedding permuted", |b| {
        let strategy = EmbeddingStrategy::permuted("SuperSecret42");
        b.iter(|| {
            LsbCodec::embed(&carrier, &secret_message, &strategy)
                .expect("Cannot embed secret message")
        })
    });

    c.bench_function("Image Embedding sequential", |b| {
        let strategy = EmbeddingStrategy::sequential();
        b.iter(|| {
            LsbCodec::embed(&carrier, &secret_message, &strategy)
                .expect("Cannot embed secret message")
        })
    });
}

criterion_group!(benches, image_embedding);
criterion_main!(benches);
