use criterion::{criterion_group, criterion_main, Criterion};
use image::{ImageBuffer, Rgb, RgbImage};
use lsbcrypt_core::media::image::{EmbeddingStrategy, LsbCodec};
use lsbcrypt_core::media::payload::Payload;

pub fn image_extraction(c: &mut Criterion) {
    let plain: RgbImage =
        ImageBuffer::from_fn(512, 512, |x, y| Rgb([x as u8, y as u8, (x ^ y) as u8]));
    let secret_message = Payload::frame([7; 16], vec![42; 1024])
        .and_then(|p| p.to_bytes())
        .expect("Cannot frame the secret message");
    let strategy = EmbeddingStrategy::permuted("SuperSecret42");
    let img = LsbCodec::embed(&plain, &secret_message, &strategy)
        .expect("Cannot embed secret message");

    c.bench_function("Image Extraction permuted", |b| {
        b.iter(|| LsbCodec::extract(&img, &strategy).expect("Failed to extract the payload"))
    });
}

criterion_group!(benches, image_extraction);
criterion_main!(benches);
