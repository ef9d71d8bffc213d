use criterion::{criterion_group, criterion_main, Criterion};
use image::{ImageBuffer, RgbaImage};
use pixveil_core::{LsbCodec, StegoConfig};

fn carrier() -> RgbaImage {
    ImageBuffer::from_fn(512, 512, |x, y| {
        let i = (x * 7 + y * 13) as u8;
        image::Rgba([i, i.wrapping_add(1), i.wrapping_add(2), 255])
    })
}

pub fn image_decoding(c: &mut Criterion) {
    c.bench_function("Image Decoding", |b| {
        let config = StegoConfig::default();
        let image_with_secret = LsbCodec::encode(&carrier(), b"Hello World!", &config)
            .expect("Cannot write secret message");

        b.iter(|| {
            LsbCodec::decode(&image_with_secret, &config).expect("Cannot read secret message");
        })
    });
}

criterion_group!(benches, image_decoding);
criterion_main!(benches);
