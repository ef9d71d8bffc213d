use criterion::{criterion_group, criterion_main, Criterion};
use image::{ImageBuffer, RgbaImage};
use pixveil_core::{LsbCodec, StegoConfig};

fn carrier() -> RgbaImage {
    ImageBuffer::from_fn(512, 512, |x, y| {
        let i = (x * 7 + y * 13) as u8;
        image::Rgba([i, i.wrapping_add(1), i.wrapping_add(2), 255])
    })
}

pub fn image_encoding(c: &mut Criterion) {
    c.bench_function("Image Encoding", |b| {
        let plain_image = carrier();
        let config = StegoConfig::default();
        let secret_message = b"Hello World!";

        b.iter(|| {
            LsbCodec::encode(&plain_image, &secret_message[..], &config)
                .expect("Cannot write secret message");
        })
    });
}

criterion_group!(benches, image_encoding);
criterion_main!(benches);
