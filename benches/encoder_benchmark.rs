#![allow(clippy::expect_used, clippy::unwrap_used, missing_docs)]
//! Benchmark for the bitmap codec.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use softraster::bmp::{BmpDecoder, BmpEncoder};
use softraster::color::Rgba;
use softraster::framebuffer::{BitDepth, Framebuffer};

fn bmp_encoder_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("bmp_encoder");

    for (width, height) in [(800, 600), (1921, 1080)] {
        let mut fb = Framebuffer::new(width, height, BitDepth::Bgr24).unwrap();
        fb.clear(Rgba::rgb(40, 80, 120));
        let encoder = BmpEncoder::new();

        group.bench_with_input(
            BenchmarkId::from_parameter(format!("{width}x{height}")),
            &fb,
            |b, fb| {
                b.iter(|| encoder.to_bytes(black_box(fb)).unwrap());
            },
        );
    }

    group.finish();
}

fn bmp_decoder_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("bmp_decoder");

    for (width, height) in [(800, 600), (1921, 1080)] {
        let fb = Framebuffer::new(width, height, BitDepth::Bgr24).unwrap();
        let bytes = BmpEncoder::new().to_bytes(&fb).unwrap();

        group.bench_with_input(
            BenchmarkId::from_parameter(format!("{width}x{height}")),
            &bytes,
            |b, bytes| {
                b.iter(|| BmpDecoder::from_bytes(black_box(bytes)).unwrap());
            },
        );
    }

    group.finish();
}

criterion_group!(benches, bmp_encoder_benchmark, bmp_decoder_benchmark);
criterion_main!(benches);
