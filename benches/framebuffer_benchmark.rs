#![allow(clippy::expect_used, clippy::unwrap_used, missing_docs)]
//! Benchmark for framebuffer operations.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use softraster::color::Rgba;
use softraster::framebuffer::{BitDepth, Framebuffer};
use softraster::geometry::PixelRect;

fn framebuffer_clear_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("framebuffer_clear");

    for (width, height) in [(800, 600), (1920, 1080), (3840, 2160)] {
        let mut fb = Framebuffer::new(width, height, BitDepth::Bgr24).unwrap();

        group.bench_with_input(
            BenchmarkId::from_parameter(format!("{width}x{height}")),
            &(width, height),
            |b, _| {
                b.iter(|| {
                    fb.clear(black_box(Rgba::RED));
                });
            },
        );
    }

    group.finish();
}

fn framebuffer_pixel_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("framebuffer_pixel");

    let mut fb = Framebuffer::new(800, 600, BitDepth::Bgr24).unwrap();

    group.bench_function("set_pixel_800x600", |b| {
        b.iter(|| {
            for y in 0..600 {
                for x in 0..800 {
                    fb.set_pixel(black_box(x), black_box(y), Rgba::BLUE).unwrap();
                }
            }
        });
    });

    group.finish();
}

fn framebuffer_blit_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("framebuffer_blit");

    let mut src = Framebuffer::new(256, 256, BitDepth::Bgr24).unwrap();
    src.clear(Rgba::GREEN);
    let mut dest = Framebuffer::new(800, 600, BitDepth::Bgr24).unwrap();

    group.bench_function("blit_256x256", |b| {
        b.iter(|| {
            src.blit_to(&mut dest, black_box(PixelRect::new(0, 0, 256, 256)), 100, 100)
                .unwrap();
        });
    });

    group.finish();
}

criterion_group!(
    benches,
    framebuffer_clear_benchmark,
    framebuffer_pixel_benchmark,
    framebuffer_blit_benchmark
);
criterion_main!(benches);
