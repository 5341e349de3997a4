use criterion::{black_box, criterion_group, criterion_main, Criterion};
use tonality::quantize::{quantize, quantize_wu};
use tonality::{Float, Hct};

/// Create a synthetic 128x128 image with smooth gradients and a little noise.
fn gradient_image() -> Vec<u32> {
    let mut pixels = Vec::with_capacity(128 * 128);
    for y in 0..128_u32 {
        for x in 0..128_u32 {
            let hue = (x as Float) * 360.0 / 128.0;
            let tone = 20.0 + (y as Float) * 60.0 / 128.0;
            let argb = Hct::new(hue, 48.0, tone).argb();
            pixels.push(argb ^ ((x % 3) << 8) ^ (y % 5));
        }
    }
    pixels
}

pub fn run_benchmarks(c: &mut Criterion) {
    let pixels = gradient_image();

    let mut group = c.benchmark_group("quantize");
    group.sample_size(20);
    group.bench_function("wu-128", |b| b.iter(|| quantize_wu(black_box(&pixels), 128)));
    group.bench_function("celebi-16", |b| b.iter(|| quantize(black_box(&pixels), 16)));
    group.bench_function("celebi-128", |b| b.iter(|| quantize(black_box(&pixels), 128)));
    group.finish();
}

criterion_group!(benches, run_benchmarks);
criterion_main!(benches);
