use criterion::{black_box, criterion_group, criterion_main, Criterion};
use tonality::dynamic::{ColorScheme, MaterialRole, Variant};
use tonality::opt::SchemeOptions;
use tonality::Hct;

pub fn run_benchmarks(c: &mut Criterion) {
    let mut group = c.benchmark_group("hct");
    group.bench_function("from-argb", |b| {
        b.iter(|| Hct::from_argb(black_box(0xff47_5d92)))
    });
    group.bench_function("solve", |b| {
        b.iter(|| Hct::new(black_box(282.8), black_box(87.2), black_box(32.3)))
    });
    group.finish();

    let mut group = c.benchmark_group("scheme");
    for variant in [Variant::TonalSpot, Variant::Fidelity] {
        let options = SchemeOptions::builder()
            .source(0xff47_5d92)
            .variant(variant)
            .build();

        group.bench_function(format!("build-{}", variant), |b| {
            b.iter(|| black_box(&options).to_scheme())
        });

        let scheme = options.to_scheme();
        group.bench_function(format!("resolve-{}", variant), |b| {
            b.iter(|| ColorScheme::from(black_box(&scheme)))
        });
        group.bench_function(format!("all-roles-{}", variant), |b| {
            b.iter(|| {
                MaterialRole::ALL
                    .iter()
                    .map(|role| scheme.argb(*role))
                    .fold(0, |acc: u32, argb| acc ^ argb)
            })
        });
    }
    group.finish();
}

criterion_group!(benches, run_benchmarks);
criterion_main!(benches);
