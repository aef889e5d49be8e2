use pwforge::generator::{generate_password, GenerationConfig};

use criterion::{black_box, criterion_group, criterion_main, Criterion};

fn criterion_benchmark_generate(c: &mut Criterion) {
    let config = GenerationConfig::default();
    let mut rng = rand::thread_rng();

    c.bench_function("generate_password 16 chars, all classes", |b| {
        b.iter(|| generate_password(black_box(&config), &mut rng))
    });

    let long = GenerationConfig {
        length: 4096,
        ..GenerationConfig::default()
    };
    c.bench_function("generate_password 4096 chars, all classes", |b| {
        b.iter(|| generate_password(black_box(&long), &mut rng))
    });
}

criterion_group!(benches, criterion_benchmark_generate);
criterion_main!(benches);
