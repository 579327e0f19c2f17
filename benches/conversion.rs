use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use serde::Serialize;
use serde_canonical::{flatten, to_canonical_map, unflatten};

#[derive(Serialize, Clone)]
struct Metadata {
    created: String,
    updated: String,
    version: u32,
}

#[derive(Serialize, Clone)]
struct Product {
    sku: String,
    name: String,
    price: f64,
    quantity: u32,
    metadata: Metadata,
    tags: Vec<String>,
}

fn products(size: usize) -> Vec<Product> {
    (0..size)
        .map(|i| Product {
            sku: format!("SKU-{:04}", i),
            name: format!("Product {}", i),
            price: 9.99 + i as f64,
            quantity: i as u32,
            metadata: Metadata {
                created: "2024-01-01".to_string(),
                updated: "2024-01-02".to_string(),
                version: 1,
            },
            tags: vec!["sale".to_string(), "new".to_string()],
        })
        .collect()
}

fn benchmark_to_canonical_map(c: &mut Criterion) {
    let mut group = c.benchmark_group("to_canonical_map");

    for size in [10, 100, 500].iter() {
        let input = products(*size);
        group.bench_with_input(BenchmarkId::from_parameter(size), &input, |b, input| {
            b.iter(|| to_canonical_map(black_box(input)))
        });
    }

    group.finish();
}

fn benchmark_flatten(c: &mut Criterion) {
    let mut group = c.benchmark_group("flatten");

    for size in [10, 100, 500].iter() {
        let tree = to_canonical_map(&products(*size));
        group.bench_with_input(BenchmarkId::from_parameter(size), &tree, |b, tree| {
            b.iter(|| flatten(black_box(tree)))
        });
    }

    group.finish();
}

fn benchmark_unflatten(c: &mut Criterion) {
    let mut group = c.benchmark_group("unflatten");

    for size in [10, 100, 500].iter() {
        let flat = flatten(&to_canonical_map(&products(*size)));
        group.bench_with_input(BenchmarkId::from_parameter(size), &flat, |b, flat| {
            b.iter(|| unflatten(black_box(flat)))
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    benchmark_to_canonical_map,
    benchmark_flatten,
    benchmark_unflatten
);
criterion_main!(benches);
