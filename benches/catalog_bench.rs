//! Benchmarks for the catalog derivation
//!
//! The filtered list is recomputed on every frame, so the filter+sort pass
//! should stay trivially cheap even for catalogs far larger than the seeds.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use sellerhub::catalog::{CatalogViewModel, SortKey};
use sellerhub::types::Product;

fn synthetic_products(count: u32) -> Vec<Product> {
    (1..=count)
        .map(|i| {
            Product::new(
                i,
                format!("Product {}", i),
                f64::from(i % 500) + 0.99,
                (i % 40) as u8,
                "/img.jpeg",
            )
        })
        .collect()
}

fn bench_filtered_products(c: &mut Criterion) {
    let mut group = c.benchmark_group("filtered_products");

    for count in [10u32, 100, 1000] {
        let mut vm = CatalogViewModel::new(synthetic_products(count));
        vm.set_search_query("product 1");
        vm.set_sort_key(SortKey::Discount);

        group.bench_with_input(BenchmarkId::from_parameter(count), &count, |b, _| {
            b.iter(|| black_box(vm.filtered_products()))
        });
    }

    group.finish();
}

criterion_group!(benches, bench_filtered_products);
criterion_main!(benches);
