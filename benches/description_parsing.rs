// SPDX-License-Identifier: MPL-2.0
//! Benchmarks for description parsing.
//!
//! Measures the performance of:
//! - Parsing descriptions of increasing size
//! - Cached lookups through `DescriptionCache`

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use iced_folio::application::description_cache::DescriptionCache;
use iced_folio::domain::description::parse;
use std::hint::black_box;

/// Builds a description with `sections` paragraph + section pairs.
fn sample_description(sections: usize) -> String {
    let mut text = String::new();
    for i in 0..sections {
        text.push_str(&format!(
            "Paragraph {i} explains the project.\nIt spans two lines.\n\n"
        ));
        text.push_str(&format!("Section {i}\n• first item\n• second item\n• third item\n\n"));
    }
    text
}

fn bench_parse(c: &mut Criterion) {
    let mut group = c.benchmark_group("description_parsing");

    for sections in [1, 10, 100] {
        let description = sample_description(sections);
        group.bench_with_input(
            BenchmarkId::new("parse", sections),
            &description,
            |b, description| b.iter(|| black_box(parse(black_box(description)))),
        );
    }

    group.finish();
}

fn bench_cached(c: &mut Criterion) {
    let mut group = c.benchmark_group("description_parsing");

    let description = sample_description(100);
    let mut cache = DescriptionCache::default();
    black_box(cache.blocks(&description));

    group.bench_function("cached_lookup", |b| {
        b.iter(|| black_box(cache.blocks(black_box(&description))));
    });

    group.finish();
}

criterion_group!(benches, bench_parse, bench_cached);
criterion_main!(benches);
