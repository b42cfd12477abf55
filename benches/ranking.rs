//! Ranking benchmarks.
//!
//! Run with: cargo bench
//!
//! Every keystroke re-ranks the whole database, so a search has to stay far
//! below a frame.

use std::path::Path;

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use moji::core::{rank, ranker, search, Database};

fn bundled() -> Database {
    Database::load(&Path::new(env!("CARGO_MANIFEST_DIR")).join("data/emojis.txt"))
}

/// Benchmark full picker searches against the bundled database.
fn bench_search(c: &mut Criterion) {
    let db = bundled();
    let mut group = c.benchmark_group("search");

    let queries = [
        ("empty", ""),
        ("single_term", "smile"),
        ("multi_term", "happy face smile"),
        ("no_match", "zzzz"),
        ("noisy", "H3ll0, W0rld!! heart"),
    ];

    for (name, query) in queries {
        group.bench_with_input(BenchmarkId::from_parameter(name), &query, |b, query| {
            b.iter(|| black_box(search(&db, black_box(query))))
        });
    }

    group.finish();
}

/// Benchmark unbounded ranking, without the ten-slot padding.
fn bench_rank_all(c: &mut Criterion) {
    let db = bundled();

    c.bench_function("rank_unbounded", |b| {
        b.iter(|| black_box(rank(&db, black_box("happy love smile"), usize::MAX)))
    });
}

fn bench_normalize(c: &mut Criterion) {
    c.bench_function("normalize_query", |b| {
        b.iter(|| black_box(ranker::normalize_query(black_box("Grinning Face, with BIG eyes!"))))
    });
}

criterion_group!(benches, bench_search, bench_rank_all, bench_normalize);
criterion_main!(benches);
