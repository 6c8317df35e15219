//! Matching benchmarks

use checkpoint_core::similarity::{
    compare_similarity, find_all_matches, find_most_similar, find_top_matches,
    optimized_levenshtein, quick_search, DEFAULT_QUICK_MIN,
};
use checkpoint_domain::CaseRecord;
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

const FIRST_NAMES: &[&str] = &[
    "Juan", "María", "José", "Guadalupe", "Luis", "Rosa", "Pedro", "Ana", "Jesús", "Carmen",
];
const SURNAMES: &[&str] = &[
    "Pérez", "López", "García", "Hernández", "Martínez", "Gómez", "Díaz", "Ruiz", "Sánchez",
    "Ramírez", "Flores", "Cruz",
];

fn generate_history(count: usize) -> Vec<CaseRecord> {
    (0..count)
        .map(|i| {
            let name = format!(
                "{} {} {}",
                FIRST_NAMES[i % FIRST_NAMES.len()],
                SURNAMES[i % SURNAMES.len()],
                SURNAMES[(i / 7) % SURNAMES.len()]
            );
            CaseRecord::new(format!("CP-{:06}", i), name)
        })
        .collect()
}

fn bench_levenshtein(c: &mut Criterion) {
    let mut group = c.benchmark_group("levenshtein");

    group.bench_function("short_words", |b| {
        b.iter(|| optimized_levenshtein(black_box("hernandez"), black_box("fernandes")))
    });

    group.bench_function("full_names", |b| {
        b.iter(|| {
            optimized_levenshtein(
                black_box("jose luis de la garza martinez"),
                black_box("jose luis garza martines"),
            )
        })
    });

    group.bench_function("length_gap_shortcut", |b| {
        b.iter(|| {
            optimized_levenshtein(black_box("ana"), black_box("maria guadalupe hernandez"))
        })
    });

    group.finish();
}

fn bench_compare(c: &mut Criterion) {
    c.bench_function("compare_similarity", |b| {
        b.iter(|| compare_similarity(black_box("Juan Pérez López"), black_box("juan peres")))
    });
}

fn bench_history_scan(c: &mut Criterion) {
    let mut group = c.benchmark_group("history_scan");

    for size in [100, 1_000, 10_000] {
        let history = generate_history(size);

        group.bench_with_input(BenchmarkId::new("most_similar", size), &history, |b, h| {
            b.iter(|| find_most_similar(h, "name", black_box("maria garcia lopez")))
        });

        group.bench_with_input(BenchmarkId::new("all_matches", size), &history, |b, h| {
            b.iter(|| find_all_matches(h, "name", black_box("maria garcia lopez"), 65.0, 10))
        });

        group.bench_with_input(BenchmarkId::new("top_matches", size), &history, |b, h| {
            b.iter(|| find_top_matches(h, "name", black_box("maria garcia lopez"), 65.0, 10))
        });

        group.bench_with_input(BenchmarkId::new("quick_search", size), &history, |b, h| {
            b.iter(|| quick_search(h, "name", black_box("rosa cruz"), DEFAULT_QUICK_MIN))
        });
    }

    group.finish();
}

criterion_group!(benches, bench_levenshtein, bench_compare, bench_history_scan);
criterion_main!(benches);
