use algo_text::{levenshtein, soundex};
use criterion::{black_box, criterion_group, criterion_main, Criterion};

const NAMES: [&str; 8] = [
    "Robert",
    "Rupert",
    "Ashcraft",
    "Tymczak",
    "Pfister",
    "Washington",
    "Jackson",
    "Burroughs",
];

fn soundex_bench(c: &mut Criterion) {
    c.bench_function("soundex_names", |b| {
        b.iter(|| {
            for name in NAMES {
                black_box(soundex(black_box(name)).unwrap());
            }
        });
    });
}

fn levenshtein_bench(c: &mut Criterion) {
    let long_a = "the quick brown fox jumps over the lazy dog".repeat(4);
    let long_b = "the quack brown fix jumped over a lazy cat".repeat(4);

    c.bench_function("levenshtein_short", |b| {
        b.iter(|| black_box(levenshtein(black_box("kitten"), black_box("sitting"))));
    });

    c.bench_function("levenshtein_long", |b| {
        b.iter(|| black_box(levenshtein(black_box(&long_a), black_box(&long_b))));
    });
}

criterion_group!(benches, soundex_bench, levenshtein_bench);
criterion_main!(benches);
