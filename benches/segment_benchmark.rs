//! Benchmarks for resume analysis performance.
//!
//! Run with: cargo bench
//!
//! These benchmarks run the text heuristics over synthetic resume text.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use resume_analyzer::{grammar, sections};

/// Creates synthetic resume text with the given number of experience bullets.
fn create_resume_text(bullets: usize) -> String {
    let mut text = String::new();

    text.push_str("Jane Doe\njane@example.com\n\n");
    text.push_str("Summary\nBackend engineer working on data platforms.\n");

    text.push_str("EXPERIENCE:\n");
    for i in 0..bullets {
        text.push_str(&format!(
            "\u{2022} Designed and operated service {} handling billing events\n",
            i + 1
        ));
    }

    text.push_str("EDUCATION:\nBSc Computer Science\n");
    text.push_str("Skills:\n- Rust\n- SQL\n- Kafka\n");

    text
}

/// Benchmark section segmentation at various sizes.
fn bench_segmentation(c: &mut Criterion) {
    let mut group = c.benchmark_group("segmentation");

    for bullets in [5, 50, 500].iter() {
        let text = create_resume_text(*bullets);

        group.bench_function(format!("{}_bullets", bullets), |b| {
            b.iter(|| sections::segment(black_box(&text)));
        });
    }

    group.finish();
}

/// Benchmark the grammar heuristics.
fn bench_grammar(c: &mut Criterion) {
    let text = create_resume_text(100);

    c.bench_function("grammar_check", |b| {
        b.iter(|| grammar::check_grammar(black_box(&text)));
    });
}

criterion_group!(benches, bench_segmentation, bench_grammar);
criterion_main!(benches);
