use cannonball_engine::{CursorPos, build_prompt, parse_document, round_trip};
use criterion::{Criterion, criterion_group, criterion_main};
mod common;

fn bench_parse(c: &mut Criterion) {
    let mut group = c.benchmark_group("parsing");
    group.sample_size(10);

    let content = common::generate_markdown_content(100);
    group.bench_function("parse_document", |b| {
        b.iter(|| std::hint::black_box(parse_document(std::hint::black_box(&content))));
    });

    let complex = common::generate_complex_markdown(50, 4);
    group.bench_function("parse_document_nested", |b| {
        b.iter(|| std::hint::black_box(parse_document(std::hint::black_box(&complex))));
    });

    group.bench_function("round_trip", |b| {
        b.iter(|| std::hint::black_box(round_trip(std::hint::black_box(&content))));
    });

    group.finish();
}

fn bench_prompt(c: &mut Criterion) {
    let mut group = c.benchmark_group("prompt");
    group.sample_size(10);

    // Cursor on a nested task deep in the document.
    let content = common::generate_markdown_content(100);
    let cursor = CursorPos::new(7 + 17 * 50, 15);
    group.bench_function("build_prompt", |b| {
        b.iter(|| {
            std::hint::black_box(build_prompt(
                std::hint::black_box(&content),
                cursor,
                "break this down",
            ))
        });
    });

    group.finish();
}

criterion_group!(benches, bench_parse, bench_prompt);
criterion_main!(benches);
