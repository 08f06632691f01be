//! Benchmarks for document building and rendering.
//!
//! Run with: cargo bench

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use familyos_docs::render::{self, JsonFormat, RenderOptions};
use familyos_docs::{BuiltinGenerator, DocumentGenerator};

/// Benchmark assembling each document model.
fn bench_build(c: &mut Criterion) {
    let mut group = c.benchmark_group("build");

    for generator in BuiltinGenerator::all() {
        group.bench_function(generator.name(), |b| {
            b.iter(|| black_box(generator.build()));
        });
    }

    group.finish();
}

/// Benchmark DOCX packing.
fn bench_docx(c: &mut Criterion) {
    let mut group = c.benchmark_group("docx");

    for generator in BuiltinGenerator::all() {
        let doc = generator.build();
        group.bench_function(generator.name(), |b| {
            b.iter(|| render::to_docx(black_box(&doc)).unwrap());
        });
    }

    group.finish();
}

/// Benchmark preview renderers on the largest document.
fn bench_previews(c: &mut Criterion) {
    let doc = BuiltinGenerator::manual().build();
    let options = RenderOptions::default();

    c.bench_function("markdown", |b| {
        b.iter(|| render::to_markdown(black_box(&doc), &options).unwrap());
    });

    c.bench_function("text", |b| {
        b.iter(|| render::to_text(black_box(&doc), &options).unwrap());
    });

    c.bench_function("json", |b| {
        b.iter(|| render::to_json(black_box(&doc), JsonFormat::Compact).unwrap());
    });
}

criterion_group!(benches, bench_build, bench_docx, bench_previews);
criterion_main!(benches);
