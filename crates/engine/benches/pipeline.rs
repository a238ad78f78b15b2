// Copyright (c) 2026 compoundql contributors
//
// Licensed under the MIT License or Apache License 2.0
// See LICENSE files for details

//! End-to-end engine benchmarks
//!
//! Measures compilation and suggestion generation over the demo schema.

use criterion::{Criterion, black_box, criterion_group, criterion_main};

use compoundql_catalog::demo::demo_schema;
use compoundql_engine::Engine;

fn bench_compile(c: &mut Criterion) {
    let engine = Engine::with_schema(demo_schema());
    let expressions = [
        ("passthrough", "total > 100 AND status = 'paid'"),
        ("fields", "#total > 100 AND #users.created_at IS NOT NULL"),
        (
            "nested_calls",
            "$round($avg(#total), 2) > 50 AND $month(#created_at) = 2",
        ),
    ];

    for (name, expression) in expressions {
        c.bench_function(&format!("compile/{name}"), |b| {
            b.iter(|| {
                let sql = engine.compile(black_box(expression));
                black_box(sql);
            });
        });
    }
}

fn bench_suggestions(c: &mut Criterion) {
    let engine = Engine::with_schema(demo_schema());
    let positions = [
        ("table", "!us"),
        ("field", "#cre"),
        ("qualified", "!users.cr"),
        ("function", "$mo"),
        ("argument", "$month(#cre"),
    ];

    for (name, text) in positions {
        let cursor = text.chars().count();
        c.bench_function(&format!("suggestions/{name}"), |b| {
            b.iter(|| {
                let suggestions = engine.suggestions(black_box(text), cursor);
                black_box(suggestions);
            });
        });
    }
}

fn bench_hint(c: &mut Criterion) {
    let engine = Engine::with_schema(demo_schema());
    let text = "$round(#total, ";
    let cursor = text.chars().count();

    c.bench_function("hint/resolve", |b| {
        b.iter(|| {
            let hint = engine.function_argument_hint(black_box(text), cursor);
            black_box(hint);
        });
    });
}

criterion_group!(
    name = benches;
    config = Criterion::default().sample_size(50);
    targets = bench_compile, bench_suggestions, bench_hint
);

criterion_main!(benches);
