//! Benchmarks for compiled template rendering.

use std::hint::black_box;

use criterion::{Criterion, criterion_group, criterion_main};
use routegen_core::{PathValue, RoutePattern};
use routegen_helpers::{PathTemplate, join_path};

fn bench_render(c: &mut Criterion) {
    let deep_literal = PathTemplate::compile(
        &RoutePattern::builder()
            .literal("api")
            .literal("v1")
            .literal("orgs")
            .literal("acme")
            .literal("repos")
            .literal("site")
            .literal("status")
            .build(),
    );
    let no_args: [PathValue; 0] = [];
    c.bench_function("render_literal_only", |b| {
        b.iter(|| deep_literal.render(black_box(&no_args)).unwrap());
    });

    let two_params = PathTemplate::compile(
        &RoutePattern::builder()
            .literal("orgs")
            .param("org")
            .literal("repos")
            .param("repo")
            .build(),
    );
    let args = [PathValue::from("acme"), PathValue::from("site")];
    c.bench_function("render_two_params", |b| {
        b.iter(|| two_params.render(black_box(&args)).unwrap());
    });

    let catch_all =
        PathTemplate::compile(&RoutePattern::builder().literal("docs").catch_all("path"));
    let rest = [PathValue::rest(["guides", "routing", "helpers"])];
    c.bench_function("render_catch_all", |b| {
        b.iter(|| catch_all.render(black_box(&rest)).unwrap());
    });

    c.bench_function("join_path_dynamic_fallback", |b| {
        b.iter(|| join_path(black_box(["orgs", "acme", "repos", "site"])));
    });
}

criterion_group!(benches, bench_render);
criterion_main!(benches);
