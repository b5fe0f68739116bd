use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use ftl_core::{OutputFormat, ParseConfig, html_to_text, parse, parse_with_config, render, validate};

fn bench_parse(c: &mut Criterion) {
    let sectioned = std::fs::read_to_string("../../tests/fixtures/sectioned.md").unwrap();
    let rendered = std::fs::read_to_string("../../tests/fixtures/rendered.md").unwrap();
    let large = sectioned.repeat(200);
    let config = ParseConfig::rendered();

    let mut group = c.benchmark_group("parse");

    group.bench_with_input(BenchmarkId::new("sectioned", "1KB"), &sectioned, |b, text| {
        b.iter(|| parse(black_box(text)))
    });

    group.bench_with_input(BenchmarkId::new("sectioned", "200KB"), &large, |b, text| {
        b.iter(|| parse(black_box(text)))
    });

    group.bench_with_input(BenchmarkId::new("rendered", "1KB"), &rendered, |b, text| {
        b.iter(|| parse_with_config(black_box(text), &config))
    });

    group.finish();
}

fn bench_validate(c: &mut Criterion) {
    let doc = parse(&std::fs::read_to_string("../../tests/fixtures/sectioned.md").unwrap());

    c.bench_function("validate", |b| b.iter(|| validate(black_box(&doc))));
}

fn bench_render(c: &mut Criterion) {
    let doc = parse(&std::fs::read_to_string("../../tests/fixtures/sectioned.md").unwrap());

    let mut group = c.benchmark_group("render");
    for format in [OutputFormat::Markdown, OutputFormat::Json, OutputFormat::Yaml] {
        group.bench_with_input(BenchmarkId::from_parameter(format), &doc, |b, doc| {
            b.iter(|| render(black_box(doc), format))
        });
    }
    group.finish();
}

fn bench_html_to_text(c: &mut Criterion) {
    let html = std::fs::read_to_string("../../tests/fixtures/page.html").unwrap();

    c.bench_function("html_to_text", |b| b.iter(|| html_to_text(black_box(&html))));
}

criterion_group!(benches, bench_parse, bench_validate, bench_render, bench_html_to_text);
criterion_main!(benches);
