use criterion::{black_box, criterion_group, criterion_main, Criterion};
use yamlet::{parse_str_with_options, to_string_with_options, DocMap, Options, Value};

fn quiet() -> Options {
    Options::new().with_logging(false)
}

/// A representative config: a few dozen sections of mixed scalars plus a
/// list or two per section.
fn sample_document(sections: usize) -> String {
    let mut text = String::new();
    for i in 0..sections {
        text.push_str(&format!("section{i}:\n"));
        text.push_str(&format!("    name: 'service-{i}'\n"));
        text.push_str(&format!("    port: {}\n", 8000 + i));
        text.push_str("    enabled: true\n");
        text.push_str("    ratio: 0.75\n");
        text.push_str("    limit: Infinity\n");
        text.push_str(&format!("    id: BigInt(9000000000000000{i})\n"));
        text.push_str(&format!("tags{i}:\n"));
        text.push_str("    - primary\n");
        text.push_str("    - 42\n");
        text.push_str("    - null\n");
    }
    text
}

fn sample_tree(sections: usize) -> DocMap {
    parse_str_with_options(&sample_document(sections), &quiet()).tree
}

fn bench_parse(c: &mut Criterion) {
    let options = quiet();
    let small = sample_document(5);
    let large = sample_document(100);

    c.bench_function("parse_small", |b| {
        b.iter(|| parse_str_with_options(black_box(&small), &options));
    });

    c.bench_function("parse_large", |b| {
        b.iter(|| parse_str_with_options(black_box(&large), &options));
    });
}

fn bench_render(c: &mut Criterion) {
    let options = quiet();
    let small = sample_tree(5);
    let large = sample_tree(100);

    c.bench_function("render_small", |b| {
        b.iter(|| to_string_with_options(black_box(&small), &options));
    });

    c.bench_function("render_large", |b| {
        b.iter(|| to_string_with_options(black_box(&large), &options));
    });
}

fn bench_round_trip(c: &mut Criterion) {
    let options = quiet();
    let source = sample_document(20);

    c.bench_function("round_trip", |b| {
        b.iter(|| {
            let parsed = parse_str_with_options(black_box(&source), &options);
            to_string_with_options(&parsed.tree, &options)
        });
    });
}

fn bench_scalar_decode(c: &mut Criterion) {
    let tokens = [
        "null",
        "undefined",
        "true",
        "Infinity",
        "3.14159",
        "'a quoted string'",
        "BigInt(123456789012345678901234567890)",
    ];

    c.bench_function("scalar_decode", |b| {
        b.iter(|| {
            for token in &tokens {
                let _ = yamlet::scalar::decode(black_box(token));
            }
        });
    });
}

fn deep_tree(depth: usize) -> DocMap {
    let mut value = Value::Number(1.0);
    for i in (0..depth).rev() {
        let mut map = DocMap::new();
        map.insert(format!("level{i}"), value);
        value = Value::Map(map);
    }
    match value {
        Value::Map(map) => map,
        _ => unreachable!(),
    }
}

fn bench_deep_nesting(c: &mut Criterion) {
    let options = quiet();
    let tree = deep_tree(32);
    let text = to_string_with_options(&tree, &options);

    c.bench_function("parse_deep", |b| {
        b.iter(|| parse_str_with_options(black_box(&text), &options));
    });
}

criterion_group!(
    benches,
    bench_parse,
    bench_render,
    bench_round_trip,
    bench_scalar_decode,
    bench_deep_nesting
);
criterion_main!(benches);
