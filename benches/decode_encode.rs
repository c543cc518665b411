use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use inifile::{decode, encode, Document, Value};

fn build_document(sections: usize, keys: usize) -> Document {
    let mut doc = Document::new();
    for s in 0..sections {
        let section = doc.section_mut(format!("Section {s}"));
        for k in 0..keys {
            section.insert(format!("key_{k}"), format!("value {s}.{k}"));
        }
    }
    doc
}

fn benchmark_decode_small(c: &mut Criterion) {
    let text = "\
# Application settings
[server]
host = localhost   ; bind address
port = 8080

[features]
metrics = True
ratio = 0.75
";

    c.bench_function("decode_small", |b| b.iter(|| decode(black_box(text))));
}

fn benchmark_decode(c: &mut Criterion) {
    let mut group = c.benchmark_group("decode");

    for size in [10, 50, 100, 500].iter() {
        let text = encode(&build_document(*size, 20));

        group.bench_with_input(BenchmarkId::from_parameter(size), size, |b, _| {
            b.iter(|| decode(black_box(&text)))
        });
    }
    group.finish();
}

fn benchmark_encode(c: &mut Criterion) {
    let mut group = c.benchmark_group("encode");

    for size in [10, 50, 100, 500].iter() {
        let doc = build_document(*size, 20);

        group.bench_with_input(BenchmarkId::from_parameter(size), size, |b, _| {
            b.iter(|| encode(black_box(&doc)))
        });
    }
    group.finish();
}

fn benchmark_value_conversion(c: &mut Criterion) {
    let int = Value::from("1000000000000");
    let float = Value::from("-1.25e-3");
    let flag = Value::from("False");

    c.bench_function("to_i64", |b| b.iter(|| black_box(&int).to::<i64>()));
    c.bench_function("to_f64", |b| b.iter(|| black_box(&float).to::<f64>()));
    c.bench_function("to_bool", |b| b.iter(|| black_box(&flag).to::<bool>()));
}

criterion_group!(
    benches,
    benchmark_decode_small,
    benchmark_decode,
    benchmark_encode,
    benchmark_value_conversion
);
criterion_main!(benches);
