//! Performance benchmarks for number construction, unit conversion, and
//! canonical equality.

use criterion::{Criterion, black_box, criterion_group, criterion_main};
use sass_number::Number;

fn bench_construction(c: &mut Criterion) {
    c.bench_function("construct_unitless", |b| {
        b.iter(|| Number::new(black_box(42.0)))
    });

    c.bench_function("construct_cancelling_ratio", |b| {
        b.iter(|| Number::with_units(black_box(1.0), ["in", "px"], ["px", "s"]))
    });
}

fn bench_convert(c: &mut Criterion) {
    let pixels = Number::with_unit(96.0, "px");
    c.bench_function("convert_px_to_in", |b| {
        b.iter(|| black_box(&pixels).convert(&["in"], &[], None))
    });

    let speed = Number::with_units(96.0, ["px"], ["s"]);
    c.bench_function("convert_compound_signature", |b| {
        b.iter(|| black_box(&speed).convert(&["pt"], &["ms"], None))
    });
}

fn bench_equality(c: &mut Criterion) {
    let inches = Number::with_unit(1.0, "in");
    let pixels = Number::with_unit(96.0, "px");
    c.bench_function("eq_canonical", |b| {
        b.iter(|| black_box(&inches) == black_box(&pixels))
    });
}

criterion_group!(benches, bench_construction, bench_convert, bench_equality);
criterion_main!(benches);
