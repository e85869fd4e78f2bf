use std::hint::black_box;

use cellconv::{
    Int32Converter, LittleEndian, SingleConverter, StringConverter, ValueConverter,
    Vector3Converter,
};
use criterion::{Criterion, criterion_group, criterion_main};

fn parse_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse");

    let int32 = Int32Converter;
    group.bench_function("int32_decimal", |b| {
        b.iter(|| int32.parse(black_box("-123456")))
    });
    group.bench_function("int32_hex", |b| b.iter(|| int32.parse(black_box("0x7FFF00"))));

    let single = SingleConverter;
    group.bench_function("single", |b| b.iter(|| single.parse(black_box("3.14159"))));

    let vector = Vector3Converter::new();
    group.bench_function("vector3", |b| {
        b.iter(|| vector.parse(black_box("1.5,-2.25,1e3")))
    });

    group.finish();
}

fn binary_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("binary");

    let vector = Vector3Converter::new();
    let value = vector.parse("1.5,-2.25,1e3").unwrap();
    group.bench_function("vector3_write", |b| {
        let mut out = Vec::with_capacity(12);
        b.iter(|| {
            out.clear();
            vector.write_to::<LittleEndian>(black_box(&value), &mut out);
        })
    });

    let string = StringConverter;
    let text = Some("x".repeat(300));
    let mut encoded = Vec::new();
    string.write_to::<LittleEndian>(&text, &mut encoded);
    group.bench_function("string_read", |b| {
        b.iter(|| string.read_from::<LittleEndian>(&mut black_box(encoded.as_slice())))
    });

    group.finish();
}

criterion_group!(benches, parse_benchmark, binary_benchmark);
criterion_main!(benches);
