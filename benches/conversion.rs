use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use strictconv::{
    equal, format_bounded, parse_bool, parse_double, parse_int32, parse_uint64, Kind, Radix, Value,
};

fn benchmark_parse_int32(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse_int32");

    for (name, text, base) in [
        ("decimal", "-2147483648", 10),
        ("hex_auto", "0x7fffffff", 0),
        ("octal_auto", "017777777777", 0),
        ("trailing", "12345abc", 10),
    ] {
        group.bench_with_input(BenchmarkId::from_parameter(name), &text, |b, text| {
            let mut out = 0i32;
            b.iter(|| parse_int32(black_box(Some(*text)), &mut out, base))
        });
    }
    group.finish();
}

fn benchmark_parse_uint64(c: &mut Criterion) {
    c.bench_function("parse_uint64_max", |b| {
        let mut out = 0u64;
        b.iter(|| parse_uint64(black_box(Some("18446744073709551615")), &mut out, 10))
    });
}

fn benchmark_parse_double(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse_double");

    for (name, text) in [
        ("short", "0.5"),
        ("exponent", "6.02214076e23"),
        ("hex", "0x1.921fb54442d18p1"),
        ("infinity", "-Infinity"),
    ] {
        group.bench_with_input(BenchmarkId::from_parameter(name), &text, |b, text| {
            let mut out = 0f64;
            b.iter(|| parse_double(black_box(Some(*text)), &mut out))
        });
    }
    group.finish();
}

fn benchmark_literals(c: &mut Criterion) {
    c.bench_function("parse_bool", |b| b.iter(|| parse_bool(black_box(Some("true")))));
    c.bench_function("equal", |b| {
        b.iter(|| equal(black_box(Some("node.latency")), black_box(Some("node.latency"))))
    });
}

fn benchmark_format_bounded(c: &mut Criterion) {
    let mut group = c.benchmark_group("format_bounded");

    for capacity in [8usize, 32, 128].iter() {
        group.bench_with_input(
            BenchmarkId::from_parameter(capacity),
            capacity,
            |b, &capacity| {
                let mut buf = vec![0u8; capacity];
                b.iter(|| {
                    format_bounded!(
                        &mut buf,
                        "{}:{}:{:.3}",
                        black_box("alsa_output.pci-0000_00_1f.3"),
                        black_box(48000),
                        black_box(0.125)
                    )
                })
            },
        );
    }
    group.finish();
}

fn benchmark_value_parse(c: &mut Criterion) {
    c.bench_function("value_parse_uint32", |b| {
        b.iter(|| Value::parse(Kind::Uint32, black_box(Some("48000")), Radix::AUTO))
    });
}

criterion_group!(
    benches,
    benchmark_parse_int32,
    benchmark_parse_uint64,
    benchmark_parse_double,
    benchmark_literals,
    benchmark_format_bounded,
    benchmark_value_parse
);
criterion_main!(benches);
