//! Criterion micro-benchmarks for typed appends into a `TextBuf`.

use std::fmt::Write as _;
use std::hint::black_box;

use criterion::{criterion_group, criterion_main, Criterion, Throughput};
use scribe_bench::{finite_f64, mixed_width_u64, PROFILE_LEN};
use scribe_buf::TextBuf;

/// Benchmark: append integers with separators into a reused buffer,
/// against `write!` into a reused `String`.
fn bench_append_u64(c: &mut Criterion) {
    let values = mixed_width_u64(10);
    let mut group = c.benchmark_group("append_u64");
    group.throughput(Throughput::Elements(PROFILE_LEN as u64));

    group.bench_function("text_buf", |b| {
        let mut buf = TextBuf::new();
        b.iter(|| {
            buf.clear();
            for &v in &values {
                buf.append(v).append(',');
            }
            black_box(buf.len());
        });
    });

    group.bench_function("string_write", |b| {
        let mut s = String::new();
        b.iter(|| {
            s.clear();
            for &v in &values {
                write!(s, "{v},").unwrap();
            }
            black_box(s.len());
        });
    });

    group.finish();
}

/// Benchmark: one log-like record per value (text, int, float, bool).
fn bench_append_record(c: &mut Criterion) {
    let ints = mixed_width_u64(11);
    let floats = finite_f64(12);
    let mut group = c.benchmark_group("append_record");
    group.throughput(Throughput::Elements(PROFILE_LEN as u64));
    group.bench_function("text_buf", |b| {
        let mut buf = TextBuf::with_capacity(1 << 16);
        b.iter(|| {
            buf.clear();
            for (&i, &f) in ints.iter().zip(&floats) {
                buf.append("id=").append(i).append(" v=").append(f);
                buf.append(" ok=").append(i & 1 == 0).append('\n');
            }
            black_box(buf.as_bytes().len());
        });
    });
    group.finish();
}

/// Benchmark: growth from empty, no reuse.
fn bench_grow_from_empty(c: &mut Criterion) {
    c.bench_function("grow_from_empty_64k", |b| {
        b.iter(|| {
            let mut buf = TextBuf::new();
            for _ in 0..(64 * 1024 / 8) {
                buf.append_bytes(b"abcdefgh");
            }
            black_box(buf.capacity());
        });
    });
}

criterion_group!(
    benches,
    bench_append_u64,
    bench_append_record,
    bench_grow_from_empty
);
criterion_main!(benches);
