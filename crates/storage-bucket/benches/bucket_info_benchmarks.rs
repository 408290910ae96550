//! Benchmarks for BucketInfo rendering and comparison

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use std::fmt::Write;
use storage_bucket::{BucketInfo, Timestamp};
use storage_xml::{XmlOutputStream, XmlSerializable};

fn sample() -> BucketInfo {
    BucketInfo::with_meta(0xdeadbeef, 1_000, 4_000_000, 1_200, 5_000_000)
        .with_ready(true)
        .with_active(true)
        .with_last_modified(Timestamp::new(1_700_000_000_000_000))
}

fn bench_print(c: &mut Criterion) {
    let info = sample();
    let mut out = String::with_capacity(256);

    c.bench_function("bucket_info_print", |b| {
        b.iter(|| {
            out.clear();
            write!(out, "{}", black_box(&info)).unwrap();
            black_box(out.len())
        })
    });
}

fn bench_print_xml(c: &mut Criterion) {
    let info = sample();

    c.bench_function("bucket_info_print_xml", |b| {
        b.iter(|| {
            let mut xos = XmlOutputStream::new(Vec::with_capacity(256));
            xos.open_tag("bucketinfo").unwrap();
            black_box(&info).print_xml(&mut xos).unwrap();
            xos.close_tag().unwrap();
            black_box(xos.finish().unwrap())
        })
    });
}

fn bench_equality(c: &mut Criterion) {
    let a = sample();
    let b = sample().with_last_modified(Timestamp::new(1));

    c.bench_function("bucket_info_eq", |bench| {
        bench.iter(|| black_box(&a) == black_box(&b))
    });
}

criterion_group!(benches, bench_print, bench_print_xml, bench_equality);
criterion_main!(benches);
