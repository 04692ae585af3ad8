// std imports
use std::{hint::black_box, time::Duration};

// third-party imports
use const_str::concat as strcat;
use criterion::{BenchmarkId, Criterion, criterion_group};

// local imports
use super::ND;

criterion_group!(benches, bench);

const GROUP: &str = strcat!(super::GROUP, ND, "parse");

fn bench(c: &mut Criterion) {
    let mut c = c.benchmark_group(GROUP);
    c.warm_up_time(Duration::from_millis(500));
    c.measurement_time(Duration::from_secs(3));

    let variants = [
        ("simple", "foo"),
        ("medium", "DEBUG OR (TRACE AND NOT SQL)"),
        ("long", r"/foo/ OR /bar/ AND NOT /bill/ OR (/^\/home/ AND (a OR b OR c) AND NOT (d AND e))"),
    ];

    for (name, expr) in variants {
        c.bench_function(BenchmarkId::new("explain", name), |b| {
            b.iter(|| bmatch::explain(black_box(expr)).unwrap())
        });
        c.bench_function(BenchmarkId::new("compile", name), |b| {
            b.iter(|| bmatch::compile(black_box(expr)).unwrap())
        });
    }
}
