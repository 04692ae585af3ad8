// std imports
use std::{hint::black_box, time::Duration};

// third-party imports
use const_str::concat as strcat;
use criterion::{BenchmarkId, Criterion, Throughput, criterion_group};
use regex::Regex;

// local imports
use super::{ND, samples};

criterion_group!(benches, bench);

const GROUP: &str = strcat!(super::GROUP, ND, "matcher");

fn bench(c: &mut Criterion) {
    let mut c = c.benchmark_group(GROUP);
    c.warm_up_time(Duration::from_millis(500));
    c.measurement_time(Duration::from_secs(3));

    const NEEDLE: &str = "Oscar Peterson";

    let regex = Regex::new(NEEDLE).unwrap();
    let substring = bmatch::compile(NEEDLE).unwrap();
    let pattern = bmatch::compile(strcat!("/", NEEDLE, "/")).unwrap();
    let complex = bmatch::compile("(Oscar AND /Pet+erson/) OR (Wilde AND NOT lorem)").unwrap();

    for words in [16, 256] {
        let negative = samples::text(words);
        let positive = samples::text_with_oscar_peterson(words);

        for (kind, input, expected) in [("neg", &negative, false), ("pos", &positive, true)] {
            let param = format!("{}:{}", kind, input.len());
            c.throughput(Throughput::Bytes(input.len() as u64));

            let mut run = |name: &str, routine: &dyn Fn(&str) -> bool| {
                assert_eq!(routine(input), expected);
                c.bench_function(BenchmarkId::new(name, &param), |b| {
                    b.iter(|| routine(black_box(input)))
                });
            };

            run("str:contains", &|text| text.contains(NEEDLE));
            run("regex:is-match", &|text| regex.is_match(text));
            run("bmatch:substring", &|text| substring.matches(text));
            run("bmatch:pattern", &|text| pattern.matches(text));
        }

        let input = samples::text(words);
        let expected = complex.matches(&input);
        c.bench_function(BenchmarkId::new("bmatch:complex", words), |b| {
            b.iter(|| assert_eq!(complex.matches(black_box(&input)), expected))
        });
    }
}
