use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use std::hint::black_box;
use taptext::parser::{extract_urls, parse_text};

fn make_feed_text(reps: usize) -> String {
    let base = "Doors at 9pm! Check out https://ragestate.com/events/warehouse-rave with \
@djshadow and @mcriot, tickets going fast #RAGE2025 #warehouse \
(details: https://example.com/page(2)).";
    let mut text = String::new();
    for _ in 0..reps {
        text.push_str(base);
        text.push(' ');
    }
    text
}

fn bench_parse_text(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse_text");
    for &reps in &[1usize, 16, 256] {
        let text = make_feed_text(reps);
        group.throughput(Throughput::Bytes(text.len() as u64));
        group.bench_with_input(BenchmarkId::from_parameter(reps), &text, |b, text| {
            b.iter(|| parse_text(black_box(text)))
        });
    }
    group.finish();
}

fn bench_plain_text(c: &mut Criterion) {
    // No matches at all: the scan still walks the whole input.
    let text = "lorem ipsum dolor sit amet consectetur adipiscing elit ".repeat(64);
    let mut group = c.benchmark_group("parse_text_plain");
    group.throughput(Throughput::Bytes(text.len() as u64));
    group.bench_function("no_matches", |b| b.iter(|| parse_text(black_box(&text))));
    group.finish();
}

fn bench_extract_urls(c: &mut Criterion) {
    let text = make_feed_text(64);
    let mut group = c.benchmark_group("extract_urls");
    group.throughput(Throughput::Bytes(text.len() as u64));
    group.bench_function("feed64", |b| b.iter(|| extract_urls(black_box(&text))));
    group.finish();
}

criterion_group!(benches, bench_parse_text, bench_plain_text, bench_extract_urls);
criterion_main!(benches);
