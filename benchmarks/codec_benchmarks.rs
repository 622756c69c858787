#![allow(clippy::unwrap_used, clippy::panic, clippy::expect_used)]

/// Codec benchmarks: urlquote vs percent-encoding crate vs url's form_urlencoded
use criterion::{Criterion, Throughput, criterion_group, criterion_main};
use percent_encoding::{NON_ALPHANUMERIC, percent_decode_str, utf8_percent_encode};
use std::hint::black_box;
use urlquote::presets;
use urlquote::{DecoderOptions, EncoderOptions, PercentDecoder, PercentEncoder};

// url crate
use url::form_urlencoded;

const PLAIN_PATH: &str = "/api/v1/resources/item-42/details";
const PATH_WITH_SPACES: &str = "/files/annual report 2024/summary (final).pdf";
const QUERY_VALUE: &str = "name=John Doe&city=New York&note=a+b;c";
const MULTI_BYTE: &str = "/wiki/\u{65e5}\u{672c}\u{8a9e}/\u{30c6}\u{30b9}\u{30c8}";
const ENCODED_MULTI_BYTE: &str = "/wiki/%E6%97%A5%E6%9C%AC%E8%AA%9E/%E3%83%86%E3%82%B9%E3%83%88";
const ENCODED_QUERY: &str = "name=John+Doe&city=New%20York&q=%E2%82%AC100%25";

fn bench_encode_path(c: &mut Criterion) {
    let mut group = c.benchmark_group("encode_path");
    let requoter = presets::PATH_REQUOTER.build();

    for (name, input) in [
        ("plain", PLAIN_PATH),
        ("spaces", PATH_WITH_SPACES),
        ("multi_byte", MULTI_BYTE),
    ] {
        group.throughput(Throughput::Bytes(input.len() as u64));

        group.bench_function(format!("urlquote/{name}"), |b| {
            b.iter(|| requoter.encode(black_box(input)));
        });

        group.bench_function(format!("percent_encoding/{name}"), |b| {
            b.iter(|| utf8_percent_encode(black_box(input), NON_ALPHANUMERIC).to_string());
        });
    }

    group.finish();
}

fn bench_encode_query(c: &mut Criterion) {
    let mut group = c.benchmark_group("encode_query");
    let encoder = PercentEncoder::new(EncoderOptions::new().qs(true));
    group.throughput(Throughput::Bytes(QUERY_VALUE.len() as u64));

    group.bench_function("urlquote", |b| {
        b.iter(|| encoder.encode(black_box(QUERY_VALUE)));
    });

    group.bench_function("form_urlencoded", |b| {
        b.iter(|| {
            form_urlencoded::byte_serialize(black_box(QUERY_VALUE).as_bytes()).collect::<String>()
        });
    });

    group.finish();
}

fn bench_requote_existing_escapes(c: &mut Criterion) {
    let mut group = c.benchmark_group("requote");
    let requoter = presets::REQUOTER.build();
    let quoter = presets::QUOTER.build();

    group.bench_function("requote", |b| {
        b.iter(|| requoter.encode(black_box(ENCODED_MULTI_BYTE)));
    });

    group.bench_function("quote", |b| {
        b.iter(|| quoter.encode(black_box(ENCODED_MULTI_BYTE)));
    });

    group.finish();
}

fn bench_decode(c: &mut Criterion) {
    let mut group = c.benchmark_group("decode");
    let decoder = PercentDecoder::default();
    let path_decoder = presets::PATH_SAFE_UNQUOTER.build();

    group.throughput(Throughput::Bytes(ENCODED_MULTI_BYTE.len() as u64));

    group.bench_function("urlquote", |b| {
        b.iter(|| decoder.decode(black_box(ENCODED_MULTI_BYTE)));
    });

    group.bench_function("urlquote_path_safe", |b| {
        b.iter(|| path_decoder.decode(black_box(ENCODED_MULTI_BYTE)));
    });

    group.bench_function("percent_encoding", |b| {
        b.iter(|| percent_decode_str(black_box(ENCODED_MULTI_BYTE)).decode_utf8_lossy());
    });

    group.bench_function("urlquote_fast_path", |b| {
        b.iter(|| decoder.decode(black_box(PLAIN_PATH)));
    });

    group.finish();
}

fn bench_decode_query(c: &mut Criterion) {
    let mut group = c.benchmark_group("decode_query");
    let decoder = PercentDecoder::new(DecoderOptions::new().qs(true));

    group.bench_function("urlquote", |b| {
        b.iter(|| decoder.decode(black_box(ENCODED_QUERY)));
    });

    group.bench_function("form_urlencoded", |b| {
        b.iter(|| form_urlencoded::parse(black_box(ENCODED_QUERY).as_bytes()).count());
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_encode_path,
    bench_encode_query,
    bench_requote_existing_escapes,
    bench_decode,
    bench_decode_query
);

criterion_main!(benches);
