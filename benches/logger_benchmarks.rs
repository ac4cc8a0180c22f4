//! Criterion benchmarks for rust_logger_fanout

use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use rust_logger_fanout::appenders::DiscardAppender;
use rust_logger_fanout::core::config::{with_json, with_set_default};
use rust_logger_fanout::core::encoding::RecordEncoder;
use rust_logger_fanout::prelude::*;
use std::io;
use std::sync::Arc;

fn sample_record() -> Record {
    Record::new(LogLevel::Info, "request completed")
        .with_attr(("req_id", "abc-123"))
        .with_attr(("status", 200))
        .with_attr(("latency_ms", 12.5))
}

// ============================================================================
// Logger Creation Benchmarks
// ============================================================================

fn bench_logger_creation(c: &mut Criterion) {
    let mut group = c.benchmark_group("logger_creation");
    group.throughput(Throughput::Elements(1));

    let registry = LoggerRegistry::new();
    let factory = LoggerFactory::with_registry(&registry);

    group.bench_function("resolve_options", |b| {
        b.iter(|| {
            let config = LoggerConfig::resolve([with_json(black_box(false)), with_set_default(false)]);
            black_box(config)
        });
    });

    group.bench_function("build_installing", |b| {
        let config = LoggerConfig::default();
        b.iter(|| {
            let logger = factory.build_with_output(&config, io::sink());
            black_box(logger)
        });
    });

    group.finish();
}

// ============================================================================
// Encoding Benchmarks
// ============================================================================

fn bench_encoding(c: &mut Criterion) {
    let mut group = c.benchmark_group("encoding");
    group.throughput(Throughput::Elements(1));

    let record = sample_record();
    let json = RecordEncoder::new(Encoding::Json);
    let text = RecordEncoder::new(Encoding::Text);

    group.bench_function("json", |b| {
        let mut buf = Vec::with_capacity(256);
        b.iter(|| {
            buf.clear();
            json.encode(black_box(&record), &mut buf).ok();
        });
    });

    group.bench_function("text", |b| {
        let mut buf = Vec::with_capacity(256);
        b.iter(|| {
            buf.clear();
            text.encode(black_box(&record), &mut buf).ok();
        });
    });

    group.finish();
}

// ============================================================================
// Emission Benchmarks
// ============================================================================

fn bench_emission(c: &mut Criterion) {
    let mut group = c.benchmark_group("emission");
    group.throughput(Throughput::Elements(1));

    let sink_logger = Logger::new(
        Arc::new(StreamAppender::new(io::sink(), Encoding::Json)),
        LogLevel::Info,
    )
    .with_source_capture(true);

    group.bench_function("json_to_sink", |b| {
        b.iter(|| sink_logger.info(black_box("written")));
    });

    group.bench_function("filtered_out", |b| {
        b.iter(|| sink_logger.debug(black_box("dropped")));
    });

    let members: Vec<Arc<dyn Appender>> = vec![
        Arc::new(StreamAppender::new(io::sink(), Encoding::Text)),
        Arc::new(DiscardAppender),
    ];
    let fanout = FanoutAppender::new(members);
    let fanout_logger = Logger::new(Arc::new(fanout), LogLevel::Info);

    group.bench_function("fanout_two_members", |b| {
        b.iter(|| fanout_logger.info(black_box("duplicated")));
    });

    group.finish();
}

// ============================================================================
// Attribute Derivation Benchmarks
// ============================================================================

fn bench_derivation(c: &mut Criterion) {
    let mut group = c.benchmark_group("derivation");

    let base = Logger::discard().with_attrs([attr("service", "billing"), attr("region", "eu")]);
    let ctx = Context::new().with_logger(base.clone());

    group.bench_function("with_default_attrs", |b| {
        b.iter(|| black_box(with_default_attrs(&base, [attr("req_id", "abc")])));
    });

    group.bench_function("with_attrs_from_context", |b| {
        b.iter(|| black_box(with_attrs(&ctx, [attr("req_id", "abc"), attr("user", 42)])));
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_logger_creation,
    bench_encoding,
    bench_emission,
    bench_derivation
);

criterion_main!(benches);
