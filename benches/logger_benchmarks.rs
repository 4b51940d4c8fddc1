//! Criterion benchmarks for channel_logger

use channel_logger::appenders::SharedBuffer;
use channel_logger::config::{ChannelsBuilder, Destination};
use channel_logger::prelude::*;
use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use std::sync::Arc;

fn buffered_logger(registry: &LoggerRegistry, name: &str) -> (Arc<Logger>, SharedBuffer) {
    let buffer = SharedBuffer::new();
    let logger = ChannelsBuilder::new()
        .destination(Destination::Buffer(buffer.clone()))
        .build(registry, name)
        .expect("buffer destination never fails");
    (logger, buffer)
}

// ============================================================================
// Configuration Benchmarks
// ============================================================================

fn bench_configure(c: &mut Criterion) {
    let mut group = c.benchmark_group("configure");
    group.throughput(Throughput::Elements(1));

    let registry = LoggerRegistry::new();
    let buffer = SharedBuffer::new();

    group.bench_function("reconfigure_existing", |b| {
        b.iter(|| {
            let logger = ChannelsBuilder::new()
                .destination(Destination::Buffer(buffer.clone()))
                .build(&registry, black_box("bench"))
                .expect("buffer destination never fails");
            black_box(logger)
        });
    });

    group.finish();
}

// ============================================================================
// Channel Logging Benchmarks
// ============================================================================

fn bench_channel_logging(c: &mut Criterion) {
    let mut group = c.benchmark_group("channel_logging");
    group.throughput(Throughput::Elements(1));

    let registry = LoggerRegistry::new();
    let (logger, buffer) = buffered_logger(&registry, "bench");

    group.bench_function("informational", |b| {
        b.iter(|| {
            logger.info(black_box("Info message"));
            buffer.clear();
        });
    });

    group.bench_function("alert", |b| {
        b.iter(|| {
            logger.error(black_box("Error message"));
            buffer.clear();
        });
    });

    group.bench_function("alert_macro", |b| {
        b.iter(|| {
            channel_logger::error!(logger, "Error code: {}", black_box(500));
            buffer.clear();
        });
    });

    group.finish();
}

fn bench_filtered_out(c: &mut Criterion) {
    let mut group = c.benchmark_group("filtered_out");
    group.throughput(Throughput::Elements(1));

    let registry = LoggerRegistry::new();
    let (logger, _buffer) = buffered_logger(&registry, "quiet");
    logger.set_min_level(LogLevel::Error);

    group.bench_function("debug_below_min_level", |b| {
        b.iter(|| {
            channel_logger::debug!(logger, "never formatted {}", black_box(1));
        });
    });

    group.finish();
}

// ============================================================================
// Template Benchmarks
// ============================================================================

fn bench_template_render(c: &mut Criterion) {
    let mut group = c.benchmark_group("template_render");
    group.throughput(Throughput::Elements(1));

    let record = LogRecord::new("bench", LogLevel::Warning, "Disk usage high").with_location(
        "src/storage.rs",
        42,
        Some("app::storage"),
        Some("check_disk"),
    );
    let format = TimestampFormat::default();
    let informational = Template::informational();
    let alert = Template::alert();

    group.bench_function("informational", |b| {
        b.iter(|| black_box(informational.render(black_box(&record), &format, false)));
    });

    group.bench_function("alert", |b| {
        b.iter(|| black_box(alert.render(black_box(&record), &format, false)));
    });

    group.bench_function("parse_alert", |b| {
        b.iter(|| black_box(Template::parse(black_box(channel_logger::core::ALERT_TEMPLATE))));
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_configure,
    bench_channel_logging,
    bench_filtered_out,
    bench_template_render,
);

criterion_main!(benches);
