//! Screen model benchmarks

use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use hawser_terminal::Terminal;

fn bench_scrolling_output(c: &mut Criterion) {
    let mut group = c.benchmark_group("screen");

    let output = "line of terminal output that wraps nowhere\r\n".repeat(500);
    group.throughput(Throughput::Bytes(output.len() as u64));

    group.bench_function("scrolling_output", |b| {
        b.iter(|| {
            let mut term = Terminal::new(80, 24, 10_000);
            term.feed(black_box(output.as_bytes()));
            black_box(term.snapshot().cursor)
        })
    });

    group.finish();
}

fn bench_colored_listing(c: &mut Criterion) {
    let mut group = c.benchmark_group("screen");

    let listing = "-rw-r--r-- 1 user user 4096 \x1b[1;34mREADME.md\x1b[0m\r\n".repeat(200);
    group.throughput(Throughput::Bytes(listing.len() as u64));

    group.bench_function("colored_listing", |b| {
        b.iter(|| {
            let mut term = Terminal::new(80, 24, 10_000);
            term.feed(black_box(listing.as_bytes()));
            black_box(term.snapshot().cursor)
        })
    });

    group.finish();
}

fn bench_resize_storm(c: &mut Criterion) {
    let mut group = c.benchmark_group("screen");

    let output = "text before the window gets dragged around\r\n".repeat(100);

    group.bench_function("resize_storm", |b| {
        b.iter(|| {
            let mut term = Terminal::new(80, 24, 10_000);
            term.feed(black_box(output.as_bytes()));
            for cols in [70, 60, 90, 120, 80] {
                term.resize(cols, 24);
            }
            black_box(term.snapshot().cursor)
        })
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_scrolling_output,
    bench_colored_listing,
    bench_resize_storm
);
criterion_main!(benches);
