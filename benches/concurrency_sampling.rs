/// Concurrency sampling benchmarks
///
/// Measures extraction and sampling over synthetic pabot logs with many
/// overlapping tests, comparing the difference-array sampler with a direct
/// scan of every interval at every grid point.
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use std::time::Duration;

use chrono::TimeDelta;
use pabotscope::concurrency;
use pabotscope::extractor::extract;
use pabotscope::timeline::Timeline;

/// Build a log where `tests` tests run on 8 workers, each a few seconds long
fn synthetic_log(tests: usize) -> Vec<String> {
    let mut lines = Vec::with_capacity(tests * 3);
    for i in 0..tests {
        let start = (i / 8) * 3 + i % 3;
        let duration = 2 + i % 7;
        let end = start + duration;
        lines.push(format!(
            "2024-01-01 {:02}:{:02}:{:02}.000000 [PID:{}] EXECUTING Suite.Test {}",
            start / 3600,
            (start / 60) % 60,
            start % 60,
            i % 8,
            i
        ));
        lines.push("Robot Framework output noise".to_string());
        lines.push(format!(
            "2024-01-01 {:02}:{:02}:{:02}.000000 [PID:{}] PASSED Suite.Test {} in {}.0 seconds",
            end / 3600,
            (end / 60) % 60,
            end % 60,
            i % 8,
            i,
            duration
        ));
    }
    lines
}

fn direct_scan(timeline: &Timeline) -> Vec<usize> {
    let (Some(first), Some(last)) = (timeline.first(), timeline.last()) else {
        return Vec::new();
    };
    let mut counts = Vec::new();
    let mut cursor = first;
    while cursor <= last {
        counts.push(timeline.active_at(cursor));
        cursor += TimeDelta::seconds(1);
    }
    counts
}

/// Benchmark: Log line extraction
fn bench_extract(c: &mut Criterion) {
    let mut group = c.benchmark_group("extract");
    group.measurement_time(Duration::from_secs(5));

    for tests in [100, 1000, 5000].iter() {
        let lines = synthetic_log(*tests);
        group.throughput(Throughput::Elements(lines.len() as u64));
        group.bench_with_input(BenchmarkId::from_parameter(tests), &lines, |b, lines| {
            b.iter(|| black_box(extract(lines).unwrap()));
        });
    }

    group.finish();
}

/// Benchmark: Difference-array sampler vs direct scan
fn bench_sampling(c: &mut Criterion) {
    let mut group = c.benchmark_group("sampling");
    group.measurement_time(Duration::from_secs(5));

    for tests in [100, 1000, 5000].iter() {
        let events = extract(synthetic_log(*tests)).unwrap();
        let timeline = Timeline::build(&events);

        group.bench_with_input(
            BenchmarkId::new("difference_array", tests),
            &timeline,
            |b, timeline| {
                b.iter(|| black_box(concurrency::sample(timeline, TimeDelta::seconds(1)).unwrap()));
            },
        );
        group.bench_with_input(
            BenchmarkId::new("direct_scan", tests),
            &timeline,
            |b, timeline| {
                b.iter(|| black_box(direct_scan(timeline)));
            },
        );
    }

    group.finish();
}

criterion_group!(benches, bench_extract, bench_sampling);
criterion_main!(benches);
