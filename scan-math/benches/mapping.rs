use criterion::{black_box, criterion_group, criterion_main, Criterion};
use scan_math::{line_time_ms, BANDWIDTH_KHZ, SLEW_RATE_FS_PER_US};

fn bench_to_value(c: &mut Criterion) {
    let positions: Vec<f64> = (0..=1000).map(|i| i as f64 * 0.1).collect();

    let mut group = c.benchmark_group("to_value");
    group.bench_function("bandwidth_1001_positions", |b| {
        b.iter(|| {
            positions
                .iter()
                .map(|&p| BANDWIDTH_KHZ.to_value(black_box(p)))
                .sum::<f64>()
        })
    });
    group.bench_function("slew_rate_1001_positions", |b| {
        b.iter(|| {
            positions
                .iter()
                .map(|&p| SLEW_RATE_FS_PER_US.to_value(black_box(p)))
                .sum::<f64>()
        })
    });
    group.finish();
}

fn bench_round_trip(c: &mut Criterion) {
    c.bench_function("bandwidth_round_trip", |b| {
        b.iter(|| BANDWIDTH_KHZ.to_value(BANDWIDTH_KHZ.to_position(black_box(20.0))))
    });
}

fn bench_line_time(c: &mut Criterion) {
    c.bench_function("line_time_ms", |b| {
        b.iter(|| line_time_ms(black_box(1024), black_box(100.0), black_box(1000.0)))
    });
}

criterion_group!(benches, bench_to_value, bench_round_trip, bench_line_time);
criterion_main!(benches);
