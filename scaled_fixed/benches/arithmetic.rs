// benches/arithmetic.rs

use bytemuck_derive::{Pod, Zeroable};
use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use scaled_fixed::FixedPoint;
use scaled_fixed::typenum::{N8, N16};

#[repr(C)]
#[derive(Clone, Copy, Pod, Zeroable)]
struct Sample {
    position: i32,
    velocity: i16,
    _pad: i16,
}

fn create_samples(size: usize) -> Vec<Sample> {
    (0..size)
        .map(|i| Sample {
            position: (i as i32) << 16,
            velocity: (i as i16).wrapping_mul(37),
            _pad: 0,
        })
        .collect()
}

fn bench_mixed_add(c: &mut Criterion) {
    let sizes = vec![100, 1_000, 10_000];

    let mut group = c.benchmark_group("mixed_add");
    for size in sizes {
        let samples = create_samples(size);

        group.bench_with_input(BenchmarkId::from_parameter(size), &size, |b, _| {
            b.iter(|| {
                let mut acc = FixedPoint::<i64, N16>::zero();
                for s in &samples {
                    let position = FixedPoint::<i32, N16>::from_raw(s.position);
                    let velocity = FixedPoint::<i16, N8>::from_raw(s.velocity);
                    let next: FixedPoint<i32, N16> = black_box(position) + black_box(velocity);
                    acc = FixedPoint::from_raw(acc.raw_value().wrapping_add(i64::from(next.raw_value())));
                }
                acc
            });
        });
    }
    group.finish();
}

fn bench_mul(c: &mut Criterion) {
    let sizes = vec![100, 1_000, 10_000];

    let mut group = c.benchmark_group("mul");
    for size in sizes {
        let samples = create_samples(size);

        group.bench_with_input(BenchmarkId::from_parameter(size), &size, |b, _| {
            b.iter(|| {
                samples
                    .iter()
                    .map(|s| {
                        let v = FixedPoint::<i16, N8>::from_raw(s.velocity);
                        black_box(v * v).raw_value()
                    })
                    .fold(0i32, i32::wrapping_add)
            });
        });
    }
    group.finish();
}

fn bench_float_conversion(c: &mut Criterion) {
    let sizes = vec![100, 1_000, 10_000];

    let mut group = c.benchmark_group("from_f64");
    for size in sizes {
        let values: Vec<f64> = (0..size).map(|i| i as f64 * 0.37).collect();

        group.bench_with_input(BenchmarkId::from_parameter(size), &size, |b, _| {
            b.iter(|| {
                values
                    .iter()
                    .map(|v| FixedPoint::<i32, N16>::from_f64(black_box(*v)).raw_value())
                    .fold(0i32, i32::wrapping_add)
            });
        });
    }
    group.finish();
}

fn bench_zero_copy(c: &mut Criterion) {
    let samples = create_samples(10_000);

    c.bench_function("cast_positions", |b| {
        b.iter(|| {
            let bytes: &[u8] = bytemuck::cast_slice(black_box(samples.as_slice()));
            let words: &[i32] = bytemuck::cast_slice(bytes);
            let fixed: &[FixedPoint<i32, N16>] = bytemuck::cast_slice(words);
            fixed.iter().step_by(2).map(|x| x.to_int::<i32>()).fold(0i32, i32::wrapping_add)
        });
    });
}

criterion_group!(benches, bench_mixed_add, bench_mul, bench_float_conversion, bench_zero_copy);
criterion_main!(benches);
