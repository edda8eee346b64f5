//! Industry-level CIC4 benchmarks using Criterion.
//!
//! Benchmarks cover:
//! - Scalability (1K to 10K points)
//! - Filter parameters (window width, quantization scale)
//! - Real-world scenarios (counter telemetry, sensor data, large captures)
//! - Pathological cases (spikes, counter resets, high noise)
//!
//! For sequential execution, use `FASTCIC4_MODE=serial cargo bench`.
//! For parallel execution, use `FASTCIC4_MODE=parallel cargo bench` (default).

use cic4::prelude::CicKernel;
use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use fastcic4::prelude::*;
use rand::prelude::*;
use rand_distr::{Normal, Uniform};
use std::env;
use std::f64::consts::PI;
use std::hint::black_box;

// ============================================================================
// Helper Functions
// ============================================================================

fn get_config() -> (bool, &'static str) {
    match env::var("FASTCIC4_MODE").ok().as_deref() {
        Some("serial") | Some("sequential") => (false, "serial"),
        _ => (true, "parallel"),
    }
}

// ============================================================================
// Data Generation with Reproducible RNG
// ============================================================================

/// Generate a monotone byte-counter series (cumulative rate with jitter).
fn generate_counter_data(size: usize, seed: u64) -> Vec<f64> {
    let mut rng = StdRng::seed_from_u64(seed);
    let rate_dist = Normal::<f64>::new(549_755_813.0, 54_975_581.0).unwrap();

    let mut y = vec![28_621_495_321_396.0]; // Starting counter value
    for _ in 1..size {
        let step = rate_dist.sample(&mut rng).max(0.0);
        y.push(y.last().unwrap() + step);
    }
    y
}

/// Generate a staircase series (plateaus with abrupt rate changes).
fn generate_step_data(size: usize, seed: u64) -> Vec<f64> {
    let mut rng = StdRng::seed_from_u64(seed);
    let noise_dist = Normal::new(0.0, 1_000_000.0).unwrap();

    (0..size)
        .map(|i| (i / 1000) as f64 * 549_755_813_888.0 + noise_dist.sample(&mut rng))
        .collect()
}

/// Generate smooth sinusoidal sensor data with Gaussian noise.
fn generate_sine_data(size: usize, seed: u64) -> Vec<f64> {
    let mut rng = StdRng::seed_from_u64(seed);
    let noise_dist = Normal::new(0.0, 50.0).unwrap();

    (0..size)
        .map(|i| {
            let xi = i as f64 / size as f64 * 4.0 * PI;
            xi.sin() * 1000.0 + 5000.0 + noise_dist.sample(&mut rng)
        })
        .collect()
}

/// Generate counter data with spikes (5% of points are extreme).
fn generate_spike_data(size: usize, seed: u64) -> Vec<f64> {
    let mut rng = StdRng::seed_from_u64(seed);
    let spike_dist = Uniform::new(-5e12, 5e12).unwrap();

    let mut y = generate_counter_data(size, seed);

    // Add 5% spikes
    let n_spikes = size / 20;
    for _ in 0..n_spikes {
        let idx = rng.random_range(0..size);
        y[idx] += spike_dist.sample(&mut rng);
    }
    y
}

/// Generate high-noise data (SNR < 1).
fn generate_high_noise_data(size: usize, seed: u64) -> Vec<f64> {
    let mut rng = StdRng::seed_from_u64(seed);
    let noise_dist = Normal::new(0.0, 2000.0).unwrap();

    (0..size)
        .map(|i| {
            let xi = i as f64 / size as f64 * 4.0 * PI;
            let signal = xi.sin() * 500.0;
            signal + noise_dist.sample(&mut rng)
        })
        .collect()
}

// ============================================================================
// Benchmark Functions
// ============================================================================

fn bench_scalability(c: &mut Criterion) {
    let (use_parallel, mode_name) = get_config();
    let mut group = c.benchmark_group(format!("scalability_{}", mode_name));
    group.sample_size(50);

    for size in [1_000, 5_000, 10_000] {
        group.throughput(Throughput::Elements(size as u64));

        let y = generate_counter_data(size, 42);

        group.bench_with_input(BenchmarkId::new("batch", size), &size, |b, _| {
            b.iter(|| {
                Cic4::new()
                    .window_log2(7)
                    .scale_bits(32)
                    .adapter(Batch)
                    .parallel(use_parallel)
                    .build()
                    .unwrap()
                    .filter(black_box(&y))
                    .unwrap()
            })
        });
    }
    group.finish();
}

fn bench_window(c: &mut Criterion) {
    let (use_parallel, mode_name) = get_config();
    let mut group = c.benchmark_group(format!("window_{}", mode_name));
    group.sample_size(50);

    let size = 5000;
    let y = generate_sine_data(size, 42);

    for w in [2, 3, 5, 7, 9] {
        let taps = CicKernel::<f64>::build(w).unwrap().len();
        group.throughput(Throughput::Elements((size + taps - 1) as u64));

        group.bench_with_input(BenchmarkId::new("batch", w), &w, |b, &w| {
            b.iter(|| {
                Cic4::new()
                    .window_log2(w)
                    .scale_bits(8)
                    .adapter(Batch)
                    .parallel(use_parallel)
                    .build()
                    .unwrap()
                    .filter(black_box(&y))
                    .unwrap()
            })
        });
    }
    group.finish();
}

fn bench_scale(c: &mut Criterion) {
    let (use_parallel, mode_name) = get_config();
    let mut group = c.benchmark_group(format!("scale_{}", mode_name));
    group.sample_size(100);

    let size = 5000;
    let y = generate_counter_data(size, 42);

    for bits in [8, 16, 24, 32, 40] {
        group.bench_with_input(BenchmarkId::new("batch", bits), &bits, |b, &bits| {
            b.iter(|| {
                Cic4::new()
                    .window_log2(7)
                    .scale_bits(bits)
                    .adapter(Batch)
                    .parallel(use_parallel)
                    .build()
                    .unwrap()
                    .filter(black_box(&y))
                    .unwrap()
            })
        });
    }
    group.finish();
}

fn bench_telemetry(c: &mut Criterion) {
    let (use_parallel, mode_name) = get_config();
    let mut group = c.benchmark_group(format!("telemetry_{}", mode_name));
    group.sample_size(100);

    for size in [500, 1000, 5000] {
        let y = generate_step_data(size, 42);

        group.bench_with_input(BenchmarkId::new("counter_smoothing", size), &size, |b, _| {
            b.iter(|| {
                Cic4::new()
                    .window_log2(7)
                    .scale_bits(32)
                    .adapter(Batch)
                    .parallel(use_parallel)
                    .build()
                    .unwrap()
                    .filter(black_box(&y))
                    .unwrap()
            })
        });
    }
    group.finish();
}

fn bench_diagnostics(c: &mut Criterion) {
    let (use_parallel, mode_name) = get_config();
    let mut group = c.benchmark_group(format!("diagnostics_{}", mode_name));
    group.sample_size(100);

    let size = 5000;
    let y = generate_counter_data(size, 42);

    group.bench_function("without_diagnostics", |b| {
        b.iter(|| {
            Cic4::new()
                .window_log2(7)
                .scale_bits(32)
                .adapter(Batch)
                .parallel(use_parallel)
                .build()
                .unwrap()
                .filter(black_box(&y))
                .unwrap()
        })
    });

    group.bench_function("with_diagnostics", |b| {
        b.iter(|| {
            Cic4::new()
                .window_log2(7)
                .scale_bits(32)
                .return_diagnostics()
                .adapter(Batch)
                .parallel(use_parallel)
                .build()
                .unwrap()
                .filter(black_box(&y))
                .unwrap()
        })
    });

    group.finish();
}

fn bench_large_signals(c: &mut Criterion) {
    let (use_parallel, mode_name) = get_config();
    let mut group = c.benchmark_group(format!("large_signals_{}", mode_name));
    group.sample_size(50);

    for size in [50_000, 100_000] {
        group.throughput(Throughput::Elements(size as u64));

        let y = generate_counter_data(size, 42);

        group.bench_with_input(BenchmarkId::new("tiled", size), &size, |b, _| {
            b.iter(|| {
                Cic4::new()
                    .window_log2(7)
                    .scale_bits(32)
                    .adapter(Batch)
                    .parallel(use_parallel)
                    .build()
                    .unwrap()
                    .filter(black_box(&y))
                    .unwrap()
            })
        });
    }
    group.finish();
}

fn bench_pathological(c: &mut Criterion) {
    let (use_parallel, mode_name) = get_config();
    let mut group = c.benchmark_group(format!("pathological_{}", mode_name));
    group.sample_size(50);

    let size = 5000;

    // Spiked counters
    let y_spikes = generate_spike_data(size, 42);
    group.bench_function("spikes", |b| {
        b.iter(|| {
            Cic4::new()
                .window_log2(7)
                .scale_bits(32)
                .adapter(Batch)
                .parallel(use_parallel)
                .build()
                .unwrap()
                .filter(black_box(&y_spikes))
                .unwrap()
        })
    });

    // High noise
    let y_noisy = generate_high_noise_data(size, 42);
    group.bench_function("high_noise", |b| {
        b.iter(|| {
            Cic4::new()
                .window_log2(9)
                .scale_bits(8)
                .adapter(Batch)
                .parallel(use_parallel)
                .build()
                .unwrap()
                .filter(black_box(&y_noisy))
                .unwrap()
        })
    });

    // Counter reset mid-series
    let mut y_reset = generate_counter_data(size, 42);
    let offset = y_reset[size / 2];
    for v in y_reset.iter_mut().skip(size / 2) {
        *v -= offset;
    }
    group.bench_function("counter_reset", |b| {
        b.iter(|| {
            Cic4::new()
                .window_log2(7)
                .scale_bits(32)
                .adapter(Batch)
                .parallel(use_parallel)
                .build()
                .unwrap()
                .filter(black_box(&y_reset))
                .unwrap()
        })
    });

    // Constant signal
    let y_const = vec![5_000_000_000.0; size];
    group.bench_function("constant_signal", |b| {
        b.iter(|| {
            Cic4::new()
                .window_log2(7)
                .scale_bits(32)
                .adapter(Batch)
                .parallel(use_parallel)
                .build()
                .unwrap()
                .filter(black_box(&y_const))
                .unwrap()
        })
    });

    group.finish();
}

fn bench_precision(c: &mut Criterion) {
    let (use_parallel, mode_name) = get_config();
    let mut group = c.benchmark_group(format!("precision_{}", mode_name));
    group.sample_size(50);

    let size = 5000;
    let y64 = generate_sine_data(size, 42);
    let y32: Vec<f32> = y64.iter().map(|&v| v as f32).collect();

    group.bench_function("f64", |b| {
        b.iter(|| {
            Cic4::new()
                .window_log2(7)
                .scale_bits(8)
                .adapter(Batch)
                .parallel(use_parallel)
                .build()
                .unwrap()
                .filter(black_box(&y64))
                .unwrap()
        })
    });

    group.bench_function("f32", |b| {
        b.iter(|| {
            Cic4::new()
                .window_log2(7)
                .scale_bits(8)
                .adapter(Batch)
                .parallel(use_parallel)
                .build()
                .unwrap()
                .filter(black_box(&y32))
                .unwrap()
        })
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_scalability,
    bench_window,
    bench_scale,
    bench_telemetry,
    bench_diagnostics,
    bench_large_signals,
    bench_pathological,
    bench_precision,
);

criterion_main!(benches);
