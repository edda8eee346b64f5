//! fastcic4 Parallel Smoothing Examples
//!
//! This example demonstrates features specific to `fastcic4`:
//! - Parallel execution using `rayon`
//! - Sequential fallback
//! - `ndarray` integration
//! - Fixed-point consistency checking at full telemetry magnitude
//! - Text and integer signal input

use fastcic4::prelude::*;
use ndarray::Array1;
use std::time::Instant;

fn main() -> Result<(), Cic4Error> {
    println!("{}", "=".repeat(80));
    println!("fastcic4 Parallel Smoothing Examples");
    println!("{}", "=".repeat(80));
    println!();

    example_1_parallel_execution()?;
    example_2_sequential_fallback()?;
    example_3_ndarray_integration()?;
    example_4_consistency_check()?;
    example_5_text_and_integer_input()?;

    Ok(())
}

/// Example 1: Parallel Execution
/// Demonstrates the default parallel execution mode
fn example_1_parallel_execution() -> Result<(), Cic4Error> {
    println!("Example 1: Parallel Execution");
    println!("{}", "-".repeat(80));

    // Generate a larger synthetic staircase signal
    let n = 10_000;
    let signal: Vec<f64> = (0..n)
        .map(|i| 28621495321396.0 + (i / 1000) as f64 * 549755813888.0)
        .collect();

    let start = Instant::now();
    let model = Cic4::new()
        .window_log2(7) // 128-sample boxcar, 509 kernel taps
        .scale_bits(32) // Discard 32 low-order bits in the check pass
        .adapter(Batch) // Use Batch adapter from fastcic4
        .parallel(true) // Enable parallel execution (default)
        .build()?;

    let result = model.filter(&signal)?;
    let duration = start.elapsed();

    println!("Processed {} points in {:?}", n, duration);
    println!("Execution mode: Parallel");
    println!("Output points: {}", result.smoothed.len());

    println!();
    Ok(())
}

/// Example 2: Sequential Fallback
/// Demonstrates explicitly disabling parallelism
fn example_2_sequential_fallback() -> Result<(), Cic4Error> {
    println!("Example 2: Sequential Fallback");
    println!("{}", "-".repeat(80));

    let n = 10_000;
    let signal: Vec<f64> = (0..n)
        .map(|i| 28621495321396.0 + (i / 1000) as f64 * 549755813888.0)
        .collect();

    let start = Instant::now();
    let model = Cic4::new()
        .adapter(Batch)
        .parallel(false) // Disable parallel execution
        .build()?;

    let _result = model.filter(&signal)?;
    let duration = start.elapsed();

    println!("Processed {} points in {:?}", n, duration);
    println!("Execution mode: Sequential");
    // Note: Sequential might be slower for large N

    println!();
    Ok(())
}

/// Example 3: NdArray Integration
/// Demonstrates direct usage with ndarray types
fn example_3_ndarray_integration() -> Result<(), Cic4Error> {
    println!("Example 3: NdArray Integration");
    println!("{}", "-".repeat(80));

    // Create ndarray arrays using standard Vec
    let signal_vec: Vec<f64> = (0..100)
        .map(|i| (i as f64 * 0.1).sin() * 1000.0 + 5000.0)
        .collect();

    let signal = Array1::from(signal_vec);

    // Filter directly with ndarray input
    let res = Cic4::new()
        .window_log2(3)
        .scale(16.0)
        .adapter(Batch)
        .parallel(true)
        .build()?
        .filter(&signal)?;

    println!("Successfully filtered ndarray input.");
    println!("First 5 smoothed values:");
    for val in res.smoothed.iter().take(5) {
        println!("  {:.4}", val);
    }

    println!();
    Ok(())
}

/// Example 4: Fixed-Point Consistency at Telemetry Magnitude
/// Demonstrates the check pass on raw counter plateaus
fn example_4_consistency_check() -> Result<(), Cic4Error> {
    println!("Example 4: Fixed-Point Consistency at Telemetry Magnitude");
    println!("{}", "-".repeat(80));

    // Two counter plateaus, 1000 samples each
    let mut signal = vec![28621495321396.0_f64; 1000];
    signal.extend(vec![29171251135283.0; 1000]);

    let model = Cic4::new()
        .window_log2(7)
        .scale_bits(32)
        .return_diagnostics()
        .adapter(Batch)
        .parallel(true)
        .build()?;

    let result = model.filter(&signal)?;

    if let Some(diag) = &result.diagnostics {
        println!("Max |deviation|:       {:.1}", diag.max_abs_deviation);
        println!("Dev / scale:           {:.6}", diag.scale_ratio);
        println!("Within one scale step: {}", diag.within_scale());
    }

    /* Expected Output (values approximate):
    Max |deviation|:       4128228148.0
    Dev / scale:           0.961178
    Within one scale step: true
    */

    println!();
    Ok(())
}

/// Example 5: Text and Integer Input
/// Demonstrates comma-separated text parsing and integer promotion
fn example_5_text_and_integer_input() -> Result<(), Cic4Error> {
    println!("Example 5: Text and Integer Input");
    println!("{}", "-".repeat(80));

    // Comma-separated counter dump, as emitted by the telemetry source
    let text = "28621495321396, 28621495321396, 28621495321396, \
                29171251135283, 29171251135283, 29171251135283";

    let parsed: Vec<f64> = parse_signal(text)?;
    println!("Parsed {} samples from text", parsed.len());

    let result = Cic4::new()
        .window_log2(1)
        .scale_bits(32)
        .adapter(Batch)
        .build()?
        .filter(&parsed)?;

    println!("Output points: {}", result.smoothed.len());

    // The same samples as integers, promoted during filtering
    let samples: Vec<i64> = vec![
        28621495321396,
        28621495321396,
        28621495321396,
        29171251135283,
        29171251135283,
        29171251135283,
    ];

    let integer_result: Cic4Result<f64> = Cic4::new()
        .window_log2(1)
        .scale_bits(32)
        .adapter(Batch)
        .build()?
        .filter(&samples)?;

    println!(
        "Integer and text paths agree: {}",
        integer_result.smoothed == result.smoothed
    );

    /* Expected Output:
    Parsed 6 samples from text
    Output points: 10
    Integer and text paths agree: true
    */

    println!();
    Ok(())
}
