//! Comprehensive CIC4 Batch Smoothing Examples
//!
//! This example demonstrates various CIC4 filtering scenarios:
//! - Basic smoothing with minimal configuration
//! - Quantization scale selection and its accuracy cost
//! - Fixed-point consistency checking on telemetry plateaus
//! - Window width comparison
//! - Falling-edge behavior at coarse scales
//!
//! Each scenario includes the expected output as comments.

#[cfg(feature = "std")]
use cic4::prelude::*;
#[cfg(feature = "std")]
use std::time::Instant;

#[cfg(feature = "std")]
fn main() -> Result<(), Cic4Error> {
    println!("{}", "=".repeat(80));
    println!("CIC4 Batch Smoothing - Comprehensive Examples");
    println!("{}", "=".repeat(80));
    println!();

    // Run all example scenarios
    example_1_basic_smoothing()?;
    example_2_scale_selection()?;
    example_3_telemetry_consistency()?;
    example_4_window_comparison()?;
    example_5_falling_edge()?;
    example_6_benchmark()?;

    Ok(())
}

#[cfg(not(feature = "std"))]
fn main() {}

#[cfg(feature = "std")]
/// Example 1: Basic Smoothing
/// Demonstrates the simplest usage with minimal configuration
fn example_1_basic_smoothing() -> Result<(), Cic4Error> {
    println!("Example 1: Basic Smoothing");
    println!("{}", "-".repeat(80));

    let signal = vec![10.0, 20.0, 30.0, 40.0, 50.0];

    let model = Cic4::new()
        .window_log2(1) // 2-sample boxcar, 5 kernel taps
        .scale(4.0) // Quantization scale for the check pass
        .adapter(Batch)
        .build()?;

    let result = model.filter(&signal)?;
    println!("{}", result);

    /* Expected Output:
    Summary:
      Signal points: 5
      Output points: 9
      Kernel taps:   5
      Window log2:   1
      Scale:         4

    Filtered Data:
       Index             Signal           Smoothed    Smoothed_Scaled      Deviation
    --------------------------------------------------------------------------------
           0          10.000000           0.625000           0.500000       0.125000
           1          20.000000           3.750000           3.250000       0.500000
           2          30.000000          10.625000           9.750000       0.875000
           3          40.000000          20.000000          19.000000       1.000000
           4          50.000000          30.000000          29.000000       1.000000
           5                             36.250000          35.250000       1.000000
           6                             30.625000          29.750000       0.875000
           7                             15.000000          14.500000       0.500000
           8                              3.125000           3.000000       0.125000
    */

    println!();
    Ok(())
}

#[cfg(feature = "std")]
/// Example 2: Quantization Scale Selection
/// Shows how coarser scales trade accuracy for cheaper fixed-point words
fn example_2_scale_selection() -> Result<(), Cic4Error> {
    println!("Example 2: Quantization Scale Selection");
    println!("{}", "-".repeat(80));

    // Odd-valued samples so no scale divides them exactly
    let signal = vec![11.0, 23.0, 37.0, 41.0, 53.0];

    for bits in [1u32, 3, 5] {
        let model = Cic4::new()
            .window_log2(1)
            .scale_bits(bits)
            .adapter(Batch)
            .build()?;

        let result = model.filter(&signal)?;
        println!(
            "  Scale 2^{} = {:>4}: max deviation {:.4}",
            bits,
            result.scale,
            result.max_deviation()
        );
    }

    /* Expected Output:
      Scale 2^1 =    2: max deviation 1.0000
      Scale 2^3 =    8: max deviation 4.6875
      Scale 2^5 =   32: max deviation 13.1875
    */

    println!();
    Ok(())
}

#[cfg(feature = "std")]
/// Example 3: Fixed-Point Consistency on Telemetry Plateaus
/// Large raw counter values checked against a 32-bit quantization scale
fn example_3_telemetry_consistency() -> Result<(), Cic4Error> {
    println!("Example 3: Fixed-Point Consistency on Telemetry Plateaus");
    println!("{}", "-".repeat(80));

    // Two plateaus of raw counter readings, stepping up mid-signal
    let mut signal = vec![28621495321396.0; 1000];
    signal.extend(vec![29171251135283.0; 1000]);

    let model = Cic4::new()
        .window_log2(7) // 128-sample boxcar, 509 taps
        .scale_bits(32) // Check against 32 fractional bits
        .return_diagnostics()
        .adapter(Batch)
        .build()?;

    let result = model.filter(&signal)?;

    if let Some(diag) = &result.diagnostics {
        println!("  Max |dev|:             {:.1}", diag.max_abs_deviation);
        println!("  Dev / scale:           {:.6}", diag.scale_ratio);
        println!("  Within one scale step: {}", diag.within_scale());
    }
    println!("  Settled low plateau:   {:.1}", result.smoothed[600]);
    println!("  Settled high plateau:  {:.1}", result.smoothed[1700]);

    /* Expected Output (values approximate):
      Max |dev|:             4128228148.0
      Dev / scale:           0.961178
      Within one scale step: true
      Settled low plateau:   28621495321396.0
      Settled high plateau:  29171251135283.0
    */

    println!();
    Ok(())
}

#[cfg(feature = "std")]
/// Example 4: Window Width Comparison
/// Wider boxcars give longer kernels and stronger smoothing
fn example_4_window_comparison() -> Result<(), Cic4Error> {
    println!("Example 4: Window Width Comparison");
    println!("{}", "-".repeat(80));

    let signal = vec![100.0; 80];

    for w in 1u32..=4 {
        let model = Cic4::new()
            .window_log2(w)
            .scale(4.0)
            .adapter(Batch)
            .build()?;

        let result = model.filter(&signal)?;
        println!(
            "  window_log2 {}: {:>3} taps, settled value {:.4}",
            w, result.kernel_len, result.smoothed[70]
        );
    }

    /* Expected Output:
      window_log2 1:   5 taps, settled value 100.0000
      window_log2 2:  13 taps, settled value 100.0000
      window_log2 3:  29 taps, settled value 100.0000
      window_log2 4:  61 taps, settled value 100.0000
    */

    println!();
    Ok(())
}

#[cfg(feature = "std")]
/// Example 5: Falling Edge at a Coarse Scale
/// Samples below the scale quantize to zero, and the check pass shows it
fn example_5_falling_edge() -> Result<(), Cic4Error> {
    println!("Example 5: Falling Edge at a Coarse Scale");
    println!("{}", "-".repeat(80));

    // A plateau of 500s dropping to a long zero tail
    let mut signal = vec![500.0; 500];
    signal.extend(vec![0.0; 2000]);

    // Default scale is 2^32, far above every sample
    let model = Cic4::new().adapter(Batch).build()?;
    let result = model.filter(&signal)?;

    let peak = result.smoothed.iter().cloned().fold(0.0_f64, f64::max);
    let all_zero = result.smoothed_scaled.iter().all(|&v| v == 0.0);

    println!("  Output points:        {}", result.len());
    println!("  Smoothed peak:        {:.4}", peak);
    println!("  Scaled pass all zero: {}", all_zero);
    println!("  Max deviation:        {:.4}", result.max_deviation());

    /* Expected Output:
      Output points:        3008
      Smoothed peak:        499.9998
      Scaled pass all zero: true
      Max deviation:        499.9998
    */

    println!();
    Ok(())
}

#[cfg(feature = "std")]
/// Example 6: Benchmark (Sequential Batch)
/// Measure execution time for a large dataset using the sequential Batch adapter
fn example_6_benchmark() -> Result<(), Cic4Error> {
    println!("Example 6: Benchmark (Sequential Batch)");
    println!("{}", "-".repeat(80));

    // Generate a larger synthetic dataset
    let n = 10_000;
    let signal: Vec<f64> = (0..n)
        .map(|i| 1000.0 + (i as f64 * 0.01).sin() * 250.0)
        .collect();

    let start = Instant::now();
    let model = Cic4::new().adapter(Batch).build()?;

    let result = model.filter(&signal)?;
    let duration = start.elapsed();

    println!("Processed {} points in {:?}", n, duration);
    println!("Execution mode: Sequential Batch");
    println!("Output points: {}", result.len());

    println!();
    Ok(())
}
