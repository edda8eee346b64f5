#![cfg(feature = "dev")]
//! Tests for the Batch adapter.
//!
//! The Batch adapter is the standard execution mode for CIC4 filtering,
//! covering:
//! - Kernel construction at build time and reuse across signals
//! - The full-precision and quantized passes over realistic step signals
//! - Deviation diagnostics
//! - Validation and error handling
//!
//! ## Test Organization
//!
//! 1. **Basic Functionality** - Core filtering behavior and defaults
//! 2. **Step Signal Scenarios** - The two reference step waveforms
//! 3. **Diagnostics** - Requested deviation metrics
//! 4. **Edge Cases** - Boundary conditions and error handling

use approx::assert_relative_eq;
use cic4::prelude::*;

use cic4::internals::adapters::batch::{BatchCic4, BatchCic4Builder};

// ============================================================================
// Basic Functionality Tests
// ============================================================================

/// Test builder defaults.
///
/// Verifies the default width exponent (7) and scale (2^32).
#[test]
fn test_batch_builder_defaults() {
    let builder = BatchCic4Builder::<f64>::default();

    assert_eq!(builder.window_log2, 7);
    assert_relative_eq!(builder.scale, 4294967296.0, epsilon = 1e-6);
    assert!(!builder.return_diagnostics);
    assert!(builder.deferred_error.is_none());
    assert!(builder.parallel.is_none());
}

/// Test that build constructs the kernel once.
#[test]
fn test_batch_build_constructs_kernel() {
    let model = BatchCic4Builder::<f64>::default()
        .window_log2(3)
        .scale(16.0)
        .build()
        .unwrap();

    assert_eq!(model.kernel().len(), 29);
    assert_eq!(model.kernel().window_log2(), 3);
    assert_relative_eq!(model.kernel().sum(), 1.0, epsilon = 1e-9);
}

/// Test output lengths.
///
/// Both outputs span the full convolution, `signal + kernel - 1`.
#[test]
fn test_batch_output_lengths() {
    let model = BatchCic4Builder::<f64>::default()
        .window_log2(2)
        .scale(4.0)
        .build()
        .unwrap();

    let signal = vec![7.0; 25];
    let result = model.filter(&signal).unwrap();

    assert_eq!(result.len(), 25 + 13 - 1);
    assert_eq!(result.smoothed.len(), result.smoothed_scaled.len());
    assert_eq!(result.signal.len(), 25);
    assert_eq!(result.kernel_len, 13);
    assert_eq!(result.window_log2, 2);
}

/// Test that one built model filters several signals.
#[test]
fn test_batch_model_reuse() {
    let model = BatchCic4Builder::<f64>::default()
        .window_log2(2)
        .scale(2.0)
        .build()
        .unwrap();

    let first = model.filter(&[4.0, 8.0, 12.0]).unwrap();
    let second = model.filter(&[4.0, 8.0, 12.0, 16.0]).unwrap();

    assert_eq!(first.len(), 3 + 13 - 1);
    assert_eq!(second.len(), 4 + 13 - 1);
}

/// Test the single-call convenience constructor.
#[test]
fn test_batch_filter_once() {
    let signal = vec![10.0_f64, 20.0, 30.0];

    let via_builder = BatchCic4Builder::default()
        .window_log2(1)
        .scale(4.0)
        .build()
        .unwrap()
        .filter(&signal)
        .unwrap();
    let via_once = BatchCic4::filter_once(&signal, 1, 4.0).unwrap();

    assert_eq!(via_builder.smoothed, via_once.smoothed);
    assert_eq!(via_builder.smoothed_scaled, via_once.smoothed_scaled);
}

/// Test a quantization-transparent signal.
///
/// Samples that are exact multiples of the scale survive both passes
/// unchanged in the fully-overlapped interior.
#[test]
fn test_batch_scale_aligned_signal() {
    let model = BatchCic4Builder::<f64>::default()
        .window_log2(2)
        .scale(32.0)
        .build()
        .unwrap();

    let signal = vec![96.0; 60];
    let result = model.filter(&signal).unwrap();

    for i in 12..60 {
        assert_relative_eq!(result.smoothed[i], 96.0, max_relative = 1e-12);
        assert_relative_eq!(result.smoothed_scaled[i], 96.0, max_relative = 1e-12);
    }
    assert!(result.max_deviation() < 32.0);
}

// ============================================================================
// Step Signal Scenario Tests
// ============================================================================

/// Reference step: two plateaus of large integer samples at scale 2^32.
///
/// The filter transitions smoothly across a region the width of the kernel
/// support, and the quantized pass tracks it to within one scale step.
#[test]
fn test_batch_two_plateau_step() {
    let v1 = 28621495321396.0_f64;
    let v2 = 29171251135283.0_f64;
    let scale = 4294967296.0_f64; // 2^32

    let mut signal = vec![v1; 1000];
    signal.extend(vec![v2; 1000]);

    let model = BatchCic4Builder::<f64>::default()
        .window_log2(7)
        .scale(scale)
        .build()
        .unwrap();
    let result = model.filter(&signal).unwrap();

    // 509 kernel taps over 2000 samples
    assert_eq!(result.len(), 2000 + 509 - 1);

    // Fully-overlapped interiors settle on the plateau values
    assert_relative_eq!(result.smoothed[600], v1, max_relative = 1e-12);
    assert_relative_eq!(result.smoothed[1700], v2, max_relative = 1e-12);

    // The quantized pass settles on floor(v / scale) * scale
    assert_relative_eq!(
        result.smoothed_scaled[600],
        6663.0 * scale,
        max_relative = 1e-12
    );
    assert_relative_eq!(
        result.smoothed_scaled[1700],
        6791.0 * scale,
        max_relative = 1e-12
    );

    // A rising step smooths into a non-decreasing ramp over the interior
    for k in 508..1999 {
        assert!(
            result.smoothed[k + 1] + 64.0 >= result.smoothed[k],
            "Smoothed output should be non-decreasing at index {}",
            k
        );
    }

    // Quantization can never shift the output by a full scale step
    assert!(result.max_deviation() < scale);
}

/// Reference step: a falling edge into a long zero tail, default parameters.
///
/// With the default 2^32 scale every sample quantizes to zero, so the scaled
/// output vanishes while the full-precision output decays monotonically.
#[test]
fn test_batch_falling_edge_step() {
    let mut signal = vec![500.0_f64; 500];
    signal.extend(vec![0.0; 2000]);

    let model = BatchCic4Builder::<f64>::default().build().unwrap();
    let result = model.filter(&signal).unwrap();

    // Default width exponent 7: 509 taps over 2500 samples
    assert_eq!(result.kernel_len, 509);
    assert_eq!(result.len(), 2500 + 509 - 1);

    // The 500-sample plateau is narrower than the kernel support, so the
    // peak stays strictly below the plateau value
    let peak = result.smoothed.iter().cloned().fold(0.0_f64, f64::max);
    assert!(peak < 500.0, "Peak {} should stay below the plateau", peak);
    assert!(peak > 400.0, "Peak {} should still be near the plateau", peak);

    // Non-increasing from the first fully-overlapped index onward
    for k in 508..result.len() - 1 {
        assert!(
            result.smoothed[k + 1] <= result.smoothed[k] + 1e-6,
            "Smoothed output should be non-increasing at index {}",
            k
        );
    }

    // floor(500 / 2^32) == 0, so the quantized pass is identically zero
    assert!(result.smoothed_scaled.iter().all(|&v| v == 0.0));

    // The convolution tail past the signal decays to exactly zero
    assert_eq!(result.smoothed[result.len() - 1], 0.0);
    assert!(result.max_deviation() < 4294967296.0);
}

// ============================================================================
// Diagnostics Tests
// ============================================================================

/// Test requested diagnostics.
#[test]
fn test_batch_with_diagnostics() {
    let model = BatchCic4Builder::<f64>::default()
        .window_log2(2)
        .scale(32.0)
        .return_diagnostics(true)
        .build()
        .unwrap();

    let result = model.filter(&vec![100.0; 40]).unwrap();

    assert!(result.has_diagnostics());
    let diag = result.diagnostics.as_ref().unwrap();
    assert_relative_eq!(diag.scale, 32.0, epsilon = 1e-12);
    assert!(diag.within_scale());
    assert!(diag.scale_ratio < 1.0);
}

/// Test that diagnostics stay off unless requested.
#[test]
fn test_batch_without_diagnostics() {
    let model = BatchCic4Builder::<f64>::default()
        .window_log2(1)
        .scale(2.0)
        .build()
        .unwrap();

    let result = model.filter(&[1.0, 2.0, 3.0]).unwrap();

    assert!(!result.has_diagnostics());
    assert!(result.diagnostics.is_none());
}

/// Test the deviation accessors on the result.
#[test]
fn test_batch_result_deviations() {
    let model = BatchCic4Builder::<f64>::default()
        .window_log2(1)
        .scale(4.0)
        .build()
        .unwrap();

    let result = model.filter(&[10.0, 20.0, 30.0, 40.0, 50.0]).unwrap();

    let deviations = result.deviations();
    assert_eq!(deviations.len(), result.len());
    assert!(deviations.iter().all(|&d| d >= 0.0));

    let max = result.max_deviation();
    assert!(deviations.iter().all(|&d| d <= max));
}

// ============================================================================
// Edge Case Tests
// ============================================================================

/// Test single-sample signals.
///
/// The output reduces to the kernel scaled by the sample.
#[test]
fn test_batch_single_sample() {
    let model = BatchCic4Builder::<f64>::default()
        .window_log2(1)
        .scale(2.0)
        .build()
        .unwrap();

    let result = model.filter(&[16.0]).unwrap();

    assert_eq!(result.len(), 5);
    assert_relative_eq!(result.smoothed[2], 16.0 * 0.375, epsilon = 1e-12);
}

/// Test negative samples.
///
/// Quantization floors toward negative infinity, so the scaled output sits
/// at or below the full-precision one.
#[test]
fn test_batch_negative_samples() {
    let model = BatchCic4Builder::<f64>::default()
        .window_log2(1)
        .scale(2.0)
        .build()
        .unwrap();

    let result = model.filter(&vec![-3.0; 20]).unwrap();

    // floor(-3 / 2) * 2 == -4
    assert_relative_eq!(result.smoothed[10], -3.0, max_relative = 1e-12);
    assert_relative_eq!(result.smoothed_scaled[10], -4.0, max_relative = 1e-12);
}

/// Test empty signal rejection.
#[test]
fn test_batch_empty_signal() {
    let model = BatchCic4Builder::<f64>::default().build().unwrap();

    let result = model.filter(&[]);

    assert_eq!(result.unwrap_err(), Cic4Error::EmptyInput);
}

/// Test non-finite signal rejection.
#[test]
fn test_batch_non_finite_signal() {
    let model = BatchCic4Builder::<f64>::default().build().unwrap();

    let result = model.filter(&[1.0, f64::NAN]);

    assert!(matches!(result, Err(Cic4Error::InvalidNumericValue(_))));
}

/// Test invalid width exponent rejection at build time.
#[test]
fn test_batch_invalid_window() {
    let result = BatchCic4Builder::<f64>::default().window_log2(0).build();

    assert!(matches!(
        result.err(),
        Some(Cic4Error::InvalidWindowLog2 { got: 0, .. })
    ));
}

/// Test invalid scale rejection at build time.
#[test]
fn test_batch_invalid_scale() {
    let result = BatchCic4Builder::<f64>::default().scale(0.25).build();

    assert_eq!(result.err(), Some(Cic4Error::InvalidScale(0.25)));
}

/// Test single precision end to end.
#[test]
fn test_batch_f32() {
    let model = BatchCic4Builder::<f32>::default()
        .window_log2(2)
        .scale(4.0)
        .build()
        .unwrap();

    let signal = vec![64.0_f32; 30];
    let result = model.filter(&signal).unwrap();

    assert_eq!(result.len(), 30 + 13 - 1);
    assert_relative_eq!(result.smoothed[15], 64.0_f32, max_relative = 1e-4);
    assert_relative_eq!(result.smoothed_scaled[15], 64.0_f32, max_relative = 1e-4);
}

// ============================================================================
// Display Tests
// ============================================================================

/// Test the result rendering, including long-output elision.
#[test]
fn test_batch_result_display() {
    let model = BatchCic4Builder::<f64>::default()
        .window_log2(2)
        .scale(8.0)
        .build()
        .unwrap();

    let result = model.filter(&vec![24.0; 40]).unwrap();
    let rendered = format!("{}", result);

    assert!(rendered.contains("Summary:"));
    assert!(rendered.contains("Kernel taps:   13"));
    assert!(rendered.contains("Filtered Data:"));
    // 52 output rows collapse to the first and last ten
    assert!(rendered.contains("..."));
}
