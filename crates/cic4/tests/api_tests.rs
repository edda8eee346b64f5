#![cfg(feature = "dev")]
//! Tests for the high-level CIC4 API.
//!
//! These tests verify the builder pattern, configuration options, and complete
//! workflows for the CIC4 API including:
//! - Builder construction and defaults
//! - Adapter conversion
//! - Scale configuration (direct and power-of-two)
//! - Duplicate parameter detection
//! - Result helpers
//!
//! ## Test Organization
//!
//! 1. **Builder Construction** - Default values, adapter conversion
//! 2. **Scale Configuration** - `scale` vs `scale_bits`
//! 3. **Validation** - Duplicate detection, invalid parameters, error display
//! 4. **Result Helpers** - Utility methods on Cic4Result
//! 5. **Builder Pattern Edge Cases** - Chaining order, clone independence

use approx::assert_relative_eq;
use std::fmt::Write;

use cic4::internals::api::{Batch, Cic4Builder as Cic4};
use cic4::internals::engine::output::Cic4Result;
use cic4::internals::evaluation::diagnostics::Diagnostics;
use cic4::internals::primitives::errors::Cic4Error;

// ============================================================================
// Helper Functions
// ============================================================================

fn ramp_signal(n: usize) -> Vec<f64> {
    (0..n).map(|i| (i as f64 + 1.0) * 10.0).collect()
}

// ============================================================================
// Builder Construction Tests
// ============================================================================

#[test]
fn test_builder_defaults() {
    let b = Cic4::<f64>::new();

    assert_eq!(b.window_log2, None, "Window exponent not set by default");
    assert_eq!(b.scale, None, "Scale not set by default");
    assert_eq!(
        b.return_diagnostics, None,
        "Diagnostics not requested by default"
    );

    // Test Default trait
    let bd = Cic4::<f64>::default();
    assert_eq!(bd.window_log2, None);
}

/// Test builder conversion to the Batch adapter.
///
/// Verifies that unset parameters fall back to adapter defaults.
#[test]
fn test_builder_converts_to_batch() {
    let batch = Cic4::<f64>::new().adapter(Batch);

    assert_eq!(batch.window_log2, 7);
    assert_relative_eq!(batch.scale, 4294967296.0, epsilon = 1e-6);
    assert!(!batch.return_diagnostics);
    assert!(batch.deferred_error.is_none());
    assert!(batch.build().is_ok(), "Batch builder should build");
}

/// Test Batch keeps options.
///
/// Verifies that the batch adapter preserves builder options.
#[test]
fn test_batch_keeps_options() {
    let base = Cic4::<f64>::new().window_log2(3).scale(16.0);

    let batch = base.adapter(Batch);
    assert_eq!(batch.window_log2, 3);
    assert_relative_eq!(batch.scale, 16.0, epsilon = 1e-12);
}

/// Test configuration propagation through a full run.
#[test]
fn test_builder_propagates_to_result() {
    let signal = ramp_signal(10);

    let result = Cic4::new()
        .window_log2(3)
        .scale(8.0)
        .adapter(Batch)
        .build()
        .unwrap()
        .filter(&signal)
        .unwrap();

    assert_eq!(result.window_log2, 3);
    assert_eq!(result.kernel_len, 29);
    assert_relative_eq!(result.scale, 8.0, epsilon = 1e-12);
    assert_eq!(result.len(), 10 + 29 - 1);
}

/// Test requested diagnostics arrive in the result.
#[test]
fn test_return_diagnostics_flow() {
    let signal = ramp_signal(8);

    let result = Cic4::new()
        .window_log2(1)
        .scale(4.0)
        .return_diagnostics()
        .adapter(Batch)
        .build()
        .unwrap()
        .filter(&signal)
        .unwrap();

    assert!(result.diagnostics.is_some());
    assert_relative_eq!(
        result.diagnostics.as_ref().unwrap().scale,
        4.0,
        epsilon = 1e-12
    );
}

// ============================================================================
// Scale Configuration Tests
// ============================================================================

/// Test that `scale_bits(b)` matches `scale(2^b)` exactly.
#[test]
fn test_scale_bits_equivalence() {
    let signal = ramp_signal(12);

    let via_bits = Cic4::<f64>::new()
        .window_log2(2)
        .scale_bits(5)
        .adapter(Batch)
        .build()
        .unwrap()
        .filter(&signal)
        .unwrap();

    let via_value = Cic4::<f64>::new()
        .window_log2(2)
        .scale(32.0)
        .adapter(Batch)
        .build()
        .unwrap()
        .filter(&signal)
        .unwrap();

    assert_eq!(via_bits.smoothed, via_value.smoothed);
    assert_eq!(via_bits.smoothed_scaled, via_value.smoothed_scaled);
    assert_eq!(via_bits.scale, via_value.scale);
}

/// Test the default scale when neither setter is called.
///
/// The adapter falls back to `2^32`, matching `scale_bits(32)`.
#[test]
fn test_default_scale() {
    let batch = Cic4::<f64>::new().adapter(Batch);
    let explicit = Cic4::<f64>::new().scale_bits(32).adapter(Batch);

    assert_eq!(batch.scale, explicit.scale);
}

// ============================================================================
// Validation Tests
// ============================================================================

/// Test that setting a parameter multiple times returns error on build().
#[test]
fn test_builder_parameter_override() {
    // Setting window_log2 twice - should be detected at build time
    let result = Cic4::<f64>::new()
        .window_log2(3)
        .window_log2(4) // Duplicate - will be caught by build()
        .adapter(Batch)
        .build();

    assert!(result.is_err());
    match result {
        Err(Cic4Error::DuplicateParameter { parameter }) => {
            assert_eq!(parameter, "window_log2");
        }
        _ => panic!("Expected DuplicateParameter error"),
    }
}

/// Test duplicate scale detection.
#[test]
fn test_duplicate_scale() {
    let result = Cic4::<f64>::new()
        .scale(2.0)
        .scale(4.0)
        .adapter(Batch)
        .build();

    assert!(matches!(
        result,
        Err(Cic4Error::DuplicateParameter { parameter: "scale" })
    ));
}

/// Test that `scale` and `scale_bits` conflict.
///
/// Both setters configure the same underlying parameter, in either order.
#[test]
fn test_scale_conflicts_with_scale_bits() {
    let direct_first = Cic4::<f64>::new()
        .scale(2.0)
        .scale_bits(3)
        .adapter(Batch)
        .build();
    assert!(matches!(
        direct_first,
        Err(Cic4Error::DuplicateParameter { parameter: "scale" })
    ));

    let bits_first = Cic4::<f64>::new()
        .scale_bits(3)
        .scale(2.0)
        .adapter(Batch)
        .build();
    assert!(matches!(
        bits_first,
        Err(Cic4Error::DuplicateParameter { parameter: "scale" })
    ));
}

/// Test invalid width exponent surfaces at build time.
#[test]
fn test_invalid_window_log2() {
    let result = Cic4::<f64>::new().window_log2(17).adapter(Batch).build();

    assert!(matches!(
        result,
        Err(Cic4Error::InvalidWindowLog2 { got: 17, .. })
    ));
}

#[test]
fn test_filter_empty_input() {
    let signal: Vec<f64> = vec![];

    let res = Cic4::<f64>::new()
        .window_log2(1)
        .adapter(Batch)
        .build()
        .unwrap()
        .filter(&signal);

    assert!(matches!(res, Err(Cic4Error::EmptyInput)));
}

/// Test Cic4Error Display and Debug formatting.
///
/// Exercises error variants for coverage.
#[test]
fn test_cic4_error_display() {
    let errs = [
        Cic4Error::EmptyInput,
        Cic4Error::InvalidInput("input must be contiguous".to_string()),
        Cic4Error::EmptyKernel,
        Cic4Error::InvalidWindowLog2 {
            got: 0,
            min: 1,
            max: 16,
        },
        Cic4Error::InvalidScale(0.5),
        Cic4Error::InvalidNumericValue("signal[0]=NaN".to_string()),
        Cic4Error::DuplicateParameter { parameter: "scale" },
    ];
    for e in errs {
        let _ = format!("{:?}", e);
        let _ = format!("{}", e);
    }
}

// ============================================================================
// Result Helpers Tests
// ============================================================================

/// Test Cic4Result helper methods.
///
/// Verifies len, deviations, max_deviation on a hand-built result.
#[test]
fn test_cic4_result_helpers() {
    let cr = Cic4Result {
        signal: vec![4.0, 8.0],
        smoothed: vec![1.0, 5.0, 3.0],
        smoothed_scaled: vec![0.5, 4.0, 3.0],
        kernel_len: 2,
        window_log2: 1,
        scale: 2.0,
        diagnostics: None,
    };

    assert_eq!(cr.len(), 3);
    assert!(!cr.is_empty());
    assert!(!cr.has_diagnostics());

    let dev = cr.deviations();
    assert_eq!(dev, vec![0.5, 1.0, 0.0]);
    assert_relative_eq!(cr.max_deviation(), 1.0, epsilon = 1e-12);
}

/// Test Diagnostics Display formatting.
///
/// Verifies that Diagnostics can be formatted.
#[test]
fn test_diagnostics_display() {
    let d = Diagnostics {
        max_abs_deviation: 1.5,
        mean_abs_deviation: 0.75,
        rms_deviation: 1.0,
        scale: 4.0,
        scale_ratio: 0.375,
    };

    let mut s = String::new();
    write!(&mut s, "{}", d).expect("format diagnostics");

    assert!(s.contains("Quantization Diagnostics"));
    assert!(s.contains("Max |dev|"));
    assert!(s.contains("RMS dev"));
}

// ============================================================================
// Builder Pattern Edge Cases
// ============================================================================

/// Test that builder methods can be called in any order.
#[test]
fn test_builder_method_chaining_order() {
    let signal = ramp_signal(20);

    // Order 1: window_log2 -> scale
    let result1 = Cic4::new()
        .window_log2(2)
        .scale(8.0)
        .adapter(Batch)
        .build()
        .unwrap()
        .filter(&signal)
        .unwrap();

    // Order 2: scale -> window_log2
    let result2 = Cic4::new()
        .scale(8.0)
        .window_log2(2)
        .adapter(Batch)
        .build()
        .unwrap()
        .filter(&signal)
        .unwrap();

    // Results should be identical regardless of order
    assert_eq!(result1.smoothed, result2.smoothed);
    assert_eq!(result1.smoothed_scaled, result2.smoothed_scaled);
}

/// Test that cloned builders are independent.
#[test]
fn test_builder_clone_independence() {
    let builder1 = Cic4::<f64>::new().window_log2(2);
    let builder2 = builder1.clone().scale(8.0);

    // builder1 should still have original values
    assert_eq!(builder1.window_log2, Some(2));
    assert_eq!(builder1.scale, None);

    // builder2 should have new values
    assert_eq!(builder2.window_log2, Some(2));
    assert_eq!(builder2.scale, Some(8.0));
}

/// Test that Default::default() works after custom configuration.
#[test]
fn test_builder_default_after_custom() {
    let _custom_builder = Cic4::<f64>::new().window_log2(4).scale(64.0);

    // Create a new default builder
    let default_builder = Cic4::<f64>::new();

    // Should have default values, not custom ones
    assert_eq!(default_builder.window_log2, None);
    assert_eq!(default_builder.scale, None);
}

/// Test adapter type can be inferred from context.
#[test]
fn test_adapter_type_inference() {
    let signal = ramp_signal(6);

    // Type inference should work from the filtered signal
    let result = Cic4::new()
        .window_log2(1)
        .adapter(Batch)
        .build()
        .unwrap()
        .filter(&signal)
        .unwrap();

    assert_eq!(result.len(), 6 + 5 - 1);
}
