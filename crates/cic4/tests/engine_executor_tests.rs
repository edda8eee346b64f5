#![cfg(feature = "dev")]
//! Tests for the CIC4 execution engine.
//!
//! These tests verify the two-pass executor:
//! - Cic4Executor construction and builder methods
//! - Cic4Config default values
//! - Output lengths and the quantized-path rescaling
//! - Custom convolution pass injection
//!
//! ## Test Organization
//!
//! 1. **Constructor Tests** - Default values and builder pattern
//! 2. **Config Tests** - Cic4Config defaults and scale helpers
//! 3. **Execution Tests** - Pass sequencing and output lengths
//! 4. **Hook Tests** - Custom convolution pass dispatch
//!
//! Note: End-to-end behavior over realistic signals is covered by the
//! adapter tests; these unit tests focus on the executor's interface.

use approx::assert_relative_eq;

use cic4::internals::engine::executor::{
    Cic4Config, Cic4Executor, DEFAULT_SCALE_BITS, DEFAULT_WINDOW_LOG2, default_scale,
    scale_from_bits,
};
use cic4::internals::math::convolve::convolve_into;
use cic4::internals::math::kernel::CicKernel;

// ============================================================================
// Constructor Tests
// ============================================================================

/// Test Cic4Executor default constructor.
///
/// Verifies that default values are set correctly.
#[test]
fn test_executor_new_defaults() {
    let executor = Cic4Executor::<f64>::new();

    assert_relative_eq!(executor.scale, 4294967296.0, epsilon = 1e-6);
    assert!(
        !executor.compute_diagnostics,
        "Diagnostics should be off by default"
    );
    assert!(executor.custom_convolve_pass.is_none());
    assert!(!executor.parallel, "Parallel hint should be off by default");
}

/// Test Cic4Executor default trait.
///
/// Verifies that Default trait produces same result as new().
#[test]
fn test_executor_default_trait() {
    let executor1 = Cic4Executor::<f64>::new();
    let executor2 = Cic4Executor::<f64>::default();

    assert_relative_eq!(executor1.scale, executor2.scale, epsilon = 1e-12);
    assert_eq!(executor1.compute_diagnostics, executor2.compute_diagnostics);
    assert_eq!(executor1.parallel, executor2.parallel);
}

/// Test the fluent builder methods.
#[test]
fn test_executor_builder_methods() {
    let executor = Cic4Executor::<f64>::new()
        .scale(64.0)
        .compute_diagnostics(true)
        .parallel(true);

    assert_relative_eq!(executor.scale, 64.0, epsilon = 1e-12);
    assert!(executor.compute_diagnostics);
    assert!(executor.parallel);
}

// ============================================================================
// Config Tests
// ============================================================================

/// Test Cic4Config default constructor.
///
/// Verifies that default configuration values are set correctly.
#[test]
fn test_config_defaults() {
    let config = Cic4Config::<f64>::default();

    assert_relative_eq!(config.scale, 4294967296.0, epsilon = 1e-6);
    assert!(!config.compute_diagnostics);
    assert!(config.custom_convolve_pass.is_none());
    assert!(!config.parallel);
}

/// Test the default parameter constants.
#[test]
fn test_default_constants() {
    assert_eq!(DEFAULT_WINDOW_LOG2, 7);
    assert_eq!(DEFAULT_SCALE_BITS, 32);
    assert_relative_eq!(default_scale::<f64>(), 4294967296.0, epsilon = 1e-6);
}

/// Test power-of-two scale construction.
#[test]
fn test_scale_from_bits() {
    assert_eq!(scale_from_bits::<f64>(0), 1.0);
    assert_eq!(scale_from_bits::<f64>(1), 2.0);
    assert_eq!(scale_from_bits::<f64>(5), 32.0);
    assert_eq!(scale_from_bits::<f64>(32), 4294967296.0);
    assert_eq!(scale_from_bits::<f32>(10), 1024.0);
}

// ============================================================================
// Execution Tests
// ============================================================================

/// Test output lengths from a full run.
///
/// Both outputs cover the full convolution, `signal + kernel - 1` samples.
#[test]
fn test_run_output_lengths() {
    let kernel = CicKernel::<f64>::build(2).unwrap();
    let signal = vec![5.0; 40];

    let output = Cic4Executor::new().scale(2.0).run(kernel.taps(), &signal);

    let expected = 40 + kernel.len() - 1;
    assert_eq!(output.smoothed.len(), expected);
    assert_eq!(output.smoothed_scaled.len(), expected);
    assert!(output.diagnostics.is_none());
}

/// Test empty operands.
///
/// The executor itself tolerates empty inputs and returns empty outputs;
/// adapters reject them before reaching this point.
#[test]
fn test_run_empty_signal() {
    let kernel = CicKernel::<f64>::build(1).unwrap();
    let signal: Vec<f64> = vec![];

    let output = Cic4Executor::new().run(kernel.taps(), &signal);

    assert!(output.smoothed.is_empty());
    assert!(output.smoothed_scaled.is_empty());
    assert!(output.diagnostics.is_none());
}

/// Test that a scale-aligned constant signal survives both passes.
///
/// With every sample an exact multiple of the scale, quantization loses
/// nothing and the interior of both outputs matches the plateau.
#[test]
fn test_run_scale_aligned_plateau() {
    let kernel = CicKernel::<f64>::build(2).unwrap();
    let signal = vec![96.0; 50];

    let output = Cic4Executor::new().scale(32.0).run(kernel.taps(), &signal);

    // Kernel fully overlaps the plateau away from both ends
    let k = kernel.len();
    for i in (k - 1)..50 {
        assert_relative_eq!(output.smoothed[i], 96.0, epsilon = 1e-9);
        assert_relative_eq!(output.smoothed_scaled[i], 96.0, epsilon = 1e-9);
    }
}

/// Test that scale 1 with integer samples makes both passes identical.
///
/// Flooring integers at scale 1 is the identity, so the quantized pass sees
/// the very same operands.
#[test]
fn test_run_scale_one_integer_signal() {
    let kernel = CicKernel::<f64>::build(3).unwrap();
    let signal: Vec<f64> = (0..30).map(|i| ((i * 13) % 97) as f64).collect();

    let output = Cic4Executor::new().scale(1.0).run(kernel.taps(), &signal);

    assert_eq!(
        output.smoothed, output.smoothed_scaled,
        "Scale 1 on integer samples should leave the passes bit-identical"
    );
}

/// Test diagnostics attachment.
#[test]
fn test_run_with_diagnostics() {
    let kernel = CicKernel::<f64>::build(2).unwrap();
    let signal = vec![100.0; 30];

    let output = Cic4Executor::new()
        .scale(32.0)
        .compute_diagnostics(true)
        .run(kernel.taps(), &signal);

    let diag = output.diagnostics.expect("Diagnostics were requested");
    assert_relative_eq!(diag.scale, 32.0, epsilon = 1e-12);
    assert!(diag.max_abs_deviation >= 0.0);
    assert!(diag.within_scale(), "Plateau deviation should stay below the scale");
}

/// Test the config-based entry point against the fluent one.
#[test]
fn test_run_with_config_matches_fluent() {
    let kernel = CicKernel::<f64>::build(2).unwrap();
    let signal: Vec<f64> = (0..25).map(|i| (i as f64) * 10.0).collect();

    let config = Cic4Config {
        scale: 16.0,
        compute_diagnostics: false,
        custom_convolve_pass: None,
        parallel: false,
    };

    let from_config = Cic4Executor::run_with_config(kernel.taps(), &signal, config);
    let from_fluent = Cic4Executor::new().scale(16.0).run(kernel.taps(), &signal);

    assert_eq!(from_config.smoothed, from_fluent.smoothed);
    assert_eq!(from_config.smoothed_scaled, from_fluent.smoothed_scaled);
}

// ============================================================================
// Hook Tests
// ============================================================================

/// A convolution pass that delegates to the built-in routine.
fn delegating_pass(kernel: &[f64], signal: &[f64], out: &mut [f64]) {
    convolve_into(kernel, signal, out);
}

/// A convolution pass that writes a sentinel everywhere.
fn sentinel_pass(_kernel: &[f64], _signal: &[f64], out: &mut [f64]) {
    for slot in out.iter_mut() {
        *slot = 42.0;
    }
}

/// Test that a delegating custom pass reproduces the built-in results.
#[test]
fn test_custom_pass_delegating() {
    let kernel = CicKernel::<f64>::build(2).unwrap();
    let signal: Vec<f64> = (0..20).map(|i| (i as f64).powi(2)).collect();

    let built_in = Cic4Executor::new().scale(4.0).run(kernel.taps(), &signal);
    let hooked = Cic4Executor::new()
        .scale(4.0)
        .custom_convolve_pass(Some(delegating_pass))
        .run(kernel.taps(), &signal);

    assert_eq!(built_in.smoothed, hooked.smoothed);
    assert_eq!(built_in.smoothed_scaled, hooked.smoothed_scaled);
}

/// Test that the engine actually dispatches through the custom pass.
#[test]
fn test_custom_pass_dispatch() {
    let kernel = CicKernel::<f64>::build(1).unwrap();
    let signal = vec![1.0, 2.0, 3.0];

    let output = Cic4Executor::new()
        .scale(2.0)
        .custom_convolve_pass(Some(sentinel_pass))
        .run(kernel.taps(), &signal);

    assert!(output.smoothed.iter().all(|&v| v == 42.0));
    // The quantized pass runs through the same hook, then rescales
    assert!(output.smoothed_scaled.iter().all(|&v| v == 84.0));
}
