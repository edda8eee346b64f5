//! Execution engine for the two-pass CIC4 filter.
//!
//! ## Purpose
//!
//! This module provides the execution engine that runs a built kernel over
//! a signal twice: once at full precision and once after quantization, with
//! the second result rescaled for direct comparison. It is the single place
//! where the two passes are sequenced, so they can never diverge in edge
//! handling.
//!
//! ## Design notes
//!
//! * Provides both configuration-based and parameter-based entry points.
//! * Accepts a custom convolution pass so extension crates can substitute a
//!   parallel implementation without touching the orchestration.
//! * Computes deviation diagnostics on request, after both passes finish.
//! * Generic over `Float` types to support f32 and f64.
//!
//! ## Invariants
//!
//! * Both outputs have length `signal.len() + kernel.len() - 1`.
//! * The quantized pass runs over `floor(signal / scale)` and is multiplied
//!   back by `scale` element-wise before being returned.
//! * A custom pass receives exactly the same operands as the built-in pass
//!   and must fill the whole output buffer.
//!
//! ## Non-goals
//!
//! * This module does not validate input data (handled by `validator`).
//! * This module does not build kernels (handled by `kernel`).
//! * This module does not provide public-facing result formatting.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec;
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use core::fmt::Debug;
use num_traits::Float;

// Internal dependencies
use crate::evaluation::diagnostics::Diagnostics;
use crate::math::convolve::{DotProduct, convolve_into};
use crate::math::quantize::{quantize, rescale};

// ============================================================================
// Defaults
// ============================================================================

/// Default base-2 logarithm of the boxcar width (boxcar length 128).
pub const DEFAULT_WINDOW_LOG2: u32 = 7;

/// Default number of low-order bits discarded by quantization
/// (scale `2^32`).
pub const DEFAULT_SCALE_BITS: u32 = 32;

// ============================================================================
// Type Definitions
// ============================================================================

/// Signature for a custom convolution pass function.
#[doc(hidden)]
pub type ConvolvePassFn<T> = fn(
    &[T],     // kernel taps
    &[T],     // signal
    &mut [T], // output (full convolution length)
);

/// Output from filter execution.
#[derive(Debug, Clone)]
pub struct ExecutorOutput<T> {
    /// Full-precision convolution of kernel and signal.
    pub smoothed: Vec<T>,

    /// Convolution of kernel and quantized signal, rescaled by the scale
    /// factor.
    pub smoothed_scaled: Vec<T>,

    /// Deviation metrics between the two outputs (if requested).
    pub diagnostics: Option<Diagnostics<T>>,
}

// ============================================================================
// Configuration
// ============================================================================

/// Configuration for filter execution.
#[derive(Debug, Clone)]
pub struct Cic4Config<T> {
    /// Quantization scale factor (finite, >= 1).
    pub scale: T,

    /// Whether to compute deviation diagnostics after the passes.
    pub compute_diagnostics: bool,

    // ++++++++++++++++++++++++++++++++++++++
    // +               DEV                  +
    // ++++++++++++++++++++++++++++++++++++++
    /// Custom convolution pass function (enables parallel execution).
    #[doc(hidden)]
    pub custom_convolve_pass: Option<ConvolvePassFn<T>>,

    /// Whether to use parallel execution.
    #[doc(hidden)]
    pub parallel: bool,
}

impl<T: Float> Default for Cic4Config<T> {
    fn default() -> Self {
        Self {
            scale: default_scale(),
            compute_diagnostics: false,
            custom_convolve_pass: None,
            parallel: false,
        }
    }
}

/// Default scale factor, `2^DEFAULT_SCALE_BITS`, in the working float type.
pub fn default_scale<T: Float>() -> T {
    scale_from_bits(DEFAULT_SCALE_BITS)
}

/// Scale factor `2^bits` in the working float type.
///
/// Powers of two are exactly representable in every IEEE float type this
/// crate is used with, so the conversion never rounds.
pub fn scale_from_bits<T: Float>(bits: u32) -> T {
    let two = T::one() + T::one();
    let mut scale = T::one();
    for _ in 0..bits {
        scale = scale * two;
    }
    scale
}

// ============================================================================
// Executor
// ============================================================================

/// Unified executor for the two-pass filter.
#[derive(Debug, Clone)]
pub struct Cic4Executor<T: Float> {
    /// Quantization scale factor.
    pub scale: T,

    /// Whether to compute deviation diagnostics.
    pub compute_diagnostics: bool,

    // ++++++++++++++++++++++++++++++++++++++
    // +               DEV                  +
    // ++++++++++++++++++++++++++++++++++++++
    /// Custom convolution pass function (e.g., for parallel execution).
    #[doc(hidden)]
    pub custom_convolve_pass: Option<ConvolvePassFn<T>>,

    /// Whether to use parallel execution.
    #[doc(hidden)]
    pub parallel: bool,
}

impl<T: Float> Default for Cic4Executor<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Float> Cic4Executor<T> {
    // ========================================================================
    // Constructor and Builder Methods
    // ========================================================================

    /// Create a new executor with default parameters.
    pub fn new() -> Self {
        Self {
            scale: default_scale(),
            compute_diagnostics: false,
            custom_convolve_pass: None,
            parallel: false,
        }
    }

    /// Set the quantization scale factor.
    pub fn scale(mut self, scale: T) -> Self {
        self.scale = scale;
        self
    }

    /// Enable or disable deviation diagnostics.
    pub fn compute_diagnostics(mut self, enabled: bool) -> Self {
        self.compute_diagnostics = enabled;
        self
    }

    /// Set a custom convolution pass function.
    #[doc(hidden)]
    pub fn custom_convolve_pass(mut self, pass: Option<ConvolvePassFn<T>>) -> Self {
        self.custom_convolve_pass = pass;
        self
    }

    /// Set the parallel execution hint.
    #[doc(hidden)]
    pub fn parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }
}

impl<T: Float + DotProduct + Debug> Cic4Executor<T> {
    // ========================================================================
    // Execution
    // ========================================================================

    /// Run both filter passes with an explicit configuration.
    pub fn run_with_config(
        kernel: &[T],
        signal: &[T],
        config: Cic4Config<T>,
    ) -> ExecutorOutput<T> {
        Self::new()
            .scale(config.scale)
            .compute_diagnostics(config.compute_diagnostics)
            .custom_convolve_pass(config.custom_convolve_pass)
            .parallel(config.parallel)
            .run(kernel, signal)
    }

    /// Run both filter passes.
    ///
    /// Inputs are assumed validated; empty operands yield empty outputs.
    pub fn run(&self, kernel: &[T], signal: &[T]) -> ExecutorOutput<T> {
        if kernel.is_empty() || signal.is_empty() {
            return ExecutorOutput {
                smoothed: Vec::new(),
                smoothed_scaled: Vec::new(),
                diagnostics: None,
            };
        }

        let out_len = signal.len() + kernel.len() - 1;

        // Pass 1: full precision
        let mut smoothed = vec![T::zero(); out_len];
        self.convolve_pass(kernel, signal, &mut smoothed);

        // Pass 2: quantize, convolve, rescale
        let quantized = quantize(signal, self.scale);
        let mut smoothed_scaled = vec![T::zero(); out_len];
        self.convolve_pass(kernel, &quantized, &mut smoothed_scaled);
        rescale(&mut smoothed_scaled, self.scale);

        let diagnostics = if self.compute_diagnostics {
            Some(Diagnostics::compute(
                &smoothed,
                &smoothed_scaled,
                self.scale,
            ))
        } else {
            None
        };

        ExecutorOutput {
            smoothed,
            smoothed_scaled,
            diagnostics,
        }
    }

    /// Run one convolution pass, dispatching to the custom pass if set.
    fn convolve_pass(&self, kernel: &[T], signal: &[T], out: &mut [T]) {
        if let Some(pass) = self.custom_convolve_pass {
            pass(kernel, signal, out);
        } else {
            convolve_into(kernel, signal, out);
        }
    }
}
