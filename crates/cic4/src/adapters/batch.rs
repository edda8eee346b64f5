//! Batch adapter for standard CIC4 filtering.
//!
//! ## Purpose
//!
//! This module provides the batch execution adapter for CIC4 smoothing.
//! It builds the kernel once, handles complete signals in memory, and runs
//! both filter passes sequentially, making it suitable for small to
//! medium-sized signals.
//!
//! ## Design notes
//!
//! * **Processing**: Processes the entire signal in a single call.
//! * **Kernel Reuse**: The kernel is built at `build()` time and shared
//!   across `filter()` calls.
//! * **Delegation**: Delegates computation to the execution engine.
//! * **Generics**: Generic over `Float` types.
//!
//! ## Key concepts
//!
//! * **Batch Processing**: Validates, builds the kernel, executes, and
//!   packages results.
//! * **Builder Pattern**: Fluent API for configuration with sensible defaults.
//! * **Full Convolution**: Outputs extend past both ends of the signal.
//!
//! ## Invariants
//!
//! * The signal must be non-empty with all values finite.
//! * `window_log2` must lie in the supported range.
//! * The scale factor must be finite and at least 1.
//! * Output length is `signal.len() + kernel.len() - 1`.
//!
//! ## Non-goals
//!
//! * This adapter does not handle streaming data.
//! * This adapter does not handle missing values.

// External dependencies
use core::fmt::Debug;
use num_traits::Float;

// Internal dependencies
use crate::engine::executor::{
    Cic4Config, Cic4Executor, ConvolvePassFn, DEFAULT_WINDOW_LOG2, default_scale,
};
use crate::engine::output::Cic4Result;
use crate::engine::validator::Validator;
use crate::math::convolve::DotProduct;
use crate::math::kernel::CicKernel;
use crate::primitives::errors::Cic4Error;

// ============================================================================
// Batch CIC4 Builder
// ============================================================================

/// Builder for batch CIC4 processor.
#[derive(Debug, Clone)]
pub struct BatchCic4Builder<T: Float> {
    /// Base-2 logarithm of the boxcar width
    pub window_log2: u32,

    /// Quantization scale factor
    pub scale: T,

    /// Whether to compute deviation diagnostics
    pub return_diagnostics: bool,

    /// Deferred error from adapter conversion
    pub deferred_error: Option<Cic4Error>,

    // ++++++++++++++++++++++++++++++++++++++
    // +               DEV                  +
    // ++++++++++++++++++++++++++++++++++++++
    /// Custom convolution pass function.
    #[doc(hidden)]
    pub custom_convolve_pass: Option<ConvolvePassFn<T>>,

    /// Parallel execution hint.
    #[doc(hidden)]
    pub parallel: Option<bool>,

    /// Tracks if any parameter was set multiple times (for validation)
    #[doc(hidden)]
    pub(crate) duplicate_param: Option<&'static str>,
}

impl<T: Float> Default for BatchCic4Builder<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Float> BatchCic4Builder<T> {
    /// Create a new batch CIC4 builder with default parameters.
    fn new() -> Self {
        Self {
            window_log2: DEFAULT_WINDOW_LOG2,
            scale: default_scale(),
            return_diagnostics: false,
            deferred_error: None,
            custom_convolve_pass: None,
            parallel: None,
            duplicate_param: None,
        }
    }

    // ========================================================================
    // Shared Setters
    // ========================================================================

    /// Set the base-2 logarithm of the boxcar width.
    pub fn window_log2(mut self, window_log2: u32) -> Self {
        self.window_log2 = window_log2;
        self
    }

    /// Set the quantization scale factor.
    pub fn scale(mut self, scale: T) -> Self {
        self.scale = scale;
        self
    }

    /// Enable returning diagnostics in the result.
    pub fn return_diagnostics(mut self, enabled: bool) -> Self {
        self.return_diagnostics = enabled;
        self
    }

    // ++++++++++++++++++++++++++++++++++++++
    // +               DEV                  +
    // ++++++++++++++++++++++++++++++++++++++

    /// Set parallel execution hint.
    #[doc(hidden)]
    pub fn parallel(mut self, parallel: bool) -> Self {
        self.parallel = Some(parallel);
        self
    }

    /// Set a custom convolution pass function.
    #[doc(hidden)]
    pub fn custom_convolve_pass(mut self, pass: ConvolvePassFn<T>) -> Self {
        self.custom_convolve_pass = Some(pass);
        self
    }

    // ========================================================================
    // Build Method
    // ========================================================================

    /// Build the batch processor.
    pub fn build(self) -> Result<BatchCic4<T>, Cic4Error>
    where
        T: DotProduct,
    {
        if let Some(err) = self.deferred_error {
            return Err(err);
        }

        // Check for duplicate parameter configuration
        Validator::validate_no_duplicates(self.duplicate_param)?;

        // Validate window exponent
        Validator::validate_window_log2(self.window_log2)?;

        // Validate scale factor
        Validator::validate_scale(self.scale)?;

        // The kernel is fully determined by the window exponent, so it is
        // built once here and reused for every signal.
        let kernel = CicKernel::build(self.window_log2)?;

        Ok(BatchCic4 {
            config: self,
            kernel,
        })
    }
}

// ============================================================================
// Batch CIC4 Processor
// ============================================================================

/// Batch CIC4 processor.
pub struct BatchCic4<T: Float> {
    config: BatchCic4Builder<T>,
    kernel: CicKernel<T>,
}

impl<T: Float> BatchCic4<T> {
    /// Access the kernel built for this processor.
    pub fn kernel(&self) -> &CicKernel<T> {
        &self.kernel
    }
}

impl<T: Float + DotProduct + Debug + Send + Sync + 'static> BatchCic4<T> {
    /// Run both filter passes on the provided signal.
    pub fn filter(&self, signal: &[T]) -> Result<Cic4Result<T>, Cic4Error> {
        Validator::validate_signal(signal)?;

        // Configure batch execution
        let config = Cic4Config {
            scale: self.config.scale,
            compute_diagnostics: self.config.return_diagnostics,
            // ++++++++++++++++++++++++++++++++++++++
            // +               DEV                  +
            // ++++++++++++++++++++++++++++++++++++++
            custom_convolve_pass: self.config.custom_convolve_pass,
            parallel: self.config.parallel.unwrap_or(false),
        };

        // Execute both passes through the unified engine
        let result = Cic4Executor::run_with_config(self.kernel.taps(), signal, config);

        Ok(Cic4Result {
            signal: signal.to_vec(),
            smoothed: result.smoothed,
            smoothed_scaled: result.smoothed_scaled,
            kernel_len: self.kernel.len(),
            window_log2: self.kernel.window_log2(),
            scale: self.config.scale,
            diagnostics: result.diagnostics,
        })
    }

    /// Build, filter, and discard the processor in one call.
    pub fn filter_once(
        signal: &[T],
        window_log2: u32,
        scale: T,
    ) -> Result<Cic4Result<T>, Cic4Error> {
        BatchCic4Builder::default()
            .window_log2(window_log2)
            .scale(scale)
            .build()?
            .filter(signal)
    }
}
