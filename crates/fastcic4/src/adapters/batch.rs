//! Batch adapter for standard CIC4 filtering.
//!
//! ## Purpose
//!
//! This module provides the batch execution adapter for CIC4 filtering.
//! It handles complete signals in memory with optional parallel processing,
//! making it suitable for long telemetry captures and wide kernels.
//!
//! ## Design notes
//!
//! * **Processing**: Processes the entire signal in a single call.
//! * **Delegation**: Delegates validation and execution to the `cic4` crate.
//! * **Parallelism**: Adds parallel execution via `rayon` (fastcic4
//!   extension).
//! * **Generics**: Generic over `Float` types.
//!
//! ## Key concepts
//!
//! * **Batch Processing**: Validates, builds the kernel, executes both
//!   passes, and packages results.
//! * **Builder Pattern**: Fluent API for configuration with sensible
//!   defaults.
//! * **Parallel Execution**: Injects the rayon convolution pass into the
//!   core engine.
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

// Feature-gated imports
#[cfg(feature = "cpu")]
use crate::engine::executor::convolve_pass_parallel;

// External dependencies
use num_traits::Float;
use std::fmt::Debug;
use std::result::Result;

// Export dependencies from cic4 crate
use cic4::internals::adapters::batch::BatchCic4Builder;
use cic4::internals::engine::output::Cic4Result;
use cic4::internals::math::convolve::DotProduct;
use cic4::internals::primitives::errors::Cic4Error;

// Internal dependencies
use crate::input::SignalInput;

// ============================================================================
// Extended Batch CIC4 Builder
// ============================================================================

/// Builder for batch CIC4 processor with parallel support.
#[derive(Debug, Clone)]
pub struct ParallelBatchCic4Builder<T: Float> {
    /// Base builder from the cic4 crate
    pub base: BatchCic4Builder<T>,
}

impl<T: Float> Default for ParallelBatchCic4Builder<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Float> ParallelBatchCic4Builder<T> {
    /// Create a new batch CIC4 builder with default parameters.
    ///
    /// # Defaults
    ///
    /// * All base parameters from the cic4 `BatchCic4Builder`
    /// * parallel: true (fastcic4 extension)
    fn new() -> Self {
        let base = BatchCic4Builder::default().parallel(true); // Default to parallel in fastcic4
        Self { base }
    }

    /// Set parallel execution mode.
    pub fn parallel(mut self, parallel: bool) -> Self {
        self.base = self.base.parallel(parallel);
        self
    }

    // ========================================================================
    // Shared Setters
    // ========================================================================

    /// Set the base-2 logarithm of the boxcar width.
    pub fn window_log2(mut self, window_log2: u32) -> Self {
        self.base = self.base.window_log2(window_log2);
        self
    }

    /// Set the quantization scale factor.
    pub fn scale(mut self, scale: T) -> Self {
        self.base = self.base.scale(scale);
        self
    }

    /// Enable returning diagnostics in the result.
    pub fn return_diagnostics(mut self, enabled: bool) -> Self {
        self.base = self.base.return_diagnostics(enabled);
        self
    }

    // ========================================================================
    // Build Method
    // ========================================================================

    /// Build the batch processor.
    pub fn build(self) -> Result<ParallelBatchCic4<T>, Cic4Error>
    where
        T: DotProduct,
    {
        // Check for deferred errors from adapter conversion
        if let Some(ref err) = self.base.deferred_error {
            return Err(err.clone());
        }

        // Validate by attempting to build the base processor
        // This reuses the validation logic centralized in the cic4 crate
        let _ = self.base.clone().build()?;

        Ok(ParallelBatchCic4 { config: self })
    }
}

// ============================================================================
// Extended Batch CIC4 Processor
// ============================================================================

/// Batch CIC4 processor with parallel support.
pub struct ParallelBatchCic4<T: Float> {
    config: ParallelBatchCic4Builder<T>,
}

impl<T: Float + DotProduct + Debug + Send + Sync + 'static> ParallelBatchCic4<T> {
    /// Run both filter passes on the provided signal.
    pub fn filter<I>(self, signal: &I) -> Result<Cic4Result<T>, Cic4Error>
    where
        I: SignalInput<T> + ?Sized,
    {
        let signal = signal.as_cic4_signal()?;

        // Configure the base builder with the parallel callback if enabled
        let mut builder = self.config.base;

        #[cfg(feature = "cpu")]
        {
            if builder.parallel.unwrap_or(true) {
                builder = builder.custom_convolve_pass(convolve_pass_parallel);
            } else {
                // Reset - it is None by default
                // but explicitly clearing just in case
                builder.custom_convolve_pass = None;
            }
        }
        #[cfg(not(feature = "cpu"))]
        {
            // Fallback to sequential if cpu feature is disabled
            builder.custom_convolve_pass = None;
        }

        // Delegate execution to the base implementation
        let processor = builder.build()?;
        processor.filter(&signal)
    }
}
