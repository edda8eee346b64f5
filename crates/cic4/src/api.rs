//! High-level API for CIC4 filtering.
//!
//! ## Purpose
//!
//! This module provides the primary user-facing entry point for the filter.
//! It implements a fluent builder pattern for configuring kernel and
//! quantization parameters and choosing an execution adapter.
//!
//! ## Design notes
//!
//! * **Ergonomic**: Fluent builder with sensible defaults for all parameters.
//! * **Polymorphic**: Uses marker types to transition to specialized adapter builders.
//! * **Validated**: Core parameters are validated during adapter construction.
//! * **Type-Safe**: Generic over `Float` types for flexible precision.
//!
//! ## Key concepts
//!
//! * **Execution Adapters**: Batch mode for in-memory signals.
//! * **Configuration Flow**: Builder pattern ending in `.adapter(Adapter::Type)`.
//! * **Validation**: Parameters are validated when `.build()` is called on the adapter.
//!
//! ### Configuration Flow
//!
//! 1. Create a [`Cic4Builder`] via `Cic4::new()`.
//! 2. Chain configuration methods (`.window_log2()`, `.scale_bits()`, etc.).
//! 3. Select an adapter via `.adapter(Adapter::Batch)` to get an execution builder.

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::adapters::batch::BatchCic4Builder;
use crate::engine::executor::{ConvolvePassFn, scale_from_bits};

// Publicly re-exported types
pub use crate::engine::output::Cic4Result;
pub use crate::evaluation::diagnostics::Diagnostics;
pub use crate::math::kernel::{CicKernel, MAX_WINDOW_LOG2, MIN_WINDOW_LOG2};
pub use crate::primitives::errors::Cic4Error;

/// Marker types for selecting execution adapters.
#[allow(non_snake_case)]
pub mod Adapter {
    pub use super::Batch;
}

/// Fluent builder for configuring CIC4 parameters and execution modes.
#[derive(Debug, Clone)]
pub struct Cic4Builder<T> {
    /// Base-2 logarithm of the boxcar width.
    pub window_log2: Option<u32>,

    /// Quantization scale factor.
    pub scale: Option<T>,

    /// Enable deviation diagnostics.
    pub return_diagnostics: Option<bool>,

    // ======================================
    // DEV
    // ======================================
    /// Custom convolution pass function.
    #[doc(hidden)]
    pub custom_convolve_pass: Option<ConvolvePassFn<T>>,

    /// Parallel execution hint.
    #[doc(hidden)]
    pub parallel: Option<bool>,

    /// Tracks if any parameter was set multiple times (for validation).
    #[doc(hidden)]
    pub duplicate_param: Option<&'static str>,
}

impl<T: Float> Default for Cic4Builder<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Float> Cic4Builder<T> {
    /// Select an execution adapter to transition to an execution builder.
    pub fn adapter<A>(self, _adapter: A) -> A::Output
    where
        A: Cic4Adapter<T>,
    {
        A::convert(self)
    }

    /// Create a new builder with default settings.
    pub fn new() -> Self {
        Self {
            window_log2: None,
            scale: None,
            return_diagnostics: None,
            custom_convolve_pass: None,
            parallel: None,
            duplicate_param: None,
        }
    }

    /// Set the base-2 logarithm of the boxcar width.
    ///
    /// The kernel has `4 * 2^window_log2 - 3` taps.
    pub fn window_log2(mut self, window_log2: u32) -> Self {
        if self.window_log2.is_some() {
            self.duplicate_param = Some("window_log2");
        }
        self.window_log2 = Some(window_log2);
        self
    }

    /// Set the quantization scale factor directly.
    ///
    /// Conflicts with [`scale_bits`](Self::scale_bits); setting both is
    /// rejected at build time.
    pub fn scale(mut self, scale: T) -> Self {
        if self.scale.is_some() {
            self.duplicate_param = Some("scale");
        }
        self.scale = Some(scale);
        self
    }

    /// Set the quantization scale factor as a power of two, `2^bits`.
    ///
    /// Conflicts with [`scale`](Self::scale); setting both is rejected at
    /// build time.
    pub fn scale_bits(mut self, bits: u32) -> Self {
        if self.scale.is_some() {
            self.duplicate_param = Some("scale");
        }
        self.scale = Some(scale_from_bits(bits));
        self
    }

    /// Include deviation diagnostics in output.
    pub fn return_diagnostics(mut self) -> Self {
        self.return_diagnostics = Some(true);
        self
    }

    // ==========================
    // Development Options
    // ==========================

    /// Set a custom convolution pass function for execution (only for dev)
    #[doc(hidden)]
    pub fn custom_convolve_pass(mut self, pass: ConvolvePassFn<T>) -> Self {
        self.custom_convolve_pass = Some(pass);
        self
    }

    /// Set parallel execution hint (only for dev)
    #[doc(hidden)]
    pub fn parallel(mut self, parallel: bool) -> Self {
        self.parallel = Some(parallel);
        self
    }
}

/// Trait for transitioning from a generic builder to an execution builder.
pub trait Cic4Adapter<T: Float> {
    /// The output execution builder.
    type Output;

    /// Convert a generic [`Cic4Builder`] into a specialized execution builder.
    fn convert(builder: Cic4Builder<T>) -> Self::Output;
}

/// Marker for in-memory batch processing.
#[derive(Debug, Clone, Copy)]
pub struct Batch;

impl<T: Float> Cic4Adapter<T> for Batch {
    type Output = BatchCic4Builder<T>;

    fn convert(builder: Cic4Builder<T>) -> Self::Output {
        let mut result = BatchCic4Builder::default();

        if let Some(window_log2) = builder.window_log2 {
            result.window_log2 = window_log2;
        }
        if let Some(scale) = builder.scale {
            result.scale = scale;
        }
        if let Some(rd) = builder.return_diagnostics {
            result.return_diagnostics = rd;
        }

        // ======================================
        // DEV
        // ======================================
        if let Some(cp) = builder.custom_convolve_pass {
            result.custom_convolve_pass = Some(cp);
        }
        if let Some(p) = builder.parallel {
            result.parallel = Some(p);
        }

        result.duplicate_param = builder.duplicate_param;

        result
    }
}
