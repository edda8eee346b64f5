//! High-level API for CIC4 filtering with parallel execution support.
//!
//! ## Purpose
//!
//! This module provides the primary user-facing entry point for CIC4 with
//! heavy-duty parallel execution capabilities. It extends the `cic4` API
//! with an adapter that utilizes all available CPU cores.
//!
//! ## Design notes
//!
//! * **Fluent Integration**: Re-uses the base `cic4` builder pattern.
//! * **Parallel-First**: Defaults to parallel execution where beneficial.
//! * **Transparent**: The marker type (Batch) selects the parallel builder.
//!
//! ## Key concepts
//!
//! * **Parallel Support**: Uses `rayon` for data-parallel convolution.
//! * **Extended Adapter**: Wraps the core batch adapter with parallel
//!   execution logic.
//! * **Feature-Gated**: Parallelism is configurable via crate features.
//!
//! ### Configuration Flow
//!
//! 1. Create a [`Cic4Builder`] via `Cic4::new()`.
//! 2. Chain configuration methods (`.window_log2()`, `.scale_bits()`, etc.).
//! 3. Select an adapter via `.adapter(Batch)` to get a parallel execution builder.

// External dependencies
use num_traits::Float;

// Import base marker types for delegation
use cic4::internals::api::Batch as BaseBatch;

// Internal dependencies
use crate::adapters::batch::ParallelBatchCic4Builder;

// Publicly re-exported types
pub use cic4::internals::api::{Cic4Adapter, Cic4Builder};
pub use cic4::internals::engine::output::Cic4Result;
pub use cic4::internals::evaluation::diagnostics::Diagnostics;
pub use cic4::internals::math::kernel::{CicKernel, MAX_WINDOW_LOG2, MIN_WINDOW_LOG2};
pub use cic4::internals::primitives::errors::Cic4Error;
pub use crate::input::parse_signal;

// ============================================================================
// Adapter Module
// ============================================================================

/// Adapter selection namespace.
#[allow(non_snake_case)]
pub mod Adapter {
    pub use super::Batch;
}

// ============================================================================
// Adapter Marker Types
// ============================================================================

/// Marker for parallel in-memory batch processing.
#[derive(Debug, Clone, Copy)]
pub struct Batch;

impl<T: Float> Cic4Adapter<T> for Batch {
    type Output = ParallelBatchCic4Builder<T>;

    fn convert(builder: Cic4Builder<T>) -> Self::Output {
        // Determine parallel mode: user choice OR default to true for fastcic4 Batch
        let parallel = builder.parallel.unwrap_or(true);

        // Delegate to base implementation to create base builder
        let mut base = <BaseBatch as Cic4Adapter<T>>::convert(builder);
        base = base.parallel(parallel);

        // Wrap with extension fields
        ParallelBatchCic4Builder { base }
    }
}
