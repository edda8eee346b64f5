//! Parallel execution engine for CIC4 convolution passes.
//!
//! ## Purpose
//!
//! This module provides the parallel convolution pass that is injected into
//! the `cic4` crate's execution engine. It enables multi-threaded evaluation
//! of the output taps, significantly speeding up filtering for long signals
//! and wide kernels by utilizing all available CPU cores.
//!
//! ## Design notes
//!
//! * **Implementation**: Provides a drop-in replacement for the sequential
//!   convolution pass.
//! * **Parallelism**: Uses `rayon` for data-parallel execution across CPU
//!   cores.
//! * **Determinism**: Each output index is computed by the same shared
//!   dot-product routine as the sequential pass, so parallel output is
//!   bit-identical to sequential output.
//! * **Generics**: Generic over `Float` types.
//!
//! ## Key concepts
//!
//! * **Per-Tap Distribution**: Output indices are independent, so they are
//!   distributed across CPU cores without coordination.
//! * **Tile Processing**: For long outputs, adjacent indices are grouped into
//!   tiles so each task reads an overlapping signal window while it is hot
//!   in cache.
//! * **Integration**: Plugs into the `cic4` executor via the
//!   `ConvolvePassFn` hook.
//!
//! ## Invariants
//!
//! * The output buffer has length `kernel.len() + signal.len() - 1`.
//! * Every output slot is written exactly once.
//!
//! ## Non-goals
//!
//! * This module does not handle quantization or rescaling (handled by
//!   `cic4::executor`).
//! * This module does not validate input data (handled by `validator`).

// Feature-gated imports
#[cfg(feature = "cpu")]
use rayon::prelude::*;

// External dependencies
use num_traits::Float;

// Export dependencies from cic4 crate
use cic4::internals::math::convolve::{DotProduct, convolve_tap};

// ============================================================================
// Parallel Convolution Pass
// ============================================================================

/// Perform one full convolution pass with output taps computed in parallel.
///
/// Drop-in replacement for the sequential pass in `cic4`: same operand
/// order, same output length, same per-tap accumulation.
#[cfg(feature = "cpu")]
pub fn convolve_pass_parallel<T>(kernel: &[T], signal: &[T], out: &mut [T])
where
    T: Float + DotProduct + Send + Sync,
{
    if kernel.is_empty() || signal.is_empty() {
        return;
    }

    debug_assert_eq!(out.len(), kernel.len() + signal.len() - 1);

    // The reversal is shared across all tasks, matching the sequential pass.
    let kernel_rev: Vec<T> = kernel.iter().rev().copied().collect();

    // Tile size chosen so a task's signal window stays in L2 cache (~256KB);
    // tiling only pays off once there are enough taps to amortize it.
    const TILE_SIZE: usize = 8192;
    const USE_TILING_THRESHOLD: usize = 50_000;

    if out.len() >= USE_TILING_THRESHOLD {
        // Tile-based processing: adjacent taps share most of their window
        let tiles: Vec<&mut [T]> = out.chunks_mut(TILE_SIZE).collect();

        tiles
            .into_par_iter()
            .enumerate()
            .for_each(|(tile_idx, tile)| {
                let tile_start = tile_idx * TILE_SIZE;

                for (local_k, slot) in tile.iter_mut().enumerate() {
                    *slot = convolve_tap(&kernel_rev, signal, tile_start + local_k);
                }
            });
    } else {
        // Standard parallel processing: one task per output tap
        out.par_iter_mut().enumerate().for_each(|(k, slot)| {
            *slot = convolve_tap(&kernel_rev, signal, k);
        });
    }
}
