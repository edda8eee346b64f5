//! CIC kernel construction.
//!
//! ## Purpose
//!
//! This module builds the normalized CIC4 smoothing kernel: a boxcar of
//! `2^window_log2` ones, convolved with itself, the result convolved with
//! itself again, and the final sequence divided by its element sum.
//!
//! ## Design notes
//!
//! * **Gaussian approximation**: Four cascaded boxcar stages approximate a
//!   Gaussian low-pass response using only integer-coefficient building
//!   blocks, which is what a fixed-point hardware pipeline can afford.
//! * **Pure function**: The taps depend on `window_log2` alone; building the
//!   same width twice yields bit-identical sequences.
//! * **Shared primitive**: Both self-convolutions go through
//!   [`convolve`](crate::math::convolve::convolve), the same routine the
//!   filter engine uses on signals.
//!
//! ## Key concepts
//!
//! * **Boxcar**: `2^window_log2` samples of value 1, the moving-average seed.
//! * **Stage doubling**: `stage2 = boxcar * boxcar`, `taps = stage2 * stage2`
//!   (discrete convolution), hence "4 stages".
//! * **Normalization**: Dividing by the tap sum makes the filter
//!   unity-gain at DC, so plateaus pass through unchanged.
//!
//! ## Invariants
//!
//! * Tap count is `4 * 2^window_log2 - 3`.
//! * Taps sum to 1 within ~1e-9 relative tolerance.
//! * Taps are symmetric: `taps[i] == taps[len - 1 - i]`.
//! * All taps are strictly positive.
//!
//! ## Non-goals
//!
//! * This module does not apply the kernel to signals (handled by `executor`).
//! * This module does not cache built kernels across invocations.

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
use num_traits::Float;

// Internal dependencies
use crate::math::convolve::{DotProduct, convolve};
use crate::primitives::errors::Cic4Error;

// ============================================================================
// Width Bounds
// ============================================================================

/// Smallest accepted base-2 logarithm of the boxcar width.
///
/// Width 0 would give the degenerate single-tap identity kernel, which
/// smooths nothing; it is rejected rather than silently passed through.
pub const MIN_WINDOW_LOG2: u32 = 1;

/// Largest accepted base-2 logarithm of the boxcar width.
///
/// Width 16 already produces 262,141 taps; anything wider stops being a
/// tractable FIR smoother.
pub const MAX_WINDOW_LOG2: u32 = 16;

// ============================================================================
// Kernel Type
// ============================================================================

/// Normalized CIC4 smoothing kernel.
///
/// Immutable once built; owned by the invocation that built it.
#[derive(Debug, Clone, PartialEq)]
pub struct CicKernel<T> {
    /// Normalized taps, symmetric, summing to 1.
    taps: Vec<T>,

    /// Width exponent the kernel was built from.
    window_log2: u32,
}

impl<T: DotProduct> CicKernel<T> {
    /// Build the kernel for a boxcar of length `2^window_log2`.
    ///
    /// # Errors
    ///
    /// Returns [`Cic4Error::InvalidWindowLog2`] when `window_log2` is outside
    /// [`MIN_WINDOW_LOG2`]`..=`[`MAX_WINDOW_LOG2`].
    pub fn build(window_log2: u32) -> Result<Self, Cic4Error> {
        if !(MIN_WINDOW_LOG2..=MAX_WINDOW_LOG2).contains(&window_log2) {
            return Err(Cic4Error::InvalidWindowLog2 {
                got: window_log2,
                min: MIN_WINDOW_LOG2,
                max: MAX_WINDOW_LOG2,
            });
        }

        let width = 1usize << window_log2;
        let boxcar = vec![T::one(); width];

        let stage2 = convolve(&boxcar, &boxcar);
        let mut taps = convolve(&stage2, &stage2);

        let sum = taps.iter().fold(T::zero(), |acc, &tap| acc + tap);
        for tap in taps.iter_mut() {
            *tap = *tap / sum;
        }

        Ok(Self { taps, window_log2 })
    }
}

impl<T: Float> CicKernel<T> {
    // ========================================================================
    // Accessors
    // ========================================================================

    /// Normalized taps.
    pub fn taps(&self) -> &[T] {
        &self.taps
    }

    /// Number of taps (`4 * 2^window_log2 - 3`).
    pub fn len(&self) -> usize {
        self.taps.len()
    }

    /// Whether the kernel has no taps.
    pub fn is_empty(&self) -> bool {
        self.taps.is_empty()
    }

    /// Width exponent the kernel was built from.
    pub fn window_log2(&self) -> u32 {
        self.window_log2
    }

    /// Sum of all taps (≈ 1 after normalization).
    pub fn sum(&self) -> T {
        self.taps.iter().fold(T::zero(), |acc, &tap| acc + tap)
    }
}
