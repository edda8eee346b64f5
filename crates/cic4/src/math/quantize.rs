//! Fixed-point quantization helpers.
//!
//! ## Purpose
//!
//! This module models the precision loss of a fixed-point pipeline: samples
//! are floor-divided by a scale factor before filtering, and the filtered
//! result is multiplied back by the same scale for comparison against the
//! full-precision pass.
//!
//! ## Design notes
//!
//! * **Floor, not truncation**: Division rounds toward negative infinity.
//!   The two agree for the non-negative signals the reference data uses, but
//!   diverge for negative samples, and floor is what the operation's
//!   mathematical definition names.
//! * **Same element type**: Quantized values stay in `T`; they are exact
//!   integers by construction but keeping the float type lets both passes
//!   share the convolution path.
//!
//! ## Key concepts
//!
//! * **Quantize**: `floor(sample / scale)` per element, emulating a pipeline
//!   that discards `log2(scale)` low-order bits.
//! * **Rescale**: Multiply filtered values by `scale` to restore the original
//!   magnitude.
//!
//! ## Invariants
//!
//! * Quantized output has the same length and order as the input.
//! * For any sample `s`: `quantize([s])[0] * scale` differs from `s` by less
//!   than `scale`.
//!
//! ## Non-goals
//!
//! * This module does not validate the scale factor (handled by `validator`).
//! * This module does not convolve (handled by `convolve`).

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use num_traits::Float;

// ============================================================================
// Quantization
// ============================================================================

/// Floor-divide every sample by `scale`.
#[inline]
pub fn quantize<T: Float>(signal: &[T], scale: T) -> Vec<T> {
    signal.iter().map(|&sample| (sample / scale).floor()).collect()
}

/// Multiply every value by `scale` in place, restoring signal magnitude.
#[inline]
pub fn rescale<T: Float>(values: &mut [T], scale: T) {
    for value in values.iter_mut() {
        *value = *value * scale;
    }
}
