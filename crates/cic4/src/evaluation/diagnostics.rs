//! Deviation metrics between the full-precision and quantized passes.
//!
//! ## Purpose
//!
//! This module quantifies the error introduced by filtering the quantized
//! signal instead of the original: element-wise deviation statistics between
//! `smoothed` and `smoothed_scaled`, and their relation to the scale factor.
//!
//! ## Design notes
//!
//! * **Diagnostic, not a gate**: The engine never enforces a threshold; these
//!   numbers exist so callers and tests can assert their own bounds.
//! * **Scale-relative**: The interesting quantity is deviation divided by
//!   `scale`, since discarding `log2(scale)` bits bounds the per-sample
//!   quantization error by `scale`.
//! * **Generics**: All computations are generic over `Float` types.
//!
//! ## Key concepts
//!
//! * **Max/mean absolute deviation**: Worst-case and average drift.
//! * **RMS deviation**: Energy of the drift, less sensitive to single spikes.
//! * **Scale ratio**: `max_abs_deviation / scale`; near or below 1 for
//!   well-behaved plateau signals.
//!
//! ## Invariants
//!
//! * All deviation metrics are non-negative.
//! * `mean_abs_deviation <= max_abs_deviation`.
//! * Metrics are computed over `min(len_a, len_b)` elements (the engine
//!   always produces equal lengths).
//!
//! ## Non-goals
//!
//! * This module does not perform the filtering.
//! * This module does not decide pass/fail.

// External dependencies
use core::fmt::{Display, Formatter, Result};
use num_traits::Float;

// ============================================================================
// Diagnostics Structure
// ============================================================================

/// Deviation metrics between the two filter outputs.
#[derive(Debug, Clone, PartialEq)]
pub struct Diagnostics<T> {
    /// Largest absolute element-wise deviation.
    pub max_abs_deviation: T,

    /// Mean absolute element-wise deviation.
    pub mean_abs_deviation: T,

    /// Root-mean-square element-wise deviation.
    pub rms_deviation: T,

    /// Scale factor the quantized pass was run with.
    pub scale: T,

    /// `max_abs_deviation / scale`.
    pub scale_ratio: T,
}

impl<T: Float> Diagnostics<T> {
    // ========================================================================
    // Main Computation
    // ========================================================================

    /// Compute deviation statistics between the two filter outputs.
    pub fn compute(smoothed: &[T], smoothed_scaled: &[T], scale: T) -> Self {
        let max_abs_deviation = Self::calculate_max_abs_deviation(smoothed, smoothed_scaled);
        let mean_abs_deviation = Self::calculate_mean_abs_deviation(smoothed, smoothed_scaled);
        let rms_deviation = Self::calculate_rms_deviation(smoothed, smoothed_scaled);

        let scale_ratio = if scale > T::zero() {
            max_abs_deviation / scale
        } else {
            T::zero()
        };

        Diagnostics {
            max_abs_deviation,
            mean_abs_deviation,
            rms_deviation,
            scale,
            scale_ratio,
        }
    }

    // ========================================================================
    // Deviation Metrics
    // ========================================================================

    /// Largest `|a_i - b_i|` over the paired elements.
    pub fn calculate_max_abs_deviation(a: &[T], b: &[T]) -> T {
        a.iter()
            .zip(b.iter())
            .fold(T::zero(), |acc, (&ai, &bi)| acc.max((ai - bi).abs()))
    }

    /// Mean `|a_i - b_i|` over the paired elements.
    pub fn calculate_mean_abs_deviation(a: &[T], b: &[T]) -> T {
        let n = a.len().min(b.len());
        if n == 0 {
            return T::zero();
        }

        let n_t = T::from(n).unwrap_or(T::one());
        let sum = a
            .iter()
            .zip(b.iter())
            .fold(T::zero(), |acc, (&ai, &bi)| acc + (ai - bi).abs());

        sum / n_t
    }

    /// Root-mean-square of `a_i - b_i` over the paired elements.
    pub fn calculate_rms_deviation(a: &[T], b: &[T]) -> T {
        let n = a.len().min(b.len());
        if n == 0 {
            return T::zero();
        }

        let n_t = T::from(n).unwrap_or(T::one());
        let sum_sq = a.iter().zip(b.iter()).fold(T::zero(), |acc, (&ai, &bi)| {
            let d = ai - bi;
            acc + d * d
        });

        (sum_sq / n_t).sqrt()
    }

    // ========================================================================
    // Query Methods
    // ========================================================================

    /// Whether the worst-case deviation stays below the scale factor.
    ///
    /// True for plateau-dominated signals; transition regions can push the
    /// maximum slightly past `scale` since neighboring samples quantize to
    /// different steps.
    pub fn within_scale(&self) -> bool {
        self.max_abs_deviation < self.scale
    }
}

// ============================================================================
// Display Implementation
// ============================================================================

impl<T: Float + Display> Display for Diagnostics<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        writeln!(f, "Quantization Diagnostics:")?;
        writeln!(f, "  Max |dev|:   {:.6}", self.max_abs_deviation)?;
        writeln!(f, "  Mean |dev|:  {:.6}", self.mean_abs_deviation)?;
        writeln!(f, "  RMS dev:     {:.6}", self.rms_deviation)?;
        writeln!(f, "  Scale:       {:.1}", self.scale)?;
        writeln!(f, "  Dev / scale: {:.6}", self.scale_ratio)?;

        Ok(())
    }
}
