//! Output types and result structures for CIC4 filter operations.
//!
//! ## Purpose
//!
//! This module defines the `Cic4Result` struct which encapsulates all
//! outputs from a filter run, including both smoothed sequences, the kernel
//! metadata, and optional deviation diagnostics.
//!
//! ## Design notes
//!
//! * **Memory Efficiency**: Diagnostics are only stored when requested.
//! * **Generics**: Results are generic over `Float` types.
//! * **Ergonomics**: Implements `Display` for human-readable output.
//! * **Consistency**: Both output sequences always have identical length.
//!
//! ## Key concepts
//!
//! * **Smoothed**: The full-precision convolution of kernel and signal.
//! * **Smoothed Scaled**: The quantized-path convolution, rescaled back to
//!   signal units.
//! * **Metadata**: Tracks kernel length, window exponent, and scale factor.
//!
//! ## Invariants
//!
//! * `smoothed` and `smoothed_scaled` have length
//!   `signal.len() + kernel_len - 1`.
//! * `kernel_len` is `4 * 2^window_log2 - 3`.
//! * `scale` is finite and at least 1.
//!
//! ## Non-goals
//!
//! * This module does not perform calculations; it only stores results.
//! * This module does not validate result consistency (responsibility of the engine).
//! * This module does not provide serialization/deserialization logic.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use core::fmt::{Debug, Display, Formatter, Result};
use num_traits::Float;

// Internal dependencies
use crate::evaluation::diagnostics::Diagnostics;

// ============================================================================
// Result Structure
// ============================================================================

/// Comprehensive CIC4 output containing both smoothed sequences and metadata.
#[derive(Debug, Clone, PartialEq)]
pub struct Cic4Result<T> {
    /// Input signal, as passed to the filter.
    pub signal: Vec<T>,

    /// Full-precision smoothed values.
    pub smoothed: Vec<T>,

    /// Quantized-path smoothed values, rescaled to signal units.
    pub smoothed_scaled: Vec<T>,

    /// Number of kernel taps used (`4 * 2^window_log2 - 3`).
    pub kernel_len: usize,

    /// Base-2 logarithm of the boxcar width the kernel was built from.
    pub window_log2: u32,

    /// Quantization scale factor applied on the scaled path.
    pub scale: T,

    /// Deviation metrics between the two outputs (if requested).
    pub diagnostics: Option<Diagnostics<T>>,
}

impl<T: Float> Cic4Result<T> {
    // ========================================================================
    // Query Methods
    // ========================================================================

    /// Length of the output sequences.
    pub fn len(&self) -> usize {
        self.smoothed.len()
    }

    /// Check if the output sequences are empty.
    pub fn is_empty(&self) -> bool {
        self.smoothed.is_empty()
    }

    /// Check if deviation diagnostics were computed.
    pub fn has_diagnostics(&self) -> bool {
        self.diagnostics.is_some()
    }

    /// Element-wise absolute deviations between the two outputs.
    pub fn deviations(&self) -> Vec<T> {
        self.smoothed
            .iter()
            .zip(self.smoothed_scaled.iter())
            .map(|(&a, &b)| (a - b).abs())
            .collect()
    }

    /// Largest absolute deviation between the two outputs.
    pub fn max_deviation(&self) -> T {
        self.deviations()
            .into_iter()
            .fold(T::zero(), |max, d| if d > max { d } else { max })
    }
}

// ============================================================================
// Display Implementation
// ============================================================================

impl<T: Float + Display + Debug> Display for Cic4Result<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        writeln!(f, "Summary:")?;
        writeln!(f, "  Signal points: {}", self.signal.len())?;
        writeln!(f, "  Output points: {}", self.len())?;
        writeln!(f, "  Kernel taps:   {}", self.kernel_len)?;
        writeln!(f, "  Window log2:   {}", self.window_log2)?;
        writeln!(f, "  Scale:         {}", self.scale)?;
        writeln!(f)?;

        if let Some(diag) = &self.diagnostics {
            writeln!(f, "{}", diag)?;
        }

        writeln!(f, "Filtered Data:")?;

        // Build header
        writeln!(
            f,
            "{:>8} {:>18} {:>18} {:>18} {:>14}",
            "Index", "Signal", "Smoothed", "Smoothed_Scaled", "Deviation"
        )?;

        // Separator line
        writeln!(f, "{:-<width$}", "", width = 80)?;

        // Data rows (show first 10 and last 10 if more than 20 points)
        let n = self.len();
        let show_all = n <= 20;
        let rows_to_show: Vec<usize> = if show_all {
            (0..n).collect()
        } else {
            (0..10).chain(n - 10..n).collect()
        };

        let mut prev_idx = 0;
        for (i, &idx) in rows_to_show.iter().enumerate() {
            // Add ellipsis if we skipped rows
            if i > 0 && idx != prev_idx + 1 {
                writeln!(f, "{:>8}", "...")?;
            }
            prev_idx = idx;

            write!(f, "{:>8}", idx)?;

            // The convolution tail extends past the end of the signal
            if idx < self.signal.len() {
                write!(f, " {:>18.6}", self.signal[idx])?;
            } else {
                write!(f, " {:>18}", "")?;
            }

            let deviation = (self.smoothed[idx] - self.smoothed_scaled[idx]).abs();
            writeln!(
                f,
                " {:>18.6} {:>18.6} {:>14.6}",
                self.smoothed[idx], self.smoothed_scaled[idx], deviation
            )?;
        }

        Ok(())
    }
}
