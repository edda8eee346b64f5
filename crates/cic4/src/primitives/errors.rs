//! Error types for CIC4 filtering operations.
//!
//! ## Purpose
//!
//! This module defines error conditions that can occur while building a
//! CIC4 kernel or running the two-pass filter, covering input validation,
//! parameter constraints, and builder misuse.
//!
//! ## Design notes
//!
//! * **Contextual**: Errors include relevant values (e.g., actual vs. accepted range).
//! * **Deferred**: Errors are often caught and stored during builder configuration.
//! * **No-std**: Supports `no_std` environments by using `alloc` for dynamic messages.
//! * **Trait Implementation**: Implements `Display` and `std::error::Error` (when `std` is enabled).
//!
//! ## Key concepts
//!
//! 1. **Input validation**: Empty signals, empty kernels, non-finite samples.
//! 2. **Parameter validation**: Boxcar width out of range, degenerate scale factors.
//! 3. **Builder misuse**: Parameters configured more than once.
//!
//! ## Invariants
//!
//! * All variants provide sufficient context for diagnosis.
//! * Error messages are consistent in tone and formatting.
//! * Numeric values in errors use the same types as the public API.
//!
//! ## Non-goals
//!
//! * This module does not perform the validation logic itself.
//! * This module does not provide error recovery or fallback strategies.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::string::String;
#[cfg(feature = "std")]
use std::error::Error;
#[cfg(feature = "std")]
use std::string::String;

// External dependencies
use core::fmt::{Display, Formatter, Result};

// ============================================================================
// Error Type
// ============================================================================

/// Error type for CIC4 filtering operations.
#[derive(Debug, Clone, PartialEq)]
pub enum Cic4Error {
    /// Input signal is empty; the filter requires at least 1 sample.
    EmptyInput,

    /// Input container cannot be viewed as a contiguous slice.
    InvalidInput(String),

    /// Kernel has no taps; it must be built before filtering.
    EmptyKernel,

    /// Base-2 logarithm of the boxcar width is outside the accepted range.
    InvalidWindowLog2 {
        /// The width exponent provided.
        got: u32,
        /// Minimum accepted exponent.
        min: u32,
        /// Maximum accepted exponent.
        max: u32,
    },

    /// Scale factor must be finite and at least 1.
    InvalidScale(f64),

    /// Input data contains NaN, infinite, or unparsable values.
    InvalidNumericValue(String),

    /// Parameter was set multiple times in the builder.
    DuplicateParameter {
        /// Name of the parameter that was set multiple times.
        parameter: &'static str,
    },
}

// ============================================================================
// Display Implementation
// ============================================================================

impl Display for Cic4Error {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match self {
            Self::EmptyInput => write!(f, "Input signal is empty"),
            Self::InvalidInput(msg) => write!(f, "Invalid input: {msg}"),
            Self::EmptyKernel => write!(f, "Kernel has no taps"),
            Self::InvalidWindowLog2 { got, min, max } => {
                write!(
                    f,
                    "Invalid window_log2: {got} (must be between {min} and {max})"
                )
            }
            Self::InvalidScale(scale) => {
                write!(f, "Invalid scale: {scale} (must be finite and >= 1)")
            }
            Self::InvalidNumericValue(s) => write!(f, "Invalid numeric value: {s}"),
            Self::DuplicateParameter { parameter } => {
                write!(
                    f,
                    "Parameter '{parameter}' was set multiple times. Each parameter can only be configured once."
                )
            }
        }
    }
}

// ============================================================================
// Standard Error Trait
// ============================================================================

#[cfg(feature = "std")]
impl Error for Cic4Error {}
