//! Input validation for filter configuration and data.
//!
//! ## Purpose
//!
//! This module provides validation functions for filter parameters and
//! input data: signal and kernel contents, width exponents, and scale
//! factors.
//!
//! ## Design notes
//!
//! * **Fail-Fast**: Validation stops at the first error encountered.
//! * **Efficiency**: Checks are ordered from cheap to expensive.
//! * **Generics**: Validation is generic over `Float` types.
//!
//! ## Key concepts
//!
//! * **Parameter Bounds**: Width exponent in 1..=16, scale finite and >= 1.
//! * **Finite Checks**: Ensures all samples and taps are finite (no NaN/Inf).
//! * **Builder Hygiene**: Rejects parameters that were configured twice.
//!
//! ## Invariants
//!
//! * All validated inputs satisfy their respective constraints.
//! * Validation logic is deterministic and side-effect free.
//!
//! ## Non-goals
//!
//! * This module does not transform or repair invalid inputs.
//! * This module does not perform the filtering itself.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::format;

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::math::kernel::{MAX_WINDOW_LOG2, MIN_WINDOW_LOG2};
use crate::primitives::errors::Cic4Error;

// ============================================================================
// Validator
// ============================================================================

/// Validation utility for filter configuration and input data.
///
/// Provides static methods returning `Result<(), Cic4Error>` that fail fast
/// upon identifying the first violation.
pub struct Validator;

impl Validator {
    // ========================================================================
    // Core Input Validation
    // ========================================================================

    /// Validate the input signal: non-empty, all samples finite.
    pub fn validate_signal<T: Float>(signal: &[T]) -> Result<(), Cic4Error> {
        // Check 1: Non-empty
        if signal.is_empty() {
            return Err(Cic4Error::EmptyInput);
        }

        // Check 2: All samples finite
        for (i, &sample) in signal.iter().enumerate() {
            if !sample.is_finite() {
                return Err(Cic4Error::InvalidNumericValue(format!(
                    "signal[{}]={}",
                    i,
                    sample.to_f64().unwrap_or(f64::NAN)
                )));
            }
        }

        Ok(())
    }

    /// Validate kernel taps: non-empty, all taps finite.
    pub fn validate_kernel<T: Float>(taps: &[T]) -> Result<(), Cic4Error> {
        if taps.is_empty() {
            return Err(Cic4Error::EmptyKernel);
        }

        for (i, &tap) in taps.iter().enumerate() {
            if !tap.is_finite() {
                return Err(Cic4Error::InvalidNumericValue(format!(
                    "kernel[{}]={}",
                    i,
                    tap.to_f64().unwrap_or(f64::NAN)
                )));
            }
        }

        Ok(())
    }

    // ========================================================================
    // Parameter Validation
    // ========================================================================

    /// Validate the base-2 logarithm of the boxcar width.
    pub fn validate_window_log2(window_log2: u32) -> Result<(), Cic4Error> {
        if !(MIN_WINDOW_LOG2..=MAX_WINDOW_LOG2).contains(&window_log2) {
            return Err(Cic4Error::InvalidWindowLog2 {
                got: window_log2,
                min: MIN_WINDOW_LOG2,
                max: MAX_WINDOW_LOG2,
            });
        }
        Ok(())
    }

    /// Validate the quantization scale factor.
    pub fn validate_scale<T: Float>(scale: T) -> Result<(), Cic4Error> {
        if !scale.is_finite() || scale < T::one() {
            return Err(Cic4Error::InvalidScale(
                scale.to_f64().unwrap_or(f64::NAN),
            ));
        }
        Ok(())
    }

    /// Validate that no parameters were set multiple times in the builder.
    pub fn validate_no_duplicates(
        duplicate_param: Option<&'static str>,
    ) -> Result<(), Cic4Error> {
        if let Some(parameter) = duplicate_param {
            return Err(Cic4Error::DuplicateParameter { parameter });
        }
        Ok(())
    }
}
