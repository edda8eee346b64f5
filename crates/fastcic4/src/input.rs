//! Input abstractions for CIC4 filtering.
//!
//! ## Purpose
//!
//! This module provides a unified abstraction for filter inputs, allowing the
//! `filter` method to process multiple signal formats (slices, vectors,
//! ndarray, integer samples) through a single interface, plus a parser for
//! the comma-separated text form telemetry sources commonly emit.
//!
//! ## Design notes
//!
//! * **Zero-copy where possible**: Float containers hand out direct slice
//!   views; integer containers are promoted into an owned buffer.
//! * **Interoperability**: Bridges standard Rust collections with specialized
//!   numerical libraries.
//! * **Fail-fast validation**: Ensures memory continuity for ndarray types
//!   before processing.
//!
//! ## Key concepts
//!
//! * **SignalInput Trait**: The core abstraction that requires types to
//!   provide a contiguous slice view in the working float type.
//! * **Integer Promotion**: Raw counter samples are integers; they are
//!   converted element-wise before filtering.
//!
//! ## Invariants
//!
//! * Returned slices represent all elements of the input container, in order.
//! * ndarray inputs must be contiguous in memory; non-contiguous inputs
//!   return an error.
//!
//! ## Non-goals
//!
//! * This module does not perform signal cleaning or imputation.
//! * This module does not validate sample finiteness (handled by the core
//!   validator).

// External dependencies
use ndarray::{ArrayBase, Data, Ix1};
use num_traits::{Float, ToPrimitive};
use std::borrow::Cow;

// Export dependencies from cic4 crate
use cic4::internals::primitives::errors::Cic4Error;

// ============================================================================
// SignalInput Trait
// ============================================================================

/// Trait for types that can be used as the signal for CIC4 filtering.
pub trait SignalInput<T: Float> {
    /// View the input as a contiguous slice in the working float type,
    /// converting element-wise if the container holds integers.
    fn as_cic4_signal(&self) -> Result<Cow<'_, [T]>, Cic4Error>;
}

impl<T: Float> SignalInput<T> for [T] {
    fn as_cic4_signal(&self) -> Result<Cow<'_, [T]>, Cic4Error> {
        Ok(Cow::Borrowed(self))
    }
}

impl<T: Float> SignalInput<T> for Vec<T> {
    fn as_cic4_signal(&self) -> Result<Cow<'_, [T]>, Cic4Error> {
        Ok(Cow::Borrowed(self.as_slice()))
    }
}

impl<T: Float, S> SignalInput<T> for ArrayBase<S, Ix1>
where
    S: Data<Elem = T>,
{
    fn as_cic4_signal(&self) -> Result<Cow<'_, [T]>, Cic4Error> {
        self.as_slice().map(Cow::Borrowed).ok_or_else(|| {
            Cic4Error::InvalidInput("ndarray input must be contiguous in memory".to_string())
        })
    }
}

// ============================================================================
// Integer Promotion
// ============================================================================

/// Promote a slice of integer samples into the working float type.
fn promote<T, I>(samples: &[I]) -> Result<Cow<'_, [T]>, Cic4Error>
where
    T: Float,
    I: ToPrimitive + Copy,
{
    let mut out = Vec::with_capacity(samples.len());
    for (i, &sample) in samples.iter().enumerate() {
        match T::from(sample) {
            Some(v) => out.push(v),
            None => {
                return Err(Cic4Error::InvalidNumericValue(format!(
                    "signal[{}] is not representable in the working float type",
                    i
                )));
            }
        }
    }
    Ok(Cow::Owned(out))
}

// Coherence forbids `impl<T: Float> SignalInput<T> for [i32]` alongside the
// blanket `impl<T: Float> SignalInput<T> for [T]` (the integer type could in
// principle implement `Float` upstream), so the promoting impls are written
// per concrete working float type instead.
macro_rules! impl_signal_input_for_int {
    ($($int:ty),* $(,)?) => {
        $(
            impl SignalInput<f32> for [$int] {
                fn as_cic4_signal(&self) -> Result<Cow<'_, [f32]>, Cic4Error> {
                    promote(self)
                }
            }

            impl SignalInput<f64> for [$int] {
                fn as_cic4_signal(&self) -> Result<Cow<'_, [f64]>, Cic4Error> {
                    promote(self)
                }
            }

            impl SignalInput<f32> for Vec<$int> {
                fn as_cic4_signal(&self) -> Result<Cow<'_, [f32]>, Cic4Error> {
                    promote(self.as_slice())
                }
            }

            impl SignalInput<f64> for Vec<$int> {
                fn as_cic4_signal(&self) -> Result<Cow<'_, [f64]>, Cic4Error> {
                    promote(self.as_slice())
                }
            }
        )*
    };
}

impl_signal_input_for_int!(i32, i64, u32, u64);

// ============================================================================
// Text Parsing
// ============================================================================

/// Parse a comma-separated list of numeric samples into a signal.
///
/// Accepts the raw counter dumps telemetry sources emit, e.g.
/// `"28621495321396, 28621495321396, 29171251135283"`. Tokens are trimmed
/// before parsing, so spacing around the commas is irrelevant. An input with
/// no tokens yields [`Cic4Error::EmptyInput`]; an unparsable token yields
/// [`Cic4Error::InvalidNumericValue`] naming the token and its position.
pub fn parse_signal<T: Float>(text: &str) -> Result<Vec<T>, Cic4Error> {
    let mut signal = Vec::new();

    for (i, token) in text.split(',').map(str::trim).enumerate() {
        if token.is_empty() {
            // A lone empty string means no samples at all; an empty token
            // between commas is a malformed entry.
            if i == 0 && text.trim().is_empty() {
                break;
            }
            return Err(Cic4Error::InvalidNumericValue(format!(
                "empty token at position {}",
                i
            )));
        }

        let value = token.parse::<f64>().ok().and_then(T::from).ok_or_else(|| {
            Cic4Error::InvalidNumericValue(format!("token '{}' at position {}", token, i))
        })?;

        signal.push(value);
    }

    if signal.is_empty() {
        return Err(Cic4Error::EmptyInput);
    }

    Ok(signal)
}
