//! Full discrete convolution and dot-product accumulation.
//!
//! ## Purpose
//!
//! This module provides the single convolution primitive shared by kernel
//! construction and signal filtering, together with the scalar and
//! SIMD-optimized dot products it accumulates with.
//!
//! ## Design notes
//!
//! * **One implementation**: Kernel construction and filtering reuse the same
//!   routine, so edge handling cannot drift between the two call sites.
//! * **Reversal trick**: The first operand is reversed once up front, turning
//!   every output sample into a dot product of two contiguous slices.
//! * **SIMD**: `f64`/`f32` accumulate with `wide` vectors; other floats fall
//!   back to the scalar loop.
//! * **Determinism**: For a fixed operand order and lane width the
//!   accumulation order is fixed, so repeated runs are bit-identical.
//!
//! ## Key concepts
//!
//! * **Full convolution**: `out[k] = Σ a[i] * b[k - i]` over in-range indices,
//!   output length `m + n - 1`, no truncation, no circular wraparound.
//! * **Tap evaluation**: Each output index maps to a pair of aligned slices
//!   of the reversed operand and the second operand.
//!
//! ## Invariants
//!
//! * `convolve(a, b)` has length `a.len() + b.len() - 1` for non-empty inputs.
//! * Convolution is commutative up to floating-point accumulation order.
//! * The output buffer passed to `convolve_into` has exactly the full length.
//!
//! ## Non-goals
//!
//! * This module does not validate operands (handled by `validator`).
//! * This module does not parallelize (extension crates inject that via the
//!   executor hook).

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
use core::cmp::min;
use num_traits::Float;
use wide::{f32x8, f64x2};

// ============================================================================
// Generic Accumulation
// ============================================================================

/// Scalar dot product of two equal-length slices (generic Float).
#[inline]
pub fn dot_scalar<T: Float>(a: &[T], b: &[T]) -> T {
    let n = min(a.len(), b.len());
    let mut acc = T::zero();

    for i in 0..n {
        acc = acc + a[i] * b[i];
    }

    acc
}

// ============================================================================
// Specialized Accumulation (SIMD)
// ============================================================================

/// SIMD-optimized dot product of two equal-length slices (f64).
#[inline]
pub fn dot_simd_f64(a: &[f64], b: &[f64]) -> f64 {
    let n = min(a.len(), b.len());

    let mut i = 0;
    let mut acc = f64x2::splat(0.0);

    unsafe {
        while i + 2 <= n {
            let av = f64x2::new([*a.get_unchecked(i), *a.get_unchecked(i + 1)]);
            let bv = f64x2::new([*b.get_unchecked(i), *b.get_unchecked(i + 1)]);

            acc += av * bv;

            i += 2;
        }
    }

    let mut total = acc.reduce_add();

    unsafe {
        while i < n {
            total += *a.get_unchecked(i) * *b.get_unchecked(i);

            i += 1;
        }
    }

    total
}

/// SIMD-optimized dot product of two equal-length slices (f32).
#[inline]
pub fn dot_simd_f32(a: &[f32], b: &[f32]) -> f32 {
    let n = min(a.len(), b.len());

    let mut i = 0;
    let mut acc = f32x8::splat(0.0);

    unsafe {
        while i + 8 <= n {
            let av = f32x8::new([
                *a.get_unchecked(i),
                *a.get_unchecked(i + 1),
                *a.get_unchecked(i + 2),
                *a.get_unchecked(i + 3),
                *a.get_unchecked(i + 4),
                *a.get_unchecked(i + 5),
                *a.get_unchecked(i + 6),
                *a.get_unchecked(i + 7),
            ]);
            let bv = f32x8::new([
                *b.get_unchecked(i),
                *b.get_unchecked(i + 1),
                *b.get_unchecked(i + 2),
                *b.get_unchecked(i + 3),
                *b.get_unchecked(i + 4),
                *b.get_unchecked(i + 5),
                *b.get_unchecked(i + 6),
                *b.get_unchecked(i + 7),
            ]);

            acc += av * bv;

            i += 8;
        }
    }

    let mut total = acc.reduce_add();

    unsafe {
        while i < n {
            total += *a.get_unchecked(i) * *b.get_unchecked(i);

            i += 1;
        }
    }

    total
}

// ============================================================================
// Dot-Product Trait
// ============================================================================

/// Trait for type-specific dot-product accumulation.
pub trait DotProduct: Float {
    /// Accumulate the inner product of two equal-length slices.
    #[inline]
    fn dot(a: &[Self], b: &[Self]) -> Self {
        dot_scalar(a, b)
    }
}

impl DotProduct for f64 {
    #[inline]
    fn dot(a: &[f64], b: &[f64]) -> f64 {
        dot_simd_f64(a, b)
    }
}

impl DotProduct for f32 {
    #[inline]
    fn dot(a: &[f32], b: &[f32]) -> f32 {
        dot_simd_f32(a, b)
    }
}

// ============================================================================
// Full Convolution
// ============================================================================

/// One output sample of the full convolution, given the reversed first operand.
///
/// `a_rev` holds the first operand reversed; `k` is the output index in
/// `0..a_rev.len() + b.len() - 1`. Both slice windows are contiguous, so the
/// accumulation runs through [`DotProduct::dot`].
#[inline]
pub fn convolve_tap<T: DotProduct>(a_rev: &[T], b: &[T], k: usize) -> T {
    let m = a_rev.len();
    let n = b.len();

    let j_lo = (m - 1).saturating_sub(k);
    let j_hi = min(m - 1, m + n - 2 - k);
    let b_lo = (j_lo + k + 1) - m;
    let len = j_hi - j_lo + 1;

    T::dot(&a_rev[j_lo..j_lo + len], &b[b_lo..b_lo + len])
}

/// Full discrete linear convolution of two finite sequences.
///
/// Produces every overlap position, including partial overlaps at the edges:
/// output length is `a.len() + b.len() - 1`. Empty operands yield an empty
/// output (callers validate before reaching this point).
pub fn convolve<T: DotProduct>(a: &[T], b: &[T]) -> Vec<T> {
    if a.is_empty() || b.is_empty() {
        return Vec::new();
    }

    let mut out = vec![T::zero(); a.len() + b.len() - 1];
    convolve_into(a, b, &mut out);
    out
}

/// Full convolution written into a caller-provided buffer.
///
/// `out` must have length `a.len() + b.len() - 1`. This is the sequential
/// pass; extension crates provide drop-in parallel replacements that call
/// [`convolve_tap`] per output index and therefore produce identical values.
pub fn convolve_into<T: DotProduct>(a: &[T], b: &[T], out: &mut [T]) {
    if a.is_empty() || b.is_empty() {
        return;
    }

    debug_assert_eq!(out.len(), a.len() + b.len() - 1);

    let a_rev: Vec<T> = a.iter().rev().copied().collect();

    for (k, slot) in out.iter_mut().enumerate() {
        *slot = convolve_tap(&a_rev, b, k);
    }
}
