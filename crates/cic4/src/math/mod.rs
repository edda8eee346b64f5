//! Layer 2: Math
//!
//! # Purpose
//!
//! This layer provides the pure mathematical building blocks of the filter:
//! - Full discrete convolution with SIMD-accelerated accumulation
//! - CIC kernel construction by repeated self-convolution
//! - Fixed-point quantization (floor-divide and rescale)
//!
//! These are reusable functions with no orchestration logic.
//!
//! # Architecture
//!
//! ```text
//! Layer 6: API
//!   ↓
//! Layer 5: Adapters
//!   ↓
//! Layer 4: Engine
//!   ↓
//! Layer 3: Evaluation
//!   ↓
//! Layer 2: Math ← You are here
//!   ↓
//! Layer 1: Primitives
//! ```

/// Full discrete convolution and dot-product accumulation.
pub mod convolve;

/// CIC kernel construction.
pub mod kernel;

/// Fixed-point quantization helpers.
pub mod quantize;
