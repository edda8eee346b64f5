//! Layer 4: Engine
//!
//! # Purpose
//!
//! This layer orchestrates the two-pass filter: it validates inputs, runs
//! the full-precision and quantized convolutions, and packages the outputs
//! for the adapters above.
//!
//! # Architecture
//!
//! ```text
//! Layer 6: API
//!   ↓
//! Layer 5: Adapters
//!   ↓
//! Layer 4: Engine ← You are here
//!   ↓
//! Layer 3: Evaluation
//!   ↓
//! Layer 2: Math
//!   ↓
//! Layer 1: Primitives
//! ```

/// Two-pass filter execution.
pub mod executor;

/// Validation utilities.
pub mod validator;

/// Output types for filter operations.
pub mod output;
