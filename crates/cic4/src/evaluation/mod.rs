//! Layer 3: Evaluation
//!
//! # Purpose
//!
//! This layer computes comparison metrics over finished filter outputs:
//! how far the reduced-precision pass drifted from the full-precision pass,
//! and how that drift relates to the scale factor that caused it.
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
//! Layer 3: Evaluation ← You are here
//!   ↓
//! Layer 2: Math
//!   ↓
//! Layer 1: Primitives
//! ```

/// Deviation metrics between the full-precision and quantized passes.
pub mod diagnostics;
