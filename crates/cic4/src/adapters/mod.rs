//! Layer 5: Adapters
//!
//! # Purpose
//!
//! This layer provides user-facing APIs that adapt the engine layer for
//! different execution modes and use cases:
//!
//! - **Batch**: Unified adapter for in-memory signals
//!
//! # Architecture
//!
//! ```text
//! Layer 6: API
//!   ↓
//! Layer 5: Adapters ← You are here
//!   ↓
//! Layer 4: Engine
//!   ↓
//! Layer 3: Evaluation
//!   ↓
//! Layer 2: Math
//!   ↓
//! Layer 1: Primitives
//! ```

/// Unified batch adapter for CIC4 filtering.
pub mod batch;
