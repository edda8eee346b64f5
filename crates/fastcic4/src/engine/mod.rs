//! Layer 4: Engine
//!
//! This layer provides the parallel execution engine for CIC4 filtering.
//! It distributes convolution output indices across CPU cores.

// Parallel convolution pass using CPU threads
pub mod executor;
