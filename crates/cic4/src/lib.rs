//! # CIC4 — Cascaded Integrator-Comb Smoothing for Rust
//!
//! A fast, precision-aware fourth-order CIC (Cascaded Integrator-Comb)
//! smoothing filter for **Rust**, with a built-in fixed-point consistency
//! check.
//!
//! ## What is CIC4?
//!
//! A fourth-order CIC filter smooths a signal by convolving it with a
//! normalized kernel obtained from a boxcar of `2^w` ones convolved with
//! itself four times over. The result is a symmetric, bell-shaped FIR
//! response that needs no multipliers in fixed-point hardware, which is why
//! CIC structures are the workhorse of decimating front-ends.
//!
//! This crate runs the same convolution twice per call: once over the
//! original signal and once over a quantized copy (`floor(sample / scale)`,
//! rescaled after filtering). Comparing both outputs shows exactly how much
//! accuracy a fixed-point pipeline at that scale would surrender.
//!
//! ## Quick Start
//!
//! ### Typical Use
//!
//! ```rust
//! use cic4::prelude::*;
//!
//! let signal = vec![10.0, 20.0, 30.0, 40.0, 50.0];
//!
//! // Build the filter
//! let model = Cic4::new()
//!     .window_log2(1)     // 2-sample boxcar, 5 kernel taps
//!     .scale(4.0)         // Quantization scale for the check pass
//!     .adapter(Batch)
//!     .build()?;
//!
//! // Run both passes over the signal
//! let result = model.filter(&signal)?;
//!
//! println!("{}", result);
//! # Result::<(), Cic4Error>::Ok(())
//! ```
//!
//! ```text
//! Summary:
//!   Signal points: 5
//!   Output points: 9
//!   Kernel taps:   5
//!   Window log2:   1
//!   Scale:         4
//!
//! Filtered Data:
//!    Index             Signal           Smoothed    Smoothed_Scaled      Deviation
//! --------------------------------------------------------------------------------
//!        0          10.000000           0.625000           0.500000       0.125000
//!        1          20.000000           3.750000           3.250000       0.500000
//!        2          30.000000          10.625000           9.750000       0.875000
//!        3          40.000000          20.000000          19.000000       1.000000
//!        4          50.000000          30.000000          29.000000       1.000000
//!        5                             36.250000          35.250000       1.000000
//!        6                             30.625000          29.750000       0.875000
//!        7                             15.000000          14.500000       0.500000
//!        8                              3.125000           3.000000       0.125000
//! ```
//!
//! ### Full Features
//!
//! ```rust
//! use cic4::prelude::*;
//!
//! let signal = vec![100.0, 200.0, 300.0, 400.0, 500.0];
//!
//! // Build the filter with all features enabled
//! let model = Cic4::new()
//!     .window_log2(1)         // 2-sample boxcar, 5 kernel taps
//!     .scale_bits(5)          // Quantization scale 2^5 = 32
//!     .return_diagnostics()   // Deviation metrics between the two passes
//!     .adapter(Batch)         // Batch adapter
//!     .build()?;
//!
//! let result = model.filter(&signal)?;
//! println!("{}", result);
//! # Result::<(), Cic4Error>::Ok(())
//! ```
//!
//! ```text
//! Summary:
//!   Signal points: 5
//!   Output points: 9
//!   Kernel taps:   5
//!   Window log2:   1
//!   Scale:         32
//!
//! Quantization Diagnostics:
//!   Max |dev|:   14.500000
//!   Mean |dev|:  6.666667
//!   RMS dev:     8.341663
//!   Scale:       32.0
//!   Dev / scale: 0.453125
//!
//! Filtered Data:
//!    Index             Signal           Smoothed    Smoothed_Scaled      Deviation
//! --------------------------------------------------------------------------------
//!        0         100.000000           6.250000           6.000000       0.250000
//!        1         200.000000          37.500000          36.000000       1.500000
//!        2         300.000000         106.250000         102.000000       4.250000
//!        3         400.000000         200.000000         192.000000       8.000000
//!        4         500.000000         300.000000         288.000000      12.000000
//!        5                            362.500000         348.000000      14.500000
//!        6                            306.250000         294.000000      12.250000
//!        7                            150.000000         144.000000       6.000000
//!        8                             31.250000          30.000000       1.250000
//! ```
//!
//! ### Result and Error Handling
//!
//! The `filter` method returns a `Result<Cic4Result<T>, Cic4Error>`.
//!
//! - **`Ok(Cic4Result<T>)`**: Contains both smoothed sequences and diagnostics.
//! - **`Err(Cic4Error)`**: Indicates a failure (e.g., empty signal, non-finite values).
//!
//! The `?` operator is idiomatic:
//!
//! ```rust
//! use cic4::prelude::*;
//! # let signal = vec![10.0, 20.0, 30.0, 40.0, 50.0];
//!
//! let model = Cic4::new().adapter(Batch).build()?;
//!
//! let result = model.filter(&signal)?;
//! // or to be more explicit:
//! // let result: Cic4Result<f64> = model.filter(&signal)?;
//! # Result::<(), Cic4Error>::Ok(())
//! ```
//!
//! But you can also handle results explicitly:
//!
//! ```rust
//! use cic4::prelude::*;
//! # let signal = vec![10.0, 20.0, 30.0, 40.0, 50.0];
//!
//! let model = Cic4::new().adapter(Batch).build()?;
//!
//! match model.filter(&signal) {
//!     Ok(result) => {
//!         // result is Cic4Result<f64>
//!         println!("Smoothed: {:?}", result.smoothed);
//!     }
//!     Err(e) => {
//!         // e is Cic4Error
//!         eprintln!("Filtering failed: {}", e);
//!     }
//! }
//! # Result::<(), Cic4Error>::Ok(())
//! ```
//!
//! ## Minimal Usage (no_std / Embedded)
//!
//! The crate supports `no_std` environments for embedded devices and resource-constrained systems.
//! Disable default features to remove the standard library dependency:
//!
//! ```toml
//! [dependencies]
//! cic4 = { version = "0.1", default-features = false }
//! ```
//!
//! **Minimal example for embedded systems:**
//!
//! ```rust
//! # #[cfg(feature = "std")] {
//! use cic4::prelude::*;
//!
//! // In an embedded context (e.g., sensor data conditioning)
//! fn smooth_sensor_data() -> Result<(), Cic4Error> {
//!     // Small window keeps the kernel short
//!     let signal = vec![2.0_f32, 4.0, 8.0, 16.0, 32.0];
//!
//!     let model = Cic4::new()
//!         .window_log2(2)     // 4-sample boxcar, 13 taps
//!         .scale(2.0)
//!         .adapter(Batch)
//!         .build()?;
//!
//!     let result = model.filter(&signal)?;
//!
//!     // Use smoothed values (result.smoothed)
//!     // ...
//!
//!     Ok(())
//! }
//! # smooth_sensor_data().unwrap();
//! # }
//! ```
//!
//! **Tips for embedded/no_std usage:**
//! - Use `f32` instead of `f64` to reduce memory footprint
//! - Keep the window exponent small; taps grow as `4 * 2^w - 3`
//! - Skip diagnostics to avoid the extra reduction pass
//! - Reuse one built model for many signals to amortize kernel construction
//!
//! ## References
//!
//! - Hogenauer, E. B. (1981). "An Economical Class of Digital Filters for Decimation and Interpolation"
//! - Unser, M., Aldroubi, A., Eden, M. (1993). "B-Spline Signal Processing"
//!
//! ## License
//!
//! See the repository for license information and contribution guidelines.

#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(not(feature = "std"))]
#[macro_use]
extern crate alloc;

// Layer 1: Primitives - error types and basic utilities.
mod primitives;

// Layer 2: Math - pure mathematical functions.
mod math;

// Layer 3: Evaluation - post-processing and diagnostics.
mod evaluation;

// Layer 4: Engine - orchestration and execution control.
mod engine;

// Layer 5: Adapters - execution mode adapters.
mod adapters;

// High-level fluent API for CIC4 filtering.
mod api;

// Standard CIC4 prelude.
pub mod prelude {
    pub use crate::api::{
        Adapter::Batch, Cic4Builder as Cic4, Cic4Error, Cic4Result, CicKernel, Diagnostics,
        MAX_WINDOW_LOG2, MIN_WINDOW_LOG2,
    };
}

// Internal modules for development and testing.
//
// This module re-exports internal modules for development and testing purposes.
// It is only available with the `dev` feature enabled.
#[cfg(feature = "dev")]
pub mod internals {
    pub mod primitives {
        pub use crate::primitives::*;
    }
    pub mod math {
        pub use crate::math::*;
    }
    pub mod engine {
        pub use crate::engine::*;
    }
    pub mod evaluation {
        pub use crate::evaluation::*;
    }
    pub mod adapters {
        pub use crate::adapters::*;
    }
    pub mod api {
        pub use crate::api::*;
    }
}
