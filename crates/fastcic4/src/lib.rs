//! # Fast CIC4 (Parallel Cascaded Integrator-Comb Smoothing)
//!
//! A parallel front end for the [`cic4`] smoothing filter: the same two-pass
//! fourth-order CIC convolution with fixed-point consistency checking, with
//! the output taps distributed across all available CPU cores.
//!
//! ## What is CIC4?
//!
//! A fourth-order CIC filter smooths a signal by convolving it with a
//! normalized kernel obtained from a boxcar of `2^w` ones convolved with
//! itself four times over. This crate runs the convolution twice per call:
//! once over the original signal and once over a quantized copy
//! (`floor(sample / scale)`, rescaled after filtering), showing exactly how
//! much accuracy a fixed-point pipeline at that scale would surrender.
//!
//! `fastcic4` re-exports the `cic4` builder API unchanged and swaps in a
//! `rayon`-based convolution pass. Because parallelism distributes whole
//! output indices and each index is computed by the same shared dot-product
//! routine, parallel output is bit-identical to sequential output.
//!
//! ## Quick Start
//!
//! ### Typical Use
//!
//! ```rust
//! use fastcic4::prelude::*;
//! use ndarray::Array1;
//!
//! let signal = Array1::from_vec(vec![10.0, 20.0, 30.0, 40.0, 50.0]);
//!
//! // Build the filter with parallel execution (default)
//! let model = Cic4::new()
//!     .window_log2(1)     // 2-sample boxcar, 5 kernel taps
//!     .scale(4.0)         // Quantization scale for the check pass
//!     .adapter(Batch)     // Parallel by default
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
//! use fastcic4::prelude::*;
//! use ndarray::Array1;
//!
//! let signal = Array1::from_vec(vec![100.0, 200.0, 300.0, 400.0, 500.0]);
//!
//! // Build the filter with all features enabled
//! let model = Cic4::new()
//!     .window_log2(1)         // 2-sample boxcar, 5 kernel taps
//!     .scale_bits(5)          // Quantization scale 2^5 = 32
//!     .return_diagnostics()   // Deviation metrics between the two passes
//!     .adapter(Batch)         // Batch adapter
//!     .parallel(true)         // Enable parallel execution
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
//! use fastcic4::prelude::*;
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
//! use fastcic4::prelude::*;
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
//! ### ndarray Integration
//!
//! `fastcic4` supports [ndarray](https://docs.rs/ndarray) natively, allowing
//! for zero-copy data passing from numerical pipelines.
//!
//! ```rust
//! use fastcic4::prelude::*;
//! use ndarray::Array1;
//!
//! // Data as ndarray types
//! let signal = Array1::from_vec((0..100).map(|i| (i as f64 * 0.25).sin() * 1000.0).collect());
//!
//! let model = Cic4::new().adapter(Batch).build()?;
//!
//! // filter() accepts &Array1<f64>, &[f64], or Vec<f64>
//! let result = model.filter(&signal)?;
//!
//! // result.smoothed is a Vec<f64>
//! let smoothed_values = result.smoothed;
//! # Result::<(), Cic4Error>::Ok(())
//! ```
//!
//! **Benefits:**
//! - **Zero-copy**: Pass data directly from your numerical pipeline.
//! - **Consistency**: If your project already uses `ndarray`, `fastcic4` fits right in.
//! - **Contiguity-checked**: Non-contiguous views are rejected with a clear error.
//!
//! ### Integer and Text Input
//!
//! Raw counter telemetry arrives as integers, often in comma-separated text
//! form. Both are accepted directly:
//!
//! ```rust
//! use fastcic4::prelude::*;
//!
//! // Comma-separated counter dump
//! let signal: Vec<f64> = parse_signal("28621495321396, 28621495321396, 29171251135283")?;
//!
//! let result = Cic4::new()
//!     .window_log2(1)
//!     .adapter(Batch)
//!     .build()?
//!     .filter(&signal)?;
//! # Result::<(), Cic4Error>::Ok(())
//! ```
//!
//! ```rust
//! use fastcic4::prelude::*;
//!
//! // Integer samples are promoted to the working float type
//! let samples: Vec<i64> = vec![28621495321396, 28621495321396, 29171251135283];
//!
//! let result: Cic4Result<f64> = Cic4::new().adapter(Batch).build()?.filter(&samples)?;
//! # Result::<(), Cic4Error>::Ok(())
//! ```
//!
//! ## References
//!
//! - Hogenauer, E. B. (1981). "An Economical Class of Digital Filters for Decimation and Interpolation"
//! - Unser, M., Aldroubi, A., Eden, M. (1993). "B-Spline Signal Processing"
//!
//! ## License
//!
//! See the repository for license information and contribution guidelines.

// Layer 4: Engine - orchestration and execution control.
mod engine;

// Layer 5: Adapters - execution mode adapters.
mod adapters;

// High-level fluent API for CIC4 filtering.
mod api;

// Input data handling.
mod input;

// Standard fastcic4 prelude.
pub mod prelude {
    pub use crate::api::{
        Adapter::Batch, Cic4Builder as Cic4, Cic4Error, Cic4Result, CicKernel, Diagnostics,
        MAX_WINDOW_LOG2, MIN_WINDOW_LOG2, parse_signal,
    };
}

// Internal modules for development and testing.
//
// This module re-exports internal modules for development and testing purposes.
// It is only available with the `dev` feature enabled.
#[cfg(feature = "dev")]
pub mod internals {
    pub mod engine {
        pub use crate::engine::*;
    }
    pub mod adapters {
        pub use crate::adapters::*;
    }
    pub mod api {
        pub use crate::api::*;
    }
    pub mod input {
        pub use crate::input::*;
    }
}
