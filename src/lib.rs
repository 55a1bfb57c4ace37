//! # Runstats
//!
//! Single-pass running statistics for Rust.
//!
//! Runstats maintains the mean and the sum of squared deviations of a stream
//! of `f64` observations using Welford's online algorithm, so the sample
//! variance and standard deviation can be read at any point without keeping
//! the observations around.
//!
//! ## Features
//!
//! - **Constant memory**: three numeric fields, no allocation
//! - **Numerically stable**: no catastrophic cancellation on large offsets
//! - **`no_std`**: works without the standard library
//!
//! ## Quick Start
//!
//! ```rust
//! use runstats::prelude::*;
//!
//! let mut stats = RunningStats::new();
//! for price in [10.2, 12.3, 11.5, 13.1, 9.9] {
//!     stats.update(price);
//! }
//!
//! let report = stats.report();
//! assert!((stats.current_mean() - 11.4).abs() < 1e-9);
//! assert!((report.variance - 1.85).abs() < 1e-9);
//! ```
//!
//! ## Fewer Than Two Observations
//!
//! Sample variance needs two observations. [`RunningStats::report`] returns
//! zeros before that; [`RunningStats::try_report`] returns
//! [`StatsError::InsufficientData`] instead:
//!
//! ```rust
//! use runstats::{RunningStats, StatsError};
//!
//! let mut stats = RunningStats::new();
//! stats.update(3.0);
//!
//! assert_eq!(stats.report().variance, 0.0);
//! assert_eq!(
//!     stats.try_report(),
//!     Err(StatsError::InsufficientData { count: 1, required: 2 })
//! );
//! ```
//!
//! ## Feature Flags
//!
//! - `std` (default): Standard library support
//! - `log` (default): Warn through the `log` facade when the state turns non-finite

#![cfg_attr(not(feature = "std"), no_std)]

pub mod error;
pub mod statistics;

mod math;

pub mod prelude {
    pub use crate::error::StatsError;
    pub use crate::statistics::{Report, RunningStats};
}

pub use error::StatsError;
pub use statistics::{Report, RunningStats};
