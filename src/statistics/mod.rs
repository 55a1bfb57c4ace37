//! Statistical summaries for streaming data
//!
//! Running mean and variance over a stream in a single pass with constant
//! memory. Observations are never stored.
//!
//! # Example
//!
//! ```
//! use runstats::statistics::RunningStats;
//!
//! let mut stats = RunningStats::new();
//!
//! for value in [10.5, 11.2, 10.8, 12.5, 11.0, 9.8] {
//!     stats.update(value);
//! }
//!
//! let report = stats.report();
//! println!("Mean: {}", stats.current_mean());
//! println!("Variance: {}", report.variance);
//! println!("Stddev: {}", report.std_dev);
//! ```

mod moments;

pub use moments::{Report, RunningStats};
