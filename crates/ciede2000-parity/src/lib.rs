//! # ciede2000-parity
//!
//! Cross-implementation parity harness for the CIEDE2000 evaluator.
//!
//! Each implementation under test writes a dataset of random Lab pairs with
//! its own ΔE2000 for every pair. Every other implementation then recomputes
//! those values and must agree to within `1e-10`.
//!
//! This crate provides:
//! - The dataset text format (`L1,a1,b1,L2,a2,b2,deltaE` per line)
//! - Random dataset generation with mixed decimal precision
//! - Comparison of a dataset against any [`DeltaE`] evaluator, stopping at
//!   the first disagreeing record
//! - Concurrent comparison of the datasets of several implementations
//! - Dataset statistics and JSON reports
//!
//! ## Example
//!
//! ```
//! use ciede2000_parity::{Silent, Verdict, compare, evaluator, generate};
//! use ciede2000_parity::generate::rng_from_seed;
//!
//! let dataset = generate(Vec::new(), rng_from_seed(Some(1)), 100, &evaluator::local(), &mut Silent)?;
//! let comparison = compare(dataset.as_slice(), &evaluator::local(), &mut Silent)?;
//! assert_eq!(comparison.verdict, Verdict::Passed { records: 100 });
//! # Ok::<(), ciede2000_parity::Error>(())
//! ```

pub mod compare;
pub mod config;
pub mod dataset;
pub mod error;
pub mod evaluator;
pub mod generate;
pub mod logger;
pub mod progress;
pub mod report;
pub mod stats;

pub use compare::{Comparison, TOLERANCE, TagComparison, Verdict, compare, compare_file, compare_tags};
pub use config::{Cli, HarnessConfig, Mode};
pub use dataset::{DatasetReader, DatasetWriter, TestRecord, dataset_path};
pub use error::{Error, Result};
pub use evaluator::DeltaE;
pub use generate::{DEFAULT_COUNT, generate, generate_file};
pub use progress::{Dots, Progress, Silent};
pub use report::ComparisonReport;
pub use stats::DatasetStats;
