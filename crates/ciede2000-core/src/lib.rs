//! # ciede2000-core
//!
//! The CIEDE2000 (ΔE00) perceptual color difference, computed so that the
//! result is reproducible to within `1e-10` across independent
//! implementations in other languages.
//!
//! ## Quick Start
//!
//! ```
//! use ciede2000_core::{Lab, delta_e_2000};
//!
//! let source = Lab::new(94.201, -34.0861, -68.724);
//! let target = Lab::new(97.78, -34.0861, -68.724);
//!
//! let de = delta_e_2000(source, target);
//! assert!((de - 2.12199684635).abs() < 1e-10);
//! ```
//!
//! The evaluator is a pure function: it holds no state and may be called
//! from any number of threads at once.

pub mod delta_e;
pub mod error;
pub mod lab;

pub use delta_e::{ciede_2000, delta_e_2000};
pub use error::{Error, Result};
pub use lab::Lab;

/// Version of ciede2000-core
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
