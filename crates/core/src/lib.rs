//! # Core - Training Data and Exact Numbers
//!
//! The leaf crate of the workspace. It provides:
//!
//! - **Samples**: an ordered, append-only sequence of labeled observations
//! - **Exact numbers**: the [`Probability`] type and helpers for building
//!   fractions from counts without any floating-point step
//!
//! The model itself lives in `bayes-prob`, which folds a [`TrainingData`]
//! into frequency tables and answers probability queries over them.

pub mod exact;
pub mod sample;

pub use exact::{to_f64, Probability};
pub use sample::{Sample, TrainingData};
