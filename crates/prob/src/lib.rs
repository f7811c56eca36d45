//! # Prob - Naive Bayes over Exact Rationals
//!
//! This crate builds a naive Bayes classifier from labeled samples and answers
//! probability queries with exact rational arithmetic.
//!
//! ## Core Concepts
//!
//! - **Counting is the model**: training folds samples into frequency tables;
//!   nothing else is stored
//! - **Smoothing makes the unseen well-defined**: `P = (count + k) / (total + k·groups)`
//!   gives every unseen category/attribute pair a non-zero probability when `k > 0`
//! - **Priors and likelihoods share one estimator**: they differ only in which
//!   group count normalizes the denominator
//! - **Conditioning is renormalization**: the posterior divides each category's
//!   joint score by the sum over all known categories
//! - **No floating point**: probabilities are `BigRational`, so sums are exactly 1
//!
//! ## Example: Spam Filter
//!
//! ```rust
//! use bayes_core::TrainingData;
//! use bayes_prob::NaiveBayes;
//! use num_rational::BigRational;
//!
//! let data: TrainingData<&str, &str> = vec![
//!     ("spam", vec!["free", "money"]),
//!     ("spam", vec!["free", "offer"]),
//!     ("ham", vec!["meeting", "project"]),
//!     ("ham", vec!["project", "report"]),
//! ]
//! .into_iter()
//! .collect();
//!
//! let model = NaiveBayes::build(&data, 1);
//!
//! // (2 + 1) / (4 + 1·2)
//! let prior = model.category_probability(&"spam").unwrap();
//! assert_eq!(prior, BigRational::new(1.into(), 2.into()));
//!
//! let (label, _) = model.classify(&["free"]).unwrap().unwrap();
//! assert_eq!(*label, "spam");
//! ```

mod config;
mod counts;
mod error;
mod model;
mod smoothing;

pub use bayes_core::{Probability, Sample, TrainingData};
pub use config::{ModelConfig, DEFAULT_SMOOTHING_K};
pub use counts::FrequencyTable;
pub use error::ProbError;
pub use model::NaiveBayes;
pub use smoothing::Lidstone;
