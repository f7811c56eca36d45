//! Additive (Lidstone) smoothing.
//!
//! Turns a raw count into a probability over a finite group of outcomes:
//!
//! ```text
//! P = (count + k) / (total + k * groups)
//! ```
//!
//! With `k = 1` this is Laplace smoothing, with `k = 0` it is the plain
//! maximum-likelihood estimate. Summed over all `groups` outcomes whose
//! counts add up to `total`, the estimates add up to exactly 1.

use bayes_core::exact::{count as big, ratio};
use bayes_core::Probability;

use crate::error::ProbError;

/// A Lidstone estimator with a fixed additive constant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Lidstone {
    k: u64,
}

impl Lidstone {
    pub fn new(k: u64) -> Self {
        Self { k }
    }

    /// The additive constant.
    pub fn k(&self) -> u64 {
        self.k
    }

    /// Smoothed estimate of `count` out of `total`, spread over `groups`
    /// outcomes.
    ///
    /// # Errors
    ///
    /// Returns [`ProbError::UndefinedEstimate`] if `total + k * groups` is
    /// zero.
    ///
    /// # Example
    ///
    /// ```rust
    /// use bayes_prob::Lidstone;
    /// use num_rational::BigRational;
    ///
    /// let laplace = Lidstone::new(1);
    /// let p = laplace.estimate(2, 4, 2).unwrap();
    /// assert_eq!(p, BigRational::new(1.into(), 2.into()));
    /// ```
    pub fn estimate(&self, count: u64, total: u64, groups: u64) -> Result<Probability, ProbError> {
        let k = big(self.k);
        let numerator = big(count) + &k;
        let denominator = big(total) + k * big(groups);

        ratio(numerator, denominator).ok_or(ProbError::UndefinedEstimate {
            count,
            total,
            groups,
            k: self.k,
        })
    }
}
