//! The naive Bayes model.
//!
//! A [`NaiveBayes`] is built once from training samples and is immutable
//! afterwards. Every query is computed on demand from the frequency tables
//! using exact rational arithmetic:
//!
//! ```text
//! P(c)           = (samples(c) + k)  / (total     + k * |categories|)
//! P(a | c)       = (co(c, a) + k)    / (occ(c)    + k * |attributes|)
//! score(c | as)  = P(c) · Π P(a | c)
//! P(c | as)      = score(c | as) / Σ_c' score(c' | as)
//! ```

use std::hash::Hash;

use bayes_core::{Probability, TrainingData};
use num_traits::Zero;
use tracing::{debug, trace};

use crate::config::{ModelConfig, DEFAULT_SMOOTHING_K};
use crate::counts::FrequencyTable;
use crate::error::ProbError;
use crate::smoothing::Lidstone;

/// A naive Bayes classifier over discrete attributes.
///
/// # Example
///
/// ```rust
/// use bayes_core::TrainingData;
/// use bayes_prob::NaiveBayes;
/// use num_traits::One;
///
/// let mut data = TrainingData::new();
/// data.add("spam", vec!["free", "money"]);
/// data.add("spam", vec!["free", "offer"]);
/// data.add("ham", vec!["meeting", "project"]);
/// data.add("ham", vec!["project", "report"]);
///
/// let model = NaiveBayes::build(&data, 1);
///
/// let spam = model.category_probability_given_attributes(&"spam", &["free"]).unwrap();
/// let ham = model.category_probability_given_attributes(&"ham", &["free"]).unwrap();
/// assert!(spam > ham);
/// assert!((spam + ham).is_one());
/// ```
#[derive(Debug, Clone)]
pub struct NaiveBayes<C, A> {
    counts: FrequencyTable<C, A>,
    smoother: Lidstone,
}

impl<C, A> NaiveBayes<C, A>
where
    C: Eq + Hash + Clone,
    A: Eq + Hash + Clone,
{
    /// Build a model with the default smoothing constant (`k = 1`).
    pub fn new(data: &TrainingData<C, A>) -> Self {
        Self::build(data, DEFAULT_SMOOTHING_K)
    }

    /// Build a model from training data with smoothing constant `smoothing_k`.
    ///
    /// The data is only read; categories and attributes are cloned into the
    /// model's tables.
    pub fn build(data: &TrainingData<C, A>, smoothing_k: u64) -> Self {
        Self::from_samples(
            data.iter()
                .map(|s| (s.category.clone(), s.attributes.iter().cloned())),
            smoothing_k,
        )
    }

    /// Build a model using the settings in `config`.
    pub fn with_config(data: &TrainingData<C, A>, config: &ModelConfig) -> Self {
        Self::build(data, config.smoothing_k)
    }

    /// Build a model from any sequence of `(category, attributes)` pairs.
    ///
    /// Samples are folded in iteration order. An empty sequence yields a
    /// model with every count at zero.
    pub fn from_samples<I, V>(samples: I, smoothing_k: u64) -> Self
    where
        I: IntoIterator<Item = (C, V)>,
        V: IntoIterator<Item = A>,
    {
        let mut counts = FrequencyTable::new();
        for (category, attributes) in samples {
            counts.observe(category, attributes);
            trace!(total = counts.total_samples(), "folded training sample");
        }

        debug!(
            samples = counts.total_samples(),
            categories = counts.categories().len(),
            attributes = counts.attributes().len(),
            smoothing_k,
            "naive bayes model built"
        );

        Self {
            counts,
            smoother: Lidstone::new(smoothing_k),
        }
    }

    /// Read-only view of the underlying frequency tables.
    pub fn counts(&self) -> &FrequencyTable<C, A> {
        &self.counts
    }

    pub fn smoothing_parameter(&self) -> u64 {
        self.smoother.k()
    }

    pub fn total_sample_count(&self) -> u64 {
        self.counts.total_samples()
    }

    pub fn category_sample_count(&self, category: &C) -> u64 {
        self.counts.category_samples(category)
    }

    pub fn category_attribute_occurrences(&self, category: &C) -> u64 {
        self.counts.category_attributes(category)
    }

    pub fn category_attribute_co_count(&self, category: &C, attribute: &A) -> u64 {
        self.counts.co_occurrences(category, attribute)
    }

    /// Known categories in first-seen order.
    pub fn known_categories(&self) -> impl Iterator<Item = &C> + '_ {
        self.counts.categories().iter()
    }

    /// Known attributes in first-seen order.
    pub fn known_attributes(&self) -> impl Iterator<Item = &A> + '_ {
        self.counts.attributes().iter()
    }

    pub fn known_category_count(&self) -> usize {
        self.counts.categories().len()
    }

    pub fn known_attribute_count(&self) -> usize {
        self.counts.attributes().len()
    }

    /// Smoothed prior `P(category)`.
    ///
    /// Categories never seen in training get count 0 but do not enlarge the
    /// set of known categories.
    ///
    /// # Errors
    ///
    /// [`ProbError::UndefinedEstimate`] when the model was built from no
    /// samples, whatever `k` is.
    pub fn category_probability(&self, category: &C) -> Result<Probability, ProbError> {
        self.smoother.estimate(
            self.counts.category_samples(category),
            self.counts.total_samples(),
            self.known_category_count() as u64,
        )
    }

    /// Smoothed likelihood `P(attribute | category)`.
    ///
    /// # Errors
    ///
    /// [`ProbError::UndefinedEstimate`] when `category` has no attribute
    /// occurrences and either `k = 0` or no attributes are known.
    pub fn attribute_probability_given_category(
        &self,
        attribute: &A,
        category: &C,
    ) -> Result<Probability, ProbError> {
        self.smoother.estimate(
            self.counts.co_occurrences(category, attribute),
            self.counts.category_attributes(category),
            self.known_attribute_count() as u64,
        )
    }

    /// Posterior `P(category | attributes)`, normalized over all known
    /// categories.
    ///
    /// With no attributes this reduces to the prior.
    ///
    /// # Errors
    ///
    /// [`ProbError::ZeroEvidence`] when the normalizer is zero, which happens
    /// for a model without known categories or when every score vanishes
    /// under `k = 0`. [`ProbError::UndefinedEstimate`] when a queried
    /// attribute's likelihood has a zero denominator, e.g. a model trained
    /// only on samples without attributes.
    pub fn category_probability_given_attributes(
        &self,
        category: &C,
        attributes: &[A],
    ) -> Result<Probability, ProbError> {
        let (scores, evidence) = self.scores(attributes)?;
        let score = match scores.into_iter().find(|(c, _)| *c == category) {
            Some((_, s)) => s,
            None => self.score(category, attributes)?,
        };
        Ok(score / evidence)
    }

    /// The full posterior over known categories, in first-seen order.
    ///
    /// Each entry equals [`Self::category_probability_given_attributes`] for
    /// that category; the normalizer is computed once.
    pub fn posterior(&self, attributes: &[A]) -> Result<Vec<(&C, Probability)>, ProbError> {
        let (scores, evidence) = self.scores(attributes)?;

        Ok(scores
            .into_iter()
            .map(|(c, s)| (c, s / &evidence))
            .collect())
    }

    /// The maximum-a-posteriori category and its posterior.
    ///
    /// Ties go to the category seen first in training. Returns `Ok(None)` if
    /// the model knows no categories.
    pub fn classify(&self, attributes: &[A]) -> Result<Option<(&C, Probability)>, ProbError> {
        if self.known_category_count() == 0 {
            return Ok(None);
        }

        let mut best: Option<(&C, Probability)> = None;
        for (category, p) in self.posterior(attributes)? {
            let better = match &best {
                Some((_, top)) => p > *top,
                None => true,
            };
            if better {
                best = Some((category, p));
            }
        }
        Ok(best)
    }

    /// Unnormalized joint score `P(c) · Π P(a | c)`.
    fn score(&self, category: &C, attributes: &[A]) -> Result<Probability, ProbError> {
        let mut score = self.category_probability(category)?;
        for attribute in attributes {
            score *= self.attribute_probability_given_category(attribute, category)?;
        }
        Ok(score)
    }

    /// Scores of every known category, in first-seen order, and their sum.
    fn scores(&self, attributes: &[A]) -> Result<(Vec<(&C, Probability)>, Probability), ProbError> {
        let scores = self
            .known_categories()
            .map(|c| self.score(c, attributes).map(|s| (c, s)))
            .collect::<Result<Vec<_>, ProbError>>()?;

        let evidence = scores
            .iter()
            .fold(Probability::zero(), |acc, (_, s)| acc + s);
        if evidence.is_zero() {
            return Err(ProbError::ZeroEvidence {
                categories: scores.len(),
            });
        }
        Ok((scores, evidence))
    }
}
