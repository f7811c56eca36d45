//! Frequency tables accumulated from training samples.

use std::collections::{HashMap, HashSet};
use std::hash::Hash;

/// Raw counts over categories and attributes.
///
/// Invariants:
/// - `total_samples` equals the sum of all per-category sample counts
/// - each category's attribute-occurrence count equals the sum of its
///   co-occurrence counts
/// - the known sets only ever grow
///
/// Tables are written only while a model is being built; afterwards they are
/// exposed read-only through [`crate::NaiveBayes::counts`].
#[derive(Debug, Clone)]
pub struct FrequencyTable<C, A> {
    total_samples: u64,
    /// Known categories, in first-seen order.
    categories: Vec<C>,
    /// Known attributes, in first-seen order.
    attributes: Vec<A>,
    attribute_set: HashSet<A>,
    category_samples: HashMap<C, u64>,
    category_attributes: HashMap<C, u64>,
    co_occurrences: HashMap<C, HashMap<A, u64>>,
}

impl<C, A> Default for FrequencyTable<C, A> {
    fn default() -> Self {
        Self {
            total_samples: 0,
            categories: Vec::new(),
            attributes: Vec::new(),
            attribute_set: HashSet::new(),
            category_samples: HashMap::new(),
            category_attributes: HashMap::new(),
            co_occurrences: HashMap::new(),
        }
    }
}

impl<C, A> FrequencyTable<C, A>
where
    C: Eq + Hash + Clone,
    A: Eq + Hash + Clone,
{
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Fold one sample into the tables.
    ///
    /// Every attribute occurrence counts, so a sample listing the same
    /// attribute twice adds 2 to both the pair count and the category's
    /// occurrence total.
    pub(crate) fn observe<I>(&mut self, category: C, attributes: I)
    where
        I: IntoIterator<Item = A>,
    {
        self.total_samples += 1;

        if !self.category_samples.contains_key(&category) {
            self.categories.push(category.clone());
        }
        *self.category_samples.entry(category.clone()).or_insert(0) += 1;

        let mut occurrences = 0u64;
        let pairs = self.co_occurrences.entry(category.clone()).or_default();
        for attribute in attributes {
            if self.attribute_set.insert(attribute.clone()) {
                self.attributes.push(attribute.clone());
            }
            *pairs.entry(attribute).or_insert(0) += 1;
            occurrences += 1;
        }

        *self.category_attributes.entry(category).or_insert(0) += occurrences;
    }

    /// Number of samples folded so far.
    pub fn total_samples(&self) -> u64 {
        self.total_samples
    }

    /// Number of samples labeled `category` (0 if never seen).
    pub fn category_samples(&self, category: &C) -> u64 {
        self.category_samples.get(category).copied().unwrap_or(0)
    }

    /// Total attribute occurrences across samples labeled `category`.
    pub fn category_attributes(&self, category: &C) -> u64 {
        self.category_attributes.get(category).copied().unwrap_or(0)
    }

    /// Occurrences of `attribute` within samples labeled `category`.
    pub fn co_occurrences(&self, category: &C, attribute: &A) -> u64 {
        self.co_occurrences
            .get(category)
            .and_then(|pairs| pairs.get(attribute))
            .copied()
            .unwrap_or(0)
    }

    pub fn is_known_category(&self, category: &C) -> bool {
        self.category_samples.contains_key(category)
    }

    pub fn is_known_attribute(&self, attribute: &A) -> bool {
        self.attribute_set.contains(attribute)
    }

    pub fn categories(&self) -> &[C] {
        &self.categories
    }

    pub fn attributes(&self) -> &[A] {
        &self.attributes
    }

    /// Attributes seen with `category` and their counts, in no particular
    /// order.
    pub fn category_pairs(&self, category: &C) -> impl Iterator<Item = (&A, u64)> + '_ {
        self.co_occurrences
            .get(category)
            .into_iter()
            .flat_map(|pairs| pairs.iter().map(|(a, &n)| (a, n)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table() -> FrequencyTable<&'static str, &'static str> {
        let mut t = FrequencyTable::new();
        t.observe("spam", vec!["free", "money"]);
        t.observe("spam", vec!["free", "offer"]);
        t.observe("ham", vec!["meeting", "project"]);
        t.observe("ham", vec!["project", "report"]);
        t
    }

    #[test]
    fn test_counts() {
        let t = table();
        assert_eq!(t.total_samples(), 4);
        assert_eq!(t.category_samples(&"spam"), 2);
        assert_eq!(t.category_attributes(&"spam"), 4);
        assert_eq!(t.co_occurrences(&"spam", &"free"), 2);
        assert_eq!(t.co_occurrences(&"ham", &"project"), 2);
        assert!(t.is_known_attribute(&"offer"));
        assert!(!t.is_known_attribute(&"lunch"));
    }

    #[test]
    fn test_missing_keys_read_as_zero() {
        let t = table();
        assert_eq!(t.category_samples(&"eggs"), 0);
        assert_eq!(t.category_attributes(&"eggs"), 0);
        assert_eq!(t.co_occurrences(&"ham", &"free"), 0);
        assert_eq!(t.co_occurrences(&"eggs", &"free"), 0);
    }

    #[test]
    fn test_first_seen_order() {
        let t = table();
        assert_eq!(t.categories(), &["spam", "ham"]);
        assert_eq!(
            t.attributes(),
            &["free", "money", "offer", "meeting", "project", "report"]
        );
    }

    #[test]
    fn test_duplicate_attributes_count_per_occurrence() {
        let mut t = FrequencyTable::new();
        t.observe('c', vec!['x', 'x', 'y']);

        assert_eq!(t.co_occurrences(&'c', &'x'), 2);
        assert_eq!(t.category_attributes(&'c'), 3);
        assert_eq!(t.attributes().len(), 2);
    }

    #[test]
    fn test_empty_attribute_list_registers_category() {
        let mut t: FrequencyTable<u8, u8> = FrequencyTable::new();
        t.observe(7, Vec::new());

        assert!(t.is_known_category(&7));
        assert_eq!(t.category_samples(&7), 1);
        assert_eq!(t.category_attributes(&7), 0);
        assert!(t.attributes().is_empty());
    }

    #[test]
    fn test_occurrences_match_pair_sums() {
        let t = table();
        for c in t.categories() {
            let pair_sum: u64 = t.category_pairs(c).map(|(_, n)| n).sum();
            assert_eq!(pair_sum, t.category_attributes(c));
        }
    }
}
