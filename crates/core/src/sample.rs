//! Ordered training samples.
//!
//! A [`TrainingData`] is plain transport: it keeps `(category, attributes)`
//! pairs in the order they were added and hands them out again in that
//! order. It never validates, deduplicates or rewrites anything.

/// A single labeled observation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sample<C, A> {
    /// The label this observation belongs to.
    pub category: C,
    /// Attributes seen with the label. Duplicates are kept.
    pub attributes: Vec<A>,
}

impl<C, A> Sample<C, A> {
    /// Create a sample from a category and its attributes.
    pub fn new(category: C, attributes: Vec<A>) -> Self {
        Self {
            category,
            attributes,
        }
    }
}

impl<C, A> From<(C, Vec<A>)> for Sample<C, A> {
    fn from((category, attributes): (C, Vec<A>)) -> Self {
        Self::new(category, attributes)
    }
}

/// An append-only sequence of [`Sample`]s.
///
/// # Example
///
/// ```rust
/// use bayes_core::TrainingData;
///
/// let mut data = TrainingData::new();
/// data.add("spam", vec!["free", "money"]);
/// data.add("ham", vec!["meeting"]);
///
/// let labels: Vec<_> = data.iter().map(|s| s.category).collect();
/// assert_eq!(labels, vec!["spam", "ham"]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrainingData<C, A> {
    samples: Vec<Sample<C, A>>,
}

impl<C, A> Default for TrainingData<C, A> {
    fn default() -> Self {
        Self {
            samples: Vec::new(),
        }
    }
}

impl<C, A> TrainingData<C, A> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            samples: Vec::with_capacity(capacity),
        }
    }

    /// Append a `(category, attributes)` pair.
    pub fn add(&mut self, category: C, attributes: Vec<A>) {
        self.samples.push(Sample::new(category, attributes));
    }

    /// Append an already assembled sample.
    pub fn push(&mut self, sample: Sample<C, A>) {
        self.samples.push(sample);
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Samples in insertion order.
    pub fn iter(&self) -> std::slice::Iter<'_, Sample<C, A>> {
        self.samples.iter()
    }
}

impl<C, A> FromIterator<Sample<C, A>> for TrainingData<C, A> {
    fn from_iter<I: IntoIterator<Item = Sample<C, A>>>(iter: I) -> Self {
        Self {
            samples: iter.into_iter().collect(),
        }
    }
}

impl<C, A> FromIterator<(C, Vec<A>)> for TrainingData<C, A> {
    fn from_iter<I: IntoIterator<Item = (C, Vec<A>)>>(iter: I) -> Self {
        iter.into_iter().map(Sample::from).collect()
    }
}

impl<C, A> Extend<(C, Vec<A>)> for TrainingData<C, A> {
    fn extend<I: IntoIterator<Item = (C, Vec<A>)>>(&mut self, iter: I) {
        self.samples.extend(iter.into_iter().map(Sample::from));
    }
}

impl<C, A> IntoIterator for TrainingData<C, A> {
    type Item = Sample<C, A>;
    type IntoIter = std::vec::IntoIter<Sample<C, A>>;

    fn into_iter(self) -> Self::IntoIter {
        self.samples.into_iter()
    }
}

impl<'a, C, A> IntoIterator for &'a TrainingData<C, A> {
    type Item = &'a Sample<C, A>;
    type IntoIter = std::slice::Iter<'a, Sample<C, A>>;

    fn into_iter(self) -> Self::IntoIter {
        self.samples.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insertion_order_is_preserved() {
        let mut data = TrainingData::new();
        data.add(1, vec!['a']);
        data.add(2, vec!['b', 'b']);
        data.push(Sample::new(1, vec![]));

        let categories: Vec<i32> = data.iter().map(|s| s.category).collect();
        assert_eq!(categories, vec![1, 2, 1]);
        assert_eq!(data.len(), 3);
    }

    #[test]
    fn test_duplicates_are_kept() {
        let data: TrainingData<&str, &str> =
            vec![("x", vec!["a", "a"]), ("x", vec!["a", "a"])].into_iter().collect();

        assert_eq!(data.len(), 2);
        assert_eq!(data.iter().next().map(|s| s.attributes.len()), Some(2));
    }

    #[test]
    fn test_extend_appends_to_end() {
        let mut data: TrainingData<u8, u8> = TrainingData::with_capacity(4);
        assert!(data.is_empty());

        data.add(0, vec![1]);
        data.extend(vec![(1, vec![2]), (2, vec![3])]);

        let last = data.into_iter().last().unwrap();
        assert_eq!(last, Sample::new(2, vec![3]));
    }
}
