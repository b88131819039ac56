// ============================================================
// Layer 4 — RawSplit
// ============================================================
// One split as a provider returns it: an ordered list of
// Samples. Implements burn's Dataset trait so a split can be
// handed straight to a burn DataLoader after reading.

use burn::data::dataset::Dataset;

use crate::domain::sample::Sample;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct RawSplit {
    samples: Vec<Sample>,
}

impl RawSplit {
    pub fn new(samples: Vec<Sample>) -> Self { Self { samples } }

    pub fn sample_count(&self) -> usize { self.samples.len() }

    pub fn examples(&self) -> impl Iterator<Item = &Sample> {
        self.samples.iter()
    }

    pub fn into_samples(self) -> Vec<Sample> { self.samples }
}

impl From<Vec<Sample>> for RawSplit {
    fn from(samples: Vec<Sample>) -> Self { Self::new(samples) }
}

impl FromIterator<Sample> for RawSplit {
    fn from_iter<I: IntoIterator<Item = Sample>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl Dataset<Sample> for RawSplit {
    fn get(&self, index: usize) -> Option<Sample> {
        self.samples.get(index).cloned()
    }

    fn len(&self) -> usize {
        self.samples.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dataset_access() {
        let split: RawSplit = vec![Sample::new("a", "x"), Sample::new("b", "y")].into();
        assert_eq!(Dataset::len(&split), 2);
        assert_eq!(split.get(1), Some(Sample::new("b", "y")));
        assert_eq!(split.get(2), None);
    }

    #[test]
    fn test_examples_keep_order() {
        let split: RawSplit = ["one", "two", "three"]
            .iter()
            .map(|t| Sample::new(*t, "l"))
            .collect();
        let texts: Vec<&str> = split.examples().map(|s| s.text.as_str()).collect();
        assert_eq!(texts, vec!["one", "two", "three"]);
    }
}
