// ============================================================
// Layer 3 — Sample and SplitData Domain Types
// ============================================================
// A Sample is one labelled example: the raw text and the raw
// label exactly as the provider produced them. Nothing here
// trims, lowercases, or parses either field.
//
// SplitData is the reader's result: an ordered mapping from
// split name ("train", "valid", "test", ...) to the samples of
// that split. Order matters — requested splits come first in
// the order they were asked for, a carved-out "valid" split is
// appended after them.
//
// On disk a Sample is written as a two-element JSON array
// ["text", "label"], and SplitData as a JSON object whose keys
// keep the split order:
//
//   {"train": [["great movie", "pos"], ...], "test": [...]}

use serde::ser::SerializeMap;
use serde::{Deserialize, Serialize, Serializer};

/// One (text, label) pair.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "(String, String)", into = "(String, String)")]
pub struct Sample {
    pub text:  String,
    pub label: String,
}

impl Sample {
    pub fn new(text: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            text:  text.into(),
            label: label.into(),
        }
    }
}

impl From<(String, String)> for Sample {
    fn from((text, label): (String, String)) -> Self {
        Self { text, label }
    }
}

impl From<Sample> for (String, String) {
    fn from(s: Sample) -> Self {
        (s.text, s.label)
    }
}

/// Ordered mapping split name → samples.
///
/// A Vec of pairs rather than a HashMap: the number of splits is
/// tiny and insertion order is part of the contract.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SplitData {
    splits: Vec<(String, Vec<Sample>)>,
}

impl SplitData {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a split. An existing split with the same name is
    /// replaced in place, keeping its position.
    pub fn insert(&mut self, name: impl Into<String>, samples: Vec<Sample>) {
        let name = name.into();
        match self.splits.iter_mut().find(|(n, _)| *n == name) {
            Some((_, existing)) => *existing = samples,
            None                => self.splits.push((name, samples)),
        }
    }

    pub fn get(&self, name: &str) -> Option<&[Sample]> {
        self.splits
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, s)| s.as_slice())
    }

    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// Split names in order
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.splits.iter().map(|(n, _)| n.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[Sample])> {
        self.splits.iter().map(|(n, s)| (n.as_str(), s.as_slice()))
    }

    /// Number of splits (not samples)
    pub fn len(&self) -> usize {
        self.splits.len()
    }

    pub fn is_empty(&self) -> bool {
        self.splits.is_empty()
    }

    /// Total number of samples across all splits
    pub fn total_samples(&self) -> usize {
        self.splits.iter().map(|(_, s)| s.len()).sum()
    }

    pub fn into_inner(self) -> Vec<(String, Vec<Sample>)> {
        self.splits
    }
}

impl Serialize for SplitData {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.splits.len()))?;
        for (name, samples) in &self.splits {
            map.serialize_entry(name, samples)?;
        }
        map.end()
    }
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_keeps_order() {
        let mut data = SplitData::new();
        data.insert("train", vec![Sample::new("a", "x")]);
        data.insert("test", vec![]);
        data.insert("valid", vec![]);
        let names: Vec<&str> = data.names().collect();
        assert_eq!(names, vec!["train", "test", "valid"]);
    }

    #[test]
    fn test_insert_replaces_in_place() {
        let mut data = SplitData::new();
        data.insert("train", vec![Sample::new("a", "x"), Sample::new("b", "y")]);
        data.insert("test", vec![]);
        data.insert("train", vec![Sample::new("c", "z")]);

        // Still first, but now holds the replacement
        assert_eq!(data.names().next(), Some("train"));
        assert_eq!(data.get("train").unwrap().len(), 1);
        assert_eq!(data.len(), 2);
    }

    #[test]
    fn test_serialises_as_ordered_pairs() {
        let mut data = SplitData::new();
        data.insert("train", vec![Sample::new("good film", "pos")]);
        data.insert("test", vec![Sample::new(" raw  text ", "neg")]);

        let json = serde_json::to_string(&data).unwrap();
        assert_eq!(
            json,
            r#"{"train":[["good film","pos"]],"test":[[" raw  text ","neg"]]}"#
        );
    }

    #[test]
    fn test_sample_deserialises_from_pair() {
        let s: Sample = serde_json::from_str(r#"["hello", "greeting"]"#).unwrap();
        assert_eq!(s, Sample::new("hello", "greeting"));
    }

    #[test]
    fn test_total_samples() {
        let mut data = SplitData::new();
        data.insert("train", vec![Sample::new("a", "1"), Sample::new("b", "2")]);
        data.insert("test", vec![Sample::new("c", "3")]);
        assert_eq!(data.total_samples(), 3);
    }
}
