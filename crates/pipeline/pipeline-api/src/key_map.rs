//! Value-to-key mapping for string labels

use serde::{Deserialize, Serialize};

/// Maps label strings to dense keys `0..len` in order of first appearance
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LabelKeyMap {
    values: Vec<String>,
}

impl LabelKeyMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build the mapping from the labels seen in training data.
    pub fn fit<'a, I>(labels: I) -> Self
    where
        I: IntoIterator<Item = &'a str>,
    {
        let mut values: Vec<String> = Vec::new();
        for label in labels {
            if !values.iter().any(|v| v == label) {
                values.push(label.to_string());
            }
        }
        Self { values }
    }

    pub fn key(&self, value: &str) -> Option<usize> {
        self.values.iter().position(|v| v == value)
    }

    pub fn value(&self, key: usize) -> Option<&str> {
        self.values.get(key).map(String::as_str)
    }

    pub fn values(&self) -> &[String] {
        &self.values
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keys_follow_first_appearance() {
        let map = LabelKeyMap::fit(["lamp", "sun", "lamp", "dark", "sun"]);
        assert_eq!(map.len(), 3);
        assert_eq!(map.key("lamp"), Some(0));
        assert_eq!(map.key("sun"), Some(1));
        assert_eq!(map.key("dark"), Some(2));
        assert_eq!(map.value(1), Some("sun"));
    }

    #[test]
    fn test_unknown_values() {
        let map = LabelKeyMap::fit(["a", "b"]);
        assert_eq!(map.key("c"), None);
        assert_eq!(map.value(5), None);
        assert!(LabelKeyMap::new().is_empty());
    }
}
