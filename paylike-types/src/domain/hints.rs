//! Ordered, duplicate-free hint collection.

use serde::{Deserialize, Serialize};

/// Hints collected during a payment flow.
///
/// Insertion order is preserved and a hint is stored at most once, so the
/// collection only ever grows at its tail.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Vec<String>", into = "Vec<String>")]
pub struct Hints(Vec<String>);

impl Hints {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends every hint not already present. Returns how many were added.
    pub fn merge<I, S>(&mut self, hints: I) -> usize
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let before = self.0.len();
        for hint in hints {
            let hint = hint.into();
            if !self.contains(&hint) {
                self.0.push(hint);
            }
        }
        self.0.len() - before
    }

    pub fn contains(&self, hint: &str) -> bool {
        self.0.iter().any(|h| h == hint)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, String> {
        self.0.iter()
    }

    pub fn as_slice(&self) -> &[String] {
        &self.0
    }

    pub fn to_vec(&self) -> Vec<String> {
        self.0.clone()
    }
}

impl<S: Into<String>> FromIterator<S> for Hints {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut hints = Hints::new();
        hints.merge(iter);
        hints
    }
}

impl From<Vec<String>> for Hints {
    fn from(hints: Vec<String>) -> Self {
        hints.into_iter().collect()
    }
}

impl From<Hints> for Vec<String> {
    fn from(hints: Hints) -> Self {
        hints.0
    }
}

impl<'a> IntoIterator for &'a Hints {
    type Item = &'a String;
    type IntoIter = std::slice::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_merge_keeps_first_seen_order() {
        let mut hints: Hints = ["hint0", "hint1"].into_iter().collect();
        let added = hints.merge(["hint1", "hint2", "hint0", "hint3"]);
        assert_eq!(added, 2);
        assert_eq!(hints.as_slice(), ["hint0", "hint1", "hint2", "hint3"]);
    }

    #[test]
    fn test_merge_known_hint_is_noop() {
        let mut hints: Hints = ["hint0"].into_iter().collect();
        assert_eq!(hints.merge(["hint0"]), 0);
        assert_eq!(hints.len(), 1);
    }

    #[test]
    fn test_deserialize_drops_duplicates() {
        let hints: Hints = serde_json::from_str(r#"["a","b","a"]"#).unwrap();
        assert_eq!(hints.as_slice(), ["a", "b"]);
        assert_eq!(serde_json::to_string(&hints).unwrap(), r#"["a","b"]"#);
    }
}
