use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

/// Set of recognized log option names, backed by [`BTreeSet`].
///
/// Only presence matters: a name carries no value of its own.
#[derive(Default, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LogOptions(BTreeSet<String>);

impl LogOptions {
    /// Create an empty set.
    pub fn new() -> Self {
        Self(BTreeSet::new())
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Insert a name.
    ///
    /// Returns `false` if the name was already present; the set is unchanged in that case.
    pub fn insert(&mut self, name: impl Into<String>) -> bool {
        self.0.insert(name.into())
    }

    pub fn contains(&self, name: &str) -> bool {
        self.0.contains(name)
    }

    /// Iterate names in lexicographic order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }
}

impl<S: Into<String>> FromIterator<S> for LogOptions {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self(iter.into_iter().map(Into::into).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::LogOptions;

    #[test]
    fn new_is_empty() {
        let opts = LogOptions::new();
        assert!(opts.is_empty());
        assert_eq!(opts.len(), 0);
        assert!(!opts.contains("a"));
    }

    #[test]
    fn duplicate_insert_keeps_single_entry() {
        let mut opts = LogOptions::new();
        assert!(opts.insert("a"));
        assert!(!opts.insert("a"));
        assert_eq!(opts.len(), 1);
    }

    #[test]
    fn iter_is_sorted() {
        let opts: LogOptions = ["b", "c", "a"].into_iter().collect();
        let names: Vec<_> = opts.iter().collect();
        assert_eq!(names, vec!["a", "b", "c"]);
    }

    #[test]
    fn serde_transparent_array() {
        let opts: LogOptions = ["x", "y"].into_iter().collect();
        let json = serde_json::to_string(&opts).unwrap();
        assert_eq!(json, r#"["x","y"]"#);
    }
}
