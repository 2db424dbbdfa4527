use std::collections::BTreeMap;

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use tracing::warn;

use crate::OptionDetail;

/// Option detail records keyed by `option_name`.
///
/// Keys are unique: inserting a record whose name is already present replaces
/// the stored one (last write wins).
///
/// Serialized as an array of records, the shape `option_details` has in a
/// configuration document. Deserialization goes through [`OptionDetails::insert`],
/// so every key equals its record's `option_name`.
#[derive(Default, Debug, Clone, PartialEq, Eq)]
pub struct OptionDetails(BTreeMap<String, OptionDetail>);

impl OptionDetails {
    pub fn new() -> Self {
        Self(BTreeMap::new())
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Insert a record under its own `option_name`.
    ///
    /// Returns the record it replaced, if any.
    pub fn insert(&mut self, detail: OptionDetail) -> Option<OptionDetail> {
        let key = detail.option_name().to_string();
        let prev = self.0.insert(key, detail);
        if let Some(prev) = &prev {
            warn!(option = prev.option_name(), "duplicate option detail replaced");
        }
        prev
    }

    pub fn get(&self, option_name: &str) -> Option<&OptionDetail> {
        self.0.get(option_name)
    }

    pub fn contains(&self, option_name: &str) -> bool {
        self.0.contains_key(option_name)
    }

    /// Iterate records ordered by option name.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &OptionDetail)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v))
    }
}

impl Serialize for OptionDetails {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_seq(self.0.values())
    }
}

impl<'de> Deserialize<'de> for OptionDetails {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let records = Vec::<OptionDetail>::deserialize(deserializer)?;
        let mut details = Self::new();
        for record in records {
            details.insert(record);
        }
        Ok(details)
    }
}
