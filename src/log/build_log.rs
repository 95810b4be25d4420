//! The build log and the merge algorithm.
//!
//! The log maps project versions to the records seen for them. Order is
//! significant at both levels: the most recently merged version comes
//! first, and within a version the newest record comes first. Ordering
//! never looks at what the version strings mean.

use std::fmt;

use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::record::BuildRecord;

/// What [`BuildLog::merge_record`] did with the record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MergeOutcome {
    /// The record was new and now heads its version's bucket.
    Added,
    /// A structurally identical record was already in the bucket.
    Duplicate,
}

/// Ordered history of build records grouped by project version.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BuildLog {
    entries: Vec<(String, Vec<BuildRecord>)>,
}

impl BuildLog {
    /// Create an empty log.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of versions in the log.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Versions in stored order (most recently merged first).
    pub fn versions(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(v, _)| v.as_str())
    }

    /// Records for a version, newest first.
    pub fn get(&self, version: &str) -> Option<&[BuildRecord]> {
        self.position(version).map(|i| self.entries[i].1.as_slice())
    }

    pub fn contains(&self, version: &str) -> bool {
        self.position(version).is_some()
    }

    /// Iterate over `(version, records)` in stored order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[BuildRecord])> {
        self.entries
            .iter()
            .map(|(v, records)| (v.as_str(), records.as_slice()))
    }

    /// Total number of records across all versions.
    pub fn record_count(&self) -> usize {
        self.entries.iter().map(|(_, records)| records.len()).sum()
    }

    /// Move `version` to the first position, keeping the relative order of
    /// the others. Returns false if the version is not in the log.
    pub fn move_to_front(&mut self, version: &str) -> bool {
        match self.position(version) {
            Some(index) => {
                self.entries[..=index].rotate_right(1);
                true
            }
            None => false,
        }
    }

    /// Merge `record` into the bucket for `version`.
    ///
    /// A record already present (by canonical form) is not added again.
    /// Either way `version` ends up as the first key.
    pub fn merge_record(&mut self, version: &str, record: BuildRecord) -> MergeOutcome {
        let outcome = match self.position(version) {
            Some(index) => {
                let bucket = &mut self.entries[index].1;
                let canonical = record.canonical();
                if bucket.iter().any(|existing| existing.canonical() == canonical) {
                    MergeOutcome::Duplicate
                } else {
                    bucket.insert(0, record);
                    MergeOutcome::Added
                }
            }
            None => {
                self.entries.push((version.to_string(), vec![record]));
                MergeOutcome::Added
            }
        };

        self.move_to_front(version);
        outcome
    }

    /// A copy limited to one version and/or the first `limit` versions.
    pub fn filtered(&self, version: Option<&str>, limit: Option<usize>) -> BuildLog {
        let entries = self
            .entries
            .iter()
            .filter(|(v, _)| version.is_none_or(|wanted| v == wanted))
            .take(limit.unwrap_or(usize::MAX))
            .cloned()
            .collect();
        BuildLog { entries }
    }

    fn position(&self, version: &str) -> Option<usize> {
        self.entries.iter().position(|(v, _)| v == version)
    }
}

/// Merge `record` into `log` under `version` and return the updated log.
pub fn merge(mut log: BuildLog, version: &str, record: BuildRecord) -> BuildLog {
    log.merge_record(version, record);
    log
}

impl Serialize for BuildLog {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (version, records) in &self.entries {
            map.serialize_entry(version, records)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for BuildLog {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct BuildLogVisitor;

        impl<'de> Visitor<'de> for BuildLogVisitor {
            type Value = BuildLog;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("a map of project versions to lists of build records")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
                let mut log = BuildLog::new();
                while let Some((version, records)) =
                    access.next_entry::<String, Vec<BuildRecord>>()?
                {
                    match log.position(&version) {
                        Some(index) => log.entries[index].1 = records,
                        None => log.entries.push((version, records)),
                    }
                }
                Ok(log)
            }
        }

        deserializer.deserialize_map(BuildLogVisitor)
    }
}
