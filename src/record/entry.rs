//! Build record types.
//!
//! A [`BuildRecord`] is one snapshot of the platform plus every tracked
//! executable's version. Records compare by their canonical JSON form, so
//! the order executables were listed in does not affect equality.

use std::fmt;

use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::{Map, Value};

/// Probed versions keyed by trackable name, in declaration order.
///
/// A tool that was not found is stored explicitly as `None` so that
/// records built from the same config always have the same shape.
#[derive(Debug, Clone, Default)]
pub struct Executables {
    entries: Vec<(String, Option<String>)>,
}

impl Executables {
    /// Create an empty set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a tool's version, replacing an existing entry in place.
    pub fn insert(&mut self, name: impl Into<String>, version: Option<String>) {
        let name = name.into();
        match self.entries.iter_mut().find(|(n, _)| *n == name) {
            Some(entry) => entry.1 = version,
            None => self.entries.push((name, version)),
        }
    }

    /// Look up a tool. The outer `Option` is whether the tool is tracked,
    /// the inner one whether it was found.
    pub fn get(&self, name: &str) -> Option<Option<&str>> {
        self.entries
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_deref())
    }

    /// Iterate over `(name, version)` pairs in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, Option<&str>)> {
        self.entries.iter().map(|(n, v)| (n.as_str(), v.as_deref()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of tools that produced a version.
    pub fn found_count(&self) -> usize {
        self.entries.iter().filter(|(_, v)| v.is_some()).count()
    }
}

impl<N: Into<String>> FromIterator<(N, Option<String>)> for Executables {
    fn from_iter<I: IntoIterator<Item = (N, Option<String>)>>(iter: I) -> Self {
        let mut executables = Self::new();
        for (name, version) in iter {
            executables.insert(name, version);
        }
        executables
    }
}

impl Serialize for Executables {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (name, version) in &self.entries {
            map.serialize_entry(name, version)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for Executables {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct ExecutablesVisitor;

        impl<'de> Visitor<'de> for ExecutablesVisitor {
            type Value = Executables;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("a map of executable names to version strings or null")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
                let mut executables = Executables::new();
                while let Some((name, version)) = access.next_entry::<String, Option<String>>()? {
                    executables.insert(name, version);
                }
                Ok(executables)
            }
        }

        deserializer.deserialize_map(ExecutablesVisitor)
    }
}

/// One snapshot of the build environment.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BuildRecord {
    /// Platform identifier (e.g. "linux", "macos", "windows").
    pub platform: String,

    /// Probed versions for every trackable.
    pub executables: Executables,
}

impl BuildRecord {
    /// Create a record.
    pub fn new(platform: impl Into<String>, executables: Executables) -> Self {
        Self {
            platform: platform.into(),
            executables,
        }
    }

    /// Canonical serialized form used for structural equality.
    ///
    /// JSON with every object's keys sorted. Executables are inserted in
    /// sorted order, so the result does not depend on whether serde_json
    /// preserves insertion order.
    pub fn canonical(&self) -> String {
        let mut names: Vec<(&str, Option<&str>)> = self.executables.iter().collect();
        names.sort_by(|a, b| a.0.cmp(b.0));

        let mut executables = Map::new();
        for (name, version) in names {
            let value = version.map_or(Value::Null, |v| Value::String(v.to_string()));
            executables.insert(name.to_string(), value);
        }

        let mut record = Map::new();
        record.insert("executables".to_string(), Value::Object(executables));
        record.insert("platform".to_string(), Value::String(self.platform.clone()));

        Value::Object(record).to_string()
    }
}

impl PartialEq for BuildRecord {
    fn eq(&self, other: &Self) -> bool {
        self.canonical() == other.canonical()
    }
}

impl Eq for BuildRecord {}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(platform: &str, tools: &[(&str, Option<&str>)]) -> BuildRecord {
        BuildRecord::new(
            platform,
            tools
                .iter()
                .map(|(n, v)| (*n, v.map(String::from)))
                .collect(),
        )
    }

    #[test]
    fn insert_replaces_existing_entry_in_place() {
        let mut executables = Executables::new();
        executables.insert("node", None);
        executables.insert("git", Some("2.34.1".to_string()));
        executables.insert("node", Some("v20.11.0".to_string()));

        let names: Vec<_> = executables.iter().map(|(n, _)| n).collect();
        assert_eq!(names, vec!["node", "git"]);
        assert_eq!(executables.get("node"), Some(Some("v20.11.0")));
    }

    #[test]
    fn get_distinguishes_untracked_from_missing() {
        let executables: Executables = [("git", None)].into_iter().collect();
        assert_eq!(executables.get("git"), Some(None));
        assert_eq!(executables.get("node"), None);
    }

    #[test]
    fn found_count_ignores_missing_tools() {
        let r = record("linux", &[("git", Some("2.34.1")), ("bun", None)]);
        assert_eq!(r.executables.found_count(), 1);
        assert_eq!(r.executables.len(), 2);
    }

    #[test]
    fn serializes_missing_tool_as_null() {
        let r = record("linux", &[("git", Some("git version 2.34.1")), ("yarn", None)]);
        let json = serde_json::to_string(&r).unwrap();
        assert_eq!(
            json,
            r#"{"platform":"linux","executables":{"git":"git version 2.34.1","yarn":null}}"#
        );
    }

    #[test]
    fn serialization_keeps_declaration_order() {
        let r = record("linux", &[("zsh", None), ("bash", None)]);
        let json = serde_json::to_string(&r).unwrap();
        assert!(json.find("zsh").unwrap() < json.find("bash").unwrap());
    }

    #[test]
    fn deserializes_from_json() {
        let json = r#"{"platform":"macos","executables":{"node":"v20.11.0","deno":null}}"#;
        let r: BuildRecord = serde_json::from_str(json).unwrap();

        assert_eq!(r.platform, "macos");
        assert_eq!(r.executables.get("node"), Some(Some("v20.11.0")));
        assert_eq!(r.executables.get("deno"), Some(None));
    }

    #[test]
    fn canonical_form_sorts_keys() {
        let r = record("linux", &[("node", Some("v20")), ("git", None)]);
        assert_eq!(
            r.canonical(),
            r#"{"executables":{"git":null,"node":"v20"},"platform":"linux"}"#
        );
    }

    #[test]
    fn equality_ignores_executable_order() {
        let a = record("linux", &[("git", Some("2.34.1")), ("node", Some("v20"))]);
        let b = record("linux", &[("node", Some("v20")), ("git", Some("2.34.1"))]);
        assert_eq!(a, b);
    }

    #[test]
    fn equality_distinguishes_missing_from_absent_key() {
        let a = record("linux", &[("git", Some("2.34.1")), ("node", None)]);
        let b = record("linux", &[("git", Some("2.34.1"))]);
        assert_ne!(a, b);
    }

    #[test]
    fn equality_considers_platform() {
        let a = record("linux", &[("git", Some("2.34.1"))]);
        let b = record("macos", &[("git", Some("2.34.1"))]);
        assert_ne!(a, b);
    }
}
