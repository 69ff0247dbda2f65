//! Datasource UID map and placeholder substitution.
//!
//! Alert rule exports reference datasources by placeholder instead of by the
//! UID Grafana generated on this instance. Two placeholder forms are
//! recognized, both case-insensitive:
//!
//! - the Grafana export form `${DS_PROMETHEUS}`;
//! - the bare logical key (`prometheus`).
//!
//! A string value is replaced only when it is a placeholder as a whole, so
//! free text that merely mentions a datasource is left alone. Values under a
//! `type` field name the datasource plugin and are never rewritten, nor are
//! object keys.

use serde_json::Value;
use std::collections::BTreeMap;

/// Logical datasource key -> UID assigned by Grafana.
///
/// Keys are stored lowercase.
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize)]
pub struct DatasourceUids(BTreeMap<String, String>);

impl DatasourceUids {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the UID for a logical key, replacing any previous entry.
    pub fn insert(&mut self, key: &str, uid: impl Into<String>) {
        self.0.insert(key.to_lowercase(), uid.into());
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.get(&key.to_lowercase()).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Resolve a string value to a UID, if it is a placeholder.
    pub fn resolve(&self, value: &str) -> Option<&str> {
        match export_placeholder(value) {
            Some(name) => self.get(name),
            None => self.get(value),
        }
    }

    /// Rewrite every placeholder in `value`, at any depth.
    ///
    /// Returns the number of strings replaced.
    pub fn substitute(&self, value: &mut Value) -> usize {
        self.substitute_in(value, false)
    }

    fn substitute_in(&self, value: &mut Value, in_type_field: bool) -> usize {
        match value {
            Value::String(_) if in_type_field => 0,
            Value::String(s) => match self.resolve(s) {
                Some(uid) => {
                    *s = uid.to_string();
                    1
                }
                None => {
                    if export_placeholder(s).is_some() {
                        tracing::warn!(placeholder = %s, "No datasource registered for placeholder");
                    }
                    0
                }
            },
            // Array elements inherit the field they belong to
            Value::Array(items) => items
                .iter_mut()
                .map(|item| self.substitute_in(item, in_type_field))
                .sum(),
            Value::Object(map) => map
                .iter_mut()
                .map(|(key, item)| self.substitute_in(item, key.eq_ignore_ascii_case("type")))
                .sum(),
            _ => 0,
        }
    }
}

impl FromIterator<(String, String)> for DatasourceUids {
    fn from_iter<I: IntoIterator<Item = (String, String)>>(iter: I) -> Self {
        let mut uids = Self::new();
        for (key, uid) in iter {
            uids.insert(&key, uid);
        }
        uids
    }
}

/// `${DS_PROMETHEUS}` -> `PROMETHEUS`.
fn export_placeholder(value: &str) -> Option<&str> {
    let inner = value.strip_prefix("${")?.strip_suffix('}')?;
    let name = inner.get(3..).filter(|name| !name.is_empty())?;
    inner.get(..3)?.eq_ignore_ascii_case("ds_").then_some(name)
}
