//! Domain entities: core data structures

use std::collections::btree_map;
use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Deserializer};

use crate::domain::DomainError;

/// A CI/CD variable as returned by the variables endpoints.
///
/// Only `key` and `value` take part in output; the remaining fields are
/// carried when the server sends them.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Variable {
    #[serde(alias = "Key")]
    pub key: String,
    #[serde(alias = "Value", default, deserialize_with = "null_as_empty")]
    pub value: String,
    #[serde(default)]
    pub variable_type: Option<String>,
    #[serde(default)]
    pub protected: bool,
    #[serde(default)]
    pub masked: bool,
    #[serde(default)]
    pub environment_scope: Option<String>,
}

impl Variable {
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
            variable_type: None,
            protected: false,
            masked: false,
            environment_scope: None,
        }
    }
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

/// Flat key/value mapping of variables for one or more scopes.
///
/// Keys are unique; inserting an existing key replaces its value.
/// Iteration is ordered by key.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VariableSet {
    entries: BTreeMap<String, String>,
}

impl VariableSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a single entry, replacing any previous value for `key`.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.entries.insert(key.into(), value.into());
    }

    /// Lay `other` over `self`: keys present in both take `other`'s value.
    pub fn overlay(&mut self, other: VariableSet) {
        self.entries.extend(other.entries);
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> btree_map::Iter<'_, String, String> {
        self.entries.iter()
    }
}

/// Folds decoded variables in order; a repeated key keeps its last value.
impl FromIterator<Variable> for VariableSet {
    fn from_iter<I: IntoIterator<Item = Variable>>(iter: I) -> Self {
        let mut set = VariableSet::new();
        for var in iter {
            set.insert(var.key, var.value);
        }
        set
    }
}

/// Owning group of a project.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Namespace {
    #[serde(default)]
    pub id: u64,
}

/// A project record from the project detail or listing endpoints.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Project {
    #[serde(default)]
    pub id: u64,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub path_with_namespace: String,
    #[serde(default)]
    pub namespace: Namespace,
}

/// Project identifier as given on the command line, plus its URL path form.
///
/// Namespaced paths (`group/sub/project`) must travel as a single path
/// segment, so every `/` becomes `%2F`. Nothing else is escaped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectRef {
    raw: String,
    encoded: String,
}

impl ProjectRef {
    pub fn new(raw: impl Into<String>) -> Result<Self, DomainError> {
        let raw = raw.into();
        if raw.is_empty() {
            return Err(DomainError::EmptyProject);
        }
        let encoded = encode_path_segment(&raw);
        Ok(Self { raw, encoded })
    }

    pub fn raw(&self) -> &str {
        &self.raw
    }

    pub fn encoded(&self) -> &str {
        &self.encoded
    }
}

impl fmt::Display for ProjectRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.encoded)
    }
}

/// Replace every `/` with `%2F`.
pub fn encode_path_segment(raw: &str) -> String {
    raw.replace('/', "%2F")
}
