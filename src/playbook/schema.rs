//! Playbook structure.
//!
//! Only the fields this crate rewrites are modelled. Every other key is
//! kept in an `extra` map at its level so a load/save round trip does not
//! lose configuration the host relies on.

use serde::{Deserialize, Serialize};
use serde_yaml::Value;
use std::collections::BTreeMap;

/// Root of an Antora playbook.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Playbook {
    /// Site metadata.
    #[serde(default)]
    pub site: Site,

    /// Content sources.
    #[serde(default)]
    pub content: Content,

    /// Everything else (`antora`, `ui`, `output`, `asciidoc`, ...).
    #[serde(flatten)]
    pub extra: BTreeMap<String, Value>,
}

/// The `site` key.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Site {
    /// Absolute base URL of the published site.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,

    /// Page reference used as the site home, e.g. `docs::index.adoc`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_page: Option<String>,

    #[serde(flatten)]
    pub extra: BTreeMap<String, Value>,
}

/// The `content` key.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Content {
    #[serde(default)]
    pub sources: Vec<ContentSource>,

    #[serde(flatten)]
    pub extra: BTreeMap<String, Value>,
}

/// One repository (or local directory) to pull documentation from.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ContentSource {
    /// Repository URL or local path.
    #[serde(default)]
    pub url: String,

    /// Directory of the component inside the repository.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_path: Option<String>,

    /// Several component directories inside the repository.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_paths: Option<Patterns>,

    /// Branch names or patterns.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub branches: Option<Patterns>,

    /// Version override for the component(s) in this source.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<Value>,

    #[serde(flatten)]
    pub extra: BTreeMap<String, Value>,
}

impl ContentSource {
    /// Whether the source points at the given component directory,
    /// either through `start_path` or one of its `start_paths`.
    pub fn has_start_path(&self, path: &str) -> bool {
        self.start_path.as_deref() == Some(path)
            || self
                .start_paths
                .as_ref()
                .is_some_and(|paths| paths.contains(path))
    }
}

/// A value that may be written as one string or a list.
///
/// A single string may itself be a comma-separated list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Patterns {
    One(String),
    Many(Vec<String>),
}

impl Patterns {
    /// Iterate over the individual entries.
    pub fn iter(&self) -> Box<dyn Iterator<Item = &str> + '_> {
        match self {
            Patterns::One(s) => Box::new(s.split(',').map(str::trim).filter(|p| !p.is_empty())),
            Patterns::Many(items) => Box::new(items.iter().map(String::as_str)),
        }
    }

    /// Whether an entry equals `value`.
    pub fn contains(&self, value: &str) -> bool {
        self.iter().any(|entry| entry == value)
    }
}

impl From<Vec<&str>> for Patterns {
    fn from(items: Vec<&str>) -> Self {
        Patterns::Many(items.into_iter().map(String::from).collect())
    }
}
