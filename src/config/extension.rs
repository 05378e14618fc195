//! Extension configuration handed over by the host.
//!
//! Antora passes each extension the keys of its own entry in the
//! playbook's `antora.extensions` list. The registration contract accepts
//! them, but options are resolved from built-in defaults and environment
//! variables only; the keys are kept as given and never merged.

use serde_yaml::{Mapping, Value};

/// Per-extension configuration supplied by the host.
///
/// # Example
///
/// ```
/// use antora_ci::config::ExtensionConfig;
///
/// let mapping = serde_yaml::from_str("componentPath: guide\n").unwrap();
/// let config = ExtensionConfig::from_mapping(mapping);
/// assert_eq!(config.get("componentPath").and_then(|v| v.as_str()), Some("guide"));
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ExtensionConfig {
    values: Mapping,
}

impl ExtensionConfig {
    /// Create an empty configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Wrap the keys of an extension entry.
    pub fn from_mapping(values: Mapping) -> Self {
        Self { values }
    }

    /// Get a raw value by key.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.values.get(key)
    }

    /// Check whether the host passed no keys.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Number of keys passed by the host.
    pub fn len(&self) -> usize {
        self.values.len()
    }
}
