//! Option values and environment overrides.
//!
//! Customisation options are either booleans or strings. Defaults are
//! layered under values taken from environment variables, which are
//! coerced to booleans when they spell one.
//!
//! # Example
//!
//! ```
//! use std::collections::BTreeMap;
//! use antora_ci::config::{resolve_with_env, OptionValue};
//!
//! let mut defaults = BTreeMap::new();
//! defaults.insert("keep", OptionValue::Bool(false));
//!
//! let resolved = resolve_with_env(&defaults, &[("keep", "KEEP")], |key| match key {
//!     "KEEP" => Ok(" Yes ".to_string()),
//!     _ => Err(std::env::VarError::NotPresent),
//! });
//! assert_eq!(resolved["keep"], OptionValue::Bool(true));
//! ```

use serde::Serialize;
use std::collections::BTreeMap;
use std::fmt;

/// A single option value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum OptionValue {
    Bool(bool),
    Text(String),
}

impl OptionValue {
    /// Truthiness used when a value stands in a boolean slot.
    ///
    /// Strings that did not coerce to a boolean count as set when
    /// they are non-empty.
    pub fn is_truthy(&self) -> bool {
        match self {
            OptionValue::Bool(b) => *b,
            OptionValue::Text(s) => !s.is_empty(),
        }
    }
}

impl fmt::Display for OptionValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OptionValue::Bool(b) => write!(f, "{}", b),
            OptionValue::Text(s) => write!(f, "{}", s),
        }
    }
}

impl From<bool> for OptionValue {
    fn from(value: bool) -> Self {
        OptionValue::Bool(value)
    }
}

impl From<&str> for OptionValue {
    fn from(value: &str) -> Self {
        OptionValue::Text(value.to_string())
    }
}

impl From<String> for OptionValue {
    fn from(value: String) -> Self {
        OptionValue::Text(value)
    }
}

/// Convert a string into a boolean when it spells one.
///
/// Matching is case-insensitive and ignores surrounding whitespace:
/// `true`, `yes`, `1` become `true`; `false`, `no`, `0` become `false`.
/// Anything else is returned untouched as text.
pub fn try_string_to_bool(raw: &str) -> OptionValue {
    match raw.to_lowercase().trim() {
        "true" | "yes" | "1" => OptionValue::Bool(true),
        "false" | "no" | "0" => OptionValue::Bool(false),
        _ => OptionValue::Text(raw.to_string()),
    }
}

/// Overlay environment variables onto default options.
///
/// For every `(option, variable)` pair, the option takes the coerced value
/// of the variable when it is set, and keeps its default otherwise. Options
/// without a pair are carried over unchanged. The result is a new map; the
/// defaults are not touched.
pub fn resolve_with_env<K, F>(
    defaults: &BTreeMap<K, OptionValue>,
    overrides: &[(K, &str)],
    env_fn: F,
) -> BTreeMap<K, OptionValue>
where
    K: Ord + Clone,
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    overrides
        .iter()
        .fold(defaults.clone(), |mut acc, (option, variable)| {
            if let Ok(raw) = env_fn(variable) {
                acc.insert(option.clone(), try_string_to_bool(&raw));
            }
            acc
        })
}

/// Names of the options the component customisation understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum OptionKey {
    ComponentPath,
    ComponentAsStartPage,
    KeepOwnComponentVersions,
    KeepOtherComponents,
}

impl OptionKey {
    /// The camelCase name used by the host.
    pub fn name(&self) -> &'static str {
        match self {
            OptionKey::ComponentPath => "componentPath",
            OptionKey::ComponentAsStartPage => "componentAsStartPage",
            OptionKey::KeepOwnComponentVersions => "keepOwnComponentVersions",
            OptionKey::KeepOtherComponents => "keepOtherComponents",
        }
    }
}

impl fmt::Display for OptionKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A resolved set of options.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Options(BTreeMap<OptionKey, OptionValue>);

impl Options {
    /// Wrap an already resolved map.
    pub fn new(values: BTreeMap<OptionKey, OptionValue>) -> Self {
        Self(values)
    }

    /// Get a value.
    pub fn get(&self, key: OptionKey) -> Option<&OptionValue> {
        self.0.get(&key)
    }

    /// Set a value, returning the previous one.
    pub fn set(&mut self, key: OptionKey, value: impl Into<OptionValue>) -> Option<OptionValue> {
        self.0.insert(key, value.into())
    }

    /// Value in a boolean slot. Missing options are `false`.
    pub fn flag(&self, key: OptionKey) -> bool {
        self.get(key).is_some_and(OptionValue::is_truthy)
    }

    /// Value in a string slot.
    ///
    /// Booleans are not strings and never stand in for one, so a
    /// variable coerced to `true` yields `None` like a missing option.
    pub fn text(&self, key: OptionKey) -> Option<&str> {
        match self.get(key)? {
            OptionValue::Text(s) => Some(s),
            OptionValue::Bool(_) => None,
        }
    }

    /// Borrow the underlying map.
    pub fn as_map(&self) -> &BTreeMap<OptionKey, OptionValue> {
        &self.0
    }
}

impl fmt::Display for Options {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parts: Vec<String> = self
            .0
            .iter()
            .map(|(key, value)| format!("{}={}", key, value))
            .collect();
        write!(f, "{}", parts.join(", "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn make_env(vars: &[(&str, &str)]) -> impl Fn(&str) -> Result<String, std::env::VarError> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned().ok_or(std::env::VarError::NotPresent)
    }

    fn defaults() -> BTreeMap<&'static str, OptionValue> {
        let mut map = BTreeMap::new();
        map.insert("path", OptionValue::from("docs"));
        map.insert("flag", OptionValue::Bool(true));
        map.insert("other", OptionValue::Bool(false));
        map
    }

    #[test]
    fn coerces_truthy_strings() {
        assert_eq!(try_string_to_bool("true"), OptionValue::Bool(true));
        assert_eq!(try_string_to_bool("YES"), OptionValue::Bool(true));
        assert_eq!(try_string_to_bool(" 1 "), OptionValue::Bool(true));
    }

    #[test]
    fn coerces_falsy_strings() {
        assert_eq!(try_string_to_bool("False"), OptionValue::Bool(false));
        assert_eq!(try_string_to_bool("No"), OptionValue::Bool(false));
        assert_eq!(try_string_to_bool("\t0\n"), OptionValue::Bool(false));
    }

    #[test]
    fn leaves_other_strings_untouched() {
        assert_eq!(try_string_to_bool("maybe"), OptionValue::from("maybe"));
        assert_eq!(try_string_to_bool(" Docs "), OptionValue::from(" Docs "));
        assert_eq!(try_string_to_bool(""), OptionValue::from(""));
    }

    #[test]
    fn resolve_without_env_returns_defaults() {
        let overrides = [("path", "PATH_VAR"), ("flag", "FLAG_VAR")];
        let resolved = resolve_with_env(&defaults(), &overrides, make_env(&[]));
        assert_eq!(resolved, defaults());
    }

    #[test]
    fn resolve_applies_coerced_overrides() {
        let overrides = [
            ("a", "A"),
            ("b", "B"),
            ("c", "C"),
            ("d", "D"),
            ("e", "E"),
        ];
        let env = make_env(&[
            ("A", "YES"),
            ("B", " No "),
            ("C", "1"),
            ("D", "0"),
            ("E", "maybe"),
        ]);
        let resolved = resolve_with_env(&BTreeMap::new(), &overrides, env);
        assert_eq!(resolved["a"], OptionValue::Bool(true));
        assert_eq!(resolved["b"], OptionValue::Bool(false));
        assert_eq!(resolved["c"], OptionValue::Bool(true));
        assert_eq!(resolved["d"], OptionValue::Bool(false));
        assert_eq!(resolved["e"], OptionValue::from("maybe"));
    }

    #[test]
    fn resolve_ignores_variables_without_mapping() {
        let overrides = [("path", "PATH_VAR")];
        let env = make_env(&[("FLAG_VAR", "false")]);
        let resolved = resolve_with_env(&defaults(), &overrides, env);
        assert_eq!(resolved["flag"], OptionValue::Bool(true));
    }

    #[test]
    fn resolve_does_not_touch_defaults() {
        let defaults = defaults();
        let overrides = [("path", "PATH_VAR")];
        let resolved = resolve_with_env(&defaults, &overrides, make_env(&[("PATH_VAR", "guide")]));
        assert_eq!(resolved["path"], OptionValue::from("guide"));
        assert_eq!(defaults["path"], OptionValue::from("docs"));
    }

    #[test]
    fn empty_variable_counts_as_set() {
        let overrides = [("path", "PATH_VAR")];
        let resolved = resolve_with_env(&defaults(), &overrides, make_env(&[("PATH_VAR", "")]));
        assert_eq!(resolved["path"], OptionValue::from(""));
    }

    #[test]
    fn truthiness_follows_value_kind() {
        assert!(OptionValue::Bool(true).is_truthy());
        assert!(!OptionValue::Bool(false).is_truthy());
        assert!(OptionValue::from("maybe").is_truthy());
        assert!(!OptionValue::from("").is_truthy());
    }

    #[test]
    fn options_flag_and_text() {
        let mut options = Options::default();
        options.set(OptionKey::ComponentPath, "docs");
        options.set(OptionKey::KeepOtherComponents, "maybe");
        assert_eq!(options.text(OptionKey::ComponentPath), Some("docs"));
        assert!(options.flag(OptionKey::KeepOtherComponents));
        assert!(!options.flag(OptionKey::KeepOwnComponentVersions));
        assert_eq!(options.text(OptionKey::ComponentAsStartPage), None);
    }

    #[test]
    fn boolean_is_not_text() {
        let mut options = Options::default();
        options.set(OptionKey::ComponentPath, true);
        assert_eq!(options.text(OptionKey::ComponentPath), None);
    }

    #[test]
    fn options_serialize_with_camel_case_keys() {
        let mut options = Options::default();
        options.set(OptionKey::ComponentPath, "docs");
        options.set(OptionKey::KeepOwnComponentVersions, true);
        let json = serde_json::to_string(&options).unwrap();
        assert_eq!(json, r#"{"componentPath":"docs","keepOwnComponentVersions":true}"#);
    }

    #[test]
    fn options_display_lists_pairs() {
        let mut options = Options::default();
        options.set(OptionKey::ComponentPath, "docs");
        options.set(OptionKey::KeepOtherComponents, false);
        assert_eq!(
            options.to_string(),
            "componentPath=docs, keepOtherComponents=false"
        );
    }
}
