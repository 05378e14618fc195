//! Component descriptor (`antora.yml`) reading.
//!
//! The descriptor is read fresh every time it is needed; nothing is cached.

use crate::error::{AntoraCiError, Result};
use serde::Deserialize;
use serde_yaml::Value;
use std::fs;
use std::path::{Path, PathBuf};

/// File name of the descriptor inside the component directory.
pub const DESCRIPTOR_FILE: &str = "antora.yml";

/// Start page used when the descriptor does not name one.
///
/// It is appended after the `name:` prefix, so the resulting default
/// page reference is `<name>::index.adoc`.
pub const DEFAULT_START_PAGE: &str = ":index.adoc";

/// Version value meaning "no version".
const UNVERSIONED: &str = "~";

/// The fields of `antora.yml` this crate uses.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ComponentDescriptor {
    pub name: String,

    #[serde(default)]
    pub version: Option<Value>,

    /// Only the camelCase `startPage` key is read.
    #[serde(default, rename = "startPage")]
    pub start_page: Option<String>,
}

impl ComponentDescriptor {
    /// Location of the descriptor for a component directory.
    pub fn path_for(project_path: &Path, component_path: &str) -> PathBuf {
        project_path.join(component_path).join(DESCRIPTOR_FILE)
    }

    /// Read and parse `<project_path>/<component_path>/antora.yml`.
    ///
    /// # Errors
    ///
    /// Returns `DescriptorNotFound` if the file doesn't exist.
    /// Returns `DescriptorParse` for invalid YAML or a missing `name`.
    pub fn read(project_path: &Path, component_path: &str) -> Result<Self> {
        let path = Self::path_for(project_path, component_path);
        let content = fs::read_to_string(&path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                AntoraCiError::DescriptorNotFound { path: path.clone() }
            } else {
                AntoraCiError::Io(e)
            }
        })?;
        Self::parse(&content, &path)
    }

    /// Parse descriptor YAML; `path` is only used for error reporting.
    pub fn parse(content: &str, path: &Path) -> Result<Self> {
        serde_yaml::from_str(content).map_err(|e| AntoraCiError::DescriptorParse {
            path: path.to_path_buf(),
            message: e.to_string(),
        })
    }

    /// Whether the descriptor pins a concrete version.
    ///
    /// Missing, null, `~`, empty, `false` and zero versions do not count.
    pub fn has_static_version(&self) -> bool {
        match &self.version {
            None | Some(Value::Null) => false,
            Some(Value::Bool(b)) => *b,
            Some(Value::Number(n)) => n.as_f64().is_some_and(|v| v != 0.0),
            Some(Value::String(s)) => !s.is_empty() && s != UNVERSIONED,
            Some(_) => true,
        }
    }

    /// Page reference for the site start page.
    pub fn start_page_ref(&self) -> String {
        let page = self
            .start_page
            .as_deref()
            .filter(|p| !p.is_empty())
            .unwrap_or(DEFAULT_START_PAGE);
        format!("{}:{}", self.name, page)
    }
}
