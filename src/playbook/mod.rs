//! Playbook model and file access.
//!
//! - [`schema`] - The subset of the playbook this crate rewrites
//! - [`descriptor`] - The component descriptor read from the project

pub mod descriptor;
pub mod schema;

pub use descriptor::{ComponentDescriptor, DEFAULT_START_PAGE, DESCRIPTOR_FILE};
pub use schema::{Content, ContentSource, Patterns, Playbook, Site};

use crate::error::{AntoraCiError, Result};
use std::fs;
use std::path::Path;

impl Playbook {
    /// Load a playbook from a YAML file.
    ///
    /// # Errors
    ///
    /// Returns `PlaybookNotFound` if the file doesn't exist.
    /// Returns `PlaybookParse` if the YAML doesn't match the playbook shape.
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                AntoraCiError::PlaybookNotFound {
                    path: path.to_path_buf(),
                }
            } else {
                AntoraCiError::Io(e)
            }
        })?;
        serde_yaml::from_str(&content).map_err(|e| AntoraCiError::PlaybookParse {
            path: path.to_path_buf(),
            message: e.to_string(),
        })
    }

    /// Parse a playbook from a YAML string.
    pub fn from_yaml_str(content: &str) -> Result<Self> {
        Ok(serde_yaml::from_str(content)?)
    }

    /// Serialize the playbook back to YAML.
    pub fn to_yaml_string(&self) -> Result<String> {
        Ok(serde_yaml::to_string(self)?)
    }
}
