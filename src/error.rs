//! Error types for antora-ci operations.
//!
//! This module defines [`AntoraCiError`], the error type used throughout
//! the crate, and a [`Result`] type alias for convenience.
//!
//! # Error Handling Strategy
//!
//! - Detection failures (no environment, no customisation) are returned as
//!   errors by the detector and selector; the entrypoint logs them and
//!   leaves the playbook untouched
//! - Descriptor failures propagate out of the lifecycle step that hit them
//! - Use `anyhow::Error` (via `AntoraCiError::Other`) for unexpected errors

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for antora-ci operations.
#[derive(Debug, Error)]
pub enum AntoraCiError {
    /// No registered environment matched the process environment.
    #[error("No supported CI/CD environment detected")]
    NoEnvironmentDetected,

    /// A detected environment is missing a variable it needs.
    #[error("Required environment variable {name} is not set")]
    MissingVariable { name: String },

    /// The requested mode does not name a registered customisation.
    #[error("No supported customisation detected. Detected '{mode}' mode")]
    NoCustomisation { mode: String },

    /// An option holds a boolean where a path is needed.
    #[error("Option {name} must be a path, got {value}")]
    InvalidOption { name: String, value: String },

    /// Component descriptor (antora.yml) not found.
    #[error("Component descriptor not found: {path}")]
    DescriptorNotFound { path: PathBuf },

    /// Component descriptor could not be parsed.
    #[error("Failed to parse component descriptor at {path}: {message}")]
    DescriptorParse { path: PathBuf, message: String },

    /// Playbook file not found.
    #[error("Playbook not found: {path}")]
    PlaybookNotFound { path: PathBuf },

    /// Playbook file could not be parsed.
    #[error("Failed to parse playbook at {path}: {message}")]
    PlaybookParse { path: PathBuf, message: String },

    /// An event was fired before the host provided a playbook.
    #[error("No playbook has been loaded into the pipeline")]
    PlaybookNotLoaded,

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// YAML serialization error.
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result type alias for antora-ci operations.
pub type Result<T> = std::result::Result<T, AntoraCiError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_environment_matches_log_message() {
        assert_eq!(
            AntoraCiError::NoEnvironmentDetected.to_string(),
            "No supported CI/CD environment detected"
        );
    }

    #[test]
    fn missing_variable_displays_name() {
        let err = AntoraCiError::MissingVariable {
            name: "CI_JOB_ID".into(),
        };
        assert!(err.to_string().contains("CI_JOB_ID"));
    }

    #[test]
    fn no_customisation_displays_mode() {
        let err = AntoraCiError::NoCustomisation {
            mode: "Preview".into(),
        };
        assert_eq!(
            err.to_string(),
            "No supported customisation detected. Detected 'Preview' mode"
        );
    }

    #[test]
    fn invalid_option_displays_name_and_value() {
        let err = AntoraCiError::InvalidOption {
            name: "componentPath".into(),
            value: "true".into(),
        };
        assert_eq!(err.to_string(), "Option componentPath must be a path, got true");
    }

    #[test]
    fn descriptor_parse_displays_path_and_message() {
        let err = AntoraCiError::DescriptorParse {
            path: PathBuf::from("/repo/docs/antora.yml"),
            message: "missing field `name`".into(),
        };
        let msg = err.to_string();
        assert!(msg.contains("/repo/docs/antora.yml"));
        assert!(msg.contains("missing field `name`"));
    }

    #[test]
    fn io_error_converts_from_std() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file missing");
        let err: AntoraCiError = io_err.into();
        assert!(matches!(err, AntoraCiError::Io(_)));
    }

    #[test]
    fn result_type_alias_works() {
        fn returns_error() -> Result<()> {
            Err(AntoraCiError::PlaybookNotLoaded)
        }
        assert!(returns_error().is_err());
    }
}
