//! antora-ci - Adapt an Antora playbook to the CI/CD environment.
//!
//! Detects whether a documentation build runs under a supported CI
//! provider or locally, and rewrites the playbook accordingly: the site
//! URL, the start page and the list of content sources.
//!
//! # Modules
//!
//! - [`cli`] - Command-line interface and argument parsing
//! - [`config`] - Option values, extension config and environment overrides
//! - [`customisation`] - Customisation strategies and their registry
//! - [`entrypoint`] - Registration of the extension with a pipeline
//! - [`environment`] - CI provider detection
//! - [`error`] - Error types and result aliases
//! - [`pipeline`] - Host pipeline with ordered lifecycle handlers
//! - [`playbook`] - Playbook and component descriptor model
//!
//! # Example
//!
//! ```
//! use antora_ci::config::ExtensionConfig;
//! use antora_ci::entrypoint::register_with_env;
//! use antora_ci::pipeline::{Event, Pipeline};
//! use antora_ci::playbook::Playbook;
//!
//! let mut pipeline = Pipeline::with_playbook(Playbook::default());
//!
//! // Outside CI and without ANTORA_CI_MODE nothing is installed.
//! let installed = register_with_env(&mut pipeline, &ExtensionConfig::new(), |_| {
//!     Err(std::env::VarError::NotPresent)
//! });
//! assert!(installed.is_none());
//!
//! pipeline.fire(Event::PlaybookBuilt).unwrap();
//! assert_eq!(pipeline.playbook(), Some(&Playbook::default()));
//! ```

pub mod cli;
pub mod config;
pub mod customisation;
pub mod entrypoint;
pub mod environment;
pub mod error;
pub mod pipeline;
pub mod playbook;

pub use entrypoint::{register, register_with_env};
pub use error::{AntoraCiError, Result};

/// Name the extension logs under and is required by.
pub const EXTENSION_NAME: &str = "continuous-integration";
