//! Execution environment detection.
//!
//! Decides whether the build runs under a supported CI provider or
//! locally, and derives the values the customisations need from it:
//! the site URL, the repository URL and the project path.
//!
//! Environments are checked in registry order, provider-specific ones
//! first. The local fallback only checks that no generic `CI` signal is
//! present, so it would shadow every provider if it came earlier.

pub mod detection;
pub mod gitlab;
pub mod local;

pub use detection::{detect, detect_with_env, EnvironmentKind};
pub use gitlab::GitlabEnvironment;
pub use local::LocalEnvironment;

use std::fmt;
use std::path::PathBuf;

/// The execution context of a build.
///
/// Values are derived once at construction and never change.
pub trait Environment: fmt::Debug {
    /// Short identifier for logs (e.g. "gitlab", "local").
    fn name(&self) -> &'static str;

    /// Absolute URL the site will be browsable at.
    fn site_url(&self) -> String;

    /// URL of the repository being built, without credentials.
    fn repository_url(&self) -> String;

    /// Checkout directory of the project.
    fn project_path(&self) -> PathBuf;

    /// Directory the provider publishes artifacts from, if any.
    fn output_dir(&self) -> Option<PathBuf> {
        None
    }
}
