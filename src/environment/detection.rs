//! Environment registry and selection.
//!
//! Every supported environment has a detection predicate that only reads
//! environment variables. The first predicate that holds, in registry
//! order, decides the environment of the run.

use super::{Environment, GitlabEnvironment, LocalEnvironment};
use crate::error::{AntoraCiError, Result};

/// The supported environments.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EnvironmentKind {
    Gitlab,
    Local,
}

impl EnvironmentKind {
    /// Registry in detection order: providers first, local fallback last.
    pub const REGISTRY: [EnvironmentKind; 2] = [EnvironmentKind::Gitlab, EnvironmentKind::Local];

    /// Check this environment's detection predicate.
    pub fn detected_with_env<F>(&self, env_fn: F) -> bool
    where
        F: Fn(&str) -> std::result::Result<String, std::env::VarError>,
    {
        match self {
            EnvironmentKind::Gitlab => GitlabEnvironment::detected_with_env(env_fn),
            EnvironmentKind::Local => LocalEnvironment::detected_with_env(env_fn),
        }
    }

    /// Construct the environment from the process variables.
    pub fn build_with_env<F>(&self, env_fn: F) -> Result<Box<dyn Environment>>
    where
        F: Fn(&str) -> std::result::Result<String, std::env::VarError>,
    {
        Ok(match self {
            EnvironmentKind::Gitlab => Box::new(GitlabEnvironment::from_env(env_fn)?),
            EnvironmentKind::Local => Box::new(LocalEnvironment),
        })
    }
}

/// Detect the environment of the current process.
///
/// # Example
///
/// ```no_run
/// use antora_ci::environment::{detect, Environment};
///
/// let environment = detect().unwrap();
/// println!("Building for {}", environment.site_url());
/// ```
pub fn detect() -> Result<Box<dyn Environment>> {
    detect_with_env(|key| std::env::var(key))
}

/// Detect with a custom env var lookup (for testing).
///
/// # Errors
///
/// Returns `NoEnvironmentDetected` if no predicate holds, or the
/// construction error of the detected environment.
pub fn detect_with_env<F>(env_fn: F) -> Result<Box<dyn Environment>>
where
    F: Fn(&str) -> std::result::Result<String, std::env::VarError>,
{
    let kind = EnvironmentKind::REGISTRY
        .into_iter()
        .find(|kind| kind.detected_with_env(&env_fn))
        .ok_or(AntoraCiError::NoEnvironmentDetected)?;
    kind.build_with_env(&env_fn)
}
