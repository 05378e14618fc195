//! Local (non-CI) environment.

use super::Environment;
use std::path::PathBuf;

/// URL `antora` previews are usually served at locally.
pub const LOCAL_SITE_URL: &str = "http://localhost:8080/index.html";

/// A build on a developer machine, run from the repository root.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LocalEnvironment;

impl LocalEnvironment {
    /// Whether no generic `CI` signal is present.
    pub fn detected_with_env<F>(env_fn: F) -> bool
    where
        F: Fn(&str) -> Result<String, std::env::VarError>,
    {
        env_fn("CI").map_or(true, |value| value.is_empty())
    }
}

impl Environment for LocalEnvironment {
    fn name(&self) -> &'static str {
        "local"
    }

    fn site_url(&self) -> String {
        LOCAL_SITE_URL.to_string()
    }

    fn repository_url(&self) -> String {
        ".".to_string()
    }

    fn project_path(&self) -> PathBuf {
        PathBuf::from(".")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detected_without_ci() {
        assert!(LocalEnvironment::detected_with_env(|_| Err(
            std::env::VarError::NotPresent
        )));
        assert!(LocalEnvironment::detected_with_env(|_| Ok(String::new())));
    }

    #[test]
    fn not_detected_with_ci() {
        assert!(!LocalEnvironment::detected_with_env(|key| {
            if key == "CI" {
                Ok("true".to_string())
            } else {
                Err(std::env::VarError::NotPresent)
            }
        }));
    }

    #[test]
    fn returns_conventional_values() {
        let env = LocalEnvironment;
        assert_eq!(env.site_url(), "http://localhost:8080/index.html");
        assert_eq!(env.repository_url(), ".");
        assert_eq!(env.project_path(), PathBuf::from("."));
        assert_eq!(env.output_dir(), None);
    }
}
