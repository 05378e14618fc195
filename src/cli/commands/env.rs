//! The `antora-ci env` command.
//!
//! Shows what a build would see: the detected environment, the selected
//! mode and the options the component customisation would resolve.

use std::io::Write;
use std::path::PathBuf;

use serde::Serialize;

use crate::cli::args::EnvArgs;
use crate::config::Options;
use crate::customisation::{ComponentCustomisation, CustomisationRegistry, MODE_VARIABLE};
use crate::environment::{detect_with_env, Environment};
use crate::error::{AntoraCiError, Result};

use super::dispatcher::{Command, CommandResult};

/// Snapshot of the detected environment.
#[derive(Debug, Serialize)]
pub struct EnvReport {
    pub environment: String,
    pub site_url: String,
    pub repository_url: String,
    pub project_path: PathBuf,
    pub output_dir: Option<PathBuf>,
    pub mode: Option<String>,
    pub options: Options,
}

/// The env command implementation.
pub struct EnvCommand {
    args: EnvArgs,
}

impl EnvCommand {
    /// Create a new env command.
    pub fn new(args: EnvArgs) -> Self {
        Self { args }
    }

    /// Build the report against a custom env var lookup (for testing).
    pub fn report_with_env<F>(env_fn: F) -> Result<EnvReport>
    where
        F: Fn(&str) -> std::result::Result<String, std::env::VarError>,
    {
        let environment = detect_with_env(&env_fn)?;
        let raw_mode = env_fn(MODE_VARIABLE).unwrap_or_default();
        let mode = CustomisationRegistry::with_builtins()
            .select(&raw_mode)
            .ok()
            .map(|(mode, _)| mode.to_string());

        Ok(EnvReport {
            environment: environment.name().to_string(),
            site_url: environment.site_url(),
            repository_url: environment.repository_url(),
            project_path: environment.project_path(),
            output_dir: environment.output_dir(),
            mode,
            options: ComponentCustomisation::resolve_options(&env_fn),
        })
    }

    fn render(&self, report: &EnvReport, out: &mut dyn Write) -> Result<()> {
        if self.args.json {
            let json = serde_json::to_string_pretty(report).map_err(anyhow::Error::from)?;
            writeln!(out, "{}", json)?;
            return Ok(());
        }

        writeln!(out, "Environment:    {}", report.environment)?;
        writeln!(out, "Site URL:       {}", report.site_url)?;
        writeln!(out, "Repository URL: {}", report.repository_url)?;
        writeln!(out, "Project path:   {}", report.project_path.display())?;
        if let Some(dir) = &report.output_dir {
            writeln!(out, "Output dir:     {}", dir.display())?;
        }
        writeln!(
            out,
            "Mode:           {}",
            report.mode.as_deref().unwrap_or("(none)")
        )?;
        writeln!(out, "Options:")?;
        for (key, value) in report.options.as_map() {
            writeln!(out, "  {}: {}", key, value)?;
        }
        Ok(())
    }
}

impl EnvCommand {
    /// Run against a custom env var lookup (for testing).
    ///
    /// An undetected environment is reported on stderr and exits with 1;
    /// other errors propagate.
    pub fn execute_with_env<F>(&self, out: &mut dyn Write, env_fn: F) -> Result<CommandResult>
    where
        F: Fn(&str) -> std::result::Result<String, std::env::VarError>,
    {
        match Self::report_with_env(env_fn) {
            Ok(report) => {
                self.render(&report, out)?;
                Ok(CommandResult::success())
            }
            Err(e @ AntoraCiError::NoEnvironmentDetected) => {
                tracing::error!("{}", e);
                Ok(CommandResult::failure(1))
            }
            Err(e) => Err(e),
        }
    }
}

impl Command for EnvCommand {
    fn execute(&self, out: &mut dyn Write) -> Result<CommandResult> {
        self.execute_with_env(out, |key| std::env::var(key))
    }
}
