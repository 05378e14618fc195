//! The `antora-ci apply` command.
//!
//! Plays the host's part for a single playbook: loads it, registers the
//! extension, fires `playbookBuilt` and writes the result.

use std::fs;
use std::io::Write;

use crate::cli::args::ApplyArgs;
use crate::config::ExtensionConfig;
use crate::entrypoint::register_with_env;
use crate::error::Result;
use crate::pipeline::{Event, Pipeline};
use crate::playbook::Playbook;

use super::dispatcher::{Command, CommandResult};

/// The apply command implementation.
pub struct ApplyCommand {
    args: ApplyArgs,
}

impl ApplyCommand {
    /// Create a new apply command.
    pub fn new(args: ApplyArgs) -> Self {
        Self { args }
    }

    /// Run against a custom env var lookup (for testing).
    pub fn execute_with_env<F>(&self, out: &mut dyn Write, env_fn: F) -> Result<CommandResult>
    where
        F: Fn(&str) -> std::result::Result<String, std::env::VarError>,
    {
        let playbook = Playbook::load(&self.args.playbook)?;

        let mut pipeline = Pipeline::with_playbook(playbook);
        if register_with_env(&mut pipeline, &ExtensionConfig::new(), env_fn).is_none() {
            tracing::warn!("Playbook left unchanged");
        }
        pipeline.fire(Event::PlaybookBuilt)?;

        let yaml = pipeline
            .playbook()
            .map(Playbook::to_yaml_string)
            .transpose()?
            .unwrap_or_default();

        match &self.args.output {
            Some(path) => {
                fs::write(path, yaml)?;
                tracing::info!("Wrote playbook to {}", path.display());
            }
            None => out.write_all(yaml.as_bytes())?,
        }
        Ok(CommandResult::success())
    }
}

impl Command for ApplyCommand {
    fn execute(&self, out: &mut dyn Write) -> Result<CommandResult> {
        self.execute_with_env(out, |key| std::env::var(key))
    }
}
