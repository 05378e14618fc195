//! CLI argument definitions.
//!
//! This module defines all CLI arguments using clap's derive macros.
//! The main entry point is the [`Cli`] struct.

use clap::{Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

/// Default playbook file name, relative to the working directory.
pub const DEFAULT_PLAYBOOK: &str = "antora-playbook.yml";

/// antora-ci - Adapt an Antora playbook to the CI/CD environment.
#[derive(Debug, Parser)]
#[command(name = "antora-ci")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Run as if started in this directory
    #[arg(short = 'C', long, global = true)]
    pub project: Option<PathBuf>,

    /// Enable debug logging
    #[arg(long, global = true)]
    pub debug: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Rewrite a playbook for the detected environment (default)
    Apply(ApplyArgs),

    /// Show the detected environment and resolved options
    Env(EnvArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

/// Arguments for the `apply` command.
#[derive(Debug, Clone, clap::Args)]
pub struct ApplyArgs {
    /// Playbook to rewrite
    #[arg(short, long, default_value = DEFAULT_PLAYBOOK)]
    pub playbook: PathBuf,

    /// Write the rewritten playbook here instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

impl Default for ApplyArgs {
    fn default() -> Self {
        Self {
            playbook: PathBuf::from(DEFAULT_PLAYBOOK),
            output: None,
        }
    }
}

/// Arguments for the `env` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct EnvArgs {
    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `completions` command.
#[derive(Debug, Clone, clap::Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: Shell,
}
