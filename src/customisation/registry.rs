//! Customisation registry.
//!
//! The [`CustomisationRegistry`] maps each [`Mode`] to the constructor of
//! its strategy. Selection reads the raw mode from the environment,
//! capitalises its first letter and looks the result up; new strategies
//! only need a `Mode` variant and a registration.

use super::{ComponentCustomisation, Customisation, Mode};
use crate::config::ExtensionConfig;
use crate::environment::Environment;
use crate::error::{AntoraCiError, Result};
use crate::pipeline::Pipeline;
use std::collections::BTreeMap;
use std::rc::Rc;
use tracing::Span;

/// Everything a customisation needs to install itself.
pub struct CustomisationContext<'a> {
    /// Pipeline to subscribe handlers on.
    pub pipeline: &'a mut Pipeline,
    /// The detected environment.
    pub environment: Rc<dyn Environment>,
    /// Host-supplied extension configuration.
    pub config: &'a ExtensionConfig,
    /// Logger handle obtained from the pipeline.
    pub logger: Span,
    /// Environment variable lookup.
    pub env_fn: &'a dyn Fn(&str) -> std::result::Result<String, std::env::VarError>,
}

/// Builds a customisation and registers its handlers.
pub type Constructor = fn(CustomisationContext<'_>) -> Box<dyn Customisation>;

/// Registry of available customisations.
pub struct CustomisationRegistry {
    constructors: BTreeMap<Mode, Constructor>,
}

impl CustomisationRegistry {
    /// Create a new empty registry.
    pub fn new() -> Self {
        Self {
            constructors: BTreeMap::new(),
        }
    }

    /// Create a registry with all built-in customisations.
    pub fn with_builtins() -> Self {
        let mut registry = Self::new();
        registry.register(Mode::Component, build_component);
        registry
    }

    /// Register a constructor for a mode.
    pub fn register(&mut self, mode: Mode, constructor: Constructor) {
        self.constructors.insert(mode, constructor);
    }

    /// Get the constructor for a mode.
    pub fn get(&self, mode: Mode) -> Option<Constructor> {
        self.constructors.get(&mode).copied()
    }

    /// Pick the customisation for a raw mode value.
    ///
    /// # Errors
    ///
    /// Returns `NoCustomisation` with the capitalised mode if nothing is
    /// registered under it.
    pub fn select(&self, raw_mode: &str) -> Result<(Mode, Constructor)> {
        let wanted = capitalise_first_letter(raw_mode);
        Mode::from_name(&wanted)
            .and_then(|mode| self.get(mode).map(|constructor| (mode, constructor)))
            .ok_or(AntoraCiError::NoCustomisation { mode: wanted })
    }

    /// Get the number of registered customisations.
    pub fn len(&self) -> usize {
        self.constructors.len()
    }

    /// Check if the registry is empty.
    pub fn is_empty(&self) -> bool {
        self.constructors.is_empty()
    }
}

impl Default for CustomisationRegistry {
    fn default() -> Self {
        Self::with_builtins()
    }
}

fn build_component(ctx: CustomisationContext<'_>) -> Box<dyn Customisation> {
    Box::new(ComponentCustomisation::new(ctx))
}

/// Upper-case the first character, leaving the rest as is.
pub fn capitalise_first_letter(input: &str) -> String {
    let mut chars = input.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
