//! Playbook customisations.
//!
//! A customisation is a strategy for rewriting the playbook of a CI
//! build. It is chosen by [`Mode`] through the [`CustomisationRegistry`]
//! and, on construction, subscribes its rewrite steps to the pipeline.
//!
//! - [`Customisation`] - The capability every strategy implements
//! - [`Mode`] - The names strategies are selected by
//! - [`registry`] - Mode to constructor lookup
//! - [`component`] - Preview of a single documentation component

pub mod component;
pub mod registry;

pub use component::ComponentCustomisation;
pub use registry::{
    capitalise_first_letter, Constructor, CustomisationContext, CustomisationRegistry,
};

use crate::config::Options;
use std::fmt;

/// Environment variable selecting the customisation mode.
pub const MODE_VARIABLE: &str = "ANTORA_CI_MODE";

/// Customisation strategies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Mode {
    /// Preview one component built from the working copy.
    Component,
}

impl Mode {
    /// Every mode, in registration order.
    pub const ALL: [Mode; 1] = [Mode::Component];

    /// Capitalised mode name, as selected through [`MODE_VARIABLE`].
    pub fn name(&self) -> &'static str {
        match self {
            Mode::Component => "Component",
        }
    }

    /// Match an already capitalised mode name.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|mode| mode.name() == name)
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// An installed customisation.
///
/// There is no abstract base to construct: only concrete strategies have
/// constructors, and those are reached through the registry.
pub trait Customisation: fmt::Debug {
    /// The mode this customisation was selected by.
    fn mode(&self) -> Mode;

    /// Snapshot of the current options.
    fn options(&self) -> Options;
}
