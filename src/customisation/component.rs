//! Component customisation.
//!
//! Turns a playbook into a preview of the component in the working copy:
//!
//! 1. the site URL points at where the CI provider serves the build
//! 2. the site start page is the component's start page (optional)
//! 3. content sources other than this component are removed
//! 4. the working copy itself is added as a content source
//!
//! Duplicate content sources cannot be reliably filtered outside a full
//! content aggregation, so when the component pins a version in its
//! `antora.yml` all other sources are dropped.

use super::registry::CustomisationContext;
use super::{Customisation, Mode};
use crate::config::{resolve_with_env, OptionKey, OptionValue, Options};
use crate::environment::Environment;
use crate::error::{AntoraCiError, Result};
use crate::pipeline::{Event, Pipeline};
use crate::playbook::{ComponentDescriptor, ContentSource, Patterns, Playbook};
use serde_yaml::Value;
use std::cell::RefCell;
use std::collections::BTreeMap;
use std::fmt;
use std::rc::Rc;
use tracing::{debug, info, trace, warn, Span};

/// Branch name of the working copy source.
pub const HEAD_BRANCH: &str = "HEAD";

/// Version given to the working copy source.
pub const HEAD_VERSION: &str = "WIP";

/// Options that can be overridden from the environment.
pub const ENV_OVERRIDES: [(OptionKey, &str); 3] = [
    (OptionKey::ComponentPath, "ANTORA_COMPONENT_PATH"),
    (
        OptionKey::KeepOwnComponentVersions,
        "ANTORA_KEEP_OWN_COMPONENT_VERSIONS",
    ),
    (OptionKey::KeepOtherComponents, "ANTORA_KEEP_OTHER_COMPONENTS"),
];

/// Preview customisation for a single component.
///
/// Cloning is cheap and shares the options, so every registered handler
/// sees the forced override applied by the removal step.
#[derive(Clone)]
pub struct ComponentCustomisation {
    environment: Rc<dyn Environment>,
    options: Rc<RefCell<Options>>,
    logger: Span,
}

impl ComponentCustomisation {
    /// Build the customisation and subscribe its steps to the pipeline.
    pub fn new(ctx: CustomisationContext<'_>) -> Self {
        if !ctx.config.is_empty() {
            ctx.logger.in_scope(|| {
                debug!(
                    keys = ctx.config.len(),
                    "Extension config is not used to resolve options"
                )
            });
        }
        let options = Self::resolve_options(ctx.env_fn);
        let customisation = Self::with_options(ctx.environment, options, ctx.logger);
        customisation.register(ctx.pipeline);

        customisation.logger.in_scope(|| {
            info!(
                options = %customisation.options.borrow(),
                "Component customisations for CI/CD loaded"
            )
        });
        customisation
    }

    /// Build without registering any handlers.
    pub fn with_options(environment: Rc<dyn Environment>, options: Options, logger: Span) -> Self {
        Self {
            environment,
            options: Rc::new(RefCell::new(options)),
            logger,
        }
    }

    /// Built-in option defaults.
    pub fn default_options() -> BTreeMap<OptionKey, OptionValue> {
        BTreeMap::from([
            (OptionKey::ComponentPath, OptionValue::from("docs")),
            (OptionKey::ComponentAsStartPage, OptionValue::Bool(true)),
            (OptionKey::KeepOwnComponentVersions, OptionValue::Bool(true)),
            (OptionKey::KeepOtherComponents, OptionValue::Bool(false)),
        ])
    }

    /// Built-in defaults overlaid with environment variables.
    pub fn resolve_options<F>(env_fn: F) -> Options
    where
        F: Fn(&str) -> std::result::Result<String, std::env::VarError>,
    {
        Options::new(resolve_with_env(
            &Self::default_options(),
            &ENV_OVERRIDES,
            env_fn,
        ))
    }

    /// Subscribe the four steps to `playbookBuilt`, in execution order.
    pub fn register(&self, pipeline: &mut Pipeline) {
        let start_page_enabled = self.options.borrow().flag(OptionKey::ComponentAsStartPage);

        let this = self.clone();
        pipeline.on(Event::PlaybookBuilt, move |playbook| {
            this.set_site_url(playbook)
        });

        let this = self.clone();
        pipeline.on(Event::PlaybookBuilt, move |playbook| {
            if start_page_enabled {
                this.set_site_start_page(playbook)
            } else {
                Ok(None)
            }
        });

        let this = self.clone();
        pipeline.on(Event::PlaybookBuilt, move |playbook| {
            this.remove_components(playbook)
        });

        let this = self.clone();
        pipeline.on(Event::PlaybookBuilt, move |playbook| {
            this.add_head_component(playbook)
        });
    }

    /// Point the site URL at the environment's site URL.
    pub fn set_site_url(&self, playbook: &Playbook) -> Result<Option<Playbook>> {
        let _enter = self.logger.enter();
        let mut playbook = playbook.clone();
        let url = self.environment.site_url();
        info!("Updated the site URL to {}", url);
        playbook.site.url = Some(url);
        Ok(Some(playbook))
    }

    /// Use the component's start page as the site start page.
    pub fn set_site_start_page(&self, playbook: &Playbook) -> Result<Option<Playbook>> {
        let _enter = self.logger.enter();
        let mut playbook = playbook.clone();
        let component = self.read_component()?;
        let start_page = component.start_page_ref();
        info!("Updated the site start page to {}", start_page);
        playbook.site.start_page = Some(start_page);
        Ok(Some(playbook))
    }

    /// Remove content sources not belonging to this component.
    ///
    /// A source is kept only if it comes from this repository (or other
    /// components are kept), it points at the component path, and own
    /// versions are kept. The last condition does not look at the source
    /// at all: when it is off, every source goes.
    pub fn remove_components(&self, playbook: &Playbook) -> Result<Option<Playbook>> {
        let _enter = self.logger.enter();
        let component = self.read_component()?;
        self.force_deletion_if_static_version(&component);

        let component_path = self.component_path()?;
        let options = self.options.borrow();
        let repository_url = self.environment.repository_url();
        let keep_other = options.flag(OptionKey::KeepOtherComponents);
        let keep_own = options.flag(OptionKey::KeepOwnComponentVersions);

        let mut playbook = playbook.clone();
        let before = playbook.content.sources.len();
        playbook.content.sources.retain(|source| {
            (source.url == repository_url || keep_other)
                && source.has_start_path(&component_path)
                && keep_own
        });
        trace!(
            "Removed {} of {} content sources",
            before - playbook.content.sources.len(),
            before
        );
        Ok(Some(playbook))
    }

    /// Append the working copy as a content source.
    pub fn add_head_component(&self, playbook: &Playbook) -> Result<Option<Playbook>> {
        let head = ContentSource {
            url: self.environment.project_path().display().to_string(),
            start_path: Some(self.component_path()?),
            branches: Some(Patterns::from(vec![HEAD_BRANCH])),
            version: Some(Value::from(HEAD_VERSION)),
            ..Default::default()
        };
        let mut playbook = playbook.clone();
        playbook.content.sources.push(head);
        Ok(Some(playbook))
    }

    /// Stop keeping own versions if the component pins a version.
    ///
    /// With a pinned version other sources may provide the same version,
    /// which only a full content aggregation could detect.
    pub fn force_deletion_if_static_version(&self, component: &ComponentDescriptor) {
        if !component.has_static_version() {
            trace!("No forced deletion of other versions required to prevent errors");
            return;
        }
        warn!("Removing other component sources from preview due to static version");
        self.options
            .borrow_mut()
            .set(OptionKey::KeepOwnComponentVersions, false);
    }

    /// Read the component descriptor from the working copy.
    pub fn read_component(&self) -> Result<ComponentDescriptor> {
        let component_path = self.component_path()?;
        ComponentDescriptor::read(&self.environment.project_path(), &component_path)
    }

    /// The `componentPath` option as a path.
    ///
    /// # Errors
    ///
    /// Returns `InvalidOption` when the option holds a boolean, as it does
    /// after `ANTORA_COMPONENT_PATH=true`.
    pub fn component_path(&self) -> Result<String> {
        let options = self.options.borrow();
        if let Some(path) = options.text(OptionKey::ComponentPath) {
            return Ok(path.to_string());
        }
        Err(AntoraCiError::InvalidOption {
            name: OptionKey::ComponentPath.name().to_string(),
            value: options
                .get(OptionKey::ComponentPath)
                .map(ToString::to_string)
                .unwrap_or_default(),
        })
    }
}

impl Customisation for ComponentCustomisation {
    fn mode(&self) -> Mode {
        Mode::Component
    }

    fn options(&self) -> Options {
        self.options.borrow().clone()
    }
}

impl fmt::Debug for ComponentCustomisation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ComponentCustomisation")
            .field("environment", &self.environment)
            .field("options", &self.options.borrow())
            .finish()
    }
}
