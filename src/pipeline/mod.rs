//! Host pipeline model.
//!
//! The pipeline owns the playbook and a list of lifecycle handlers. When
//! an event fires, its handlers run one after another in registration
//! order. Each handler receives the current playbook by reference and may
//! return a full replacement, which the pipeline installs before the next
//! handler runs. Handlers never edit the playbook in place.
//!
//! # Example
//!
//! ```
//! use antora_ci::pipeline::{Event, Pipeline};
//! use antora_ci::playbook::Playbook;
//!
//! let mut pipeline = Pipeline::with_playbook(Playbook::default());
//! pipeline
//!     .on(Event::PlaybookBuilt, |playbook| {
//!         let mut playbook = playbook.clone();
//!         playbook.site.url = Some("https://docs.example.com".into());
//!         Ok(Some(playbook))
//!     })
//!     .on(Event::PlaybookBuilt, |_| Ok(None));
//!
//! pipeline.fire(Event::PlaybookBuilt).unwrap();
//! assert_eq!(
//!     pipeline.playbook().unwrap().site.url.as_deref(),
//!     Some("https://docs.example.com")
//! );
//! ```

use crate::error::{AntoraCiError, Result};
use crate::playbook::Playbook;
use std::fmt;
use tracing::{info_span, trace, Span};

/// Lifecycle events handlers can subscribe to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Event {
    /// The playbook has been assembled and may be rewritten.
    PlaybookBuilt,
}

impl Event {
    /// Name the host uses for the event.
    pub fn name(&self) -> &'static str {
        match self {
            Event::PlaybookBuilt => "playbookBuilt",
        }
    }
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A lifecycle handler.
///
/// Returns `Some(playbook)` to replace the host's playbook, `None` to
/// leave it as is.
pub type Handler = Box<dyn Fn(&Playbook) -> Result<Option<Playbook>>>;

/// The host pipeline: current playbook plus ordered handlers.
#[derive(Default)]
pub struct Pipeline {
    playbook: Option<Playbook>,
    handlers: Vec<(Event, Handler)>,
}

impl Pipeline {
    /// Create a pipeline with no playbook yet.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a pipeline holding `playbook`.
    pub fn with_playbook(playbook: Playbook) -> Self {
        Self {
            playbook: Some(playbook),
            handlers: Vec::new(),
        }
    }

    /// Subscribe a handler to an event. Returns the pipeline for chaining.
    pub fn on<H>(&mut self, event: Event, handler: H) -> &mut Self
    where
        H: Fn(&Playbook) -> Result<Option<Playbook>> + 'static,
    {
        self.handlers.push((event, Box::new(handler)));
        self
    }

    /// Replace the playbook seen by subsequent handlers.
    pub fn update_vars(&mut self, playbook: Playbook) {
        self.playbook = Some(playbook);
    }

    /// The current playbook.
    pub fn playbook(&self) -> Option<&Playbook> {
        self.playbook.as_ref()
    }

    /// Consume the pipeline, returning the final playbook.
    pub fn into_playbook(self) -> Option<Playbook> {
        self.playbook
    }

    /// Number of handlers subscribed to `event`.
    pub fn handler_count(&self, event: Event) -> usize {
        self.handlers.iter().filter(|(e, _)| *e == event).count()
    }

    /// Logger handle for an extension.
    pub fn logger(&self, name: &str) -> Span {
        info_span!("extension", name = %name)
    }

    /// Run every handler of `event` in registration order.
    ///
    /// # Errors
    ///
    /// Returns `PlaybookNotLoaded` if handlers exist but no playbook was
    /// provided, or the first handler error. Handlers after a failing one
    /// do not run; the playbook keeps the last successfully installed value.
    pub fn fire(&mut self, event: Event) -> Result<()> {
        for (index, (subscribed, handler)) in self.handlers.iter().enumerate() {
            if *subscribed != event {
                continue;
            }
            let current = self
                .playbook
                .as_ref()
                .ok_or(AntoraCiError::PlaybookNotLoaded)?;
            if let Some(next) = handler(current)? {
                trace!(event = %event, handler = index, "Playbook updated");
                self.playbook = Some(next);
            }
        }
        Ok(())
    }
}

impl fmt::Debug for Pipeline {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Pipeline")
            .field("playbook", &self.playbook)
            .field("handlers", &self.handlers.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::playbook::ContentSource;

    fn push_source(url: &'static str) -> impl Fn(&Playbook) -> Result<Option<Playbook>> {
        move |playbook| {
            let mut playbook = playbook.clone();
            playbook.content.sources.push(ContentSource {
                url: url.to_string(),
                ..Default::default()
            });
            Ok(Some(playbook))
        }
    }

    fn urls(pipeline: &Pipeline) -> Vec<String> {
        pipeline
            .playbook()
            .unwrap()
            .content
            .sources
            .iter()
            .map(|s| s.url.clone())
            .collect()
    }

    #[test]
    fn handlers_run_in_registration_order() {
        let mut pipeline = Pipeline::with_playbook(Playbook::default());
        pipeline
            .on(Event::PlaybookBuilt, push_source("first"))
            .on(Event::PlaybookBuilt, push_source("second"))
            .on(Event::PlaybookBuilt, push_source("third"));

        pipeline.fire(Event::PlaybookBuilt).unwrap();
        assert_eq!(urls(&pipeline), vec!["first", "second", "third"]);
    }

    #[test]
    fn none_leaves_playbook_unchanged() {
        let mut playbook = Playbook::default();
        playbook.site.url = Some("https://before".into());
        let mut pipeline = Pipeline::with_playbook(playbook.clone());
        pipeline.on(Event::PlaybookBuilt, |_| Ok(None));

        pipeline.fire(Event::PlaybookBuilt).unwrap();
        assert_eq!(pipeline.playbook(), Some(&playbook));
    }

    #[test]
    fn failing_handler_stops_the_chain() {
        let mut pipeline = Pipeline::with_playbook(Playbook::default());
        pipeline
            .on(Event::PlaybookBuilt, push_source("kept"))
            .on(Event::PlaybookBuilt, |_| {
                Err(AntoraCiError::DescriptorNotFound {
                    path: "docs/antora.yml".into(),
                })
            })
            .on(Event::PlaybookBuilt, push_source("never"));

        let err = pipeline.fire(Event::PlaybookBuilt).unwrap_err();
        assert!(matches!(err, AntoraCiError::DescriptorNotFound { .. }));
        assert_eq!(urls(&pipeline), vec!["kept"]);
    }

    #[test]
    fn fire_without_playbook_fails_when_handlers_exist() {
        let mut pipeline = Pipeline::new();
        pipeline.fire(Event::PlaybookBuilt).unwrap();

        pipeline.on(Event::PlaybookBuilt, |_| Ok(None));
        let err = pipeline.fire(Event::PlaybookBuilt).unwrap_err();
        assert!(matches!(err, AntoraCiError::PlaybookNotLoaded));
    }

    #[test]
    fn update_vars_replaces_playbook() {
        let mut pipeline = Pipeline::new();
        assert!(pipeline.playbook().is_none());
        pipeline.update_vars(Playbook::default());
        assert!(pipeline.into_playbook().is_some());
    }

    #[test]
    fn counts_handlers_per_event() {
        let mut pipeline = Pipeline::new();
        pipeline.on(Event::PlaybookBuilt, |_| Ok(None));
        pipeline.on(Event::PlaybookBuilt, |_| Ok(None));
        assert_eq!(pipeline.handler_count(Event::PlaybookBuilt), 2);
    }

    #[test]
    fn event_name_matches_host() {
        assert_eq!(Event::PlaybookBuilt.to_string(), "playbookBuilt");
    }
}
