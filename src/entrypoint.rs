//! Extension entrypoint.
//!
//! Wires detection and selection together: detect the environment, pick
//! the customisation named by `ANTORA_CI_MODE`, and construct it against
//! the pipeline. Any detection failure is logged and leaves the pipeline
//! untouched.

use crate::config::ExtensionConfig;
use crate::customisation::{
    Customisation, CustomisationContext, CustomisationRegistry, MODE_VARIABLE,
};
use crate::environment::{detect_with_env, Environment};
use crate::pipeline::Pipeline;
use crate::EXTENSION_NAME;
use std::rc::Rc;
use tracing::{debug, error, info};

/// Register the extension using the process environment.
///
/// Returns the installed customisation, or `None` if no environment or
/// no customisation matched.
pub fn register(
    pipeline: &mut Pipeline,
    config: &ExtensionConfig,
) -> Option<Box<dyn Customisation>> {
    register_with_env(pipeline, config, |key| std::env::var(key))
}

/// Register with a custom env var lookup (for testing).
pub fn register_with_env<F>(
    pipeline: &mut Pipeline,
    config: &ExtensionConfig,
    env_fn: F,
) -> Option<Box<dyn Customisation>>
where
    F: Fn(&str) -> std::result::Result<String, std::env::VarError>,
{
    let logger = pipeline.logger(EXTENSION_NAME);
    let _enter = logger.enter();

    let environment: Rc<dyn Environment> = match detect_with_env(&env_fn) {
        Ok(environment) => Rc::from(environment),
        Err(e) => {
            error!("{}", e);
            return None;
        }
    };
    info!(environment = environment.name(), "Detected CI environment");

    let raw_mode = env_fn(MODE_VARIABLE).unwrap_or_default();
    let registry = CustomisationRegistry::with_builtins();
    let (mode, constructor) = match registry.select(&raw_mode) {
        Ok(selected) => selected,
        Err(e) => {
            error!("{}", e);
            return None;
        }
    };
    debug!(mode = %mode, "Selected customisation");

    Some(constructor(CustomisationContext {
        pipeline,
        environment,
        config,
        logger: logger.clone(),
        env_fn: &env_fn,
    }))
}
