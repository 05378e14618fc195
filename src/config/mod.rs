//! Option resolution for customisations.
//!
//! Options start from a customisation's built-in defaults and are
//! overlaid with environment variables ([`options`]). The host's
//! per-extension keys ([`extension`]) are accepted but not merged.
//!
//! # Example
//!
//! ```
//! use antora_ci::config::{try_string_to_bool, OptionValue};
//!
//! assert_eq!(try_string_to_bool(" NO "), OptionValue::Bool(false));
//! assert_eq!(try_string_to_bool("maybe"), OptionValue::from("maybe"));
//! ```

pub mod extension;
pub mod options;

pub use extension::ExtensionConfig;
pub use options::{resolve_with_env, try_string_to_bool, OptionKey, OptionValue, Options};
