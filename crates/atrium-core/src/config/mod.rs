//! # Atrium Configuration
//!
//! Holds the two configuration concerns of the shell:
//!
//! - **Runtime profile** ([`profile`]): a process-wide, one-shot switch
//!   between development and production behavior. Pinned once before the
//!   shell mounts; later activations are ignored.
//! - **Application config** ([`data`]): the typed [`AppConfig`](data::AppConfig)
//!   record (document title, locale, initial route path) loadable from
//!   JSON, TOML, or YAML files selected by extension.
//!
//! Errors raised while loading configuration live in [`error`].

pub mod data;
pub mod error;
pub mod profile;

pub use data::{AppConfig, ConfigFormat};
pub use error::ConfigError;
pub use profile::RuntimeProfile;

#[cfg(test)]
mod tests;
