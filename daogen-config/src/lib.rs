//! `daogen.toml` configuration.
//!
//! Replaces hard-coded folder and package constants with an immutable
//! [`Config`] that is resolved once per run and handed to the generator.

// Miette's derive macro generates code that triggers these warnings
#![allow(unused_assignments)]

mod config;
mod error;
mod file;
mod parse;
mod template;
mod validate;

pub use config::{Config, GenerateConfig, IndentStyle, PackagesConfig, PathsConfig, ProjectConfig};
pub use error::{Error, Result, SourceContext};
pub use file::{ConfigSource, DaogenToml};
pub use parse::parse_config;
pub use template::ConfigTemplate;
pub use validate::is_java_keyword;

/// Name of the configuration file looked up in the project root
pub const CONFIG_FILE: &str = "daogen.toml";
