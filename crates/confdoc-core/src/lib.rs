//! confdoc - configuration reference generation for framework extensions
//!
//! This crate provides:
//! - Doc: the configuration documentation tree, link resolution for
//!   property types, tree merging and AsciiDoc rendering
//! - Config: loading of `confdoc.toml` generator settings

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Generator configuration
pub mod config;

/// Configuration documentation module
pub mod doc;

pub use config::{ConfigError, DocSite, GeneratorConfig, CONFIG_FILE};
