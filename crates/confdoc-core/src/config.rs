//! Generator settings (`confdoc.toml`) parsing and validation.
//!
//! ```toml
//! output-dir = "target/asciidoc/generated/config"
//! java-doc-base = "https://docs.oracle.com/javase/8/docs/api/"
//! legend = true
//! sort = false
//!
//! [[doc-site]]
//! package = "org.acme"
//! url = "https://docs.acme.org/api/"
//! ```

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::debug;

use crate::doc::{DocLinkResolver, LinkConfig, OFFICIAL_JAVA_DOC_BASE_LINK};

/// Default name of the settings file.
pub const CONFIG_FILE: &str = "confdoc.toml";

const DEFAULT_OUTPUT_DIR: &str = "target/asciidoc/generated/config";

/// Errors that can occur when loading generator settings.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("invalid documentation URL '{0}': expected an http(s) URL")]
    InvalidUrl(String),

    #[error("invalid documentation package '{0}': {1}")]
    InvalidPackage(String, &'static str),
}

/// Generator settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields, rename_all = "kebab-case")]
pub struct GeneratorConfig {
    /// Directory that receives the generated `.adoc` files.
    #[serde(default = "default_output_dir")]
    pub output_dir: PathBuf,

    /// Base URL of the JDK API documentation.
    #[serde(default = "default_java_doc_base")]
    pub java_doc_base: String,

    /// Emit the build-time legend above each table.
    #[serde(default = "default_true")]
    pub legend: bool,

    /// Sort keys before sections and by phase when rendering.
    #[serde(default)]
    pub sort: bool,

    /// Documentation sites in addition to the built-in ones.
    #[serde(default, rename = "doc-site")]
    pub doc_sites: Vec<DocSite>,
}

/// An API documentation site for a base package.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DocSite {
    /// Two-segment base package, e.g. `io.vertx`.
    pub package: String,

    /// Base URL that type paths are appended to.
    pub url: String,
}

fn default_output_dir() -> PathBuf {
    PathBuf::from(DEFAULT_OUTPUT_DIR)
}

fn default_java_doc_base() -> String {
    OFFICIAL_JAVA_DOC_BASE_LINK.to_string()
}

fn default_true() -> bool {
    true
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            output_dir: default_output_dir(),
            java_doc_base: default_java_doc_base(),
            legend: true,
            sort: false,
            doc_sites: Vec::new(),
        }
    }
}

impl GeneratorConfig {
    /// Load settings from a file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or is invalid.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        debug!(path = %path.display(), "loading generator config");
        let content = std::fs::read_to_string(path)?;
        Self::parse(&content)
    }

    /// Parse settings from a TOML string.
    pub fn parse(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        validate_url(&self.java_doc_base)?;
        for site in &self.doc_sites {
            validate_package(&site.package)?;
            validate_url(&site.url)?;
        }
        Ok(())
    }

    /// Build the link resolver described by these settings.
    pub fn link_resolver(&self) -> DocLinkResolver {
        let mut link_config = LinkConfig {
            java_doc_base: self.java_doc_base.clone(),
            ..LinkConfig::default()
        };
        for site in &self.doc_sites {
            link_config.sites.insert(site.package.clone(), site.url.clone());
        }
        DocLinkResolver::new(link_config)
    }
}

fn validate_url(url: &str) -> Result<(), ConfigError> {
    if url.starts_with("https://") || url.starts_with("http://") {
        Ok(())
    } else {
        Err(ConfigError::InvalidUrl(url.to_string()))
    }
}

fn validate_package(package: &str) -> Result<(), ConfigError> {
    let segments: Vec<&str> = package.split('.').collect();
    if segments.len() != 2 {
        return Err(ConfigError::InvalidPackage(
            package.to_string(),
            "expected exactly two segments",
        ));
    }
    if segments
        .iter()
        .any(|s| s.is_empty() || !s.chars().all(|c| c.is_alphanumeric() || c == '_'))
    {
        return Err(ConfigError::InvalidPackage(
            package.to_string(),
            "segments must be non-empty identifiers",
        ));
    }
    Ok(())
}
