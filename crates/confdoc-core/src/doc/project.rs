//! Generation runs spanning many extensions
//!
//! A run collects the documentation items discovered for each extension,
//! folds them into one master list per output file and renders those lists
//! as AsciiDoc.

use std::collections::BTreeMap;
use std::fmt;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;
use tracing::{debug, info, trace};

use super::asciidoc::{AsciidocGenerator, AsciidocOptions};
use super::link::DocLinkResolver;
use super::merge::append_config_items;
use super::naming::{compute_extension_doc_file_name, ADOC_EXTENSION};
use super::types::{sort_items, ConfigDocItem, ConfigDocKey, ConfigDocSection, ConfigPhase};
use crate::config::GeneratorConfig;

/// Errors that can occur during a generation run.
#[derive(Error, Debug)]
pub enum GenerateError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse extension descriptor: {0}")]
    Descriptor(#[from] serde_json::Error),

    #[error("failed to render documentation: {0}")]
    Render(#[from] fmt::Error),
}

/// A configuration property as discovered by the scanner
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PropertyDescriptor {
    /// Dotted property path
    pub name: String,

    /// Fully qualified declared type
    #[serde(rename = "type")]
    pub type_name: String,

    #[serde(default)]
    pub default_value: Option<String>,

    #[serde(default)]
    pub description: String,

    #[serde(default)]
    pub phase: ConfigPhase,

    /// Titles of the enclosing sections, outermost first
    #[serde(default)]
    pub section_path: Vec<String>,

    #[serde(default)]
    pub accepted_values: Vec<String>,

    #[serde(default)]
    pub optional: bool,

    #[serde(default)]
    pub list: bool,
}

/// Extra text for a section named in some property's section path
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SectionDescriptor {
    pub title: String,

    /// Property path prefix shared by the section's entries
    #[serde(default)]
    pub name: String,

    #[serde(default)]
    pub details: Option<String>,
}

/// All properties discovered for one config root class
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ExtensionDescriptor {
    /// Fully qualified name of the config root class
    pub config_root: String,

    #[serde(default)]
    pub properties: Vec<PropertyDescriptor>,

    #[serde(default)]
    pub sections: Vec<SectionDescriptor>,
}

impl ExtensionDescriptor {
    /// Load a descriptor from a JSON file.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, GenerateError> {
        let content = std::fs::read_to_string(path)?;
        Self::parse(&content)
    }

    /// Parse a descriptor from a JSON string.
    pub fn parse(content: &str) -> Result<Self, GenerateError> {
        Ok(serde_json::from_str(content)?)
    }
}

/// Turn property descriptors into a documentation tree.
///
/// Each key gets its documentation link at construction. Keys are nested
/// along their section path. At every level a title is looked up among the
/// direct children only, so a section is created on first use and shared
/// by title afterwards. `sections` supplies the name and details of any
/// section it lists.
pub fn build_items(
    properties: &[PropertyDescriptor],
    sections: &[SectionDescriptor],
    resolver: &DocLinkResolver,
) -> Vec<ConfigDocItem> {
    let mut items = Vec::new();

    for property in properties {
        let key = ConfigDocKey {
            key: property.name.clone(),
            type_name: property.type_name.clone(),
            default_value: property.default_value.clone(),
            doc_link: None,
            description: property.description.clone(),
            phase: property.phase,
            accepted_values: property.accepted_values.clone(),
            optional: property.optional,
            list: property.list,
        }
        .with_doc_link(resolver.resolve(&property.type_name));

        insert_at_path(&mut items, &property.section_path, key, sections);
    }

    items
}

fn insert_at_path(
    items: &mut Vec<ConfigDocItem>,
    path: &[String],
    key: ConfigDocKey,
    sections: &[SectionDescriptor],
) {
    let Some((title, rest)) = path.split_first() else {
        items.push(ConfigDocItem::Key(key));
        return;
    };

    for item in items.iter_mut() {
        if let ConfigDocItem::Section(section) = item {
            if section.title == *title {
                insert_at_path(&mut section.items, rest, key, sections);
                return;
            }
        }
    }

    trace!(title = %title, "opening section");
    let mut section = ConfigDocSection::new(title.as_str());
    section.phase = key.phase;
    if let Some(described) = sections.iter().find(|s| s.title == *title) {
        section.name.clone_from(&described.name);
        section.details.clone_from(&described.details);
    }
    insert_at_path(&mut section.items, rest, key, sections);
    items.push(ConfigDocItem::Section(section));
}

/// A documentation generation run
#[derive(Debug, Clone, Default)]
pub struct ConfigDocGenerator {
    resolver: DocLinkResolver,
    options: AsciidocOptions,
    sort: bool,
    /// Master item list per output file name
    files: BTreeMap<String, Vec<ConfigDocItem>>,
}

impl ConfigDocGenerator {
    /// Create a run with the given resolver and rendering options
    pub fn new(resolver: DocLinkResolver, options: AsciidocOptions) -> Self {
        Self {
            resolver,
            options,
            sort: false,
            files: BTreeMap::new(),
        }
    }

    /// Create a run from a loaded configuration
    pub fn from_config(config: &GeneratorConfig) -> Self {
        let options = AsciidocOptions {
            legend: config.legend,
        };
        Self::new(config.link_resolver(), options).with_sorting(config.sort)
    }

    /// Sort items by kind and phase when rendering
    pub fn with_sorting(mut self, sort: bool) -> Self {
        self.sort = sort;
        self
    }

    /// Fold the items of a config root into its output file's master list.
    /// Returns the output file name.
    pub fn add_extension(&mut self, config_root: &str, items: Vec<ConfigDocItem>) -> String {
        let file_name = compute_extension_doc_file_name(config_root);
        debug!(config_root, file = %file_name, items = items.len(), "merging config items");

        let existing = self.files.entry(file_name.clone()).or_default();
        append_config_items(existing, items);
        file_name
    }

    /// Build and fold the items of a discovered extension
    pub fn add_descriptor(&mut self, descriptor: &ExtensionDescriptor) -> String {
        let items = build_items(&descriptor.properties, &descriptor.sections, &self.resolver);
        self.add_extension(&descriptor.config_root, items)
    }

    /// Master list for a file, if anything was added to it
    pub fn items(&self, file_name: &str) -> Option<&[ConfigDocItem]> {
        self.files.get(file_name).map(|v| v.as_slice())
    }

    /// Output file names, in sorted order
    pub fn file_names(&self) -> impl Iterator<Item = &str> {
        self.files.keys().map(|k| k.as_str())
    }

    /// Render every file, as `(file name, content)` pairs
    pub fn render_all(&self) -> Result<Vec<(String, String)>, GenerateError> {
        let mut rendered = Vec::with_capacity(self.files.len());

        for (file_name, items) in &self.files {
            let stem = file_name.strip_suffix(ADOC_EXTENSION).unwrap_or(file_name);
            let generator = AsciidocGenerator::new(stem, &self.options);

            let content = if self.sort {
                let mut sorted = items.clone();
                sort_items(&mut sorted);
                generator.generate(&sorted)?
            } else {
                generator.generate(items)?
            };
            rendered.push((file_name.clone(), content));
        }

        Ok(rendered)
    }

    /// Render every file into `dir`, creating it if needed.
    /// Returns the written paths.
    pub fn write_all(&self, dir: &Path) -> Result<Vec<PathBuf>, GenerateError> {
        std::fs::create_dir_all(dir)?;

        let mut written = Vec::new();
        for (file_name, content) in self.render_all()? {
            let path = dir.join(&file_name);
            std::fs::write(&path, content)?;
            info!(path = %path.display(), "wrote config reference");
            written.push(path);
        }

        Ok(written)
    }
}
