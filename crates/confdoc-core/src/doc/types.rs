//! Types for representing configuration documentation

use std::cmp::Ordering;

use serde::Deserialize;
use thiserror::Error;

/// Fully qualified name of the type that gets the duration format note.
pub const DURATION_TYPE: &str = "java.time.Duration";

/// Fully qualified name of the type that gets the memory size format note.
pub const MEMORY_SIZE_TYPE: &str = "io.quarkus.runtime.configuration.MemorySize";

/// Errors raised while assembling documentation items.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ItemError {
    #[error("a config doc item needs either a section or a key, got neither")]
    Empty,

    #[error("a config doc item holds either a section or a key, got both")]
    Ambiguous,
}

/// Phase in which a configuration property is read.
///
/// Variants are declared in sort order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ConfigPhase {
    #[default]
    BuildTime,
    BuildAndRunTimeFixed,
    RunTime,
}

impl ConfigPhase {
    /// Whether the value is frozen once the application is built.
    pub fn is_fixed_at_build_time(&self) -> bool {
        matches!(self, ConfigPhase::BuildTime | ConfigPhase::BuildAndRunTimeFixed)
    }

    /// AsciiDoc icon shown next to properties of this phase
    pub fn illustration(&self) -> &'static str {
        if self.is_fixed_at_build_time() {
            "icon:lock[title=Fixed at build time]"
        } else {
            ""
        }
    }
}

/// A single documented configuration property
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConfigDocKey {
    /// Dotted property path, e.g. `quarkus.datasource.jdbc.url`
    pub key: String,
    /// Declared type, fully qualified
    pub type_name: String,
    /// Default value, if any
    pub default_value: Option<String>,
    /// Link to the API documentation of the type
    pub doc_link: Option<String>,
    /// Description text
    pub description: String,
    /// Phase in which the property is read
    pub phase: ConfigPhase,
    /// Allowed values for enum-typed properties
    pub accepted_values: Vec<String>,
    /// The property may be left unset; no default is required
    pub optional: bool,
    /// The property takes a comma-separated list of values
    pub list: bool,
}

impl ConfigDocKey {
    /// Create a new key with the given property path and type
    pub fn new(key: impl Into<String>, type_name: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            type_name: type_name.into(),
            ..Self::default()
        }
    }

    /// Set the default value
    pub fn with_default(mut self, default_value: Option<String>) -> Self {
        self.default_value = default_value;
        self
    }

    /// Set the documentation link. An empty link means there is none.
    pub fn with_doc_link(mut self, link: impl Into<String>) -> Self {
        let link = link.into();
        self.doc_link = if link.is_empty() { None } else { Some(link) };
        self
    }

    /// Set the description
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Set the phase
    pub fn with_phase(mut self, phase: ConfigPhase) -> Self {
        self.phase = phase;
        self
    }

    /// Whether the rendered type links to the duration format note
    pub fn has_duration_note(&self) -> bool {
        self.type_name == DURATION_TYPE
    }

    /// Whether the rendered type links to the memory size format note
    pub fn has_memory_size_note(&self) -> bool {
        self.type_name == MEMORY_SIZE_TYPE
    }
}

/// A titled group of documentation items
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConfigDocSection {
    /// Title used to merge sections together. The empty title is valid.
    pub title: String,
    /// Property path prefix shared by the entries
    pub name: String,
    /// Longer free text shown under the title
    pub details: Option<String>,
    /// Phase of the first property that opened the section
    pub phase: ConfigPhase,
    /// Nested items, owned exclusively by this section
    pub items: Vec<ConfigDocItem>,
}

impl ConfigDocSection {
    /// Create an empty section
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Self::default()
        }
    }

    /// Set the property path prefix
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Set the free text shown under the title
    pub fn with_details(mut self, details: impl Into<String>) -> Self {
        self.details = Some(details.into());
        self
    }

    /// Add a nested item
    pub fn add_item(&mut self, item: ConfigDocItem) {
        self.items.push(item);
    }

    /// Add nested items, keeping their order
    pub fn add_items(&mut self, items: impl IntoIterator<Item = ConfigDocItem>) {
        self.items.extend(items);
    }

    /// Two sections are the same for merging iff their titles are equal.
    /// No case folding or trimming is applied.
    pub fn is_same_section(&self, other: &ConfigDocSection) -> bool {
        self.title == other.title
    }
}

/// Either a section or a key
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigDocItem {
    Section(ConfigDocSection),
    Key(ConfigDocKey),
}

impl ConfigDocItem {
    /// Build an item from optional parts, exactly one of which must be set.
    pub fn from_parts(
        section: Option<ConfigDocSection>,
        key: Option<ConfigDocKey>,
    ) -> Result<Self, ItemError> {
        match (section, key) {
            (Some(section), None) => Ok(ConfigDocItem::Section(section)),
            (None, Some(key)) => Ok(ConfigDocItem::Key(key)),
            (None, None) => Err(ItemError::Empty),
            (Some(_), Some(_)) => Err(ItemError::Ambiguous),
        }
    }

    /// Whether this is a leaf entry
    pub fn is_key(&self) -> bool {
        matches!(self, ConfigDocItem::Key(_))
    }

    /// Whether this is a section
    pub fn is_section(&self) -> bool {
        matches!(self, ConfigDocItem::Section(_))
    }

    /// The wrapped key, if this is one
    pub fn as_key(&self) -> Option<&ConfigDocKey> {
        match self {
            ConfigDocItem::Key(key) => Some(key),
            ConfigDocItem::Section(_) => None,
        }
    }

    /// The wrapped section, if this is one
    pub fn as_section(&self) -> Option<&ConfigDocSection> {
        match self {
            ConfigDocItem::Section(section) => Some(section),
            ConfigDocItem::Key(_) => None,
        }
    }

    /// Phase of the wrapped key or section
    pub fn phase(&self) -> ConfigPhase {
        match self {
            ConfigDocItem::Section(section) => section.phase,
            ConfigDocItem::Key(key) => key.phase,
        }
    }

    /// Display order: keys before sections, then by phase.
    pub fn display_order(&self, other: &ConfigDocItem) -> Ordering {
        match (self, other) {
            (ConfigDocItem::Key(_), ConfigDocItem::Section(_)) => Ordering::Less,
            (ConfigDocItem::Section(_), ConfigDocItem::Key(_)) => Ordering::Greater,
            _ => self.phase().cmp(&other.phase()),
        }
    }
}

impl From<ConfigDocKey> for ConfigDocItem {
    fn from(key: ConfigDocKey) -> Self {
        ConfigDocItem::Key(key)
    }
}

impl From<ConfigDocSection> for ConfigDocItem {
    fn from(section: ConfigDocSection) -> Self {
        ConfigDocItem::Section(section)
    }
}

/// Stable-sort items at every level by [`ConfigDocItem::display_order`].
pub fn sort_items(items: &mut [ConfigDocItem]) {
    items.sort_by(ConfigDocItem::display_order);
    for item in items.iter_mut() {
        if let ConfigDocItem::Section(section) = item {
            sort_items(&mut section.items);
        }
    }
}

/// Collect every key in the tree, depth first.
pub fn collect_keys(items: &[ConfigDocItem]) -> Vec<&ConfigDocKey> {
    let mut keys = Vec::new();
    for item in items {
        match item {
            ConfigDocItem::Key(key) => keys.push(key),
            ConfigDocItem::Section(section) => keys.extend(collect_keys(&section.items)),
        }
    }
    keys
}
