//! Configuration documentation
//!
//! This module holds the documentation tree for configuration properties,
//! the tools that build and merge it, and the AsciiDoc generator that turns
//! it into reference pages.

mod asciidoc;
mod link;
mod merge;
mod naming;
mod project;
mod types;

pub use asciidoc::{AsciidocGenerator, AsciidocOptions};
pub use link::{
    is_primitive, resolve_doc_link, simple_type_name, DocLinkResolver, LinkConfig,
    AGROAL_API_JAVA_DOC_SITE, OFFICIAL_JAVA_DOC_BASE_LINK, VERTX_JAVA_DOC_SITE,
};
pub use merge::append_config_items;
pub use naming::{anchor, compute_extension_doc_file_name, hyphenate, to_env_var_name, ADOC_EXTENSION};
pub use project::{
    build_items, ConfigDocGenerator, ExtensionDescriptor, GenerateError, PropertyDescriptor,
    SectionDescriptor,
};
pub use types::{
    collect_keys, sort_items, ConfigDocItem, ConfigDocKey, ConfigDocSection, ConfigPhase,
    ItemError, DURATION_TYPE, MEMORY_SIZE_TYPE,
};
