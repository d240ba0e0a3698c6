//! Documentation links for configuration property types
//!
//! Maps a fully qualified type name to the URL of its published API
//! documentation. Types without a known documentation site resolve to an
//! empty string, which callers treat as "no link".

use std::collections::HashMap;

/// Base URL of the JDK API documentation
pub const OFFICIAL_JAVA_DOC_BASE_LINK: &str = "https://docs.oracle.com/javase/8/docs/api/";

/// Base URL of the Agroal connection pool API documentation
pub const AGROAL_API_JAVA_DOC_SITE: &str =
    "https://jar-download.com/javaDoc/io.agroal/agroal-api/1.5/index.html?";

/// Base URL of the Vert.x API documentation
pub const VERTX_JAVA_DOC_SITE: &str = "https://vertx.io/docs/apidocs/";

/// Wrapper types of the primitives, which are documented inline instead
const PRIMITIVE_WRAPPERS: [&str; 8] = [
    "java.lang.Boolean",
    "java.lang.Byte",
    "java.lang.Short",
    "java.lang.Integer",
    "java.lang.Long",
    "java.lang.Float",
    "java.lang.Double",
    "java.lang.Character",
];

const PRIMITIVES: [&str; 8] = [
    "boolean", "byte", "short", "int", "long", "float", "double", "char",
];

/// Configuration for link resolution
#[derive(Debug, Clone)]
pub struct LinkConfig {
    /// Base URL for types in the `java.` namespace
    pub java_doc_base: String,
    /// Third-party sites keyed by two-segment base package (`io.vertx`)
    pub sites: HashMap<String, String>,
}

impl Default for LinkConfig {
    fn default() -> Self {
        let mut sites = HashMap::new();
        sites.insert("io.agroal".to_string(), AGROAL_API_JAVA_DOC_SITE.to_string());
        sites.insert("io.vertx".to_string(), VERTX_JAVA_DOC_SITE.to_string());

        Self {
            java_doc_base: OFFICIAL_JAVA_DOC_BASE_LINK.to_string(),
            sites,
        }
    }
}

/// Resolver for type documentation links
#[derive(Debug, Clone, Default)]
pub struct DocLinkResolver {
    config: LinkConfig,
}

impl DocLinkResolver {
    /// Create a resolver with the given configuration
    pub fn new(config: LinkConfig) -> Self {
        Self { config }
    }

    /// Register an additional documentation site for a base package
    pub fn add_site(&mut self, base_package: impl Into<String>, url: impl Into<String>) {
        self.config.sites.insert(base_package.into(), url.into());
    }

    /// Resolve a type name to its documentation URL, or an empty string.
    pub fn resolve(&self, type_name: &str) -> String {
        if is_primitive(type_name) || PRIMITIVE_WRAPPERS.contains(&type_name) {
            return String::new();
        }

        let Some((first, second)) = leading_segments(type_name) else {
            return String::new();
        };

        if first == "java" {
            return format!("{}{}", self.config.java_doc_base, doc_path(type_name));
        }

        let base_package = format!("{}.{}", first, second);
        match self.config.sites.get(&base_package) {
            Some(base) => format!("{}{}", base, doc_path(type_name)),
            None => String::new(),
        }
    }
}

/// Resolve a type name using the built-in documentation sites.
pub fn resolve_doc_link(type_name: &str) -> String {
    DocLinkResolver::default().resolve(type_name)
}

/// Whether the name is one of the eight primitive types
pub fn is_primitive(type_name: &str) -> bool {
    PRIMITIVES.contains(&type_name)
}

/// The first two package segments of a name with at least three segments.
/// Primitives and unqualified names have none.
fn leading_segments(type_name: &str) -> Option<(&str, &str)> {
    let mut parts = type_name.splitn(3, '.');
    let first = parts.next()?;
    let second = parts.next()?;
    parts.next()?;

    let is_word = |s: &str| !s.is_empty() && s.chars().all(|c| c.is_alphanumeric() || c == '_');
    if is_word(first) && is_word(second) {
        Some((first, second))
    } else {
        None
    }
}

/// Relative page path for a type: package segments joined by `/`, then the
/// (possibly nested) class name with `$` normalized to `.`, then `.html`.
fn doc_path(type_name: &str) -> String {
    let raw = type_name.split('<').next().unwrap_or(type_name);

    // The class name starts at the first uppercase letter
    let class_start = raw.find(|c: char| c.is_ascii_uppercase()).unwrap_or(0);
    let (package, class) = raw.split_at(class_start);

    format!("{}{}.html", package.replace('.', "/"), class.replace('$', "."))
}

/// Short display form of a type: package qualifiers are dropped from the
/// type and from any generic arguments.
pub fn simple_type_name(type_name: &str) -> String {
    let mut result = String::new();
    let mut current = String::new();

    for c in type_name.chars() {
        if c.is_alphanumeric() || c == '_' || c == '.' || c == '$' {
            current.push(c);
        } else {
            result.push_str(&simple_segment(&current));
            current.clear();
            result.push(c);
        }
    }
    result.push_str(&simple_segment(&current));

    result
}

fn simple_segment(qualified: &str) -> String {
    let normalized = qualified.replace('$', ".");
    match normalized.find(|c: char| c.is_ascii_uppercase()) {
        Some(start) => normalized[start..].to_string(),
        None => normalized
            .rsplit('.')
            .next()
            .unwrap_or_default()
            .to_string(),
    }
}
