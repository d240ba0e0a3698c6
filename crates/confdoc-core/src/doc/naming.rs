//! Naming helpers: output file names, hyphenated identifiers, env var names

use std::sync::OnceLock;

use regex::Regex;

/// Extension of generated documentation files
pub const ADOC_EXTENSION: &str = ".adoc";

const ARTIFACT_PREFIX: &str = "quarkus";
const CORE: &str = "core";
const RUNTIME: &str = "runtime";
const DEPLOYMENT: &str = "deployment";
const COMMON: &str = "common";

/// Root package of extension config classes, followed by up to three segments
fn extension_package_pattern() -> Option<&'static Regex> {
    static PATTERN: OnceLock<Option<Regex>> = OnceLock::new();
    PATTERN
        .get_or_init(|| Regex::new(r"^io\.quarkus\.(\w+)\.?(\w+)?\.?(\w+)?").ok())
        .as_ref()
}

/// Derive the documentation file name for a config root class.
///
/// Classes outside the extension namespace keep their own name. Classes in
/// the framework's own `runtime`/`deployment` packages map to a core file
/// named after the class. Other classes map to the guessed artifact id of
/// their extension.
pub fn compute_extension_doc_file_name(config_root: &str) -> String {
    let Some(captures) = extension_package_pattern().and_then(|p| p.captures(config_root)) else {
        return format!("{}{}", config_root, ADOC_EXTENSION);
    };

    let extension = captures.get(1).map_or("", |m| m.as_str());
    let mut name = format!("{}-", ARTIFACT_PREFIX);

    if extension == DEPLOYMENT || extension == RUNTIME {
        let class_name = config_root.rsplit('.').next().unwrap_or(config_root);
        name.push_str(CORE);
        name.push('-');
        name.push_str(&hyphenate(class_name));
    } else {
        name.push_str(extension);

        // Extra qualifiers are lowercase package segments, e.g. `io.quarkus.extension.name`
        let qualifiers = [captures.get(2), captures.get(3)];
        for qualifier in qualifiers.iter().flatten().map(|m| m.as_str()) {
            if !is_artifact_qualifier(qualifier) {
                break;
            }
            name.push('-');
            name.push_str(qualifier);
        }
    }

    name.push_str(ADOC_EXTENSION);
    name
}

fn is_artifact_qualifier(segment: &str) -> bool {
    segment != DEPLOYMENT
        && segment != RUNTIME
        && segment != COMMON
        && !segment.is_empty()
        && segment
            .chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit())
}

/// Convert a camel-case identifier to lower kebab case.
///
/// A run of capitals stays together as one word: `HTTPConfig` becomes
/// `http-config`.
pub fn hyphenate(name: &str) -> String {
    let chars: Vec<char> = name.chars().collect();
    let mut result = String::with_capacity(name.len() + 4);

    for (i, &c) in chars.iter().enumerate() {
        if c.is_uppercase() && i > 0 {
            let prev = chars[i - 1];
            let next_is_lower = chars.get(i + 1).is_some_and(|n| n.is_lowercase());
            let starts_word =
                prev.is_lowercase() || prev.is_ascii_digit() || (prev.is_uppercase() && next_is_lower);
            if starts_word && !result.ends_with('-') {
                result.push('-');
            }
        }
        if c == '_' || c == '-' {
            if !result.is_empty() && !result.ends_with('-') {
                result.push('-');
            }
            continue;
        }
        result.extend(c.to_lowercase());
    }

    result
}

/// Environment variable that overrides a property: every character that is
/// not alphanumeric becomes `_`, and the result is uppercased.
pub fn to_env_var_name(property: &str) -> String {
    property
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() {
                c.to_ascii_uppercase()
            } else {
                '_'
            }
        })
        .collect()
}

/// Anchor id for a property inside a generated file
pub fn anchor(file_stem: &str, property: &str) -> String {
    let property: String = property
        .chars()
        .map(|c| {
            if c.is_alphanumeric() || c == '.' || c == '-' || c == '_' {
                c
            } else {
                '-'
            }
        })
        .collect();
    format!("{}_{}", file_stem, property)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extension_package_pattern_compiles() {
        let pattern = extension_package_pattern().unwrap();
        assert!(pattern.is_match("io.quarkus.agroal.runtime.DataSourcesRuntimeConfig"));
        assert!(!pattern.is_match("org.acme.ConfigRoot"));
    }

    #[test]
    fn test_config_root_outside_extensions() {
        assert_eq!(
            compute_extension_doc_file_name("org.acme.ConfigRoot"),
            "org.acme.ConfigRoot.adoc"
        );
    }

    #[test]
    fn test_core_config_roots() {
        assert_eq!(
            compute_extension_doc_file_name("io.quarkus.runtime.RuntimeConfig"),
            "quarkus-core-runtime-config.adoc"
        );
        assert_eq!(
            compute_extension_doc_file_name("io.quarkus.deployment.BuildTimeConfig"),
            "quarkus-core-build-time-config.adoc"
        );
        assert_eq!(
            compute_extension_doc_file_name("io.quarkus.deployment.path.BuildTimeConfig"),
            "quarkus-core-build-time-config.adoc"
        );
    }

    #[test]
    fn test_guessed_artifact_id() {
        assert_eq!(
            compute_extension_doc_file_name("io.quarkus.agroal.Config"),
            "quarkus-agroal.adoc"
        );
        assert_eq!(
            compute_extension_doc_file_name("io.quarkus.keycloak.Config"),
            "quarkus-keycloak.adoc"
        );
        assert_eq!(
            compute_extension_doc_file_name("io.quarkus.extension.name.BuildTimeConfig"),
            "quarkus-extension-name.adoc"
        );
    }

    #[test]
    fn test_deployment_and_runtime_segments_are_not_qualifiers() {
        assert_eq!(
            compute_extension_doc_file_name("io.quarkus.agroal.runtime.DataSourcesConfig"),
            "quarkus-agroal.adoc"
        );
        assert_eq!(
            compute_extension_doc_file_name("io.quarkus.smallrye.jwt.deployment.JwtBuildConfig"),
            "quarkus-smallrye-jwt.adoc"
        );
        assert_eq!(
            compute_extension_doc_file_name("io.quarkus.vertx.http.runtime.HttpConfiguration"),
            "quarkus-vertx-http.adoc"
        );
    }

    #[test]
    fn test_hyphenate() {
        assert_eq!(hyphenate("RuntimeConfig"), "runtime-config");
        assert_eq!(hyphenate("BuildTimeConfig"), "build-time-config");
        assert_eq!(hyphenate("HTTPConfig"), "http-config");
        assert_eq!(hyphenate("maxPoolSize"), "max-pool-size");
        assert_eq!(hyphenate("Config"), "config");
        assert_eq!(hyphenate("Oauth2Config"), "oauth2-config");
    }

    #[test]
    fn test_env_var_name() {
        assert_eq!(to_env_var_name("quarkus.http.port"), "QUARKUS_HTTP_PORT");
        assert_eq!(
            to_env_var_name("quarkus.datasource.\"ds\".jdbc-url"),
            "QUARKUS_DATASOURCE__DS__JDBC_URL"
        );
    }

    #[test]
    fn test_anchor() {
        assert_eq!(
            anchor("quarkus-agroal", "quarkus.datasource.\"name\".url"),
            "quarkus-agroal_quarkus.datasource.-name-.url"
        );
    }
}
