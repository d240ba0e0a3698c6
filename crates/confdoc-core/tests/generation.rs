//! Integration tests for a full generation run

use confdoc_core::doc::{
    append_config_items, ConfigDocGenerator, ConfigDocItem, ConfigDocKey, ConfigDocSection,
    ExtensionDescriptor,
};
use confdoc_core::GeneratorConfig;

fn key(name: &str) -> ConfigDocItem {
    ConfigDocKey::new(name, "java.lang.String").into()
}

fn section(title: &str, items: Vec<ConfigDocItem>) -> ConfigDocItem {
    let mut section = ConfigDocSection::new(title);
    section.add_items(items);
    section.into()
}

#[test]
fn test_master_list_grows_across_extensions() {
    let mut master = Vec::new();

    append_config_items(&mut master, vec![key("a"), section("Pool", vec![key("p1")])]);
    append_config_items(&mut master, vec![section("Pool", vec![key("p2")]), key("b")]);
    append_config_items(&mut master, vec![section("Metrics", vec![key("m1")])]);

    assert_eq!(master.len(), 4);
    assert_eq!(master[0], key("a"));
    assert_eq!(master[1], section("Pool", vec![key("p1"), key("p2")]));
    assert_eq!(master[2], key("b"));
    assert_eq!(master[3], section("Metrics", vec![key("m1")]));
}

#[test]
fn test_generate_files_from_descriptors() {
    let runtime = ExtensionDescriptor::parse(
        r#"{
            "config_root": "io.quarkus.agroal.runtime.DataSourcesRuntimeConfig",
            "properties": [
                { "name": "quarkus.datasource.url", "type": "java.lang.String",
                  "description": "The datasource URL", "phase": "run-time" },
                { "name": "quarkus.datasource.transaction-isolation-level",
                  "type": "io.agroal.api.configuration.AgroalConnectionFactoryConfiguration$TransactionIsolation",
                  "phase": "run-time", "optional": true, "section_path": ["Pool"] }
            ]
        }"#,
    )
    .unwrap();
    let build = ExtensionDescriptor::parse(
        r#"{
            "config_root": "io.quarkus.agroal.deployment.DataSourcesBuildTimeConfig",
            "properties": [
                { "name": "quarkus.datasource.pool.enabled", "type": "boolean",
                  "default_value": "true", "section_path": ["Pool"] },
                { "name": "quarkus.datasource.idle-removal-interval", "type": "java.time.Duration",
                  "default_value": "5M" }
            ]
        }"#,
    )
    .unwrap();
    let core = ExtensionDescriptor::parse(
        r#"{
            "config_root": "io.quarkus.runtime.RuntimeConfig",
            "properties": [ { "name": "quarkus.profile", "type": "java.lang.String" } ]
        }"#,
    )
    .unwrap();

    let mut generator = ConfigDocGenerator::from_config(&GeneratorConfig::default());
    generator.add_descriptor(&runtime);
    generator.add_descriptor(&build);
    generator.add_descriptor(&core);

    let names: Vec<_> = generator.file_names().collect();
    assert_eq!(
        names,
        vec!["quarkus-agroal.adoc", "quarkus-core-runtime-config.adoc"]
    );

    // One Pool section holding entries from both config roots
    let agroal = generator.items("quarkus-agroal.adoc").unwrap();
    assert_eq!(agroal.len(), 3);
    let pool = agroal[1].as_section().unwrap();
    assert_eq!(pool.items.len(), 2);
    let isolation = pool.items[0].as_key().unwrap();
    assert_eq!(
        isolation.doc_link.as_deref(),
        Some("https://jar-download.com/javaDoc/io.agroal/agroal-api/1.5/index.html?io/agroal/api/configuration/AgroalConnectionFactoryConfiguration.TransactionIsolation.html")
    );

    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("generated");
    let written = generator.write_all(&out).unwrap();
    assert_eq!(written.len(), 2);

    let content = std::fs::read_to_string(out.join("quarkus-agroal.adoc")).unwrap();
    assert!(content.contains("[[quarkus-agroal_quarkus.datasource.url]]"));
    assert!(content.contains("link:#quarkus-agroal_Pool-section[Pool]"));
    assert!(content.contains("About the Duration format"));
    assert!(content.contains("|`5M`"));

    let core_content =
        std::fs::read_to_string(out.join("quarkus-core-runtime-config.adoc")).unwrap();
    assert!(core_content.contains("QUARKUS_PROFILE"));
}

#[test]
fn test_sorted_rendering_puts_keys_first() {
    let config = GeneratorConfig::parse("sort = true\nlegend = false").unwrap();
    let mut generator = ConfigDocGenerator::from_config(&config);
    generator.add_extension(
        "org.acme.ConfigRoot",
        vec![section("Group", vec![key("acme.group.a")]), key("acme.top")],
    );

    let rendered = generator.render_all().unwrap();
    assert_eq!(rendered[0].0, "org.acme.ConfigRoot.adoc");
    let content = &rendered[0].1;
    assert!(!content.contains("configuration-legend"));
    let top = content.find("[acme.top]").unwrap();
    let group = content.find("[Group]").unwrap();
    assert!(top < group);

    // Sorting happens at render time only
    let items = generator.items("org.acme.ConfigRoot.adoc").unwrap();
    assert!(items[0].is_section());
}

#[test]
fn test_section_metadata_from_descriptor() {
    let descriptor = ExtensionDescriptor::parse(
        r#"{
            "config_root": "org.acme.ConfigRoot",
            "properties": [
                { "name": "acme.inner", "type": "int", "section_path": ["Outer", "Pool"] },
                { "name": "acme.pool.size", "type": "int", "section_path": ["Pool"] }
            ],
            "sections": [
                { "title": "Pool", "details": "Connection pool sizing" }
            ]
        }"#,
    )
    .unwrap();

    let mut generator = ConfigDocGenerator::default();
    let file_name = generator.add_descriptor(&descriptor);

    // The top-level Pool is its own section, not the one nested in Outer
    let items = generator.items(&file_name).unwrap();
    assert_eq!(items.len(), 2);
    assert_eq!(items[1].as_section().unwrap().title, "Pool");

    let content = &generator.render_all().unwrap()[0].1;
    assert!(content.contains("[[org.acme.ConfigRoot_Outer.Pool-section]]"));
    assert!(content.contains("[[org.acme.ConfigRoot_Pool-section]]"));
    assert_eq!(content.matches("Connection pool sizing").count(), 2);
}
