//! confdoc CLI - generate configuration reference pages

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use tracing::{info, warn};

use confdoc_core::doc::{compute_extension_doc_file_name, ConfigDocGenerator, ExtensionDescriptor};
use confdoc_core::{GeneratorConfig, CONFIG_FILE};

mod logging;

#[derive(Parser)]
#[command(name = "confdoc")]
#[command(version = confdoc_core::VERSION)]
#[command(about = "Configuration reference generator", long_about = None)]
struct Cli {
    /// Show debug output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate AsciiDoc references from extension descriptors (JSON)
    Generate {
        /// Extension descriptor files
        #[arg(required = true)]
        inputs: Vec<PathBuf>,

        /// Generator settings (defaults to ./confdoc.toml when present)
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Output directory, overriding the settings file
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Print the documentation link for a fully qualified type
    Link {
        /// Type name, e.g. java.util.Map$Entry
        type_name: String,

        /// Generator settings providing extra documentation sites
        #[arg(short, long)]
        config: Option<PathBuf>,
    },

    /// Print the output file name for a config root class
    FileName {
        /// Fully qualified config root class name
        config_root: String,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init_logging(cli.verbose);

    match cli.command {
        Commands::Generate {
            inputs,
            config,
            output,
        } => generate(&inputs, config.as_deref(), output),
        Commands::Link { type_name, config } => {
            let config = load_config(config.as_deref())?;
            let link = config.link_resolver().resolve(&type_name);
            if link.is_empty() {
                warn!(type_name = %type_name, "no documentation site for type");
            } else {
                println!("{}", link);
            }
            Ok(())
        }
        Commands::FileName { config_root } => {
            println!("{}", compute_extension_doc_file_name(&config_root));
            Ok(())
        }
    }
}

/// Load the given settings file, or `./confdoc.toml` if it exists, or defaults.
fn load_config(path: Option<&Path>) -> Result<GeneratorConfig> {
    match path {
        Some(path) => GeneratorConfig::from_path(path)
            .with_context(|| format!("Failed to load config '{}'", path.display())),
        None if Path::new(CONFIG_FILE).is_file() => GeneratorConfig::from_path(CONFIG_FILE)
            .with_context(|| format!("Failed to load config '{}'", CONFIG_FILE)),
        None => Ok(GeneratorConfig::default()),
    }
}

fn generate(inputs: &[PathBuf], config: Option<&Path>, output: Option<PathBuf>) -> Result<()> {
    let config = load_config(config)?;
    let output_dir = output.unwrap_or_else(|| config.output_dir.clone());

    let mut generator = ConfigDocGenerator::from_config(&config);
    for input in inputs {
        let descriptor = ExtensionDescriptor::from_path(input)
            .with_context(|| format!("Failed to read descriptor '{}'", input.display()))?;
        let file_name = generator.add_descriptor(&descriptor);
        info!(
            input = %input.display(),
            config_root = %descriptor.config_root,
            file = %file_name,
            properties = descriptor.properties.len(),
            "collected extension"
        );
    }

    let written = generator
        .write_all(&output_dir)
        .with_context(|| format!("Failed to write documentation to '{}'", output_dir.display()))?;

    println!(
        "Generated {} file(s) in {}",
        written.len(),
        output_dir.display()
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verify_cli() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }

    #[test]
    fn test_generate_with_config_and_output() {
        let cli = Cli::try_parse_from([
            "confdoc", "generate", "a.json", "b.json", "-c", "confdoc.toml", "-o", "out",
        ])
        .unwrap();
        match cli.command {
            Commands::Generate {
                inputs,
                config,
                output,
            } => {
                assert_eq!(inputs, vec![PathBuf::from("a.json"), PathBuf::from("b.json")]);
                assert_eq!(config, Some(PathBuf::from("confdoc.toml")));
                assert_eq!(output, Some(PathBuf::from("out")));
            }
            _ => panic!("Expected Generate command"),
        }
        assert!(!cli.verbose);
    }

    #[test]
    fn test_generate_requires_inputs() {
        assert!(Cli::try_parse_from(["confdoc", "generate"]).is_err());
    }

    #[test]
    fn test_link_command() {
        let cli = Cli::try_parse_from(["confdoc", "link", "java.util.Map$Entry"]).unwrap();
        match cli.command {
            Commands::Link { type_name, config } => {
                assert_eq!(type_name, "java.util.Map$Entry");
                assert!(config.is_none());
            }
            _ => panic!("Expected Link command"),
        }
    }

    #[test]
    fn test_file_name_command() {
        let cli = Cli::try_parse_from(["confdoc", "file-name", "io.quarkus.agroal.Config"]).unwrap();
        match cli.command {
            Commands::FileName { config_root } => assert_eq!(config_root, "io.quarkus.agroal.Config"),
            _ => panic!("Expected FileName command"),
        }
    }

    #[test]
    fn test_verbose_is_global() {
        let before = Cli::try_parse_from(["confdoc", "-v", "file-name", "a.B"]).unwrap();
        assert!(before.verbose);
        let after = Cli::try_parse_from(["confdoc", "file-name", "a.B", "--verbose"]).unwrap();
        assert!(after.verbose);
    }

    #[test]
    fn test_generate_writes_files() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("runtime.json");
        std::fs::write(
            &input,
            r#"{ "config_root": "io.quarkus.runtime.RuntimeConfig",
                 "properties": [ { "name": "quarkus.profile", "type": "java.lang.String" } ] }"#,
        )
        .unwrap();
        let out = dir.path().join("out");

        generate(&[input], None, Some(out.clone())).unwrap();

        let content = std::fs::read_to_string(out.join("quarkus-core-runtime-config.adoc")).unwrap();
        assert!(content.contains("QUARKUS_PROFILE"));
    }

    #[test]
    fn test_generate_reports_missing_descriptor() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("missing.json");

        let err = generate(&[missing], None, Some(dir.path().join("out"))).unwrap_err();
        assert!(err.to_string().contains("Failed to read descriptor"));
    }
}
