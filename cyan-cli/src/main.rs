//! Command-line interface for cyan-init
//! This binary walks the interactive question flow and writes the resulting
//! CyanPrint document to stdout (or a file) as JSON or YAML.
//!
//! Usage:
//!   cyan-init                          - Run the flow, print JSON to stdout
//!   cyan-init --format yaml            - Emit YAML instead
//!   cyan-init -o cyan.json             - Write the document to a file
//!   cyan-init --config my-init.toml    - Layer a configuration file

use clap::{Arg, Command};

use cyan::descriptor::document::CyanDocument;
use cyan::descriptor::{assemble, flow};
use cyan_config::{ConfigError, InitConfig, Loader, OutputFormat};

mod prompter;

use prompter::TerminalPrompter;

/// Optional user configuration looked up next to the working directory.
const USER_CONFIG_FILE: &str = "cyan-init.toml";

fn main() {
    let matches = Command::new("cyan-init")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Interactive descriptor builder for CyanPrint scaffolds")
        .arg(
            Arg::new("config")
                .long("config")
                .short('c')
                .help("Path to a configuration file (defaults layered underneath)"),
        )
        .arg(
            Arg::new("format")
                .long("format")
                .short('f')
                .value_parser(["json", "yaml"])
                .help("Output format (overrides the configured default)"),
        )
        .arg(
            Arg::new("output")
                .long("output")
                .short('o')
                .help("Write the document to this path instead of stdout"),
        )
        .get_matches();

    let config = load_config(
        matches.get_one::<String>("config"),
        matches.get_one::<String>("format"),
    )
    .unwrap_or_else(|e| {
        eprintln!("Configuration error: {}", e);
        std::process::exit(1);
    });

    let mut prompter = TerminalPrompter::stdio();
    let answers = flow::run(&mut prompter).unwrap_or_else(|e| {
        eprintln!("Prompt failed: {}", e);
        std::process::exit(1);
    });

    let document = assemble(&answers).into_document();
    let rendered = render(&document, &config).unwrap_or_else(|e| {
        eprintln!("Serialization error: {}", e);
        std::process::exit(1);
    });

    match matches.get_one::<String>("output") {
        Some(path) => {
            std::fs::write(path, rendered.as_bytes()).unwrap_or_else(|e| {
                eprintln!("Failed to write {}: {}", path, e);
                std::process::exit(1);
            });
        }
        None => println!("{}", rendered),
    }
}

/// Layer defaults, the optional (or explicitly named) user file, and the
/// format flag.
fn load_config(
    file: Option<&String>,
    format: Option<&String>,
) -> Result<InitConfig, ConfigError> {
    let mut loader = match file {
        Some(path) => Loader::new().with_file(path),
        None => Loader::new().with_optional_file(USER_CONFIG_FILE),
    };
    if let Some(format) = format {
        loader = loader.set_override("output.format", format.as_str())?;
    }
    loader.build()
}

/// Serialize the document according to the configured output format.
fn render(document: &CyanDocument, config: &InitConfig) -> Result<String, String> {
    match config.output.format {
        OutputFormat::Json if config.output.pretty => {
            serde_json::to_string_pretty(document).map_err(|e| e.to_string())
        }
        OutputFormat::Json => serde_json::to_string(document).map_err(|e| e.to_string()),
        OutputFormat::Yaml => serde_yaml::to_string(document).map_err(|e| e.to_string()),
    }
}
