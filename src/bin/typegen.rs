//! Type Generator CLI
//!
//! Builds the type model for schema documents and inspects configuration.

use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand};
use familiar_typegen::{loader, GenerationConfig, GenerationRun};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "typegen")]
#[command(about = "Generate a type model from JSON Schema documents")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Build the type model for a schema file or directory
    Generate {
        /// Schema file, or directory of .json schemas
        path: PathBuf,

        /// Package for generated classes
        #[arg(short, long, default_value = "")]
        package: String,

        /// Config file to load (optional)
        #[arg(short, long)]
        config: Option<String>,

        /// Output the model as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show or initialize configuration
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },
}

#[derive(Subcommand)]
enum ConfigCommands {
    /// Show the effective configuration
    Show {
        /// Config file to load (optional)
        #[arg(short, long)]
        config: Option<String>,

        /// Output as JSON instead of TOML
        #[arg(long)]
        json: bool,
    },

    /// Write a config file with default values
    Init {
        /// Output path
        #[arg(short, long, default_value = "typegen.toml")]
        output: String,
    },
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> anyhow::Result<()> {
    match cli.command {
        Commands::Generate {
            path,
            package,
            config,
            json,
        } => {
            let cfg = GenerationConfig::load_from(config.as_deref())?;
            let documents = loader::load_path(&path)
                .with_context(|| format!("loading schemas from {}", path.display()))?;
            if documents.is_empty() {
                anyhow::bail!("no .json schemas found under {}", path.display());
            }

            let mut run = GenerationRun::new(cfg)?;
            for doc in &documents {
                run.generate(&doc.locator, &doc.content, &package, &doc.name)
                    .with_context(|| format!("generating types for {}", doc.locator))?;
            }

            if json {
                let (model, markers) = run.into_parts();
                let output = serde_json::json!({ "model": model, "markers": markers });
                println!("{}", serde_json::to_string_pretty(&output)?);
            } else {
                print!("{}", run.describe());
            }
            Ok(())
        }

        Commands::Config { command } => match command {
            ConfigCommands::Show { config, json } => {
                let cfg = GenerationConfig::load_from(config.as_deref())?;
                if json {
                    println!("{}", serde_json::to_string_pretty(&cfg)?);
                } else {
                    println!("{}", toml::to_string_pretty(&cfg)?);
                }
                Ok(())
            }
            ConfigCommands::Init { output } => {
                GenerationConfig::default().save(&output)?;
                println!("Wrote default configuration to {}", output);
                Ok(())
            }
        },
    }
}
