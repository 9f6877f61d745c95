//! fx-router CLI - convert an amount between currencies from a rates file
//!
//! ## Example Usage
//!
//! ```bash
//! # Convert using a rates file
//! fx-router convert rates.txt
//!
//! # Same, as JSON
//! fx-router convert rates.txt --json
//!
//! # Show what a file contains without converting
//! fx-router inspect rates.txt
//! ```

use anyhow::{anyhow, Context};
use clap::{Parser, Subcommand};
use colored::Colorize;
use fx_router::engine::ConversionEngine;
use fx_router::error::RouterError;
use fx_router::ingest;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::process;

/// fx-router: shortest-path currency conversion
#[derive(Parser)]
#[command(name = "fx-router")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Shortest-path currency conversion", long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Configuration file path
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Convert the amount in a rates file and print the result
    Convert {
        /// Path to the rates file (falls back to the configured default)
        #[arg(value_name = "FILE")]
        file: Option<PathBuf>,

        /// Emit the result as JSON instead of a bare integer
        #[arg(long)]
        json: bool,
    },

    /// Show the request and graph a rates file describes
    Inspect {
        /// Path to the rates file (falls back to the configured default)
        #[arg(value_name = "FILE")]
        file: Option<PathBuf>,
    },
}

/// Configuration file structure (`~/.fx-router/config.toml`)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
struct Config {
    /// Rates file used when no FILE argument is given
    #[serde(default)]
    default_input: Option<PathBuf>,
}

impl Config {
    fn load(path: Option<&Path>) -> Self {
        let candidate = path.map(Path::to_path_buf).or_else(|| {
            dirs::home_dir().map(|home| home.join(".fx-router").join("config.toml"))
        });

        if let Some(config_path) = candidate {
            if config_path.exists() {
                match fs::read_to_string(&config_path) {
                    Ok(contents) => match toml::from_str(&contents) {
                        Ok(config) => return config,
                        Err(e) => {
                            eprintln!("{} Failed to parse config: {}", "Warning:".yellow(), e);
                        }
                    },
                    Err(e) => {
                        eprintln!("{} Failed to read config: {}", "Warning:".yellow(), e);
                    }
                }
            }
        }

        Config::default()
    }
}

#[derive(Serialize)]
struct ConversionOutput {
    from: String,
    to: String,
    amount: i64,
    result: i64,
}

fn main() {
    env_logger::init();
    let cli = Cli::parse();

    let config = Config::load(cli.config.as_deref());

    let result = match cli.command {
        Commands::Convert { file, json } => convert(file, json, cli.verbose, &config),
        Commands::Inspect { file } => inspect(file, cli.verbose, &config),
    };

    if let Err(e) = result {
        eprintln!("{} {:#}", "Error:".red().bold(), e);
        process::exit(1);
    }
}

fn resolve_input(file: Option<PathBuf>, config: &Config) -> anyhow::Result<PathBuf> {
    file.or_else(|| config.default_input.clone()).ok_or_else(|| {
        anyhow!("no rates file given and no default_input configured")
    })
}

fn convert(
    file: Option<PathBuf>,
    json: bool,
    verbose: bool,
    config: &Config,
) -> anyhow::Result<()> {
    let path = resolve_input(file, config)?;
    let (request, graph) = ingest::load_file(&path)
        .with_context(|| format!("failed to load {}", path.display()))?;

    if verbose {
        eprintln!(
            "{} {} {} -> {} over {} currencies, {} quotes",
            "Converting:".bold(),
            request.amount,
            request.from,
            request.to,
            graph.num_currencies(),
            graph.num_exchanges()
        );
    }

    let engine = ConversionEngine::new(&graph);
    match engine.convert(&request) {
        Ok(result) => {
            if json {
                let output = ConversionOutput {
                    from: request.from.to_string(),
                    to: request.to.to_string(),
                    amount: request.amount,
                    result,
                };
                println!("{}", serde_json::to_string_pretty(&output)?);
            } else {
                println!("{}", result);
            }
            Ok(())
        }
        Err(RouterError::MissingRate { from, to }) => {
            eprintln!(
                "{} Cannot compute this conversion from {} to {}: some rates are missing.",
                "Error:".red().bold(),
                from.bold(),
                to.bold()
            );
            process::exit(1);
        }
        Err(e) => Err(e.into()),
    }
}

fn inspect(file: Option<PathBuf>, verbose: bool, config: &Config) -> anyhow::Result<()> {
    let path = resolve_input(file, config)?;
    let (request, graph) = ingest::load_file(&path)
        .with_context(|| format!("failed to load {}", path.display()))?;

    println!("{}", format!("Rates file: {}", path.display()).cyan().bold());
    println!();
    println!(
        "  {} {} {} -> {}",
        "Request:".bold(),
        request.amount,
        request.from,
        request.to
    );
    println!("  {} {}", "Currencies:".bold(), graph.num_currencies());
    println!("  {} {}", "Quotes:".bold(), graph.num_exchanges());

    if verbose {
        println!();
        for (position, currency) in graph.currencies().iter().enumerate() {
            println!("  {}. {}", position, currency);
        }
    }

    Ok(())
}
