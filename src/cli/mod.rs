//! CLI interface and argument parsing
//!
//! This module provides the command-line interface for Neutralizer using clap.

pub mod commands;

use clap::{Parser, Subcommand};

/// Neutralizer - bulk exporter for CAD assemblies
#[derive(Parser, Debug)]
#[command(name = "neutralizer")]
#[command(version, about, long_about = None)]
#[command(author = "Neutralizer Contributors")]
pub struct Cli {
    /// Path to export configuration file (.xml or .toml)
    #[arg(
        short,
        long,
        global = true,
        default_value = "neutralizer.xml",
        env = "NEUTRALIZER_CONFIG"
    )]
    pub config: String,

    /// Log level (trace, debug, info, warn, error)
    #[arg(short, long, global = true, env = "NEUTRALIZER_LOG_LEVEL")]
    pub log_level: Option<String>,

    /// Also write JSON logs to this directory
    #[arg(long, global = true, value_name = "DIR")]
    pub log_dir: Option<String>,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Purge and export an assembly tree as configured
    Export(commands::export::ExportArgs),

    /// Validate configuration file
    ValidateConfig(commands::validate::ValidateArgs),

    /// Initialize a new configuration file
    Init(commands::init::InitArgs),
}
