//! Configuration management for the testinfo validator.
//!
//! Handles:
//! - Command-line argument parsing
//! - Schema directory resolution

use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;

use crate::family::DocumentFamily;

/// Command-line arguments for the validator
#[derive(Debug, Parser)]
#[command(name = "testinfo-validator")]
#[command(about = "Validate a test-suite definition before running the harness")]
#[command(version)]
pub struct Args {
    /// Document family (selects validator table and schema)
    #[arg(short = 't', long = "type", value_enum, default_value_t = DocumentFamily::Krsu)]
    pub family: DocumentFamily,

    /// Main XML file
    #[arg(short, long, default_value = "testinfo.xml")]
    pub file: PathBuf,

    /// Directory searched first for the family schema
    #[arg(long, help = "Directory containing schema (.xsd) files")]
    pub schema_dir: Option<PathBuf>,

    /// Log level for stderr logging
    #[arg(
        long,
        default_value = "warn",
        help = "Log level (trace, debug, info, warn, error)"
    )]
    pub log_level: String,
}

/// Combined configuration from all sources
#[derive(Debug, Clone)]
pub struct Config {
    pub family: DocumentFamily,
    /// Document to validate
    pub file: PathBuf,
    /// Schema search path, highest priority first
    pub schema_dirs: Vec<PathBuf>,
    /// Base directory for relative paths inside the document
    pub base_dir: PathBuf,
    pub log_level: String,
}

impl Config {
    /// Create configuration from command-line arguments
    pub fn from_args_and_env() -> Result<Self> {
        Self::from_args(Args::parse())
    }

    /// Create configuration from explicit arguments (useful for testing)
    pub fn from_args(args: Args) -> Result<Self> {
        let mut schema_dirs = Vec::new();

        // User-specified directory wins
        if let Some(custom_dir) = args.schema_dir {
            schema_dirs.push(custom_dir);
        }

        // Working directory, where the schema traditionally sits
        schema_dirs.push(std::env::current_dir()?);

        // User config directory
        if let Some(config_dir) = dirs::config_dir() {
            schema_dirs.push(config_dir.join("testinfo-validator").join("schemas"));
        }

        Ok(Config {
            family: args.family,
            file: args.file,
            schema_dirs,
            base_dir: PathBuf::from("."),
            log_level: args.log_level,
        })
    }
}
