//! CLI command definitions

use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// Storage backend selectable from the command line
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum StorageArg {
    /// Keep questions in memory only
    Memory,
    /// Persist questions to a JSON file
    Json,
}

impl StorageArg {
    pub fn as_str(&self) -> &'static str {
        match self {
            StorageArg::Memory => "memory",
            StorageArg::Json => "json",
        }
    }
}

/// CLI arguments for question-bank
#[derive(Parser, Debug)]
#[command(name = "question-bank")]
#[command(author, version, about = "Question bank server with exam paper generation")]
#[command(long_about = r#"
Question Bank serves a JSON API for storing questions and assembling
exam papers from them.

A paper is generated from a total mark count and a difficulty distribution
whose percentages sum to 100. Each difficulty bucket is filled greedily from
a random ordering of the matching questions.

Configuration files are loaded from (in priority order):
1. QBANK_* environment variables (e.g. QBANK_SERVER__PORT=8080)
2. --config <path>     Explicit config file
3. ./qbank.toml        Project-level config
4. ~/.config/question-bank/config.toml   Global config

Example:
  question-bank
  question-bank --port 8080 --storage json --data ./questions.json
  question-bank -vv --config ./deploy/qbank.toml
"#)]
pub struct Cli {
    /// Address to bind (overrides server.host)
    #[arg(long, value_name = "HOST")]
    pub host: Option<String>,

    /// Port to listen on (overrides server.port)
    #[arg(short, long, value_name = "PORT")]
    pub port: Option<u16>,

    /// Storage backend (overrides storage.backend)
    #[arg(long, value_enum)]
    pub storage: Option<StorageArg>,

    /// JSON data file (overrides storage.path)
    #[arg(long, value_name = "PATH")]
    pub data: Option<PathBuf>,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Path to configuration file
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long)]
    pub no_config: bool,

    /// Show configuration file locations and exit
    #[arg(long)]
    pub show_config: bool,
}

impl Cli {
    /// Log filter implied by `-v` flags, if any were given
    pub fn verbosity_filter(&self) -> Option<&'static str> {
        match self.verbose {
            0 => None,
            1 => Some("info"),
            2 => Some("debug"),
            _ => Some("trace"),
        }
    }
}
