//! Command-line interface for emoji2text.
//!
//! This module handles CLI argument parsing and turns it into the options the
//! application runs with.

use clap::{Parser, Subcommand};
use emoji2text_config::LogLevel;
use std::path::PathBuf;

/// emoji2text - Generate a font that shows every emoji as its readable name
#[derive(Parser, Debug)]
#[command(name = "emoji2text")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Font to copy the name alphabet from (default: configured source_font)
    #[arg(value_name = "SOURCE_FONT")]
    pub source_font: Option<PathBuf>,

    /// Unicode emoji-test.txt registry to read
    #[arg(long, value_name = "PATH", global = true)]
    pub registry: Option<PathBuf>,

    /// Directory the glyph plan is written to
    #[arg(long, value_name = "DIR")]
    pub output_dir: Option<PathBuf>,

    /// YAML configuration file
    #[arg(long, value_name = "PATH", global = true)]
    pub config: Option<PathBuf>,

    /// Log level: off, error, warn, info, debug, trace
    #[arg(long, value_name = "LEVEL", global = true)]
    pub log_level: Option<LogLevel>,
}

#[derive(Subcommand, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Commands {
    /// Print the parsed emoji tables as JSON
    Tables,
}

/// What the application should do
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum RunMode {
    /// Build the glyph plan
    #[default]
    Build,
    /// Dump the emoji tables to stdout
    Tables,
}

/// Runtime options passed from CLI to the application
#[derive(Clone, Debug, Default)]
pub struct RuntimeOptions {
    pub mode: RunMode,
    /// Source font override
    pub source_font: Option<PathBuf>,
    /// Registry file override
    pub registry: Option<PathBuf>,
    /// Output directory override
    pub output_dir: Option<PathBuf>,
    /// Config file to load instead of the defaults
    pub config: Option<PathBuf>,
    /// Log level override (takes precedence over RUST_LOG and config)
    pub log_level: Option<LogLevel>,
}

impl From<Cli> for RuntimeOptions {
    fn from(cli: Cli) -> Self {
        let mode = match cli.command {
            Some(Commands::Tables) => RunMode::Tables,
            None => RunMode::Build,
        };
        Self {
            mode,
            source_font: cli.source_font,
            registry: cli.registry,
            output_dir: cli.output_dir,
            config: cli.config,
            log_level: cli.log_level,
        }
    }
}

/// Result of CLI processing
pub enum CliResult {
    /// Continue with normal application startup
    Continue(RuntimeOptions),
    /// Exit with the given code
    Exit(i32),
}

/// Process CLI arguments
pub fn process_cli() -> CliResult {
    match Cli::try_parse() {
        Ok(cli) => CliResult::Continue(cli.into()),
        Err(e) => {
            // --help and --version also arrive here, with a zero exit code
            let code = e.exit_code();
            let _ = e.print();
            CliResult::Exit(code)
        }
    }
}
