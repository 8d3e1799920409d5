//! Command line argument parsing for the sarissa-jieba CLI using clap.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};

use crate::analysis::segmenter::DICT_DIR_ENV;

/// sarissa-jieba - Chinese word segmentation for full-text search
#[derive(Parser, Debug, Clone)]
#[command(name = "sarissa-jieba")]
#[command(about = "Analyze Chinese text with the jieba token filter")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(long_about = None)]
pub struct SarissaJiebaArgs {
    /// Verbosity level (0=quiet, 1=normal, 2=verbose, 3=debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Quiet mode (overrides verbose)
    #[arg(short, long)]
    pub quiet: bool,

    /// Output format
    #[arg(short = 'f', long = "format", default_value = "human")]
    pub output_format: OutputFormat,

    /// Pretty-print JSON output
    #[arg(long)]
    pub pretty: bool,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}

impl SarissaJiebaArgs {
    /// Get the effective verbosity level
    pub fn verbosity(&self) -> u8 {
        if self.quiet {
            0
        } else {
            match self.verbose {
                0 => 1, // Default to normal
                n => n,
            }
        }
    }
}

/// Available CLI commands
#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Tokenize text and print the filtered tokens
    Analyze(AnalyzeArgs),

    /// Load a segmenter and show its load metadata
    Info(InfoArgs),
}

/// Arguments for analyzing text
#[derive(Parser, Debug, Clone)]
pub struct AnalyzeArgs {
    /// Text to analyze
    #[arg(value_name = "TEXT", required_unless_present = "input")]
    pub text: Option<String>,

    /// Analyze every line of this file instead
    #[arg(short, long, value_name = "FILE", conflicts_with = "text")]
    pub input: Option<PathBuf>,

    /// Dictionary directory
    #[arg(short, long, value_name = "DIR", env = DICT_DIR_ENV)]
    pub dict_dir: Option<String>,

    /// Use precise mode instead of search mode
    #[arg(long)]
    pub precise: bool,

    /// Disable HMM inference of unknown words
    #[arg(long)]
    pub no_hmm: bool,
}

/// Arguments for showing segmenter information
#[derive(Parser, Debug, Clone)]
pub struct InfoArgs {
    /// Dictionary directory
    #[arg(short, long, value_name = "DIR", env = DICT_DIR_ENV)]
    pub dict_dir: Option<String>,

    /// Reload the segmenter this many times before reporting
    #[arg(short, long, default_value = "0")]
    pub reload: usize,
}

/// Output formats for CLI
#[derive(ValueEnum, Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable output
    Human,
    /// JSON output
    Json,
}
