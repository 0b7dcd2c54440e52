//! Command line argument parsing for the idiom-graph CLI using clap.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use log::LevelFilter;
use serde::{Deserialize, Serialize};

use crate::config::{ConfigOverrides, parse_limit};

/// idiom-graph - Draw a graph of Chinese four-character idioms
#[derive(Parser, Debug, Clone)]
#[command(name = "idiom-graph")]
#[command(about = "Draw a graph of Chinese four-character idioms")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(long_about = None)]
pub struct IdiomGraphArgs {
    /// Verbosity level (0=quiet, 1=normal, 2=verbose, 3=debug)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Quiet mode (overrides verbose)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Output format for the run summary
    #[arg(short = 'f', long = "format", default_value = "human", global = true)]
    pub output_format: OutputFormat,

    /// Pretty-print JSON output
    #[arg(long, global = true)]
    pub pretty: bool,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}

impl IdiomGraphArgs {
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

    /// Global log level for the effective verbosity.
    pub fn log_level(&self) -> LevelFilter {
        match self.verbosity() {
            0 => LevelFilter::Error, // Quiet mode
            1 => LevelFilter::Warn,  // Default
            2 => LevelFilter::Info,  // Verbose
            _ => LevelFilter::Debug, // Very verbose (3+)
        }
    }

    /// Log level for this crate's own modules.
    ///
    /// Progress is logged at `info`, so `generate --progress` raises the
    /// crate to at least that level unless quiet mode is on.
    pub fn crate_log_level(&self) -> LevelFilter {
        let level = self.log_level();
        match &self.command {
            Command::Generate(generate) if generate.progress && !self.quiet => {
                level.max(LevelFilter::Info)
            }
            _ => level,
        }
    }
}

/// Available CLI commands
#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Build the idiom graph and render it
    Generate(GenerateArgs),

    /// Build the idiom graph and only report its statistics
    Stats(StatsArgs),
}

fn limit_num_idioms(raw: &str) -> Result<i64, String> {
    parse_limit("limit_num_idioms", raw).map_err(|e| e.to_string())
}

fn limit_char_nodes(raw: &str) -> Result<i64, String> {
    parse_limit("limit_char_nodes", raw).map_err(|e| e.to_string())
}

fn limit_num_idioms_each_node(raw: &str) -> Result<i64, String> {
    parse_limit("limit_num_idioms_each_node", raw).map_err(|e| e.to_string())
}

/// Options shared by every command that builds a graph.
#[derive(Args, Debug, Clone)]
pub struct PipelineArgs {
    /// Idiom list, one idiom per line
    #[arg(short, long, value_name = "FILE", default_value = "idioms.txt")]
    pub input: PathBuf,

    /// JSON configuration file
    #[arg(short, long, value_name = "CONFIG_FILE")]
    pub config: Option<PathBuf>,

    /// Max number of idioms to consider; non-positive disables sub-sampling
    #[arg(
        long,
        alias = "limit_num_idioms",
        env = "IDIOM_GRAPH_LIMIT_NUM_IDIOMS",
        value_parser = limit_num_idioms,
        allow_negative_numbers = true
    )]
    pub limit_num_idioms: Option<i64>,

    /// Only use the top N most frequently used character nodes
    #[arg(
        long,
        alias = "limit_char_nodes",
        env = "IDIOM_GRAPH_LIMIT_CHAR_NODES",
        value_parser = limit_char_nodes,
        allow_negative_numbers = true
    )]
    pub limit_char_nodes: Option<i64>,

    /// Max number of idioms to display at each merged idiom node
    #[arg(
        long,
        alias = "limit_num_idioms_each_node",
        env = "IDIOM_GRAPH_LIMIT_NUM_IDIOMS_EACH_NODE",
        value_parser = limit_num_idioms_each_node,
        allow_negative_numbers = true
    )]
    pub limit_num_idioms_each_node: Option<i64>,

    /// Seed for sub-sampling
    #[arg(long, env = "IDIOM_GRAPH_SEED")]
    pub seed: Option<u64>,
}

impl PipelineArgs {
    /// Values given on the command line (or environment).
    pub fn overrides(&self) -> ConfigOverrides {
        ConfigOverrides {
            limit_num_idioms: self.limit_num_idioms,
            limit_char_nodes: self.limit_char_nodes,
            limit_num_idioms_each_node: self.limit_num_idioms_each_node,
            seed: self.seed,
        }
    }
}

/// Arguments for generating a graph
#[derive(Parser, Debug, Clone)]
pub struct GenerateArgs {
    #[command(flatten)]
    pub pipeline: PipelineArgs,

    /// Where to write the rendered graph [default: <NAME>.gv, or <NAME>.json with --emit json]
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// What to write to the output file
    #[arg(short, long, default_value = "dot")]
    pub emit: EmitFormat,

    /// Graph name
    #[arg(long, default_value = crate::render::DEFAULT_GRAPH_NAME)]
    pub name: String,

    /// Also run Graphviz `dot` to produce this image format (e.g. pdf, svg)
    #[arg(long, value_name = "FORMAT")]
    pub graphviz_format: Option<String>,

    /// Log progress while generating the graph
    #[arg(long)]
    pub progress: bool,
}

impl GenerateArgs {
    /// The output file, defaulting to the graph name with `extension`.
    pub fn output_path(&self, extension: &str) -> PathBuf {
        self.output
            .clone()
            .unwrap_or_else(|| PathBuf::from(format!("{}.{}", self.name, extension)))
    }
}

/// Arguments for reporting statistics
#[derive(Parser, Debug, Clone)]
pub struct StatsArgs {
    #[command(flatten)]
    pub pipeline: PipelineArgs,
}

/// Rendered graph formats
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EmitFormat {
    /// Graphviz DOT
    Dot,
    /// JSON nodes and edges
    Json,
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
