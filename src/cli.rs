use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use crate::core::SortDirection;
use crate::io;

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum Direction {
    /// Lowest score first
    Asc,
    /// Highest score first
    Desc,
}

impl From<Direction> for SortDirection {
    fn from(direction: Direction) -> Self {
        match direction {
            Direction::Asc => SortDirection::Ascending,
            Direction::Desc => SortDirection::Descending,
        }
    }
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum OutputFormat {
    Terminal,
    Json,
    Markdown,
}

impl From<OutputFormat> for io::OutputFormat {
    fn from(format: OutputFormat) -> Self {
        match format {
            OutputFormat::Terminal => io::OutputFormat::Terminal,
            OutputFormat::Json => io::OutputFormat::Json,
            OutputFormat::Markdown => io::OutputFormat::Markdown,
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "gradebook")]
#[command(about = "Student score roster with stable insertion-sort display", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run an interactive roster session
    Shell {
        /// Start with an empty roster instead of the seeded students
        #[arg(long = "no-seed")]
        no_seed: bool,

        /// Plain output (no colors)
        #[arg(long)]
        plain: bool,

        /// Configuration file (defaults to .gradebook.toml)
        #[arg(short, long)]
        config: Option<PathBuf>,
    },

    /// Render the sorted roster once and exit
    Report {
        /// Sort direction
        #[arg(short, long, value_enum, default_value = "asc")]
        direction: Direction,

        /// Output format
        #[arg(short, long, value_enum, default_value = "terminal")]
        format: OutputFormat,

        /// Output file (defaults to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Extra records to add before sorting (repeatable)
        #[arg(long = "record", value_name = "NAME=SCORE")]
        records: Vec<String>,

        /// Start with an empty roster instead of the seeded students
        #[arg(long = "no-seed")]
        no_seed: bool,

        /// Configuration file (defaults to .gradebook.toml)
        #[arg(short, long)]
        config: Option<PathBuf>,
    },

    /// Initialize configuration file
    Init {
        /// Force overwrite existing config
        #[arg(short, long)]
        force: bool,
    },
}
