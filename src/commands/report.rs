//! One-shot report: build a roster, sort it, write it out.

use std::path::PathBuf;

use anyhow::{Context, Result};

use crate::config;
use crate::core::SortDirection;
use crate::io::output::{create_writer, OutputFormat, RosterReport};
use crate::session::Session;
use crate::sort::insertion_sort;

#[derive(Debug)]
pub struct ReportConfig {
    pub direction: SortDirection,
    pub format: OutputFormat,
    pub output: Option<PathBuf>,
    pub records: Vec<String>,
    pub no_seed: bool,
    pub config: Option<PathBuf>,
}

pub fn run_report(cfg: ReportConfig) -> Result<()> {
    let file_config = config::load_config(cfg.config.as_deref());

    let mut session = if cfg.no_seed {
        Session::new()
    } else {
        Session::from_seed(file_config.seed_students())
    };

    for entry in &cfg.records {
        let (name, score) = parse_record_arg(entry)?;
        session
            .on_add(name, score)
            .with_context(|| format!("invalid record {entry:?}"))?;
    }

    let sorted = insertion_sort(session.roster().snapshot(), cfg.direction);
    let report = RosterReport::new(cfg.direction, sorted);

    let mut writer = create_writer(cfg.format, cfg.output.as_deref())?;
    writer.write_report(&report)
}

/// Splits a `NAME=SCORE` argument into its two raw fields.
fn parse_record_arg(arg: &str) -> Result<(&str, &str)> {
    arg.split_once('=')
        .with_context(|| format!("expected NAME=SCORE, got {arg:?}"))
}
