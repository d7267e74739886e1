//! Report writers for the one-shot `report` command.

use crate::core::{SortDirection, Student};
use crate::formatting::render_roster;
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::fs;
use std::io::Write;
use std::path::Path;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Json,
    Markdown,
    Terminal,
}

/// A sorted roster plus the metadata the structured writers emit.
#[derive(Debug, Serialize)]
pub struct RosterReport {
    pub title: String,
    pub direction: SortDirection,
    pub records: Vec<Student>,
    pub generated_at: DateTime<Utc>,
}

impl RosterReport {
    pub fn new(direction: SortDirection, records: Vec<Student>) -> Self {
        Self {
            title: direction.title().to_string(),
            direction,
            records,
            generated_at: Utc::now(),
        }
    }
}

pub trait OutputWriter {
    fn write_report(&mut self, report: &RosterReport) -> anyhow::Result<()>;
}

pub struct JsonWriter<W: Write> {
    writer: W,
}

impl<W: Write> JsonWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }
}

impl<W: Write> OutputWriter for JsonWriter<W> {
    fn write_report(&mut self, report: &RosterReport) -> anyhow::Result<()> {
        let json = serde_json::to_string_pretty(report)?;
        self.writer.write_all(json.as_bytes())?;
        self.writer.write_all(b"\n")?;
        Ok(())
    }
}

pub struct MarkdownWriter<W: Write> {
    writer: W,
}

impl<W: Write> MarkdownWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }
}

impl<W: Write> OutputWriter for MarkdownWriter<W> {
    fn write_report(&mut self, report: &RosterReport) -> anyhow::Result<()> {
        writeln!(self.writer, "# Gradebook Report")?;
        writeln!(self.writer)?;
        writeln!(
            self.writer,
            "Generated: {}",
            report.generated_at.format("%Y-%m-%d %H:%M:%S UTC")
        )?;
        writeln!(self.writer, "Direction: {}", report.title)?;
        writeln!(self.writer)?;
        writeln!(self.writer, "| Name | Score |")?;
        writeln!(self.writer, "|------|-------|")?;
        for student in &report.records {
            writeln!(self.writer, "| {} | {:.2} |", student.name, student.score)?;
        }
        Ok(())
    }
}

pub struct TerminalWriter<W: Write> {
    writer: W,
}

impl<W: Write> TerminalWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }
}

impl<W: Write> OutputWriter for TerminalWriter<W> {
    fn write_report(&mut self, report: &RosterReport) -> anyhow::Result<()> {
        let block = render_roster(&report.records, &report.title);
        self.writer.write_all(block.as_bytes())?;
        Ok(())
    }
}

/// Builds a boxed writer for the requested format, targeting either stdout or
/// the given output file.
pub fn create_writer(
    format: OutputFormat,
    output: Option<&Path>,
) -> anyhow::Result<Box<dyn OutputWriter>> {
    let sink: Box<dyn Write> = match output {
        Some(path) => Box::new(fs::File::create(path)?),
        None => Box::new(std::io::stdout()),
    };

    Ok(match format {
        OutputFormat::Json => Box::new(JsonWriter::new(sink)),
        OutputFormat::Markdown => Box::new(MarkdownWriter::new(sink)),
        OutputFormat::Terminal => Box::new(TerminalWriter::new(sink)),
    })
}
