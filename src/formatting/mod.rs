//! Roster rendering and terminal color handling.

use colored::*;
use std::env;
use std::io::IsTerminal;

use crate::core::Student;

/// Width of the left-justified name column.
const NAME_WIDTH: usize = 20;

/// Width of the dash separator under the title line.
const SEPARATOR_WIDTH: usize = 29;

/// Renders a roster block: title line, dash separator, one fixed-width line
/// per record.
///
/// Names are left-justified to a minimum of 20 characters, scores are
/// right-justified in 6 columns with exactly two decimals (73 renders as
/// "73.00"). An empty roster produces just the title and separator.
pub fn render_roster(records: &[Student], title: &str) -> String {
    let mut out = String::with_capacity(64 + records.len() * 32);
    out.push_str(title);
    out.push('\n');
    out.push_str(&"-".repeat(SEPARATOR_WIDTH));
    out.push('\n');
    for student in records {
        out.push_str(&format!(
            "{:<name_width$} {:>6.2}\n",
            student.name,
            student.score,
            name_width = NAME_WIDTH
        ));
    }
    out
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorMode {
    Auto,   // Detect based on terminal
    Always, // Force colors on
    Never,  // Force colors off
}

impl ColorMode {
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "auto" => Some(Self::Auto),
            "always" => Some(Self::Always),
            "never" => Some(Self::Never),
            _ => None,
        }
    }

    pub fn should_use_color(&self) -> bool {
        match self {
            Self::Always => true,
            Self::Never => false,
            Self::Auto => detect_color_support(),
        }
    }
}

/// Color preferences for status and error lines.
///
/// The roster block itself is always plain fixed-width text; colors only
/// apply to the shell's chrome around it.
#[derive(Debug, Clone, Copy)]
pub struct FormattingConfig {
    pub color: ColorMode,
}

impl Default for FormattingConfig {
    fn default() -> Self {
        Self {
            color: ColorMode::Auto,
        }
    }
}

impl FormattingConfig {
    pub fn new(color: ColorMode) -> Self {
        Self { color }
    }

    /// Apply environment overrides on top of the configured base mode.
    pub fn apply_env(mut self) -> Self {
        // Check NO_COLOR environment variable (per no-color.org standard)
        if env::var("NO_COLOR").is_ok() {
            self.color = ColorMode::Never;
        }

        // Check CLICOLOR environment variable
        if let Ok(val) = env::var("CLICOLOR") {
            if val == "0" {
                self.color = ColorMode::Never;
            }
        }

        // Check CLICOLOR_FORCE environment variable
        if let Ok(val) = env::var("CLICOLOR_FORCE") {
            if val == "1" {
                self.color = ColorMode::Always;
            }
        }

        self
    }

    /// Create a plain output configuration (no colors)
    pub fn plain() -> Self {
        Self {
            color: ColorMode::Never,
        }
    }
}

pub struct ColoredFormatter {
    config: FormattingConfig,
}

impl ColoredFormatter {
    pub fn new(config: FormattingConfig) -> Self {
        // Set colored control based on configuration
        if config.color.should_use_color() {
            colored::control::set_override(true);
        } else {
            colored::control::set_override(false);
        }

        Self { config }
    }

    pub fn error(&self, text: &str) -> String {
        if self.config.color.should_use_color() {
            text.red().to_string()
        } else {
            text.to_string()
        }
    }

    pub fn info(&self, text: &str) -> String {
        if self.config.color.should_use_color() {
            text.cyan().to_string()
        } else {
            text.to_string()
        }
    }

    pub fn dim(&self, text: &str) -> String {
        if self.config.color.should_use_color() {
            text.dimmed().to_string()
        } else {
            text.to_string()
        }
    }
}

fn detect_color_support() -> bool {
    // Check if we're in a dumb terminal
    if let Ok(term) = env::var("TERM") {
        if term == "dumb" {
            return false;
        }
    }

    // Check if stdout is a TTY
    std::io::stdout().is_terminal()
}
