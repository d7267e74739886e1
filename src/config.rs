//! Optional `.gradebook.toml` configuration.
//!
//! Loading is best-effort: a missing file means defaults, a malformed file
//! means a warning and defaults. The roster itself is never persisted; the
//! config only customizes the seed records and display preferences.

use std::path::Path;

use serde::Deserialize;

use crate::core::Student;
use crate::formatting::ColorMode;
use crate::io;
use crate::session::default_seed;

pub const CONFIG_FILE_NAME: &str = ".gradebook.toml";

#[derive(Debug, Default, Deserialize)]
pub struct GradebookConfig {
    #[serde(default)]
    pub display: DisplayConfig,
    #[serde(default)]
    pub seed: Vec<SeedEntry>,
}

#[derive(Debug, Deserialize)]
pub struct DisplayConfig {
    #[serde(default = "default_color")]
    pub color: String,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            color: default_color(),
        }
    }
}

fn default_color() -> String {
    "auto".to_string()
}

#[derive(Debug, Deserialize)]
pub struct SeedEntry {
    pub name: String,
    pub score: f64,
}

impl GradebookConfig {
    /// Color mode for shell chrome; unknown values fall back to auto.
    pub fn color_mode(&self) -> ColorMode {
        match ColorMode::parse(&self.display.color) {
            Some(mode) => mode,
            None => {
                eprintln!(
                    "Warning: unknown color mode {:?}. Using \"auto\".",
                    self.display.color
                );
                ColorMode::Auto
            }
        }
    }

    /// Seed records for a new session.
    ///
    /// Entries are held to the same rules as interactive input: trimmed
    /// non-empty name, finite score in [0, 100]. Invalid entries are dropped
    /// with a warning. No configured entries (or none surviving validation)
    /// means the default five students.
    pub fn seed_students(&self) -> Vec<Student> {
        let valid: Vec<Student> = self
            .seed
            .iter()
            .filter_map(|entry| {
                let name = entry.name.trim();
                if name.is_empty() {
                    eprintln!("Warning: skipping seed entry with empty name");
                    return None;
                }
                if !entry.score.is_finite() || !(0.0..=100.0).contains(&entry.score) {
                    eprintln!(
                        "Warning: skipping seed entry {:?}: score {} is not between 0 and 100",
                        name, entry.score
                    );
                    return None;
                }
                Some(Student::new(name, entry.score))
            })
            .collect();

        if valid.is_empty() {
            default_seed()
        } else {
            valid
        }
    }
}

/// Pure function to parse config from a TOML string
pub fn parse_config(contents: &str) -> Result<GradebookConfig, String> {
    toml::from_str::<GradebookConfig>(contents)
        .map_err(|e| format!("Failed to parse {CONFIG_FILE_NAME}: {e}"))
}

/// Loads configuration, falling back to defaults on any failure.
///
/// `path` overrides the default location (`.gradebook.toml` in the current
/// directory).
pub fn load_config(path: Option<&Path>) -> GradebookConfig {
    let default_path = Path::new(CONFIG_FILE_NAME);
    let config_path = path.unwrap_or(default_path);

    let contents = match io::read_file(config_path) {
        Ok(contents) => contents,
        Err(e) => {
            // An explicitly requested file that is missing is worth a warning;
            // the default location being absent is the common case.
            if path.is_some() {
                eprintln!(
                    "Warning: failed to read config file {}: {}. Using defaults.",
                    config_path.display(),
                    e
                );
            }
            return GradebookConfig::default();
        }
    };

    match parse_config(&contents) {
        Ok(config) => {
            log::debug!("Loaded config from {}", config_path.display());
            config
        }
        Err(e) => {
            eprintln!("Warning: {e}. Using defaults.");
            GradebookConfig::default()
        }
    }
}
