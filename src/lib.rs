// Export modules for library usage
pub mod cli;
pub mod commands;
pub mod config;
pub mod core;
pub mod formatting;
pub mod io;
pub mod roster;
pub mod session;
pub mod sort;

// Re-export commonly used types
pub use crate::core::{InputError, SortDirection, Student};

pub use crate::formatting::{render_roster, ColorMode, ColoredFormatter, FormattingConfig};

pub use crate::io::output::{create_writer, OutputFormat, OutputWriter, RosterReport};

pub use crate::roster::Roster;

pub use crate::session::{default_seed, Session};

pub use crate::sort::insertion_sort;
