//! Core value types shared across the crate.

use serde::{Deserialize, Serialize};

/// One roster entry: a student name paired with a score.
///
/// Fields never change after construction; editing a roster entry means
/// replacing it, not mutating it. Scores are constrained to [0, 100] by the
/// validating caller (see `Session::on_add`), not by this type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Student {
    pub name: String,
    pub score: f64,
}

impl Student {
    pub fn new(name: impl Into<String>, score: f64) -> Self {
        Self {
            name: name.into(),
            score,
        }
    }
}

/// Direction of a roster sort.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    Ascending,
    Descending,
}

impl SortDirection {
    /// Title used when rendering the sorted roster.
    pub fn title(&self) -> &'static str {
        match self {
            Self::Ascending => "Ascending",
            Self::Descending => "Descending",
        }
    }

    pub fn is_ascending(&self) -> bool {
        matches!(self, Self::Ascending)
    }
}
