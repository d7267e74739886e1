//! The controller: validates raw input and drives the roster.

use crate::core::{InputError, SortDirection, Student};
use crate::formatting::render_roster;
use crate::roster::Roster;
use crate::sort::insertion_sort;

/// The five students loaded at startup when no custom seed is configured.
pub fn default_seed() -> Vec<Student> {
    vec![
        Student::new("Ava", 91.5),
        Student::new("Noah", 73.0),
        Student::new("Mia", 88.25),
        Student::new("Liam", 95.0),
        Student::new("Emma", 82.0),
    ]
}

/// Owns the roster and exposes the synchronous entry points the front end
/// calls. Every operation completes before returning and every successful
/// operation returns a render-ready text block.
///
/// All mutation goes through `on_add` and `on_clear`; validation failures
/// leave the roster untouched.
#[derive(Debug, Default)]
pub struct Session {
    roster: Roster,
}

impl Session {
    /// Creates a session with an empty roster.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a session pre-populated with the given records.
    pub fn from_seed(seed: Vec<Student>) -> Self {
        let mut roster = Roster::new();
        for student in seed {
            roster.append(student);
        }
        Self { roster }
    }

    /// Creates a session with the default five students.
    pub fn seeded() -> Self {
        Self::from_seed(default_seed())
    }

    /// Validates raw input and appends a record on success.
    ///
    /// Returns the current (unsorted) roster rendered under "Added: <name>".
    /// On any validation failure the roster is left exactly as it was.
    pub fn on_add(&mut self, name: &str, score_text: &str) -> Result<String, InputError> {
        let name = name.trim();
        let score_text = score_text.trim();

        if name.is_empty() || score_text.is_empty() {
            return Err(InputError::MissingField);
        }

        let score: f64 = score_text.parse().map_err(|_| InputError::NotANumber)?;
        // f64::from_str accepts "nan" and "inf"; neither is a usable score
        if !score.is_finite() {
            return Err(InputError::NotANumber);
        }

        if !(0.0..=100.0).contains(&score) {
            return Err(InputError::OutOfRange);
        }

        self.roster.append(Student::new(name, score));
        Ok(render_roster(
            &self.roster.snapshot(),
            &format!("Added: {name}"),
        ))
    }

    /// Renders the roster sorted in the given direction.
    ///
    /// Works on a snapshot; the store's own order is unchanged no matter how
    /// many sorts are performed.
    pub fn on_sort(&self, direction: SortDirection) -> String {
        let sorted = insertion_sort(self.roster.snapshot(), direction);
        render_roster(&sorted, direction.title())
    }

    /// Empties the roster.
    pub fn on_clear(&mut self) -> String {
        self.roster.clear();
        render_roster(&self.roster.snapshot(), "Cleared all students.")
    }

    /// Renders the roster in insertion order under the given title.
    pub fn render_current(&self, title: &str) -> String {
        render_roster(&self.roster.snapshot(), title)
    }

    pub fn roster(&self) -> &Roster {
        &self.roster
    }
}
