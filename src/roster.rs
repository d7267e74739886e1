//! The in-memory record store.

use crate::core::Student;

/// Ordered, mutable collection of students.
///
/// Insertion order is preserved and duplicates (by name or score) are
/// permitted. The roster owns its records exclusively; `snapshot` hands out
/// an independent copy, so nothing a caller does to the copy can reorder or
/// mutate the store.
#[derive(Debug, Clone, Default)]
pub struct Roster {
    records: Vec<Student>,
}

impl Roster {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a record to the end of the roster.
    pub fn append(&mut self, student: Student) {
        self.records.push(student);
    }

    /// Removes all records.
    pub fn clear(&mut self) {
        self.records.clear();
    }

    /// Returns an independent copy of the current contents, O(n).
    pub fn snapshot(&self) -> Vec<Student> {
        self.records.clone()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Student> {
        self.records.iter()
    }
}
