//! In-memory student roster
//!
//! Owns every student record in insertion order together with the counter
//! for the next id to assign.

use crate::config::Settings;
use crate::error::{RosterError, RosterResult};
use crate::models::{Money, Student, StudentId};

/// Insertion-ordered collection of students plus the id counter
///
/// Every stored id is unique and strictly less than `next_id`. Once the
/// id at the top of the range is issued, `next_id` is `None`.
#[derive(Debug, Clone)]
pub struct Roster {
    students: Vec<Student>,
    next_id: Option<StudentId>,
    opening_balance: Money,
}

impl Roster {
    /// Create an empty roster with default settings
    pub fn new() -> Self {
        Self::with_settings(&Settings::default())
    }

    /// Create an empty roster starting at the configured id and balance
    pub fn with_settings(settings: &Settings) -> Self {
        Self {
            students: Vec::new(),
            next_id: Some(settings.first_id),
            opening_balance: settings.opening_balance,
        }
    }

    /// Add a new student and return the stored record
    ///
    /// Fails once every id in the range has been issued.
    pub fn create_student(&mut self, name: impl Into<String>) -> RosterResult<&Student> {
        let id = self.next_id.ok_or(RosterError::IdsExhausted { last_id: u32::MAX })?;
        self.next_id = id.next();

        let index = self.students.len();
        self.students.push(Student::new(id, name, self.opening_balance));
        Ok(&self.students[index])
    }

    /// Get a student by ID
    pub fn find_by_id(&self, id: StudentId) -> Option<&Student> {
        self.students.iter().find(|s| s.id == id)
    }

    /// Get a student by ID for mutation
    pub fn find_by_id_mut(&mut self, id: StudentId) -> Option<&mut Student> {
        self.students.iter_mut().find(|s| s.id == id)
    }

    /// The id the next created student will receive, if any are left
    pub fn next_id(&self) -> Option<StudentId> {
        self.next_id
    }

    /// Number of students on the roster
    pub fn len(&self) -> usize {
        self.students.len()
    }

    /// Check if the roster has no students
    pub fn is_empty(&self) -> bool {
        self.students.is_empty()
    }
}

impl Default for Roster {
    fn default() -> Self {
        Self::new()
    }
}
