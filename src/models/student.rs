//! Student model
//!
//! A student record: id, name, enrolled courses and outstanding balance.

use super::ids::StudentId;
use super::money::Money;

/// Separator used when listing a student's courses
pub const COURSE_SEPARATOR: &str = ", ";

/// A student on the roster
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Student {
    /// Sequential identifier, fixed at creation
    pub id: StudentId,

    /// Name as typed at creation (may be empty)
    pub name: String,

    /// Courses in enrollment order; duplicates allowed
    pub courses: Vec<String>,

    /// Outstanding fees. Has no floor and may go negative.
    pub balance: Money,
}

impl Student {
    /// Create a new student with no courses
    pub fn new(id: StudentId, name: impl Into<String>, opening_balance: Money) -> Self {
        Self {
            id,
            name: name.into(),
            courses: Vec::new(),
            balance: opening_balance,
        }
    }

    /// Append a course, verbatim
    pub fn enroll(&mut self, course: impl Into<String>) {
        self.courses.push(course.into());
    }

    /// Deduct a payment from the balance, returning the new balance
    ///
    /// Returns `None` and leaves the balance untouched if the result would
    /// not fit in a `Money`.
    pub fn pay_fees(&mut self, amount: Money) -> Option<Money> {
        let balance = self.balance.checked_sub(amount)?;
        self.balance = balance;
        Some(balance)
    }

    /// Courses joined for display
    pub fn courses_joined(&self) -> String {
        self.courses.join(COURSE_SEPARATOR)
    }
}
