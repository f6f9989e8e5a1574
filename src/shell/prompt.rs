//! Prompted input fields
//!
//! Each menu action declares the fields it needs as an ordered list. The
//! shell asks for all of them first and only then parses the batch.

use std::io::{BufRead, Write};

use tracing::trace;

use super::menu::MenuAction;
use crate::error::RosterResult;

/// One value the user is asked to type
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldRequest {
    Name,
    StudentId,
    Course,
    Amount,
}

impl FieldRequest {
    /// Key the answer is stored under
    pub fn key(&self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::StudentId => "studentId",
            Self::Course => "course",
            Self::Amount => "amount",
        }
    }

    /// Prompt shown before reading the answer
    pub fn message(&self) -> &'static str {
        match self {
            Self::Name => "Enter student name",
            Self::StudentId => "Enter student ID",
            Self::Course => "Enter course name",
            Self::Amount => "Enter fees amount",
        }
    }
}

/// Fields requested by each action, in the order they are asked
pub fn fields_for(action: MenuAction) -> &'static [FieldRequest] {
    match action {
        MenuAction::AddStudent => &[FieldRequest::Name],
        MenuAction::EnrollStudent => &[FieldRequest::StudentId, FieldRequest::Course],
        MenuAction::ViewBalance | MenuAction::ShowStatus => &[FieldRequest::StudentId],
        MenuAction::PayFees => &[FieldRequest::StudentId, FieldRequest::Amount],
        MenuAction::Exit => &[],
    }
}

/// Raw answers collected for one action
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldAnswers {
    answers: Vec<(FieldRequest, String)>,
}

impl FieldAnswers {
    /// Record an answer
    pub fn insert(&mut self, field: FieldRequest, value: impl Into<String>) {
        self.answers.push((field, value.into()));
    }

    /// Get the answer for a field, or an empty string if it was not asked
    pub fn get(&self, field: FieldRequest) -> &str {
        self.answers
            .iter()
            .find(|(f, _)| *f == field)
            .map(|(_, v)| v.as_str())
            .unwrap_or("")
    }
}

/// Read one line, without its line ending. `None` at end of input.
pub fn read_line<R: BufRead>(input: &mut R) -> RosterResult<Option<String>> {
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }

    let trimmed_len = line.trim_end_matches(['\n', '\r']).len();
    line.truncate(trimmed_len);
    trace!(line = %line, "read input");
    Ok(Some(line))
}

/// Ask every field in order and collect the answers
///
/// Returns `None` if input ends before all fields are answered.
pub fn ask<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    fields: &[FieldRequest],
) -> RosterResult<Option<FieldAnswers>> {
    let mut answers = FieldAnswers::default();

    for field in fields {
        write!(output, "? {}: ", field.message())?;
        output.flush()?;

        match read_line(input)? {
            Some(value) => {
                trace!(field = field.key(), "field answered");
                answers.insert(*field, value);
            }
            None => return Ok(None),
        }
    }

    Ok(Some(answers))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_fields_for_actions() {
        assert_eq!(fields_for(MenuAction::AddStudent), &[FieldRequest::Name]);
        assert_eq!(
            fields_for(MenuAction::PayFees),
            &[FieldRequest::StudentId, FieldRequest::Amount]
        );
        assert!(fields_for(MenuAction::Exit).is_empty());
    }

    #[test]
    fn test_read_line_strips_line_endings() {
        let mut input = Cursor::new("Ada\r\nBob\n\nlast");
        assert_eq!(read_line(&mut input).unwrap().as_deref(), Some("Ada"));
        assert_eq!(read_line(&mut input).unwrap().as_deref(), Some("Bob"));
        assert_eq!(read_line(&mut input).unwrap().as_deref(), Some(""));
        assert_eq!(read_line(&mut input).unwrap().as_deref(), Some("last"));
        assert_eq!(read_line(&mut input).unwrap(), None);
    }

    #[test]
    fn test_ask_collects_in_order() {
        let mut input = Cursor::new("10000\nPhysics\n");
        let mut output = Vec::new();

        let answers = ask(
            &mut input,
            &mut output,
            fields_for(MenuAction::EnrollStudent),
        )
        .unwrap()
        .unwrap();

        let mut expected = FieldAnswers::default();
        expected.insert(FieldRequest::StudentId, "10000");
        expected.insert(FieldRequest::Course, "Physics");
        assert_eq!(answers, expected);
        assert_eq!(answers.get(FieldRequest::StudentId), "10000");
        assert_eq!(answers.get(FieldRequest::Course), "Physics");
        assert_eq!(answers.get(FieldRequest::Amount), "");
        assert_eq!(
            String::from_utf8(output).unwrap(),
            "? Enter student ID: ? Enter course name: "
        );
    }

    #[test]
    fn test_ask_stops_at_end_of_input() {
        let mut input = Cursor::new("10000\n");
        let mut output = Vec::new();

        let answers = ask(&mut input, &mut output, fields_for(MenuAction::PayFees)).unwrap();
        assert!(answers.is_none());
    }

    #[test]
    fn test_field_keys() {
        assert_eq!(FieldRequest::StudentId.key(), "studentId");
        assert_eq!(FieldRequest::Amount.message(), "Enter fees amount");
    }
}
