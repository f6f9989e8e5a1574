//! Interactive shell
//!
//! Runs the menu loop: show the choices, read a selection, collect the
//! selected action's fields, call the student service and print the
//! outcome. The loop ends on Exit or at end of input.

pub mod menu;
pub mod prompt;

pub use menu::{MenuAction, MENU};
pub use prompt::{FieldAnswers, FieldRequest};

use std::io::{BufRead, Write};

use tracing::{debug, info};

use crate::config::Settings;
use crate::display;
use crate::error::{RosterError, RosterResult};
use crate::models::Money;
use crate::services::StudentService;
use crate::storage::Roster;

/// How a shell session ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShellExit {
    /// The user chose Exit
    Requested,
    /// Input ran out
    EndOfInput,
}

/// The interactive menu loop over a roster
pub struct Shell<R, W> {
    input: R,
    output: W,
    roster: Roster,
    settings: Settings,
}

impl<R: BufRead, W: Write> Shell<R, W> {
    /// Create a shell with an empty roster built from `settings`
    pub fn new(input: R, output: W, settings: Settings) -> Self {
        Self {
            input,
            output,
            roster: Roster::with_settings(&settings),
            settings,
        }
    }

    /// The roster as it stands
    pub fn roster(&self) -> &Roster {
        &self.roster
    }

    /// Consume the shell, returning its output sink
    pub fn into_output(self) -> W {
        self.output
    }

    /// Print the banner (if enabled) and run until Exit or end of input
    pub fn run(&mut self) -> RosterResult<ShellExit> {
        if self.settings.show_banner {
            write!(
                self.output,
                "{}",
                display::format_banner(self.settings.separator_width)
            )?;
        }

        loop {
            write!(self.output, "{}> ", menu::format_menu())?;
            self.output.flush()?;

            let Some(line) = prompt::read_line(&mut self.input)? else {
                debug!("input closed at menu");
                return Ok(ShellExit::EndOfInput);
            };

            let Some(action) = menu::parse_selection(&line) else {
                debug!(selection = %line, "unrecognized menu selection");
                writeln!(
                    self.output,
                    "{}",
                    display::format_invalid_choice(&line, MENU.len())
                )?;
                continue;
            };

            let fields = prompt::fields_for(action);
            let Some(answers) = prompt::ask(&mut self.input, &mut self.output, fields)? else {
                debug!(?action, "input closed while prompting");
                return Ok(ShellExit::EndOfInput);
            };

            let message = self.dispatch(action, &answers);
            write!(self.output, "{}", message)?;
            self.output.flush()?;

            if action == MenuAction::Exit {
                info!(students = self.roster.len(), "exit requested");
                return Ok(ShellExit::Requested);
            }
        }
    }

    /// Perform one action on a full batch of answers, returning what to print
    pub fn dispatch(&mut self, action: MenuAction, answers: &FieldAnswers) -> String {
        let mut service = StudentService::new(&mut self.roster);

        let outcome = match action {
            MenuAction::AddStudent => service
                .create(answers.get(FieldRequest::Name))
                .map(|student| display::format_added(&student)),
            MenuAction::EnrollStudent => {
                let course = answers.get(FieldRequest::Course);
                service
                    .resolve(answers.get(FieldRequest::StudentId))
                    .and_then(|id| service.enroll(id, course))
                    .map(|student| display::format_enrolled(&student, course))
            }
            MenuAction::ViewBalance => service
                .resolve(answers.get(FieldRequest::StudentId))
                .and_then(|id| service.balance(id))
                .map(|summary| display::format_balance(&summary)),
            MenuAction::PayFees => {
                let raw_amount = answers.get(FieldRequest::Amount);
                service
                    .resolve(answers.get(FieldRequest::StudentId))
                    .and_then(|id| match Money::parse(raw_amount) {
                        Ok(amount) => service
                            .pay_fees(id, amount)
                            .map(|receipt| display::format_payment(&receipt)),
                        Err(e) => {
                            debug!(error = %e, "fees amount rejected");
                            Ok(display::format_invalid_amount(raw_amount))
                        }
                    })
            }
            MenuAction::ShowStatus => service
                .resolve(answers.get(FieldRequest::StudentId))
                .and_then(|id| service.status(id))
                .map(|student| display::format_status(&student)),
            MenuAction::Exit => Ok(display::FAREWELL_MESSAGE.to_string()),
        };

        outcome_line(outcome)
    }
}

/// Turn an action outcome into printable text ending in a newline
fn outcome_line(outcome: RosterResult<String>) -> String {
    let mut text = match outcome {
        Ok(text) => text,
        Err(RosterError::NotFound { .. }) => display::NOT_FOUND_MESSAGE.to_string(),
        Err(e) => e.to_string(),
    };
    if !text.ends_with('\n') {
        text.push('\n');
    }
    text
}
