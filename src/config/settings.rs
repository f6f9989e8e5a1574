//! Runtime settings for Aeyla
//!
//! Nothing is read from disk. Settings start from the defaults below and
//! may be overridden from the command line.

use crate::error::RosterError;
use crate::models::{Money, StudentId};

/// Runtime settings
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    /// First id assigned by a fresh roster
    pub first_id: StudentId,

    /// Balance every new student starts with
    pub opening_balance: Money,

    /// Number of dashes under the startup banner
    pub separator_width: usize,

    /// Whether the startup banner is printed
    pub show_banner: bool,
}

fn default_opening_balance() -> Money {
    Money::from_dollars(100)
}

fn default_separator_width() -> usize {
    50
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            first_id: StudentId::default(),
            opening_balance: default_opening_balance(),
            separator_width: default_separator_width(),
            show_banner: true,
        }
    }
}

impl Settings {
    /// Override the first assigned id
    pub fn with_first_id(mut self, first_id: StudentId) -> Self {
        self.first_id = first_id;
        self
    }

    /// Override the opening balance of new students
    pub fn with_opening_balance(mut self, opening_balance: Money) -> Self {
        self.opening_balance = opening_balance;
        self
    }

    /// Enable or disable the startup banner
    pub fn with_banner(mut self, show_banner: bool) -> Self {
        self.show_banner = show_banner;
        self
    }

    /// Check that the settings are usable
    pub fn validate(&self) -> Result<(), RosterError> {
        if self.separator_width == 0 {
            return Err(RosterError::Validation(
                "Separator width must be at least 1".into(),
            ));
        }

        Ok(())
    }
}
