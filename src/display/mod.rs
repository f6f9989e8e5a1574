//! Display formatting for terminal output
//!
//! Provides the console messages printed by the interactive shell.

pub mod student;

pub use student::{
    format_added, format_balance, format_banner, format_enrolled, format_invalid_amount,
    format_invalid_choice, format_payment, format_status, FAREWELL_MESSAGE, NOT_FOUND_MESSAGE,
};
