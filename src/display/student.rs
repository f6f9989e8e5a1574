//! Student display formatting
//!
//! Every line the shell prints about students is built here so the exact
//! wording lives in one place.

use crate::models::Student;
use crate::services::{BalanceSummary, PaymentReceipt};

/// Printed whenever an id matches no student
pub const NOT_FOUND_MESSAGE: &str = "Student not found. Please enter a correct student ID";

/// Printed when the user chooses Exit
pub const FAREWELL_MESSAGE: &str = "Exiting the program...";

const BANNER_TITLE: &str = "Welcome to 'Aeyla' - Student Management System";

/// Format the startup banner: title line, then a dashed separator
pub fn format_banner(separator_width: usize) -> String {
    format!("{}\n{}\n", BANNER_TITLE, "-".repeat(separator_width))
}

/// Format the confirmation for a newly added student
pub fn format_added(student: &Student) -> String {
    format!("New student added with ID: {}", student.id)
}

/// Format the confirmation for an enrollment
pub fn format_enrolled(student: &Student, course: &str) -> String {
    format!("{} enrolled in {} successfully", student.name, course)
}

/// Format a balance query result
pub fn format_balance(summary: &BalanceSummary) -> String {
    format!("Balance for {}: ${}", summary.name, summary.balance)
}

/// Format the confirmation for a fee payment
pub fn format_payment(receipt: &PaymentReceipt) -> String {
    format!("${} fees paid successfully for {}", receipt.amount, receipt.name)
}

/// Format a student's full status block
pub fn format_status(student: &Student) -> String {
    let mut output = String::new();

    output.push_str(&format!("ID: {}\n", student.id));
    output.push_str(&format!("Name: {}\n", student.name));
    output.push_str(&format!("Courses: {}\n", student.courses_joined()));
    output.push_str(&format!("Balance: ${}\n", student.balance));

    output
}

/// Format the rejection of a fee amount that is not a number
pub fn format_invalid_amount(input: &str) -> String {
    format!("Invalid fees amount: {}", input.trim())
}

/// Format the rejection of an unknown menu selection
pub fn format_invalid_choice(input: &str, choice_count: usize) -> String {
    format!(
        "Invalid option: {}. Please select 1-{}",
        input.trim(),
        choice_count
    )
}
