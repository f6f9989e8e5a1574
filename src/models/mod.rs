//! Core data models for Aeyla
//!
//! This module contains the data structures that represent the roster
//! domain: student ids, money amounts and student records.

pub mod ids;
pub mod money;
pub mod student;

pub use ids::{StudentId, FIRST_STUDENT_ID};
pub use money::{Money, MoneyParseError};
pub use student::Student;
