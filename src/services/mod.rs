//! Service layer for Aeyla
//!
//! The service layer provides the student operations on top of the
//! in-memory roster, reporting unknown ids as typed errors.

pub mod student;

pub use student::{BalanceSummary, PaymentReceipt, StudentService};
