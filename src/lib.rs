//! Aeyla - Student Management System
//!
//! This library provides the core functionality behind the `aeyla` binary:
//! an interactive console menu over an in-memory roster of students.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Runtime settings (first id, opening balance, banner)
//! - `error`: Custom error types
//! - `models`: Core data models (student ids, money, student records)
//! - `storage`: The in-memory roster and its id counter
//! - `services`: Student operations on top of the roster
//! - `display`: Console message formatting
//! - `shell`: The interactive menu loop
//!
//! # Example
//!
//! ```rust
//! use aeyla::services::StudentService;
//! use aeyla::storage::Roster;
//!
//! let mut roster = Roster::new();
//! let mut service = StudentService::new(&mut roster);
//! let ada = service.create("Ada").unwrap();
//! assert_eq!(ada.id.value(), 10000);
//! ```

pub mod config;
pub mod display;
pub mod error;
pub mod models;
pub mod services;
pub mod shell;
pub mod storage;

pub use error::RosterError;
