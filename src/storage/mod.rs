//! Storage layer for Aeyla
//!
//! Records live in memory for the lifetime of the process; nothing is
//! persisted.

pub mod roster;

pub use roster::Roster;
